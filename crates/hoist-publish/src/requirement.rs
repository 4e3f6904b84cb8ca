//! Per-task property requirements, checked just before a task runs.

use std::collections::BTreeMap;

use hoist_core::config::USER_PROPERTIES_DISPLAY;
use hoist_core::properties::{PropertySnapshot, ENV_PROPERTY_PREFIX};
use hoist_util::errors::HoistError;

/// A property that must be present before a task may execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub property: String,
}

impl Requirement {
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            property: name.into(),
        }
    }
}

/// Requirements registered per task name, kept in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRequirements {
    by_task: BTreeMap<String, Vec<Requirement>>,
}

impl TaskRequirements {
    /// Register `properties` as required by `task`. Duplicates are dropped.
    pub fn require(&mut self, task: &str, properties: &[&str]) {
        let list = self.by_task.entry(task.to_string()).or_default();
        for property in properties {
            if !list.iter().any(|r| r.property == *property) {
                list.push(Requirement::property(*property));
            }
        }
    }

    pub fn for_task(&self, task: &str) -> &[Requirement] {
        self.by_task.get(task).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.by_task.keys().map(String::as_str)
    }
}

/// Check every requirement of `task`; the first absent property fails.
pub fn validate(
    properties: &PropertySnapshot,
    task: &str,
    requirements: &[Requirement],
) -> Result<(), HoistError> {
    match missing(properties, requirements).first() {
        Some(req) => Err(HoistError::MissingProperty {
            property: req.property.clone(),
            task: task.to_string(),
            file: USER_PROPERTIES_DISPLAY.to_string(),
            prefix: ENV_PROPERTY_PREFIX.to_string(),
        }),
        None => Ok(()),
    }
}

/// Requirements whose property is currently absent.
pub fn missing<'a>(
    properties: &PropertySnapshot,
    requirements: &'a [Requirement],
) -> Vec<&'a Requirement> {
    requirements
        .iter()
        .filter(|r| !properties.contains(&r.property))
        .collect()
}

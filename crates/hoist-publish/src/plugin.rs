//! The publish plugin lifecycle.
//!
//! Applying the plugin is split in two phases:
//!
//! 1. [`PublishPlugin::configure`] registers tasks and their property
//!    requirements from what is known up front (the `[publish]` section and
//!    the applied components). Nothing is resolved or validated yet.
//! 2. [`ConfiguredPlugin::finalize`] runs once against the complete
//!    [`BuildSnapshot`]: structural checks, target resolution, publications,
//!    signing and staging. It consumes the configured plugin.
//!
//! Task requirements are only checked by [`FinalizedPlan::before_task`], so
//! a missing credential fails the task that needs it and nothing else.

use hoist_core::components::{Components, JAVA_LIBRARY};
use hoist_core::manifest::PublishConfig;
use hoist_core::properties::PropertySnapshot;
use hoist_core::snapshot::BuildSnapshot;
use hoist_util::errors::HoistError;
use tracing::{debug, info};

use crate::keys;
use crate::pom::PomMetadata;
use crate::publication::{self, Publication, JAVA_LIBRARY_PUBLICATION};
use crate::requirement::{self, Requirement, TaskRequirements};
use crate::resolver::{resolve, ResolutionResult};
use crate::signing::{SigningPlan, SigningSetup};
use crate::staging::StagingConfig;
use crate::structural;
use crate::tasks;

pub struct PublishPlugin;

impl PublishPlugin {
    pub fn configure(publish: &PublishConfig, components: &Components) -> ConfiguredPlugin {
        let maven_central = publish.maven_central.is_some();
        let mut registered = vec![tasks::PUBLISH.to_string()];
        let mut requirements = TaskRequirements::default();

        if publication::has_java_library(components, maven_central) {
            registered.push(tasks::GENERATE_POM.to_string());
        }

        if publish.artifactory.is_some() {
            requirements.require(
                tasks::PUBLISH,
                &[
                    keys::ARTIFACTORY_CONTEXT_URL,
                    keys::ARTIFACTORY_USER,
                    keys::ARTIFACTORY_PASSWORD,
                ],
            );
        }

        // Sonatype uploads and staging only attach to a Java library.
        if maven_central && components.has(JAVA_LIBRARY) {
            let ossrh = [keys::OSSRH_USERNAME, keys::OSSRH_PASSWORD];
            requirements.require(tasks::PUBLISH, &ossrh);
            for task in tasks::STAGING_TASKS {
                registered.push(task.to_string());
                requirements.require(task, &ossrh);
            }
        }

        debug!(tasks = registered.len(), maven_central, "publish plugin configured");
        ConfiguredPlugin {
            tasks: registered,
            requirements,
            maven_central,
        }
    }
}

/// Tasks and requirements registered, awaiting the finalized snapshot.
#[derive(Debug, Clone)]
pub struct ConfiguredPlugin {
    tasks: Vec<String>,
    requirements: TaskRequirements,
    maven_central: bool,
}

impl ConfiguredPlugin {
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn requirements(&self) -> &TaskRequirements {
        &self.requirements
    }

    /// Validate structure and assemble the publish plan.
    pub fn finalize(self, snapshot: &BuildSnapshot) -> Result<FinalizedPlan, HoistError> {
        structural::check(snapshot)?;

        let targets = resolve(snapshot);
        let pom = PomMetadata::assemble(snapshot);
        let publications = publication::plan(&snapshot.components, self.maven_central, &pom);

        let signing = if self.maven_central
            && publications
                .iter()
                .any(|p| p.name == JAVA_LIBRARY_PUBLICATION)
        {
            Some(SigningPlan {
                setup: SigningSetup::from_properties(&snapshot.properties),
                publication: JAVA_LIBRARY_PUBLICATION.to_string(),
            })
        } else {
            None
        };

        let staging = StagingConfig::from_snapshot(snapshot);

        info!(
            project = %snapshot.project.name,
            version = %snapshot.project.version,
            targets = targets.len(),
            publications = publications.len(),
            "publish plan finalized"
        );

        Ok(FinalizedPlan {
            targets,
            publications,
            signing,
            staging,
            tasks: self.tasks,
            requirements: self.requirements,
            properties: snapshot.properties.clone(),
        })
    }
}

/// The publish configuration of one invocation, fixed after finalization.
#[derive(Debug, Clone)]
pub struct FinalizedPlan {
    pub targets: ResolutionResult,
    pub publications: Vec<Publication>,
    pub signing: Option<SigningPlan>,
    pub staging: Option<StagingConfig>,
    tasks: Vec<String>,
    requirements: TaskRequirements,
    properties: PropertySnapshot,
}

impl FinalizedPlan {
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn requirements_for(&self, task: &str) -> &[Requirement] {
        self.requirements.for_task(task)
    }

    pub fn publication(&self, name: &str) -> Option<&Publication> {
        self.publications.iter().find(|p| p.name == name)
    }

    /// Check the requirements of `task` right before it executes.
    pub fn before_task(&self, task: &str) -> Result<(), HoistError> {
        if !self.tasks.iter().any(|t| t == task) {
            return Err(HoistError::UnknownTask {
                task: task.to_string(),
            });
        }
        requirement::validate(&self.properties, task, self.requirements.for_task(task))
    }

    /// Registered tasks that would currently fail their preflight, with the
    /// missing properties.
    pub fn blocked_tasks(&self) -> Vec<(&str, Vec<&Requirement>)> {
        self.tasks
            .iter()
            .filter_map(|task| {
                let missing =
                    requirement::missing(&self.properties, self.requirements.for_task(task));
                (!missing.is_empty()).then_some((task.as_str(), missing))
            })
            .collect()
    }
}

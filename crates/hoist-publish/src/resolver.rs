//! Publish target resolution.

use hoist_core::snapshot::BuildSnapshot;
use serde::Serialize;
use tracing::debug;

use crate::repository::PublishTarget;
use crate::source::CandidateSource;

/// Active publish targets, in source priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub targets: Vec<PublishTarget>,
}

impl ResolutionResult {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn get(&self, name: &str) -> Option<&PublishTarget> {
        self.targets.iter().find(|t| t.name == name)
    }
}

/// Evaluate every candidate source and keep the active ones.
///
/// Pure: the same snapshot always yields the same result. No active source
/// is not an error; tasks that need a repository fail their own preflight.
pub fn resolve(snapshot: &BuildSnapshot) -> ResolutionResult {
    let mut targets = Vec::new();
    for source in CandidateSource::PRIORITY {
        match source.evaluate(snapshot) {
            Some(target) => {
                debug!(
                    source = source.id(),
                    url = %target.url,
                    auth = target.has_auth(),
                    "publish target active"
                );
                targets.push(target);
            }
            None => debug!(source = source.id(), "publish target inactive"),
        }
    }
    ResolutionResult { targets }
}

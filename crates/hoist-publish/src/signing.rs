//! Signing setup for Maven Central publications.
//!
//! Only the choice of signatory is made here; producing signatures belongs
//! to whatever performs the upload.

use hoist_core::properties::PropertySnapshot;
use serde::Serialize;

use crate::keys;

/// How publications will be signed.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SigningSetup {
    /// ASCII-armored key material supplied through properties.
    InMemory {
        key_id: Option<String>,
        #[serde(skip_serializing)]
        key: String,
        #[serde(skip_serializing)]
        password: String,
    },
    /// Fall back to the signatory configured on the machine (e.g. a gpg agent).
    Default,
}

impl SigningSetup {
    pub fn from_properties(props: &PropertySnapshot) -> Self {
        match (props.get(keys::SIGNING_KEY), props.get(keys::SIGNING_PASSWORD)) {
            (Some(key), Some(password)) => SigningSetup::InMemory {
                key_id: props.get(keys::SIGNING_KEY_ID).map(str::to_string),
                key: key.to_string(),
                password: password.to_string(),
            },
            _ => SigningSetup::Default,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SigningSetup::InMemory { key_id: Some(id), .. } => format!("in-memory key {id}"),
            SigningSetup::InMemory { key_id: None, .. } => "in-memory key".to_string(),
            SigningSetup::Default => "default signatory".to_string(),
        }
    }
}

impl std::fmt::Debug for SigningSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SigningSetup::InMemory { key_id, .. } => f
                .debug_struct("InMemory")
                .field("key_id", key_id)
                .finish_non_exhaustive(),
            SigningSetup::Default => f.write_str("Default"),
        }
    }
}

/// Signing applied to one publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningPlan {
    pub setup: SigningSetup,
    pub publication: String,
}

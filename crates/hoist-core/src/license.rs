use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// License classification of a published library.
///
/// Closed set; anything else in `Hoist.toml` is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "APACHE_2_0")]
    Apache2,
    #[serde(rename = "AGPL_V3")]
    AgplV3,
    #[serde(rename = "PROPRIETARY")]
    Proprietary,
    #[serde(rename = "TRACEABLE_COMMUNITY")]
    TraceableCommunity,
}

impl License {
    pub const ALL: [License; 4] = [
        License::Apache2,
        License::AgplV3,
        License::Proprietary,
        License::TraceableCommunity,
    ];

    /// Identifier as written in `Hoist.toml`.
    pub fn key(&self) -> &'static str {
        match self {
            License::Apache2 => "APACHE_2_0",
            License::AgplV3 => "AGPL_V3",
            License::Proprietary => "PROPRIETARY",
            License::TraceableCommunity => "TRACEABLE_COMMUNITY",
        }
    }

    /// Name used in the POM `<license><name>` element.
    pub fn display_name(&self) -> &'static str {
        match self {
            License::Apache2 => "Apache-2.0",
            License::AgplV3 => "AGPL-V3",
            License::Proprietary => "Proprietary",
            License::TraceableCommunity => "Traceable",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for License {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| format!("unknown license '{s}'"))
    }
}

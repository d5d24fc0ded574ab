//! Solutions (v1).

use serde::{Deserialize, Serialize};

/// Numeric solution identifier.
pub type SolutionID = i64;

/// A customer solution: the v1 grouping of virtual machines and templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub id: SolutionID,

    pub name: String,

    pub environment: SolutionEnvironment,

    /// Pod hosting the solution.
    #[serde(default)]
    pub pod_id: Option<i64>,

    #[serde(default)]
    pub encryption_enabled: bool,

    /// Whether new virtual machines are encrypted unless told otherwise.
    #[serde(default)]
    pub encryption_default: bool,
}

/// Hosting environment of a solution.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SolutionEnvironment {
    #[serde(rename = "Hybrid")]
    Hybrid,

    #[serde(rename = "Private")]
    Private,
}
impl std::fmt::Display for SolutionEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SolutionEnvironment::Hybrid => "Hybrid",
                SolutionEnvironment::Private => "Private",
            }
        )
    }
}

//! Virtual machine templates (v1).
//!
//! Templates are addressed by name under either a solution or a pod.

use serde::{Deserialize, Serialize};

/// Templates have no numeric id; the name is the identifier.
pub type TemplateName = String;

/// A reusable virtual machine image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: TemplateName,

    #[serde(default)]
    pub cpu: Option<u32>,

    #[serde(default)]
    pub ram_gb: Option<u32>,

    /// Combined size of all disks.
    #[serde(default)]
    pub size_gb: Option<u64>,

    #[serde(default)]
    pub disks: Vec<TemplateDisk>,

    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub operating_system: Option<String>,

    /// Set for solution templates, absent for pod templates.
    #[serde(default)]
    pub solution_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDisk {
    pub name: String,
    pub capacity_gb: u64,
}

/// Body of a template rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTemplateRequest {
    /// New template name.
    pub destination: String,
}

impl RenameTemplateRequest {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

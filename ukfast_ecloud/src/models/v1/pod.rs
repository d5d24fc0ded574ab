//! Pods (v1): the hosting clusters solutions live on.

use serde::{Deserialize, Serialize};

pub type PodID = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub id: PodID,

    pub name: String,

    /// Services offered by the pod.
    #[serde(default)]
    pub services: PodServices,
}

/// Service flags advertised by a pod.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodServices {
    #[serde(default)]
    pub public: bool,

    #[serde(default)]
    pub burst: bool,

    #[serde(default)]
    pub appliances: bool,
}

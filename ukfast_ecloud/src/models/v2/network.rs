use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NetworkID = String;

/// A subnet behind a router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: NetworkID,

    pub name: String,

    pub router_id: String,

    /// CIDR block, e.g. "10.0.0.0/24".
    #[serde(default)]
    pub subnet: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

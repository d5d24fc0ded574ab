//! Virtual private clouds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// VPC identifier (e.g. "vpc-abcd1234").
pub type VpcID = String;

/// A virtual private cloud; the container for routers, networks and instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vpc {
    pub id: VpcID,

    pub name: String,

    pub region_id: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

//! DHCP configurations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DHCP identifier (e.g. "dhcp-abcd1234").
pub type DhcpID = String;

/// DHCP configuration attached to a VPC in one availability zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dhcp {
    pub id: DhcpID,

    pub name: String,

    /// Owning VPC.
    pub vpc_id: String,

    pub availability_zone_id: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

//! Availability zones.

use serde::{Deserialize, Serialize};

/// Availability zone identifier (e.g. "az-abcd1234").
pub type AvailabilityZoneID = String;

/// A physical failure domain within a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityZone {
    pub id: AvailabilityZoneID,

    pub name: String,

    /// Short code such as "MAN1".
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub datacentre_site_id: Option<i64>,

    /// Region the zone belongs to.
    #[serde(default)]
    pub region_id: Option<String>,
}

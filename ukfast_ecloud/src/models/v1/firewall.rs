//! Dedicated firewalls (v1).

use serde::{Deserialize, Serialize};

/// Numeric firewall identifier.
pub type FirewallID = i64;

/// A dedicated firewall appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firewall {
    pub id: FirewallID,

    pub name: String,

    #[serde(default)]
    pub hostname: Option<String>,

    /// Management address.
    #[serde(default)]
    pub ip: Option<String>,

    /// Position in a high-availability pair.
    pub role: FirewallRole,
}

/// Role of a firewall within an HA pair.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FirewallRole {
    /// Standalone firewall.
    #[serde(rename = "N/A")]
    NotApplicable,

    #[serde(rename = "Master")]
    Master,

    #[serde(rename = "Slave")]
    Slave,
}
impl std::fmt::Display for FirewallRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FirewallRole::NotApplicable => "N/A",
                FirewallRole::Master => "Master",
                FirewallRole::Slave => "Slave",
            }
        )
    }
}

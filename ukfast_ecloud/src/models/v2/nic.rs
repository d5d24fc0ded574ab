//! Network interface cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// NIC identifier (e.g. "nic-abcd1234").
pub type NicID = String;

/// A network interface connecting an instance to a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nic {
    pub id: NicID,

    /// Hardware address, colon separated.
    pub mac_address: String,

    /// Instance the interface is attached to.
    pub instance_id: String,

    pub network_id: String,

    /// Address assigned on the network. Unset until DHCP has run.
    #[serde(default)]
    pub ip_address: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

use serde::{Deserialize, Serialize};

pub type ActiveDirectoryDomainID = i64;

/// An Active Directory domain available to eCloud instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDirectoryDomain {
    pub id: ActiveDirectoryDomainID,
    pub name: String,
}

use serde::{Deserialize, Serialize};

pub type RegionID = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionID,
    pub name: String,
}

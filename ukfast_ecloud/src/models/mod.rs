//! eCloud resource models.
//!
//! v2 resources use opaque string identifiers (`"dhcp-abcd1234"`); v1
//! resources use positive integers.

pub mod v1;
pub mod v2;

pub use self::v1::{
    ActiveDirectoryDomain, ActiveDirectoryDomainID, Firewall, FirewallID, FirewallRole, Pod, PodID,
    PodServices, RenameTemplateRequest, Solution, SolutionEnvironment, SolutionID, Template,
    TemplateDisk, TemplateName,
};
pub use self::v2::{
    AvailabilityZone, AvailabilityZoneID, Dhcp, DhcpID, Network, NetworkID, Nic, NicID, Region,
    RegionID, Vpc, VpcID,
};

//! Endpoint descriptors, one zero-sized type per eCloud collection.

use crate::models::{
    ActiveDirectoryDomain, AvailabilityZone, Dhcp, Firewall, Network, Nic, Pod, Region,
    RenameTemplateRequest, Solution, Template, Vpc,
};
use crate::operations::{Endpoint, NestedEndpoint, RenamableEndpoint};

pub struct AvailabilityZones;

impl Endpoint for AvailabilityZones {
    type Item = AvailabilityZone;
    type Id = str;
    const LABEL: &'static str = "availability zone";
    const PATH: &'static str = "/ecloud/v2/availability-zones";
}

pub struct Dhcps;

impl Endpoint for Dhcps {
    type Item = Dhcp;
    type Id = str;
    const LABEL: &'static str = "DHCP";
    const PATH: &'static str = "/ecloud/v2/dhcps";
}

pub struct Networks;

impl Endpoint for Networks {
    type Item = Network;
    type Id = str;
    const LABEL: &'static str = "network";
    const PATH: &'static str = "/ecloud/v2/networks";
}

pub struct Nics;

impl Endpoint for Nics {
    type Item = Nic;
    type Id = str;
    const LABEL: &'static str = "NIC";
    const PATH: &'static str = "/ecloud/v2/nics";
}

pub struct Regions;

impl Endpoint for Regions {
    type Item = Region;
    type Id = str;
    const LABEL: &'static str = "region";
    const PATH: &'static str = "/ecloud/v2/regions";
}

pub struct Vpcs;

impl Endpoint for Vpcs {
    type Item = Vpc;
    type Id = str;
    const LABEL: &'static str = "VPC";
    const PATH: &'static str = "/ecloud/v2/vpcs";
}

pub struct Firewalls;

impl Endpoint for Firewalls {
    type Item = Firewall;
    type Id = i64;
    const LABEL: &'static str = "firewall";
    const PATH: &'static str = "/ecloud/v1/firewalls";
}

pub struct ActiveDirectoryDomains;

impl Endpoint for ActiveDirectoryDomains {
    type Item = ActiveDirectoryDomain;
    type Id = i64;
    const LABEL: &'static str = "domain";
    const PATH: &'static str = "/ecloud/v1/active-directory/domains";
}

pub struct Solutions;

impl Endpoint for Solutions {
    type Item = Solution;
    type Id = i64;
    const LABEL: &'static str = "solution";
    const PATH: &'static str = "/ecloud/v1/solutions";
}

pub struct Pods;

impl Endpoint for Pods {
    type Item = Pod;
    type Id = i64;
    const LABEL: &'static str = "pod";
    const PATH: &'static str = "/ecloud/v1/pods";
}

/// Firewalls belonging to a solution.
pub struct SolutionFirewalls;

impl NestedEndpoint for SolutionFirewalls {
    type Item = Firewall;
    type ParentId = i64;
    type Id = i64;
    const PARENT_LABEL: &'static str = "solution";
    const LABEL: &'static str = "firewall";
    const PATH: &'static str = "/ecloud/v1/solutions/{parent}/firewalls";
}

/// Templates belonging to a solution, addressed by name.
pub struct SolutionTemplates;

impl NestedEndpoint for SolutionTemplates {
    type Item = Template;
    type ParentId = i64;
    type Id = str;
    const PARENT_LABEL: &'static str = "solution";
    const LABEL: &'static str = "template";
    const PATH: &'static str = "/ecloud/v1/solutions/{parent}/templates";
}

impl RenamableEndpoint for SolutionTemplates {
    type RenameRequest = RenameTemplateRequest;
    const RENAME_ACTION: &'static str = "move";
}

/// Templates shared across a pod, addressed by name.
pub struct PodTemplates;

impl NestedEndpoint for PodTemplates {
    type Item = Template;
    type ParentId = i64;
    type Id = str;
    const PARENT_LABEL: &'static str = "pod";
    const LABEL: &'static str = "template";
    const PATH: &'static str = "/ecloud/v1/pods/{parent}/templates";
}

impl RenamableEndpoint for PodTemplates {
    type RenameRequest = RenameTemplateRequest;
    const RENAME_ACTION: &'static str = "move";
}

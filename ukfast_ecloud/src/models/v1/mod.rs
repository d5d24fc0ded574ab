mod active_directory;
pub use self::active_directory::{ActiveDirectoryDomain, ActiveDirectoryDomainID};

mod firewall;
pub use self::firewall::{Firewall, FirewallID, FirewallRole};

mod pod;
pub use self::pod::{Pod, PodID, PodServices};

mod solution;
pub use self::solution::{Solution, SolutionEnvironment, SolutionID};

mod template;
pub use self::template::{RenameTemplateRequest, Template, TemplateDisk, TemplateName};

mod availability_zone;
pub use self::availability_zone::{AvailabilityZone, AvailabilityZoneID};

mod dhcp;
pub use self::dhcp::{Dhcp, DhcpID};

mod network;
pub use self::network::{Network, NetworkID};

mod nic;
pub use self::nic::{Nic, NicID};

mod region;
pub use self::region::{Region, RegionID};

mod vpc;
pub use self::vpc::{Vpc, VpcID};

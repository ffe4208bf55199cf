pub mod config;
pub mod ec2;
pub mod error;
pub mod instance;
pub mod lister;
pub mod logging;

pub use error::{Error, Result};
pub use instance::{Instance, Reservation, NO_PUBLIC_IP};
pub use lister::{list_instances, InstanceSource};

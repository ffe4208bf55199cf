use std::fmt;

/// Printed in place of the public IP when an instance has none.
pub const NO_PUBLIC_IP: &str = "N/A";

/// A group of instances launched together, in the order the provider returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservation {
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub instance_id: String,
    pub state: String,
    pub public_ip: Option<String>,
}

impl Instance {
    pub fn public_ip_or_default(&self) -> &str {
        self.public_ip.as_deref().unwrap_or(NO_PUBLIC_IP)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instance ID: {}, State: {}, Public IP: {}",
            self.instance_id,
            self.state,
            self.public_ip_or_default()
        )
    }
}

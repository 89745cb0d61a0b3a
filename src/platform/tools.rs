//! Command lines for the supported Linux network tools.

use super::command::NetCommand;
use std::fmt;

/// Which tool reads and changes interface state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NetTool {
    /// net-tools `ifconfig`
    #[default]
    Ifconfig,
    /// iproute2 `ip link`
    Ip,
}

impl NetTool {
    /// Prints interface configuration, including the hardware address
    pub fn status_command(&self, interface: &str) -> NetCommand {
        match self {
            NetTool::Ifconfig => NetCommand::new("ifconfig", &[interface]),
            NetTool::Ip => NetCommand::new("ip", &["link", "show", "dev", interface]),
        }
    }

    /// Sets the interface administratively down
    pub fn down_command(&self, interface: &str) -> NetCommand {
        match self {
            NetTool::Ifconfig => NetCommand::new("ifconfig", &[interface, "down"]),
            NetTool::Ip => NetCommand::new("ip", &["link", "set", "dev", interface, "down"]),
        }
    }

    /// Sets the hardware address
    pub fn set_address_command(&self, interface: &str, mac: &str) -> NetCommand {
        match self {
            NetTool::Ifconfig => NetCommand::new("ifconfig", &[interface, "hw", "ether", mac]),
            NetTool::Ip => {
                NetCommand::new("ip", &["link", "set", "dev", interface, "address", mac])
            }
        }
    }

    /// Sets the interface administratively up
    pub fn up_command(&self, interface: &str) -> NetCommand {
        match self {
            NetTool::Ifconfig => NetCommand::new("ifconfig", &[interface, "up"]),
            NetTool::Ip => NetCommand::new("ip", &["link", "set", "dev", interface, "up"]),
        }
    }
}

impl fmt::Display for NetTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetTool::Ifconfig => write!(f, "ifconfig"),
            NetTool::Ip => write!(f, "ip"),
        }
    }
}

//! Mock platform implementations for testing.
//!
//! Provides a scripted `CommandRunner` that simulates:
//! - `ifconfig` and `ip link` against an in-memory interface table
//! - Failing reconfiguration steps (e.g. missing privileges)
//! - Drivers that ignore or rewrite a new address
//! - Missing tools and user interrupts

use mac_changer::platform::{CommandOutput, CommandRunner, CommandStatus, NetCommand};
use mac_changer::MutationStep;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A simulated network interface
#[derive(Debug, Clone, PartialEq)]
pub struct MockInterface {
    pub name: String,
    pub mac: String,
    pub up: bool,
}

impl MockInterface {
    pub fn new(name: &str, mac: &str) -> Self {
        MockInterface {
            name: name.to_string(),
            mac: mac.to_string(),
            up: true,
        }
    }
}

/// Mock host configuration
#[derive(Debug, Clone)]
pub struct MockHostConfig {
    pub interfaces: Vec<MockInterface>,
    /// This reconfiguration step exits 1 without changing anything
    pub fail_step: Option<MutationStep>,
    /// `set address` exits 0 but the address stays the same
    pub ignore_new_address: bool,
    /// Store new addresses in lowercase, as the kernel reports them
    pub lowercase_addresses: bool,
    /// Every command fails to start, as if the tool were not installed
    pub tool_missing: bool,
}

impl Default for MockHostConfig {
    fn default() -> Self {
        MockHostConfig {
            interfaces: vec![],
            fail_step: None,
            ignore_new_address: false,
            lowercase_addresses: false,
            tool_missing: false,
        }
    }
}

impl MockHostConfig {
    /// A host with a single wired interface `eth0`
    pub fn single_eth0() -> Self {
        MockHostConfig {
            interfaces: vec![MockInterface::new("eth0", "08:00:27:ab:cd:ef")],
            ..Default::default()
        }
    }

    /// A laptop with wired and wireless interfaces plus loopback
    pub fn laptop() -> Self {
        MockHostConfig {
            interfaces: vec![
                MockInterface::new("lo", "00:00:00:00:00:00"),
                MockInterface::new("eth0", "08:00:27:ab:cd:ef"),
                MockInterface::new("wlan0", "f4:5c:89:12:34:56"),
            ],
            ..Default::default()
        }
    }

    /// Reconfiguration rejected, as when not running as root
    pub fn without_privileges() -> Self {
        let mut config = Self::single_eth0();
        config.fail_step = Some(MutationStep::Down);
        config
    }

    /// Driver refuses to change its address
    pub fn fixed_address() -> Self {
        let mut config = Self::single_eth0();
        config.ignore_new_address = true;
        config
    }

    /// Kernel normalizes addresses to lowercase
    pub fn lowercasing() -> Self {
        let mut config = Self::single_eth0();
        config.lowercase_addresses = true;
        config
    }

    /// Neither `ifconfig` nor `ip` installed
    pub fn no_tools() -> Self {
        let mut config = Self::single_eth0();
        config.tool_missing = true;
        config
    }
}

/// Scripted command runner.
///
/// Records every command line it is asked to run, in order.
pub struct MockRunner {
    config: MockHostConfig,
    interfaces: RefCell<HashMap<String, MockInterface>>,
    calls: RefCell<Vec<String>>,
    interrupt: Option<(usize, Arc<AtomicBool>)>,
    /// The interrupted command itself still exits 0
    interrupt_spares_child: bool,
}

impl MockRunner {
    pub fn new(config: MockHostConfig) -> Self {
        let interfaces = config
            .interfaces
            .iter()
            .map(|i| (i.name.clone(), i.clone()))
            .collect();

        MockRunner {
            config,
            interfaces: RefCell::new(interfaces),
            calls: RefCell::new(Vec::new()),
            interrupt: None,
            interrupt_spares_child: false,
        }
    }

    /// Set `flag` while running the `nth` command (1-based), as Ctrl-C would
    pub fn interrupt_on_call(mut self, nth: usize, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some((nth, flag));
        self
    }

    /// Like [`interrupt_on_call`](Self::interrupt_on_call), but the `nth`
    /// command finishes normally, as when Ctrl-C lands between children
    pub fn interrupt_after_call(mut self, nth: usize, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some((nth, flag));
        self.interrupt_spares_child = true;
        self
    }

    /// Command lines run so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Current simulated state of an interface
    pub fn interface(&self, name: &str) -> Option<MockInterface> {
        self.interfaces.borrow().get(name).cloned()
    }

    /// Record the call; returns true if this call's child is killed
    fn record(&self, command: &NetCommand) -> bool {
        let mut calls = self.calls.borrow_mut();
        calls.push(command.to_string());

        match &self.interrupt {
            Some((nth, flag)) if *nth == calls.len() => {
                flag.store(true, Ordering::SeqCst);
                !self.interrupt_spares_child
            }
            _ => false,
        }
    }

    fn check_tool(&self, command: &NetCommand) -> io::Result<()> {
        if self.config.tool_missing || !matches!(command.program, "ifconfig" | "ip") {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", command.program),
            ));
        }
        Ok(())
    }

    fn status_text(&self, command: &NetCommand) -> CommandOutput {
        let args: Vec<&str> = command.args.iter().map(|a| a.as_str()).collect();
        let name = match (command.program, args.as_slice()) {
            ("ifconfig", [name]) => *name,
            ("ip", ["link", "show", "dev", name]) => *name,
            _ => return usage_error(command),
        };

        let interfaces = self.interfaces.borrow();
        let iface = match interfaces.get(name) {
            Some(iface) => iface,
            None => {
                let text = if command.program == "ifconfig" {
                    format!("{}: error fetching interface information: Device not found\n", name)
                } else {
                    format!("Device \"{}\" does not exist.\n", name)
                };
                return CommandOutput {
                    status: CommandStatus::from_code(1),
                    text,
                };
            }
        };

        let flags = if iface.up { "UP,BROADCAST,RUNNING,MULTICAST" } else { "BROADCAST,MULTICAST" };
        let text = if command.program == "ifconfig" {
            format!(
                "{}: flags=4163<{}>  mtu 1500\n\
                 \x20       inet 192.168.56.10  netmask 255.255.255.0  broadcast 192.168.56.255\n\
                 \x20       ether {}  txqueuelen 1000  (Ethernet)\n\
                 \x20       RX packets 1024  bytes 123456 (120.5 KiB)\n",
                iface.name, flags, iface.mac
            )
        } else {
            format!(
                "2: {}: <{}> mtu 1500 qdisc fq_codel state {} mode DEFAULT group default qlen 1000\n\
                 \x20   link/ether {} brd ff:ff:ff:ff:ff:ff\n",
                iface.name,
                flags,
                if iface.up { "UP" } else { "DOWN" },
                iface.mac
            )
        };

        CommandOutput {
            status: CommandStatus::from_code(0),
            text,
        }
    }

    /// Which step a reconfiguration command performs, with its target and address
    fn parse_step<'c>(command: &'c NetCommand) -> Option<(MutationStep, &'c str, Option<&'c str>)> {
        let args: Vec<&str> = command.args.iter().map(|a| a.as_str()).collect();
        match (command.program, args.as_slice()) {
            ("ifconfig", [name, "down"]) => Some((MutationStep::Down, *name, None)),
            ("ifconfig", [name, "up"]) => Some((MutationStep::Up, *name, None)),
            ("ifconfig", [name, "hw", "ether", mac]) => Some((MutationStep::SetAddress, *name, Some(*mac))),
            ("ip", ["link", "set", "dev", name, "down"]) => Some((MutationStep::Down, *name, None)),
            ("ip", ["link", "set", "dev", name, "up"]) => Some((MutationStep::Up, *name, None)),
            ("ip", ["link", "set", "dev", name, "address", mac]) => {
                Some((MutationStep::SetAddress, *name, Some(*mac)))
            }
            _ => None,
        }
    }
}

fn usage_error(command: &NetCommand) -> CommandOutput {
    CommandOutput {
        status: CommandStatus::from_code(2),
        text: format!("{}: unsupported arguments in mock\n", command),
    }
}

impl CommandRunner for MockRunner {
    fn status(&self, command: &NetCommand) -> io::Result<CommandStatus> {
        let interrupted = self.record(command);
        self.check_tool(command)?;

        if interrupted {
            // Child killed by the same SIGINT
            return Ok(CommandStatus {
                success: false,
                code: None,
            });
        }

        let (step, name, mac) = match Self::parse_step(command) {
            Some(parsed) => parsed,
            None => return Ok(CommandStatus::from_code(2)),
        };

        if self.config.fail_step == Some(step) {
            return Ok(CommandStatus::from_code(1));
        }

        let mut interfaces = self.interfaces.borrow_mut();
        let iface = match interfaces.get_mut(name) {
            Some(iface) => iface,
            None => return Ok(CommandStatus::from_code(255)),
        };

        match step {
            MutationStep::Down => iface.up = false,
            MutationStep::Up => iface.up = true,
            MutationStep::SetAddress => {
                if !self.config.ignore_new_address {
                    let mac = mac.unwrap_or_default();
                    iface.mac = if self.config.lowercase_addresses {
                        mac.to_lowercase()
                    } else {
                        mac.to_string()
                    };
                }
            }
        }

        Ok(CommandStatus::from_code(0))
    }

    fn output(&self, command: &NetCommand) -> io::Result<CommandOutput> {
        let interrupted = self.record(command);
        self.check_tool(command)?;

        if interrupted {
            return Ok(CommandOutput {
                status: CommandStatus {
                    success: false,
                    code: None,
                },
                text: String::new(),
            });
        }

        Ok(self.status_text(command))
    }
}

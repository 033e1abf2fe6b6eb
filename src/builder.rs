use std::path::PathBuf;

use crate::error::Result;
use crate::platform::{TunInterface, CONTROL_DEVICE};

/// Resolved settings for one allocation.
#[derive(Clone, Debug)]
pub(crate) struct DeviceConfig {
    /// `None` lets the kernel pick a `tun%d` name.
    pub name: Option<String>,
    /// switch of Enable/Disable packet information for network driver
    pub packet_information: bool,
    pub nonblocking: bool,
    pub control_path: PathBuf,
}

/// Builder for a TUN interface.
///
/// Defaults match what a test network expects: packet-only framing, a
/// non-blocking descriptor, and the platform's clone device.
#[derive(Clone, Debug, Default)]
pub struct TunBuilder {
    name: Option<String>,
    packet_information: Option<bool>,
    nonblocking: Option<bool>,
    control_path: Option<PathBuf>,
}

impl TunBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interface name. A `%d` in the name is replaced by the kernel with the
    /// first free index.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable or disable packet information, the 4-byte flags and protocol
    /// header the driver prepends to every packet when enabled.
    pub fn packet_information(mut self, packet_information: bool) -> Self {
        self.packet_information = Some(packet_information);
        self
    }

    /// Open the descriptor in nonblocking mode. Defaults to `true`.
    pub fn nonblocking(mut self, nonblocking: bool) -> Self {
        self.nonblocking = Some(nonblocking);
        self
    }

    /// Override the clone device that tunnels are allocated through.
    pub fn control_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.control_path = Some(path.into());
        self
    }

    fn config(self) -> DeviceConfig {
        DeviceConfig {
            name: self.name,
            packet_information: self.packet_information.unwrap_or(false),
            nonblocking: self.nonblocking.unwrap_or(true),
            control_path: self
                .control_path
                .unwrap_or_else(|| PathBuf::from(CONTROL_DEVICE)),
        }
    }

    /// Allocate the interface and bring it up.
    pub fn build(self) -> Result<TunInterface> {
        TunInterface::new(self.config())
    }
}

pub(crate) mod sys;

mod device;
mod flags;
mod name;

pub use self::device::{interface_flags, reset, TunInterface};
pub use self::flags::{InterfaceFlags, TunFlags};

/// Path of the TUN/TAP clone device.
#[cfg(target_os = "android")]
pub const CONTROL_DEVICE: &str = "/dev/tun";
/// Path of the TUN/TAP clone device.
#[cfg(not(target_os = "android"))]
pub const CONTROL_DEVICE: &str = "/dev/net/tun";

/// Longest interface name accepted, in bytes.
pub const MAX_NAME_LEN: usize = name::InterfaceName::MAX_LEN;

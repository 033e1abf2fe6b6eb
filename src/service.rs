//! Entry points for a test-network service that manages interfaces by name.
//!
//! Names arrive from a foreign runtime and may be absent; both calls reject
//! `None` before touching the OS. Errors are returned, never raised, so the
//! binding decides how to surface an [`Error`](crate::Error).

use std::os::fd::OwnedFd;

use crate::error::{Error, Result};
use crate::{platform, TunBuilder};

const IFACE_ARG: &str = "iface";

/// Allocate a packet-only TUN interface named `name`, bring it up, and return
/// its descriptor. The caller owns the descriptor from here on.
pub fn create_tun(name: Option<&str>) -> Result<OwnedFd> {
    let name = name.ok_or(Error::NullArgument(IFACE_ARG))?;
    let tun = TunBuilder::new().name(name).build()?;
    Ok(tun.into())
}

/// Bring the interface named `name` down. Succeeds if it does not exist.
pub fn teardown_tun(name: Option<&str>) -> Result<()> {
    let name = name.ok_or(Error::NullArgument(IFACE_ARG))?;
    platform::reset(name)
}

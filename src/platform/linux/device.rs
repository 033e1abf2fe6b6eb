use std::ffi::CString;
use std::fmt;
use std::io::{self, Read, Write};
use std::mem;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, IntoRawFd, OwnedFd, RawFd};
use std::os::unix::ffi::OsStrExt;

use libc::{c_short, ifreq, IFF_NO_PI, IFF_TUN, IFF_UP, O_CLOEXEC, O_NONBLOCK, O_RDWR};
use nix::errno::Errno;

use crate::builder::DeviceConfig;
use crate::error::{Action, Error, Result};
use crate::platform::linux::flags::{InterfaceFlags, TunFlags};
use crate::platform::linux::name::{request_name, InterfaceName};
use crate::platform::linux::sys::*;
use crate::platform::posix::Fd;

/// An allocated TUN interface that is administratively up.
///
/// The handle owns the tunnel descriptor. Dropping it closes the descriptor,
/// which releases a non-persistent interface; [`IntoRawFd`] and
/// `OwnedFd::from` hand ownership to the caller instead.
pub struct TunInterface {
    fd: Fd,
    name: String,
}

impl TunInterface {
    /// Allocate and activate the interface described by `config`.
    ///
    /// Either a fully configured, up interface is returned, or the error is
    /// returned with every descriptor opened along the way already closed.
    pub(crate) fn new(config: DeviceConfig) -> Result<Self> {
        let name = match config.name.as_deref() {
            Some(name) => InterfaceName::new(name)?,
            None => InterfaceName::new(DEFAULT_NAME_TEMPLATE)?,
        };

        let path = CString::new(config.control_path.as_os_str().as_bytes())
            .map_err(|_| Error::os(Action::Allocating, name.as_str(), Errno::EINVAL))?;
        let mut flags = O_RDWR | O_CLOEXEC;
        if config.nonblocking {
            flags |= O_NONBLOCK;
        }
        let fd = Fd::new(unsafe { libc::open(path.as_ptr(), flags) })
            .map_err(|e| Error::os(Action::Allocating, name.as_str(), e))?;

        let mut req = name.request();
        req.ifr_ifru.ifru_flags = IFF_TUN as c_short
            | if config.packet_information {
                0
            } else {
                IFF_NO_PI as c_short
            };
        if let Err(err) = unsafe { tunsetiff(fd.as_raw_fd(), &mut req) } {
            return Err(Error::os(Action::Allocating, name.as_str(), err));
        }
        let assigned = request_name(&req);
        log::debug!("allocated tun interface {assigned} (fd {})", fd.as_raw_fd());

        req.ifr_ifru.ifru_flags = IFF_UP as c_short;
        set_flags(&req).map_err(|e| Error::os(Action::Activating, assigned.as_str(), e))?;
        log::debug!("activated tun interface {assigned}");

        Ok(TunInterface {
            fd,
            name: assigned,
        })
    }

    /// The name the kernel assigned, which differs from the requested one
    /// only when a `%d` template was used.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tun_flags(&self) -> Result<TunFlags> {
        let mut req: ifreq = unsafe { mem::zeroed() };
        if let Err(err) = unsafe { tungetiff(self.fd.as_raw_fd(), &mut req) } {
            return Err(Error::os(Action::Querying, self.name.as_str(), err));
        }
        Ok(TunFlags::from_bits_retain(unsafe { req.ifr_ifru.ifru_flags }))
    }

    pub fn flags(&self) -> Result<InterfaceFlags> {
        interface_flags(&self.name)
    }

    pub fn is_up(&self) -> Result<bool> {
        Ok(self.flags()?.contains(InterfaceFlags::UP))
    }

    pub fn is_nonblocking(&self) -> io::Result<bool> {
        self.fd.is_nonblocking()
    }

    /// Moves the descriptor into or out of nonblocking mode.
    pub fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        self.fd.set_nonblocking(nonblocking)
    }

    /// Recv a packet from the interface.
    pub fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        self.fd.read(buf)
    }

    /// Send a packet to the interface.
    pub fn send(&self, buf: &[u8]) -> io::Result<usize> {
        self.fd.write(buf)
    }
}

/// Requested when no name is configured; the kernel substitutes the first
/// free index.
const DEFAULT_NAME_TEMPLATE: &str = "tun%d";

/// Bring the named interface down by clearing all of its flags.
///
/// A device that does not exist is treated as already reset. The tunnel
/// descriptor, if any, is left to its owner.
pub fn reset(name: &str) -> Result<()> {
    let name = InterfaceName::existing(name)?;
    let req = name.request();
    match set_flags(&req) {
        Ok(()) => {
            log::debug!("reset tun interface {name}");
            Ok(())
        }
        Err(Errno::ENODEV) => {
            log::debug!("reset tun interface {name}: no such device");
            Ok(())
        }
        Err(err) => Err(Error::os(Action::Resetting, name.as_str(), err)),
    }
}

/// Read the flags of the named interface.
pub fn interface_flags(name: &str) -> Result<InterfaceFlags> {
    let name = InterfaceName::existing(name)?;
    let mut req = name.request();
    let ctl = ctl().map_err(|e| Error::os(Action::Querying, name.as_str(), e))?;
    if let Err(err) = unsafe { siocgifflags(ctl.as_raw_fd(), &mut req) } {
        return Err(Error::os(Action::Querying, name.as_str(), err));
    }
    let flags = unsafe { req.ifr_ifru.ifru_flags };
    Ok(InterfaceFlags::from_bits_retain(flags))
}

/// Issue `SIOCSIFFLAGS` through a throwaway control socket.
fn set_flags(req: &ifreq) -> Result<(), Errno> {
    let ctl = ctl()?;
    unsafe { siocsifflags(ctl.as_raw_fd(), req) }?;
    Ok(())
}

fn ctl() -> Result<Fd, Errno> {
    Fd::new(unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM | libc::SOCK_CLOEXEC, 0) })
}

impl fmt::Debug for TunInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TunInterface")
            .field("fd", &self.fd.as_raw_fd())
            .field("name", &self.name)
            .finish()
    }
}

impl Read for TunInterface {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.recv(buf)
    }
}

impl Write for TunInterface {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.send(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl AsRawFd for TunInterface {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

impl AsFd for TunInterface {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl IntoRawFd for TunInterface {
    fn into_raw_fd(self) -> RawFd {
        self.fd.into_raw_fd()
    }
}

impl From<TunInterface> for OwnedFd {
    fn from(value: TunInterface) -> Self {
        value.fd.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use crate::TunBuilder;

    #[test]
    fn missing_control_device() {
        let err = TunBuilder::new()
            .name("testtun0")
            .control_path("/nonexistent/tun")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);
        assert_eq!(err.errno(), Some(Errno::ENOENT));
        assert_eq!(
            err.to_string(),
            "Error allocating testtun0: No such file or directory"
        );
    }

    #[test]
    fn control_device_is_not_tun() {
        let err = TunBuilder::new()
            .name("testtun0")
            .control_path("/dev/null")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);
        assert_eq!(err.errno(), Some(Errno::ENOTTY));
    }

    #[test]
    fn oversized_name_is_rejected_before_open() {
        let err = TunBuilder::new()
            .name("toolongnameforinterfac")
            .control_path("/nonexistent/tun")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::NameTooLong));
    }

    #[test]
    fn query_unknown_interface() {
        let err = interface_flags("nosuchif0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Query);
        assert_eq!(err.errno(), Some(Errno::ENODEV));
    }

    #[test]
    fn query_loopback() {
        let flags = interface_flags("lo").unwrap();
        assert!(flags.contains(InterfaceFlags::LOOPBACK));
    }

    #[test]
    fn reset_rejects_bad_names() {
        assert!(matches!(reset(""), Err(Error::InvalidName)));
        assert!(matches!(
            reset("toolongnameforinterfac"),
            Err(Error::NameTooLong)
        ));
    }

    #[test]
    fn lookups_reject_templates() {
        assert!(matches!(reset("tun%d"), Err(Error::InvalidName)));
        assert!(matches!(interface_flags("tun%d"), Err(Error::InvalidName)));
    }
}

use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, IntoRawFd, OwnedFd, RawFd};
use std::os::unix::io::FromRawFd;

use libc::{fcntl, F_GETFL, F_SETFL, O_NONBLOCK};
use nix::errno::Errno;

/// An owned POSIX file descriptor, closed on drop unless released with
/// [`IntoRawFd::into_raw_fd`].
pub(crate) struct Fd {
    pub(crate) inner: RawFd,
}

impl Fd {
    /// Take ownership of the return value of a descriptor-creating call,
    /// reporting `errno` if it failed.
    pub fn new(value: RawFd) -> Result<Self, Errno> {
        if value < 0 {
            return Err(Errno::last());
        }
        Ok(Fd { inner: value })
    }

    pub fn is_nonblocking(&self) -> io::Result<bool> {
        match unsafe { fcntl(self.inner, F_GETFL) } {
            -1 => Err(io::Error::last_os_error()),
            flags => Ok(flags & O_NONBLOCK != 0),
        }
    }

    pub fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        let flags = unsafe { fcntl(self.inner, F_GETFL) };
        if flags == -1 {
            return Err(io::Error::last_os_error());
        }
        let flags = if nonblocking {
            flags | O_NONBLOCK
        } else {
            flags & !O_NONBLOCK
        };
        match unsafe { fcntl(self.inner, F_SETFL, flags) } {
            0 => Ok(()),
            _ => Err(io::Error::last_os_error()),
        }
    }

    #[inline]
    pub fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        let amount = unsafe { libc::read(self.inner, buf.as_mut_ptr() as *mut _, buf.len()) };
        if amount < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(amount as usize)
    }

    #[inline]
    pub fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let amount = unsafe { libc::write(self.inner, buf.as_ptr() as *const _, buf.len()) };
        if amount < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(amount as usize)
    }
}

impl AsRawFd for Fd {
    fn as_raw_fd(&self) -> RawFd {
        self.inner
    }
}

impl AsFd for Fd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        unsafe { BorrowedFd::borrow_raw(self.inner) }
    }
}

impl IntoRawFd for Fd {
    fn into_raw_fd(mut self) -> RawFd {
        let fd = self.inner;
        self.inner = -1;
        fd
    }
}

impl From<Fd> for OwnedFd {
    fn from(value: Fd) -> Self {
        unsafe { OwnedFd::from_raw_fd(value.into_raw_fd()) }
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        if self.inner >= 0 {
            unsafe { libc::close(self.inner) };
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;

    fn is_open(fd: RawFd) -> bool {
        Path::new(&format!("/proc/self/fd/{fd}")).exists()
    }

    #[test]
    fn negative_is_error() {
        assert!(Fd::new(-1).is_err());
    }

    #[test]
    fn release_keeps_open() {
        let raw = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0) };
        let owned: OwnedFd = Fd::new(raw).unwrap().into();
        assert_eq!(owned.as_raw_fd(), raw);
        assert!(is_open(raw));
    }

    #[test]
    fn toggles_nonblocking() {
        let raw = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0) };
        let fd = Fd::new(raw).unwrap();
        assert!(!fd.is_nonblocking().unwrap());
        fd.set_nonblocking(true).unwrap();
        assert!(fd.is_nonblocking().unwrap());
        fd.set_nonblocking(false).unwrap();
        assert!(!fd.is_nonblocking().unwrap());
    }
}

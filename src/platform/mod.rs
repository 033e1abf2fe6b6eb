#[cfg(unix)]
pub(crate) mod posix;

// Android shares the Linux TUN driver and ioctl surface.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use self::linux::*;

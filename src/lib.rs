/*!
Create and tear down kernel TUN interfaces for network tests.

# Example:
```no_run
use tun_lifecycle::{reset, TunBuilder};

let tun = TunBuilder::new().name("testtun0").build()?;
assert!(tun.is_up()?);
reset(tun.name())?;
assert!(!tun.is_up()?);
# Ok::<(), tun_lifecycle::Error>(())
```
# Example service bridge:
```no_run
use std::os::fd::IntoRawFd;
use tun_lifecycle::service::{create_tun, teardown_tun};

let fd = create_tun(Some("testtun0"))?.into_raw_fd();
// hand `fd` to the runtime that owns it from now on
teardown_tun(Some("testtun0"))?;
# Ok::<(), tun_lifecycle::Error>(())
```
*/

#![cfg_attr(docsrs, feature(doc_cfg))]

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        pub use crate::builder::TunBuilder;
        pub use crate::error::{Action, Error, ErrorKind, Result};
        pub use crate::platform::{
            interface_flags, reset, InterfaceFlags, TunFlags, TunInterface, CONTROL_DEVICE,
            MAX_NAME_LEN,
        };

        mod builder;
        mod error;
        pub mod platform;
        pub mod service;
    }
}

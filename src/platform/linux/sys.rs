use libc::{c_int, c_uint, ifreq};
use nix::{ioctl_read_bad, ioctl_readwrite_bad, ioctl_write_ptr_bad};
use nix::{request_code_read, request_code_write};
use std::mem::size_of;

ioctl_read_bad!(siocgifflags, 0x8913, ifreq);
ioctl_write_ptr_bad!(siocsifflags, 0x8914, ifreq);

// TUNSETIFF writes the assigned name back into the request.
ioctl_readwrite_bad!(
    tunsetiff,
    request_code_write!(b'T', 202, size_of::<c_int>()),
    ifreq
);
ioctl_read_bad!(
    tungetiff,
    request_code_read!(b'T', 210, size_of::<c_uint>()),
    ifreq
);

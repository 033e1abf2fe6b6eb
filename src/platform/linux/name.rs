use std::ffi::CStr;
use std::fmt;
use std::mem;

use libc::{c_char, ifreq, IFNAMSIZ};

use crate::error::{Error, Result};

/// A name that fits the kernel's fixed-width `ifr_name` field, terminator
/// included.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct InterfaceName(String);

impl InterfaceName {
    /// Longest name the kernel accepts, in bytes.
    pub const MAX_LEN: usize = IFNAMSIZ - 1;

    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() || name.contains('\0') {
            return Err(Error::InvalidName);
        }
        if name.len() > Self::MAX_LEN {
            return Err(Error::NameTooLong);
        }
        Ok(InterfaceName(name.to_owned()))
    }

    /// A name that refers to an interface that already exists. `%d`
    /// templates are only expanded by `TUNSETIFF`, so they are rejected here.
    pub fn existing(name: &str) -> Result<Self> {
        let name = Self::new(name)?;
        if name.0.contains('%') {
            return Err(Error::InvalidName);
        }
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A zeroed request carrying this name and no flags.
    pub fn request(&self) -> ifreq {
        let mut req: ifreq = unsafe { mem::zeroed() };
        for (dst, src) in req.ifr_name.iter_mut().zip(self.0.bytes()) {
            *dst = src as c_char;
        }
        req
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the name the kernel left in a request.
pub(crate) fn request_name(req: &ifreq) -> String {
    let bytes: [u8; IFNAMSIZ] = req.ifr_name.map(|c| c as u8);
    match CStr::from_bytes_until_nul(&bytes) {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

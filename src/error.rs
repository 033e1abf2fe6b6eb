use std::fmt;

use nix::errno::Errno;

/// The step of the interface lifecycle an OS error came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Allocating,
    Activating,
    Resetting,
    Querying,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Allocating => "allocating",
            Action::Activating => "activating",
            Action::Resetting => "resetting",
            Action::Querying => "querying",
        })
    }
}

/// Coarse classification of an [`Error`], for callers that map failures onto
/// their own error convention.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The interface name was absent or unusable. No OS call was made.
    Argument,
    /// Opening the control device or configuring the tunnel failed.
    Allocation,
    /// Bringing the freshly allocated interface up failed.
    Activation,
    /// Clearing the interface flags failed.
    Reset,
    /// Reading interface state failed.
    Query,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0} must not be null")]
    NullArgument(&'static str),

    #[error("invalid interface name")]
    InvalidName,

    #[error("interface name too long")]
    NameTooLong,

    #[error("Error {action} {iface}: {}", .errno.desc())]
    Os {
        action: Action,
        iface: String,
        #[source]
        errno: Errno,
    },
}

impl Error {
    pub(crate) fn os<S: Into<String>>(action: Action, iface: S, errno: Errno) -> Self {
        Error::Os {
            action,
            iface: iface.into(),
            errno,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NullArgument(_) | Error::InvalidName | Error::NameTooLong => {
                ErrorKind::Argument
            }
            Error::Os { action, .. } => match action {
                Action::Allocating => ErrorKind::Allocation,
                Action::Activating => ErrorKind::Activation,
                Action::Resetting => ErrorKind::Reset,
                Action::Querying => ErrorKind::Query,
            },
        }
    }

    /// The underlying OS error, if any.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Error::Os { errno, .. } => Some(*errno),
            _ => None,
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        let kind = match value.errno() {
            Some(errno) => std::io::Error::from(errno).kind(),
            None => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, value)
    }
}

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn os_error_message() {
        let err = Error::os(Action::Allocating, "testtun0", Errno::EPERM);
        assert_eq!(
            err.to_string(),
            "Error allocating testtun0: Operation not permitted"
        );
        assert_eq!(err.kind(), ErrorKind::Allocation);
        assert_eq!(err.errno(), Some(Errno::EPERM));
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::NullArgument("iface").kind(), ErrorKind::Argument);
        assert_eq!(Error::NameTooLong.kind(), ErrorKind::Argument);
        assert_eq!(
            Error::os(Action::Activating, "a", Errno::EINVAL).kind(),
            ErrorKind::Activation
        );
        assert_eq!(
            Error::os(Action::Resetting, "a", Errno::EBUSY).kind(),
            ErrorKind::Reset
        );
        assert_eq!(Error::NullArgument("iface").to_string(), "iface must not be null");
    }

    #[test]
    fn into_io_error() {
        let err: std::io::Error = Error::os(Action::Resetting, "a", Errno::EPERM).into();
        assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
        let err: std::io::Error = Error::InvalidName.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}

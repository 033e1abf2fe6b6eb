mod fd;
pub(crate) use self::fd::Fd;

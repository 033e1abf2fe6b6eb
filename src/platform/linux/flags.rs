use bitflags::bitflags;
use libc::c_short;

bitflags! {
    /// Interface flags as reported by `SIOCGIFFLAGS`.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InterfaceFlags: c_short {
        const UP = libc::IFF_UP as c_short;
        const BROADCAST = libc::IFF_BROADCAST as c_short;
        const DEBUG = libc::IFF_DEBUG as c_short;
        const LOOPBACK = libc::IFF_LOOPBACK as c_short;
        const POINTOPOINT = libc::IFF_POINTOPOINT as c_short;
        const NOTRAILERS = libc::IFF_NOTRAILERS as c_short;
        const RUNNING = libc::IFF_RUNNING as c_short;
        const NOARP = libc::IFF_NOARP as c_short;
        const PROMISC = libc::IFF_PROMISC as c_short;
        const ALLMULTI = libc::IFF_ALLMULTI as c_short;
        const MULTICAST = libc::IFF_MULTICAST as c_short;
    }
}

bitflags! {
    /// TUN driver flags as reported by `TUNGETIFF`.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TunFlags: c_short {
        const TUN = libc::IFF_TUN as c_short;
        const TAP = libc::IFF_TAP as c_short;
        const NO_PI = libc::IFF_NO_PI as c_short;
        const ONE_QUEUE = libc::IFF_ONE_QUEUE as c_short;
        const VNET_HDR = libc::IFF_VNET_HDR as c_short;
        const MULTI_QUEUE = libc::IFF_MULTI_QUEUE as c_short;
    }
}

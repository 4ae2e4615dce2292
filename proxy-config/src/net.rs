//! Network-information collaborator used for host-name validation

use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs, UdpSocket};

/// Sources of machine identity and name resolution.
///
/// The parser only consults this while handling `DefaultHostName`; tests
/// substitute a fake to keep parsing hermetic.
pub trait NetworkInfo {
    /// The machine's own host name
    fn machine_name(&self) -> String;
    /// Addresses bound to local interfaces
    fn local_addresses(&self) -> Vec<IpAddr>;
    /// Resolve a host name to addresses; empty when resolution fails
    fn resolve(&self, host: &str) -> Vec<IpAddr>;
}

/// `NetworkInfo` backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNetworkInfo;

impl NetworkInfo for SystemNetworkInfo {
    fn machine_name(&self) -> String {
        machine_name()
    }

    fn local_addresses(&self) -> Vec<IpAddr> {
        let mut addresses = vec![IpAddr::V4(Ipv4Addr::LOCALHOST)];
        // A connected UDP socket reveals the outbound interface address
        // without sending any traffic.
        if let Ok(socket) = UdpSocket::bind(("0.0.0.0", 0)) {
            if socket.connect(("8.8.8.8", 53)).is_ok() {
                if let Ok(local) = socket.local_addr() {
                    addresses.push(local.ip());
                }
            }
        }
        addresses
    }

    fn resolve(&self, host: &str) -> Vec<IpAddr> {
        (host, 0u16)
            .to_socket_addrs()
            .map(|addresses| addresses.map(|address| address.ip()).collect())
            .unwrap_or_default()
    }
}

pub(crate) fn machine_name() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}

/// Whether a configured host name plausibly refers to this machine.
pub(crate) fn host_name_is_local(name: &str, network: &dyn NetworkInfo) -> bool {
    if network.machine_name().eq_ignore_ascii_case(name) {
        return true;
    }
    if network
        .local_addresses()
        .iter()
        .any(|address| address.to_string() == name)
    {
        return true;
    }
    !network.resolve(name).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeNetwork;

    impl NetworkInfo for FakeNetwork {
        fn machine_name(&self) -> String {
            "testbox".to_string()
        }

        fn local_addresses(&self) -> Vec<IpAddr> {
            vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))]
        }

        fn resolve(&self, host: &str) -> Vec<IpAddr> {
            if host == "known.example" {
                vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn machine_name_match_is_case_insensitive() {
        assert!(host_name_is_local("testbox", &FakeNetwork));
        assert!(host_name_is_local("TESTBOX", &FakeNetwork));
    }

    #[test]
    fn textual_address_match() {
        assert!(host_name_is_local("10.0.0.5", &FakeNetwork));
        assert!(!host_name_is_local("10.0.0.6", &FakeNetwork));
    }

    #[test]
    fn resolvable_name_is_accepted() {
        assert!(host_name_is_local("known.example", &FakeNetwork));
    }

    #[test]
    fn everything_else_is_rejected() {
        assert!(!host_name_is_local("unknown.example", &FakeNetwork));
    }
}

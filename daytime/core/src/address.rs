use crate::error::DaytimeError;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

/// Stand-in for the daytime port (13), which needs privileges to bind when testing locally.
pub const DEFAULT_PORT: u16 = 1313;

/// Parse a dotted-decimal IPv4 address. Anything else, including IPv6 and host names, is rejected.
pub fn parse_address(repr: &str) -> Result<Ipv4Addr, DaytimeError> {
    repr.parse::<Ipv4Addr>()
        .map_err(|_| DaytimeError::AddressParse(repr.to_string()))
}

/// The address and port a connection is made to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    addr: Ipv4Addr,
    port: u16,
}

impl Endpoint {
    pub fn new(addr: Ipv4Addr, port: u16) -> Self {
        Endpoint { addr, port }
    }

    pub fn parse(repr: &str, port: u16) -> Result<Self, DaytimeError> {
        Ok(Endpoint::new(parse_address(repr)?, port))
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.addr, self.port)
    }
}

impl<'a> TryFrom<&'a str> for Endpoint {
    type Error = DaytimeError;

    fn try_from(repr: &str) -> Result<Self, Self::Error> {
        Endpoint::parse(repr, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use crate::address::{parse_address, Endpoint, DEFAULT_PORT};
    use crate::error::DaytimeError;
    use std::net::Ipv4Addr;

    #[test]
    fn loopback() {
        assert_eq!(Ipv4Addr::LOCALHOST, parse_address("127.0.0.1").unwrap());
    }

    #[test]
    fn broadcast() {
        assert_eq!(Ipv4Addr::BROADCAST, parse_address("255.255.255.255").unwrap());
    }

    #[test]
    fn octet_out_of_range() {
        let err = parse_address("999.1.1.1").unwrap_err();
        assert!(matches!(err, DaytimeError::AddressParse(ref s) if s == "999.1.1.1"));
    }

    #[test]
    fn not_an_address() {
        let err = parse_address("not-an-ip").unwrap_err();
        assert!(matches!(err, DaytimeError::AddressParse(_)));
    }

    #[test]
    fn too_few_octets() {
        assert!(parse_address("10.0.1").is_err());
    }

    #[test]
    fn too_many_octets() {
        assert!(parse_address("10.0.0.1.5").is_err());
    }

    #[test]
    fn empty_string_not_a_valid_address() {
        assert!(parse_address("").is_err());
    }

    #[test]
    fn surrounding_whitespace_rejected() {
        assert!(parse_address(" 127.0.0.1").is_err());
        assert!(parse_address("127.0.0.1\n").is_err());
    }

    #[test]
    fn ipv6_rejected() {
        assert!(parse_address("::1").is_err());
    }

    #[test]
    fn host_name_rejected() {
        assert!(parse_address("localhost").is_err());
    }

    #[test]
    fn endpoint_uses_default_port() {
        let endpoint = Endpoint::try_from("192.0.2.7").unwrap();
        assert_eq!(DEFAULT_PORT, endpoint.port());
        assert_eq!(Ipv4Addr::new(192, 0, 2, 7), endpoint.addr());
        assert_eq!("192.0.2.7:1313", endpoint.to_string());
    }

    #[test]
    fn endpoint_with_port_override() {
        let endpoint = Endpoint::parse("10.1.2.3", 13).unwrap();
        assert_eq!("10.1.2.3:13", endpoint.socket_addr().to_string());
    }
}

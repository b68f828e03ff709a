use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaytimeError {
    #[error("{0}")]
    Usage(String),

    #[error("inet_pton error for {0}")]
    AddressParse(String),

    #[error("socket error")]
    SocketCreation {
        #[source]
        source: io::Error,
    },

    #[error("connect error to {endpoint}")]
    Connection {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    #[error("read error")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("write error")]
    Write {
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use crate::error::DaytimeError;
    use std::error::Error;
    use std::io;

    #[test]
    fn address_parse_names_the_input() {
        let err = DaytimeError::AddressParse("not-an-ip".to_string());
        assert_eq!("inet_pton error for not-an-ip", err.to_string());
    }

    #[test]
    fn connection_error_keeps_os_reason_as_source() {
        let err = DaytimeError::Connection {
            endpoint: "127.0.0.1:1313".to_string(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };

        assert_eq!("connect error to 127.0.0.1:1313", err.to_string());
        let source = err.source().unwrap();
        assert_eq!(
            io::ErrorKind::ConnectionRefused,
            source.downcast_ref::<io::Error>().unwrap().kind()
        );
    }
}

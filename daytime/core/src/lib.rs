//! A blocking client for daytime-style servers (RFC 867): connect, copy everything the
//! server sends to a writer, and stop when the server closes the connection.

use std::io::Write;
use tracing::debug;

pub mod address;
pub mod buffer;
pub mod connection;
pub mod error;


pub use crate::address::{parse_address, Endpoint, DEFAULT_PORT};
pub use crate::buffer::{ReceiveBuffer, MAXLINE};
pub use crate::connection::{receive, Connection};
pub use crate::error::DaytimeError;

/// Connect to `endpoint` and copy the whole transfer into `writer`.
///
/// Every failure is returned as-is; nothing is retried.
pub fn fetch<W: Write>(endpoint: &Endpoint, writer: W) -> Result<u64, DaytimeError> {
    let mut connection = Connection::open(endpoint)?;
    let received = connection.receive_into(writer)?;
    connection.close();

    debug!(%endpoint, bytes = received, "transfer complete");
    Ok(received)
}

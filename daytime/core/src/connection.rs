use crate::address::Endpoint;
use crate::buffer::ReceiveBuffer;
use crate::error::DaytimeError;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream};
use tracing::{debug, trace};

const ENFILE: i32 = 23;
const EMFILE: i32 = 24;

/// Exclusive handle to one connected TCP socket. The socket is closed when this is dropped.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl Connection {
    /// Connect to `endpoint`, blocking for as long as the OS allows. No timeout is applied.
    pub fn open(endpoint: &Endpoint) -> Result<Self, DaytimeError> {
        debug!(%endpoint, "connecting");

        let stream = TcpStream::connect(endpoint.socket_addr())
            .map_err(|source| connect_error(endpoint, source))?;
        let peer = stream
            .peer_addr()
            .unwrap_or_else(|_| SocketAddr::V4(endpoint.socket_addr()));

        debug!(%peer, "connected");
        Ok(Connection { stream, peer })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Copy everything the peer sends into `writer` until it closes the connection
    pub fn receive_into<W: Write>(&mut self, writer: W) -> Result<u64, DaytimeError> {
        receive(&mut self.stream, writer)
    }

    pub fn close(self) {
        debug!(peer = %self.peer, "closing connection");
    }
}

/// Socket allocation and connect happen in a single call, so the OS error decides which failed.
fn connect_error(endpoint: &Endpoint, source: io::Error) -> DaytimeError {
    if is_socket_allocation_failure(&source) {
        DaytimeError::SocketCreation { source }
    } else {
        DaytimeError::Connection {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}

fn is_socket_allocation_failure(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::OutOfMemory || matches!(e.raw_os_error(), Some(ENFILE | EMFILE))
}

/// Read from `reader` until end of stream, writing and flushing each chunk to `writer` as it arrives.
///
/// Returns the number of bytes copied. A zero-length read ends the loop successfully, an
/// interrupted read is retried, and any other read or write failure is returned immediately.
pub fn receive<R, W>(mut reader: R, mut writer: W) -> Result<u64, DaytimeError>
where
    R: Read,
    W: Write,
{
    let mut buffer = ReceiveBuffer::new();
    let mut total = 0;

    loop {
        let chunk = match buffer.fill(&mut reader) {
            Ok(chunk) if chunk.is_empty() => {
                debug!(bytes = total, "end of stream");
                return Ok(total);
            }
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(DaytimeError::Read { source }),
        };

        trace!(len = chunk.len(), "received");

        writer
            .write_all(chunk)
            .and_then(|_| writer.flush())
            .map_err(|source| DaytimeError::Write { source })?;

        total += chunk.len() as u64;
    }
}

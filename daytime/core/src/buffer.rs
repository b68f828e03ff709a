use bytes::BytesMut;
use std::io::{self, Read};

/// Size of a single receive
pub const MAXLINE: usize = 4096;

/// Fixed-size scratch space for one read. Each fill overwrites the previous contents.
pub struct ReceiveBuffer {
    buf: BytesMut,
}

impl ReceiveBuffer {
    pub fn new() -> Self {
        ReceiveBuffer {
            buf: BytesMut::zeroed(MAXLINE),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Read once from `reader`, returning the bytes received. An empty slice is end of stream.
    pub fn fill<R>(&mut self, reader: &mut R) -> io::Result<&[u8]>
    where
        R: Read + ?Sized,
    {
        let n = reader.read(&mut self.buf[..])?;
        Ok(&self.buf[..n])
    }
}

impl Default for ReceiveBuffer {
    fn default() -> Self {
        ReceiveBuffer::new()
    }
}

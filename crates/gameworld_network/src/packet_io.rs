use anyhow::{bail, Context};
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use gameworld_wire::{FrameDecoder, FrameEncoder, SymmetricKey};

const READ_BUF_SIZE: usize = 4096;

/// Thin async wrapper over a [`TcpStream`] and the frame codec: read
/// bytes until one full frame decodes, or write one frame's bytes out.
/// Mirrors the shape of the teacher's `PacketIo`, minus the split
/// reader/writer tasks — sessions here read-then-dispatch synchronously
/// because every inbound frame becomes exactly one posted closure.
pub struct PacketIo {
    stream: TcpStream,
    enc: FrameEncoder,
    dec: FrameDecoder,
}

impl PacketIo {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            enc: FrameEncoder::new(),
            dec: FrameDecoder::new(),
        }
    }

    pub fn enable_encryption(&mut self, key: SymmetricKey) {
        self.enc.enable_encryption(key);
        self.dec.enable_encryption(key);
    }

    pub async fn send_frame(&mut self, payload: &[u8]) -> anyhow::Result<()> {
        let frame = self.enc.encode_frame(payload).context("encoding outbound frame")?;
        self.stream.write_all(&frame).await.context("writing frame to socket")?;
        Ok(())
    }

    /// Reads from the socket until one full frame is available, then
    /// returns its (decrypted, checksum-verified) payload.
    pub async fn recv_frame(&mut self) -> anyhow::Result<BytesMut> {
        loop {
            if let Some(payload) = self.dec.try_next_frame()? {
                return Ok(payload);
            }

            self.dec.reserve(READ_BUF_SIZE);
            let mut buf = self.dec.take_capacity();

            if self.stream.read_buf(&mut buf).await? == 0 {
                bail!("connection closed before a full frame arrived");
            }

            self.dec.queue_bytes(buf);
        }
    }

    pub fn set_nodelay(&self) -> anyhow::Result<()> {
        self.stream.set_nodelay(true).context("setting TCP_NODELAY")
    }
}

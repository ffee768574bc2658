//! Frame-level encode/decode: `u16 length | u32 adler32 | payload`, with
//! the payload symmetrically encrypted once a session key is installed.
//!
//! Mirrors the shape of a teacher packet codec (buffer, try-take-one-frame,
//! queue more bytes on demand) but the wire shape itself — length-prefix
//! plus checksum plus an XTEA-keyed payload — is this protocol's own.

use bytes::{Buf, BufMut, BytesMut};
use byteorder::{ByteOrder, LittleEndian};

use crate::adler32::adler32;
use crate::error::WireError;
use crate::xtea;

const MAX_FRAME_LEN: usize = u16::MAX as usize;
const HEADER_LEN: usize = 2 + 4; // u16 length + u32 checksum
const BLOCK_SIZE: usize = 8;

/// Incremental frame decoder. Owns the receive buffer; callers append
/// bytes as they arrive from the socket and call [`Self::try_next_frame`]
/// until it returns `None`.
#[derive(Default)]
pub struct FrameDecoder {
    buf: BytesMut,
    cipher_key: Option<xtea::Key>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the symmetric key. Frames decoded after this point are
    /// assumed to have an encrypted payload.
    pub fn enable_encryption(&mut self, key: xtea::Key) {
        self.cipher_key = Some(key);
    }

    /// Reserves capacity in the internal buffer and hands back a chunk the
    /// caller can `read_buf` the socket into.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    pub fn take_capacity(&mut self) -> BytesMut {
        self.buf.split_off(self.buf.len())
    }

    pub fn queue_bytes(&mut self, bytes: BytesMut) {
        self.buf.unsplit(bytes);
    }

    /// Attempts to pull one complete, checksum-verified, decrypted frame
    /// out of the buffer. Returns `Ok(None)` if more bytes are needed.
    pub fn try_next_frame(&mut self) -> Result<Option<BytesMut>, WireError> {
        if self.buf.len() < HEADER_LEN {
            return Ok(None);
        }

        let declared_len = LittleEndian::read_u16(&self.buf[0..2]) as usize;

        if declared_len > MAX_FRAME_LEN - HEADER_LEN {
            return Err(WireError::FrameTooLarge {
                declared: declared_len,
                max: MAX_FRAME_LEN - HEADER_LEN,
            });
        }

        if self.buf.len() < HEADER_LEN + declared_len {
            return Ok(None);
        }

        let expected_checksum = LittleEndian::read_u32(&self.buf[2..6]);

        self.buf.advance(HEADER_LEN);
        let mut payload = self.buf.split_to(declared_len);

        let actual_checksum = adler32(&payload);
        if actual_checksum != expected_checksum {
            return Err(WireError::ChecksumMismatch {
                expected: expected_checksum,
                actual: actual_checksum,
            });
        }

        if let Some(key) = &self.cipher_key {
            if payload.len() % BLOCK_SIZE != 0 || payload.is_empty() {
                return Err(WireError::Truncated);
            }

            xtea::decrypt(&mut payload, key);

            let plain_len = LittleEndian::read_u16(&payload[0..2]) as usize;
            if plain_len + 2 > payload.len() {
                return Err(WireError::Truncated);
            }

            payload.advance(2);
            payload.truncate(plain_len);
        }

        Ok(Some(payload))
    }
}

/// Frame encoder: assembles the same `length | checksum | payload` shape,
/// encrypting and padding the payload to the cipher's block size when a
/// key has been installed.
#[derive(Default)]
pub struct FrameEncoder {
    cipher_key: Option<xtea::Key>,
}

impl FrameEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_encryption(&mut self, key: xtea::Key) {
        self.cipher_key = Some(key);
    }

    /// Encodes `payload` into a ready-to-send frame.
    pub fn encode_frame(&self, payload: &[u8]) -> Result<BytesMut, WireError> {
        let body = match &self.cipher_key {
            None => BytesMut::from(payload),
            Some(key) => {
                let mut plain = BytesMut::with_capacity(payload.len() + 2);
                plain.put_u16_le(payload.len() as u16);
                plain.extend_from_slice(payload);

                let pad = (BLOCK_SIZE - plain.len() % BLOCK_SIZE) % BLOCK_SIZE;
                plain.resize(plain.len() + pad, 0);

                xtea::encrypt(&mut plain, key);
                plain
            }
        };

        if body.len() > MAX_FRAME_LEN - HEADER_LEN {
            return Err(WireError::FrameTooLarge {
                declared: body.len(),
                max: MAX_FRAME_LEN - HEADER_LEN,
            });
        }

        let mut out = BytesMut::with_capacity(HEADER_LEN + body.len());
        out.put_u16_le(body.len() as u16);
        out.put_u32_le(adler32(&body));
        out.extend_from_slice(&body);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(key: Option<xtea::Key>, payload: &[u8]) -> BytesMut {
        let mut enc = FrameEncoder::new();
        let mut dec = FrameDecoder::new();

        if let Some(k) = key {
            enc.enable_encryption(k);
            dec.enable_encryption(k);
        }

        let frame = enc.encode_frame(payload).unwrap();
        dec.queue_bytes(BytesMut::from(&frame[..]));
        dec.try_next_frame().unwrap().unwrap()
    }

    #[test]
    fn plaintext_round_trip() {
        let payload = b"hello gameworld";
        assert_eq!(&round_trip(None, payload)[..], payload);
    }

    #[test]
    fn encrypted_round_trip() {
        let key = xtea::Key([11, 22, 33, 44]);
        let payload = b"a somewhat longer opcode payload body";
        assert_eq!(&round_trip(Some(key), payload)[..], payload);
    }

    #[test]
    fn checksum_mismatch_is_rejected() {
        let enc = FrameEncoder::new();
        let mut frame = enc.encode_frame(b"payload").unwrap();
        // Corrupt one payload byte without fixing up the checksum.
        let last = frame.len() - 1;
        frame[last] ^= 0xFF;

        let mut dec = FrameDecoder::new();
        dec.queue_bytes(frame);
        assert!(matches!(
            dec.try_next_frame(),
            Err(WireError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn incomplete_frame_requests_more_bytes() {
        let enc = FrameEncoder::new();
        let frame = enc.encode_frame(b"payload").unwrap();

        let mut dec = FrameDecoder::new();
        dec.queue_bytes(BytesMut::from(&frame[..frame.len() - 1]));
        assert!(dec.try_next_frame().unwrap().is_none());
    }

    #[test]
    fn oversized_declared_length_is_rejected() {
        let mut dec = FrameDecoder::new();
        let mut bogus = BytesMut::new();
        bogus.put_u16_le(u16::MAX);
        bogus.put_u32_le(0);
        dec.queue_bytes(bogus);

        assert!(matches!(
            dec.try_next_frame(),
            Err(WireError::FrameTooLarge { .. })
        ));
    }
}

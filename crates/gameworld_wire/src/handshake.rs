//! Parsing for the unencrypted challenge frame (`0x1F`) and the RSA-wrapped
//! login block that follows it. Framing/checksum verification happens one
//! layer down in [`crate::codec`]; this module only interprets the
//! already-checksummed plaintext bytes of those two frames.

use byteorder::{ByteOrder, LittleEndian};
use rand::RngCore;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};

use crate::error::WireError;
use crate::xtea;

pub const CHALLENGE_OPCODE: u8 = 0x1F;

/// The unencrypted frame the server sends immediately after `accept`.
#[derive(Debug, Clone, Copy)]
pub struct Challenge {
    pub timestamp: u32,
    pub random_byte: u8,
}

impl Challenge {
    /// Generates a fresh challenge using the current wall clock and a
    /// uniformly random byte, as required at `onConnect`.
    pub fn generate(now_unix: u32) -> Self {
        let mut byte = [0u8; 1];
        rand::thread_rng().fill_bytes(&mut byte);
        Self {
            timestamp: now_unix,
            random_byte: byte[0],
        }
    }

    /// Encodes the challenge frame body: opcode, then the two fields.
    pub fn encode(&self) -> [u8; 6] {
        let mut out = [0u8; 6];
        out[0] = CHALLENGE_OPCODE;
        LittleEndian::write_u32(&mut out[1..5], self.timestamp);
        out[5] = self.random_byte;
        out
    }
}

/// The decrypted contents of the first inbound frame's RSA block.
#[derive(Debug)]
pub struct LoginBlock {
    pub symmetric_key: xtea::Key,
    pub account_name: String,
    pub character_name: String,
    pub password: String,
    pub challenge_timestamp: u32,
    pub challenge_random_byte: u8,
    pub extended_client: bool,
}

/// Everything carried by the first inbound (post-challenge) frame.
#[derive(Debug)]
pub struct FirstFrame {
    pub os_tag: u16,
    pub protocol_version: u16,
    pub login: LoginBlock,
}

/// Parses the first inbound frame's plaintext body: `os_tag (u16) |
/// protocol_version (u16) | rsa_block`. Decrypts `rsa_block` with the
/// server's private key and reads the fields packed inside it.
pub fn parse_first_frame(
    body: &[u8],
    rsa_key: &RsaPrivateKey,
) -> Result<FirstFrame, WireError> {
    if body.len() < 4 {
        return Err(WireError::BufferOverrun);
    }

    let os_tag = LittleEndian::read_u16(&body[0..2]);
    let protocol_version = LittleEndian::read_u16(&body[2..4]);
    let encrypted = &body[4..];

    let decrypted = rsa_key.decrypt(Pkcs1v15Encrypt, encrypted)?;
    let login = parse_login_block(&decrypted)?;

    Ok(FirstFrame {
        os_tag,
        protocol_version,
        login,
    })
}

fn parse_login_block(buf: &[u8]) -> Result<LoginBlock, WireError> {
    let mut cursor = buf;

    let mut take_u32 = |c: &mut &[u8]| -> Result<u32, WireError> {
        if c.len() < 4 {
            return Err(WireError::BufferOverrun);
        }
        let v = LittleEndian::read_u32(&c[0..4]);
        *c = &c[4..];
        Ok(v)
    };

    let w0 = take_u32(&mut cursor)?;
    let w1 = take_u32(&mut cursor)?;
    let w2 = take_u32(&mut cursor)?;
    let w3 = take_u32(&mut cursor)?;
    let symmetric_key = xtea::Key::from_words([w0, w1, w2, w3]);

    let account_name = take_string(&mut cursor)?;
    let character_name = take_string(&mut cursor)?;
    let password = take_string(&mut cursor)?;

    let challenge_timestamp = take_u32(&mut cursor)?;

    if cursor.is_empty() {
        return Err(WireError::BufferOverrun);
    }
    let challenge_random_byte = cursor[0];
    cursor = &cursor[1..];

    // The extended-client feature tag is optional: its absence just means
    // an older client, not a truncated frame.
    let extended_client = !cursor.is_empty() && cursor[0] != 0;

    if account_name.is_empty() {
        return Err(WireError::EmptyAccountName);
    }

    Ok(LoginBlock {
        symmetric_key,
        account_name,
        character_name,
        password,
        challenge_timestamp,
        challenge_random_byte,
        extended_client,
    })
}

/// Reads a length-prefixed (`u16` LE) UTF-8 string.
fn take_string(cursor: &mut &[u8]) -> Result<String, WireError> {
    if cursor.len() < 2 {
        return Err(WireError::BufferOverrun);
    }
    let len = LittleEndian::read_u16(&cursor[0..2]) as usize;
    *cursor = &cursor[2..];

    if cursor.len() < len {
        return Err(WireError::BufferOverrun);
    }
    let s = String::from_utf8_lossy(&cursor[..len]).into_owned();
    *cursor = &cursor[len..];
    Ok(s)
}

/// Validates the echoed challenge and protocol version window. Returns the
/// specific [`WireError`] variant naming which check failed; §4.1 treats
/// all of them identically (plain disconnect, no explanatory frame) but
/// callers still want to log *why*.
pub fn validate_handshake(
    login: &LoginBlock,
    challenge: &Challenge,
    supported: std::ops::RangeInclusive<u16>,
    protocol_version: u16,
) -> Result<(), WireError> {
    if login.challenge_timestamp != challenge.timestamp
        || login.challenge_random_byte != challenge.random_byte
    {
        return Err(WireError::ChallengeMismatch);
    }

    if !supported.contains(&protocol_version) {
        return Err(WireError::UnsupportedVersion {
            version: protocol_version,
            min: *supported.start(),
            max: *supported.end(),
        });
    }

    Ok(())
}

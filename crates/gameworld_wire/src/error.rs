use thiserror::Error;

/// Tier-1 protocol violations per the error handling design: every variant
/// here is handled by dropping the connection without a reply frame.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("declared frame length {declared} exceeds the maximum of {max}")]
    FrameTooLarge { declared: usize, max: usize },
    #[error("adler-32 checksum mismatch: expected {expected:08x}, got {actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("buffer ended before the declared frame length")]
    Truncated,
    #[error("RSA decryption of the handshake block failed")]
    Rsa(#[from] rsa::Error),
    #[error("handshake challenge echo did not match")]
    ChallengeMismatch,
    #[error("account name was empty")]
    EmptyAccountName,
    #[error("protocol version {version} is outside the supported window {min}..={max}")]
    UnsupportedVersion { version: u16, min: u16, max: u16 },
    #[error("payload buffer ended while decoding a field")]
    BufferOverrun,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! Wire codec (C1): frame/checksum plumbing, the RSA-wrapped handshake,
//! and the symmetric stream cipher applied to every frame after it.

pub mod adler32;
pub mod codec;
pub mod error;
pub mod handshake;
pub mod xtea;

pub use codec::{FrameDecoder, FrameEncoder};
pub use error::WireError;
pub use handshake::{parse_first_frame, validate_handshake, Challenge, FirstFrame, LoginBlock};
pub use xtea::Key as SymmetricKey;

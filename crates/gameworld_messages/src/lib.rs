//! Wire payload types for the ~80 opcodes exchanged once a session is past
//! the handshake (`gameworld_wire` owns framing/encryption/handshake;
//! this crate owns what's inside a decrypted frame body).

pub mod c2s;
pub mod s2c;
pub mod wire_value;

pub use wire_value::{Decode, DecodeError, DecodeResult, Direction, Encode, GameString, Light, Outfit, Position};

//! The `Encode`/`Decode` traits every opcode payload implements, plus the
//! primitive wire types (position, direction, light, outfit, ...) shared
//! across c2s/s2c messages.

use byteorder::{ByteOrder, LittleEndian};
use bytes::{BufMut, BytesMut};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("buffer ended while decoding a field")]
    BufferOverrun,
    #[error("string length {0} exceeds the protocol maximum")]
    StringTooLong(usize),
    #[error("invalid direction byte {0:#x}")]
    InvalidDirection(u8),
    #[error("autowalk direction count ({declared}) is inconsistent with the remaining buffer ({available} bytes)")]
    InconsistentAutowalk { declared: usize, available: usize },
    #[error("opcode {0:#x} has no known payload shape")]
    UnknownOpcode(u8),
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Encodes a value's wire representation into a growable buffer.
pub trait Encode {
    fn encode(&self, buf: &mut BytesMut);
}

/// Decodes a value from the front of a byte slice, shrinking it as bytes
/// are consumed — mirroring the teacher protocol crate's `Decode` trait.
pub trait Decode<'a>: Sized {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self>;
}

macro_rules! impl_primitive {
    ($ty:ty, $size:literal, $read:ident, $write:ident) => {
        impl Encode for $ty {
            fn encode(&self, buf: &mut BytesMut) {
                let mut tmp = [0u8; $size];
                LittleEndian::$write(&mut tmp, *self);
                buf.extend_from_slice(&tmp);
            }
        }

        impl<'a> Decode<'a> for $ty {
            fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
                if r.len() < $size {
                    return Err(DecodeError::BufferOverrun);
                }
                let v = LittleEndian::$read(&r[..$size]);
                *r = &r[$size..];
                Ok(v)
            }
        }
    };
}

impl_primitive!(u16, 2, read_u16, write_u16);
impl_primitive!(i16, 2, read_i16, write_i16);
impl_primitive!(u32, 4, read_u32, write_u32);
impl_primitive!(i32, 4, read_i32, write_i32);
impl_primitive!(u64, 8, read_u64, write_u64);

impl Encode for u8 {
    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u8(*self);
    }
}

impl<'a> Decode<'a> for u8 {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        if r.is_empty() {
            return Err(DecodeError::BufferOverrun);
        }
        let v = r[0];
        *r = &r[1..];
        Ok(v)
    }
}

impl Encode for bool {
    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u8(u8::from(*self));
    }
}

impl<'a> Decode<'a> for bool {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(u8::decode(r)? != 0)
    }
}

/// A length-prefixed (`u16` LE) UTF-8 string, the same shape the handshake
/// uses for account/character names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameString(pub String);

impl Encode for GameString {
    fn encode(&self, buf: &mut BytesMut) {
        (self.0.len() as u16).encode(buf);
        buf.extend_from_slice(self.0.as_bytes());
    }
}

impl<'a> Decode<'a> for GameString {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let len = u16::decode(r)? as usize;
        if r.len() < len {
            return Err(DecodeError::BufferOverrun);
        }
        let s = String::from_utf8_lossy(&r[..len]).into_owned();
        *r = &r[len..];
        Ok(GameString(s))
    }
}

impl From<&str> for GameString {
    fn from(s: &str) -> Self {
        GameString(s.to_owned())
    }
}

/// A world tile coordinate. `z` is the floor (0 = sky, 15 = deepest
/// basement), matching the original map's layer numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u16,
    pub y: u16,
    pub z: u8,
}

impl Encode for Position {
    fn encode(&self, buf: &mut BytesMut) {
        self.x.encode(buf);
        self.y.encode(buf);
        self.z.encode(buf);
    }
}

impl<'a> Decode<'a> for Position {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Position {
            x: u16::decode(r)?,
            y: u16::decode(r)?,
            z: u8::decode(r)?,
        })
    }
}

/// Movement/turn direction. Wire values per the glossary: 1=E, 2=NE, 3=N,
/// 4=NW, 5=W, 6=SW, 7=S, 8=SE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    East = 1,
    NorthEast = 2,
    North = 3,
    NorthWest = 4,
    West = 5,
    SouthWest = 6,
    South = 7,
    SouthEast = 8,
}

impl Direction {
    pub fn from_byte(b: u8) -> DecodeResult<Self> {
        Ok(match b {
            1 => Direction::East,
            2 => Direction::NorthEast,
            3 => Direction::North,
            4 => Direction::NorthWest,
            5 => Direction::West,
            6 => Direction::SouthWest,
            7 => Direction::South,
            8 => Direction::SouthEast,
            other => return Err(DecodeError::InvalidDirection(other)),
        })
    }
}

impl Encode for Direction {
    fn encode(&self, buf: &mut BytesMut) {
        (*self as u8).encode(buf);
    }
}

impl<'a> Decode<'a> for Direction {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Direction::from_byte(u8::decode(r)?)
    }
}

/// RGB-ish outfit description: looktype plus the four dye-able slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outfit {
    pub look_type: u16,
    pub head: u8,
    pub body: u8,
    pub legs: u8,
    pub feet: u8,
    pub addons: u8,
}

impl Encode for Outfit {
    fn encode(&self, buf: &mut BytesMut) {
        self.look_type.encode(buf);
        self.head.encode(buf);
        self.body.encode(buf);
        self.legs.encode(buf);
        self.feet.encode(buf);
        self.addons.encode(buf);
    }
}

impl<'a> Decode<'a> for Outfit {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Outfit {
            look_type: u16::decode(r)?,
            head: u8::decode(r)?,
            body: u8::decode(r)?,
            legs: u8::decode(r)?,
            feet: u8::decode(r)?,
            addons: u8::decode(r)?,
        })
    }
}

/// Ambient light emitted by a creature or tile item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Light {
    pub level: u8,
    pub color: u8,
}

impl Encode for Light {
    fn encode(&self, buf: &mut BytesMut) {
        self.level.encode(buf);
        self.color.encode(buf);
    }
}

impl<'a> Decode<'a> for Light {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Light {
            level: u8::decode(r)?,
            color: u8::decode(r)?,
        })
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, buf: &mut BytesMut) {
        for item in self {
            item.encode(buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T>(value: T)
    where
        T: Encode + for<'a> Decode<'a> + std::fmt::Debug + PartialEq,
    {
        let mut buf = BytesMut::new();
        value.encode(&mut buf);
        let mut slice = &buf[..];
        let decoded = T::decode(&mut slice).unwrap();
        assert_eq!(value, decoded);
        assert!(slice.is_empty());
    }

    #[test]
    fn primitives_round_trip() {
        round_trip(42u8);
        round_trip(1234u16);
        round_trip(0xDEAD_BEEFu32);
        round_trip(true);
        round_trip(Position { x: 1000, y: 2000, z: 7 });
        round_trip(Direction::NorthWest);
        round_trip(GameString("a player name".to_owned()));
        round_trip(Outfit { look_type: 128, head: 1, body: 2, legs: 3, feet: 4, addons: 3 });
        round_trip(Light { level: 0, color: 215 });
    }

    #[test]
    fn rejects_invalid_direction() {
        let mut slice: &[u8] = &[9];
        assert_eq!(
            Direction::decode(&mut slice),
            Err(DecodeError::InvalidDirection(9))
        );
    }

    #[test]
    fn string_buffer_overrun() {
        let mut slice: &[u8] = &[5, 0, b'h', b'i'];
        assert_eq!(GameString::decode(&mut slice), Err(DecodeError::BufferOverrun));
    }
}

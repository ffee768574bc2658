use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeError, DecodeResult, Direction, Encode};

/// `0x64` — a queue of single-tile steps the client wants the player to
/// walk automatically. `n` is a byte count; §4.3 requires dropping the
/// opcode silently (not disconnecting) if the declared count disagrees
/// with the remaining buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autowalk {
    pub directions: Vec<Direction>,
}

impl Encode for Autowalk {
    fn encode(&self, buf: &mut BytesMut) {
        (self.directions.len() as u8).encode(buf);
        for dir in &self.directions {
            dir.encode(buf);
        }
    }
}

impl<'a> Decode<'a> for Autowalk {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let n = u8::decode(r)? as usize;

        if r.len() < n {
            return Err(DecodeError::InconsistentAutowalk {
                declared: n,
                available: r.len(),
            });
        }

        let mut directions = Vec::with_capacity(n);
        for _ in 0..n {
            directions.push(Direction::decode(r)?);
        }

        Ok(Autowalk { directions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let msg = Autowalk {
            directions: vec![Direction::East, Direction::North, Direction::West],
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);

        let mut slice = &buf[..];
        assert_eq!(Autowalk::decode(&mut slice).unwrap(), msg);
    }

    #[test]
    fn inconsistent_count_is_reported_not_panicked() {
        // n = 3 but only 1 direction byte follows.
        let mut slice: &[u8] = &[3, 1];
        assert_eq!(
            Autowalk::decode(&mut slice),
            Err(DecodeError::InconsistentAutowalk {
                declared: 3,
                available: 1
            })
        );
    }
}

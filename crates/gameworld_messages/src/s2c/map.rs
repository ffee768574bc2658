use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, Position};

/// `0x64` — full map description centered on the player's new tile. The
/// tile/item encoding itself is opaque here; the view layer
/// (`gameworld_view`) is responsible for producing `data`, this type only
/// owns the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullMap {
    pub origin: Position,
    pub data: Vec<u8>,
}

impl Encode for FullMap {
    fn encode(&self, buf: &mut BytesMut) {
        self.origin.encode(buf);
        (self.data.len() as u16).encode(buf);
        buf.extend_from_slice(&self.data);
    }
}

impl<'a> Decode<'a> for FullMap {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let origin = Position::decode(r)?;
        let len = u16::decode(r)? as usize;
        if r.len() < len {
            return Err(crate::wire_value::DecodeError::BufferOverrun);
        }
        let data = r[..len].to_vec();
        *r = &r[len..];
        Ok(FullMap { origin, data })
    }
}

/// `0x65..0x68` — a single-row/column strip revealed as the player walks
/// toward the edge of their viewport. `edge` distinguishes which of the
/// four strips this is, for callers that multiplex over one `Encode`/
/// `Decode` impl rather than branching on the opcode byte up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStrip {
    pub edge: Edge,
    pub data: Vec<u8>,
}

impl Encode for EdgeStrip {
    fn encode(&self, buf: &mut BytesMut) {
        (self.data.len() as u16).encode(buf);
        buf.extend_from_slice(&self.data);
    }
}

impl EdgeStrip {
    pub fn decode_as(edge: Edge, r: &mut &[u8]) -> DecodeResult<Self> {
        let len = u16::decode(r)? as usize;
        if r.len() < len {
            return Err(crate::wire_value::DecodeError::BufferOverrun);
        }
        let data = r[..len].to_vec();
        *r = &r[len..];
        Ok(EdgeStrip { edge, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_map_round_trip() {
        let msg = FullMap {
            origin: Position { x: 100, y: 100, z: 7 },
            data: vec![1, 2, 3, 4, 5],
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(FullMap::decode(&mut slice).unwrap(), msg);
        assert!(slice.is_empty());
    }

    #[test]
    fn edge_strip_round_trip() {
        let msg = EdgeStrip { edge: Edge::North, data: vec![9, 9] };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(EdgeStrip::decode_as(Edge::North, &mut slice).unwrap(), msg);
    }
}

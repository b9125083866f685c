//! TP (Transport Protocol) module
//!
//! SOME/IP messages larger than the transport MTU are split into segments,
//! each carrying a 4-byte TP sub-header immediately after the 16-byte
//! SOME/IP header. This module packs and unpacks that sub-header.

use crate::cursor::{Reader, Writer};
use crate::endian::{read_u32, write_u32, Endian};
use crate::error::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// TP sub-header: a 28-bit segment offset (in 16-byte units), a 3-bit
/// reserved field, and a 1-bit "more segments follow" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TpHeader {
    /// Byte offset of this segment's payload within the reassembled
    /// message, expressed in units of 16 bytes.
    pub offset_units_16b: u32,
    /// Reserved 3-bit field. Preserved verbatim on decode; never validated.
    pub reserved: u8,
    /// Whether more segments follow this one.
    pub more_segments: bool,
}

/// Packs a [`TpHeader`] into its 32-bit wire representation.
pub const fn pack_tp_header(tp: TpHeader) -> u32 {
    let offset = tp.offset_units_16b & 0x0FFF_FFFF;
    let rsv = (tp.reserved & 0x7) as u32;
    let m = if tp.more_segments { 1u32 } else { 0u32 };
    (offset << 4) | (rsv << 1) | m
}

/// Unpacks a 32-bit wire value into a [`TpHeader`].
pub const fn unpack_tp_header(v: u32) -> TpHeader {
    TpHeader {
        offset_units_16b: (v >> 4) & 0x0FFF_FFFF,
        reserved: ((v >> 1) & 0x7) as u8,
        more_segments: (v & 0x1) != 0,
    }
}

/// Encodes a TP sub-header, always big-endian.
pub fn encode_tp_header(out: &mut Writer<'_>, tp: TpHeader) -> Result<()> {
    write_u32(out, Endian::Big, pack_tp_header(tp))
}

/// Decodes a TP sub-header, always big-endian.
pub fn decode_tp_header(input: &mut Reader<'_>) -> Result<TpHeader> {
    let v = read_u32(input, Endian::Big)?;
    Ok(unpack_tp_header(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_round_trip() {
        let tp = TpHeader { offset_units_16b: 0x0123_4567 & 0x0FFF_FFFF, reserved: 0x5, more_segments: true };
        let packed = pack_tp_header(tp);
        assert_eq!(unpack_tp_header(packed), tp);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let tp = TpHeader { offset_units_16b: 16, reserved: 0, more_segments: true };
        let mut buf = [0u8; 4];
        {
            let mut w = Writer::new(&mut buf);
            encode_tp_header(&mut w, tp).unwrap();
        }
        let mut r = Reader::new(&buf);
        assert_eq!(decode_tp_header(&mut r).unwrap(), tp);
    }

    #[test]
    fn test_more_segments_bit() {
        let tp = TpHeader { offset_units_16b: 0, reserved: 0, more_segments: false };
        assert_eq!(pack_tp_header(tp) & 1, 0);
        let tp2 = TpHeader { more_segments: true, ..tp };
        assert_eq!(pack_tp_header(tp2) & 1, 1);
    }

    #[test]
    fn test_reserved_preserved_unvalidated() {
        // Any 3-bit value round-trips, including values a validating
        // decoder might reject; reserved is never checked against zero.
        for reserved in 0u8..=7 {
            let tp = TpHeader { offset_units_16b: 1, reserved, more_segments: false };
            assert_eq!(unpack_tp_header(pack_tp_header(tp)), tp);
        }
    }
}

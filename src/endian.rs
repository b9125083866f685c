//! Endian module
//!
//! Byte-order aware scalar encode/decode helpers used by the AUTOSAR payload
//! serializer. SOME/IP and SOME/IP-SD headers are always big-endian and use
//! `byteorder::NetworkEndian` directly; payload scalars can be either
//! big-endian or little-endian per [`crate::ser::config::Config`], so this
//! module offers a runtime-selectable [`Endian`] in addition to the
//! compile-time `byteorder` traits.

use crate::cursor::{Reader, Writer};
use crate::error::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Byte order selector for payload scalar encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Writes an unsigned integer's low `N` bytes to `out` in the given byte order.
///
/// `N` must equal `core::mem::size_of::<U>()`; callers use the `write_u8`/
/// `write_u16`/`write_u32`/`write_u64` wrappers below rather than calling
/// this directly.
fn write_uint_bytes(out: &mut Writer<'_>, endian: Endian, bytes: &mut [u8]) -> Result<()> {
    if endian == Endian::Little {
        bytes.reverse();
    }
    out.write_bytes(bytes)
}

/// Writes a `u8` (byte-order has no effect, provided for symmetry).
pub fn write_u8(out: &mut Writer<'_>, _endian: Endian, v: u8) -> Result<()> {
    out.write_byte(v)
}

/// Writes a `u16` in the given byte order.
pub fn write_u16(out: &mut Writer<'_>, endian: Endian, v: u16) -> Result<()> {
    let mut bytes = v.to_be_bytes();
    write_uint_bytes(out, endian, &mut bytes)
}

/// Writes a `u32` in the given byte order.
pub fn write_u32(out: &mut Writer<'_>, endian: Endian, v: u32) -> Result<()> {
    let mut bytes = v.to_be_bytes();
    write_uint_bytes(out, endian, &mut bytes)
}

/// Writes a `u64` in the given byte order.
pub fn write_u64(out: &mut Writer<'_>, endian: Endian, v: u64) -> Result<()> {
    let mut bytes = v.to_be_bytes();
    write_uint_bytes(out, endian, &mut bytes)
}

/// Writes a 24-bit big-endian unsigned value (used by SD entry `ttl`).
///
/// Rejects `v > 0x00FF_FFFF` with [`Error::InvalidLength`], mirroring the
/// original's `write_u24_be`.
pub fn write_u24_be(out: &mut Writer<'_>, v: u32) -> Result<()> {
    if v > 0x00FF_FFFF {
        return Err(Error::InvalidLength);
    }
    out.write_byte(((v >> 16) & 0xFF) as u8)?;
    out.write_byte(((v >> 8) & 0xFF) as u8)?;
    out.write_byte((v & 0xFF) as u8)
}

/// Reads a `u8` (byte-order has no effect, provided for symmetry).
pub fn read_u8(input: &mut Reader<'_>, _endian: Endian) -> Result<u8> {
    input.read_byte()
}

/// Reads a `u16` in the given byte order.
pub fn read_u16(input: &mut Reader<'_>, endian: Endian) -> Result<u16> {
    let bytes = input.read_bytes(2)?;
    Ok(match endian {
        Endian::Big => u16::from_be_bytes([bytes[0], bytes[1]]),
        Endian::Little => u16::from_le_bytes([bytes[0], bytes[1]]),
    })
}

/// Reads a `u32` in the given byte order.
pub fn read_u32(input: &mut Reader<'_>, endian: Endian) -> Result<u32> {
    let bytes = input.read_bytes(4)?;
    Ok(match endian {
        Endian::Big => u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        Endian::Little => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    })
}

/// Reads a `u64` in the given byte order.
pub fn read_u64(input: &mut Reader<'_>, endian: Endian) -> Result<u64> {
    let bytes = input.read_bytes(8)?;
    let mut arr = [0u8; 8];
    arr.copy_from_slice(bytes);
    Ok(match endian {
        Endian::Big => u64::from_be_bytes(arr),
        Endian::Little => u64::from_le_bytes(arr),
    })
}

/// Reads a 24-bit big-endian unsigned value (used by SD entry `ttl`).
pub fn read_u24_be(input: &mut Reader<'_>) -> Result<u32> {
    let bytes = input.read_bytes(3)?;
    Ok(((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_u16_big() {
        let mut buf = [0u8; 2];
        {
            let mut w = Writer::new(&mut buf);
            write_u16(&mut w, Endian::Big, 0x1234).unwrap();
        }
        assert_eq!(buf, [0x12, 0x34]);
        let mut r = Reader::new(&buf);
        assert_eq!(read_u16(&mut r, Endian::Big).unwrap(), 0x1234);
    }

    #[test]
    fn test_write_read_u32_little() {
        let mut buf = [0u8; 4];
        {
            let mut w = Writer::new(&mut buf);
            write_u32(&mut w, Endian::Little, 0x0102_0304).unwrap();
        }
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
        let mut r = Reader::new(&buf);
        assert_eq!(read_u32(&mut r, Endian::Little).unwrap(), 0x0102_0304);
    }

    #[test]
    fn test_u24_round_trip() {
        let mut buf = [0u8; 3];
        {
            let mut w = Writer::new(&mut buf);
            write_u24_be(&mut w, 0x00ABCDEF & 0x00FF_FFFF).unwrap();
        }
        let mut r = Reader::new(&buf);
        assert_eq!(read_u24_be(&mut r).unwrap(), 0x00ABCDEF & 0x00FF_FFFF);
    }

    #[test]
    fn test_u24_overflow_rejected() {
        let mut buf = [0u8; 3];
        let mut w = Writer::new(&mut buf);
        assert_eq!(write_u24_be(&mut w, 0x0100_0000), Err(Error::InvalidLength));
    }

    #[test]
    fn test_u64_round_trip_big() {
        let mut buf = [0u8; 8];
        {
            let mut w = Writer::new(&mut buf);
            write_u64(&mut w, Endian::Big, 0x0011_2233_4455_6677).unwrap();
        }
        let mut r = Reader::new(&buf);
        assert_eq!(read_u64(&mut r, Endian::Big).unwrap(), 0x0011_2233_4455_6677);
    }
}

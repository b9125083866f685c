//! Header module
//!
//! The 16-byte SOME/IP message header, plus [`try_parse_frame`], the
//! incremental-parsing entry point that distinguishes a frame that is
//! merely incomplete (more bytes needed) from one that is structurally
//! invalid.

use crate::cursor::{Reader, Writer};
use crate::endian::{read_u16, read_u32, read_u8, write_u16, write_u32, write_u8, Endian};
use crate::error::Error;
use crate::tp::{decode_tp_header, TpHeader};

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Service and method identifying a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageId {
    /// Service identifier.
    pub service_id: u16,
    /// Method (or event) identifier.
    pub method_id: u16,
}

/// Client and session identifying a request/response pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestId {
    /// Client identifier.
    pub client_id: u16,
    /// Session identifier.
    pub session_id: u16,
}

/// `message_type` byte values.
pub mod message_type {
    /// A fire-and-forget-free method call expecting a response.
    pub const REQUEST: u8 = 0x00;
    /// A method call that does not expect a response.
    pub const REQUEST_NO_RETURN: u8 = 0x01;
    /// An event or field notification.
    pub const NOTIFICATION: u8 = 0x02;
    /// A response to a [`REQUEST`].
    pub const RESPONSE: u8 = 0x80;
    /// An error response.
    pub const ERROR: u8 = 0x81;
    /// Flag bit OR'd into any of the above to mark a TP-segmented message.
    pub const TP_FLAG: u8 = 0x20;
}

/// The 16-byte SOME/IP message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Service/method identifier.
    pub msg: MessageId,
    /// Bytes following this field: the rest of the header tail, any TP
    /// sub-header, and the payload.
    pub length: u32,
    /// Client/session identifier.
    pub req: RequestId,
    /// Wire protocol version. Must be `1`.
    pub protocol_version: u8,
    /// Service interface version.
    pub interface_version: u8,
    /// One of the [`message_type`] constants, optionally OR'd with
    /// [`message_type::TP_FLAG`].
    pub msg_type: u8,
    /// One of the [`crate::return_code`] constants.
    pub return_code: u8,
}

/// Fixed size of the SOME/IP header, in bytes.
pub const HEADER_LEN: usize = 16;

/// Encodes `h` as 16 big-endian bytes.
pub fn encode_header(out: &mut Writer<'_>, h: &Header) -> Result<()> {
    write_u16(out, Endian::Big, h.msg.service_id)?;
    write_u16(out, Endian::Big, h.msg.method_id)?;
    write_u32(out, Endian::Big, h.length)?;
    write_u16(out, Endian::Big, h.req.client_id)?;
    write_u16(out, Endian::Big, h.req.session_id)?;
    write_u8(out, Endian::Big, h.protocol_version)?;
    write_u8(out, Endian::Big, h.interface_version)?;
    write_u8(out, Endian::Big, h.msg_type)?;
    write_u8(out, Endian::Big, h.return_code)?;
    Ok(())
}

/// Decodes the first 16 bytes of `frame` as a [`Header`].
///
/// Rejects `protocol_version != 1` with [`Error::InvalidProtocolVersion`]
/// and `length < 8` with [`Error::InvalidLength`].
pub fn decode_header(frame: &[u8]) -> Result<Header> {
    if frame.len() < HEADER_LEN {
        return Err(Error::BufferOverrun);
    }
    let mut input = Reader::new(&frame[..HEADER_LEN]);

    let service_id = read_u16(&mut input, Endian::Big)?;
    let method_id = read_u16(&mut input, Endian::Big)?;
    let length = read_u32(&mut input, Endian::Big)?;
    let client_id = read_u16(&mut input, Endian::Big)?;
    let session_id = read_u16(&mut input, Endian::Big)?;
    let protocol_version = read_u8(&mut input, Endian::Big)?;
    let interface_version = read_u8(&mut input, Endian::Big)?;
    let msg_type = read_u8(&mut input, Endian::Big)?;
    let return_code = read_u8(&mut input, Endian::Big)?;

    if protocol_version != 1 {
        return Err(Error::InvalidProtocolVersion(protocol_version));
    }
    if length < 8 {
        return Err(Error::InvalidLength);
    }

    Ok(Header {
        msg: MessageId { service_id, method_id },
        length,
        req: RequestId { client_id, session_id },
        protocol_version,
        interface_version,
        msg_type,
        return_code,
    })
}

/// True if `h.msg_type` carries the TP segmentation flag.
pub const fn has_tp_flag(h: &Header) -> bool {
    (h.msg_type & message_type::TP_FLAG) != 0
}

/// Computes the total frame size (header + everything after it) from the
/// first 8 bytes of a frame, without requiring the rest to be present yet.
pub fn frame_size_from_prefix(prefix8: &[u8]) -> Result<usize> {
    if prefix8.len() < 8 {
        return Err(Error::BufferOverrun);
    }
    let mut input = Reader::new(&prefix8[..8]);
    let _service_id = read_u16(&mut input, Endian::Big)?;
    let _method_id = read_u16(&mut input, Endian::Big)?;
    let length = read_u32(&mut input, Endian::Big)?;
    if length < 8 {
        return Err(Error::InvalidLength);
    }
    Ok(8usize + length as usize)
}

/// A successfully parsed frame: header, optional TP sub-header, and a
/// borrowed view of the payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFrame<'a> {
    /// The decoded SOME/IP header.
    pub hdr: Header,
    /// The TP sub-header, present iff `has_tp_flag(&hdr)`.
    pub tp: Option<TpHeader>,
    /// The payload bytes, borrowed from the input.
    pub payload: &'a [u8],
    /// Total number of input bytes this frame consumed.
    pub consumed: usize,
}

/// Attempts to parse one complete SOME/IP frame from the front of `bytes`.
///
/// Returns [`Error::IncompleteFrame`] (recoverable: wait for more bytes) if
/// `bytes` does not yet hold a full frame, or a structural error variant if
/// the bytes present are already malformed.
pub fn try_parse_frame(bytes: &[u8]) -> Result<ParsedFrame<'_>> {
    if bytes.len() < 8 {
        return Err(Error::IncompleteFrame);
    }
    let total = frame_size_from_prefix(&bytes[..8])?;
    if bytes.len() < total {
        return Err(Error::IncompleteFrame);
    }

    let hdr = decode_header(&bytes[..HEADER_LEN])?;

    let tp = has_tp_flag(&hdr);
    let tp_bytes: u32 = if tp { 4 } else { 0 };

    if hdr.length < 8 + tp_bytes {
        return Err(Error::InvalidLength);
    }

    let payload_size = (hdr.length - 8 - tp_bytes) as usize;
    let payload_start = if tp { 20usize } else { 16usize };
    if payload_start + payload_size > total {
        return Err(Error::InvalidLength);
    }

    let tp_header = if tp {
        let mut tp_r = Reader::new(&bytes[16..20]);
        Some(decode_tp_header(&mut tp_r)?)
    } else {
        None
    };

    Ok(ParsedFrame {
        hdr,
        tp: tp_header,
        payload: &bytes[payload_start..payload_start + payload_size],
        consumed: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> Header {
        Header {
            msg: MessageId { service_id: 0x1234, method_id: 0x5678 },
            length: 8,
            req: RequestId { client_id: 0x0001, session_id: 0x0002 },
            protocol_version: 1,
            interface_version: 1,
            msg_type: message_type::REQUEST,
            return_code: 0,
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let h = sample_header();
        let mut buf = [0u8; HEADER_LEN];
        {
            let mut w = Writer::new(&mut buf);
            encode_header(&mut w, &h).unwrap();
        }
        let decoded = decode_header(&buf).unwrap();
        assert_eq!(decoded, h);
    }

    #[test]
    fn test_decode_rejects_bad_protocol_version() {
        let mut h = sample_header();
        h.protocol_version = 2;
        let mut buf = [0u8; HEADER_LEN];
        {
            let mut w = Writer::new(&mut buf);
            encode_header(&mut w, &h).unwrap();
        }
        assert_eq!(decode_header(&buf), Err(Error::InvalidProtocolVersion(2)));
    }

    #[test]
    fn test_decode_rejects_short_length() {
        let mut h = sample_header();
        h.length = 3;
        let mut buf = [0u8; HEADER_LEN];
        {
            let mut w = Writer::new(&mut buf);
            encode_header(&mut w, &h).unwrap();
        }
        assert_eq!(decode_header(&buf), Err(Error::InvalidLength));
    }

    #[test]
    fn test_try_parse_frame_incomplete() {
        let h = sample_header();
        let mut buf = [0u8; HEADER_LEN];
        {
            let mut w = Writer::new(&mut buf);
            encode_header(&mut w, &h).unwrap();
        }
        // Only the first 8 bytes are available.
        assert_eq!(try_parse_frame(&buf[..8]), Err(Error::IncompleteFrame));
    }

    #[test]
    fn test_try_parse_frame_no_payload() {
        let h = sample_header();
        let mut buf = [0u8; HEADER_LEN];
        {
            let mut w = Writer::new(&mut buf);
            encode_header(&mut w, &h).unwrap();
        }
        let parsed = try_parse_frame(&buf).unwrap();
        assert_eq!(parsed.hdr, h);
        assert!(parsed.tp.is_none());
        assert!(parsed.payload.is_empty());
        assert_eq!(parsed.consumed, 16);
    }

    #[test]
    fn test_try_parse_frame_with_payload() {
        let mut h = sample_header();
        h.length = 8 + 3;
        let mut buf = [0u8; HEADER_LEN + 3];
        {
            let mut w = Writer::new(&mut buf);
            encode_header(&mut w, &h).unwrap();
            w.write_bytes(&[0xAA, 0xBB, 0xCC]).unwrap();
        }
        let parsed = try_parse_frame(&buf).unwrap();
        assert_eq!(parsed.payload, &[0xAA, 0xBB, 0xCC]);
        assert_eq!(parsed.consumed, buf.len());
    }

    #[test]
    fn test_try_parse_frame_with_tp_header() {
        let mut h = sample_header();
        h.msg_type = message_type::REQUEST | message_type::TP_FLAG;
        h.length = 8 + 4 + 2;
        let mut buf = [0u8; HEADER_LEN + 4 + 2];
        {
            let mut w = Writer::new(&mut buf);
            encode_header(&mut w, &h).unwrap();
            crate::tp::encode_tp_header(
                &mut w,
                TpHeader { offset_units_16b: 0, reserved: 0, more_segments: true },
            )
            .unwrap();
            w.write_bytes(&[0x01, 0x02]).unwrap();
        }
        let parsed = try_parse_frame(&buf).unwrap();
        assert_eq!(parsed.tp, Some(TpHeader { offset_units_16b: 0, reserved: 0, more_segments: true }));
        assert_eq!(parsed.payload, &[0x01, 0x02]);
    }

    #[test]
    fn test_has_tp_flag() {
        let mut h = sample_header();
        assert!(!has_tp_flag(&h));
        h.msg_type |= message_type::TP_FLAG;
        assert!(has_tp_flag(&h));
    }
}

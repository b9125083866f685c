//! Return code module
//!
//! Constants for the AUTOSAR/SOME/IP `return_code` header field. This
//! module is purely ambient: it defines the vocabulary but does not add any
//! validation to [`crate::header::decode_header`], which accepts any byte
//! value for `return_code`.

/// No error occurred.
pub const E_OK: u8 = 0x00;
/// An unspecified error occurred.
pub const E_NOT_OK: u8 = 0x01;
/// Service ID unknown.
pub const E_UNKNOWN_SERVICE: u8 = 0x02;
/// Method ID unknown.
pub const E_UNKNOWN_METHOD: u8 = 0x03;
/// Service ID and Method ID are known, but not ready.
pub const E_NOT_READY: u8 = 0x04;
/// System not reachable.
pub const E_NOT_REACHABLE: u8 = 0x05;
/// Timeout occurred.
pub const E_TIMEOUT: u8 = 0x06;
/// Protocol version mismatch.
pub const E_WRONG_PROTOCOL_VERSION: u8 = 0x07;
/// Interface version mismatch.
pub const E_WRONG_INTERFACE_VERSION: u8 = 0x08;
/// Deserialization error, so that payload could not be deserialized.
pub const E_MALFORMED_MESSAGE: u8 = 0x09;
/// An unexpected message type was received.
pub const E_WRONG_MESSAGE_TYPE: u8 = 0x0A;

/// Error type for SOME/IP wire parsing, serialization, and validation operations.
///
/// Represents every error condition that can occur while decoding or encoding
/// a SOME/IP frame, its TP sub-header, an AUTOSAR payload, or a Service
/// Discovery message. There is exactly one closed `Error` enum for the whole
/// crate: no module defines its own error type, and no panics are used for
/// ill-formed input.
///
/// # Examples
///
/// ```
/// use someip_wire::error::Error;
/// use someip_wire::packet::Packet;
///
/// let buffer = [0u8; 4]; // Too small for a valid SD packet
/// let result = Packet::new_checked(&buffer[..]);
/// assert_eq!(result, Err(Error::BufferTooShort));
/// ```
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Buffer is too short for the expected data structure.
    ///
    /// This occurs when:
    /// - Packet buffer is smaller than minimum SD header (12 bytes)
    /// - Entry buffer is smaller than entry size (16 bytes)
    /// - Option buffer is smaller than expected option size
    /// - Declared lengths exceed available buffer space
    BufferTooShort,

    /// A writer sink had no room left for the next write.
    BufferTooSmall,

    /// A cursor read ran past the end of its backing buffer.
    BufferOverrun,

    /// A frame's declared total length exceeds the bytes available so far.
    ///
    /// Unlike every other variant, this is recoverable: the caller should
    /// buffer more bytes and retry rather than treat the input as malformed.
    IncompleteFrame,

    /// A length field has an invalid or internally inconsistent value.
    InvalidLength,

    /// SOME/IP header `protocol_version` was not `1`.
    InvalidProtocolVersion(u8),

    /// Interface version did not match what the caller expected.
    InvalidInterfaceVersion(u8),

    /// `message_type` byte does not correspond to a known message type.
    InvalidMessageType(u8),

    /// `return_code` byte does not correspond to a known return code.
    InvalidReturnCode(u8),

    /// A `bool` scalar's wire byte was neither `0x00` nor `0x01`.
    InvalidBoolValue(u8),

    /// String bytes failed UTF-8 validation.
    InvalidUtf8,

    /// UTF-16 string data had an odd byte count or an unpaired surrogate.
    InvalidUtf16,

    /// A string's byte-order-mark did not match what was expected.
    InvalidBom,

    /// A string was missing its required terminator.
    InvalidStringTermination,

    /// A `union_variant` selector was greater than or equal to the number
    /// of declared alternatives.
    InvalidUnionSelector,

    /// SD message header fields (service id, method id, message type) did
    /// not match the fixed SOME/IP-SD constants.
    SdInvalidHeader,

    /// SD entries/options lengths were internally inconsistent: not a
    /// multiple of 16, an option-run index out of bounds, overlapping runs,
    /// or trailing bytes after the declared options length.
    SdInvalidLengths,

    /// Reserved for API parity with the option status vocabulary. Never
    /// raised: unknown SD option types are absorbed and round-tripped as
    /// `sd::wire_model::SdOption::Unknown`.
    SdUnknownOption,

    /// Invalid entry type value.
    ///
    /// Entry type must be one of:
    /// - 0x00: FindService
    /// - 0x01: OfferService
    /// - 0x06: Subscribe
    /// - 0x07: SubscribeAck
    InvalidEntryType(u8),

    /// Invalid option type value.
    ///
    /// Option type must be one of the defined option types:
    /// - 0x01: Configuration
    /// - 0x02: LoadBalancing
    /// - 0x04: IPv4Endpoint
    /// - 0x06: IPv6Endpoint
    /// - 0x14: IPv4Multicast
    /// - 0x16: IPv6Multicast
    /// - 0x24: IPv4SdEndpoint
    /// - 0x26: IPv6SdEndpoint
    InvalidOptionType(u8),

    /// Invalid transport protocol value.
    ///
    /// Transport protocol must be:
    /// - 0x06: TCP
    /// - 0x11: UDP
    InvalidProtocol(u8),

    /// Length field overflow.
    ///
    /// This occurs when:
    /// - Entries length + options length would overflow buffer
    /// - Length fields have inconsistent values
    /// - Option length field exceeds remaining buffer
    LengthOverflow,

    /// Invalid configuration entry format.
    ///
    /// Configuration entries must follow DNS-SD TXT record format.
    /// This variant wraps configuration-specific errors.
    ConfigurationError(ConfigError),

    /// Catch-all for conditions that do not map onto any of the above.
    Error,
}

/// Configuration-specific error types.
///
/// These errors occur during parsing or serialization of DNS-SD TXT record
/// style configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid key format.
    ///
    /// Keys must be:
    /// - Non-empty
    /// - Printable US-ASCII (0x20-0x7E)
    /// - Not contain '=' character
    /// - Contain at least one non-whitespace character
    InvalidKey,

    /// Key starts with '=' which is not allowed.
    KeyStartsWithEquals,

    /// Unexpected end of data while parsing.
    ///
    /// This occurs when a length byte is present but the corresponding
    /// data is missing from the buffer.
    UnexpectedEnd,

    /// Length field would overflow buffer.
    ///
    /// The length prefix indicates more data than is available in
    /// the remaining buffer.
    LengthOverflow,

    /// Buffer too small for serialization.
    ///
    /// The output buffer does not have enough space for the
    /// serialized configuration data.
    BufferTooSmall,

    /// Invalid UTF-8 in string data.
    ///
    /// Configuration strings must be valid UTF-8.
    InvalidUtf8,
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::ConfigurationError(err)
    }
}

impl Error {
    /// A short, stable message describing the error, suitable for logs.
    ///
    /// Independent of `Debug`/`Display` formatting; will not change across
    /// patch releases.
    pub fn message(&self) -> &'static str {
        match self {
            Error::BufferTooShort => "buffer too short for expected structure",
            Error::BufferTooSmall => "buffer too small",
            Error::BufferOverrun => "buffer overrun",
            Error::IncompleteFrame => "incomplete frame",
            Error::InvalidLength => "invalid length",
            Error::InvalidProtocolVersion(_) => "invalid protocol version",
            Error::InvalidInterfaceVersion(_) => "invalid interface version",
            Error::InvalidMessageType(_) => "invalid message type",
            Error::InvalidReturnCode(_) => "invalid return code",
            Error::InvalidBoolValue(_) => "invalid bool value",
            Error::InvalidUtf8 => "invalid utf-8",
            Error::InvalidUtf16 => "invalid utf-16",
            Error::InvalidBom => "invalid BOM",
            Error::InvalidStringTermination => "invalid string termination",
            Error::InvalidUnionSelector => "invalid union selector",
            Error::SdInvalidHeader => "invalid SD header",
            Error::SdInvalidLengths => "invalid SD lengths",
            Error::SdUnknownOption => "unknown SD option",
            Error::InvalidEntryType(_) => "invalid entry type",
            Error::InvalidOptionType(_) => "invalid option type",
            Error::InvalidProtocol(_) => "invalid transport protocol",
            Error::LengthOverflow => "length field overflow",
            Error::ConfigurationError(_) => "configuration error",
            Error::Error => "error",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidProtocolVersion(v) => write!(f, "invalid protocol version: {}", v),
            Error::InvalidInterfaceVersion(v) => write!(f, "invalid interface version: {}", v),
            Error::InvalidMessageType(v) => write!(f, "invalid message type: 0x{:02x}", v),
            Error::InvalidReturnCode(v) => write!(f, "invalid return code: 0x{:02x}", v),
            Error::InvalidBoolValue(v) => write!(f, "invalid bool value: 0x{:02x}", v),
            Error::InvalidEntryType(t) => write!(f, "invalid entry type: 0x{:02x}", t),
            Error::InvalidOptionType(t) => write!(f, "invalid option type: 0x{:02x}", t),
            Error::InvalidProtocol(p) => write!(f, "invalid transport protocol: 0x{:02x}", p),
            Error::ConfigurationError(e) => write!(f, "configuration error: {}", e),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidKey => write!(f, "invalid key format"),
            ConfigError::KeyStartsWithEquals => write!(f, "key starts with '='"),
            ConfigError::UnexpectedEnd => write!(f, "unexpected end of data"),
            ConfigError::LengthOverflow => write!(f, "length field overflow"),
            ConfigError::BufferTooSmall => write!(f, "buffer too small"),
            ConfigError::InvalidUtf8 => write!(f, "invalid UTF-8"),
        }
    }
}

impl core::error::Error for Error {}
impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", Error::BufferTooShort), "buffer too short for expected structure");
        assert_eq!(format!("{}", Error::InvalidEntryType(0xFF)), "invalid entry type: 0xff");
        assert_eq!(format!("{}", Error::InvalidOptionType(0xAB)), "invalid option type: 0xab");
        assert_eq!(format!("{}", Error::InvalidProtocol(0x99)), "invalid transport protocol: 0x99");
        assert_eq!(format!("{}", Error::LengthOverflow), "length field overflow");
        assert_eq!(format!("{}", Error::IncompleteFrame), "incomplete frame");
        assert_eq!(format!("{}", Error::SdInvalidLengths), "invalid SD lengths");
    }

    #[test]
    fn test_error_message_is_stable() {
        assert_eq!(Error::BufferOverrun.message(), "buffer overrun");
        assert_eq!(Error::InvalidUnionSelector.message(), "invalid union selector");
        assert_eq!(Error::SdUnknownOption.message(), "unknown SD option");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(format!("{}", ConfigError::InvalidKey), "invalid key format");
        assert_eq!(format!("{}", ConfigError::KeyStartsWithEquals), "key starts with '='");
        assert_eq!(format!("{}", ConfigError::UnexpectedEnd), "unexpected end of data");
        assert_eq!(format!("{}", ConfigError::LengthOverflow), "length field overflow");
        assert_eq!(format!("{}", ConfigError::BufferTooSmall), "buffer too small");
        assert_eq!(format!("{}", ConfigError::InvalidUtf8), "invalid UTF-8");
    }

    #[test]
    fn test_config_error_conversion() {
        let config_err = ConfigError::InvalidKey;
        let err: Error = config_err.into();
        assert_eq!(err, Error::ConfigurationError(ConfigError::InvalidKey));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::BufferTooShort, Error::BufferTooShort);
        assert_ne!(Error::BufferTooShort, Error::LengthOverflow);
        assert_eq!(Error::InvalidEntryType(0x05), Error::InvalidEntryType(0x05));
        assert_ne!(Error::InvalidEntryType(0x05), Error::InvalidEntryType(0x06));
    }

    #[test]
    fn test_error_clone_copy() {
        let err = Error::BufferTooShort;
        let err2 = err;
        let err3 = err.clone();
        assert_eq!(err, err2);
        assert_eq!(err, err3);
    }
}

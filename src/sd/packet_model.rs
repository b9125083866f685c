//! In-memory model for SOME/IP-SD entries and options.
//!
//! This is the borrowed, allocator-free counterpart to the original's
//! `std::vector`-backed `entry`/`option`/`entry_data` types: every option
//! payload here is either a fixed-size [`crate::options`] representation or
//! a slice borrowed straight from the caller's buffer, never an owned byte
//! vector.

use crate::entries::{EventGroupEntryRepr, ServiceEntryRepr};
use crate::error::Error;
use crate::options::{IPv4EndpointOptionRepr, IPv6EndpointOptionRepr, LoadBalancingOptionRepr, OptionType};

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Service identifier reserved for SOME/IP-SD messages.
pub const SERVICE_ID: u16 = 0xFFFF;
/// Method identifier reserved for SOME/IP-SD messages.
pub const METHOD_ID: u16 = 0x8100;

/// Largest number of options a single entry's option run may reference (4-bit count field).
pub const MAX_OPTIONS_PER_RUN: usize = 0x0F;
/// Largest number of options a message's flat options array may hold (1-byte index field).
pub const MAX_TOTAL_OPTIONS: usize = 0xFF;

/// A single SOME/IP-SD option: its discardable bit plus a type-specific payload.
///
/// `Configuration` and `Unknown` borrow their payload directly from whichever
/// buffer produced them; every other variant wraps the matching
/// `*Repr` type from [`crate::options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdOption<'a> {
    /// DNS-SD TXT record style key/value bytes.
    Configuration {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Raw TXT-record payload.
        data: &'a [u8],
    },
    /// Priority/weight pair used to rank service instances.
    LoadBalancing {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Parsed priority/weight fields.
        repr: LoadBalancingOptionRepr,
    },
    /// IPv4 unicast endpoint.
    Ipv4Endpoint {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Parsed address/protocol/port fields.
        repr: IPv4EndpointOptionRepr,
    },
    /// IPv6 unicast endpoint.
    Ipv6Endpoint {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Parsed address/protocol/port fields.
        repr: IPv6EndpointOptionRepr,
    },
    /// IPv4 multicast endpoint. Wire-identical to [`Self::Ipv4Endpoint`], distinguished only
    /// by its option type tag.
    Ipv4Multicast {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Parsed address/protocol/port fields.
        repr: IPv4EndpointOptionRepr,
    },
    /// IPv6 multicast endpoint. Wire-identical to [`Self::Ipv6Endpoint`], distinguished only
    /// by its option type tag.
    Ipv6Multicast {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Parsed address/protocol/port fields.
        repr: IPv6EndpointOptionRepr,
    },
    /// IPv4 endpoint used to redirect the Service Discovery traffic itself.
    Ipv4SdEndpoint {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Parsed address/protocol/port fields.
        repr: IPv4EndpointOptionRepr,
    },
    /// IPv6 endpoint used to redirect the Service Discovery traffic itself.
    Ipv6SdEndpoint {
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Parsed address/protocol/port fields.
        repr: IPv6EndpointOptionRepr,
    },
    /// An option type this crate does not interpret. Its payload is preserved verbatim
    /// so it can be re-emitted unchanged.
    Unknown {
        /// The option's wire `Type` byte.
        option_type: u8,
        /// Whether a receiver that does not understand this option may ignore it.
        discardable: bool,
        /// Raw payload bytes, excluding the 4-byte option header.
        data: &'a [u8],
    },
}

impl<'a> SdOption<'a> {
    /// The wire `Type` byte this option carries.
    pub fn option_type(&self) -> u8 {
        match self {
            SdOption::Configuration { .. } => OptionType::Configuration.as_u8(),
            SdOption::LoadBalancing { .. } => OptionType::LoadBalancing.as_u8(),
            SdOption::Ipv4Endpoint { .. } => OptionType::IPv4Endpoint.as_u8(),
            SdOption::Ipv6Endpoint { .. } => OptionType::IPv6Endpoint.as_u8(),
            SdOption::Ipv4Multicast { .. } => OptionType::IPv4Multicast.as_u8(),
            SdOption::Ipv6Multicast { .. } => OptionType::IPv6Multicast.as_u8(),
            SdOption::Ipv4SdEndpoint { .. } => OptionType::IPv4SdEndpoint.as_u8(),
            SdOption::Ipv6SdEndpoint { .. } => OptionType::IPv6SdEndpoint.as_u8(),
            SdOption::Unknown { option_type, .. } => *option_type,
        }
    }

    /// Whether the discardable bit is set on this option.
    pub fn discardable(&self) -> bool {
        match self {
            SdOption::Configuration { discardable, .. }
            | SdOption::LoadBalancing { discardable, .. }
            | SdOption::Ipv4Endpoint { discardable, .. }
            | SdOption::Ipv6Endpoint { discardable, .. }
            | SdOption::Ipv4Multicast { discardable, .. }
            | SdOption::Ipv6Multicast { discardable, .. }
            | SdOption::Ipv4SdEndpoint { discardable, .. }
            | SdOption::Ipv6SdEndpoint { discardable, .. }
            | SdOption::Unknown { discardable, .. } => *discardable,
        }
    }

    /// The option's wire `Length` field: the discardable byte plus the payload,
    /// excluding the 2-byte length field and the 1-byte type field.
    pub fn length_field(&self) -> Result<u16> {
        let payload_len = match self {
            SdOption::Configuration { data, .. } | SdOption::Unknown { data, .. } => data.len(),
            SdOption::LoadBalancing { .. } => 4,
            SdOption::Ipv4Endpoint { .. } | SdOption::Ipv4Multicast { .. } | SdOption::Ipv4SdEndpoint { .. } => 8,
            SdOption::Ipv6Endpoint { .. } | SdOption::Ipv6Multicast { .. } | SdOption::Ipv6SdEndpoint { .. } => 20,
        };
        let total = 1usize.checked_add(payload_len).ok_or(Error::InvalidLength)?;
        u16::try_from(total).map_err(|_| Error::InvalidLength)
    }

    /// Total size of this option on the wire, including its 4-byte header.
    pub fn wire_len(&self) -> Result<usize> {
        Ok(3usize + self.length_field()? as usize)
    }
}

/// Input for building a `service`/`offer` style entry: its fields plus the two
/// option runs it references.
#[derive(Debug, Clone, Copy)]
pub struct ServiceEntryData<'a> {
    /// `FindService` or `OfferService`.
    pub entry_type: u8,
    /// Service identifier.
    pub service_id: u16,
    /// Instance identifier (`0xFFFF` means "any instance").
    pub instance_id: u16,
    /// Major interface version.
    pub major_version: u8,
    /// Time-to-live in seconds. `0xFFFFFF` means infinite, `0` means stop offering.
    pub ttl: u32,
    /// Minor interface version.
    pub minor_version: u32,
    /// Options referenced by the entry's first option-run index/count fields.
    pub run1: &'a [SdOption<'a>],
    /// Options referenced by the entry's second option-run index/count fields.
    pub run2: &'a [SdOption<'a>],
}

/// Input for building a `subscribe`/`subscribe-ack` style entry: its fields
/// plus the two option runs it references.
#[derive(Debug, Clone, Copy)]
pub struct EventgroupEntryData<'a> {
    /// `SubscribeEventgroup` or `SubscribeEventgroupAck`.
    pub entry_type: u8,
    /// Service identifier.
    pub service_id: u16,
    /// Instance identifier.
    pub instance_id: u16,
    /// Major interface version.
    pub major_version: u8,
    /// Time-to-live in seconds.
    pub ttl: u32,
    /// Packed 12-bit reserved / 4-bit counter field.
    pub reserved_and_counter: u16,
    /// Eventgroup identifier.
    pub eventgroup_id: u16,
    /// Options referenced by the entry's first option-run index/count fields.
    pub run1: &'a [SdOption<'a>],
    /// Options referenced by the entry's second option-run index/count fields.
    pub run2: &'a [SdOption<'a>],
}

/// One entry to include in a built message.
#[derive(Debug, Clone, Copy)]
pub enum SdEntryData<'a> {
    /// A service/offer entry.
    Service(ServiceEntryData<'a>),
    /// An eventgroup subscription entry.
    Eventgroup(EventgroupEntryData<'a>),
}

impl<'a> SdEntryData<'a> {
    /// The entry's two option runs, in wire order.
    pub fn runs(&self) -> (&'a [SdOption<'a>], &'a [SdOption<'a>]) {
        match self {
            SdEntryData::Service(d) => (d.run1, d.run2),
            SdEntryData::Eventgroup(d) => (d.run1, d.run2),
        }
    }
}

/// A decoded, 16-byte SOME/IP-SD entry.
///
/// Carries the entry's own `index_first_option_run`/`index_second_option_run`/
/// `number_of_options` fields (inherited from [`ServiceEntryRepr`] /
/// [`EventGroupEntryRepr`]) needed to resolve its option runs against a
/// message's flat options array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdEntry {
    /// A service/offer entry.
    Service(ServiceEntryRepr),
    /// An eventgroup subscription entry.
    Eventgroup(EventGroupEntryRepr),
}

impl SdEntry {
    /// Index of the entry's first option run into the message's flat options array.
    pub fn index_first_option_run(&self) -> u8 {
        match self {
            SdEntry::Service(r) => r.index_first_option_run,
            SdEntry::Eventgroup(r) => r.index_first_option_run,
        }
    }

    /// Index of the entry's second option run into the message's flat options array.
    pub fn index_second_option_run(&self) -> u8 {
        match self {
            SdEntry::Service(r) => r.index_second_option_run,
            SdEntry::Eventgroup(r) => r.index_second_option_run,
        }
    }

    /// Number of options in the first and second option runs (packed nibbles).
    pub fn first_run_count(&self) -> u8 {
        match self {
            SdEntry::Service(r) => r.number_of_options.options1(),
            SdEntry::Eventgroup(r) => r.number_of_options.options1(),
        }
    }

    /// Number of options in the second option run.
    pub fn second_run_count(&self) -> u8 {
        match self {
            SdEntry::Service(r) => r.number_of_options.options2(),
            SdEntry::Eventgroup(r) => r.number_of_options.options2(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TransportProtocol;

    #[test]
    fn test_length_field_matches_wire_constants() {
        let opt = SdOption::Ipv4Endpoint {
            discardable: false,
            repr: IPv4EndpointOptionRepr { ipv4_address: [0; 4], protocol: TransportProtocol::UDP, port: 0 },
        };
        assert_eq!(opt.length_field().unwrap(), 9);
        assert_eq!(opt.wire_len().unwrap(), 12);

        let opt6 = SdOption::Ipv6SdEndpoint {
            discardable: true,
            repr: IPv6EndpointOptionRepr { ipv6_address: [0; 16], protocol: TransportProtocol::TCP, port: 0 },
        };
        assert_eq!(opt6.length_field().unwrap(), 0x0015);
        assert_eq!(opt6.wire_len().unwrap(), 24);
    }

    #[test]
    fn test_configuration_length_field_tracks_payload() {
        let data = [1u8, 2, 3, 4, 5];
        let opt = SdOption::Configuration { discardable: false, data: &data };
        assert_eq!(opt.length_field().unwrap(), 6);
        assert_eq!(opt.wire_len().unwrap(), 9);
    }

    #[test]
    fn test_option_type_byte_distinguishes_endpoint_kinds() {
        let repr = IPv4EndpointOptionRepr { ipv4_address: [0; 4], protocol: TransportProtocol::UDP, port: 0 };
        let endpoint = SdOption::Ipv4Endpoint { discardable: false, repr };
        let multicast = SdOption::Ipv4Multicast { discardable: false, repr };
        let sd_endpoint = SdOption::Ipv4SdEndpoint { discardable: false, repr };
        assert_eq!(endpoint.option_type(), 0x04);
        assert_eq!(multicast.option_type(), 0x14);
        assert_eq!(sd_endpoint.option_type(), 0x24);
    }
}

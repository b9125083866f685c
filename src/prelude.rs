//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate,
//! allowing for convenient glob imports:
//!
//! ```
//! use someip_wire::prelude::*;
//! ```

pub use crate::config::{ConfigEntry, ConfigurationOption};
pub use crate::cursor::{Reader, Writer};
pub use crate::endian::Endian;
pub use crate::entries::{
    EntryType, EventGroupEntry, EventGroupEntryRepr, NumberOfOptions, ReservedAndCounter,
    ServiceEntry, ServiceEntryRepr,
};
pub use crate::error::{ConfigError, Error};
pub use crate::header::{message_type, Header, MessageId, ParsedFrame, RequestId};
pub use crate::iface::FieldDescriptor;
pub use crate::options::{
    DiscardableFlag, IPv4EndpointOption, IPv4EndpointOptionRepr, IPv6EndpointOption,
    IPv6EndpointOptionRepr, LoadBalancingOption, LoadBalancingOptionRepr, OptionHeader,
    OptionType, TransportProtocol,
};
pub use crate::packet::Packet;
pub use crate::repr::Repr;
pub use crate::sd::{decode_message, encode_message, SdEntry, SdEntryData, SdOption};
pub use crate::ser::{Config as SerConfig, Fields};
pub use crate::tp::TpHeader;

//! SOME/IP Service Discovery (SD).
//!
//! [`packet_model`] defines the borrowed, allocator-free entry/option types;
//! [`wire_model`] encodes and decodes whole SD messages built from them.

pub mod packet_model;
pub mod wire_model;

pub use packet_model::{
    EventgroupEntryData, SdEntry, SdEntryData, SdOption, ServiceEntryData, MAX_OPTIONS_PER_RUN, MAX_TOTAL_OPTIONS,
    METHOD_ID, SERVICE_ID,
};
pub use wire_model::{decode_message, encode_message, EntriesIter, OptionsIter, SdMessageView};

//! AUTOSAR payload serializer
//!
//! Encodes and decodes SOME/IP payload bodies: scalars, padding, strings,
//! arrays, discriminated unions, and aggregate records, all byte-order
//! parametric via [`config::Config`]. Fixed-layout wire structs
//! ([`crate::entries`], [`crate::options`]) still compose the scalar
//! primitives by hand; a record that implements [`fields::Fields`] instead
//! gets [`encode_aggregate`]/[`decode_aggregate`] for free, folding its
//! field tuple through the same scalar codec.

pub mod codec;
pub mod config;
pub mod fields;

pub use codec::{
    decode_dyn_array, decode_scalar, decode_union, decode_utf16_view, encode_pad_to, encode_scalar, encode_union,
    measure_scalar, measure_union, pad_needed, read_len_field, write_len_field, DynArray, DynArrayView, FixedArray,
    PadBytes, PadTo, Scalar, Sizer, UnionPayload, Utf16String, Utf16View, Utf8String,
};
pub use config::Config;
pub use fields::{decode_aggregate, encode_aggregate, Fields, TupleFold, TupleFoldMut};

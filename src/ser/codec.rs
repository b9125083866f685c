//! Payload scalar/string/array/union codec.
//!
//! This is the AUTOSAR payload serializer proper: scalar encode/decode,
//! padding, length-prefixed UTF-8/UTF-16 strings, dynamically- and
//! fixed-sized arrays, and a discriminated `union_variant` whose payload
//! length is computed with a two-pass [`Sizer`] rather than patched back
//! after the fact.

use crate::cursor::{Reader, Writer};
use crate::endian::{read_u16, read_u32, read_u64, read_u8, write_u16, write_u32, write_u64, write_u8, Endian};
use crate::error::Error;
use crate::ser::config::Config;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Mirrors the original's `sizer`: tracks a position without touching any
/// buffer, used to precompute lengths that must be written before the
/// payload they describe.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sizer {
    pos: usize,
}

impl Sizer {
    /// A sizer starting at position `pos`.
    pub const fn starting_at(pos: usize) -> Self {
        Sizer { pos }
    }

    /// Advances the tracked position by `n`.
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// The tracked position.
    pub const fn position(&self) -> usize {
        self.pos
    }
}

/// Bytes needed to pad `offset` up to the next multiple of `align` (`align`
/// of `0` means "no alignment required").
pub const fn pad_needed(offset: usize, align: usize) -> usize {
    if align == 0 {
        return 0;
    }
    let rem = offset % align;
    if rem == 0 {
        0
    } else {
        align - rem
    }
}

fn write_pad_bytes(out: &mut Writer<'_>, n: usize, pad_byte: u8) -> Result<()> {
    out.write_pad(n, pad_byte)
}

/// Writes a length value in a field of `BITS` bits (8, 16, or 32).
pub fn write_len_field<const BITS: usize>(out: &mut Writer<'_>, v: u32) -> Result<()> {
    match BITS {
        8 => {
            if v > u8::MAX as u32 {
                return Err(Error::InvalidLength);
            }
            write_u8(out, Endian::Big, v as u8)
        }
        16 => {
            if v > u16::MAX as u32 {
                return Err(Error::InvalidLength);
            }
            write_u16(out, Endian::Big, v as u16)
        }
        32 => write_u32(out, Endian::Big, v),
        _ => Err(Error::Error),
    }
}

/// Reads a length value from a field of `BITS` bits (8, 16, or 32).
pub fn read_len_field<const BITS: usize>(input: &mut Reader<'_>) -> Result<u32> {
    match BITS {
        8 => Ok(read_u8(input, Endian::Big)? as u32),
        16 => Ok(read_u16(input, Endian::Big)? as u32),
        32 => read_u32(input, Endian::Big),
        _ => Err(Error::Error),
    }
}

const fn bytes_for_bits(bits: usize) -> usize {
    bits / 8
}

/// Writes alignment padding so that `base_offset + out.position()` is a
/// multiple of `ALIGN_BITS / 8`.
pub fn encode_pad_to<const ALIGN_BITS: usize>(out: &mut Writer<'_>, cfg: &Config, base_offset: usize) -> Result<()> {
    let align = ALIGN_BITS / 8;
    let off = base_offset + out.position();
    write_pad_bytes(out, pad_needed(off, align), cfg.pad_byte)
}

/// Skips alignment padding so that `base_offset + input.position()` is a
/// multiple of `ALIGN_BITS / 8`.
pub fn decode_pad_to<const ALIGN_BITS: usize>(input: &mut Reader<'_>, base_offset: usize) -> Result<()> {
    let align = ALIGN_BITS / 8;
    let off = base_offset + input.position();
    input.skip(pad_needed(off, align))
}

// --- Padding wrapper types --------------------------------------------------

/// `N` bytes of fixed padding, filled with [`Config::pad_byte`] on encode
/// and skipped without validation on decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadBytes<const N: usize>;

impl<const N: usize> PadBytes<N> {
    /// Constant contribution to the encoded length.
    pub const fn measure(&self) -> usize {
        N
    }

    /// Writes `N` pad bytes.
    pub fn encode(&self, out: &mut Writer<'_>, cfg: &Config) -> Result<()> {
        write_pad_bytes(out, N, cfg.pad_byte)
    }

    /// Skips `N` bytes.
    pub fn decode(input: &mut Reader<'_>) -> Result<Self> {
        input.skip(N)?;
        Ok(PadBytes)
    }
}

/// Alignment padding to the next multiple of `ALIGN_BITS / 8` bytes,
/// measured from the enclosing frame's absolute `base_offset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadTo<const ALIGN_BITS: usize>;

impl<const ALIGN_BITS: usize> PadTo<ALIGN_BITS> {
    /// Bytes this alignment step would add, given the current `sizer`
    /// position and `base_offset`.
    pub fn measure(&self, s: &Sizer, base_offset: usize) -> usize {
        let align = ALIGN_BITS / 8;
        pad_needed(base_offset + s.position(), align)
    }

    /// Writes the alignment padding.
    pub fn encode(&self, out: &mut Writer<'_>, cfg: &Config, base_offset: usize) -> Result<()> {
        encode_pad_to::<ALIGN_BITS>(out, cfg, base_offset)
    }

    /// Skips the alignment padding.
    pub fn decode(input: &mut Reader<'_>, base_offset: usize) -> Result<Self> {
        decode_pad_to::<ALIGN_BITS>(input, base_offset)?;
        Ok(PadTo)
    }
}

// --- Scalars -----------------------------------------------------------------

/// A payload scalar with a fixed wire width, byte-order sensitive beyond a
/// single byte.
pub trait Scalar: Sized + Copy {
    /// Wire width in bytes.
    const WIDTH: usize;
    /// Writes `self` per `endian`.
    fn encode_scalar(&self, out: &mut Writer<'_>, endian: Endian) -> Result<()>;
    /// Reads a value per `endian`.
    fn decode_scalar(input: &mut Reader<'_>, endian: Endian) -> Result<Self>;
}

macro_rules! impl_scalar_uint {
    ($t:ty, $width:expr, $write:ident, $read:ident) => {
        impl Scalar for $t {
            const WIDTH: usize = $width;
            fn encode_scalar(&self, out: &mut Writer<'_>, endian: Endian) -> Result<()> {
                $write(out, endian, *self)
            }
            fn decode_scalar(input: &mut Reader<'_>, endian: Endian) -> Result<Self> {
                $read(input, endian)
            }
        }
    };
}

impl_scalar_uint!(u8, 1, write_u8, read_u8);
impl_scalar_uint!(u16, 2, write_u16, read_u16);
impl_scalar_uint!(u32, 4, write_u32, read_u32);
impl_scalar_uint!(u64, 8, write_u64, read_u64);

macro_rules! impl_scalar_signed {
    ($t:ty, $u:ty) => {
        impl Scalar for $t {
            const WIDTH: usize = <$u>::WIDTH;
            fn encode_scalar(&self, out: &mut Writer<'_>, endian: Endian) -> Result<()> {
                (*self as $u).encode_scalar(out, endian)
            }
            fn decode_scalar(input: &mut Reader<'_>, endian: Endian) -> Result<Self> {
                Ok(<$u>::decode_scalar(input, endian)? as $t)
            }
        }
    };
}

impl_scalar_signed!(i8, u8);
impl_scalar_signed!(i16, u16);
impl_scalar_signed!(i32, u32);
impl_scalar_signed!(i64, u64);

impl Scalar for bool {
    const WIDTH: usize = 1;
    fn encode_scalar(&self, out: &mut Writer<'_>, _endian: Endian) -> Result<()> {
        out.write_byte(if *self { 0x01 } else { 0x00 })
    }
    fn decode_scalar(input: &mut Reader<'_>, _endian: Endian) -> Result<Self> {
        match input.read_byte()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            other => Err(Error::InvalidBoolValue(other)),
        }
    }
}

impl Scalar for f32 {
    const WIDTH: usize = 4;
    fn encode_scalar(&self, out: &mut Writer<'_>, endian: Endian) -> Result<()> {
        self.to_bits().encode_scalar(out, endian)
    }
    fn decode_scalar(input: &mut Reader<'_>, endian: Endian) -> Result<Self> {
        Ok(f32::from_bits(u32::decode_scalar(input, endian)?))
    }
}

impl Scalar for f64 {
    const WIDTH: usize = 8;
    fn encode_scalar(&self, out: &mut Writer<'_>, endian: Endian) -> Result<()> {
        self.to_bits().encode_scalar(out, endian)
    }
    fn decode_scalar(input: &mut Reader<'_>, endian: Endian) -> Result<Self> {
        Ok(f64::from_bits(u64::decode_scalar(input, endian)?))
    }
}

/// Measures, encodes, and decodes a scalar using [`Config::payload_endian`].
pub fn measure_scalar<T: Scalar>(_v: &T) -> usize {
    T::WIDTH
}

/// Encodes a scalar using `cfg`'s payload endian.
pub fn encode_scalar<T: Scalar>(out: &mut Writer<'_>, cfg: &Config, v: &T) -> Result<()> {
    v.encode_scalar(out, cfg.payload_endian)
}

/// Decodes a scalar using `cfg`'s payload endian.
pub fn decode_scalar<T: Scalar>(input: &mut Reader<'_>, cfg: &Config) -> Result<T> {
    T::decode_scalar(input, cfg.payload_endian)
}

// --- Strings -----------------------------------------------------------------

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A length-prefixed, BOM-and-NUL-terminated UTF-8 string.
///
/// `LEN_BITS` selects the width of the leading length field (8, 16, or 32);
/// `ALIGN_AFTER_BITS` optionally pads the stream after the terminator, `0`
/// meaning no trailing alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8String<'a, const LEN_BITS: usize = 32, const ALIGN_AFTER_BITS: usize = 0> {
    /// The string's content, excluding BOM and terminator.
    pub value: &'a str,
}

impl<'a, const LEN_BITS: usize, const ALIGN_AFTER_BITS: usize> Utf8String<'a, LEN_BITS, ALIGN_AFTER_BITS> {
    /// Wraps `value` for encoding.
    pub const fn new(value: &'a str) -> Self {
        Utf8String { value }
    }

    /// Total encoded length, including alignment padding.
    pub fn measure(&self, base_offset: usize) -> usize {
        let payload_len = 3 + self.value.len() + 1;
        let mut pos = bytes_for_bits(LEN_BITS) + payload_len;
        if ALIGN_AFTER_BITS != 0 {
            pos += pad_needed(base_offset + pos, ALIGN_AFTER_BITS / 8);
        }
        pos
    }

    /// Encodes the string.
    pub fn encode(&self, out: &mut Writer<'_>, cfg: &Config, base_offset: usize) -> Result<()> {
        let payload_len = (3 + self.value.len() + 1) as u32;
        write_len_field::<LEN_BITS>(out, payload_len)?;
        out.write_bytes(&UTF8_BOM)?;
        out.write_bytes(self.value.as_bytes())?;
        out.write_byte(0x00)?;
        if ALIGN_AFTER_BITS != 0 {
            encode_pad_to::<ALIGN_AFTER_BITS>(out, cfg, base_offset)?;
        }
        Ok(())
    }

    /// Decodes a string, borrowing its content directly from `input`.
    pub fn decode(input: &mut Reader<'a>, base_offset: usize) -> Result<Self> {
        let len = read_len_field::<LEN_BITS>(input)? as usize;
        if len < 4 {
            return Err(Error::InvalidLength);
        }
        let bytes = input.read_bytes(len)?;
        if bytes[..3] != UTF8_BOM {
            return Err(Error::InvalidBom);
        }
        if bytes[len - 1] != 0x00 {
            return Err(Error::InvalidStringTermination);
        }
        let value = core::str::from_utf8(&bytes[3..len - 1]).map_err(|_| Error::InvalidUtf8)?;
        if ALIGN_AFTER_BITS != 0 {
            decode_pad_to::<ALIGN_AFTER_BITS>(input, base_offset)?;
        }
        Ok(Utf8String { value })
    }
}

/// A length-prefixed, BOM-and-NUL-terminated UTF-16 string.
///
/// Encoding borrows code units straight from a `&str` via
/// [`str::encode_utf16`], so no allocation is required. Decoding yields a
/// [`Utf16View`] over the raw wire bytes rather than an owned string, since
/// transcoding UTF-16 to UTF-8 in general requires an allocator this crate
/// does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16String<'a, const LEN_BITS: usize = 32, const ALIGN_AFTER_BITS: usize = 0> {
    /// The string's content, to be transcoded to UTF-16 code units on encode.
    pub value: &'a str,
}

impl<'a, const LEN_BITS: usize, const ALIGN_AFTER_BITS: usize> Utf16String<'a, LEN_BITS, ALIGN_AFTER_BITS> {
    /// Wraps `value` for encoding.
    pub const fn new(value: &'a str) -> Self {
        Utf16String { value }
    }

    /// Total encoded length, including alignment padding.
    pub fn measure(&self, base_offset: usize) -> usize {
        let code_units = self.value.encode_utf16().count();
        let payload_len = 2 + (code_units * 2) + 2;
        let mut pos = bytes_for_bits(LEN_BITS) + payload_len;
        if ALIGN_AFTER_BITS != 0 {
            pos += pad_needed(base_offset + pos, ALIGN_AFTER_BITS / 8);
        }
        pos
    }

    /// Encodes the string.
    pub fn encode(&self, out: &mut Writer<'_>, cfg: &Config, base_offset: usize) -> Result<()> {
        let code_units: usize = self.value.encode_utf16().count();
        let payload_len = (2 + code_units * 2 + 2) as u32;
        write_len_field::<LEN_BITS>(out, payload_len)?;

        let little = cfg.payload_endian == Endian::Little;
        let bom: [u8; 2] = if little { [0xFF, 0xFE] } else { [0xFE, 0xFF] };
        out.write_bytes(&bom)?;

        for cu in self.value.encode_utf16() {
            write_u16(out, cfg.payload_endian, cu)?;
        }
        write_u16(out, cfg.payload_endian, 0)?;

        if ALIGN_AFTER_BITS != 0 {
            encode_pad_to::<ALIGN_AFTER_BITS>(out, cfg, base_offset)?;
        }
        Ok(())
    }
}

/// A borrowed, not-yet-transcoded view over a decoded UTF-16 string: its raw
/// code-unit bytes (excluding BOM and terminator) plus the byte order the
/// BOM declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16View<'a> {
    code_unit_bytes: &'a [u8],
    endian: Endian,
}

impl<'a> Utf16View<'a> {
    /// Iterates the decoded `char`s, replacing unpaired surrogates with
    /// `\u{FFFD}`.
    pub fn chars(&self) -> impl Iterator<Item = char> + 'a {
        let units = self.code_unit_bytes.chunks_exact(2).map(move |pair| match self.endian {
            Endian::Big => u16::from_be_bytes([pair[0], pair[1]]),
            Endian::Little => u16::from_le_bytes([pair[0], pair[1]]),
        });
        char::decode_utf16(units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

/// Decodes a UTF-16 string, validating length parity, terminator, and BOM.
pub fn decode_utf16_view<'a, const LEN_BITS: usize, const ALIGN_AFTER_BITS: usize>(
    input: &mut Reader<'a>,
    base_offset: usize,
) -> Result<Utf16View<'a>> {
    let len = read_len_field::<LEN_BITS>(input)? as usize;
    if len < 4 || len % 2 != 0 {
        return Err(Error::InvalidUtf16);
    }
    let bytes = input.read_bytes(len)?;
    let terminator = u16::from_be_bytes([bytes[len - 2], bytes[len - 1]]);
    if terminator != 0x0000 {
        return Err(Error::InvalidStringTermination);
    }
    let endian = match [bytes[0], bytes[1]] {
        [0xFE, 0xFF] => Endian::Big,
        [0xFF, 0xFE] => Endian::Little,
        _ => return Err(Error::InvalidBom),
    };
    if ALIGN_AFTER_BITS != 0 {
        decode_pad_to::<ALIGN_AFTER_BITS>(input, base_offset)?;
    }
    Ok(Utf16View { code_unit_bytes: &bytes[2..len - 2], endian })
}

// --- Arrays ------------------------------------------------------------------

/// A length-prefixed array of scalar elements, borrowed for encoding.
///
/// Restricted to scalar element types, matching the layout this crate
/// actually needs; a generic element codec is not provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynArray<'a, T: Scalar, const LEN_BITS: usize = 32, const ALIGN_AFTER_BITS: usize = 0> {
    /// The array's elements.
    pub value: &'a [T],
}

impl<'a, T: Scalar, const LEN_BITS: usize, const ALIGN_AFTER_BITS: usize> DynArray<'a, T, LEN_BITS, ALIGN_AFTER_BITS> {
    /// Wraps `value` for encoding.
    pub const fn new(value: &'a [T]) -> Self {
        DynArray { value }
    }

    /// Total encoded length, including alignment padding.
    pub fn measure(&self, base_offset: usize) -> usize {
        let mut pos = bytes_for_bits(LEN_BITS) + self.value.len() * T::WIDTH;
        if ALIGN_AFTER_BITS != 0 {
            pos += pad_needed(base_offset + pos, ALIGN_AFTER_BITS / 8);
        }
        pos
    }

    /// Encodes the array.
    pub fn encode(&self, out: &mut Writer<'_>, cfg: &Config, base_offset: usize) -> Result<()> {
        let bytes_len = (self.value.len() * T::WIDTH) as u32;
        write_len_field::<LEN_BITS>(out, bytes_len)?;
        for e in self.value {
            e.encode_scalar(out, cfg.payload_endian)?;
        }
        if ALIGN_AFTER_BITS != 0 {
            encode_pad_to::<ALIGN_AFTER_BITS>(out, cfg, base_offset)?;
        }
        Ok(())
    }
}

/// A decoded scalar dyn_array: a flat run of wire bytes whose element count
/// and values are computed on demand, avoiding an owned `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynArrayView<'a, T: Scalar> {
    bytes: &'a [u8],
    endian: Endian,
    _marker: core::marker::PhantomData<T>,
}

impl<'a, T: Scalar> DynArrayView<'a, T> {
    /// Number of decoded elements.
    pub fn len(&self) -> usize {
        self.bytes.len() / T::WIDTH
    }

    /// True if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decodes the element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(Error::BufferOverrun);
        }
        let mut r = Reader::new(&self.bytes[index * T::WIDTH..(index + 1) * T::WIDTH]);
        T::decode_scalar(&mut r, self.endian)
    }

    /// Iterates the decoded elements in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<T>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

/// Decodes a scalar dyn_array: `byte_count % size_of::<T>() == 0` is
/// enforced, matching the original's invariant.
pub fn decode_dyn_array<'a, T: Scalar, const LEN_BITS: usize, const ALIGN_AFTER_BITS: usize>(
    input: &mut Reader<'a>,
    cfg: &Config,
    base_offset: usize,
) -> Result<DynArrayView<'a, T>> {
    let byte_count = read_len_field::<LEN_BITS>(input)? as usize;
    if byte_count % T::WIDTH != 0 {
        return Err(Error::InvalidLength);
    }
    let bytes = input.read_bytes(byte_count)?;
    if ALIGN_AFTER_BITS != 0 {
        decode_pad_to::<ALIGN_AFTER_BITS>(input, base_offset)?;
    }
    Ok(DynArrayView { bytes, endian: cfg.payload_endian, _marker: core::marker::PhantomData })
}

/// A fixed-size array of `N` scalar elements, with an optional embedded
/// length field that must equal `N * size_of::<T>()` exactly when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedArray<T: Scalar, const N: usize, const OPTIONAL_LEN_BITS: usize = 0> {
    /// The array's elements.
    pub value: [T; N],
}

impl<T: Scalar, const N: usize, const OPTIONAL_LEN_BITS: usize> FixedArray<T, N, OPTIONAL_LEN_BITS> {
    /// Wraps `value` for encoding.
    pub const fn new(value: [T; N]) -> Self {
        FixedArray { value }
    }

    /// Total encoded length.
    pub fn measure(&self) -> usize {
        let mut pos = 0;
        if OPTIONAL_LEN_BITS != 0 {
            pos += bytes_for_bits(OPTIONAL_LEN_BITS);
        }
        pos + N * T::WIDTH
    }

    /// Encodes the array.
    pub fn encode(&self, out: &mut Writer<'_>, cfg: &Config) -> Result<()> {
        if OPTIONAL_LEN_BITS != 0 {
            let bytes_len = (N * T::WIDTH) as u32;
            write_len_field::<OPTIONAL_LEN_BITS>(out, bytes_len)?;
        }
        for e in &self.value {
            e.encode_scalar(out, cfg.payload_endian)?;
        }
        Ok(())
    }

    /// Decodes the array.
    pub fn decode(input: &mut Reader<'_>, cfg: &Config) -> Result<Self>
    where
        T: Default,
    {
        if OPTIONAL_LEN_BITS != 0 {
            let declared = read_len_field::<OPTIONAL_LEN_BITS>(input)? as usize;
            if declared != N * T::WIDTH {
                return Err(Error::InvalidLength);
            }
        }
        let mut value = [T::default(); N];
        for slot in value.iter_mut() {
            *slot = T::decode_scalar(input, cfg.payload_endian)?;
        }
        Ok(FixedArray { value })
    }
}

// --- Discriminated union -------------------------------------------------

/// A discriminated union whose alternatives are encoded/decoded by a
/// caller-defined dispatcher, with selector `0` reserved for an empty
/// ("monostate") alternative.
pub trait UnionPayload: Sized {
    /// The alternative index currently held; `0` means the empty variant.
    fn selector(&self) -> u32;
    /// Measures the non-empty alternative's payload length. Never called
    /// for `selector() == 0`.
    fn measure_alt(&self, cfg: &Config, base_offset: usize) -> Result<usize>;
    /// Encodes the non-empty alternative's payload. Never called for
    /// `selector() == 0`.
    fn encode_alt(&self, out: &mut Writer<'_>, cfg: &Config, base_offset: usize) -> Result<()>;
    /// Decodes alternative `selector` from `input`.
    fn decode_alt(selector: u32, input: &mut Reader<'_>, cfg: &Config, base_offset: usize) -> Result<Self>;
}

/// Measures a `union_variant`'s total encoded length (length field +
/// selector field + payload + trailing alignment).
pub fn measure_union<U: UnionPayload, const LEN_BITS: usize, const SELECTOR_BITS: usize, const ALIGN_PAYLOAD_BITS: usize>(
    value: &U,
    cfg: &Config,
    base_offset: usize,
) -> Result<usize> {
    let meta_bytes = bytes_for_bits(LEN_BITS) + bytes_for_bits(SELECTOR_BITS);
    let mut pos = meta_bytes;
    if value.selector() != 0 {
        pos += value.measure_alt(cfg, base_offset + pos)?;
    }
    if ALIGN_PAYLOAD_BITS != 0 {
        pos += pad_needed(base_offset + pos, ALIGN_PAYLOAD_BITS / 8);
    }
    Ok(pos)
}

/// Encodes a `union_variant`: precomputes the payload length with a
/// [`Sizer`] before writing anything, so the length field never needs a
/// patch-back write.
pub fn encode_union<U: UnionPayload, const LEN_BITS: usize, const SELECTOR_BITS: usize, const ALIGN_PAYLOAD_BITS: usize>(
    out: &mut Writer<'_>, value: &U, cfg: &Config, base_offset: usize,
) -> Result<()> {
    let selector = value.selector();
    let meta_bytes = bytes_for_bits(LEN_BITS) + bytes_for_bits(SELECTOR_BITS);

    let mut sz = Sizer::starting_at(out.position() + meta_bytes);
    if selector != 0 {
        let len = value.measure_alt(cfg, base_offset + sz.position())?;
        sz.advance(len);
    }
    if ALIGN_PAYLOAD_BITS != 0 {
        let off = base_offset + sz.position();
        sz.advance(pad_needed(off, ALIGN_PAYLOAD_BITS / 8));
    }
    let payload_len = (sz.position() - (out.position() + meta_bytes)) as u32;

    write_len_field::<LEN_BITS>(out, payload_len)?;
    write_len_field::<SELECTOR_BITS>(out, selector)?;

    if selector != 0 {
        value.encode_alt(out, cfg, base_offset)?;
    }
    if ALIGN_PAYLOAD_BITS != 0 {
        encode_pad_to::<ALIGN_PAYLOAD_BITS>(out, cfg, base_offset)?;
    }
    Ok(())
}

/// Decodes a `union_variant`, rejecting an out-of-range selector and any
/// trailing bytes left inside the declared payload length.
pub fn decode_union<U: UnionPayload, const LEN_BITS: usize, const SELECTOR_BITS: usize, const ALIGN_PAYLOAD_BITS: usize>(
    input: &mut Reader<'_>, cfg: &Config, base_offset: usize, variant_count: u32,
) -> Result<U> {
    let len = read_len_field::<LEN_BITS>(input)? as usize;
    let selector = read_len_field::<SELECTOR_BITS>(input)?;
    let region_start = input.position();

    if selector >= variant_count {
        return Err(Error::InvalidUnionSelector);
    }

    let value = U::decode_alt(selector, input, cfg, base_offset)?;

    let region_end = region_start + len;
    if input.position() > region_end {
        return Err(Error::InvalidLength);
    }
    let remaining = region_end - input.position();
    input.skip(remaining)?;

    if ALIGN_PAYLOAD_BITS != 0 {
        decode_pad_to::<ALIGN_PAYLOAD_BITS>(input, base_offset)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_needed() {
        assert_eq!(pad_needed(0, 4), 0);
        assert_eq!(pad_needed(1, 4), 3);
        assert_eq!(pad_needed(4, 4), 0);
        assert_eq!(pad_needed(5, 0), 0);
    }

    #[test]
    fn test_scalar_round_trip_le() {
        let cfg = Config::new(Endian::Little);
        let mut buf = [0u8; 4];
        {
            let mut w = Writer::new(&mut buf);
            encode_scalar(&mut w, &cfg, &0x0102_0304u32).unwrap();
        }
        let mut r = Reader::new(&buf);
        let v: u32 = decode_scalar(&mut r, &cfg).unwrap();
        assert_eq!(v, 0x0102_0304);
    }

    #[test]
    fn test_bool_invalid_value() {
        let cfg = Config::new(Endian::Big);
        let buf = [0x02u8];
        let mut r = Reader::new(&buf);
        assert_eq!(decode_scalar::<bool>(&mut r, &cfg), Err(Error::InvalidBoolValue(0x02)));
    }

    #[test]
    fn test_utf8_string_round_trip() {
        let cfg = Config::new(Endian::Big);
        let s: Utf8String<'_, 32, 0> = Utf8String::new("hi");
        let mut buf = [0u8; 16];
        let written = {
            let mut w = Writer::new(&mut buf);
            s.encode(&mut w, &cfg, 0).unwrap();
            w.position()
        };
        let mut r = Reader::new(&buf[..written]);
        let decoded: Utf8String<'_, 32, 0> = Utf8String::decode(&mut r, 0).unwrap();
        assert_eq!(decoded.value, "hi");
    }

    #[test]
    fn test_utf8_string_bad_bom() {
        let mut buf = [0u8; 8];
        buf[3] = 4; // length field (32-bit BE) = 4
        let mut r = Reader::new(&buf[0..8]);
        let decoded: Result<Utf8String<'_, 32, 0>> = Utf8String::decode(&mut r, 0);
        assert_eq!(decoded.unwrap_err(), Error::InvalidBom);
    }

    #[test]
    fn test_utf16_round_trip() {
        let cfg = Config::new(Endian::Big);
        let s: Utf16String<'_, 32, 0> = Utf16String::new("hi");
        let mut buf = [0u8; 16];
        let written = {
            let mut w = Writer::new(&mut buf);
            s.encode(&mut w, &cfg, 0).unwrap();
            w.position()
        };
        let mut r = Reader::new(&buf[..written]);
        let view = decode_utf16_view::<32, 0>(&mut r, 0).unwrap();
        assert!(view.chars().eq("hi".chars()));
    }

    #[test]
    fn test_dyn_array_round_trip() {
        let cfg = Config::new(Endian::Big);
        let values: [u16; 3] = [1, 2, 3];
        let arr: DynArray<'_, u16, 16, 0> = DynArray::new(&values);
        let mut buf = [0u8; 16];
        let written = {
            let mut w = Writer::new(&mut buf);
            arr.encode(&mut w, &cfg, 0).unwrap();
            w.position()
        };
        let mut r = Reader::new(&buf[..written]);
        let view = decode_dyn_array::<u16, 16, 0>(&mut r, &cfg, 0).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(1).unwrap(), 2);
    }

    #[test]
    fn test_fixed_array_round_trip() {
        let cfg = Config::new(Endian::Big);
        let arr: FixedArray<u8, 4, 0> = FixedArray::new([1, 2, 3, 4]);
        let mut buf = [0u8; 4];
        {
            let mut w = Writer::new(&mut buf);
            arr.encode(&mut w, &cfg).unwrap();
        }
        let mut r = Reader::new(&buf);
        let decoded: FixedArray<u8, 4, 0> = FixedArray::decode(&mut r, &cfg).unwrap();
        assert_eq!(decoded.value, [1, 2, 3, 4]);
    }

    #[derive(Debug, PartialEq)]
    enum TestUnion {
        Empty,
        Num(u32),
    }

    impl UnionPayload for TestUnion {
        fn selector(&self) -> u32 {
            match self {
                TestUnion::Empty => 0,
                TestUnion::Num(_) => 1,
            }
        }
        fn measure_alt(&self, _cfg: &Config, _base_offset: usize) -> Result<usize> {
            Ok(4)
        }
        fn encode_alt(&self, out: &mut Writer<'_>, cfg: &Config, _base_offset: usize) -> Result<()> {
            match self {
                TestUnion::Num(v) => encode_scalar(out, cfg, v),
                TestUnion::Empty => Ok(()),
            }
        }
        fn decode_alt(selector: u32, input: &mut Reader<'_>, cfg: &Config, _base_offset: usize) -> Result<Self> {
            match selector {
                0 => Ok(TestUnion::Empty),
                1 => Ok(TestUnion::Num(decode_scalar(input, cfg)?)),
                _ => Err(Error::InvalidUnionSelector),
            }
        }
    }

    #[test]
    fn test_union_round_trip() {
        let cfg = Config::new(Endian::Big);
        let value = TestUnion::Num(0xAABBCCDD);
        let mut buf = [0u8; 16];
        let written = {
            let mut w = Writer::new(&mut buf);
            encode_union::<_, 32, 32, 0>(&mut w, &value, &cfg, 0).unwrap();
            w.position()
        };
        let mut r = Reader::new(&buf[..written]);
        let decoded: TestUnion = decode_union::<_, 32, 32, 0>(&mut r, &cfg, 0, 2).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_union_invalid_selector() {
        let cfg = Config::new(Endian::Big);
        let mut buf = [0u8; 8];
        {
            let mut w = Writer::new(&mut buf);
            write_len_field::<32>(&mut w, 0).unwrap();
            write_len_field::<32>(&mut w, 5).unwrap();
        }
        let mut r = Reader::new(&buf);
        let decoded: Result<TestUnion> = decode_union::<_, 32, 32, 0>(&mut r, &cfg, 0, 2);
        assert_eq!(decoded, Err(Error::InvalidUnionSelector));
    }
}

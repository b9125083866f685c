//! Structural reflection substitute.
//!
//! Rust has no compile-time struct-field reflection, so a record type opts
//! into the generic aggregate codec below by hand-implementing [`Fields`]:
//! borrow (or mutably borrow) every field as a tuple, in declaration order.
//! [`encode_aggregate`]/[`decode_aggregate`] then fold that tuple through
//! [`crate::ser::codec::Scalar`]'s `encode_scalar`/`decode_scalar`, the same
//! primitives a hand-written `measure`/`encode`/`decode` (as
//! [`crate::entries::ServiceEntryRepr`] or
//! [`crate::options::IPv4EndpointOptionRepr`] writes for a fixed wire
//! layout) would call field by field.
//!
//! `TupleFold`/`TupleFoldMut` are blanket-implemented for tuples of up to 24
//! scalar fields (`(&A,)` .. `(&A, &B, .., &X)`), matching the largest
//! aggregate record this crate's payload format allows. A 25th field simply
//! has no blanket impl, so `Fields::AsTuple`/`AsTupleMut` fails to satisfy
//! the `TupleFold`/`TupleFoldMut` bound with a normal "trait bound not
//! satisfied" diagnostic; there is no runtime check to fall back on.
use crate::cursor::{Reader, Writer};
use crate::error::Error;
use crate::ser::codec::{decode_scalar, encode_scalar, Scalar};
use crate::ser::config::Config;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Hand-implemented per record type: borrows every field, in declaration
/// order, as a tuple of references (or mutable references).
pub trait Fields {
    /// The record's fields, as a tuple of shared references.
    type AsTuple<'a>
    where
        Self: 'a;
    /// The record's fields, as a tuple of mutable references.
    type AsTupleMut<'a>
    where
        Self: 'a;

    /// Borrows every field of `self` as a tuple.
    fn as_tuple(&self) -> Self::AsTuple<'_>;

    /// Mutably borrows every field of `self` as a tuple.
    fn as_tuple_mut(&mut self) -> Self::AsTupleMut<'_>;
}

/// A single scalar field, encoded with [`Config::payload_endian`].
trait EncodeField {
    fn encode_field(&self, out: &mut Writer<'_>, cfg: &Config) -> Result<()>;
}

impl<T: Scalar> EncodeField for T {
    fn encode_field(&self, out: &mut Writer<'_>, cfg: &Config) -> Result<()> {
        encode_scalar(out, cfg, self)
    }
}

/// A single scalar field, decoded with [`Config::payload_endian`] and
/// written back into the place `self` refers to.
trait DecodeField {
    fn decode_field(&mut self, input: &mut Reader<'_>, cfg: &Config) -> Result<()>;
}

impl<T: Scalar> DecodeField for T {
    fn decode_field(&mut self, input: &mut Reader<'_>, cfg: &Config) -> Result<()> {
        *self = decode_scalar(input, cfg)?;
        Ok(())
    }
}

/// Implemented for tuples of field references returned by [`Fields::as_tuple`].
/// Encodes every member in order, short-circuiting on the first error.
pub trait TupleFold {
    /// Encodes every tuple member in order.
    fn fold_encode(&self, out: &mut Writer<'_>, cfg: &Config) -> Result<()>;
}

/// Implemented for tuples of mutable field references returned by
/// [`Fields::as_tuple_mut`]. Decodes every member in order, short-circuiting
/// on the first error.
pub trait TupleFoldMut {
    /// Decodes every tuple member in order, writing each result back into
    /// the place the tuple borrowed it from.
    fn fold_decode(self, input: &mut Reader<'_>, cfg: &Config) -> Result<()>;
}

macro_rules! impl_tuple_fold {
    ($($t:ident),+) => {
        impl<$($t: Scalar),+> TupleFold for ($(&$t,)+) {
            fn fold_encode(&self, out: &mut Writer<'_>, cfg: &Config) -> Result<()> {
                #[allow(non_snake_case)]
                let ($($t,)+) = *self;
                $($t.encode_field(out, cfg)?;)+
                Ok(())
            }
        }

        impl<$($t: Scalar),+> TupleFoldMut for ($(&mut $t,)+) {
            fn fold_decode(self, input: &mut Reader<'_>, cfg: &Config) -> Result<()> {
                #[allow(non_snake_case)]
                let ($($t,)+) = self;
                $($t.decode_field(input, cfg)?;)+
                Ok(())
            }
        }
    };
}

impl_tuple_fold!(A);
impl_tuple_fold!(A, B);
impl_tuple_fold!(A, B, C);
impl_tuple_fold!(A, B, C, D);
impl_tuple_fold!(A, B, C, D, E);
impl_tuple_fold!(A, B, C, D, E, F);
impl_tuple_fold!(A, B, C, D, E, F, G);
impl_tuple_fold!(A, B, C, D, E, F, G, H);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W);
impl_tuple_fold!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X);

/// Encodes an aggregate record as the ordered concatenation of its fields,
/// with no implicit padding between them.
pub fn encode_aggregate<F>(out: &mut Writer<'_>, cfg: &Config, value: &F) -> Result<()>
where
    F: Fields,
    for<'a> F::AsTuple<'a>: TupleFold,
{
    value.as_tuple().fold_encode(out, cfg)
}

/// Decodes an aggregate record field by field, in declaration order, into
/// an already-constructed `value`.
pub fn decode_aggregate<F>(input: &mut Reader<'_>, cfg: &Config, value: &mut F) -> Result<()>
where
    F: Fields,
    for<'a> F::AsTupleMut<'a>: TupleFoldMut,
{
    value.as_tuple_mut().fold_decode(input, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::Endian;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Point {
        x: u32,
        y: u32,
    }

    impl Fields for Point {
        type AsTuple<'a> = (&'a u32, &'a u32);
        type AsTupleMut<'a> = (&'a mut u32, &'a mut u32);

        fn as_tuple(&self) -> Self::AsTuple<'_> {
            (&self.x, &self.y)
        }

        fn as_tuple_mut(&mut self) -> Self::AsTupleMut<'_> {
            (&mut self.x, &mut self.y)
        }
    }

    #[test]
    fn test_aggregate_round_trip_big_endian() {
        let cfg = Config::new(Endian::Big);
        let p = Point { x: 0x0102_0304, y: 0x0506_0708 };
        let mut buf = [0u8; 8];
        {
            let mut w = Writer::new(&mut buf);
            encode_aggregate(&mut w, &cfg, &p).unwrap();
        }
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);

        let mut decoded = Point::default();
        let mut r = Reader::new(&buf);
        decode_aggregate(&mut r, &cfg, &mut decoded).unwrap();
        assert_eq!(decoded, p);
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Wide {
        a: u8,
        b: u8,
        c: u8,
        d: u8,
        e: u8,
        f: u8,
        g: u8,
        h: u8,
        i: u8,
    }

    impl Fields for Wide {
        type AsTuple<'a> = (&'a u8, &'a u8, &'a u8, &'a u8, &'a u8, &'a u8, &'a u8, &'a u8, &'a u8);
        type AsTupleMut<'a> =
            (&'a mut u8, &'a mut u8, &'a mut u8, &'a mut u8, &'a mut u8, &'a mut u8, &'a mut u8, &'a mut u8, &'a mut u8);

        fn as_tuple(&self) -> Self::AsTuple<'_> {
            (&self.a, &self.b, &self.c, &self.d, &self.e, &self.f, &self.g, &self.h, &self.i)
        }

        fn as_tuple_mut(&mut self) -> Self::AsTupleMut<'_> {
            (
                &mut self.a,
                &mut self.b,
                &mut self.c,
                &mut self.d,
                &mut self.e,
                &mut self.f,
                &mut self.g,
                &mut self.h,
                &mut self.i,
            )
        }
    }

    #[test]
    fn test_nine_field_record_round_trip() {
        let cfg = Config::new(Endian::Little);
        let w = Wide { a: 1, b: 2, c: 3, d: 4, e: 5, f: 6, g: 7, h: 8, i: 9 };
        let mut buf = [0u8; 9];
        {
            let mut wr = Writer::new(&mut buf);
            encode_aggregate(&mut wr, &cfg, &w).unwrap();
        }
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let mut decoded = Wide::default();
        let mut r = Reader::new(&buf);
        decode_aggregate(&mut r, &cfg, &mut decoded).unwrap();
        assert_eq!(decoded, w);
    }
}

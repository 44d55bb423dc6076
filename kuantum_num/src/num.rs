pub mod contract;
pub mod legacy;

pub use contract::{ParseUint32ContractError, Uint32Contract};

const BYTE_MODULUS: f64 = 256.;
const BYTE_MAX: f64 = 255.;

const U16_MODULUS: f64 = 65_536.;
const I16_MIN: f64 = -32_768.;
const I16_MAX: f64 = 32_767.;

pub(crate) const U32_MODULUS: f64 = 4_294_967_296.;
pub(crate) const I32_MIN: f64 = -2_147_483_648.;
pub(crate) const I32_MAX: f64 = 2_147_483_647.;

/// Wraps `n` into `[0, 256)`, i.e. `((n % 256) + 256) % 256`.
///
/// The input is not floored first, so fractional parts survive:
/// `byte(-1.5) == 254.5`.
#[inline]
#[must_use]
pub fn byte(n: f64) -> f64 {
    wrap_unsigned(n, BYTE_MODULUS)
}

/// Brings an unsigned value above 255 down by multiples of 256.
///
/// Only correct for non-negative input. Anything at or below 255, negative
/// values included, is returned unchanged; use [`byte`] when the sign is not
/// known. Infinite input yields NaN.
#[must_use]
pub fn uint_to_byte(n: f64) -> f64 {
    if n > BYTE_MAX {
        // same value as subtracting 256 until `n <= 255`
        n - BYTE_MODULUS * ((n - BYTE_MAX) / BYTE_MODULUS).ceil()
    } else {
        n
    }
}

/// Wraps `n` into `[0, 65536)`.
#[inline]
#[must_use]
pub fn uint16(n: f64) -> f64 {
    wrap_unsigned(n, U16_MODULUS)
}

/// Folds `n` into the signed 16-bit range, passing in-range values through.
///
/// Below `-32768` the result is `32767 + uint16(n + 32769)`, which only lands
/// inside the range for `n == -32769`; lower inputs come back one modulus
/// above it (`int16(-32770) == 98302`). Above `32767` the result is
/// `-32768 + uint16(n - 32768)`.
#[must_use]
pub fn int16(n: f64) -> f64 {
    fold_signed(n, I16_MIN, I16_MAX, uint16)
}

/// Wraps `n` into `[0, 4294967296)`.
///
/// See [`legacy::uint32`] for the shifted variant.
#[inline]
#[must_use]
pub fn uint32(n: f64) -> f64 {
    wrap_unsigned(n, U32_MODULUS)
}

/// Folds `n` into the signed 32-bit range with [`int16`]'s branches and
/// 32-bit constants, wrapping through [`uint32`].
#[must_use]
pub fn int32(n: f64) -> f64 {
    fold_signed(n, I32_MIN, I32_MAX, uint32)
}

/// `n mod modulus` in `[0, modulus)`. A tiny negative remainder rounds up to
/// exactly `modulus` when shifted; that folds to 0.
fn wrap_unsigned(n: f64, modulus: f64) -> f64 {
    let wrapped = n.rem_euclid(modulus);
    if wrapped >= modulus { 0. } else { wrapped }
}

pub(crate) fn fold_signed(n: f64, min: f64, max: f64, wrap: fn(f64) -> f64) -> f64 {
    if n < min {
        max + wrap(n + (1. - min))
    } else if n > max {
        min + wrap(n - (max + 1.))
    } else {
        n
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    #[rstest]
    #[case(0.)]
    #[case(1.)]
    #[case(127.)]
    #[case(128.)]
    #[case(200.)]
    #[case(255.)]
    fn byte_in_range(#[case] n: f64) {
        assert_eq!(super::byte(n), n);
    }

    #[rstest]
    #[case(256.  , 0.   )]
    #[case(257.  , 1.   )]
    #[case(-1.   , 255. )]
    #[case(-256. , 0.   )]
    #[case(-257. , 255. )]
    #[case(1000. , 232. )]
    #[case(257.25, 1.25 )]
    #[case(-1.5  , 254.5)]
    #[case(-1e-20, 0.   )]
    fn byte(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(super::byte(input), expected);
    }

    #[rstest]
    fn byte_periodic(
        #[values(-300., -1., 0., 42., 255., 999.)] n: f64,
        #[values(-3., -1., 1., 7.)] k: f64,
    ) {
        assert_eq!(super::byte(n), super::byte(256. * k + n));
    }

    #[rstest]
    #[case(0.   , 0.  )]
    #[case(44.  , 44. )]
    #[case(255. , 255.)]
    #[case(256. , 0.  )]
    #[case(300. , 44. )]
    #[case(511. , 255.)]
    #[case(512. , 0.  )]
    #[case(1000., 232.)]
    #[case(255.5, -0.5)]
    fn uint_to_byte(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(super::uint_to_byte(input), expected);
    }

    #[rstest]
    #[case(-1.  )]
    #[case(-3.  )]
    #[case(-300.)]
    fn uint_to_byte_keeps_negative(#[case] n: f64) {
        assert_eq!(super::uint_to_byte(n), n);
        assert_ne!(super::uint_to_byte(n), super::byte(n));
    }

    #[rstest]
    #[case(0.    , 0.    )]
    #[case(255.  , 255.  )]
    #[case(65535., 65535.)]
    #[case(65536., 0.    )]
    #[case(65537., 1.    )]
    #[case(-1.   , 65535.)]
    #[case(-65536., 0.   )]
    #[case(131_071., 65535.)]
    #[case(-1e-14, 0.    )]
    fn uint16(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(super::uint16(input), expected);
    }

    #[rstest]
    #[case(0.      , 0.      )]
    #[case(-1.     , -1.     )]
    #[case(32767.  , 32767.  )]
    #[case(-32768. , -32768. )]
    #[case(32768.  , -32768. )]
    #[case(32769.  , -32767. )]
    #[case(65535.  , -1.     )]
    #[case(65536.  , 0.      )]
    #[case(40000.  , -25536. )]
    #[case(-32769. , 32767.  )]
    #[case(-32770. , 98302.  )]
    #[case(-40000. , 91072.  )]
    fn int16(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(super::int16(input), expected);
    }

    #[rstest]
    fn int16_low_branch_is_congruent(#[values(-32770., -40000., -65536., -100_000.)] n: f64) {
        let folded = super::int16(n);
        assert!(folded > super::I16_MAX);
        assert_eq!(super::int16(folded - super::U16_MODULUS), folded - super::U16_MODULUS);
        assert_eq!((folded - n).rem_euclid(super::U16_MODULUS), 0.);
    }

    #[rstest]
    #[case(0.              , 0.             )]
    #[case(1.              , 1.             )]
    #[case(4_294_967_295.  , 4_294_967_295. )]
    #[case(4_294_967_296.  , 0.             )]
    #[case(4_294_967_297.  , 1.             )]
    #[case(-1.             , 4_294_967_295. )]
    #[case(-4_294_967_296. , 0.             )]
    #[case(-1e-14          , 0.             )]
    fn uint32(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(super::uint32(input), expected);
    }

    #[rstest]
    fn uint32_periodic(
        #[values(-5., 0., 3., 65536., 2_147_483_648.)] n: f64,
        #[values(-2., -1., 1., 2.)] k: f64,
    ) {
        assert_eq!(super::uint32(n), super::uint32(super::U32_MODULUS * k + n));
    }

    #[rstest]
    #[case(0.              , 0.              )]
    #[case(2_147_483_647.  , 2_147_483_647.  )]
    #[case(-2_147_483_648. , -2_147_483_648. )]
    #[case(2_147_483_648.  , -2_147_483_648. )]
    #[case(4_294_967_295.  , -1.             )]
    #[case(4_294_967_296.  , 0.              )]
    #[case(-2_147_483_649. , 2_147_483_647.  )]
    #[case(-2_147_483_650. , 6_442_450_942.  )]
    fn int32(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(super::int32(input), expected);
    }

    #[rstest]
    fn tiny_negative_stays_below_modulus(#[values(-1e-20, -1e-14, -f64::MIN_POSITIVE)] n: f64) {
        assert!((0. ..super::BYTE_MODULUS).contains(&super::byte(n)));
        assert!((0. ..super::U16_MODULUS).contains(&super::uint16(n)));
        assert!((0. ..super::U32_MODULUS).contains(&super::uint32(n)));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn non_finite_is_nan(#[case] n: f64) {
        assert!(super::byte(n).is_nan());
        assert!(super::uint16(n).is_nan());
        assert!(super::uint32(n).is_nan());
    }
}

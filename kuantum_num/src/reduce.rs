//! Kyber coefficient reductions modulo [`Q`].

/// Coefficients per polynomial.
pub const N: usize = 256;
pub type Poly = [i16; N];

pub const Q: i16 = 3329;
/// `Q^-1 mod 2^16`
pub const Q_INV: i32 = 62209;

const BARRETT_V: i32 = ((1 << 26) + Q as i32 / 2) / Q as i32;

/// Returns `a * 2^-16 mod Q`, in `(-Q, Q)` for `|a| < Q * 2^15`.
///
/// Wraps instead of panicking when `a` is outside that bound.
#[must_use]
pub const fn montgomery_reduce(a: i32) -> i16 {
    let t = a.wrapping_mul(Q_INV) as i16;
    (a.wrapping_sub(t as i32 * Q as i32) >> 16) as i16
}

/// Returns the representative of `a mod Q` in `[0, Q]`.
#[must_use]
pub const fn barrett_reduce(a: i16) -> i16 {
    let t = ((BARRETT_V * a as i32) >> 26) * Q as i32;
    (a as i32 - t) as i16
}

/// Montgomery product, `a * b * 2^-16 mod Q`.
#[inline]
#[must_use]
pub const fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}

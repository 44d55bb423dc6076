//! 32-bit wrapping as existing callers observe it.
//!
//! [`uint32`] keeps adding the modulus while the remainder is *below* it, so
//! every finite result sits one full modulus above `[0, 4294967296)`. Values
//! stay congruent to [`super::uint32`]'s, which is what callers masking the
//! low bits rely on.

use super::{I32_MAX, I32_MIN, U32_MODULUS, fold_signed};

/// Returns `n mod 4294967296` shifted into `[4294967296, 8589934592)`.
///
/// NaN and infinite input come back as NaN.
#[must_use]
pub fn uint32(n: f64) -> f64 {
    let mut wrapped = n % U32_MODULUS;
    while wrapped < U32_MODULUS {
        wrapped += U32_MODULUS;
    }

    if wrapped.is_finite() {
        tracing::trace!(input = n, output = wrapped, "uint32 result is shifted past u32 range");
    }
    wrapped
}

/// [`super::int32`] wrapping through the shifted [`uint32`].
///
/// In-range input passes through untouched; anything outside picks up the
/// extra modulus, e.g. `int32(2147483648) == 2147483648`.
#[must_use]
pub fn int32(n: f64) -> f64 {
    fold_signed(n, I32_MIN, I32_MAX, uint32)
}

use crate::reduce::{N, Poly};

/// Noise parameter of the centered binomial distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eta {
    Two,
    Three,
}

impl Eta {
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Bytes of uniform randomness consumed per polynomial.
    #[must_use]
    pub const fn buf_len(self) -> usize {
        self.value() * N / 4
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CbdError {
    #[error("cbd buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
}

#[inline]
#[must_use]
pub const fn load24(bytes: [u8; 3]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}

#[inline]
#[must_use]
pub const fn load32(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Samples a polynomial with coefficients in `[-eta, eta]` from uniformly
/// random bytes. Bytes past [`Eta::buf_len`] are ignored.
///
/// # Errors
/// if `buf` is shorter than [`Eta::buf_len`]
pub fn cbd(buf: &[u8], eta: Eta) -> Result<Poly, CbdError> {
    let expected = eta.buf_len();
    let Some(buf) = buf.get(..expected) else {
        let actual = buf.len();
        tracing::debug!(?eta, expected, actual, "rejecting short cbd buffer");
        return Err(CbdError::BufferTooShort { expected, actual });
    };
    tracing::trace!(?eta, len = buf.len(), "sampling cbd polynomial");

    let mut poly = [0; N];
    match eta {
        Eta::Two => cbd2(buf, &mut poly),
        Eta::Three => cbd3(buf, &mut poly),
    }
    Ok(poly)
}

fn cbd2(buf: &[u8], poly: &mut Poly) {
    let (words, _) = buf.as_chunks::<4>();
    let (coeffs, _) = poly.as_chunks_mut::<8>();
    for (&word, coeffs) in words.iter().zip(coeffs) {
        let t = load32(word);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
        for (j, c) in coeffs.iter_mut().enumerate() {
            let a = (d >> (4 * j)) & 0x3;
            let b = (d >> (4 * j + 2)) & 0x3;
            *c = a as i16 - b as i16;
        }
    }
}

fn cbd3(buf: &[u8], poly: &mut Poly) {
    let (words, _) = buf.as_chunks::<3>();
    let (coeffs, _) = poly.as_chunks_mut::<4>();
    for (&word, coeffs) in words.iter().zip(coeffs) {
        let t = load24(word);
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
        for (j, c) in coeffs.iter_mut().enumerate() {
            let a = (d >> (6 * j)) & 0x7;
            let b = (d >> (6 * j + 3)) & 0x7;
            *c = a as i16 - b as i16;
        }
    }
}

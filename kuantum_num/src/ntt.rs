//! Number-theoretic transform over `Z_q[X]/(X^256 + 1)`.

use crate::reduce::{N, Poly, barrett_reduce, fqmul, montgomery_reduce};

/// Powers of the 256th root of unity `17`, in Montgomery form and bit-reversed order.
pub const ZETAS: [i16; 128] = [
    2285, 2571, 2970, 1812, 1493, 1422, 287, 202, 3158, 622, 1577, 182, 962, 2127, 1855, 1468, 573,
    2004, 264, 383, 2500, 1458, 1727, 3199, 2648, 1017, 732, 608, 1787, 411, 3124, 1758, 1223, 652,
    2777, 1015, 2036, 1491, 3047, 1785, 516, 3321, 3009, 2663, 1711, 2167, 126, 1469, 2476, 3239,
    3058, 830, 107, 1908, 3082, 2378, 2931, 961, 1821, 2604, 448, 2264, 677, 2054, 2226, 430, 555,
    843, 2078, 871, 1550, 105, 422, 587, 177, 3094, 3038, 2869, 1574, 1653, 3083, 778, 1159, 3182,
    2552, 1483, 2727, 1119, 1739, 644, 2457, 349, 418, 329, 3173, 3254, 817, 1097, 603, 610, 1322,
    2044, 1864, 384, 2114, 3193, 1218, 1994, 2455, 220, 2142, 1670, 2144, 1799, 2051, 794, 1819,
    2475, 2459, 478, 3221, 3021, 996, 991, 958, 1869, 1522, 1628,
];

/// Negated inverse twiddles for [`invntt`]; the last entry scales the result by `2^32 / 128`.
pub const ZETAS_INV: [i16; 128] = [
    1701, 1807, 1460, 2371, 2338, 2333, 308, 108, 2851, 870, 854, 1510, 2535, 1278, 1530, 1185,
    1659, 1187, 3109, 874, 1335, 2111, 136, 1215, 2945, 1465, 1285, 2007, 2719, 2726, 2232, 2512,
    75, 156, 3000, 2911, 2980, 872, 2685, 1590, 2210, 602, 1846, 777, 147, 2170, 2551, 246, 1676,
    1755, 460, 291, 235, 3152, 2742, 2907, 3224, 1779, 2458, 1251, 2486, 2774, 2899, 1103, 1275,
    2652, 1065, 2881, 725, 1508, 2368, 398, 951, 247, 1421, 3222, 2499, 271, 90, 853, 1860, 3203,
    1162, 1618, 666, 320, 8, 2813, 1544, 282, 1838, 1293, 2314, 552, 2677, 2106, 1571, 205, 2918,
    1542, 2721, 2597, 2312, 681, 130, 1602, 1871, 829, 2946, 3065, 1325, 2756, 1861, 1474, 1202,
    2367, 3147, 1752, 2707, 171, 3127, 3042, 1907, 1836, 1517, 359, 758, 1441,
];

/// Forward transform in place. Standard order in, bit-reversed order out.
///
/// Coefficients grow by at most `Q` per layer, so inputs in `(-Q, Q)` stay
/// within `i16`. Larger inputs wrap.
pub fn ntt(r: &mut Poly) {
    let mut k = 1;
    let mut len = N / 2;
    while len >= 2 {
        for block in r.chunks_exact_mut(2 * len) {
            let zeta = ZETAS[k];
            k += 1;
            let (lo, hi) = block.split_at_mut(len);
            for (a, b) in lo.iter_mut().zip(hi) {
                let t = fqmul(zeta, *b);
                *b = a.wrapping_sub(t);
                *a = a.wrapping_add(t);
            }
        }
        len >>= 1;
    }
}

/// Inverse transform in place, bit-reversed order in, standard order out.
///
/// The result carries an extra Montgomery factor: `invntt(ntt(p))` is
/// congruent to `p * 2^16`.
pub fn invntt(r: &mut Poly) {
    let mut k = 0;
    let mut len = 2;
    while len <= N / 2 {
        for block in r.chunks_exact_mut(2 * len) {
            let zeta = ZETAS_INV[k];
            k += 1;
            let (lo, hi) = block.split_at_mut(len);
            for (a, b) in lo.iter_mut().zip(hi) {
                let t = *a;
                *a = barrett_reduce(t.wrapping_add(*b));
                *b = fqmul(zeta, t.wrapping_sub(*b));
            }
        }
        len <<= 1;
    }

    let scale = ZETAS_INV[N / 2 - 1];
    for c in r.iter_mut() {
        *c = montgomery_reduce(i32::from(*c) * i32::from(scale));
    }
}

/// Product in `Z_q[X]/(X^2 - zeta * 2^-16)` of `a0 + a1 X` and `b0 + b1 X`,
/// scaled by `2^-16`. `zeta` is in Montgomery form, as in [`ZETAS`].
#[must_use]
pub const fn base_mul(a: [i16; 2], b: [i16; 2], zeta: i16) -> [i16; 2] {
    let r0 = fqmul(fqmul(a[1], b[1]), zeta).wrapping_add(fqmul(a[0], b[0]));
    let r1 = fqmul(a[0], b[1]).wrapping_add(fqmul(a[1], b[0]));
    [r0, r1]
}

/// Pointwise product of two polynomials in the NTT domain.
#[must_use]
pub fn poly_base_mul(a: &Poly, b: &Poly) -> Poly {
    let mut r: Poly = [0; N];
    let (out, _) = r.as_chunks_mut::<4>();
    let (a, _) = a.as_chunks::<4>();
    let (b, _) = b.as_chunks::<4>();
    for (i, ((r, a), b)) in out.iter_mut().zip(a).zip(b).enumerate() {
        let zeta = ZETAS[N / 4 + i];
        let [r0, r1] = base_mul([a[0], a[1]], [b[0], b[1]], zeta);
        let [r2, r3] = base_mul([a[2], a[3]], [b[2], b[3]], -zeta);
        *r = [r0, r1, r2, r3];
    }
    r
}

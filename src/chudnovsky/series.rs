use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::One;

/// Linear coefficients of the Chudnovsky term numerator 13591409 + 545140134*a.
const TERM_OFFSET: u64 = 13_591_409;
const TERM_SLOPE: u64 = 545_140_134;

lazy_static! {
    /// 640320^3 / 24, the per-term denominator factor of the series.
    pub static ref C3_OVER_24: BigInt = BigInt::from(640_320u64).pow(3) / 24;
}

/// Computes the binary splitting aggregates P(a,b), Q(a,b) and T(a,b) of the
/// Chudnovsky series over the half-open term range [a, b), such that
///
///   pi = (Q(0,n) * 426880 * sqrt(10005)) / T(0,n)
///
/// Everything is exact BigInt arithmetic; the per-term values are
///
///   p(a) = (6a-5)(2a-1)(6a-1)        (1 for a == 0)
///   q(a) = a^3 * C3_OVER_24          (1 for a == 0)
///   t(a) = +/- p(a) * (13591409 + 545140134*a), negative for odd a
pub fn binary_split(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    debug_assert!(a < b);
    if b - a == 1 {
        let (pab, qab) = if a == 0 {
            (BigInt::one(), BigInt::one())
        } else {
            let pab = BigInt::from(6 * a - 5) * BigInt::from(2 * a - 1) * BigInt::from(6 * a - 1);
            let qab = BigInt::from(a).pow(3) * &*C3_OVER_24;
            (pab, qab)
        };
        let mut tab = &pab * BigInt::from(TERM_OFFSET + TERM_SLOPE * a);
        if a & 1 == 1 {
            tab = -tab;
        }
        (pab, qab, tab)
    } else {
        let m = a + (b - a) / 2;
        let left = binary_split(a, m);
        let right = binary_split(m, b);
        combine(left, right)
    }
}

/// Merges the aggregates of two adjacent ranges [a,m) and [m,b) into the
/// aggregates of [a,b). The cross terms are not symmetric: the right-hand Q
/// weights the left-hand T, the left-hand P weights the right-hand T.
fn combine(
    (pam, qam, tam): (BigInt, BigInt, BigInt),
    (pmb, qmb, tmb): (BigInt, BigInt, BigInt),
) -> (BigInt, BigInt, BigInt) {
    let tab = &qmb * tam + &pam * tmb;
    (pam * pmb, qam * qmb, tab)
}

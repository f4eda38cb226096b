use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::chudnovsky::series::{binary_split, C3_OVER_24};
use crate::chudnovsky::sqrt::fixed_point_sqrt;

/// Scaling factor of the closed form pi = (Q * 426880 * sqrt(10005)) / T.
const FINAL_FACTOR: u32 = 426_880;
const SQRT_ARG: u32 = 10_005;

/// Compute pi to `digits` significant digits using Chudnovsky's series with
/// binary splitting. Returns the decimal expansion as a string, "3." followed
/// by `digits` fractional digits.
///
/// The caller guarantees `digits >= 1`; the computation is deterministic and
/// has no failure modes beyond running out of memory.
pub fn compute_pi(digits: usize) -> String {
    let n = terms_for(digits);
    let (_p, q, t) = binary_split(0, n);

    let one = BigInt::from(10u64).pow(digits as u32);
    let sqrt_c = fixed_point_sqrt(&(BigInt::from(SQRT_ARG) * &one), &one);

    // int(pi * 10^digits), then an exact decimal rescale by 10^-digits.
    let pi = (q * FINAL_FACTOR * sqrt_c) / t;
    format_pi_string(&pi, digits)
}

/// Number of series terms needed for the requested digit count. Each term
/// contributes log10(C3_OVER_24/6/2/6) ~ 14.18 digits; one extra term covers
/// the truncation shortfall. Floating point is fine here, it only sizes the
/// recursion and never touches a result digit.
pub(crate) fn terms_for(digits: usize) -> u64 {
    let digits_per_term = (C3_OVER_24.to_f64().unwrap_or(f64::INFINITY) / 6.0 / 2.0 / 6.0).log10();
    (digits as f64 / digits_per_term) as u64 + 1
}

/// Renders int(pi * 10^digits) as a decimal string with the point after the
/// leading 3.
fn format_pi_string(pi: &BigInt, digits: usize) -> String {
    let mut pi_str = pi.to_str_radix(10);
    if pi_str.len() < digits + 1 {
        pi_str = format!("{:0>width$}", pi_str, width = digits + 1);
    }
    pi_str.insert(1, '.');
    pi_str.truncate(digits + 2);
    pi_str
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_1000: &str = "3.\
        14159265358979323846264338327950288419716939937510\
        58209749445923078164062862089986280348253421170679\
        82148086513282306647093844609550582231725359408128\
        48111745028410270193852110555964462294895493038196\
        44288109756659334461284756482337867831652712019091\
        45648566923460348610454326648213393607260249141273\
        72458700660631558817488152092096282925409171536436\
        78925903600113305305488204665213841469519415116094\
        33057270365759591953092186117381932611793105118548\
        07446237996274956735188575272489122793818301194912\
        98336733624406566430860213949463952247371907021798\
        60943702770539217176293176752384674818467669405132\
        00056812714526356082778577134275778960917363717872\
        14684409012249534301465495853710507922796892589235\
        42019956112129021960864034418159813629774771309960\
        51870721134999999837297804995105973173281609631859\
        50244594553469083026425223082533446850352619311881\
        71010003137838752886587533208381420617177669147303\
        59825349042875546873115956286388235378759375195778\
        18577805321712268066130019278766111959092164201989";

    #[test]
    fn test_terms_for() {
        assert_eq!(terms_for(1), 1);
        assert_eq!(terms_for(14), 1);
        assert_eq!(terms_for(15), 2);
        assert_eq!(terms_for(100), 8);
        assert_eq!(terms_for(1000), 71);
    }

    #[test]
    fn test_pi_1_digit() {
        let pi = compute_pi(1);
        assert!(pi.starts_with('3'), "Got {}", pi);
    }

    #[test]
    fn test_pi_10() {
        assert_eq!(compute_pi(10), &PI_1000[..12]);
    }

    #[test]
    fn test_pi_50() {
        assert_eq!(compute_pi(50), &PI_1000[..52]);
    }

    #[test]
    fn test_pi_100() {
        assert_eq!(compute_pi(100), &PI_1000[..102]);
    }

    #[test]
    fn test_pi_1000() {
        assert_eq!(compute_pi(1000), PI_1000);
    }

    #[test]
    fn test_monotonic_prefixes() {
        let base = compute_pi(20);
        for digits in [30usize, 45, 80] {
            let longer = compute_pi(digits);
            // All but the last requested digit must already be settled.
            assert!(longer.starts_with(&base[..20]), "digits={}", digits);
        }
    }
}

//! Floor division for signed day and year counts.
//!
//! Rust's `/` and `%` truncate toward zero. Every cycle count in the JDN
//! converter needs division that rounds toward negative infinity instead,
//! so that residues stay non-negative for proleptic (zero and negative)
//! years. All such sites go through these two helpers.

/// Divides `a` by `b`, rounding toward negative infinity.
///
/// `b` must be non-zero. `b == -1` with `a == i64::MIN` overflows, as with
/// plain division; the converter only ever divides by positive constants.
pub(crate) fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Remainder matching [`floor_div`]: the result has the sign of `b`.
///
/// Computed without forming `b * floor_div(a, b)`, so it cannot overflow
/// near `i64::MIN`.
pub(crate) fn floor_mod(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && ((r < 0) != (b < 0)) {
        r + b
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_operands_match_truncation() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(8, 2), 4);
        assert_eq!(floor_mod(7, 2), 1);
    }

    #[test]
    fn negative_dividend_rounds_down() {
        assert_eq!(floor_div(-1, 4), -1);
        assert_eq!(floor_div(-4, 4), -1);
        assert_eq!(floor_div(-5, 4), -2);
        assert_eq!(floor_div(-400, 400), -1);
        assert_eq!(floor_div(-401, 400), -2);
    }

    #[test]
    fn negative_remainder_is_lifted() {
        assert_eq!(floor_mod(-1, 4), 3);
        assert_eq!(floor_mod(-4, 4), 0);
        assert_eq!(floor_mod(-1, 400), 399);
        assert_eq!(floor_mod(-901, 900), 899);
    }

    #[test]
    fn div_and_mod_recombine() {
        for a in -2000..=2000_i64 {
            for b in [4_i64, 7, 100, 153, 400, 900, 1461] {
                let q = floor_div(a, b);
                let r = floor_mod(a, b);
                assert_eq!(q * b + r, a, "a={a}, b={b}");
                assert!((0..b).contains(&r), "a={a}, b={b}: remainder {r}");
            }
        }
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(floor_mod(i64::MIN, 146_097), i64::MIN.rem_euclid(146_097));
        assert_eq!(floor_div(i64::MIN, 146_097), i64::MIN.div_euclid(146_097));
        assert_eq!(floor_div(i64::MAX, 1461), i64::MAX / 1461);
    }
}

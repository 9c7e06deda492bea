/// Below this, the part of an amount beyond cents is treated as float noise.
const SUB_CENT_TOLERANCE: f64 = 1e-12;

/// Format an amount the way it is stored and printed in ledger records.
///
/// Amounts with at most two decimal places are always shown with exactly two
/// (e.g. 17.10). Amounts with more are shown with six decimal places and
/// trailing '0' characters trimmed (e.g. 17.234). The trimming is textual, so
/// an amount that rounds to zero beyond the decimal point keeps only the dot
/// (e.g. 100.0000001 -> "100.").
pub fn format_amount(amount: f64) -> String {
    if cents_remainder(amount).abs() >= SUB_CENT_TOLERANCE {
        format!("{:.6}", amount).trim_end_matches('0').to_string()
    } else {
        format!("{:.2}", amount)
    }
}

/// Number of digits before the decimal point (at least 1).
pub fn count_leading_digits(amount: f64) -> usize {
    let mut amount = amount;
    let mut count = 1;
    while amount >= 10.0 {
        amount /= 10.0;
        count += 1;
    }
    count
}

/// IEEE 754 remainder of `amount * 100` with respect to 1, in [-0.5, 0.5].
fn cents_remainder(amount: f64) -> f64 {
    let cents = amount * 100.0;
    cents - cents.round_ties_even()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals_when_possible() {
        assert_eq!(format_amount(17.34), "17.34");
        assert_eq!(format_amount(17.1), "17.10");
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-5.0), "-5.00");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
    }

    #[test]
    fn full_precision_for_sub_cent_values() {
        assert_eq!(format_amount(17.234), "17.234");
        assert_eq!(format_amount(0.125), "0.125");
        assert_eq!(format_amount(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn trimming_can_leave_a_bare_dot() {
        assert_eq!(format_amount(100.0000001), "100.");
        assert_eq!(format_amount(0.0000001), "0.");
    }

    #[test]
    fn leading_digits() {
        assert_eq!(count_leading_digits(0.5), 1);
        assert_eq!(count_leading_digits(9.99), 1);
        assert_eq!(count_leading_digits(10.0), 2);
        assert_eq!(count_leading_digits(17.34), 2);
        assert_eq!(count_leading_digits(1234.5), 4);
        assert_eq!(count_leading_digits(-500.0), 1);
    }
}

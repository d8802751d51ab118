//! Phone input mask.
//!
//! Transforms arbitrary raw input into the canonical display
//! `+7(XXX) XXX-XX-XX`, built up progressively as digits accumulate. The
//! frontend applies this on every change of the phone field, so the mask
//! must be a fixed point of itself: masking its own output reproduces the
//! same string.

/// Extract the significant (national) digits from raw input: strip all
/// non-digits, drop a single leading `7` or `8` country prefix, and keep
/// at most 10 digits. Extra input is silently ignored.
pub fn significant_digits(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    let rest = match digits.first() {
        Some('7' | '8') => &digits[1..],
        _ => &digits[..],
    };
    rest.iter().take(10).collect()
}

/// Render raw phone input in the canonical display format.
///
/// Grouping by significant digit count: 0 -> `+7`; 1-3 -> `+7(ddd`;
/// 4-6 -> `+7(ddd) ddd`; 7-8 -> `+7(ddd) ddd-dd`; 9-10 ->
/// `+7(ddd) ddd-dd-dd`. Groups show only the digits available so far.
pub fn format_phone(raw: &str) -> String {
    let s = significant_digits(raw);
    match s.len() {
        0 => "+7".to_string(),
        1..=3 => format!("+7({s}"),
        4..=6 => format!("+7({}) {}", &s[..3], &s[3..]),
        7..=8 => format!("+7({}) {}-{}", &s[..3], &s[3..6], &s[6..]),
        _ => format!("+7({}) {}-{}-{}", &s[..3], &s[3..6], &s[6..8], &s[8..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_renders_bare_prefix() {
        assert_eq!(format_phone(""), "+7");
        assert_eq!(format_phone("abc"), "+7");
        assert_eq!(format_phone("+7"), "+7");
    }

    #[test]
    fn leading_country_digit_is_dropped() {
        assert_eq!(format_phone("79991234567"), "+7(999) 123-45-67");
        assert_eq!(format_phone("89991234567"), "+7(999) 123-45-67");
        assert_eq!(format_phone("9991234567"), "+7(999) 123-45-67");
    }

    #[test]
    fn grouping_grows_with_input() {
        assert_eq!(format_phone("9"), "+7(9");
        assert_eq!(format_phone("999"), "+7(999");
        assert_eq!(format_phone("9991"), "+7(999) 1");
        assert_eq!(format_phone("999123"), "+7(999) 123");
        assert_eq!(format_phone("9991234"), "+7(999) 123-4");
        assert_eq!(format_phone("99912345"), "+7(999) 123-45");
        assert_eq!(format_phone("999123456"), "+7(999) 123-45-6");
        assert_eq!(format_phone("9991234567"), "+7(999) 123-45-67");
    }

    #[test]
    fn excess_digits_are_silently_ignored() {
        assert_eq!(format_phone("999123456789"), "+7(999) 123-45-67");
        assert_eq!(format_phone("7999123456789"), "+7(999) 123-45-67");
    }

    #[test]
    fn non_digit_noise_is_stripped() {
        assert_eq!(format_phone("(999) 123 45 67"), "+7(999) 123-45-67");
        assert_eq!(format_phone("9a9b9c1234567xyz"), "+7(999) 123-45-67");
    }

    #[test]
    fn masking_is_idempotent_for_all_lengths() {
        // Build digit streams of every length 0..=12 with no leading 7/8
        // and check the fixed-point property on the masked output.
        for len in 0usize..=12 {
            let raw: String = (0..len).map(|i| char::from(b'0' + ((i as u8 + 9) % 7))).collect();
            let once = format_phone(&raw);
            let twice = format_phone(&once);
            assert_eq!(once, twice, "not a fixed point for input {raw:?}");
        }
    }

    #[test]
    fn grouping_table_lengths_match() {
        // Output length for k significant digits (no leading 7/8):
        // 0 -> 2, 1-3 -> 3+k, 4-6 -> 5+k, 7-8 -> 6+k, 9-10 -> 7+k.
        for k in 0usize..=10 {
            let raw: String = std::iter::repeat('5').take(k).collect();
            let expected = match k {
                0 => 2,
                1..=3 => 3 + k,
                4..=6 => 5 + k,
                7..=8 => 6 + k,
                _ => 7 + k,
            };
            assert_eq!(format_phone(&raw).chars().count(), expected, "k = {k}");
        }
    }
}

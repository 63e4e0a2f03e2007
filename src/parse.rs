//! Lenient parsing and validation of UUID strings.

use crate::{ParseError, Uuid};

/// Hex digit counts of the five groups in the 8-4-4-4-12 layout.
const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

impl Uuid {
    /// Creates an object from a UUID string representation in any of the accepted forms.
    ///
    /// Besides the canonical 8-4-4-4-12 form, this method accepts:
    ///
    /// - uppercase and mixed-case hexadecimal digits;
    /// - each of the four hyphens independently present or absent;
    /// - a single pair of surrounding braces (`{` and `}` must appear together).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid45::Uuid;
    ///
    /// let x = Uuid::parse_relaxed("{6BA7B810-9DAD11D1-80B4-00C04FD430C8}")?;
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    /// # Ok::<(), uuid45::ParseError>(())
    /// ```
    pub fn parse_relaxed(src: &str) -> Result<Self, ParseError> {
        const ERR: ParseError = ParseError {};

        let inner = match src.strip_prefix('{') {
            Some(rest) => rest.strip_suffix('}').ok_or(ERR)?,
            None if src.ends_with('}') => return Err(ERR),
            None => src,
        };

        let mut digits = [0u8; 32];
        let mut n_digits = 0;
        let mut iter = inner.bytes().peekable();
        for (i, len) in GROUPS.into_iter().enumerate() {
            if i > 0 {
                iter.next_if_eq(&b'-');
            }
            for _ in 0..len {
                digits[n_digits] = decode_hex_digit(iter.next().ok_or(ERR)?).ok_or(ERR)?;
                n_digits += 1;
            }
        }
        if iter.next().is_some() {
            return Err(ERR);
        }

        let mut dst = [0u8; 16];
        for (e, pair) in dst.iter_mut().zip(digits.chunks_exact(2)) {
            *e = (pair[0] << 4) | pair[1];
        }
        Ok(Self::from_bytes(dst))
    }
}

const fn decode_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Tests if a string is a syntactically valid UUID representation.
///
/// A string is valid if [`Uuid::parse_relaxed()`] accepts it. Only the shape is checked; the
/// version and variant bits may hold any value.
///
/// # Examples
///
/// ```rust
/// assert!(uuid45::is_valid("1546058f-5a25-4334-85ae-e68f2a44bbaf"));
/// assert!(uuid45::is_valid("{1546058F5A25433485AEE68F2A44BBAF}"));
/// assert!(!uuid45::is_valid("12345678-1234-1234-1234-1234isnothex"));
/// ```
pub fn is_valid(src: &str) -> bool {
    Uuid::parse_relaxed(src).is_ok()
}

#[cfg(test)]
mod tests {
    use super::is_valid;
    use crate::Uuid;

    /// Accepts canonical and relaxed forms
    #[test]
    fn accepts_canonical_and_relaxed_forms() {
        let cases = [
            "1546058f-5a25-4334-85ae-e68f2a44bbaf",
            "1546058F-5A25-4334-85AE-E68F2A44BBAF",
            "1546058f-5A25-4334-85ae-E68F2A44bbaf",
            "1546058f5a25433485aee68f2a44bbaf",
            "1546058f5a25-4334-85aee68f2a44bbaf",
            "1546058f-5a254334-85ae-e68f2a44bbaf",
            "{1546058f-5a25-4334-85ae-e68f2a44bbaf}",
            "{1546058f5a25433485aee68f2a44bbaf}",
            "00000000-0000-0000-0000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
        ];

        let expected = "1546058f-5a25-4334-85ae-e68f2a44bbaf".parse::<Uuid>().unwrap();
        for e in cases {
            assert!(is_valid(e), "{}", e);
            if !e.starts_with(['0', 'f']) {
                assert_eq!(Uuid::parse_relaxed(e), Ok(expected), "{}", e);
            }
        }
    }

    /// Rejects malformed input
    #[test]
    fn rejects_malformed_input() {
        let cases = [
            "",
            "{}",
            "-",
            "12345678-1234-1234-1234-1234isnothex",
            "not-a-uuid",
            " 1546058f-5a25-4334-85ae-e68f2a44bbaf",
            "1546058f-5a25-4334-85ae-e68f2a44bbaf ",
            "1546058f-5a25-4334-85ae-e68f2a44bba",
            "1546058f-5a25-4334-85ae-e68f2a44bbaf0",
            "1546058f--5a25-4334-85ae-e68f2a44bbaf",
            "-1546058f-5a25-4334-85ae-e68f2a44bbaf",
            "1546058f-5a25-4334-85ae-e68f2a44bbaf-",
            "1546058-f5a25-4334-85ae-e68f2a44bbaf",
            "1546058f_5a25-4334-85ae-e68f2a44bbaf",
            "1546058g-5a25-4334-85ae-e68f2a44bbaf",
            "{1546058f-5a25-4334-85ae-e68f2a44bbaf",
            "1546058f-5a25-4334-85ae-e68f2a44bbaf}",
            "{{1546058f-5a25-4334-85ae-e68f2a44bbaf}}",
            "(1546058f-5a25-4334-85ae-e68f2a44bbaf)",
            "urn:uuid:1546058f-5a25-4334-85ae-e68f2a44bbaf",
            "1546058f-5a25-4334-85ae-e68f2a44bba\u{ff10}",
        ];

        for e in cases {
            assert!(!is_valid(e), "{}", e);
            assert!(Uuid::parse_relaxed(e).is_err(), "{}", e);
        }
    }

    /// Accepts any version and variant bits
    #[test]
    fn accepts_any_version_and_variant_bits() {
        for version in "0123456789abcdef".chars() {
            for variant in "0123456789abcdef".chars() {
                let text = format!("00000000-0000-{}000-{}000-000000000000", version, variant);
                assert!(is_valid(&text), "{}", text);
            }
        }
    }

    /// Agrees with strict parser on canonical strings
    #[test]
    fn agrees_with_strict_parser_on_canonical_strings() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0x45);
        for _ in 0..1_000 {
            let e = Uuid::from_fields(
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen_range(0..1 << 48),
            );
            let text = e.encode();
            assert_eq!(Uuid::parse_relaxed(&text), Ok(e));
            assert_eq!(text.parse(), Ok(e));
        }
    }
}

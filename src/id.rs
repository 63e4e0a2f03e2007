#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::ParseError;

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying big-endian byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub(crate) const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from the five RFC 4122 fields.
    ///
    /// The values are packed verbatim; it is up to the caller to set the version and variant bits.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a 48-bit integer.
    pub const fn from_fields(
        time_low: u32,
        time_mid: u16,
        time_hi_and_version: u16,
        clock_seq: u16,
        node: u64,
    ) -> Self {
        if node >= 1 << 48 {
            panic!("invalid field value");
        }

        Self([
            (time_low >> 24) as u8,
            (time_low >> 16) as u8,
            (time_low >> 8) as u8,
            time_low as u8,
            (time_mid >> 8) as u8,
            time_mid as u8,
            (time_hi_and_version >> 8) as u8,
            time_hi_and_version as u8,
            (clock_seq >> 8) as u8,
            clock_seq as u8,
            (node >> 40) as u8,
            (node >> 32) as u8,
            (node >> 24) as u8,
            (node >> 16) as u8,
            (node >> 8) as u8,
            node as u8,
        ])
    }

    /// Returns the 32-bit `time_low` field.
    pub const fn time_low(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the 16-bit `time_mid` field.
    pub const fn time_mid(&self) -> u16 {
        u16::from_be_bytes([self.0[4], self.0[5]])
    }

    /// Returns the 16-bit `time_hi_and_version` field, version nibble included.
    pub const fn time_hi_and_version(&self) -> u16 {
        u16::from_be_bytes([self.0[6], self.0[7]])
    }

    /// Returns `clock_seq_hi_and_reserved` and `clock_seq_low` as one 16-bit value, variant bits
    /// included.
    pub const fn clock_seq(&self) -> u16 {
        u16::from_be_bytes([self.0[8], self.0[9]])
    }

    /// Returns the 48-bit `node` field.
    pub const fn node(&self) -> u64 {
        let b = &self.0;
        (b[10] as u64) << 40
            | (b[11] as u64) << 32
            | (b[12] as u64) << 24
            | (b[13] as u64) << 16
            | (b[14] as u64) << 8
            | b[15] as u64
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0..=7 => Variant::Var0,
            8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `0b10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// [`FStr`] that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid45::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid45::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in self.0.iter().enumerate() {
            let e = *e as usize;
            if let (Some(hi), Some(lo)) = (buf_iter.next(), buf_iter.next()) {
                *hi = DIGITS[e >> 4];
                *lo = DIGITS[e & 15];
            }
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if let Some(hyphen) = buf_iter.next() {
                    *hyphen = b'-';
                }
            }
        }
        match FStr::from_inner(buffer) {
            Ok(encoded) => encoded,
            Err(_) => unreachable!("hex digits and hyphens are ASCII"),
        }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Only the canonical layout is accepted here, in either letter case. Use
    /// [`Uuid::parse_relaxed()`] to also accept braces and missing hyphens.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// The reserved variants of UUIDs.
///
/// Every UUID produced by this crate has the variant [`Variant::Var10`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// The variant `0b0xxx` reserved for NCS backward compatibility.
    Var0,

    /// The variant `0b10xx` described by RFC 4122.
    Var10,

    /// The variant `0b110x` reserved for Microsoft backward compatibility.
    Var110,

    /// The variant `0b111x` reserved for future definition.
    VarReserved,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.encode())
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID string representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_relaxed(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

        /// Serializes to and deserializes from canonical string
        #[test]
        fn serializes_to_and_deserializes_from_canonical_string() {
            let cases = [
                "00000000-0000-0000-0000-000000000000",
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "1546058f-5a25-4334-85ae-e68f2a44bbaf",
                "2ed6657d-e927-568b-95e1-2665a8aea6a2",
            ];

            for text in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e, &[Token::Str(text)]);
            }
        }

        /// Deserializes relaxed forms
        #[test]
        fn deserializes_relaxed_forms() {
            let e = Uuid::NAMESPACE_DNS;
            assert_de_tokens(&e, &[Token::Str("{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}")]);
            assert_de_tokens(&e, &[Token::Str("6ba7b8109dad11d180b400c04fd430c8")]);
            assert_de_tokens_error::<Uuid>(
                &[Token::Str("not-a-uuid")],
                "invalid string representation",
            );
        }
    }
}

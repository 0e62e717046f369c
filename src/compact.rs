//! Order-preserving compact textual representation.
//!
//! The compact form encodes the 16 bytes of a UUID as 22 characters of unpadded base64 using
//! [`COMPACT_ALPHABET`], which lists the URL-safe base64 characters in ASCII order. Because the
//! encoding is a fixed-length big-endian base conversion over an ascending alphabet, comparing two
//! compact strings lexicographically gives the same result as comparing the raw bytes.
//!
//! ```rust
//! use uuidv6::{CompactUuid, Uuid};
//!
//! let x = "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616".parse::<Uuid>()?;
//! assert_eq!(x.encode_compact(), "6g042_dZQ91-z9jLdRqq4V");
//! assert_eq!(Uuid::parse_compact("6g042_dZQ91-z9jLdRqq4V")?, x);
//!
//! let y: CompactUuid = "6g042_dZQ91-z9jLdRqq4V".parse()?;
//! assert_eq!(y.to_string(), "6g042_dZQ91-z9jLdRqq4V");
//! assert_eq!(Uuid::from(y), x);
//! # Ok::<(), uuidv6::Error>(())
//! ```

use std::{fmt, ops, str};

use base64::alphabet::Alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{Error, TextForm};
use crate::Uuid;

/// The 64 characters of the compact form in ascending digit-value (and ASCII) order.
pub const COMPACT_ALPHABET: &str =
    "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Length of the compact form of any UUID.
pub const COMPACT_LEN: usize = 22;

const ALPHABET: Alphabet = match Alphabet::new(COMPACT_ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid compact alphabet"),
};

const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &ALPHABET,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

impl Uuid {
    /// Returns the 22-character order-preserving compact string representation.
    pub fn encode_compact(&self) -> String {
        ENGINE.encode(self.as_bytes())
    }

    /// Creates an object from the 22-character compact string representation.
    ///
    /// Fails if the text has a different length, contains a character outside
    /// [`COMPACT_ALPHABET`], or carries non-zero bits past the 128th.
    pub fn parse_compact(src: &str) -> Result<Self, Error> {
        const ERR: Error = Error::Format(TextForm::Compact);
        if src.len() != COMPACT_LEN {
            return Err(ERR);
        }
        let bytes = ENGINE.decode(src).map_err(|_| ERR)?;
        Self::from_slice(&bytes).map_err(|_| ERR)
    }
}

/// A [`Uuid`] that uses the compact form as its textual and storage representation.
///
/// Useful for fields whose string form is meant to be sorted, stored, or transmitted in place of
/// the raw bytes: `CompactUuid` values render, parse, and (with the `serde` and `rusqlite`
/// features) serialize through [`Uuid::encode_compact`] and [`Uuid::parse_compact`]. Ordering is
/// by raw bytes and so agrees with the string ordering.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct CompactUuid(pub Uuid);

impl ops::Deref for CompactUuid {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for CompactUuid {
    /// Returns the 22-character compact string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.encode_compact())
    }
}

impl str::FromStr for CompactUuid {
    type Err = Error;

    /// Creates an object from the 22-character compact string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Uuid::parse_compact(src).map(Self)
    }
}

impl From<Uuid> for CompactUuid {
    fn from(src: Uuid) -> Self {
        Self(src)
    }
}

impl From<CompactUuid> for Uuid {
    fn from(src: CompactUuid) -> Self {
        src.0
    }
}

impl From<CompactUuid> for String {
    fn from(src: CompactUuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for CompactUuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, CompactUuid, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for CompactUuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.0.encode_compact())
            } else {
                serializer.serialize_bytes(self.0.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for CompactUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = CompactUuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a compact UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value)
                .map(CompactUuid)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{CompactUuid, COMPACT_ALPHABET, COMPACT_LEN};
    use crate::error::{Error, TextForm};
    use crate::Uuid;

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        let cases = [
            ("00000000-0000-0000-0000-000000000000", "----------------------"),
            ("ffffffff-ffff-ffff-ffff-ffffffffffff", "zzzzzzzzzzzzzzzzzzzzzk"),
            ("1ec0450e-5a64-6ca0-80fc-abd6a5cdb616", "6g042_dZQ91-z9jLdRqq4V"),
            ("00000000-0000-0000-0000-000000000001", "---------------------F"),
        ];

        for (canonical, compact) in cases {
            let e: Uuid = canonical.parse().unwrap();
            assert_eq!(e.encode_compact(), compact);
            assert_eq!(Uuid::parse_compact(compact), Ok(e));
            assert_eq!(CompactUuid(e).to_string(), compact);
            assert_eq!(compact.parse::<CompactUuid>(), Ok(CompactUuid(e)));
        }
    }

    /// Uses alphabet in ascending ASCII order
    #[test]
    fn uses_alphabet_in_ascending_ascii_order() {
        let bytes = COMPACT_ALPHABET.as_bytes();
        assert_eq!(bytes.len(), 64);
        assert!(bytes.windows(2).all(|w| w[0] < w[1]));
    }

    /// Returns error to invalid compact representation
    #[test]
    fn returns_error_to_invalid_compact_representation() {
        let cases = [
            "",
            "6g042_dZQ91-z9jLdRqq4",
            "6g042_dZQ91-z9jLdRqq4VV",
            "6g042_dZQ91-z9jLdRqq4V==",
            "6g042_dZQ91-z9jLdRqq4=",
            "6g042_dZQ91+z9jLdRqq4V",
            "6g042_dZQ91-z9j/dRqq4V",
            " 6g042_dZQ91-z9jLdRqq4",
            // non-zero bits past the 128th
            "6g042_dZQ91-z9jLdRqq4W",
            "zzzzzzzzzzzzzzzzzzzzzz",
        ];

        for e in cases {
            assert_eq!(
                Uuid::parse_compact(e),
                Err(Error::Format(TextForm::Compact)),
                "{:?}",
                e
            );
        }
    }

    /// Preserves byte order in string order
    #[test]
    fn preserves_byte_order_in_string_order() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut ids: Vec<Uuid> = (0..1_000).map(|_| Uuid::from(rng.gen::<u128>())).collect();
        // neighbors that differ only in the last bits
        ids.extend((0..16u128).map(|i| Uuid::from(0x1ec0_450e_5a64_6ca0_80fc_abd6_a5cd_b600 + i)));

        let mut by_bytes = ids.clone();
        by_bytes.sort();

        let mut by_text: Vec<(String, Uuid)> =
            ids.iter().map(|e| (e.encode_compact(), *e)).collect();
        by_text.sort();

        assert!(by_text.iter().all(|(text, _)| text.len() == COMPACT_LEN));
        assert!(by_text.iter().map(|(_, e)| *e).eq(by_bytes.into_iter()));
    }
}

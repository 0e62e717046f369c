use std::{cmp, fmt, ops, str, time::SystemTime};

use crate::error::{Error, TextForm};
use crate::timestamp;

/// Represents a Universally Unique IDentifier.
///
/// The derived [`Ord`] compares all 16 bytes lexicographically, which for UUIDv6 values follows
/// the order of `timestamp`, then `clock_seq`, then `node`. See [`Uuid::cmp_time_word`] for the
/// alternate ordering that looks at the first 64 bits only.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID byte array from UUIDv6 field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument exceeds the width of its field: 60 bits for `timestamp`, 14 bits
    /// for `clock_seq`, and 48 bits for `node`.
    pub const fn from_fields_v6(timestamp: u64, clock_seq: u16, node: u64) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 || node >= 1 << 48 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 52) as u8,
            (timestamp >> 44) as u8,
            (timestamp >> 36) as u8,
            (timestamp >> 28) as u8,
            (timestamp >> 20) as u8,
            (timestamp >> 12) as u8,
            0x60 | (timestamp >> 8) as u8 & 0x0f,
            timestamp as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            (node >> 40) as u8,
            (node >> 32) as u8,
            (node >> 24) as u8,
            (node >> 16) as u8,
            (node >> 8) as u8,
            node as u8,
        ])
    }

    /// Creates an object from a byte slice, which must be exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv6::{Error, Uuid};
    ///
    /// let x = Uuid::from_slice(&[0x1e; 16])?;
    /// assert_eq!(x.to_string(), "1e1e1e1e-1e1e-1e1e-1e1e-1e1e1e1e1e1e");
    /// assert_eq!(Uuid::from_slice(&[0x1e; 15]), Err(Error::Length(15)));
    /// # Ok::<(), uuidv6::Error>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::Length(src.len()))
    }

    /// Returns the upper 64 bits, which hold the `timestamp` and `ver` fields.
    pub fn high_bytes(&self) -> [u8; 8] {
        let mut dst = [0u8; 8];
        dst.copy_from_slice(&self.0[..8]);
        dst
    }

    /// Returns the lower 64 bits, which hold the `var`, `clock_seq`, and `node` fields.
    pub fn low_bytes(&self) -> [u8; 8] {
        let mut dst = [0u8; 8];
        dst.copy_from_slice(&self.0[8..]);
        dst
    }

    /// Returns true if all bytes are zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    pub fn variant(&self) -> Variant {
        if self.is_nil() {
            Variant::VarNil
        } else if *self == Self::MAX {
            Variant::VarMax
        } else {
            match self.0[8] >> 4 {
                0..=7 => Variant::Var0,
                8..=0xb => Variant::Var10,
                0xc..=0xd => Variant::Var110,
                _ => Variant::VarReserved,
            }
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns true if the version and variant fields identify a UUIDv6.
    pub const fn is_v6(&self) -> bool {
        self.0[6] & 0xf0 == 0x60 && self.0[8] & 0xc0 == 0x80
    }

    /// Returns the raw 60-bit `timestamp` field, counting 100-nanosecond ticks since
    /// 1582-10-15, without checking the version and variant fields.
    pub const fn timestamp(&self) -> u64 {
        let hi = u64::from_be_bytes([
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7],
        ]);
        ((hi >> 4) & 0x0fff_ffff_ffff_f000) | (hi & 0x0fff)
    }

    /// Returns the 14-bit `clock_seq` field.
    pub const fn clock_seq(&self) -> u16 {
        u16::from_be_bytes([self.0[8], self.0[9]]) & 0x3fff
    }

    /// Returns the 48-bit `node` field.
    pub const fn node(&self) -> u64 {
        u64::from_be_bytes([
            0, 0, self.0[10], self.0[11], self.0[12], self.0[13], self.0[14], self.0[15],
        ])
    }

    /// Returns the creation time embedded in a UUIDv6.
    ///
    /// Returns [`UNIX_EPOCH`](std::time::UNIX_EPOCH) as a sentinel if the UUID is not a UUIDv6 or
    /// the embedded time cannot be represented on this platform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::{Duration, UNIX_EPOCH};
    /// use uuidv6::Uuid;
    ///
    /// let x = "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616".parse::<Uuid>()?;
    /// assert_eq!(x.time(), UNIX_EPOCH + Duration::from_nanos(1_629_750_603_841_859_200));
    /// assert_eq!(Uuid::NIL.time(), UNIX_EPOCH);
    /// # Ok::<(), uuidv6::Error>(())
    /// ```
    pub fn time(&self) -> SystemTime {
        if !self.is_v6() {
            return SystemTime::UNIX_EPOCH;
        }
        timestamp::to_system_time(self.timestamp()).unwrap_or(SystemTime::UNIX_EPOCH)
    }

    /// Compares two UUIDs by their upper 64 bits only, which hold the `timestamp` field.
    ///
    /// This is the ordering used by earlier UUIDv6 libraries for sorting. Two UUIDs generated in
    /// the same tick compare as equal under this ordering, whereas the [`Ord`] implementation
    /// breaks the tie by `clock_seq` and `node`. Keep using [`Ord`] unless compatibility with such
    /// a consumer is required.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use uuidv6::Uuid;
    ///
    /// let x = Uuid::from_fields_v6(0x1ec_0450_e5a6_4ca0, 1, 1);
    /// let y = Uuid::from_fields_v6(0x1ec_0450_e5a6_4ca0, 2, 0);
    /// assert_eq!(x.cmp_time_word(&y), Ordering::Equal);
    /// assert_eq!(x.cmp(&y), Ordering::Less);
    /// ```
    pub fn cmp_time_word(&self, other: &Self) -> cmp::Ordering {
        self.0[..8].cmp(&other.0[..8])
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12 canonical hexadecimal string
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv6::Uuid;
    ///
    /// let x = "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616");
    /// assert_eq!(format!("{}", y), "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616");
    /// # Ok::<(), uuidv6::Error>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hexadecimal digits are accepted in both cases.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: Error = Error::Format(TextForm::Canonical);
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ERR);
        }

        let mut dst = [0u8; 16];
        let mut iter = src.iter();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = hex_value(*iter.next().ok_or(ERR)?).ok_or(ERR)?;
            let lo = hex_value(*iter.next().ok_or(ERR)?).ok_or(ERR)?;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next() != Some(&b'-') {
                return Err(ERR);
            }
        }
        Ok(Self(dst))
    }
}

/// Returns the value of an ASCII hexadecimal digit.
const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Variant field values of UUIDs, with the Nil and Max UUIDs reported separately.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Variant {
    /// The Nil UUID (00000000-0000-0000-0000-000000000000).
    VarNil,

    /// The variant field value `0`, reserved for NCS backward compatibility.
    Var0,

    /// The variant field value `10`, used by RFC 4122 UUIDs including UUIDv6.
    Var10,

    /// The variant field value `110`, reserved for Microsoft backward compatibility.
    Var110,

    /// The variant field value `111`, reserved for future definition.
    VarReserved,

    /// The Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff).
    VarMax,
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
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
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
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};
    use crate::Error;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;
        const MAX_UINT48: u64 = (1 << 48) - 1;

        &[
            ((0, 0, 0), "00000000-0000-6000-8000-000000000000"),
            ((MAX_UINT60, 0, 0), "ffffffff-ffff-6fff-8000-000000000000"),
            ((0, MAX_UINT14, 0), "00000000-0000-6000-bfff-000000000000"),
            ((0, 0, MAX_UINT48), "00000000-0000-6000-8000-ffffffffffff"),
            (
                (MAX_UINT60, MAX_UINT14, MAX_UINT48),
                "ffffffff-ffff-6fff-bfff-ffffffffffff",
            ),
            (
                (0x1ec_0450_e5a6_4ca0, 0x00fc, 0xabd6_a5cd_b616),
                "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v6(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(from_fields.timestamp(), fs.0);
            assert_eq!(from_fields.clock_seq(), fs.1);
            assert_eq!(from_fields.node(), fs.2);
            assert!(from_fields.is_v6());
            assert_eq!(from_fields.version(), Some(6));
            assert_eq!(from_fields.variant(), Variant::Var10);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Panics on out-of-range field values
    #[test]
    #[should_panic(expected = "invalid field value")]
    fn panics_on_out_of_range_field_values() {
        Uuid::from_fields_v6(0, 1 << 14, 0);
    }

    /// Re-renders parsed strings identically
    #[test]
    fn re_renders_parsed_strings_identically() {
        for text in [
            "f81d4fae-7dec-11d0-a765-00a0c91e6bf6",
            "1e65c43f-c7c4-47fb-28fc-c8bcc8a0b1fd",
            "00000000-0000-0000-0000-000000000000",
        ] {
            assert_eq!(text.parse::<Uuid>().unwrap().to_string(), text);
        }
    }

    /// Extracts node from parsed string
    #[test]
    fn extracts_node_from_parsed_string() {
        let x: Uuid = "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616".parse().unwrap();
        assert_eq!(x.node(), 188_938_393_073_174);
        assert_eq!(x.clock_seq(), 0x00fc);
        assert_eq!(x.timestamp(), 138_490_434_038_418_592);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 1ec0450e-5a64-6ca0-80fc-abd6a5cdb616",
            "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616 ",
            " 1ec0450e-5a64-6ca0-80fc-abd6a5cdb616 ",
            "+1ec0450e-5a64-6ca0-80fc-abd6a5cdb616",
            "-1ec0450e-5a64-6ca0-80fc-abd6a5cdb616",
            "+ec0450e-5a64-6ca0-80fc-abd6a5cdb616",
            "-ec0450e-5a64-6ca0-80fc-abd6a5cdb616",
            "1ec0450e5a646ca080fcabd6a5cdb616",
            "1ec0450e-5a646ca0-80fc-abd6a5cdb616",
            "{1ec0450e-5a64-6ca0-80fc-abd6a5cdb616}",
            "1ec0450e-5a64-6c 0-80fc-abd6a5cdb616",
            "1ec0450g-5a64-6ca0-80fc-abd6a5cdb616",
            "1ec0450e-5a64-6ca0-80fc_abd6a5cdb616",
            "1ec0450e-5a64-6ca0-80fc-abd6a5cdb61",
            "1ec0450e-5a64-6ca0-80fc-abd6a5cdb6161",
            "1ec0450-e5a64-6ca0-80fc-abd6a5cdb616",
            "1ec0450e-5a64-6ca0-80fc-abd6a5cdb6１",
        ];

        for e in cases {
            assert_eq!(
                e.parse::<Uuid>(),
                Err(Error::Format(crate::error::TextForm::Canonical)),
                "{:?}",
                e
            );
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::MAX.is_nil());
        assert_eq!(Uuid::NIL.variant(), Variant::VarNil);
        assert_eq!(Uuid::MAX.variant(), Variant::VarMax);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Returns epoch time for non-v6 UUIDs
    #[test]
    fn returns_epoch_time_for_non_v6_uuids() {
        use std::time::UNIX_EPOCH;
        for text in [
            "00000000-0000-0000-0000-000000000000",
            "f81d4fae-7dec-11d0-a765-00a0c91e6bf6",
            "1e65c43f-c7c4-47fb-28fc-c8bcc8a0b1fd",
            "1ec0450e-5a64-6ca0-c0fc-abd6a5cdb616",
        ] {
            assert_eq!(text.parse::<Uuid>().unwrap().time(), UNIX_EPOCH);
        }
    }

    /// Extracts time from v6 UUIDs
    #[test]
    fn extracts_time_from_v6_uuids() {
        use std::time::{Duration, UNIX_EPOCH};
        let x: Uuid = "1E65DA3A-36E8-617E-9FCC-C8BCC8A0B17D".parse().unwrap();
        let since_unix = x.time().duration_since(UNIX_EPOCH).unwrap();
        // 2016-08-08
        assert!(since_unix > Duration::from_secs(1_470_614_400));
        assert!(since_unix < Duration::from_secs(1_470_700_800));
    }

    /// Orders by full value or by time word
    #[test]
    fn orders_by_full_value_or_by_time_word() {
        use std::cmp::Ordering;
        let ts = 0x1ec_0450_e5a6_4ca0;
        let a = Uuid::from_fields_v6(ts, 5, 0xffff);
        let b = Uuid::from_fields_v6(ts, 6, 0x0000);
        let c = Uuid::from_fields_v6(ts + 1, 0, 0);

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp_time_word(&b), Ordering::Equal);
        assert_eq!(b.cmp(&c), Ordering::Less);
        assert_eq!(b.cmp_time_word(&c), Ordering::Less);
        assert_eq!(c.cmp_time_word(&a), Ordering::Greater);

        let mut v = vec![c, b, a];
        v.sort();
        assert_eq!(v, [a, b, c]);

        // stable sort keeps ties in input order under the time word ordering
        let mut v = vec![c, b, a];
        v.sort_by(Uuid::cmp_time_word);
        assert_eq!(v, [b, a, c]);
    }

    /// Splits into high and low bytes
    #[test]
    fn splits_into_high_and_low_bytes() {
        let x: Uuid = "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616".parse().unwrap();
        assert_eq!(x.high_bytes(), [0x1e, 0xc0, 0x45, 0x0e, 0x5a, 0x64, 0x6c, 0xa0]);
        assert_eq!(x.low_bytes(), [0x80, 0xfc, 0xab, 0xd6, 0xa5, 0xcd, 0xb6, 0x16]);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v6(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_slice(e.as_bytes()), Ok(e));
            assert_eq!(Uuid::try_from(&e.as_bytes()[..]), Ok(e));
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(&e.to_string() as &str), Ok(e));
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Rejects byte slices of wrong length
    #[test]
    fn rejects_byte_slices_of_wrong_length() {
        assert_eq!(Uuid::from_slice(&[]), Err(Error::Length(0)));
        assert_eq!(Uuid::from_slice(&[0u8; 15]), Err(Error::Length(15)));
        assert_eq!(Uuid::from_slice(&[0u8; 17]), Err(Error::Length(17)));
    }
}

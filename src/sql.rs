//! Conversions between identifiers and relational storage values.

use std::borrow::Cow;

use crate::{CompactUuid, Error, Uuid};

/// A storage value as handed over by or to a relational database driver.
///
/// [`Uuid`] is stored as a 16-byte `Blob` and read back from either a `Blob` or a `Text` holding
/// the canonical form. [`CompactUuid`] is stored as `Text` holding the compact form and read back
/// from `Text` or from a `Blob` containing the same characters.
#[derive(Clone, PartialEq, Debug)]
pub enum SqlValue<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(Cow<'a, str>),
    Blob(&'a [u8]),
}

impl SqlValue<'_> {
    /// Returns the name of the value kind for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
        }
    }
}

impl Uuid {
    /// Returns the storage value of this UUID: the raw 16 bytes.
    pub fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Blob(self.as_bytes())
    }

    /// Creates an object from a storage value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `Text` is not a canonical string, [`Error::Length`] if `Blob`
    /// is not exactly 16 bytes long, and [`Error::UnsupportedSource`] for any other value kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv6::{SqlValue, Uuid};
    ///
    /// let text = SqlValue::Text("1ec0450e-5a64-6ca0-80fc-abd6a5cdb616".into());
    /// let x = Uuid::from_sql_value(text)?;
    /// assert_eq!(Uuid::from_sql_value(x.to_sql_value())?, x);
    /// # Ok::<(), uuidv6::Error>(())
    /// ```
    pub fn from_sql_value(src: SqlValue<'_>) -> Result<Self, Error> {
        match src {
            SqlValue::Text(text) => text.parse(),
            SqlValue::Blob(bytes) => Self::from_slice(bytes),
            other => Err(Error::UnsupportedSource(other.kind())),
        }
    }
}

impl CompactUuid {
    /// Returns the storage value of this UUID: the compact string.
    pub fn to_sql_value(&self) -> SqlValue<'static> {
        SqlValue::Text(Cow::Owned(self.0.encode_compact()))
    }

    /// Creates an object from a storage value holding the compact string as `Text` or as the
    /// UTF-8 bytes of a `Blob`.
    pub fn from_sql_value(src: SqlValue<'_>) -> Result<Self, Error> {
        match src {
            SqlValue::Text(text) => text.parse(),
            SqlValue::Blob(bytes) => std::str::from_utf8(bytes)
                .map_err(|_| Error::Format(crate::TextForm::Compact))?
                .parse(),
            other => Err(Error::UnsupportedSource(other.kind())),
        }
    }
}

#[cfg(feature = "rusqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "rusqlite")))]
mod rusqlite_support {
    use super::{CompactUuid, Error, SqlValue, Uuid};
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    impl<'a> TryFrom<ValueRef<'a>> for SqlValue<'a> {
        type Error = FromSqlError;

        fn try_from(src: ValueRef<'a>) -> Result<Self, Self::Error> {
            Ok(match src {
                ValueRef::Null => Self::Null,
                ValueRef::Integer(n) => Self::Integer(n),
                ValueRef::Real(n) => Self::Real(n),
                ValueRef::Text(text) => Self::Text(
                    std::str::from_utf8(text)
                        .map_err(|err| FromSqlError::Other(Box::new(err)))?
                        .into(),
                ),
                ValueRef::Blob(bytes) => Self::Blob(bytes),
            })
        }
    }

    fn into_from_sql_error(err: Error) -> FromSqlError {
        match err {
            Error::Length(blob_size) => FromSqlError::InvalidBlobSize {
                expected_size: 16,
                blob_size,
            },
            Error::UnsupportedSource(_) => FromSqlError::InvalidType,
            err => FromSqlError::Other(Box::new(err)),
        }
    }

    impl ToSql for Uuid {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(ToSqlOutput::Borrowed(ValueRef::Blob(self.as_bytes())))
        }
    }

    impl FromSql for Uuid {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            Self::from_sql_value(value.try_into()?).map_err(into_from_sql_error)
        }
    }

    impl ToSql for CompactUuid {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(ToSqlOutput::from(self.0.encode_compact()))
        }
    }

    impl FromSql for CompactUuid {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            Self::from_sql_value(value.try_into()?).map_err(into_from_sql_error)
        }
    }

}

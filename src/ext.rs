//! Binary extension encoding for tag-length-payload serialization formats.
//!
//! Formats with application-defined extension types (e.g., MessagePack) carry a [`Uuid`] as an
//! extension of type [`EXTENSION_TYPE`] whose payload is the [`EXTENSION_LEN`] raw bytes.
//!
//! ```rust
//! use uuidv6::{Uuid, EXTENSION_LEN, EXTENSION_TYPE};
//!
//! let x = "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616".parse::<Uuid>()?;
//! let mut payload = [0u8; EXTENSION_LEN];
//! let n = x.write_extension(&mut payload)?;
//! assert_eq!(Uuid::from_extension(EXTENSION_TYPE, &payload[..n])?, x);
//! # Ok::<(), uuidv6::Error>(())
//! ```

use crate::{Error, Uuid};

/// Extension type tag assigned to UUIDs.
pub const EXTENSION_TYPE: i8 = 99;

/// Payload length of the UUID extension.
pub const EXTENSION_LEN: usize = 16;

impl Uuid {
    /// Writes the extension payload to the beginning of `buf` and returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Length`] carrying the buffer length if `buf` is shorter than
    /// [`EXTENSION_LEN`].
    pub fn write_extension(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let len = buf.len();
        let dst = buf.get_mut(..EXTENSION_LEN).ok_or(Error::Length(len))?;
        dst.copy_from_slice(self.as_bytes());
        Ok(EXTENSION_LEN)
    }

    /// Creates an object from an extension type tag and payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSource`] if `tag` is not [`EXTENSION_TYPE`] and
    /// [`Error::Length`] if `payload` is not exactly [`EXTENSION_LEN`] bytes long.
    pub fn from_extension(tag: i8, payload: &[u8]) -> Result<Self, Error> {
        if tag != EXTENSION_TYPE {
            return Err(Error::UnsupportedSource("extension type"));
        }
        Self::from_slice(payload)
    }
}

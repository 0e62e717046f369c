//! UUID Version 6: time-ordered identifiers with byte-order-preserving text encodings
//!
//! ```rust
//! use uuidv6::uuid6;
//!
//! let uuid = uuid6();
//! println!("{}", uuid); // e.g., "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! println!("{}", uuid.encode_compact()); // e.g., "6g042_dZQ91-z9jLdRqq4V"
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp, split into `time_high`, `time_mid`, and `time_low` from the most
//!   significant bits down, counts 100-nanosecond intervals since 1582-10-15 00:00:00 UTC.
//! - The 4-bit `ver` field is set at `0110`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field starts at a random value and is incremented whenever a new
//!   timestamp does not exceed the previous one, so that identifiers generated within the same
//!   tick still sort in generation order.
//! - The 48-bit `node` field holds the hardware address of a network interface or, if none is
//!   found or if so configured, a random value with the multicast bit set.
//!
//! Because every field is laid out big-endian from the most significant end of the timestamp,
//! the raw bytes, the canonical string, and the [compact string](CompactUuid) all sort in the
//! order identifiers were generated.
//!
//! When the system clock moves back by ten seconds or less, this library keeps using the
//! previous timestamp so that the order is preserved; if the clock moves back further, it adopts
//! the new timestamp and relies on the incremented `clock_seq` alone to avoid duplicates.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generator behind [`uuid6()`] and the other
//!   free functions.
//!
//! Optional features:
//!
//! - `serde`: enables serialization/deserialization of [`Uuid`] and [`CompactUuid`].
//! - `uuid`: enables conversion from/to the `uuid::Uuid` type.
//! - `rusqlite`: enables storing [`Uuid`] and [`CompactUuid`] in SQLite columns.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant};

mod error;
pub use error::{Error, TextForm};

pub mod node;
pub mod timestamp;

mod compact;
pub use compact::{CompactUuid, COMPACT_ALPHABET, COMPACT_LEN};

mod generator;
pub use generator::V6Generator;

mod sql;
pub use sql::SqlValue;

mod ext;
pub use ext::{EXTENSION_LEN, EXTENSION_TYPE};

#[cfg(feature = "global_gen")]
mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{
    always_randomize_node, default_generator, is_always_randomizing_node, node, randomize_node_once,
    set_node, uuid6, uuid6_compact, uuid6_from_time, GlobalGenRng,
};

//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{sync, time::SystemTime};

use crate::{CompactUuid, Uuid, V6Generator};
pub use inner::GlobalGenRng;

/// Returns the process-wide default generator, creating one if none exists.
///
/// The generator is initialized on first use: the hardware address lookup for the node and the
/// seeding of the random number generator happen then, not at program start. Applications that
/// prefer to own their generator can construct a [`V6Generator`] instead and pass it around.
pub fn default_generator() -> &'static V6Generator<GlobalGenRng> {
    static G: sync::OnceLock<V6Generator<GlobalGenRng>> = sync::OnceLock::new();
    G.get_or_init(|| V6Generator::with_rng(GlobalGenRng::new()))
}

/// Generates a UUIDv6 object.
///
/// This function employs a global generator and guarantees the process-wide monotonic order of
/// UUIDs generated within the same 100-nanosecond tick.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidv6::uuid6();
/// println!("{}", uuid); // e.g., "1ec0450e-5a64-6ca0-80fc-abd6a5cdb616"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuidv6::uuid6().to_string();
/// ```
pub fn uuid6() -> Uuid {
    default_generator().generate()
}

/// Generates a UUIDv6 object from a given instant using the global generator.
///
/// The instant goes through the same monotonic bookkeeping as [`uuid6`], so an instant far in the
/// future moves the generator's clock forward for subsequent calls.
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, SystemTime};
///
/// let t = SystemTime::now() + Duration::from_secs(60);
/// let uuid = uuidv6::uuid6_from_time(t);
/// assert_eq!(
///     uuid.timestamp(),
///     uuidv6::timestamp::from_system_time(t),
/// );
/// ```
pub fn uuid6_from_time(time: SystemTime) -> Uuid {
    default_generator().generate_from_time(time)
}

/// Generates a UUIDv6 object that renders in the order-preserving compact form.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidv6::uuid6_compact();
/// println!("{}", uuid); // e.g., "6g042_dZQ91-z9jLdRqq4V"
/// ```
pub fn uuid6_compact() -> CompactUuid {
    CompactUuid(uuid6())
}

/// Returns the node value stored in the global generator.
pub fn node() -> u64 {
    default_generator().node()
}

/// Sets the node value of the global generator and turns off per-UUID node randomization.
pub fn set_node(node: u64) {
    default_generator().set_node(node)
}

/// Replaces the node value of the global generator with a random one.
pub fn randomize_node_once() {
    default_generator().randomize_node_once()
}

/// Makes the global generator draw a fresh random node value for every UUID.
pub fn always_randomize_node() {
    default_generator().always_randomize_node()
}

/// Returns true if the global generator draws a fresh random node value for every UUID.
pub fn is_always_randomizing_node() -> bool {
    default_generator().is_always_randomizing_node()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha12Core;

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by `rand::rngs::ThreadRng`.
    #[derive(Clone, Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        pub(crate) fn new() -> Self {
            let core = ChaCha12Core::from_rng(OsRng).unwrap_or_else(|err| {
                tracing::warn!(%err, "random source failed; seeding global generator with zeros");
                ChaCha12Core::from_seed(Default::default())
            });
            Self(ReseedingRng::new(core, 1024 * 64, OsRng))
        }
    }

    impl RngCore for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            self.0.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.0.try_fill_bytes(dest)
        }
    }
}

//! UUIDv6 generator and related types.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use rand::{rngs::OsRng, RngCore};

use crate::{node, timestamp, Uuid};

/// Largest value of the 14-bit `clock_seq` field.
const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// Amount of timestamp rollback, in 100-nanosecond ticks (ten seconds), that the generator
/// absorbs by reusing the previous timestamp.
const ROLLBACK_ALLOWANCE: u64 = 100_000_000;

/// Represents a UUIDv6 generator that encapsulates a clock sequence counter and a node value and
/// guarantees the monotonic order of UUIDs generated within the same 100-nanosecond tick.
///
/// All methods take `&self`, so a single generator can be shared across threads (e.g., in an
/// `Arc` or a `static`) and hands out UUIDs in the order its internal lock serializes the calls.
/// The lock guards the `timestamp` and `clock_seq` state only; per-call node randomization draws
/// from the random number generator under a separate lock.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuidv6::V6Generator;
///
/// let g = sync::Arc::new(V6Generator::new());
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Clock sequence
///
/// The 14-bit `clock_seq` is seeded randomly and incremented whenever a request carries a
/// timestamp equal to or smaller than the previous one. In that case the generator goes on with
/// the previous timestamp, and if the increment wraps `clock_seq` around, advances the timestamp
/// by one tick, so that every UUID is greater than the preceding one. When the clock moves back
/// by more than ten seconds, the generator adopts the new timestamp (still incrementing
/// `clock_seq`) and thus breaks the increasing order.
///
/// # Node
///
/// The 48-bit `node` is taken from a hardware address of the host if one can be read, or drawn
/// randomly otherwise. See [`set_node`](V6Generator::set_node),
/// [`randomize_node_once`](V6Generator::randomize_node_once), and
/// [`always_randomize_node`](V6Generator::always_randomize_node) to change it.
#[derive(Debug)]
pub struct V6Generator<R> {
    clock: Mutex<ClockState>,
    node: AtomicU64,
    always_randomize_node: AtomicBool,

    /// The random number generator used for `clock_seq` seeding and node draws.
    rng: Mutex<R>,
}

#[derive(Debug)]
struct ClockState {
    timestamp: u64,
    clock_seq: u16,
}

impl V6Generator<OsRng> {
    /// Creates a generator that draws random numbers from the operating system.
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for V6Generator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> V6Generator<R> {
    /// Creates a generator with a specified random number generator.
    ///
    /// The `clock_seq` is seeded from `rng`, and the node is resolved from the hardware addresses
    /// of the host, falling back to a random node with the multicast bit set.
    pub fn with_rng(mut rng: R) -> Self {
        let clock_seq = random_clock_seq(&mut rng);
        let node = match node::hardware_node() {
            Some(node) => {
                tracing::debug!(
                    node = format_args!("{node:012x}"),
                    source = "hardware",
                    "resolved node"
                );
                node
            }
            None => {
                let node = node::random_node(&mut rng);
                tracing::debug!(
                    node = format_args!("{node:012x}"),
                    source = "random",
                    "resolved node"
                );
                node
            }
        };
        Self::from_parts(rng, node, clock_seq)
    }

    /// Creates a generator with a specified random number generator and a fixed node value,
    /// skipping the hardware address lookup.
    ///
    /// Bits of `node` above the lower 48 bits are discarded.
    pub fn with_node(mut rng: R, node: u64) -> Self {
        let clock_seq = random_clock_seq(&mut rng);
        Self::from_parts(rng, node & node::NODE_MASK, clock_seq)
    }

    fn from_parts(rng: R, node: u64, clock_seq: u16) -> Self {
        Self {
            clock: Mutex::new(ClockState {
                timestamp: 0,
                clock_seq,
            }),
            node: AtomicU64::new(node),
            always_randomize_node: AtomicBool::new(false),
            rng: Mutex::new(rng),
        }
    }

    /// Generates a new UUIDv6 object from the current system time.
    pub fn generate(&self) -> Uuid {
        self.generate_core(timestamp::now())
    }

    /// Generates a new UUIDv6 object from a given instant.
    ///
    /// Instants before 1582-10-15 or too far in the future to fit in the 60-bit `timestamp`
    /// field are clamped to the nearest representable value.
    pub fn generate_from_time(&self, time: SystemTime) -> Uuid {
        self.generate_core(timestamp::from_system_time(time))
    }

    /// Generates a new UUIDv6 object from a given `timestamp` field value, which counts
    /// 100-nanosecond ticks since 1582-10-15.
    ///
    /// See the [`V6Generator`] type documentation for how the `clock_seq` and a non-increasing
    /// `timestamp` are handled.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit integer.
    pub fn generate_core(&self, timestamp: u64) -> Uuid {
        assert!(
            timestamp <= timestamp::MAX_TIMESTAMP,
            "`timestamp` must be a 60-bit integer"
        );

        let (timestamp, clock_seq) = {
            let mut state = self.lock_clock();
            if timestamp > state.timestamp {
                state.timestamp = timestamp;
            } else if timestamp + ROLLBACK_ALLOWANCE >= state.timestamp {
                // go on with previous timestamp if new one is not much smaller
                state.clock_seq = (state.clock_seq + 1) & MAX_CLOCK_SEQ;
                if state.clock_seq == 0 {
                    // increment timestamp at clock_seq wraparound
                    state.timestamp = (state.timestamp + 1).min(timestamp::MAX_TIMESTAMP);
                }
                tracing::trace!(
                    timestamp = state.timestamp,
                    clock_seq = state.clock_seq,
                    "timestamp did not advance; incremented clock_seq"
                );
            } else {
                // adopt new timestamp if clock went backwards to unbearable extent
                state.timestamp = timestamp;
                state.clock_seq = (state.clock_seq + 1) & MAX_CLOCK_SEQ;
                tracing::trace!(
                    timestamp = state.timestamp,
                    clock_seq = state.clock_seq,
                    "clock moved backwards; incremented clock_seq"
                );
            }
            (state.timestamp, state.clock_seq)
        };

        let node = if self.always_randomize_node.load(Ordering::Acquire) {
            node::random_node(&mut *self.lock_rng())
        } else {
            self.node.load(Ordering::Acquire)
        };

        Uuid::from_fields_v6(timestamp, clock_seq, node)
    }

    /// Returns the node value stored in the generator.
    ///
    /// While [`always_randomize_node`](V6Generator::always_randomize_node) is in effect, the
    /// generated UUIDs carry freshly drawn values instead of this one.
    pub fn node(&self) -> u64 {
        self.node.load(Ordering::Acquire)
    }

    /// Sets the node value used for subsequent UUIDs and turns off per-UUID node randomization.
    ///
    /// Bits of `node` above the lower 48 bits are discarded.
    pub fn set_node(&self, node: u64) {
        let node = node & node::NODE_MASK;
        self.node.store(node, Ordering::Release);
        self.always_randomize_node.store(false, Ordering::Release);
        tracing::debug!(node = format_args!("{node:012x}"), "set node");
    }

    /// Replaces the stored node value with a random one, which is used for subsequent UUIDs.
    pub fn randomize_node_once(&self) {
        let node = node::random_node(&mut *self.lock_rng());
        self.node.store(node, Ordering::Release);
        tracing::debug!(node = format_args!("{node:012x}"), "randomized node");
    }

    /// Makes the generator draw a fresh random node value for every UUID, until
    /// [`set_node`](V6Generator::set_node) is called.
    pub fn always_randomize_node(&self) {
        self.always_randomize_node.store(true, Ordering::Release);
        tracing::debug!("enabled per-UUID node randomization");
    }

    /// Returns true if the generator draws a fresh random node value for every UUID.
    pub fn is_always_randomizing_node(&self) -> bool {
        self.always_randomize_node.load(Ordering::Acquire)
    }

    fn lock_clock(&self) -> MutexGuard<'_, ClockState> {
        // the state is two integers and cannot be left inconsistent by a panic
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_rng(&self) -> MutexGuard<'_, R> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Draws a random 14-bit `clock_seq`, degrading to zero if the random number generator fails.
fn random_clock_seq<R: RngCore>(rng: &mut R) -> u16 {
    let mut bytes = [0u8; 2];
    if let Err(err) = rng.try_fill_bytes(&mut bytes) {
        tracing::warn!(%err, "random source failed; using zero clock_seq");
        bytes = [0u8; 2];
    }
    u16::from_be_bytes(bytes) & MAX_CLOCK_SEQ
}

/// Supports operations as an infinite iterator that produces a new UUIDv6 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuidv6::V6Generator;
///
/// V6Generator::new()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RngCore> Iterator for V6Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for V6Generator<R> {}

//! Resolution of the 48-bit `node` field.

use rand::RngCore;

/// Mask that keeps the lower 48 bits occupied by the `node` field.
pub const NODE_MASK: u64 = (1 << 48) - 1;

/// The IEEE 802 multicast bit, set on every randomly drawn node so that it cannot collide with a
/// real hardware address.
pub const MULTICAST_BIT: u64 = 1 << 40;

/// Draws a random node value with the multicast bit set.
///
/// If the random number generator fails, the draw degrades to zero (plus the multicast bit)
/// rather than aborting.
pub fn random_node<R: RngCore>(rng: &mut R) -> u64 {
    let mut bytes = [0u8; 8];
    if let Err(err) = rng.try_fill_bytes(&mut bytes) {
        tracing::warn!(%err, "random source failed; using zero-derived node");
        bytes = [0u8; 8];
    }
    (u64::from_be_bytes(bytes) & NODE_MASK) | MULTICAST_BIT
}

/// Returns the first non-zero hardware address of the network interfaces on this host, or
/// `None` if there is no such address or the platform offers no way to read one.
pub fn hardware_node() -> Option<u64> {
    imp::hardware_addresses().into_iter().find(|&e| e != 0)
}

/// Parses a colon-separated MAC address such as `"00:a0:c9:1e:6b:f6"`.
fn parse_mac(src: &str) -> Option<u64> {
    let mut value = 0u64;
    let mut count = 0;
    for octet in src.trim().split(':') {
        if octet.len() != 2 {
            return None;
        }
        value = (value << 8) | u8::from_str_radix(octet, 16).ok()? as u64;
        count += 1;
    }
    (count == 6).then_some(value)
}

#[cfg(target_os = "linux")]
mod imp {
    use std::fs;

    /// Reads interface addresses from sysfs, ordered by interface name.
    pub fn hardware_addresses() -> Vec<u64> {
        let Ok(dir) = fs::read_dir("/sys/class/net") else {
            return Vec::new();
        };
        let mut entries: Vec<_> = dir
            .filter_map(Result::ok)
            .filter(|e| e.file_name() != "lo")
            .collect();
        entries.sort_by_key(|e| e.file_name());
        entries
            .iter()
            .filter_map(|e| fs::read_to_string(e.path().join("address")).ok())
            .filter_map(|text| super::parse_mac(&text))
            .collect()
    }
}

#[cfg(not(target_os = "linux"))]
mod imp {
    pub fn hardware_addresses() -> Vec<u64> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{hardware_node, parse_mac, random_node, MULTICAST_BIT, NODE_MASK};
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    /// Parses MAC addresses
    #[test]
    fn parses_mac_addresses() {
        assert_eq!(parse_mac("00:a0:c9:1e:6b:f6\n"), Some(0x00a0_c91e_6bf6));
        assert_eq!(parse_mac("FF:FF:FF:FF:FF:FF"), Some(NODE_MASK));
        assert_eq!(parse_mac(""), None);
        assert_eq!(parse_mac("00:a0:c9:1e:6b"), None);
        assert_eq!(parse_mac("00:a0:c9:1e:6b:f6:00"), None);
        assert_eq!(parse_mac("00:a0:c9:1e:6b:g6"), None);
        assert_eq!(parse_mac("00a0:c9:1e:6b:f6"), None);
    }

    /// Draws 48-bit nodes with multicast bit
    #[test]
    fn draws_48_bit_nodes_with_multicast_bit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let node = random_node(&mut rng);
            assert_eq!(node & !NODE_MASK, 0);
            assert_eq!(node & MULTICAST_BIT, MULTICAST_BIT);
        }
    }

    /// Falls back to zero-derived node if random source fails
    #[test]
    fn falls_back_to_zero_derived_node_if_random_source_fails() {
        struct Broken;
        impl RngCore for Broken {
            fn next_u32(&mut self) -> u32 {
                unreachable!()
            }
            fn next_u64(&mut self) -> u64 {
                unreachable!()
            }
            fn fill_bytes(&mut self, _: &mut [u8]) {
                unreachable!()
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                dest.fill(0xa5);
                Err(rand::Error::new("entropy source unavailable"))
            }
        }
        assert_eq!(random_node(&mut Broken), MULTICAST_BIT);
    }

    /// Returns 48-bit hardware node if any
    #[test]
    fn returns_48_bit_hardware_node_if_any() {
        if let Some(node) = hardware_node() {
            assert_ne!(node, 0);
            assert_eq!(node & !NODE_MASK, 0);
        }
    }
}

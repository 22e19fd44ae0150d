//! Todo id generation.

use rand::Rng;

/// Length of generated ids.
pub const ID_LENGTH: usize = 21;

/// URL-safe alphabet used for ids. Contains no key separator.
const ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Source of unique todo ids.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh id.
    fn generate(&self) -> String;
}

/// Generates 21 character ids from a 64 symbol URL-safe alphabet.
///
/// Uses the thread-local RNG, so one instance can be shared across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NanoIdGenerator;

impl IdGenerator for NanoIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..ID_LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

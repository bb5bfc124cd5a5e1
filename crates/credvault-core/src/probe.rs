//! Probe sequencing: primary and secondary hashes and the double-hashing
//! index sequence derived from them.
//!
//! Character codes are the UTF-8 bytes of the key, which coincide with the
//! ASCII codes for ASCII usernames.
//!
//! Slot for attempt `a`:
//!
//! ```text
//! index(key, a) = (primary_sum(key) + a * secondary(key)) mod capacity
//! ```
//!
//! Attempt 0 is the primary slot. If `secondary(key)` is a multiple of the
//! capacity, every attempt lands on the primary slot again; more generally the
//! sequence only covers `capacity / gcd(secondary, capacity)` distinct slots.
//! Both are known limitations of the scheme and are reported, not patched.

/// Multiplier of the polynomial secondary hash.
pub const SECONDARY_MULTIPLIER: u64 = 7;

/// Raw sum of the key's character codes, not reduced by any capacity.
pub fn primary_sum(key: &str) -> u64 {
    key.bytes().map(u64::from).sum()
}

/// Primary slot: `primary_sum(key) mod capacity`.
///
/// # Panics
/// Panics if `capacity` is zero.
pub fn primary(key: &str, capacity: usize) -> usize {
    KeyHash::of(key).index(0, capacity)
}

/// Polynomial hash: `acc = acc * 7 + byte` over the key, wrapping at 64 bits.
///
/// Returned unreduced; [`index`] reduces the combined value.
pub fn secondary(key: &str) -> u64 {
    key.bytes().fold(0u64, |acc, b| {
        acc.wrapping_mul(SECONDARY_MULTIPLIER).wrapping_add(u64::from(b))
    })
}

/// Slot visited by `attempt` for `key` in a table of `capacity` slots.
///
/// # Panics
/// Panics if `capacity` is zero.
pub fn index(key: &str, attempt: u64, capacity: usize) -> usize {
    KeyHash::of(key).index(attempt, capacity)
}

/// True when every attempt maps back to the primary slot.
pub fn is_degenerate(key: &str, capacity: usize) -> bool {
    KeyHash::of(key).is_degenerate(capacity)
}

/// Both hashes of a key, computed once and reused across attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHash {
    /// Unreduced character-code sum.
    pub sum: u64,
    /// Unreduced polynomial hash.
    pub secondary: u64,
}

impl KeyHash {
    /// Hash a key.
    pub fn of(key: &str) -> Self {
        Self {
            sum: primary_sum(key),
            secondary: secondary(key),
        }
    }

    /// `(sum + attempt * secondary) mod capacity`, computed without overflow.
    pub fn index(&self, attempt: u64, capacity: usize) -> usize {
        assert!(capacity > 0, "capacity must be non-zero");
        let combined = u128::from(self.sum) + u128::from(attempt) * u128::from(self.secondary);
        // The remainder is below `capacity`, so it fits back into usize.
        (combined % capacity as u128) as usize
    }

    /// True when `secondary` is a multiple of `capacity`.
    pub fn is_degenerate(&self, capacity: usize) -> bool {
        self.secondary % capacity as u64 == 0
    }

    /// The probe sequence of this key for a table of `capacity` slots.
    pub fn sequence(self, capacity: usize) -> ProbeSequence {
        ProbeSequence::new(self, capacity)
    }
}

/// Iterator over the distinct slots a key probes, starting at its primary
/// slot.
///
/// Yields `(attempt, slot)` pairs and stops once the sequence would return to
/// the primary slot, so each reachable slot appears exactly once.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    hash: KeyHash,
    capacity: usize,
    attempt: u64,
    start: usize,
    done: bool,
}

impl ProbeSequence {
    /// Start a sequence for `hash` over `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(hash: KeyHash, capacity: usize) -> Self {
        let start = hash.index(0, capacity);
        Self {
            hash,
            capacity,
            attempt: 0,
            start,
            done: false,
        }
    }

    /// Sequence for a key.
    pub fn for_key(key: &str, capacity: usize) -> Self {
        Self::new(KeyHash::of(key), capacity)
    }
}

impl Iterator for ProbeSequence {
    type Item = (u64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let slot = self.hash.index(self.attempt, self.capacity);
        if self.attempt > 0 && slot == self.start {
            self.done = true;
            return None;
        }
        let item = (self.attempt, slot);
        self.attempt += 1;
        Some(item)
    }
}

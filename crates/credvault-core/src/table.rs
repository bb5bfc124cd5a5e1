//! The open-addressed credential table.
//!
//! Each slot holds a chain of entries. Insertion walks the key's double-hashing
//! probe sequence until it finds a slot whose chain is empty and makes the new
//! entry that chain's sole head. It looks for an empty slot, not for a matching
//! username, so a user with several passwords occupies several slots.
//!
//! Growth doubles the capacity and re-places every entry at its primary slot
//! by prepending to that slot's chain. No re-probing happens during growth,
//! which is how chains longer than one entry come to exist.
//!
//! Lookups honour the configured [`LookupStrategy`]. With the default
//! `PrimarySlot` strategy an entry placed at attempt ≥ 1 cannot be seen by
//! `find_all`, `verify` or `delete` until a growth moves it home.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::{LookupStrategy, TableConfig};
use crate::error::{CoreError, Result};
use crate::obscure::{decode, encode};
use crate::probe::{primary, KeyHash, ProbeSequence};

/// One stored password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    username: String,
    obscured: String,
}

impl Entry {
    fn new(username: &str, obscured: String) -> Self {
        Self {
            username: username.to_owned(),
            obscured,
        }
    }

    /// Owner of this password.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The stored (transformed) password.
    pub fn obscured(&self) -> &str {
        &self.obscured
    }

    /// The plaintext password.
    pub fn password(&self) -> String {
        decode(&self.obscured)
    }
}

/// Entries sharing a slot, head first.
pub type Chain = VecDeque<Entry>;

/// Where an insert landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Slot the entry was placed in, at the capacity in force before any
    /// growth this insert triggered.
    pub slot: usize,
    /// Probe attempt that found the empty slot (0 = primary).
    pub attempts: u64,
    /// Whether the insert pushed the load factor over the threshold.
    pub grew: bool,
}

/// Open-addressed table of username → password entries.
#[derive(Debug, Clone)]
pub struct HashTable {
    slots: Vec<Chain>,
    count: usize,
    config: TableConfig,
}

impl HashTable {
    /// Create an empty table with the default configuration.
    pub fn new() -> Self {
        Self::build(TableConfig::default())
    }

    /// Create an empty table, validating `config` first.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig) -> Self {
        let capacity = config.effective_capacity();
        Self {
            slots: empty_slots(capacity),
            count: 0,
            config,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// The table's configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The chain at `index`, or `None` past the end.
    pub fn chain(&self, index: usize) -> Option<&Chain> {
        self.slots.get(index)
    }

    /// Every stored entry, in slot order then chain order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().flatten()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Store `password` for `username`.
    ///
    /// Fails with [`CoreError::DegenerateProbe`] when the probe sequence
    /// visits no empty slot. The table is unchanged in that case.
    pub fn insert(&mut self, username: &str, password: &str) -> Result<Placement> {
        let capacity = self.capacity();
        let (attempts, slot) = KeyHash::of(username)
            .sequence(capacity)
            .find(|&(_, slot)| self.slots[slot].is_empty())
            .ok_or_else(|| CoreError::DegenerateProbe {
                username: username.to_owned(),
                capacity,
            })?;

        self.slots[slot].push_front(Entry::new(username, encode(password)));
        self.count += 1;
        debug!(username, slot, attempts, count = self.count, "placed entry");

        let grew = self.load_factor() > self.config.max_load_factor;
        if grew {
            self.grow();
        }

        Ok(Placement {
            slot,
            attempts,
            grew,
        })
    }

    /// Remove the first entry for `username` whose password is `password`.
    ///
    /// Returns `false` if no such entry is visible to the lookup strategy.
    pub fn delete(&mut self, username: &str, password: &str) -> bool {
        for (_, slot) in self.lookup_sequence(username) {
            let chain = &mut self.slots[slot];
            let found = chain
                .iter()
                .position(|e| e.username == username && decode(&e.obscured) == password);
            if let Some(pos) = found {
                chain.remove(pos);
                self.count -= 1;
                debug!(username, slot, count = self.count, "deleted entry");
                return true;
            }
        }
        info!(username, "password not found for deletion");
        false
    }

    /// Double the capacity and re-place every entry at its primary slot.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let mut slots = empty_slots(new_capacity);

        for chain in std::mem::take(&mut self.slots) {
            for entry in chain {
                let slot = primary(&entry.username, new_capacity);
                slots[slot].push_front(entry);
            }
        }

        self.slots = slots;
        debug!(old_capacity, new_capacity, count = self.count, "table grew");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Entries for `username` in the slots the lookup strategy examines.
    pub fn matches<'a>(&'a self, username: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.lookup_sequence(username)
            .flat_map(move |(_, slot)| self.slots[slot].iter())
            .filter(move |e| e.username == username)
    }

    /// Plaintext passwords for `username` held in memory.
    pub fn find_all(&self, username: &str) -> Vec<String> {
        self.matches(username).map(Entry::password).collect()
    }

    /// True if `username` has `password` stored.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let obscured = encode(password);
        self.matches(username).any(|e| e.obscured == obscured)
    }

    fn lookup_sequence(&self, username: &str) -> std::iter::Take<ProbeSequence> {
        let limit = match self.config.lookup {
            LookupStrategy::PrimarySlot => 1,
            LookupStrategy::FullProbe => usize::MAX,
        };
        ProbeSequence::for_key(username, self.capacity()).take(limit)
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_slots(capacity: usize) -> Vec<Chain> {
    (0..capacity).map(|_| Chain::new()).collect()
}

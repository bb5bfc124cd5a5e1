//! Table configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Smallest capacity a table may have.
pub const MIN_CAPACITY: usize = 10;

/// Load factor above which the table doubles.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

/// Which slots `find_all`, `verify` and `delete` examine.
///
/// Insertion always walks the full probe sequence looking for an empty slot.
/// Lookups by default only examine the primary slot, so an entry displaced by
/// a collision is invisible to them until growth rehashes it home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// Examine only the slot at attempt 0.
    #[default]
    PrimarySlot,
    /// Examine every slot of the key's probe sequence.
    FullProbe,
}

/// Configuration for a [`HashTable`](crate::HashTable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Starting number of slots. Raised to [`MIN_CAPACITY`] if smaller.
    pub initial_capacity: usize,
    /// Growth is triggered when `len / capacity` exceeds this.
    pub max_load_factor: f64,
    /// Slots examined by lookups.
    pub lookup: LookupStrategy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: MIN_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            lookup: LookupStrategy::PrimarySlot,
        }
    }
}

impl TableConfig {
    /// Capacity the table actually starts with.
    pub fn effective_capacity(&self) -> usize {
        self.initial_capacity.max(MIN_CAPACITY)
    }

    /// Check that the load factor lies in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let lf = self.max_load_factor;
        if !lf.is_finite() || lf <= 0.0 || lf > 1.0 {
            return Err(CoreError::InvalidConfig(format!(
                "max_load_factor must be in (0, 1], got {}",
                lf
            )));
        }
        Ok(())
    }
}

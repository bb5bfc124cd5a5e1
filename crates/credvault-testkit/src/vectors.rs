//! Golden test vectors for the transform and the probe sequencer.
//!
//! Stored records and slot choices must not drift between releases: a
//! different transform would make existing sidecar files unreadable, and a
//! different probe would change which entries lookups can see.

use serde::{Deserialize, Serialize};

use credvault_core::probe::{index, primary_sum, secondary};
use credvault_core::{decode, encode};

/// Expected transform output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformVector {
    pub plain: String,
    pub encoded: String,
}

/// Expected hashes and first three probe slots at capacities 10 and 20.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeVector {
    pub key: String,
    pub primary_sum: u64,
    pub secondary: u64,
    pub slots_cap10: [usize; 3],
    pub slots_cap20: [usize; 3],
}

fn transform(plain: &str, encoded: &str) -> TransformVector {
    TransformVector {
        plain: plain.to_string(),
        encoded: encoded.to_string(),
    }
}

fn probe(
    key: &str,
    primary_sum: u64,
    secondary: u64,
    slots_cap10: [usize; 3],
    slots_cap20: [usize; 3],
) -> ProbeVector {
    ProbeVector {
        key: key.to_string(),
        primary_sum,
        secondary,
        slots_cap10,
        slots_cap20,
    }
}

/// All transform vectors.
pub fn transform_vectors() -> Vec<TransformVector> {
    vec![
        transform("Cat123!", "Dbu123!"),
        transform("zebra", "afcsb"),
        transform("Zulu-9", "Avmv-9"),
        transform("hello world", "ifmmp xpsme"),
        transform("!@#$%^&*()", "!@#$%^&*()"),
        transform("Password", "Qbttxpse"),
        transform("", ""),
    ]
}

/// All probe vectors.
pub fn probe_vectors() -> Vec<ProbeVector> {
    vec![
        // secondary is a multiple of both 10 and 20
        probe("alice", 510, 275880, [0, 0, 0], [10, 10, 10]),
        probe("bob", 307, 5677, [7, 4, 1], [7, 4, 1]),
        probe("erin", 430, 41074, [0, 4, 8], [10, 4, 18]),
        probe("Abdullah", 797, 67064633, [7, 0, 3], [17, 10, 3]),
        probe("Osama", 497, 234737, [7, 4, 1], [17, 14, 11]),
        // period 2 at capacity 10
        probe("Mahdy", 499, 224065, [9, 4, 9], [19, 4, 9]),
        probe("user0", 495, 326157, [5, 2, 9], [15, 12, 9]),
        probe("", 0, 0, [0, 0, 0], [0, 0, 0]),
    ]
}

/// Names of vectors the current implementation disagrees with.
pub fn mismatches() -> Vec<String> {
    let mut bad = Vec::new();

    for v in transform_vectors() {
        if encode(&v.plain) != v.encoded || decode(&v.encoded) != v.plain {
            bad.push(format!("transform {:?}", v.plain));
        }
    }

    for v in probe_vectors() {
        let slots = |cap| [0, 1, 2].map(|a| index(&v.key, a, cap));
        if primary_sum(&v.key) != v.primary_sum
            || secondary(&v.key) != v.secondary
            || slots(10) != v.slots_cap10
            || slots(20) != v.slots_cap20
        {
            bad.push(format!("probe {:?}", v.key));
        }
    }

    bad
}

//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use credvault::{FileSidecar, MemorySidecar, Vault, VaultConfig};

/// A vault over an in-memory sidecar plus a seeded random source.
pub struct TestFixture {
    pub vault: Vault<MemorySidecar>,
    pub rng: StdRng,
}

impl TestFixture {
    /// Default configuration, seed 0.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Default configuration with a chosen seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(VaultConfig::default(), seed)
    }

    /// Custom configuration.
    ///
    /// # Panics
    /// Panics if the table configuration is invalid.
    pub fn with_config(config: VaultConfig, seed: u64) -> Self {
        Self {
            vault: Vault::new(MemorySidecar::new(), config).expect("valid test config"),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Store a generated password for `username` and return it.
    pub fn generate(&mut self, username: &str) -> String {
        self.vault
            .insert_generated(username, &mut self.rng)
            .expect("generated insert")
    }

    /// Store `(username, password)` pairs, panicking on the first failure.
    pub fn insert_all<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (username, password) in pairs {
            self.vault
                .insert(username, password)
                .unwrap_or_else(|e| panic!("insert {:?}: {}", username, e));
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A vault over per-user files in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct FileFixture {
    pub dir: TempDir,
    pub vault: Vault<FileSidecar>,
}

impl FileFixture {
    /// Create with the default configuration.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let mut config = VaultConfig::default();
        config.sidecar.dir = dir.path().to_path_buf();
        let vault = Vault::open(config).expect("open file vault");
        Self { dir, vault }
    }

    /// Raw contents of `username`'s sidecar file, if it exists.
    pub fn raw_record(&self, username: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(format!("{}.txt", username))).ok()
    }
}

impl Default for FileFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Six usernames whose sixth insert grows a fresh table from 10 to 20 slots.
pub const GROWTH_USERS: [&str; 6] = ["alice", "bob", "carol", "dave", "erin", "frank"];

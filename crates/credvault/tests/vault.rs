//! End-to-end behaviour of the Vault over real and fake sidecars.

use std::collections::HashSet;

use anyhow::Result;
use credvault::store::SidecarError;
use credvault::{
    FileSidecar, LookupStrategy, MemorySidecar, Sidecar, SqliteSidecar, TableConfig, Vault,
    VaultConfig, VaultError,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

const SYMBOLS: &str = "!@#$%^&*()_-+=<>?/[]{},.:;";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn memory_vault() -> Vault<MemorySidecar> {
    Vault::new(MemorySidecar::new(), VaultConfig::default()).unwrap()
}

fn file_vault(dir: &TempDir) -> Result<Vault<FileSidecar>> {
    let mut config = VaultConfig::default();
    config.sidecar.dir = dir.path().to_path_buf();
    Ok(Vault::open(config)?)
}

fn sorted(passwords: impl Iterator<Item = String>) -> Vec<String> {
    let mut v: Vec<String> = passwords.collect();
    v.sort();
    v
}

#[test]
fn test_alice_scenario() -> Result<()> {
    init_tracing();
    let dir = TempDir::new()?;
    let mut vault = file_vault(&dir)?;

    vault.insert("alice", "Cat123!")?;

    assert!(vault.verify("alice", "Cat123!"));
    assert!(!vault.verify("alice", "wrong"));

    let on_disk = std::fs::read_to_string(dir.path().join("alice.txt"))?;
    assert_eq!(on_disk, "Dbu123!\n");
    Ok(())
}

#[test]
fn test_generated_password_for_bob() -> Result<()> {
    let dir = TempDir::new()?;
    let mut vault = file_vault(&dir)?;
    let mut rng = StdRng::seed_from_u64(2024);

    let password = vault.insert_generated("bob", &mut rng)?;

    assert_eq!(password.chars().count(), 12);
    assert!(password.chars().any(|c| SYMBOLS.contains(c)));
    assert!(password.chars().any(|c| c.is_ascii_digit()));
    assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    assert_eq!(password.chars().filter(|c| c.is_ascii_lowercase()).count(), 9);

    assert!(vault.verify("bob", &password));
    assert_eq!(vault.sidecar().read("bob")?, vec![credvault::core::encode(&password)]);
    Ok(())
}

#[test]
fn test_sixth_distinct_user_doubles_capacity() -> Result<()> {
    let mut vault = memory_vault();
    for user in ["alice", "bob", "carol", "dave", "erin"] {
        vault.insert(user, "pw")?;
    }
    assert_eq!(vault.table().capacity(), 10);

    vault.insert("frank", "pw")?;
    assert_eq!(vault.table().capacity(), 20);
    assert_eq!(vault.table().len(), 6);
    Ok(())
}

#[test]
fn test_growth_keeps_findable_entries_verifiable() -> Result<()> {
    let mut vault = memory_vault();
    let mut findable = Vec::new();

    for i in 0..40 {
        let (user, password) = (format!("user{}", i), format!("pw{}", i));
        vault.insert(&user, &password)?;
        if vault.verify(&user, &password) {
            findable.push((user, password));
        }
    }

    assert!(vault.table().capacity() >= 20);
    assert!(vault.table().load_factor() <= 0.5);
    assert_eq!(vault.table().len(), 40);
    for (user, password) in &findable {
        assert!(vault.verify(user, password), "{} lost", user);
    }
    Ok(())
}

#[test]
fn test_delete_then_verify() -> Result<()> {
    let mut vault = memory_vault();
    vault.insert("carol", "s3cret")?;
    assert!(vault.verify("carol", "s3cret"));

    assert!(vault.delete("carol", "s3cret"));
    assert!(!vault.verify("carol", "s3cret"));
    assert_eq!(vault.table().len(), 0);
    Ok(())
}

#[test]
fn test_delete_missing_reports_not_found() -> Result<()> {
    let mut vault = memory_vault();
    vault.insert("carol", "s3cret")?;

    assert!(!vault.delete("carol", "other"));
    assert!(!vault.delete("nobody", "s3cret"));
    assert_eq!(vault.table().len(), 1);
    Ok(())
}

#[test]
fn test_find_all_is_repeatable() -> Result<()> {
    let dir = TempDir::new()?;
    let mut vault = file_vault(&dir)?;
    vault.insert("bob", "one")?;
    vault.insert("bob", "Two2")?;
    vault.insert("erin", "three")?;

    let first = sorted(vault.find_all("bob")?);
    let second = sorted(vault.find_all("bob")?);
    assert_eq!(first, second);
    assert!(first.contains(&"Two2".to_string()));
    Ok(())
}

#[test]
fn test_sidecar_keeps_deleted_passwords() -> Result<()> {
    let mut vault = memory_vault();
    vault.insert("bob", "gone")?;
    assert!(vault.delete("bob", "gone"));

    let found: Vec<String> = vault.find_all("bob")?.collect();
    assert_eq!(found, vec!["gone"]);
    assert_eq!(vault.sidecar().records("bob").len(), 1);
    Ok(())
}

#[test]
fn test_sidecar_failure_is_surfaced() {
    init_tracing();
    let mut vault = memory_vault();
    vault.sidecar_mut().set_failing(true);

    let err = vault.insert("bob", "pw").unwrap_err();
    assert!(err.is_resource_unavailable());
    // The table side of the insert already happened
    assert!(vault.verify("bob", "pw"));

    let err = vault.find_all("bob").unwrap_err();
    assert!(err.is_resource_unavailable());

    vault.sidecar_mut().set_failing(false);
    let found: Vec<String> = vault.find_all("bob").unwrap().collect();
    assert_eq!(found, vec!["pw"]);
}

#[test]
fn test_degenerate_probe_is_surfaced() -> Result<()> {
    let mut vault = memory_vault();
    vault.insert("alice", "first")?;

    let err = vault.insert("alice", "second").unwrap_err();
    assert!(err.is_degenerate_probe());
    assert!(matches!(err, VaultError::Table(_)));

    // Nothing was appended for the failed insert
    assert_eq!(vault.sidecar().records("alice").len(), 1);
    assert_eq!(vault.table().len(), 1);
    Ok(())
}

#[test]
fn test_primary_slot_lookup_misses_displaced_entry() -> Result<()> {
    let mut vault = memory_vault();
    vault.insert("alice", "a")?;
    vault.insert("erin", "e")?;

    assert!(!vault.verify("erin", "e"));
    // The sidecar still reports it
    assert_eq!(vault.find_all("erin")?.collect::<Vec<_>>(), vec!["e"]);
    Ok(())
}

#[test]
fn test_full_probe_lookup_finds_displaced_entry() -> Result<()> {
    let config = VaultConfig {
        table: TableConfig {
            lookup: LookupStrategy::FullProbe,
            ..TableConfig::default()
        },
        ..VaultConfig::default()
    };
    let mut vault = Vault::new(MemorySidecar::new(), config)?;
    vault.insert("alice", "a")?;
    vault.insert("erin", "e")?;

    assert!(vault.verify("erin", "e"));
    assert_eq!(vault.find_all("erin")?.collect::<Vec<_>>(), vec!["e", "e"]);
    assert!(vault.delete("erin", "e"));
    Ok(())
}

#[test]
fn test_new_session_does_not_reload_table() -> Result<()> {
    let dir = TempDir::new()?;
    {
        let mut vault = file_vault(&dir)?;
        vault.insert("frank", "persisted")?;
    }

    let vault = file_vault(&dir)?;
    assert!(vault.table().is_empty());
    assert!(!vault.verify("frank", "persisted"));
    assert_eq!(vault.find_all("frank")?.collect::<Vec<_>>(), vec!["persisted"]);
    Ok(())
}

#[test]
fn test_sqlite_backed_vault() -> Result<()> {
    let mut vault = Vault::new(SqliteSidecar::open_memory()?, VaultConfig::default())?;
    vault.insert("grace", "pw1")?;
    vault.insert("grace", "pw2")?;

    let found: HashSet<String> = vault.find_all("grace")?.collect();
    assert!(found.contains("pw1"));
    assert!(found.contains("pw2"));
    assert_eq!(vault.sidecar().record_count()?, 2);
    Ok(())
}

#[test]
fn test_config_from_json() -> Result<()> {
    let dir = TempDir::new()?;
    let json = format!(
        r#"{{
            "table": {{ "initial_capacity": 32, "lookup": "full_probe" }},
            "sidecar": {{ "dir": {:?}, "extension": "pw" }}
        }}"#,
        dir.path().display().to_string()
    );
    let config: VaultConfig = serde_json::from_str(&json)?;
    let mut vault = Vault::open(config)?;

    assert_eq!(vault.table().capacity(), 32);
    assert_eq!(vault.table().config().max_load_factor, 0.5);
    vault.insert("heidi", "x")?;
    assert!(dir.path().join("heidi.pw").exists());
    Ok(())
}

#[test]
fn test_invalid_username_rejected_before_table() {
    let mut vault = memory_vault();
    let err = vault.insert("../etc", "pw").unwrap_err();
    assert!(matches!(err, VaultError::Sidecar(SidecarError::InvalidKey(_))));
    assert!(vault.table().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_insert_then_verify_on_fresh_vault(password in "[ -~]{0,32}") {
        let mut vault = memory_vault();
        vault.insert("ivan", &password).unwrap();
        prop_assert!(vault.verify("ivan", &password));
        let found: Vec<String> = vault.find_all("ivan").unwrap().collect();
        prop_assert_eq!(found, vec![password.clone(), password]);
    }
}

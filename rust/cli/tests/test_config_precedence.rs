use coinjack_cli::config::{ValueSource, load_with_sources};
use serial_test::serial;
use tempfile::tempdir;

const VARS: [&str; 4] = [
    "COINJACK_CONFIG",
    "COINJACK_SEED",
    "COINJACK_BET",
    "COINJACK_STATE",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn defaults_apply_without_file_or_env() {
    clear_env();
    let resolved = load_with_sources().unwrap();
    assert_eq!(resolved.config.seed, None);
    assert_eq!(resolved.config.bet, 10);
    assert_eq!(resolved.config.state_path, "coinjack-state.json");
    assert_eq!(resolved.sources.bet, ValueSource::Default);
}

#[test]
#[serial]
fn file_then_env_precedence() {
    clear_env();
    let dir = tempdir().unwrap();
    let cfg_path = dir.path().join("coinjack.toml");
    std::fs::write(&cfg_path, "seed = 456\nbet = 5\nstate_path = \"saves/a.json\"\n").unwrap();
    unsafe {
        std::env::set_var("COINJACK_CONFIG", &cfg_path);
    }

    let from_file = load_with_sources().unwrap();
    assert_eq!(from_file.config.seed, Some(456));
    assert_eq!(from_file.sources.seed, ValueSource::File);
    assert_eq!(from_file.config.bet, 5);
    assert_eq!(from_file.config.state_path, "saves/a.json");

    unsafe {
        std::env::set_var("COINJACK_BET", "30");
        std::env::set_var("COINJACK_STATE", "other.json");
    }
    let from_env = load_with_sources().unwrap();
    assert_eq!(from_env.config.seed, Some(456));
    assert_eq!(from_env.sources.seed, ValueSource::File);
    assert_eq!(from_env.config.bet, 30);
    assert_eq!(from_env.sources.bet, ValueSource::Env);
    assert_eq!(from_env.config.state_path, "other.json");
    assert_eq!(from_env.sources.state_path, ValueSource::Env);

    clear_env();
}

#[test]
#[serial]
fn unknown_file_key_is_rejected() {
    clear_env();
    let dir = tempdir().unwrap();
    let cfg_path = dir.path().join("coinjack.toml");
    std::fs::write(&cfg_path, "hands = 3\n").unwrap();
    unsafe {
        std::env::set_var("COINJACK_CONFIG", &cfg_path);
    }
    let err = load_with_sources().unwrap_err();
    assert!(err.to_string().contains("cannot parse config file"));
    clear_env();
}

#[test]
#[serial]
fn malformed_seed_is_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("COINJACK_SEED", "abc");
    }
    let err = load_with_sources().unwrap_err();
    assert_eq!(err.to_string(), "Invalid seed");
    clear_env();
}

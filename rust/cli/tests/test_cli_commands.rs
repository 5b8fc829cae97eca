mod helpers;

use helpers::CliRunner;

#[test]
fn sim_reports_every_outcome_and_final_balance() {
    let cli = CliRunner::new();
    let res = cli.run(&["sim", "--rounds", "20", "--seed", "42"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("sim: rounds=20 seed=42 stand_on=17 bet=10"));
    for key in [
        "player_bust",
        "dealer_bust",
        "dealer_win",
        "player_win",
        "player_win_natural",
        "tie",
    ] {
        assert!(res.stdout.contains(&format!("{}: ", key)), "missing {}", key);
    }
    assert!(res.stdout.contains("Final balance: "));
}

#[test]
fn sim_is_reproducible_with_a_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["sim", "--rounds", "50", "--seed", "7", "--stand-on", "15"]);
    let b = cli.run(&["sim", "--rounds", "50", "--seed", "7", "--stand-on", "15"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn sim_bet_larger_than_bankroll_stops_immediately() {
    let cli = CliRunner::new();
    let res = cli.run(&["sim", "--rounds", "5", "--seed", "1", "--bet", "500"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Rounds played: 0"));
    assert!(res.stdout.contains("Stopped early"));
    assert!(res.stdout.contains("Final balance: 100"));
}

#[test]
fn sim_does_not_write_state() {
    let cli = CliRunner::new();
    cli.run(&["sim", "--rounds", "3", "--seed", "3"]);
    assert!(!cli.state_path().exists());
}

#[test]
fn sim_rejects_zero_rounds() {
    let cli = CliRunner::new();
    let res = cli.run(&["sim", "--rounds", "0"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("rounds must be >= 1"));
}

#[test]
fn balance_without_state_shows_starting_coins() {
    let cli = CliRunner::new();
    let res = cli.run(&["balance"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Balance: 100 (no saved state"));
    assert!(res.stdout.contains("Marker: none"));
}

#[test]
fn balance_reads_saved_state() {
    let cli = CliRunner::new();
    cli.write_state(r#"{"balance": -5, "marker": "pending_reset"}"#);
    let res = cli.run(&["balance"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Balance: -5"));
    assert!(res.stdout.contains("Marker: pending_reset"));
}

#[test]
fn corrupt_state_file_is_an_error() {
    let cli = CliRunner::new();
    cli.write_state("{ balance: ");
    let res = cli.run(&["balance"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Corrupt state file"));

    let play = cli.run_with_input(&["play"], "q\n");
    assert_eq!(play.exit_code, 2);
}

#[test]
fn cfg_prints_defaults_with_sources() {
    let cli = CliRunner::new();
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["bet"]["value"].as_u64(), Some(10));
    assert_eq!(json["bet"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(
        json["state_path"]["value"].as_str(),
        Some("coinjack-state.json")
    );
}

#[test]
fn cfg_env_overrides_file() {
    let cli = CliRunner::new();
    let cfg_path = cli.dir().join("coinjack.toml");
    std::fs::write(&cfg_path, "seed = 456\nbet = 25\n").unwrap();
    let cfg_path = cfg_path.to_string_lossy().to_string();

    let res = cli.run_with_env(
        &["cfg"],
        &[("COINJACK_CONFIG", &cfg_path), ("COINJACK_SEED", "123")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(123));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["bet"]["value"].as_u64(), Some(25));
    assert_eq!(json["bet"]["source"].as_str(), Some("file"));
}

#[test]
fn invalid_env_bet_fails_every_command_that_reads_config() {
    let cli = CliRunner::new();
    let env = [("COINJACK_BET", "0")];
    let cfg = cli.run_with_env(&["cfg"], &env);
    assert_eq!(cfg.exit_code, 2);
    assert!(cfg.stderr.contains("Invalid configuration"));

    let sim = cli.run_with_env(&["sim", "--rounds", "1"], &env);
    assert_eq!(sim.exit_code, 2);
}

#[test]
fn play_via_stdin_persists_balance() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "11"], "status\nq\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Coinjack table (seed 11)"));
    assert!(res.stdout.contains("Coins: 100 | Bet: 10"));
    assert!(res.stdout.contains("Final balance: 100"));

    let state = cli.read_state();
    assert_eq!(state["balance"].as_i64(), Some(100));
    assert_eq!(state["marker"].as_str(), Some("none"));
}

#[test]
fn unknown_subcommand_exits_with_error() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Commands:"));
}

use schocken_cli::{exit_code, run};

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_help_is_a_success() {
    let (code, out, _) = run_cli(&["schocken", "--help"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Schocken dice game simulator"));
    assert!(out.contains("play"));
    assert!(out.contains("sim"));
    assert!(out.contains("stats"));
}

#[test]
fn test_version_is_a_success() {
    let (code, out, _) = run_cli(&["schocken", "--version"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("schocken"));
}

#[test]
fn test_missing_subcommand_is_an_error() {
    let (code, out, err) = run_cli(&["schocken"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(out.is_empty());
    assert!(!err.is_empty());
}

#[test]
fn test_unknown_subcommand_is_an_error() {
    let (code, _, err) = run_cli(&["schocken", "frobnicate"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(!err.is_empty());
}

#[test]
fn test_unknown_strategy_is_an_error() {
    let (code, _, err) = run_cli(&["schocken", "play", "--strategy", "telepathy"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("unknown strategy 'telepathy'"));
}

#[test]
fn test_duplicate_player_names_are_an_error() {
    let (code, _, err) = run_cli(&["schocken", "play", "--players", "Alice,Alice"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("Alice"));
}

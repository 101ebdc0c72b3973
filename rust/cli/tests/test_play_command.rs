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
fn test_play_narrates_and_prints_scores() {
    let (code, out, err) = run_cli(&["schocken", "play", "--seed", "1", "--rounds", "1"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(err.is_empty());

    assert!(out.contains("Welcome to the game Schocken!"));
    assert!(out.contains("- Schocken heißt das Spiel! -"));
    assert!(out.contains("Playing round 0"));
    assert!(out.contains("\tPlaying half 0"));
    // the score block is JSON over the default roster
    assert!(out.contains("\"rounds_lost\""));
    assert!(out.contains("\"Alice\""));
    assert!(out.contains("\"Bob\""));
    assert!(out.contains("\"Carol\""));
}

#[test]
fn test_play_respects_the_roster_flag() {
    let (code, out, _) = run_cli(&[
        "schocken", "play", "--seed", "3", "--players", "Mia,Noah",
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("\"Mia\""));
    assert!(out.contains("\"Noah\""));
    assert!(!out.contains("\"Alice\""));
}

#[test]
fn test_play_narrates_each_requested_round() {
    let (code, out, _) = run_cli(&["schocken", "play", "--seed", "5", "--rounds", "2"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Playing round 0"));
    assert!(out.contains("Playing round 1"));
}

#[test]
fn test_play_is_reproducible_per_seed() {
    let first = run_cli(&["schocken", "play", "--seed", "9"]);
    let second = run_cli(&["schocken", "play", "--seed", "9"]);
    assert_eq!(first, second);
}

use pokerbots_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_expected_commands() {
    let (code, stdout, stderr) = run_cli(&["pokerbots", "--help"]);
    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    for cmd in ["sim", "deal", "eval", "cfg"] {
        assert!(stdout.contains(cmd), "help is missing {}", cmd);
    }
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let (code, stdout, stderr) = run_cli(&["pokerbots", "replay"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Commands:"));
    assert!(stderr.contains("  sim"));
    assert!(stderr.contains("pokerbots --help"));
}

#[test]
fn missing_required_flag_is_a_usage_error() {
    let (code, _, stderr) = run_cli(&["pokerbots", "eval"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--cards"));
}

#[test]
fn eval_prints_category_and_best_five() {
    let (code, stdout, _) = run_cli(&["pokerbots", "eval", "--cards", "5d 4c 3h 2s Ah Kd 9c"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Hand: Straight [5]"), "{}", stdout);
    assert!(stdout.contains("Best five: ["));
}

#[test]
fn eval_reports_bad_cards() {
    let (code, stdout, stderr) = run_cli(&["pokerbots", "eval", "--cards", "As Kd Zz Qh Jc"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Invalid input"), "{}", stderr);
}

#[test]
fn deal_is_reproducible_with_a_seed() {
    let (code, first, _) = run_cli(&["pokerbots", "deal", "--seed", "7", "--players", "4"]);
    assert_eq!(code, 0);
    let (_, second, _) = run_cli(&["pokerbots", "deal", "--seed", "7", "--players", "4"]);
    assert_eq!(first, second);
    assert_eq!(first.lines().filter(|l| l.starts_with("Hole P")).count(), 4);
    assert!(first.contains("Blinds: P1 posts"));
    assert!(first.contains("Acting order: P3 P4 P1 P2"), "{}", first);
}

#[test]
fn deal_rejects_oversized_tables() {
    let (code, _, stderr) = run_cli(&["pokerbots", "deal", "--players", "11"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Engine error: Invalid table"), "{}", stderr);
}

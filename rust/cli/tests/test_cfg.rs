use pokerbots_cli::run;
use serial_test::serial;
use std::io::Write;

const VARS: [&str; 5] = [
    "POKERBOTS_CONFIG",
    "POKERBOTS_SEED",
    "POKERBOTS_STARTING_STACK",
    "POKERBOTS_SMALL_BLIND",
    "POKERBOTS_BIG_BLIND",
];

fn clear_env() {
    for v in VARS {
        unsafe { std::env::remove_var(v) };
    }
}

fn cfg() -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["pokerbots", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, stdout, stderr) = cfg();
    assert_eq!(code, 0, "stderr: {}", stderr);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(1000));
    assert_eq!(json["small_blind"]["value"].as_u64(), Some(25));
    assert_eq!(json["big_blind"]["value"].as_u64(), Some(50));
    assert!(json["seed"]["value"].is_null());
    for key in ["starting_stack", "small_blind", "big_blind", "seed"] {
        assert_eq!(json[key]["source"].as_str(), Some("default"));
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_stack = 5000\nbig_blind = 100\nseed = 456").unwrap();

    unsafe {
        std::env::set_var("POKERBOTS_CONFIG", file.path());
        std::env::set_var("POKERBOTS_SEED", "123");
        std::env::set_var("POKERBOTS_SMALL_BLIND", "40");
    }
    let (code, stdout, stderr) = cfg();
    clear_env();
    assert_eq!(code, 0, "stderr: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(5000));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("file"));
    assert_eq!(json["big_blind"]["value"].as_u64(), Some(100));
    assert_eq!(json["big_blind"]["source"].as_str(), Some("file"));
    assert_eq!(json["small_blind"]["value"].as_u64(), Some(40));
    assert_eq!(json["small_blind"]["source"].as_str(), Some("env"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(123));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
}

#[test]
#[serial]
fn invalid_values_fail() {
    clear_env();
    unsafe { std::env::set_var("POKERBOTS_SMALL_BLIND", "500") };
    let (code, stdout, stderr) = cfg();
    unsafe { std::env::set_var("POKERBOTS_SMALL_BLIND", "lots") };
    let (code2, _, stderr2) = cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid configuration"), "{}", stderr);
    assert_eq!(code2, 2);
    assert!(stderr2.contains("Invalid small_blind"), "{}", stderr2);
}

#[test]
#[serial]
fn configured_blinds_reach_the_table() {
    clear_env();
    unsafe {
        std::env::set_var("POKERBOTS_SMALL_BLIND", "10");
        std::env::set_var("POKERBOTS_BIG_BLIND", "20");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["pokerbots", "deal", "--seed", "1"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 0);
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Blinds: P1 posts 10, P2 posts 20"), "{}", stdout);
}

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "3", "--games", "4"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "one summary per difficulty");
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).expect("invalid json");
        assert_eq!(v["games"], 4);
        let results = v["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        for r in results {
            assert!(r["winner"] == "Player" || r["winner"] == "Enemy");
            assert!(r["stats"]["accuracy_percent"].as_u64().unwrap() <= 100);
        }
    }
}

#[test]
fn sim_impossible_always_wins() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "11", "--games", "3", "--difficulty", "impossible"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["difficulty"], "impossible");
    assert_eq!(v["enemy_wins"], 3);
    for r in v["results"].as_array().unwrap() {
        assert_eq!(r["stats"]["turns"], 16);
    }
}

#[test]
fn sim_verbose_logs_events() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "5", "--games", "1", "--difficulty", "easy", "--verbose"])
        .env("SHIPSINKERS_LOG", "info")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("BattleStarted"), "missing event log: {}", stderr);
    assert_eq!(stderr.matches("game over").count(), 1);

    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout.lines().count(), 1);
}

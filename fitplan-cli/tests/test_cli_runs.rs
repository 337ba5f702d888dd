use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fitplan-test-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn fitplan(home: &PathBuf) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fitplan"));
    cmd.env("FITPLAN_HOME", home).env_remove("FITPLAN_LOG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_interactive_plan_prints_three_blocks() {
    let home = scratch_dir("interactive");
    let mut child = fitplan(&home)
        .arg("plan")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"muscle_gain\nketo\nnone\nvery_active\n30\nmale\n175\n70\nknee_pain\nDONE\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("== Meal Plan =="));
    assert!(stdout.contains("== Workout Plan =="));
    assert!(stdout.contains("== Health Tips =="));
    assert!(stdout.contains("Wednesday (45 minutes)"));
    assert!(stdout.contains("Modification for Squats: Chair Squats"));
}

#[test]
fn test_profile_file_json_output() {
    let home = scratch_dir("json");
    let profile = home.join("profile.toml");
    std::fs::write(
        &profile,
        r#"
goal = "weight_loss"
diet = "vegan"
activity = "sedentary"
age = 30
gender = "male"
height_cm = 175.0
weight_kg = 70.0
health_conditions = ["lower_back_issues"]
"#,
    )
    .unwrap();

    let out = fitplan(&home)
        .args(["plan", "--format", "json", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let bmr = 88.362 + 13.397 * 70.0 + 4.799 * 175.0 - 5.677 * 30.0;
    let expected = bmr * 1.2 - 500.0;
    let got = v["nutrition"]["daily_calories"].as_f64().unwrap();
    assert!((got - expected).abs() < 0.01);
    assert_eq!(v["fitness_plan"]["exercise_modifications"][0]["original"], "Deadlifts");
}

#[test]
fn test_invalid_profile_file_is_rejected() {
    let home = scratch_dir("invalid");
    let profile = home.join("bad.toml");
    std::fs::write(
        &profile,
        "goal = \"maintenance\"\ndiet = \"other\"\nactivity = \"sedentary\"\nage = 30\ngender = \"female\"\nheight_cm = 0.0\nweight_kg = 60.0\n",
    )
    .unwrap();

    let out = fitplan(&home)
        .args(["guide", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("height must be greater than zero"));
}

#[test]
fn test_resources_text() {
    let home = scratch_dir("resources");
    let out = fitplan(&home).arg("resources").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("== Mindfulness & Mental Health =="));
}

const MIXED_CASE_PROFILE: &str = r#"
goal = "Weight_Loss"
diet = "VEGAN"
activity = "lightly active"
age = 41
gender = "other"
height_cm = 168.0
weight_kg = 72.5
health_conditions = [" Knee_Pain ", ""]
"#;

#[test]
fn test_config_strict_reasks_interactive_choice() {
    let home = scratch_dir("config-strict");
    std::fs::write(home.join("config.toml"), "[input]\nstrict = true\n").unwrap();
    let mut child = fitplan(&home)
        .arg("plan")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"shred\nweight_loss\nketo\n\nsedentary\n30\nmale\n175\n70\ndone\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("unknown goal 'shred'"));
    assert!(stdout.contains("Monday (30 minutes)"));
}

#[test]
fn test_profile_file_is_lenient_by_default() {
    let home = scratch_dir("profile-lenient");
    let profile = home.join("profile.toml");
    std::fs::write(&profile, MIXED_CASE_PROFILE).unwrap();

    let out = fitplan(&home)
        .args(["plan", "--format", "json", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["nutrition"]["macros"]["protein"], 25);
    assert_eq!(v["fitness_plan"]["exercise_modifications"][0]["original"], "Squats");
    assert_eq!(
        v["fitness_plan"]["workout_schedule"]["sessions"]["Friday"]["duration_minutes"],
        30
    );
}

#[test]
fn test_profile_file_honours_strict_flag() {
    let home = scratch_dir("profile-strict-flag");
    let profile = home.join("profile.toml");
    std::fs::write(&profile, MIXED_CASE_PROFILE).unwrap();

    let out = fitplan(&home)
        .args(["guide", "--strict", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown gender 'other'"));
}

#[test]
fn test_profile_file_honours_strict_config() {
    let home = scratch_dir("profile-strict-config");
    std::fs::write(home.join("config.toml"), "[input]\nstrict = true\n").unwrap();
    let profile = home.join("profile.toml");
    std::fs::write(&profile, MIXED_CASE_PROFILE).unwrap();

    let out = fitplan(&home)
        .args(["plan", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown gender 'other'"));
}

#[test]
fn test_version_carries_build_revision() {
    let home = scratch_dir("version");
    let out = fitplan(&home).arg("--version").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with(&format!("fitplan {} (", env!("CARGO_PKG_VERSION"))));
    assert!(stdout.trim_end().ends_with(')'));
}

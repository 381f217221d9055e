use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skill-share"))
        .args(args)
        .output()
        .expect("failed to execute skill-share binary")
}

fn write_skill_dir(temp_dir: &TempDir) -> std::path::PathBuf {
    let skill_path = temp_dir.path().join("demo-skill");
    fs::create_dir_all(&skill_path).unwrap();
    fs::write(
        skill_path.join("SKILL.md"),
        "---\nname: demo-skill\ndescription: A demo skill\n---\n",
    )
    .unwrap();
    skill_path
}

#[test]
fn validate_reports_skill_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let skill_path = write_skill_dir(&temp_dir);

    let output = run_binary(&["validate", skill_path.to_str().unwrap()]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("Skill: demo-skill"));
    assert!(stdout.contains("Description: A demo skill"));
    assert!(stdout.contains("Skill directory is valid"));
}

#[test]
fn validate_fails_with_nonzero_exit_for_a_broken_skill() {
    let temp_dir = TempDir::new().unwrap();
    let skill_path = temp_dir.path().join("broken");
    fs::create_dir_all(&skill_path).unwrap();

    let output = run_binary(&["validate", skill_path.to_str().unwrap()]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("missing required file"));
}

#[test]
fn pack_then_unpack_round_trips_a_skill() {
    let temp_dir = TempDir::new().unwrap();
    let skill_path = write_skill_dir(&temp_dir);
    let archive_path = temp_dir.path().join("demo-skill.zip");
    let dest_path = temp_dir.path().join("restored");

    let pack_output = run_binary(&[
        "pack",
        skill_path.to_str().unwrap(),
        archive_path.to_str().unwrap(),
    ]);
    let pack_stdout = String::from_utf8(pack_output.stdout).unwrap();

    assert!(pack_output.status.success());
    assert!(pack_stdout.contains("Skill: demo-skill"));
    assert!(pack_stdout.contains("Successfully packed skill!"));
    assert!(archive_path.exists());

    let unpack_output = run_binary(&[
        "unpack",
        archive_path.to_str().unwrap(),
        dest_path.to_str().unwrap(),
    ]);
    let unpack_stdout = String::from_utf8(unpack_output.stdout).unwrap();

    assert!(unpack_output.status.success());
    assert!(unpack_stdout.contains("Skill: demo-skill"));
    assert!(unpack_stdout.contains("Successfully unpacked skill to:"));
    assert!(dest_path.join("SKILL.md").exists());
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shapeboard_cmd() -> Command {
    Command::cargo_bin("shapeboard").expect("binary exists")
}

#[test]
fn shapeboard_help_prints_usage() {
    shapeboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay pointer gestures and toolbar commands",
        ))
        .stdout(predicate::str::contains("--no-config"));
}

#[test]
fn replays_script_from_stdin() {
    shapeboard_cmd()
        .arg("--no-config")
        .write_stdin("rectangle\npress 10 10\ndrag 30 20 lock\nrelease\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[draw] [rectangle] [orange] [outline]"))
        .stdout(predicate::str::contains(
            "rectangle x=10 y=10 w=10 h=10 color=orange fill=false",
        ));
}

#[test]
fn replays_script_file_in_paint_order() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("gestures.txt");
    std::fs::write(
        &script,
        "# two figures, then recolor the first\n\
         ellipse\n\
         press 10 10\n\
         drag 20 20\n\
         release\n\
         triangle\n\
         press 40 40\n\
         drag 50 60\n\
         release\n\
         select\n\
         press 15 15\n\
         color\n",
    )
    .unwrap();

    shapeboard_cmd()
        .arg("--no-config")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            "(?s)\\* ellipse x=10 y=10 w=10 h=10 color=blue.*  triangle x=40 y=40 w=10 h=20 color=orange",
        )
        .unwrap());
}

#[test]
fn unknown_command_is_not_fatal() {
    shapeboard_cmd()
        .arg("--no-config")
        .env("RUST_LOG", "warn")
        .write_stdin("lasso\npress 5 5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("figure type 'lasso' is not supported"))
        .stdout(predicate::str::contains("* line x=5 y=5 w=0 h=0"));
}

#[test]
fn malformed_script_fails_with_line_number() {
    shapeboard_cmd()
        .arg("--no-config")
        .write_stdin("press 1 1\ndrag nowhere 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid script line 2"));
}

#[test]
fn config_file_sets_starting_options() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("shapeboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[drawing]\ndefault_tool = \"moon\"\ndefault_fill = true\npalette = [\"green\", \"red\"]\n",
    )
    .unwrap();

    shapeboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .write_stdin("press 3 4\ndrag 13 24\nrelease\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[draw] [moon] [green] [filled]"))
        .stdout(predicate::str::contains(
            "moon x=3 y=4 w=10 h=20 color=green fill=true",
        ));
}

#[test]
fn explicit_config_path_conflicts_with_no_config() {
    shapeboard_cmd()
        .args(["--no-config", "--config", "unused.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

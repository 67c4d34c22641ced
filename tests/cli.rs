use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn tokenize_fixture_as_raw() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg(fixture_path("pick_part.ls"));

    let output_pred = predicate::str::contains("Token.Keyword.Declaration\t'/PROG'")
        .and(predicate::str::contains("Token.Name.Label\t'LBL'"))
        .and(predicate::str::contains("Token.Error").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn text_format_reproduces_input() {
    let fixture = fixture_path("set_speed.ls");
    let source = std::fs::read_to_string(&fixture).unwrap();

    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg(&fixture).arg("--format").arg("text");

    cmd.assert().success().stdout(source);
}

#[test]
fn json_format_is_parseable() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg("-").arg("-f").arg("json").write_stdin("CALL A ;");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0]["kind"], "Keyword");
    assert_eq!(tokens[0]["text"], "CALL");
    assert_eq!(tokens[4]["kind"], "Punctuation");
}

#[test]
fn lexer_can_be_chosen_by_alias() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg("-").arg("--lexer").arg("text").write_stdin("CALL A ;\n");

    cmd.assert()
        .success()
        .stdout("Token.Text\t'CALL A ;\\n'\n");
}

#[test]
fn unknown_lexer_fails() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg(fixture_path("pick_part.ls")).arg("-l").arg("karel");

    cmd.assert().failure().stderr(
        predicate::str::contains("Unknown lexer 'karel'")
            .and(predicate::str::contains("tp, tpp, tpe")),
    );
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg(fixture_path("pick_part.ls")).arg("-f").arg("html");

    cmd.assert().failure().stderr(
        predicate::str::contains("Format 'html' not found")
            .and(predicate::str::contains("Available formats:")),
    );
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg(fixture_path("missing.ls"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn config_file_sets_defaults() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        config,
        "[lexer]\nensurenl = true\n\n[output]\nformat = \"text\""
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg("-")
        .arg("--config")
        .arg(config.path())
        .write_stdin("CALL A ;");

    cmd.assert().success().stdout("CALL A ;\n");
}

#[test]
fn flags_override_config_file() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(config, "[output]\nformat = \"text\"").unwrap();

    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg("-")
        .arg("-c")
        .arg(config.path())
        .arg("-f")
        .arg("raw")
        .write_stdin("CALL");

    cmd.assert()
        .success()
        .stdout("Token.Keyword\t'CALL'\n");
}

#[test]
fn list_lexers() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg("--list-lexers");

    cmd.assert().success().stdout(
        predicate::str::contains("TP (TpLexer)")
            .and(predicate::str::contains("aliases:   tp, tpp, tpe"))
            .and(predicate::str::contains("filenames: *.ls"))
            .and(predicate::str::contains("Text only (TextLexer)")),
    );
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("tplex");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("raw")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml"))
            .and(predicate::str::contains("text")),
    );
}

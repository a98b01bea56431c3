use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::process::Output;
use tempfile::TempDir;

const LIST: &str = "• John Doe: 01712345678\nNo number here\n> 01812345678\n";

fn run(home: &TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = cargo_bin_cmd!("contactum");
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    cmd.output().expect("run command")
}

fn run_ok(home: &TempDir, args: &[&str], stdin: Option<&str>) -> String {
    let output = run(home, args, stdin);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn cli_convert_writes_vcf_file() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("list.txt");
    let out = temp.path().join("out.vcf");
    fs::write(&input, LIST).expect("write input");

    run_ok(
        &temp,
        &[
            "convert",
            input.to_str().expect("input path"),
            "--out",
            out.to_str().expect("out path"),
        ],
        None,
    );

    let data = fs::read_to_string(&out).expect("read output");
    assert_eq!(
        data,
        "BEGIN:VCARD\nVERSION:2.1\nN:John Doe;;;\nTEL;CELL;PREF:+8801712345678\nEND:VCARD\n\
         BEGIN:VCARD\nVERSION:2.1\nN:No Name;;;\nTEL;CELL;PREF:+8801812345678\nEND:VCARD"
    );
}

#[test]
fn cli_convert_reads_stdin_and_prints_vcf() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_ok(&temp, &["convert"], Some("Alice 8801712345678"));
    assert_eq!(
        stdout,
        "BEGIN:VCARD\nVERSION:2.1\nN:Alice;;;\nTEL;CELL;PREF:+8801712345678\nEND:VCARD\n"
    );
}

#[test]
fn cli_convert_into_directory_uses_configured_name() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[output]\nvcf_file = \"phonebook.vcf\"\n").expect("write config");
    let out_dir = temp.path().join("exports");
    fs::create_dir(&out_dir).expect("create dir");

    let stdout = run_ok(
        &temp,
        &[
            "--config",
            config.to_str().expect("config path"),
            "--json",
            "convert",
            "-",
            "--out",
            out_dir.to_str().expect("out dir"),
        ],
        Some(LIST),
    );

    let report: Value = serde_json::from_str(&stdout).expect("parse json");
    assert_eq!(report["format"], "vcf");
    assert_eq!(report["media_type"], "text/vcard;charset=utf-8");
    assert_eq!(report["count"], 2);
    assert!(out_dir.join("phonebook.vcf").exists());
}

#[test]
fn cli_convert_without_matches_prints_notice() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("out.vcf");
    let output = run(
        &temp,
        &["convert", "--out", out.to_str().expect("out path")],
        Some("nothing useful\n"),
    );
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("No valid contacts found to generate VCF."));
    assert!(!out.exists());
}

#[test]
fn cli_read_round_trips_converted_file() {
    let temp = TempDir::new().expect("temp dir");
    let vcf = run_ok(&temp, &["convert"], Some(LIST));
    let stdout = run_ok(&temp, &["--json", "read"], Some(&vcf));

    let contacts: Value = serde_json::from_str(&stdout).expect("parse json");
    let items = contacts.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "John Doe");
    assert_eq!(items[0]["phone"], "+8801712345678");
    assert_eq!(items[1]["name"], "No Name");
}

#[test]
fn cli_read_profiles_differ_on_incomplete_cards() {
    let temp = TempDir::new().expect("temp dir");
    let data = "BEGIN:VCARD\nN:Nila;;;\nEND:VCARD\nBEGIN:VCARD\nN:Doe;John;;;\nTEL;CELL:01712345678\nEND:VCARD\n";

    let lenient: Value =
        serde_json::from_str(&run_ok(&temp, &["--json", "read"], Some(data))).expect("json");
    assert_eq!(lenient.as_array().expect("array").len(), 2);
    assert_eq!(lenient[0]["phone"], "Unknown");

    let strict: Value = serde_json::from_str(&run_ok(
        &temp,
        &["--json", "--profile", "strict", "read"],
        Some(data),
    ))
    .expect("json");
    let items = strict.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "John Doe");
    assert_eq!(items[0]["phone"], "01712345678");
}

#[test]
fn cli_read_writes_text_export() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_ok(
        &temp,
        &["read", "--out", temp.path().to_str().expect("dir")],
        Some("BEGIN:VCARD\nN:Alice;;;\nTEL;CELL;PREF:+8801712345678\nEND:VCARD"),
    );
    assert!(stdout.contains("Wrote 1 contacts"));
    let text =
        fs::read_to_string(temp.path().join("extracted_contacts.txt")).expect("read export");
    assert_eq!(text, "Name: Alice\nPhone: +8801712345678\n---\n");
}

#[test]
fn cli_read_missing_file_fails() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.vcf");
    let output = run(&temp, &["read", missing.to_str().expect("path")], None);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("missing.vcf"));
}

#[test]
fn cli_rejects_unknown_profile() {
    let temp = TempDir::new().expect("temp dir");
    let output = run(&temp, &["--profile", "loose", "normalize", "01712345678"], None);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_normalize_honours_profile() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_ok(
        &temp,
        &["normalize", "০১৭১২৩৪৫৬৭৮", "8801712345678", "12345"],
        None,
    );
    assert_eq!(stdout, "+8801712345678\n+8801712345678\n+88012345\n");

    let stdout = run_ok(&temp, &["--profile", "strict", "normalize", "12345"], None);
    assert_eq!(stdout, "12345\n");
}

#[test]
fn cli_profile_from_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("contactum");
    fs::create_dir(&dir).expect("create config dir");
    fs::write(dir.join("config.toml"), "profile = \"strict\"\n").expect("write config");

    let stdout = run_ok(&temp, &["normalize", "12345"], None);
    assert_eq!(stdout, "12345\n");
}

//! End-to-end tests spawning the fileconv binary.

use std::process::Command;

fn describe_output(args: &[&str]) -> serde_json::Value {
    let out = Command::new(env!("CARGO_BIN_EXE_fileconv"))
        .args(args)
        .output()
        .expect("failed to spawn fileconv");
    assert!(out.status.success(), "exit status: {:?}", out.status);
    serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON")
}

#[test]
fn describe_emits_schema_and_exits_zero() {
    let json = describe_output(&["--describe"]);

    assert_eq!(json["specVersion"], "2026-02-07");
    assert_eq!(json["name"], "fileconv");
    assert_eq!(json["description"], "Convert files between formats");

    let names: Vec<&str> = json["commands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["convert", "db migrate", "db rollback"]);
}

#[test]
fn describe_flag_works_from_a_subcommand() {
    let json = describe_output(&["db", "migrate", "--describe"]);
    assert_eq!(json["name"], "fileconv");
}

#[test]
fn schema_carries_annotations_and_default_policy() {
    let json = describe_output(&["--describe"]);
    let commands = json["commands"].as_array().unwrap();

    let convert = &commands[0];
    assert_eq!(convert["stdin"]["contentType"], "text/plain");
    assert_eq!(convert["stdout"]["schema"]["type"], "object");
    assert_eq!(
        convert["examples"][0]["command"],
        "fileconv convert data.json data.csv --format csv"
    );

    let args = convert["args"].as_array().unwrap();
    assert_eq!(args[0]["name"], "input");
    assert_eq!(args[0]["required"], true);
    assert_eq!(args[1]["name"], "output");
    assert!(args[1].get("required").is_none());

    let format = args.iter().find(|a| a["name"] == "--format").unwrap();
    assert_eq!(format["type"], "enum");
    assert_eq!(format["default"], "json");
    assert_eq!(format["values"][2], "yaml");

    // Zero/false defaults are indistinguishable from unset.
    let jobs = args.iter().find(|a| a["name"] == "--jobs").unwrap();
    assert!(jobs.get("default").is_none());
    let force = args.iter().find(|a| a["name"] == "--force").unwrap();
    assert!(force.get("default").is_none());

    let migrate = &commands[1];
    assert_eq!(migrate["auth"]["required"], true);
    assert_eq!(migrate["auth"]["scopes"][0], "db:admin");

    let rollback = &commands[2];
    let steps = rollback["args"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "--steps")
        .unwrap();
    assert_eq!(steps["default"], "1");

    assert_eq!(json["auth"]["envVar"], "FILECONV_TOKEN");
    assert_eq!(json["auth"]["providers"][0]["type"], "api_key");
}

#[test]
fn reserved_and_hidden_entities_are_absent() {
    let json = describe_output(&["--describe"]);

    for cmd in json["commands"].as_array().unwrap() {
        assert_ne!(cmd["name"], "help");
        assert_ne!(cmd["name"], "completion");
        assert_ne!(cmd["name"], "selftest");
        if let Some(args) = cmd["args"].as_array() {
            for arg in args {
                assert_ne!(arg["name"], "--help");
                assert_ne!(arg["name"], "--describe");
                assert_ne!(arg["name"], "--version");
                assert_ne!(arg["name"], "--scratch-dir");
            }
        }
    }
}

#[test]
fn normal_dispatch_still_works() {
    let out = Command::new(env!("CARGO_BIN_EXE_fileconv"))
        .args(["convert", "in.txt", "--format", "csv"])
        .output()
        .expect("failed to spawn fileconv");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("in.txt"));
    assert!(stdout.contains("csv"));
}

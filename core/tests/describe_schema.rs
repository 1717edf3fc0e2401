//! End-to-end describe output tests over a hand-built command tree.

use tool_describe_core::*;

fn sample_tree() -> CommandNode {
    CommandNode::new("fileconv")
        .with_about("Convert files between formats")
        .with_version("1.2.0")
        .with_flag(FlagSpec::new("verbose", FlagKind::Bool).with_help("Verbose logging"))
        .with_child(
            CommandNode::new("convert")
                .with_about("Convert a single file")
                .with_usage("convert <input> [output]")
                .with_flag(
                    FlagSpec::new("format", FlagKind::Text)
                        .with_default("json")
                        .with_help("Output format")
                        .with_values(&["json", "csv", "yaml"]),
                )
                .with_flag(FlagSpec::new("jobs", FlagKind::Integer).with_default("0"))
                .with_flag(FlagSpec::new("force", FlagKind::Bool).with_default("false"))
                .with_flag(FlagSpec::new("scratch-dir", FlagKind::Text).hidden()),
        )
        .with_child(
            CommandNode::new("db")
                .with_about("Database maintenance")
                .with_child(
                    CommandNode::new("migrate")
                        .with_about("Apply pending migrations")
                        .with_flag(FlagSpec::new("dry-run", FlagKind::Bool).with_default("true")),
                ),
        )
        .with_child(CommandNode::new("help"))
        .with_child(CommandNode::new("completion"))
        .with_child(CommandNode::new("selftest").hidden())
}

#[test]
fn describe_flattens_and_filters_the_tree() {
    let schema = describe(&sample_tree(), None);

    assert_eq!(schema.spec_version, SPEC_VERSION);
    assert_eq!(schema.name, "fileconv");
    assert_eq!(schema.version, "1.2.0");
    assert_eq!(schema.description, "Convert files between formats");

    let names: Vec<&str> = schema.commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["convert", "db migrate"]);
}

#[test]
fn describe_applies_default_and_enum_policy() {
    let schema = describe(&sample_tree(), None);
    let convert = &schema.commands[0];

    // Positionals first, then declared flags; hidden flag dropped.
    let names: Vec<&str> = convert.args.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["input", "output", "--format", "--jobs", "--force"]);

    let format = &convert.args[2];
    assert_eq!(format.arg_type, ArgType::Enum);
    assert_eq!(format.values, vec!["json", "csv", "yaml"]);
    assert_eq!(format.default, Some("json".into()));

    // Zero and false defaults are indistinguishable from unset.
    assert_eq!(convert.args[3].default, None);
    assert_eq!(convert.args[4].default, None);

    // A true boolean default is surfaced as JSON true.
    let migrate = &schema.commands[1];
    assert_eq!(migrate.args[0].name, "--dry-run");
    assert_eq!(migrate.args[0].default, Some(serde_json::Value::Bool(true)));
}

#[test]
fn describe_output_is_repeatable() {
    let tree = sample_tree();
    let first = serde_json::to_string(&describe(&tree, None)).unwrap();
    let second = serde_json::to_string(&describe(&tree, None)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn annotations_populate_exactly_their_fields() {
    let opts = DescribeOptions::new()
        .with_command(
            "convert",
            CommandAnnotation::new()
                .with_stdin(IODescriptor {
                    content_type: "text/plain".to_string(),
                    description: "Raw input when no file is given".to_string(),
                    schema: None,
                })
                .with_stdout(IODescriptor {
                    content_type: "application/json".to_string(),
                    description: "Conversion report".to_string(),
                    schema: Some(serde_json::json!({"type": "object"})),
                })
                .with_example(Example {
                    description: "Convert to CSV".to_string(),
                    command: "fileconv convert in.json out.csv".to_string(),
                    output: String::new(),
                })
                .with_auth(CommandAuth {
                    required: true,
                    scopes: vec!["convert:write".to_string()],
                }),
        )
        .with_auth(AuthConfig {
            required: true,
            env_var: "FILECONV_TOKEN".to_string(),
            providers: vec![AuthProvider {
                id: "default".to_string(),
                provider_type: "api_key".to_string(),
                ..Default::default()
            }],
        });

    let schema = describe(&sample_tree(), Some(&opts));

    let convert = &schema.commands[0];
    assert_eq!(convert.stdin.as_ref().unwrap().content_type, "text/plain");
    assert!(convert.stdout.as_ref().unwrap().schema.is_some());
    assert_eq!(convert.examples.len(), 1);
    assert!(convert.auth.as_ref().unwrap().required);

    // The unannotated command is untouched.
    let migrate = &schema.commands[1];
    assert!(migrate.stdin.is_none());
    assert!(migrate.stdout.is_none());
    assert!(migrate.examples.is_empty());
    assert!(migrate.auth.is_none());

    assert_eq!(schema.auth.as_ref().unwrap().env_var, "FILECONV_TOKEN");
}

#[test]
fn schema_roundtrips_through_json() {
    let opts = DescribeOptions::new().with_command(
        "db migrate",
        CommandAnnotation::new().with_auth(CommandAuth {
            required: true,
            scopes: vec!["db:admin".to_string()],
        }),
    );

    let schema = describe(&sample_tree(), Some(&opts));
    let json = serde_json::to_string_pretty(&schema).unwrap();
    let back: ToolSchema = serde_json::from_str(&json).unwrap();

    assert_eq!(back, schema);
    assert!(back.commands[0].auth.is_none());
    assert!(back.commands[1].auth.is_some());
}

#[test]
fn json_surface_uses_documented_keys() {
    let schema = describe(&sample_tree(), None);
    let json = serde_json::to_value(&schema).unwrap();

    assert!(json.get("specVersion").is_some());
    assert!(json.get("commands").unwrap().is_array());
    assert!(json.get("auth").is_none());

    let convert = &json["commands"][0];
    assert_eq!(convert["name"], "convert");
    assert_eq!(convert["args"][0]["type"], "string");
    assert_eq!(convert["args"][0]["required"], true);
    assert!(convert["args"][1].get("required").is_none());
}

#[test]
fn annotated_enum_via_node_helper_overrides_inference() {
    let mut node = CommandNode::new("render")
        .with_about("Render a report")
        .with_flag(FlagSpec::new("theme", FlagKind::Text));
    node.annotate_enum("theme", &["light", "dark"]);

    let schema = describe(&node, None);
    let theme = &schema.commands[0].args[0];
    assert_eq!(theme.arg_type, ArgType::Enum);
    assert_eq!(theme.values, vec!["light", "dark"]);
    assert!(validate_schema(&schema).is_empty());
}

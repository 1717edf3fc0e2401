//! `fileconv` — a worked example of a host tool exposing `--describe`.
//!
//! The tool itself is a stub; the point is the wiring: build the clap tree,
//! register the describe flag, check it right after parsing, and only then
//! dispatch to normal command handling.

use clap::{Arg, ArgAction, ArgMatches, Command};
use tool_describe_clap::{run_describe, with_describe};
use tool_describe_core::{
    AuthConfig, AuthProvider, CommandAnnotation, CommandAuth, DescribeOptions, Example,
    IODescriptor,
};

fn build_cli() -> Command {
    Command::new("fileconv")
        .about("Convert files between formats")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Verbose logging"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a single file")
                .arg(Arg::new("input").required(true).help("Input path"))
                .arg(Arg::new("output").help("Output path, defaults to stdout"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["json", "csv", "yaml"])
                        .default_value("json")
                        .help("Output format"),
                )
                .arg(
                    Arg::new("jobs")
                        .long("jobs")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("0")
                        .help("Parallel conversion jobs, 0 = auto"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Overwrite an existing output file"),
                )
                .arg(Arg::new("scratch-dir").long("scratch-dir").hide(true)),
        )
        .subcommand(
            Command::new("db")
                .about("Conversion-history database maintenance")
                .subcommand(
                    Command::new("migrate")
                        .about("Apply pending migrations")
                        .arg(
                            Arg::new("dry-run")
                                .long("dry-run")
                                .action(ArgAction::SetTrue)
                                .help("Print migrations without applying them"),
                        ),
                )
                .subcommand(
                    Command::new("rollback")
                        .about("Undo recent migrations")
                        .arg(
                            Arg::new("steps")
                                .long("steps")
                                .value_parser(clap::value_parser!(u32))
                                .default_value("1")
                                .help("How many migrations to undo"),
                        ),
                ),
        )
        .subcommand(Command::new("selftest").hide(true))
}

fn describe_options() -> DescribeOptions {
    DescribeOptions::new()
        .with_command(
            "convert",
            CommandAnnotation::new()
                .with_stdin(IODescriptor {
                    content_type: "text/plain".to_string(),
                    description: "File content when no input path is given".to_string(),
                    schema: None,
                })
                .with_stdout(IODescriptor {
                    content_type: "application/json".to_string(),
                    description: "Conversion report".to_string(),
                    schema: Some(serde_json::json!({
                        "type": "object",
                        "properties": {
                            "written": {"type": "string"},
                            "records": {"type": "integer"}
                        }
                    })),
                })
                .with_example(Example {
                    description: "Convert a JSON file to CSV".to_string(),
                    command: "fileconv convert data.json data.csv --format csv".to_string(),
                    output: String::new(),
                }),
        )
        .with_command(
            "db migrate",
            CommandAnnotation::new().with_auth(CommandAuth {
                required: true,
                scopes: vec!["db:admin".to_string()],
            }),
        )
        .with_auth(AuthConfig {
            required: false,
            env_var: "FILECONV_TOKEN".to_string(),
            providers: vec![AuthProvider {
                id: "default".to_string(),
                provider_type: "api_key".to_string(),
                display_name: "API key".to_string(),
                instructions: "Set FILECONV_TOKEN to an API key".to_string(),
                ..Default::default()
            }],
        })
}

fn main() {
    let cmd = with_describe(build_cli());
    let matches = cmd.clone().get_matches();
    run_describe(&cmd, &matches, Some(&describe_options()));

    let result = match matches.subcommand() {
        Some(("convert", sub)) => run_convert(sub),
        Some(("db", sub)) => run_db(sub),
        Some(("selftest", _)) => {
            println!("selftest ok");
            Ok(())
        }
        _ => {
            let _ = cmd.clone().print_help();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_convert(matches: &ArgMatches) -> Result<(), String> {
    let input = matches
        .get_one::<String>("input")
        .ok_or("missing input path")?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json");

    match matches.get_one::<String>("output") {
        Some(output) => println!("converting {input} -> {output} ({format})"),
        None => println!("converting {input} -> stdout ({format})"),
    }
    Ok(())
}

fn run_db(matches: &ArgMatches) -> Result<(), String> {
    match matches.subcommand() {
        Some(("migrate", sub)) => {
            if sub.get_flag("dry-run") {
                println!("migrate: dry run, nothing applied");
            } else {
                println!("migrate: up to date");
            }
            Ok(())
        }
        Some(("rollback", sub)) => {
            let steps = sub.get_one::<u32>("steps").copied().unwrap_or(1);
            println!("rollback: undoing {steps} migration(s)");
            Ok(())
        }
        _ => Err("missing db subcommand".to_string()),
    }
}

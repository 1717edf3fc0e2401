//! clap adapter for tool self-description.
//!
//! Reflects a [`clap::Command`] tree into the framework-agnostic
//! [`CommandNode`] model of `tool-describe-core`, and wires the reserved
//! `--describe` flag into a host tool: when the flag is set, the tool prints
//! its JSON schema to stdout and exits.
//!
//! # Example
//!
//! ```
//! use clap::{Arg, ArgAction, Command};
//! use tool_describe_clap::{describe, with_describe};
//!
//! let cmd = with_describe(
//!     Command::new("fileconv")
//!         .about("Convert files between formats")
//!         .version("1.2.0")
//!         .subcommand(
//!             Command::new("convert")
//!                 .about("Convert a single file")
//!                 .arg(Arg::new("input").required(true))
//!                 .arg(
//!                     Arg::new("force")
//!                         .long("force")
//!                         .action(ArgAction::SetTrue)
//!                         .help("Overwrite output"),
//!                 ),
//!         ),
//! );
//!
//! let schema = describe(&cmd, None);
//! assert_eq!(schema.name, "fileconv");
//! assert_eq!(schema.commands[0].name, "convert");
//! ```
//!
//! In `main`, call [`run_describe`] right after parsing:
//!
//! ```no_run
//! use clap::Command;
//! use tool_describe_clap::{run_describe, with_describe};
//!
//! let cmd = with_describe(Command::new("fileconv"));
//! let matches = cmd.clone().get_matches();
//! run_describe(&cmd, &matches, None);
//! // normal dispatch continues here
//! ```

use std::io::Write;
use std::sync::LazyLock;

use clap::builder::ValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;

use tool_describe_core::{CommandNode, DescribeOptions, FlagKind, FlagSpec, ToolSchema};

pub use tool_describe_core::DESCRIBE_FLAG;

/// Adds the reserved `--describe` flag to a command.
///
/// The flag is global so `tool sub --describe` parses, but the schema it
/// triggers always covers the whole tool. The flag itself never appears in
/// describe output.
pub fn with_describe(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(DESCRIBE_FLAG)
            .long(DESCRIBE_FLAG)
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Output machine-readable JSON schema for this tool"),
    )
}

/// Extracts a [`ToolSchema`] from a clap command tree.
///
/// Pure function with no side effects; useful for testing or programmatic
/// access to the schema. The command is built first so lazily materialized
/// pieces (the auto help subcommand, propagated settings) are visible and
/// can be filtered the same way on every call.
pub fn describe(cmd: &Command, opts: Option<&DescribeOptions>) -> ToolSchema {
    let mut built = cmd.clone();
    built.build();
    let root = to_command_node(&built, &[]);
    tool_describe_core::describe(&root, opts)
}

/// Prints the schema and exits when `--describe` was passed.
///
/// No-op when the flag is unset or was never registered (the lookup never
/// panics). On success the schema goes to stdout and the process exits 0;
/// a serialization failure is reported to stderr and exits 1.
pub fn run_describe(cmd: &Command, matches: &ArgMatches, opts: Option<&DescribeOptions>) {
    let requested = matches
        .try_get_one::<bool>(DESCRIBE_FLAG)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);
    if !requested {
        return;
    }

    let schema = describe(cmd, opts);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => {
            let mut stdout = std::io::stdout();
            // Treat a broken pipe the same as any other write failure.
            if writeln!(stdout, "{json}").is_err() {
                std::process::exit(1);
            }
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: failed to serialize describe schema: {err}");
            std::process::exit(1);
        }
    }
}

/// Reflects one clap command (and its subtree) into a [`CommandNode`].
///
/// `inherited` carries ancestor flags declared with `.global(true)`; clap
/// only applies those at match time, so the adapter folds them into each
/// descendant's flag list to mirror how the tool actually behaves.
pub fn to_command_node(cmd: &Command, inherited: &[FlagSpec]) -> CommandNode {
    let mut node = CommandNode::new(cmd.get_name())
        .with_about(&styled(cmd.get_about()))
        .with_long_about(&styled(cmd.get_long_about()))
        .with_usage(&synthesize_usage(cmd));

    if let Some(version) = cmd.get_version() {
        node = node.with_version(version);
    }
    if cmd.is_hide_set() {
        node = node.hidden();
    }

    for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
        node = node.with_flag(to_flag_spec(arg));
    }
    for flag in inherited {
        if node.find_flag(&flag.name).is_none() {
            node = node.with_flag(flag.clone());
        }
    }

    let mut globals: Vec<FlagSpec> = inherited.to_vec();
    for arg in cmd
        .get_arguments()
        .filter(|a| !a.is_positional() && a.is_global_set())
    {
        if !globals.iter().any(|f| f.name == flag_name(arg)) {
            globals.push(to_flag_spec(arg));
        }
    }

    for sub in cmd.get_subcommands() {
        node = node.with_child(to_command_node(sub, &globals));
    }

    node
}

fn styled(text: Option<&clap::builder::StyledStr>) -> String {
    text.map(|s| s.to_string()).unwrap_or_default()
}

fn flag_name(arg: &Arg) -> String {
    arg.get_long()
        .map(str::to_string)
        .unwrap_or_else(|| arg.get_id().as_str().to_string())
}

fn to_flag_spec(arg: &Arg) -> FlagSpec {
    let mut flag = FlagSpec::new(&flag_name(arg), flag_kind(arg));
    flag.default = default_text(arg);
    flag.help = styled(arg.get_help());
    flag.hidden = arg.is_hide_set();
    flag.required = arg.is_required_set();

    let values: Vec<String> = arg
        .get_possible_values()
        .iter()
        .map(|v| v.get_name().to_string())
        .collect();
    if !values.is_empty() {
        debug!(flag = %flag.name, count = values.len(), "possible values become enum annotation");
        flag.values = Some(values);
    }

    flag
}

static INTEGER_PARSERS: LazyLock<[ValueParser; 12]> = LazyLock::new(|| {
    [
        clap::value_parser!(i8).into(),
        clap::value_parser!(i16).into(),
        clap::value_parser!(i32).into(),
        clap::value_parser!(i64).into(),
        clap::value_parser!(i128).into(),
        clap::value_parser!(isize).into(),
        clap::value_parser!(u8).into(),
        clap::value_parser!(u16).into(),
        clap::value_parser!(u32).into(),
        clap::value_parser!(u64).into(),
        clap::value_parser!(u128).into(),
        clap::value_parser!(usize).into(),
    ]
});

static FLOAT_PARSERS: LazyLock<[ValueParser; 2]> = LazyLock::new(|| {
    [
        clap::value_parser!(f32).into(),
        clap::value_parser!(f64).into(),
    ]
});

/// Maps a clap argument to a flag value kind.
///
/// The action is the strongest signal (`SetTrue`/`SetFalse` are switches,
/// `Count` produces an integer, `Append` a list), and any arg that accepts
/// more than one value per occurrence is a list; otherwise the declared
/// value parser's output type decides, and anything unrecognized is text.
/// Types are compared through probe parsers since clap does not expose the
/// parser's output type directly.
fn flag_kind(arg: &Arg) -> FlagKind {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => return FlagKind::Bool,
        ArgAction::Count => return FlagKind::Integer,
        ArgAction::Append => return FlagKind::List,
        _ => {}
    }

    // `.num_args(1..)` is clap's other spelling of a multi-value arg.
    if arg.get_num_args().is_some_and(|r| r.max_values() > 1) {
        return FlagKind::List;
    }

    let id = arg.get_value_parser().type_id();
    if id == ValueParser::bool().type_id() {
        return FlagKind::Bool;
    }
    if INTEGER_PARSERS.iter().any(|p| p.type_id() == id) {
        return FlagKind::Integer;
    }
    if FLOAT_PARSERS.iter().any(|p| p.type_id() == id) {
        return FlagKind::Float;
    }

    FlagKind::Text
}

/// Renders the declared defaults the way the core default policy expects:
/// the textual value for a single default, comma-joined for several, and
/// empty when there are none.
fn default_text(arg: &Arg) -> String {
    let values: Vec<&str> = arg
        .get_default_values()
        .iter()
        .filter_map(|v| v.to_str())
        .collect();
    values.join(",")
}

/// Synthesizes a usage string in the `"name <required> [optional]"`
/// convention from clap's declared positional arguments, so positional
/// inference has one input shape regardless of host framework.
fn synthesize_usage(cmd: &Command) -> String {
    let mut positionals: Vec<&Arg> = cmd.get_positionals().collect();
    if positionals.is_empty() {
        return cmd.get_name().to_string();
    }
    positionals.sort_by_key(|a| a.get_index().unwrap_or(usize::MAX));

    let mut usage = cmd.get_name().to_string();
    for arg in positionals {
        let name = arg.get_id().as_str();
        if arg.is_required_set() {
            usage.push_str(&format!(" <{name}>"));
        } else {
            usage.push_str(&format!(" [{name}]"));
        }
    }
    usage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_kind_from_actions() {
        let switch = Arg::new("force").long("force").action(ArgAction::SetTrue);
        assert_eq!(flag_kind(&switch), FlagKind::Bool);

        let count = Arg::new("verbose").long("verbose").action(ArgAction::Count);
        assert_eq!(flag_kind(&count), FlagKind::Integer);

        let list = Arg::new("tag").long("tag").action(ArgAction::Append);
        assert_eq!(flag_kind(&list), FlagKind::List);
    }

    #[test]
    fn test_flag_kind_from_value_parser() {
        let port = Arg::new("port")
            .long("port")
            .value_parser(clap::value_parser!(u16));
        assert_eq!(flag_kind(&port), FlagKind::Integer);

        let ratio = Arg::new("ratio")
            .long("ratio")
            .value_parser(clap::value_parser!(f64));
        assert_eq!(flag_kind(&ratio), FlagKind::Float);

        let offset = Arg::new("offset")
            .long("offset")
            .value_parser(clap::value_parser!(i128));
        assert_eq!(flag_kind(&offset), FlagKind::Integer);

        let span = Arg::new("span")
            .long("span")
            .value_parser(clap::value_parser!(u128));
        assert_eq!(flag_kind(&span), FlagKind::Integer);

        let name = Arg::new("name").long("name");
        assert_eq!(flag_kind(&name), FlagKind::Text);
    }

    #[test]
    fn test_flag_kind_from_num_args() {
        let tags = Arg::new("tags").long("tags").num_args(1..);
        assert_eq!(flag_kind(&tags), FlagKind::List);

        let pair = Arg::new("pair").long("pair").num_args(2);
        assert_eq!(flag_kind(&pair), FlagKind::List);

        let single = Arg::new("name").long("name").num_args(1);
        assert_eq!(flag_kind(&single), FlagKind::Text);
    }

    #[test]
    fn test_synthesize_usage_orders_positionals() {
        let cmd = Command::new("convert")
            .arg(Arg::new("input").required(true))
            .arg(Arg::new("output"));
        assert_eq!(synthesize_usage(&cmd), "convert <input> [output]");

        let bare = Command::new("status");
        assert_eq!(synthesize_usage(&bare), "status");
    }

    #[test]
    fn test_default_text_joins_multiple_values() {
        let arg = Arg::new("tag")
            .long("tag")
            .action(ArgAction::Append)
            .default_values(["a", "b"]);
        assert_eq!(default_text(&arg), "a,b");

        let none = Arg::new("name").long("name");
        assert_eq!(default_text(&none), "");
    }
}

//! Introspection pipeline: flag extraction, positional inference, tree walk.
//!
//! The pipeline is a pure computation over an externally-owned
//! [`CommandNode`] tree. It walks the tree, filters hidden and reserved
//! entities, reconciles auto-detected flag metadata with caller-supplied
//! [`CommandAnnotation`]s, and produces the flattened descriptor list that
//! [`describe`](crate::describe) wraps in a [`ToolSchema`](crate::ToolSchema).

use tracing::debug;

use crate::{
    ArgDescriptor, ArgType, CommandAnnotation, CommandDescriptor, CommandNode, DescribeOptions,
    FlagKind, FlagSpec, ROOT_COMMAND,
};

/// Reserved name of the describe flag itself.
pub const DESCRIBE_FLAG: &str = "describe";

/// Flag names that never appear in describe output.
const RESERVED_FLAGS: [&str; 3] = ["help", DESCRIBE_FLAG, "version"];

/// Auto-generated commands that never appear in describe output.
const RESERVED_COMMANDS: [&str; 2] = ["help", "completion"];

/// Maps a flag's declared value kind to a schema type tag.
///
/// Independent of the flag's default value; enum and per-command overrides
/// are applied later, on top of this mapping.
///
/// # Examples
///
/// ```
/// use tool_describe_core::{ArgType, FlagKind, FlagSpec, flag_type};
///
/// assert_eq!(flag_type(&FlagSpec::new("jobs", FlagKind::Integer)), ArgType::Integer);
/// assert_eq!(flag_type(&FlagSpec::new("tags", FlagKind::List)), ArgType::Array);
/// ```
pub fn flag_type(flag: &FlagSpec) -> ArgType {
    match flag.kind {
        FlagKind::Bool => ArgType::Boolean,
        FlagKind::Integer => ArgType::Integer,
        FlagKind::Float => ArgType::Number,
        FlagKind::List => ArgType::Array,
        FlagKind::Text => ArgType::String,
    }
}

/// Returns the flag's default as a JSON value, or `None` when the default is
/// the zero value for its kind.
///
/// A false boolean default is indistinguishable from "unset" and is
/// suppressed; only a true default is surfaced, as JSON `true`. Numeric
/// defaults are suppressed when empty or textually zero, and other defaults
/// when empty or the empty-array form `"[]"`. Surfaced non-boolean defaults
/// keep their textual form.
pub fn flag_default(flag: &FlagSpec) -> Option<serde_json::Value> {
    match flag.kind {
        FlagKind::Bool => (flag.default == "true").then(|| serde_json::Value::Bool(true)),
        FlagKind::Integer | FlagKind::Float => {
            if flag.default.is_empty() || flag.default == "0" {
                None
            } else {
                Some(serde_json::Value::String(flag.default.clone()))
            }
        }
        FlagKind::List | FlagKind::Text => {
            if flag.default.is_empty() || flag.default == "[]" {
                None
            } else {
                Some(serde_json::Value::String(flag.default.clone()))
            }
        }
    }
}

/// Builds flag descriptors for a single command node.
///
/// Enumerates the node's own declared flags in declaration order (adapters
/// fold inherited global flags into the same enumeration). Reserved and
/// hidden flags are skipped. The per-command annotation may override
/// individual flag types; a non-empty enum annotation on the flag itself
/// beats everything and forces type `enum`.
pub fn extract_flags(node: &CommandNode, ann: Option<&CommandAnnotation>) -> Vec<ArgDescriptor> {
    let mut args = Vec::new();

    for flag in &node.flags {
        if RESERVED_FLAGS.contains(&flag.name.as_str()) {
            continue;
        }
        if flag.hidden {
            debug!(command = %node.name, flag = %flag.name, "skipping hidden flag");
            continue;
        }

        let mut arg_type = flag_type(flag);
        if let Some(over) = ann.and_then(|a| a.arg_types.get(&flag.name)) {
            arg_type = *over;
        }

        let mut arg = ArgDescriptor {
            name: format!("--{}", flag.name),
            arg_type,
            description: (!flag.help.is_empty()).then(|| flag.help.clone()),
            required: flag.required,
            default: flag_default(flag),
            values: Vec::new(),
        };

        // Out-of-band enum annotation wins over any type decision.
        if let Some(values) = flag.values.as_ref().filter(|v| !v.is_empty()) {
            arg.arg_type = ArgType::Enum;
            arg.values = values.clone();
        }

        args.push(arg);
    }

    args
}

/// Infers positional arg descriptors from a usage string.
///
/// Convention: `"command <required> [optional]"`. The first whitespace token
/// is the command name and is always skipped; tokens matching neither
/// bracket form are ignored. Every inferred arg is typed `string`.
///
/// # Examples
///
/// ```
/// use tool_describe_core::parse_usage_args;
///
/// let args = parse_usage_args("convert <input> [output]");
/// assert_eq!(args.len(), 2);
/// assert_eq!(args[0].name, "input");
/// assert!(args[0].required);
/// assert_eq!(args[1].name, "output");
/// assert!(!args[1].required);
/// ```
pub fn parse_usage_args(usage: &str) -> Vec<ArgDescriptor> {
    let mut args = Vec::new();

    for token in usage.split_whitespace().skip(1) {
        let (name, required) = if token.starts_with('<') && token.ends_with('>') {
            (token.trim_matches(|c| c == '<' || c == '>'), true)
        } else if token.starts_with('[') && token.ends_with(']') {
            (token.trim_matches(|c| c == '[' || c == ']'), false)
        } else {
            continue;
        };

        args.push(ArgDescriptor {
            name: name.to_string(),
            arg_type: ArgType::String,
            required,
            ..Default::default()
        });
    }

    args
}

/// Builds the descriptor for a single leaf command.
///
/// Positional args come from the annotation when it supplies any (full
/// replacement), otherwise from usage-string inference. Flags always come
/// from auto-extraction. stdin/stdout/examples/auth are taken wholly from
/// the annotation when present, otherwise left absent.
pub fn extract_command(
    node: &CommandNode,
    name: &str,
    ann: Option<&CommandAnnotation>,
) -> CommandDescriptor {
    let mut description = node.about.trim();
    if description.is_empty() {
        description = node.long_about.trim();
    }

    let mut cmd = CommandDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        ..Default::default()
    };

    match ann {
        Some(a) if !a.args.is_empty() => cmd.args.extend(a.args.iter().cloned()),
        _ => cmd.args.extend(parse_usage_args(&node.usage)),
    }

    cmd.args.extend(extract_flags(node, ann));

    if let Some(a) = ann {
        cmd.stdin = a.stdin.clone();
        cmd.stdout = a.stdout.clone();
        cmd.examples = a.examples.clone();
        cmd.auth = a.auth.clone();
    }

    cmd
}

/// Returns the node's children that may appear in output: not hidden and not
/// one of the auto-generated reserved commands.
fn visible_children(node: &CommandNode) -> Vec<&CommandNode> {
    node.children
        .iter()
        .filter(|child| {
            if child.hidden {
                debug!(command = %child.name, "skipping hidden command");
                return false;
            }
            !RESERVED_COMMANDS.contains(&child.name.as_str())
        })
        .collect()
}

/// Recursively flattens a command tree into leaf descriptors.
///
/// Only leaves are emitted: a node with any visible child is a group and
/// produces no descriptor of its own, even when it is independently
/// runnable. Nested paths are joined with a single space; an empty path
/// (a single-command tool) is named [`ROOT_COMMAND`].
pub fn walk_commands(
    node: &CommandNode,
    prefix: &str,
    opts: Option<&DescribeOptions>,
) -> Vec<CommandDescriptor> {
    let visible = visible_children(node);

    if visible.is_empty() {
        let name = if prefix.is_empty() { ROOT_COMMAND } else { prefix };
        let ann = opts.and_then(|o| o.annotation(name));
        return vec![extract_command(node, name, ann)];
    }

    let mut commands = Vec::new();
    for child in visible {
        let child_path = if prefix.is_empty() {
            child.name.clone()
        } else {
            format!("{prefix} {}", child.name)
        };
        commands.extend(walk_commands(child, &child_path, opts));
    }
    commands
}

//! Core types and introspection logic for CLI tool self-description.
//!
//! This crate turns a tool's declared command tree into a machine-readable
//! schema: commands, flags, positional arguments, I/O descriptors, and auth
//! metadata, serialized as a stable JSON document. It is the
//! framework-agnostic half of the `tool-describe` workspace; the companion
//! `tool-describe-clap` crate reflects a `clap::Command` into this crate's
//! input model and wires up the `--describe` flag.
//!
//! The main pieces:
//!
//! - [`CommandNode`] / [`FlagSpec`] — the read-only input model a host (or
//!   adapter) populates from its argument-parsing framework.
//! - [`DescribeOptions`] / [`CommandAnnotation`] — caller-supplied metadata
//!   the framework cannot express: typed positionals, stdin/stdout
//!   descriptors, examples, auth.
//! - [`describe`] — the pure entry point producing a [`ToolSchema`].
//! - [`validate_schema`] — advisory structural checks on assembled schemas.
//!
//! # Example
//!
//! ```
//! use tool_describe_core::*;
//!
//! let root = CommandNode::new("fileconv")
//!     .with_about("Convert files between formats")
//!     .with_version("1.2.0")
//!     .with_child(
//!         CommandNode::new("convert")
//!             .with_about("Convert a single file")
//!             .with_usage("convert <input> [output]")
//!             .with_flag(FlagSpec::new("force", FlagKind::Bool).with_help("Overwrite output")),
//!     );
//!
//! let schema = describe(&root, None);
//! assert_eq!(schema.name, "fileconv");
//! assert_eq!(schema.commands.len(), 1);
//! assert_eq!(schema.commands[0].name, "convert");
//! assert_eq!(schema.commands[0].args[0].name, "input");
//! ```

mod annotate;
mod extract;
mod node;
mod types;
mod validate;

pub use annotate::{CommandAnnotation, DescribeOptions};
pub use extract::{
    DESCRIBE_FLAG, extract_command, extract_flags, flag_default, flag_type, parse_usage_args,
    walk_commands,
};
pub use node::{CommandNode, FlagKind, FlagSpec};
pub use types::*;
pub use validate::{ValidationError, validate_schema};

/// Extracts a [`ToolSchema`] from a command tree.
///
/// Pure and repeatable: no I/O, no mutation of the tree, byte-for-byte
/// equivalent output for identical input. Tool name and version come from
/// the root node; the description prefers the short form and falls back to
/// the long one when the short form is blank. A tool-level
/// [`AuthConfig`] from `opts` is attached verbatim.
///
/// # Examples
///
/// ```
/// use tool_describe_core::{CommandNode, ROOT_COMMAND, describe};
///
/// // A single-command tool yields exactly one descriptor, named by the
/// // root sentinel.
/// let root = CommandNode::new("wordcount")
///     .with_about("Count words")
///     .with_usage("wordcount <file>");
///
/// let schema = describe(&root, None);
/// assert_eq!(schema.commands.len(), 1);
/// assert_eq!(schema.commands[0].name, ROOT_COMMAND);
/// ```
pub fn describe(root: &CommandNode, opts: Option<&DescribeOptions>) -> ToolSchema {
    let mut description = root.about.trim();
    if description.is_empty() {
        description = root.long_about.trim();
    }

    ToolSchema {
        spec_version: SPEC_VERSION.to_string(),
        name: root.name.clone(),
        version: root.version.clone(),
        description: description.to_string(),
        commands: walk_commands(root, "", opts),
        auth: opts.and_then(|o| o.auth.clone()),
    }
}

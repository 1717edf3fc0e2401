//! Caller-supplied annotations that supplement auto-extraction.
//!
//! The command tree carries everything needed for flags, but some metadata
//! has no home in an argument-parsing framework: typed positional args,
//! stdin/stdout content descriptions, usage examples, and auth requirements.
//! [`DescribeOptions`] supplies those per command path; the merge semantics
//! are whole-field replacement, never a deep merge.

use std::collections::HashMap;

use crate::{ArgDescriptor, ArgType, AuthConfig, CommandAuth, Example, IODescriptor};

/// Per-command metadata overriding or supplementing auto-extraction.
///
/// Keyed in [`DescribeOptions::commands`] by the flattened command path
/// (e.g. `"db migrate"`, or [`ROOT_COMMAND`](crate::ROOT_COMMAND)).
///
/// # Examples
///
/// ```
/// use tool_describe_core::{ArgDescriptor, ArgType, CommandAnnotation};
///
/// let ann = CommandAnnotation::new()
///     .with_arg(ArgDescriptor {
///         name: "input".to_string(),
///         arg_type: ArgType::String,
///         required: true,
///         ..Default::default()
///     })
///     .with_arg_type("port", ArgType::Integer);
///
/// assert_eq!(ann.args.len(), 1);
/// assert_eq!(ann.arg_types.get("port"), Some(&ArgType::Integer));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandAnnotation {
    /// Positional args; when non-empty, fully replaces usage-string inference.
    pub args: Vec<ArgDescriptor>,
    /// Flag name to type tag overrides.
    pub arg_types: HashMap<String, ArgType>,
    /// Standard input descriptor.
    pub stdin: Option<IODescriptor>,
    /// Standard output descriptor.
    pub stdout: Option<IODescriptor>,
    /// Usage examples.
    pub examples: Vec<Example>,
    /// Per-command auth requirements.
    pub auth: Option<CommandAuth>,
}

impl CommandAnnotation {
    /// Creates an empty annotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument descriptor.
    pub fn with_arg(mut self, arg: ArgDescriptor) -> Self {
        self.args.push(arg);
        self
    }

    /// Overrides the type tag of a single flag.
    pub fn with_arg_type(mut self, flag_name: &str, arg_type: ArgType) -> Self {
        self.arg_types.insert(flag_name.to_string(), arg_type);
        self
    }

    /// Sets the stdin descriptor.
    pub fn with_stdin(mut self, stdin: IODescriptor) -> Self {
        self.stdin = Some(stdin);
        self
    }

    /// Sets the stdout descriptor.
    pub fn with_stdout(mut self, stdout: IODescriptor) -> Self {
        self.stdout = Some(stdout);
        self
    }

    /// Appends a usage example.
    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Sets the per-command auth requirements.
    pub fn with_auth(mut self, auth: CommandAuth) -> Self {
        self.auth = Some(auth);
        self
    }
}

/// Tool-level describe metadata supplied by the caller.
///
/// # Examples
///
/// ```
/// use tool_describe_core::{CommandAnnotation, DescribeOptions};
///
/// let opts = DescribeOptions::new()
///     .with_command("convert", CommandAnnotation::new());
/// assert!(opts.commands.contains_key("convert"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DescribeOptions {
    /// Annotations keyed by flattened command path.
    pub commands: HashMap<String, CommandAnnotation>,
    /// Tool-level auth, attached to the schema verbatim.
    pub auth: Option<AuthConfig>,
}

impl DescribeOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an annotation for a command path.
    pub fn with_command(mut self, path: &str, annotation: CommandAnnotation) -> Self {
        self.commands.insert(path.to_string(), annotation);
        self
    }

    /// Sets the tool-level auth config.
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Looks up the annotation for a command path.
    pub fn annotation(&self, path: &str) -> Option<&CommandAnnotation> {
        self.commands.get(path)
    }
}

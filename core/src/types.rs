//! Schema type definitions for tool self-description.
//!
//! This module defines the data model emitted by the describe pipeline. The
//! types are designed for serialization with [`serde`] and round-trip through
//! JSON without inventing fields: every optional field that is absent in the
//! source structure is absent from the output as well.

use serde::{Deserialize, Serialize};

/// Version of the describe output contract.
///
/// Embedded in every [`ToolSchema`] as `specVersion` so consumers can detect
/// incompatible output shapes.
pub const SPEC_VERSION: &str = "2026-02-07";

/// Sentinel command name for a tool without subcommands.
///
/// A single-command tool produces exactly one [`CommandDescriptor`], named by
/// this sentinel rather than by an empty path.
pub const ROOT_COMMAND: &str = "_root";

fn is_false(value: &bool) -> bool {
    !*value
}

/// Top-level describe output for a CLI tool.
///
/// Created once per invocation by [`describe`](crate::describe) and immutable
/// after construction.
///
/// # Examples
///
/// ```
/// use tool_describe_core::{SPEC_VERSION, ToolSchema};
///
/// let schema = ToolSchema {
///     spec_version: SPEC_VERSION.to_string(),
///     name: "fileconv".to_string(),
///     version: "1.2.0".to_string(),
///     description: "Convert files between formats".to_string(),
///     commands: Vec::new(),
///     auth: None,
/// };
///
/// let json = serde_json::to_value(&schema).unwrap();
/// assert_eq!(json["specVersion"], SPEC_VERSION);
/// assert!(json.get("auth").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    /// Describe contract version (populated from [`SPEC_VERSION`]).
    pub spec_version: String,
    /// Tool name, taken from the root command node.
    pub name: String,
    /// Tool version string.
    pub version: String,
    /// Short description (long description when the short one is blank).
    pub description: String,
    /// Flattened list of leaf commands, in declaration order.
    pub commands: Vec<CommandDescriptor>,
    /// Tool-level authentication requirements, when supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

/// Describes a single leaf command within a tool.
///
/// The `name` is the full invocation path with nesting flattened to
/// space-joined segments (e.g. `"db migrate"`), or [`ROOT_COMMAND`] for a
/// tool with no subcommands. `args` lists positional arguments first, then
/// flags in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    /// Flattened command path.
    pub name: String,
    /// Short description from the command node.
    pub description: String,
    /// Positional args first, then flags in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ArgDescriptor>,
    /// What the command reads from standard input, when annotated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdin: Option<IODescriptor>,
    /// What the command writes to standard output, when annotated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<IODescriptor>,
    /// Usage examples, when annotated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    /// Per-command authentication requirements, when annotated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<CommandAuth>,
}

/// Value type tag for an argument.
///
/// Serialized lowercase (`"string"`, `"integer"`, …). All integer widths of
/// the source flag collapse to [`Integer`](ArgType::Integer), all float
/// widths to [`Number`](ArgType::Number), and all slice/array kinds to
/// [`Array`](ArgType::Array).
///
/// # Examples
///
/// ```
/// use tool_describe_core::ArgType;
///
/// assert_eq!(serde_json::to_value(ArgType::Integer).unwrap(), "integer");
/// assert_eq!(ArgType::default(), ArgType::String);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    /// Free-form string value (the default).
    #[default]
    String,
    /// Integer value of any width.
    Integer,
    /// Floating-point value of any width.
    Number,
    /// Boolean switch.
    Boolean,
    /// Repeated or list-valued argument.
    Array,
    /// One of an enumerated set of allowed values.
    Enum,
}

/// Describes a single argument (flag or positional) of a command.
///
/// Flag names carry a leading `--`; positional names do not. A `default` is
/// only present when it is meaningfully non-zero, and `values` only when the
/// type is [`ArgType::Enum`].
///
/// # Examples
///
/// ```
/// use tool_describe_core::{ArgDescriptor, ArgType};
///
/// let arg = ArgDescriptor {
///     name: "--jobs".to_string(),
///     arg_type: ArgType::Integer,
///     description: Some("Parallel jobs".to_string()),
///     required: false,
///     default: Some("4".into()),
///     values: Vec::new(),
/// };
///
/// let json = serde_json::to_value(&arg).unwrap();
/// assert_eq!(json["type"], "integer");
/// assert!(json.get("required").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArgDescriptor {
    /// Argument name (`--name` for flags, bare name for positionals).
    pub name: String,
    /// Value type tag.
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    /// Help text, when the declaration carries any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the argument must be supplied. Omitted when false.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Default value, only when meaningfully non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Allowed values, only for [`ArgType::Enum`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// Describes the standard input or output channel of a command.
///
/// The optional `schema` is an opaque JSON value supplied by the caller and
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IODescriptor {
    /// MIME-style content type (e.g. `"application/json"`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    /// Human-readable description of the channel.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Free-form schema for the channel content, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// A usage example for a command.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Example {
    /// What the example demonstrates.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// The command line to run.
    pub command: String,
    /// Expected output, when illustrative.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output: String,
}

/// Tool-level authentication requirements.
///
/// Purely declarative; `required` tells consumers whether `env_var` and
/// `providers` are mandatory rather than advisory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Whether authentication is mandatory. Omitted when false.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Environment variable the tool reads credentials from.
    pub env_var: String,
    /// Supported authentication providers.
    pub providers: Vec<AuthProvider>,
}

/// A single authentication provider declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    /// Stable provider identifier.
    pub id: String,
    /// Provider type (e.g. `"oauth2"`, `"api_key"`).
    #[serde(rename = "type")]
    pub provider_type: String,
    /// Display name for UIs.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    /// OAuth authorization endpoint.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authorization_url: String,
    /// OAuth token endpoint.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_url: String,
    /// Scopes the tool requests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// OAuth client identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    /// Where to register for credentials.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registration_url: String,
    /// Free-form setup instructions.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instructions: String,
}

/// Per-command authentication requirements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandAuth {
    /// Whether this command requires authentication. Omitted when false.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Scopes this command needs beyond the tool-level set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

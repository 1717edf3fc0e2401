//! Read-only input model for the command tree being described.
//!
//! The tree is owned by the host tool (or built by an adapter from the host's
//! argument-parsing framework) and only read by the describe pipeline. A node
//! exposes the capability set the pipeline needs: name, descriptions,
//! version, a usage string, hidden state, declared flags, and children.
//!
//! # Examples
//!
//! ```
//! use tool_describe_core::{CommandNode, FlagKind, FlagSpec};
//!
//! let root = CommandNode::new("fileconv")
//!     .with_about("Convert files between formats")
//!     .with_version("1.2.0")
//!     .with_child(
//!         CommandNode::new("convert")
//!             .with_usage("convert <input> [output]")
//!             .with_flag(FlagSpec::new("format", FlagKind::Text).with_help("Output format")),
//!     );
//!
//! assert_eq!(root.children.len(), 1);
//! ```

/// Value kind a flag was declared with.
///
/// Width distinctions of the source declaration are already collapsed here:
/// any signed or unsigned integer maps to [`Integer`](FlagKind::Integer),
/// any float to [`Float`](FlagKind::Float), any slice/array kind to
/// [`List`](FlagKind::List). Everything else is [`Text`](FlagKind::Text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagKind {
    /// Boolean switch taking no value.
    Bool,
    /// Integer value of any width, signed or unsigned.
    Integer,
    /// Floating-point value of any width.
    Float,
    /// Repeatable or list-valued flag.
    List,
    /// Anything else, treated as a string (the default).
    #[default]
    Text,
}

/// A single declared flag on a command node.
///
/// `default` is the textual form of the declared default value, exactly as
/// the host framework renders it (`"true"`, `"0"`, `"[]"`, …); the extractor
/// decides whether it is meaningful. `values` is the out-of-band enum
/// annotation attached via [`CommandNode::annotate_enum`].
///
/// # Examples
///
/// ```
/// use tool_describe_core::{FlagKind, FlagSpec};
///
/// let flag = FlagSpec::new("jobs", FlagKind::Integer)
///     .with_default("4")
///     .with_help("Parallel jobs");
/// assert_eq!(flag.default, "4");
/// assert!(!flag.required);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlagSpec {
    /// Flag name without dashes (e.g. "verbose").
    pub name: String,
    /// Declared value kind.
    pub kind: FlagKind,
    /// Textual default value as rendered by the host framework.
    pub default: String,
    /// Help text.
    pub help: String,
    /// Hidden flags never appear in describe output.
    pub hidden: bool,
    /// Required marker attached by the flag-parsing layer.
    pub required: bool,
    /// Out-of-band enum annotation; forces type `enum` when non-empty.
    pub values: Option<Vec<String>>,
}

impl FlagSpec {
    /// Creates a flag with the given name and value kind.
    pub fn new(name: &str, kind: FlagKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            ..Default::default()
        }
    }

    /// Sets the textual default value.
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = default.to_string();
        self
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    /// Marks the flag as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Marks the flag as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches allowed values directly at declaration time.
    pub fn with_values(mut self, values: &[&str]) -> Self {
        self.values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }
}

/// One node in the externally-owned command tree.
///
/// A node with no visible children is a leaf and produces one descriptor in
/// the output; a node with visible children is a group and produces none of
/// its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandNode {
    /// Command name (single path segment).
    pub name: String,
    /// Short description.
    pub about: String,
    /// Long description, used when `about` is blank.
    pub long_about: String,
    /// Version string; only meaningful on the root node.
    pub version: String,
    /// Usage string in the `"name <required> [optional]"` convention.
    pub usage: String,
    /// Hidden nodes and their subtrees never appear in describe output.
    pub hidden: bool,
    /// Declared flags, in declaration order.
    pub flags: Vec<FlagSpec>,
    /// Child commands, in declaration order.
    pub children: Vec<CommandNode>,
}

impl CommandNode {
    /// Creates a node with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tool_describe_core::CommandNode;
    ///
    /// let node = CommandNode::new("migrate");
    /// assert_eq!(node.name, "migrate");
    /// assert!(node.children.is_empty());
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the short description.
    pub fn with_about(mut self, about: &str) -> Self {
        self.about = about.to_string();
        self
    }

    /// Sets the long description.
    pub fn with_long_about(mut self, long_about: &str) -> Self {
        self.long_about = long_about.to_string();
        self
    }

    /// Sets the version string.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Sets the usage string.
    pub fn with_usage(mut self, usage: &str) -> Self {
        self.usage = usage.to_string();
        self
    }

    /// Marks the node as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Adds a declared flag.
    pub fn with_flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    /// Adds a child command.
    pub fn with_child(mut self, child: CommandNode) -> Self {
        self.children.push(child);
        self
    }

    /// Finds a declared flag by name.
    pub fn find_flag(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|f| f.name == name)
    }

    /// Attaches allowed enum values to a previously declared flag.
    ///
    /// Silently a no-op when no flag with that name exists. A non-empty
    /// value list forces the flag's described type to `enum`, overriding
    /// both the inferred type and any per-command type override.
    ///
    /// # Examples
    ///
    /// ```
    /// use tool_describe_core::{CommandNode, FlagKind, FlagSpec};
    ///
    /// let mut node = CommandNode::new("convert")
    ///     .with_flag(FlagSpec::new("format", FlagKind::Text));
    ///
    /// node.annotate_enum("format", &["json", "csv", "yaml"]);
    /// node.annotate_enum("no-such-flag", &["ignored"]);
    ///
    /// assert_eq!(node.find_flag("format").unwrap().values.as_deref().unwrap().len(), 3);
    /// ```
    pub fn annotate_enum(&mut self, flag_name: &str, values: &[&str]) {
        let Some(flag) = self.flags.iter_mut().find(|f| f.name == flag_name) else {
            tracing::debug!(flag = flag_name, "enum annotation on unknown flag ignored");
            return;
        };
        flag.values = Some(values.iter().map(|v| v.to_string()).collect());
    }
}

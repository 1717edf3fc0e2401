//! Structural validation of describe output.
//!
//! The describe pipeline upholds these invariants by construction; the
//! checker exists for hosts that assemble or post-process schemas by hand
//! (e.g. loading annotated fixtures from disk). Validation is advisory and
//! never runs on the describe-and-exit path.
//!
//! # Examples
//!
//! ```
//! use tool_describe_core::{CommandDescriptor, SPEC_VERSION, ToolSchema, validate_schema};
//!
//! let schema = ToolSchema {
//!     spec_version: SPEC_VERSION.to_string(),
//!     name: "fileconv".to_string(),
//!     version: "1.0.0".to_string(),
//!     description: String::new(),
//!     commands: vec![CommandDescriptor {
//!         name: "convert".to_string(),
//!         ..Default::default()
//!     }],
//!     auth: None,
//! };
//! assert!(validate_schema(&schema).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{ArgType, ToolSchema};

/// Structural problems in a [`ToolSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Tool name is empty or whitespace-only.
    #[error("tool name cannot be empty")]
    EmptyToolName,
    /// A command descriptor has an empty name.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two commands in the flattened list share a name.
    #[error("duplicate command: {0}")]
    DuplicateCommand(String),
    /// Two arguments of the same command share a name.
    #[error("duplicate argument in command {command}: {arg}")]
    DuplicateArg {
        /// Flattened command path.
        command: String,
        /// Offending argument name.
        arg: String,
    },
    /// An enum-typed argument carries no allowed values.
    #[error("enum argument without values in command {command}: {arg}")]
    EnumWithoutValues {
        /// Flattened command path.
        command: String,
        /// Offending argument name.
        arg: String,
    },
    /// A non-enum argument carries an allowed-value list.
    #[error("values on non-enum argument in command {command}: {arg}")]
    ValuesOnNonEnum {
        /// Flattened command path.
        command: String,
        /// Offending argument name.
        arg: String,
    },
}

/// Validates the documented invariants of a describe schema.
///
/// Returns every problem found; an empty vector means the schema is
/// structurally sound.
pub fn validate_schema(schema: &ToolSchema) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if schema.name.trim().is_empty() {
        errors.push(ValidationError::EmptyToolName);
    }

    let mut seen_commands: HashSet<&str> = HashSet::new();
    for cmd in &schema.commands {
        if cmd.name.trim().is_empty() {
            errors.push(ValidationError::EmptyCommandName);
            continue;
        }
        if !seen_commands.insert(cmd.name.as_str()) {
            errors.push(ValidationError::DuplicateCommand(cmd.name.clone()));
        }

        let mut seen_args: HashSet<&str> = HashSet::new();
        for arg in &cmd.args {
            if !seen_args.insert(arg.name.as_str()) {
                errors.push(ValidationError::DuplicateArg {
                    command: cmd.name.clone(),
                    arg: arg.name.clone(),
                });
            }
            match arg.arg_type {
                ArgType::Enum if arg.values.is_empty() => {
                    errors.push(ValidationError::EnumWithoutValues {
                        command: cmd.name.clone(),
                        arg: arg.name.clone(),
                    });
                }
                ArgType::Enum => {}
                _ if !arg.values.is_empty() => {
                    errors.push(ValidationError::ValuesOnNonEnum {
                        command: cmd.name.clone(),
                        arg: arg.name.clone(),
                    });
                }
                _ => {}
            }
        }
    }

    errors
}

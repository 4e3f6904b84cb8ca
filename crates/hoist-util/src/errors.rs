use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all hoist operations.
#[derive(Debug, Error, Diagnostic)]
pub enum HoistError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (`Hoist.toml`).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Hoist.toml for syntax errors"))]
    Manifest { message: String },

    /// Malformed properties file or `-P` override.
    #[error("Property error: {message}")]
    Properties { message: String },

    /// A field the publish configuration cannot do without is unset.
    ///
    /// Raised once configuration is finalized, before any task runs.
    #[error("{message}")]
    #[diagnostic(
        code(hoist::structural),
        help("Set `{field}` in the [publish] section of Hoist.toml")
    )]
    Structural { field: String, message: String },

    /// A property required by a task is absent when that task is about to run.
    #[error(
        "Missing expected property: {property} (required by task `{task}`). It should be added \
         in your {file} file, or in an environment variable of the form {prefix}{property}"
    )]
    #[diagnostic(code(hoist::task_precondition))]
    MissingProperty {
        property: String,
        task: String,
        file: String,
        prefix: String,
    },

    /// A task name that no configured component registered.
    #[error("Unknown task '{task}'")]
    #[diagnostic(help("Run `hoist check` to list the registered tasks"))]
    UnknownTask { task: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Result type of the operations layer; any [`HoistError`] converts into it.
pub type HoistResult<T> = miette::Result<T>;

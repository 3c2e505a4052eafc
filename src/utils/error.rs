use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Resource unavailable: {path}")]
    ResourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing value: '{field}' is not set")]
    MissingValue { field: String },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("{0}")]
    UsernamePasswordMismatch(String),

    #[error("Unknown entity: {name}")]
    UnknownEntity { name: String },

    #[error("Entity already registered: {name}")]
    DuplicateEntity { name: String },

    #[error("Servlet '{kind}' is abstract and cannot be instantiated")]
    AbstractServlet { kind: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Resource,
    Programming,
    Authentication,
    Registry,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorCategory::Io,
            DemoError::ResourceUnavailable { .. } => ErrorCategory::Resource,
            DemoError::MissingValue { .. }
            | DemoError::IndexOutOfBounds { .. }
            | DemoError::DivisionByZero => ErrorCategory::Programming,
            DemoError::UsernamePasswordMismatch(_) => ErrorCategory::Authentication,
            DemoError::UnknownEntity { .. }
            | DemoError::DuplicateEntity { .. }
            | DemoError::AbstractServlet { .. } => ErrorCategory::Registry,
            DemoError::ConfigError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Resource => ErrorSeverity::Medium,
            ErrorCategory::Programming
            | ErrorCategory::Registry
            | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Authentication => ErrorSeverity::Critical,
        }
    }

    /// Recoverable faults are reported at the call site and execution continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Resource | ErrorCategory::Programming
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::ResourceUnavailable { path, .. } => {
                format!("Could not open '{}'", path)
            }
            DemoError::UsernamePasswordMismatch(message) => {
                format!("Authentication failed: {}", message)
            }
            DemoError::UnknownEntity { name } => {
                format!("No entity named '{}' is registered", name)
            }
            DemoError::ConfigError { message } => format!("Invalid configuration: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that stdout and stderr are writable",
            ErrorCategory::Resource => "Create the file or point the demo at an existing path",
            ErrorCategory::Programming => "Initialise the value or check the bounds before use",
            ErrorCategory::Authentication => "Nothing to do; this fault is raised on purpose",
            ErrorCategory::Registry => "Run with --help to list the available entities and demos",
            ErrorCategory::Configuration => "Fix the flagged field in the plan file or CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

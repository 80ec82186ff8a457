use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Unknown method: {service}.{method}")]
    UnknownMethod { service: String, method: String },

    #[error("Unknown service: {service}")]
    UnknownService { service: String },

    #[error("Service already registered: {service}")]
    DuplicateService { service: String },

    #[error("Duplicate name '{name}' in {scope}")]
    DuplicateName { scope: String, name: String },

    #[error("{method} is a local method and cannot be dispatched over XML-RPC")]
    LocalMethod { method: String },

    #[error("{method} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("{method}: missing argument '{parameter}'")]
    MissingArgument { method: String, parameter: String },

    #[error("{method}: invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        method: String,
        parameter: String,
        reason: String,
    },

    #[error("Invocation of {method} failed: {message}")]
    Invocation { method: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Interface,
    Argument,
    Invocation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RpcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RpcError::UnknownMethod { .. }
            | RpcError::UnknownService { .. }
            | RpcError::DuplicateService { .. }
            | RpcError::DuplicateName { .. }
            | RpcError::LocalMethod { .. } => ErrorCategory::Interface,
            RpcError::ArityMismatch { .. }
            | RpcError::MissingArgument { .. }
            | RpcError::InvalidArgument { .. } => ErrorCategory::Argument,
            RpcError::Invocation { .. } => ErrorCategory::Invocation,
            RpcError::ConfigError { .. }
            | RpcError::ConfigValidationError { .. }
            | RpcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RpcError::IoError(_) | RpcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Invocation => ErrorSeverity::Medium,
            ErrorCategory::Interface | ErrorCategory::Argument | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RpcError::UnknownMethod { service, .. } => {
                format!("Run `list` to see the methods declared by {}", service)
            }
            RpcError::UnknownService { .. } => {
                "Use a qualified name of the form Service.method".to_string()
            }
            RpcError::DuplicateService { .. } => {
                "Register each interface declaration only once".to_string()
            }
            RpcError::DuplicateName { .. } => {
                "Method names and parameter names must be unique".to_string()
            }
            RpcError::LocalMethod { .. } => {
                "Only methods declared as XML-RPC can be bound into a call".to_string()
            }
            RpcError::ArityMismatch { method, .. } | RpcError::MissingArgument { method, .. } => {
                format!("Run `describe {}` to see the expected parameters", method)
            }
            RpcError::InvalidArgument { .. } => {
                "Check the parameter type: ids are integers, keys are strings".to_string()
            }
            RpcError::Invocation { .. } => "Retry the call later".to_string(),
            RpcError::ConfigError { .. }
            | RpcError::ConfigValidationError { .. }
            | RpcError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags".to_string()
            }
            RpcError::IoError(_) => "Check file paths and permissions".to_string(),
            RpcError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Interface => format!("Interface lookup failed: {}", self),
            ErrorCategory::Argument => format!("Bad arguments: {}", self),
            ErrorCategory::Invocation => format!("Remote call failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;

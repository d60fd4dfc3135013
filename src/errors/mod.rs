use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum WebhookError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Inbound record errors
    #[error("Could not read contact record from {source_name}: {reason}")]
    RecordSourceError {
        source_name: String,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Connection refused, DNS failure, timeout, unreadable body
    #[error("Transport error while posting to {url}: {reason}")]
    TransportError {
        url: String,
        reason: String,
    },

    // A response arrived with a non-2xx status
    #[error("Webhook at {url} answered with status {status_code}: {body}")]
    ApplicationError {
        url: String,
        status_code: u16,
        body: String,
    },

    // The receiver could not apply an inbound envelope
    #[error("Could not {action} contact: {reason}")]
    SyncError {
        action: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl WebhookError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn record_error(source_name: &str, reason: &str) -> Self {
        Self::RecordSourceError {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn transport_error(url: &str, reason: &str) -> Self {
        Self::TransportError {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn application_error(url: &str, status_code: u16, body: &str) -> Self {
        Self::ApplicationError {
            url: url.to_string(),
            status_code,
            body: body.to_string(),
        }
    }

    pub fn sync_error(action: &str, reason: &str) -> Self {
        Self::SyncError {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::TransportError { .. }
                | Self::ApplicationError { .. }
                | Self::ConfigurationError { .. }
                | Self::RecordSourceError { .. }
        )
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::TransportError { .. }
            | Self::ApplicationError { .. }
            | Self::ParseError { .. }
            | Self::RecordSourceError { .. }
            | Self::SyncError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { .. } => {
                format!("{self}\n💡 Check file permissions and TOML syntax")
            }
            Self::RecordSourceError { .. } => {
                format!("{self}\n💡 Pass a JSON object with --record <path>, or add a [record] table to the config")
            }
            Self::ParseError { line_number, .. } => {
                let mut msg = self.to_string();
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::TransportError { .. } => {
                format!("{self}\n💡 Check the webhook URL and that the endpoint is reachable")
            }
            Self::ApplicationError { .. } => {
                format!("{self}\n💡 The endpoint received the request but refused it")
            }
            Self::SyncError { .. } | Self::SystemError { .. } => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for webhook operations
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &WebhookError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for WebhookError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for WebhookError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

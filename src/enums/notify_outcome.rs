use crate::errors::{WebhookError, WebhookResult};

/// What the endpoint said about a delivered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Delivered {
        status: u16,
    },
    Rejected {
        status: u16,
        body: String,
    },
}

impl NotifyOutcome {
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    pub const fn status(&self) -> u16 {
        match self {
            Self::Delivered { status } | Self::Rejected { status, .. } => *status,
        }
    }

    /// Turns a rejection into `WebhookError::ApplicationError`.
    pub fn into_result(self, url: &str) -> WebhookResult<u16> {
        match self {
            Self::Delivered { status } => Ok(status),
            Self::Rejected { status, body } => Err(WebhookError::application_error(url, status, &body)),
        }
    }
}

/// What the receiver did with one inbound envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Created { contact_id: String },
    Updated { contact_id: String },
    Deleted { contact_id: String },
    /// An update or delete named an HR_ID that no stored contact carries.
    NotFound { hr_id: Option<String> },
    /// The action was missing or not one the receiver handles.
    Ignored { action: Option<String> },
}

impl SyncOutcome {
    pub fn contact_id(&self) -> Option<&str> {
        match self {
            Self::Created { contact_id } | Self::Updated { contact_id } | Self::Deleted { contact_id } => {
                Some(contact_id)
            }
            Self::NotFound { .. } | Self::Ignored { .. } => None,
        }
    }
}

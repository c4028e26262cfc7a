use stimulus_core::model::PatientName;

pub const ENTER_PATIENT_NAME: &str = "Please enter a patient name.";
pub const RESULTS_LINK_LABEL: &str = "View Results";

/// Text shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    CameraAccessRequired,
    Running,
    TimestampError,
    Completed {
        patient: PatientName,
        results_url: String,
    },
    Failed,
}

impl StatusMessage {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::CameraAccessRequired => "Please enable webcam access.".to_string(),
            Self::Running => "Test running...".to_string(),
            Self::TimestampError => "❌ Flash timestamp error.".to_string(),
            Self::Completed { patient, .. } => format!("✅ Test completed for {patient}."),
            Self::Failed => "❌ Error occurred while running the test.".to_string(),
        }
    }

    /// Results link attached to a completed run.
    #[must_use]
    pub fn results_url(&self) -> Option<&str> {
        match self {
            Self::Completed { results_url, .. } => Some(results_url),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::CameraAccessRequired | Self::TimestampError | Self::Failed
        )
    }
}

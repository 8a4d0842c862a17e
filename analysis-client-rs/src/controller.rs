// analysis-client-rs/src/controller.rs
// View-state machine behind the study-notes form

use crate::client::{AnalysisClient, AnalysisRequest};

/// Shown in place of the raw failure; the underlying error is only logged.
pub const SUBMIT_FAILED: &str = "Something went wrong. Check console and API key.";

/// The four mutually exclusive presentation states of the form.
///
/// Exactly one holds at any time; the variants carry the text the matching
/// panel displays, so result and error can never be shown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Error(String),
    Result(String),
}

/// Holds the latest value of each form field and drives submission.
pub struct AnalysisForm {
    pub(crate) text: String,
    pub(crate) goal: String,
    pub(crate) language: String,
    pub(crate) state: ViewState,
    client: AnalysisClient,
}

impl AnalysisForm {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            text: String::new(),
            goal: String::new(),
            language: "English".to_string(),
            state: ViewState::Idle,
            client,
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn set_goal(&mut self, value: impl Into<String>) {
        self.goal = value.into();
    }

    pub fn set_language(&mut self, value: impl Into<String>) {
        self.language = value.into();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The submit control is enabled except while a request is outstanding.
    pub fn submit_enabled(&self) -> bool {
        !matches!(self.state, ViewState::Loading)
    }

    /// Issue one request carrying the current field values.
    ///
    /// A call while a submission is already outstanding is ignored. Any prior
    /// result or error is replaced by the new terminal state.
    pub async fn submit(&mut self) {
        if !self.submit_enabled() {
            return;
        }
        self.state = ViewState::Loading;

        let request = AnalysisRequest {
            text: self.text.clone(),
            goal: self.goal.clone(),
            language: self.language.clone(),
        };

        self.state = match self.client.analyze(&request).await {
            Ok(result) => ViewState::Result(result),
            Err(e) => {
                log::error!("analysis submission failed: {}", e);
                ViewState::Error(SUBMIT_FAILED.to_string())
            }
        };
    }
}

use crate::{backend::TargetMode, prompt::RenderMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictQuery {
    #[serde(default)]
    pub render_mode: Option<String>,
}

/// The only thing that differs between the two prediction endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionMode {
    pub render: RenderMode,
    pub target: TargetMode,
}

impl PredictionMode {
    pub fn completion() -> Self {
        Self {
            render: RenderMode::Narrative,
            target: TargetMode::Completion,
        }
    }

    pub fn chat(render: RenderMode) -> Self {
        Self {
            render,
            target: TargetMode::Chat,
        }
    }

    /// Inbound route serving this mode.
    pub fn endpoint(&self) -> &'static str {
        match self.target {
            TargetMode::Completion => "/predict",
            TargetMode::Chat => "/predict-chat",
        }
    }
}

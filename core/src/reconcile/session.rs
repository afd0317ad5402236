use super::model::{ComparisonResult, JsonDocument, ReconcileConfig};
use super::pipeline::run_comparison;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ComparisonStage {
    Idle,
    Completed,
    Failed,
}

/// Holds the outcome of the latest comparison until it is reset.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    pub config: ReconcileConfig,
    stage: ComparisonStage,
    result: Option<ComparisonResult>,
    error: Option<String>,
}

impl ComparisonSession {
    pub fn new(config: ReconcileConfig) -> Self {
        Self {
            config,
            stage: ComparisonStage::Idle,
            result: None,
            error: None,
        }
    }

    pub fn stage(&self) -> ComparisonStage {
        self.stage
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn compare(
        &mut self,
        csv_text: Option<&str>,
        documents: &[JsonDocument],
    ) -> CoreResult<&ComparisonResult> {
        // A finished result has to be reset before the next comparison.
        if self.stage == ComparisonStage::Completed {
            return Err(CoreError::InvalidTransition(
                "Completed -> Completed: reset the session first".to_string(),
            ));
        }
        self.error = None;

        match run_comparison(csv_text, documents, &self.config) {
            Ok(result) => {
                self.transition(ComparisonStage::Completed)?;
                Ok(&*self.result.insert(result))
            }
            Err(e) => {
                self.transition(ComparisonStage::Failed)?;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Discard the result and any error. The configuration is kept.
    pub fn reset(&mut self) {
        self.stage = ComparisonStage::Idle;
        self.result = None;
        self.error = None;
    }

    fn transition(&mut self, next: ComparisonStage) -> CoreResult<()> {
        let allowed = matches!(
            (self.stage, next),
            (
                ComparisonStage::Idle | ComparisonStage::Failed,
                ComparisonStage::Completed | ComparisonStage::Failed
            )
        );
        if !allowed {
            return Err(CoreError::InvalidTransition(format!(
                "{:?} -> {:?}",
                self.stage, next
            )));
        }
        self.stage = next;
        Ok(())
    }
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self::new(ReconcileConfig::default())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::selection::types::SelectionOptions;

/// 优先级模型的四个相对权重，不要求和为 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionWeights {
    #[serde(default = "default_wrong_answer")]
    pub wrong_answer: f64,
    #[serde(default = "default_low_coverage")]
    pub low_coverage: f64,
    #[serde(default = "default_never_attempted")]
    pub never_attempted: f64,
    #[serde(default = "default_spaced_repetition")]
    pub spaced_repetition: f64,
}

fn default_wrong_answer() -> f64 {
    0.35
}

fn default_low_coverage() -> f64 {
    0.25
}

fn default_never_attempted() -> f64 {
    0.25
}

fn default_spaced_repetition() -> f64 {
    0.15
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            wrong_answer: default_wrong_answer(),
            low_coverage: default_low_coverage(),
            never_attempted: default_never_attempted(),
            spaced_repetition: default_spaced_repetition(),
        }
    }
}

impl SelectionWeights {
    pub fn validate(&self) -> Result<(), SelectionError> {
        let fields = [
            ("wrongAnswer", self.wrong_answer),
            ("lowCoverage", self.low_coverage),
            ("neverAttempted", self.never_attempted),
            ("spacedRepetition", self.spaced_repetition),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SelectionError::InvalidWeights(format!(
                    "{name} must be finite"
                )));
            }
            if value < 0.0 {
                return Err(SelectionError::InvalidWeights(format!(
                    "{name} must be >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl SelectionOptions {
    /// 请求级覆盖值叠加到默认权重之上
    pub fn resolve_weights(&self, defaults: &SelectionWeights) -> SelectionWeights {
        SelectionWeights {
            wrong_answer: self.wrong_answer_weight.unwrap_or(defaults.wrong_answer),
            low_coverage: self.low_coverage_weight.unwrap_or(defaults.low_coverage),
            never_attempted: self
                .never_attempted_weight
                .unwrap_or(defaults.never_attempted),
            spaced_repetition: self
                .spaced_repetition_weight
                .unwrap_or(defaults.spaced_repetition),
        }
    }
}

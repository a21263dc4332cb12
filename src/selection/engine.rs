//! 选题请求入口：在边界处校验权重，然后串起历史归并、选题与汇总。

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::selection::config::SelectionWeights;
use crate::selection::history::normalize_history;
use crate::selection::insights::summarize_selection;
use crate::selection::selector::select_questions_with;
use crate::selection::topics::build_topic_performance;
use crate::selection::types::{
    AttemptRecord, InsightsSummary, Question, SelectionOptions,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub attempts: Vec<AttemptRecord>,
    pub count: usize,
    #[serde(default)]
    pub options: SelectionOptions,
    #[serde(default)]
    pub include_insights: bool,
}

impl SelectionRequest {
    /// 从 JSON 文件读取请求；路径为 `-` 时读取标准输入
    pub fn load(path: &str) -> Result<Self, SelectionError> {
        let raw = if path == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(Path::new(path))?
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<InsightsSummary>,
}

pub fn run_selection<R: Rng + ?Sized>(
    request: &SelectionRequest,
    defaults: &SelectionWeights,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<SelectionResponse, SelectionError> {
    request.options.resolve_weights(defaults).validate()?;

    let history = normalize_history(&request.attempts);
    let selected = select_questions_with(
        &request.questions,
        request.count,
        &history,
        &request.options,
        defaults,
        now,
        rng,
    );

    let insights = request.include_insights.then(|| {
        let topic_stats = build_topic_performance(&request.questions, &history);
        summarize_selection(&selected, &history, &topic_stats, now)
    });

    tracing::info!(
        requested = request.count,
        selected = selected.len(),
        with_insights = insights.is_some(),
        "Selection request completed"
    );

    Ok(SelectionResponse {
        questions: selected.into_iter().cloned().collect(),
        insights,
    })
}

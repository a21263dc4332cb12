//! 选题优先级评分：线性加权模型，外加 [0, 0.1) 的随机扰动用于打破平局。

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::constants::{
    JITTER_SCALE, MILLIS_PER_DAY, RECENT_REPEAT_DAYS, RECENT_REPEAT_PENALTY,
    SPACED_REVIEW_DAYS, SPACED_REVIEW_MAX_MULTIPLIER, WEAK_TOPIC_ACCURACY_THRESHOLD,
    WEAK_TOPIC_BOOST, WEAK_TOPIC_MIN_ATTEMPTED, WRONG_ANSWER_ATTEMPT_CAP, WRONG_ANSWER_STEP,
};
use crate::selection::config::SelectionWeights;
use crate::selection::types::{HistoryEntry, Question, TopicStats};

/// 各加分项明细，便于审计与调参
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub wrong_answer: f64,
    pub recency: f64,
    pub novelty: f64,
    pub coverage: f64,
    pub weak_topic: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.wrong_answer + self.recency + self.novelty + self.coverage + self.weak_topic
    }
}

/// 距上次作答的天数（浮点）
pub fn days_since(last_attempted_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - last_attempted_at).num_milliseconds() as f64 / MILLIS_PER_DAY as f64
}

pub fn score_breakdown(
    _question: &Question,
    history: Option<&HistoryEntry>,
    topic_stats: Option<&TopicStats>,
    weights: &SelectionWeights,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    match history {
        Some(entry) => {
            if !entry.ever_correct {
                let repeats = entry.attempt_count.min(WRONG_ANSWER_ATTEMPT_CAP) as f64;
                breakdown.wrong_answer = weights.wrong_answer * (1.0 + repeats * WRONG_ANSWER_STEP);
            }

            let days = days_since(entry.last_attempted_at, now);
            if days < RECENT_REPEAT_DAYS {
                breakdown.recency = -RECENT_REPEAT_PENALTY;
            } else if days >= SPACED_REVIEW_DAYS {
                breakdown.recency = weights.spaced_repetition
                    * (days / SPACED_REVIEW_DAYS).min(SPACED_REVIEW_MAX_MULTIPLIER);
            }
        }
        None => {
            breakdown.novelty = weights.never_attempted;
        }
    }

    match topic_stats {
        Some(stats) => {
            breakdown.coverage = weights.low_coverage * (1.0 - stats.coverage as f64 / 100.0);
            if stats.attempted >= WEAK_TOPIC_MIN_ATTEMPTED
                && stats.accuracy < WEAK_TOPIC_ACCURACY_THRESHOLD
            {
                breakdown.weak_topic = WEAK_TOPIC_BOOST;
            }
        }
        // 没有统计的主题按 0% 覆盖率处理
        None => {
            breakdown.coverage = weights.low_coverage;
        }
    }

    breakdown
}

/// 不含随机扰动的确定性得分
pub fn base_score(
    question: &Question,
    history: Option<&HistoryEntry>,
    topic_stats: Option<&TopicStats>,
    weights: &SelectionWeights,
    now: DateTime<Utc>,
) -> f64 {
    score_breakdown(question, history, topic_stats, weights, now).total()
}

pub fn score_question<R: Rng + ?Sized>(
    question: &Question,
    history: Option<&HistoryEntry>,
    topic_stats: Option<&TopicStats>,
    weights: &SelectionWeights,
    now: DateTime<Utc>,
    rng: &mut R,
) -> f64 {
    let jitter = rng.gen::<f64>() * JITTER_SCALE;
    base_score(question, history, topic_stats, weights, now) + jitter
}

//! 自适应选题引擎：纯函数、无共享状态，随机性全部通过注入的 `Rng` 提供。

pub mod config;
pub mod engine;
pub mod history;
pub mod insights;
pub mod scorer;
pub mod selector;
pub mod topics;
pub mod types;

pub use config::SelectionWeights;
pub use engine::{run_selection, SelectionRequest, SelectionResponse};
pub use history::normalize_history;
pub use insights::summarize_selection;
pub use scorer::{base_score, score_breakdown, score_question, ScoreBreakdown};
pub use selector::{rank_questions, select_questions, select_questions_with};
pub use topics::build_topic_performance;
pub use types::{
    AttemptRecord, HistoryEntry, HistoryMap, InsightsSummary, Question, ScoredQuestion,
    SelectionOptions, TopicStats, TopicStatsMap,
};

//! 作答历史归并：把乱序、重复的原始作答记录折叠成每题一条 HistoryEntry。
//!
//! 前置条件：输入记录格式完整（question_id 非空等），此处不做校验，
//! 校验应在数据提供方边界完成。

use crate::selection::types::{AttemptRecord, HistoryEntry, HistoryMap};

/// 按作答时间升序（稳定排序）逐条折叠
pub fn normalize_history(attempts: &[AttemptRecord]) -> HistoryMap {
    let mut ordered: Vec<&AttemptRecord> = attempts.iter().collect();
    ordered.sort_by_key(|a| a.attempted_at);

    let mut history = HistoryMap::with_capacity(ordered.len());
    for attempt in ordered {
        fold_attempt(&mut history, attempt);
    }

    tracing::debug!(
        attempts = attempts.len(),
        questions = history.len(),
        "Normalized attempt history"
    );
    history
}

/// 将单条记录并入已有历史；调用方需保证按时间顺序折叠
pub fn fold_attempt(history: &mut HistoryMap, attempt: &AttemptRecord) {
    match history.get_mut(&attempt.question_id) {
        Some(entry) => {
            entry.attempt_count += 1;
            entry.last_attempted_at = attempt.attempted_at;
            entry.ever_correct = entry.ever_correct || attempt.is_correct;
        }
        None => {
            history.insert(
                attempt.question_id.clone(),
                HistoryEntry {
                    question_id: attempt.question_id.clone(),
                    ever_correct: attempt.is_correct,
                    last_attempted_at: attempt.attempted_at,
                    attempt_count: 1,
                },
            );
        }
    }
}

//! 选题模块：过滤候选题、逐题评分、Top-K 截断，最后打乱呈现顺序

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::selection::config::SelectionWeights;
use crate::selection::scorer::score_question;
use crate::selection::topics::build_topic_performance;
use crate::selection::types::{
    HistoryMap, Question, ScoredQuestion, SelectionOptions, TopicStatsMap,
};

/// 分数降序，同分按题目 id 升序，保证全序
fn score_desc(a: &ScoredQuestion, b: &ScoredQuestion) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.question_id.cmp(&b.question_id))
}

fn retain_top_k_by_score(questions: &mut Vec<ScoredQuestion>, k: usize) {
    if k == 0 {
        questions.clear();
        return;
    }

    if questions.len() <= k {
        questions.sort_by(score_desc);
        return;
    }

    questions.select_nth_unstable_by(k - 1, score_desc);
    questions.truncate(k);
    questions.sort_by(score_desc);
}

/// 按过滤条件取出可选题目，题目 id 重复时保留首次出现
fn eligible_questions<'a>(pool: &'a [Question], options: &SelectionOptions) -> Vec<&'a Question> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(pool.len());
    let mut eligible = Vec::with_capacity(pool.len());
    for question in pool {
        if options.matches(question) && seen.insert(question.id.as_str()) {
            eligible.push(question);
        }
    }
    eligible
}

fn score_eligible<R: Rng + ?Sized>(
    eligible: &[&Question],
    history: &HistoryMap,
    topic_stats: &TopicStatsMap,
    weights: &SelectionWeights,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ScoredQuestion> {
    eligible
        .iter()
        .map(|question| {
            let entry = history.get(&question.id);
            let stats = topic_stats.get(&question.topic);
            ScoredQuestion {
                question_id: question.id.clone(),
                score: score_question(question, entry, stats, weights, now, rng),
                is_new: entry.is_none(),
            }
        })
        .collect()
}

/// 返回全部可选题目的打分结果（降序，未截断、未打乱），用于诊断
pub fn rank_questions<R: Rng + ?Sized>(
    pool: &[Question],
    history: &HistoryMap,
    options: &SelectionOptions,
    defaults: &SelectionWeights,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ScoredQuestion> {
    let eligible = eligible_questions(pool, options);
    // 覆盖率始终基于完整题池计算，即使只在某个子主题内选题
    let topic_stats = build_topic_performance(pool, history);
    let weights = options.resolve_weights(defaults);
    let mut scored = score_eligible(&eligible, history, &topic_stats, &weights, now, rng);
    scored.sort_by(score_desc);
    scored
}

/// 使用默认权重选题
pub fn select_questions<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    count: usize,
    history: &HistoryMap,
    options: &SelectionOptions,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<&'a Question> {
    select_questions_with(
        pool,
        count,
        history,
        options,
        &SelectionWeights::default(),
        now,
        rng,
    )
}

/// 从候选题池中选出至多 `count` 道题；请求未覆盖的权重取 `defaults`
pub fn select_questions_with<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    count: usize,
    history: &HistoryMap,
    options: &SelectionOptions,
    defaults: &SelectionWeights,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<&'a Question> {
    let eligible = eligible_questions(pool, options);
    if eligible.is_empty() || count == 0 {
        tracing::debug!(
            pool = pool.len(),
            eligible = eligible.len(),
            count,
            "Nothing to select"
        );
        return Vec::new();
    }

    let topic_stats = build_topic_performance(pool, history);
    let weights = options.resolve_weights(defaults);

    let mut scored = score_eligible(&eligible, history, &topic_stats, &weights, now, rng);
    // 使用 Top-K 选择而非全量排序：从 O(n log n) 收敛为 O(n + k log k)
    retain_top_k_by_score(&mut scored, count);

    let by_id: HashMap<&str, &'a Question> =
        eligible.iter().map(|q| (q.id.as_str(), *q)).collect();
    let mut selected: Vec<&'a Question> = scored
        .iter()
        .filter_map(|sq| by_id.get(sq.question_id.as_str()).copied())
        .collect();

    // 排名只决定入选与否，不决定呈现顺序
    selected.shuffle(rng);

    tracing::debug!(
        pool = pool.len(),
        eligible = eligible.len(),
        selected = selected.len(),
        new = scored.iter().filter(|sq| sq.is_new).count(),
        "Selected questions"
    );
    selected
}

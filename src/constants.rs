/// 每天毫秒数
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// 单次答错加成的计数上限（超过后不再继续提高倍率）
pub const WRONG_ANSWER_ATTEMPT_CAP: u32 = 5;

/// 每次答错对答错权重的倍率增量
pub const WRONG_ANSWER_STEP: f64 = 0.1;

/// 距上次作答不足该天数视为“刚刚做过”
pub const RECENT_REPEAT_DAYS: f64 = 1.0;

/// 刚刚做过的题目的固定扣分
pub const RECENT_REPEAT_PENALTY: f64 = 0.5;

/// 达到该天数后开始给予间隔复习加成
pub const SPACED_REVIEW_DAYS: f64 = 3.0;

/// 间隔复习加成倍率上限
pub const SPACED_REVIEW_MAX_MULTIPLIER: f64 = 2.0;

/// 判定薄弱主题所需的最少作答题数
pub const WEAK_TOPIC_MIN_ATTEMPTED: u32 = 3;

/// 正确率低于该百分比视为薄弱主题
pub const WEAK_TOPIC_ACCURACY_THRESHOLD: u32 = 60;

/// 薄弱主题固定加成
pub const WEAK_TOPIC_BOOST: f64 = 0.1;

/// 随机扰动幅度，扰动取值范围为 [0, JITTER_SCALE)
pub const JITTER_SCALE: f64 = 0.1;

/// 覆盖率低于该百分比的主题计入“待覆盖主题”
pub const LOW_COVERAGE_THRESHOLD: u32 = 50;

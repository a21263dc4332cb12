use std::env;
use std::str::FromStr;

use crate::selection::config::SelectionWeights;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub request_path: String,
    pub seed: Option<u64>,
    pub weights: SelectionWeights,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = SelectionWeights::default();
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            request_path: env_or("SELECTION_REQUEST_PATH", "-"),
            seed: env_opt_parse("SELECTION_SEED"),
            weights: SelectionWeights {
                wrong_answer: env_or_parse("SELECTION_WRONG_ANSWER_WEIGHT", defaults.wrong_answer),
                low_coverage: env_or_parse("SELECTION_LOW_COVERAGE_WEIGHT", defaults.low_coverage),
                never_attempted: env_or_parse(
                    "SELECTION_NEVER_ATTEMPTED_WEIGHT",
                    defaults.never_attempted,
                ),
                spaced_repetition: env_or_parse(
                    "SELECTION_SPACED_REPETITION_WEIGHT",
                    defaults.spaced_repetition,
                ),
            },
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    env_opt_parse(key).unwrap_or(default)
}

/// 未设置或解析失败时返回 None，解析失败会记录告警
pub fn env_opt_parse<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(
                key,
                value = %raw,
                "Failed to parse env var, using default"
            );
            None
        }
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn managed_keys() -> &'static [&'static str] {
        &[
            "RUST_LOG",
            "ENABLE_FILE_LOGS",
            "SELECTION_REQUEST_PATH",
            "SELECTION_SEED",
            "SELECTION_WRONG_ANSWER_WEIGHT",
            "SELECTION_LOW_COVERAGE_WEIGHT",
        ]
    }

    fn clear_keys(keys: &[&str]) {
        for key in keys {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_defaults_when_missing() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        let cfg = Config::from_env();
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.enable_file_logs);
        assert_eq!(cfg.request_path, "-");
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.weights, SelectionWeights::default());
    }

    #[test]
    fn parses_numeric_values() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("SELECTION_SEED", "42");
        env::set_var("SELECTION_WRONG_ANSWER_WEIGHT", "0.6");
        env::set_var("ENABLE_FILE_LOGS", "yes");

        let cfg = Config::from_env();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.weights.wrong_answer, 0.6);
        assert_eq!(cfg.weights.low_coverage, 0.25);
        assert!(cfg.enable_file_logs);

        clear_keys(managed_keys());
    }

    #[test]
    fn invalid_values_fall_back() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("SELECTION_SEED", "abc");
        env::set_var("SELECTION_LOW_COVERAGE_WEIGHT", "lots");
        env::set_var("ENABLE_FILE_LOGS", "maybe");

        let cfg = Config::from_env();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.weights.low_coverage, 0.25);
        assert!(!cfg.enable_file_logs);

        clear_keys(managed_keys());
    }
}

use thiserror::Error;

/// 选题边界层错误：引擎本身是全函数，只有请求加载与权重校验会失败。
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}

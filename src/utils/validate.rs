use crate::errors::{MiniCanvasError, Result};

/// 校验文本字段非空
pub fn require_non_empty(value: &str, message: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(MiniCanvasError::invalid_argument(message));
    }
    Ok(())
}

/// 校验 ID 为正整数
pub fn require_positive_id(id: i64, message: &'static str) -> Result<()> {
    if id <= 0 {
        return Err(MiniCanvasError::invalid_argument(message));
    }
    Ok(())
}

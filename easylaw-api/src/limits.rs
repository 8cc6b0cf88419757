use thiserror::Error;

pub const MAX_MESSAGE_BYTES: usize = 10 * 1024 * 1024; // 10 MB

/// Longest request-target (path + query string) the daemon will route.
pub const MAX_TARGET_BYTES: usize = 8 * 1024;

#[derive(Debug, Error)]
pub enum LimitError {
    #[error("message too large: {actual} bytes (max {max})")]
    TooLarge { max: usize, actual: usize },
    #[error("request target too long: {actual} bytes (max {max})")]
    TargetTooLong { max: usize, actual: usize },
}

pub type LimitResult<T> = Result<T, LimitError>;

pub fn enforce_max_message_size(len: usize) -> LimitResult<()> {
    if len > MAX_MESSAGE_BYTES {
        return Err(LimitError::TooLarge { max: MAX_MESSAGE_BYTES, actual: len });
    }
    Ok(())
}

pub fn enforce_max_target_len(target: &str) -> LimitResult<()> {
    if target.len() > MAX_TARGET_BYTES {
        return Err(LimitError::TargetTooLong { max: MAX_TARGET_BYTES, actual: target.len() });
    }
    Ok(())
}

//! Tree construction errors.

use super::error_code::{self, TallyErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node handle {index} does not belong to this tree")]
    UnknownNode { index: usize },
}

impl TallyErrorCode for TreeError {
    fn error_code(&self) -> &'static str {
        error_code::TREE_ERROR
    }
}

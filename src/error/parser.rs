use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected end of input at byte {pos}")]
    UnexpectedEof { pos: usize },

    #[error("Expected '{expected}' at byte {pos}, found {found:?}")]
    Expected {
        expected: char,
        found: char,
        pos: usize,
    },

    #[error("Unterminated string starting at byte {pos}")]
    UnterminatedString { pos: usize },

    #[error("Invalid number literal {literal:?} at byte {pos}")]
    InvalidNumber { literal: String, pos: usize },
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unterminated comment (line: {row}, column: {col})")]
    UnterminatedComment { row: usize, col: usize },
    #[error("unterminated literal (line: {row}, column: {col})")]
    UnterminatedLiteral { row: usize, col: usize },
    #[error("unexpected {found:?} (line: {row}, column: {col})")]
    UnexpectedChar { found: char, row: usize, col: usize },
}

#[derive(Error, Debug)]
pub enum CsigError {
    #[error("SyntaxError: {0}")]
    Lexer(#[from] LexerError),
    #[error("SyntaxError: {message} (line: {row}, column: {col})")]
    Parse {
        message: String,
        row: usize,
        col: usize,
    },
    #[error("cannot encode catalog: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("cannot decode catalog: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CsigError {
    pub fn parse(message: impl Into<String>, row: usize, col: usize) -> Self {
        CsigError::Parse {
            message: message.into(),
            row,
            col,
        }
    }
}

pub type Result<T> = std::result::Result<T, CsigError>;

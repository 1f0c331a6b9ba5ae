mod scanner;
mod token;

pub use scanner::{ColumnMode, LexError, ScanError, ScanOptions, Scanner};
pub use token::{Token, TokenKind};

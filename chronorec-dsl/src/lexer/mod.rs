//! Lexer module for CHRONOREC record text

pub mod token;
pub mod scanner;

pub use token::*;
pub use scanner::*;

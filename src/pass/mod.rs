//! Password generation and the generated password type.

mod generate;
mod token;

pub use generate::generate;
pub use token::{GeneratedPassword, Token, TokenKind};

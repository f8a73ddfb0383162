//! Generated passwords and the tokens they are made of.

use std::fmt;

use zeroize::Zeroize;

/// Role of a token within a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Content: a character, word or syllable.
    Atom,
    /// Glue between atoms, as produced by separator functions.
    Separator,
}

/// One unit of a generated password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    kind: TokenKind,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            value: value.into(),
            kind,
        }
    }

    pub fn atom(c: char) -> Self {
        Token::new(c, TokenKind::Atom)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

impl Zeroize for Token {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

/// A password plus the min-entropy of the recipe that produced it.
///
/// Token contents are wiped on drop.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPassword {
    tokens: Vec<Token>,
    entropy: f64,
}

impl GeneratedPassword {
    pub fn new(tokens: Vec<Token>, entropy: f64) -> Self {
        GeneratedPassword { tokens, entropy }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Values of every token of the given kind, in order.
    pub fn tokens_of_kind(&self, kind: TokenKind) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.value.as_str())
            .collect()
    }

    /// False for an empty password.
    pub fn is_all_atoms(&self) -> bool {
        !self.tokens.is_empty() && self.tokens.iter().all(|t| t.kind == TokenKind::Atom)
    }

    /// Number of characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.tokens.iter().map(|t| t.value.chars().count()).sum()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(&token.value)?;
        }
        Ok(())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.tokens.zeroize();
    }
}

//! Uniform password generation from character recipes, with exact entropy.
//!
//! A [`Recipe`] says which character classes and literal characters may
//! appear, which must appear at least once, and which must never appear.
//! From it the engine derives the alphabet, counts exactly how many strings
//! meet every requirement, and samples one of them uniformly.
//!
//! ```no_run
//! use charspace::{Classes, Recipe};
//!
//! let recipe = Recipe {
//!     require: Classes::DIGITS | Classes::SYMBOLS,
//!     ..Recipe::new(20)
//! };
//! let pwd = recipe.generate()?;
//! println!("{pwd} ({:.1} bits)", pwd.entropy());
//! # Ok::<(), charspace::GenerationError>(())
//! ```
//!
//! Entropy is a property of the recipe alone. Because every satisfying string
//! is equally likely, it is the min-entropy of the output.

pub mod charset;
pub mod config;
pub mod entropy;
pub mod error;
pub mod pass;
pub mod rand;
pub mod recipe;

pub use crate::charset::{CharSet, CharacterClass, Classes};
pub use crate::config::GeneratorConfig;
pub use crate::error::{GenerationError, Result};
pub use crate::pass::{GeneratedPassword, Token, TokenKind};
pub use crate::rand::Rand;
pub use crate::recipe::{Alphabet, Generator, Recipe, RequiredSet};

//! hmsubst: a small workbench for a Hindley-Milner style type algebra.
//!
//! It features:
//!
//! - **Parsing** of type expressions (`Int`, `Bool`, variables, `a -> b`,
//!   schemes `a => b => T`) and substitutions (`{a: Int, b: a -> Bool}`)
//! - **Substitution** that respects scheme binders
//! - **Composition** of substitutions
//! - **Rendering** that parses back to the same type
//!
//! ```
//! use hmsubst::parser::{parse_substitution, parse_type};
//!
//! let ty = parse_type("a => (a -> b)").unwrap();
//! let subst = parse_substitution("{a: Int, b: Bool}").unwrap();
//! assert_eq!(subst.apply(&ty).to_string(), "a => (a -> Bool)");
//! ```

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

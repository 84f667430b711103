//! Lexing for type expressions: bracket structuring and arrow tokenization.

mod arrows;
mod paren;
mod token;

pub use arrows::{separate_arrows, split_run};
pub use paren::{build_paren_tree, located_span, strip_whitespace, Located, ParenGroup, ParenNode, Run};
pub use token::{Span, Spanned, Token};

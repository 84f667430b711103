//! Type system module for hmsubst.
//!
//! This module provides the core type definitions, substitution
//! implementation, and rendering for the type algebra.

mod pretty;
mod subst;
mod supply;
mod ty;

pub use subst::{apply_substitution, compose_substitutions, Subst, Substitutable};
pub use supply::VarSupply;
pub use ty::{Primitive, TVarName, Type, TypeScheme};

//! Rendering of types and substitutions.
//!
//! Functions always carry their own parentheses, so a rendered type parses
//! back to the same tree:
//! - `Int`, `a`
//! - `(Int -> (a -> Bool))`
//! - `a => b => (a -> b)`
//! - `{a: Int, b: (Int -> Bool)}`

use std::fmt::{self, Display};

use super::subst::Subst;
use super::ty::{Primitive, Type, TypeScheme};

impl Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => write!(f, "{}", p),
            Type::Var(name) => f.write_str(name),
            Type::Func(domain, codomain) => write!(f, "({} -> {})", domain, codomain),
            Type::Scheme(scheme) => write!(f, "{}", scheme),
        }
    }
}

impl Display for TypeScheme {
    /// A scheme without bound variables renders as its body alone.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.vars {
            write!(f, "{} => ", var)?;
        }
        write!(f, "{}", self.body)
    }
}

impl Display for Subst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, ty)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", var, ty)?;
        }
        write!(f, "}}")
    }
}

//! Core type definitions.
//!
//! The type algebra is deliberately small:
//! - primitive base types (`Int`, `Bool`)
//! - named type variables
//! - function types `a -> b`
//! - type schemes `a => b => T`, quantifying `T` over `a` and `b`

use std::collections::BTreeSet;

/// Type variable names are the literal names written by the user.
pub type TVarName = String;

/// Built-in base types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    Bool,
}

impl Primitive {
    pub const ALL: [Primitive; 2] = [Primitive::Int, Primitive::Bool];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Int => "Int",
            Primitive::Bool => "Bool",
        }
    }

    /// Exact, case-sensitive lookup: `int` is a type variable, not `Int`.
    pub fn from_name(name: &str) -> Option<Self> {
        Primitive::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Core type representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// Primitive type, equal by name.
    Primitive(Primitive),
    /// Type variable, identified by name.
    Var(TVarName),
    /// Function type: domain -> codomain
    Func(Box<Type>, Box<Type>),
    /// Universally quantified type.
    Scheme(TypeScheme),
}

impl Type {
    // === Constructors ===

    pub fn int() -> Self {
        Type::Primitive(Primitive::Int)
    }

    pub fn bool() -> Self {
        Type::Primitive(Primitive::Bool)
    }

    /// Create a type variable.
    pub fn var(name: impl Into<TVarName>) -> Self {
        Type::Var(name.into())
    }

    /// Create a function type.
    pub fn func(domain: Type, codomain: Type) -> Self {
        Type::Func(Box::new(domain), Box::new(codomain))
    }

    /// Create a scheme quantifying `body` over `vars`.
    pub fn scheme<S: Into<TVarName>>(vars: impl IntoIterator<Item = S>, body: Type) -> Self {
        Type::Scheme(TypeScheme::poly(vars, body))
    }

    // === Predicates ===

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Type::Func(..))
    }

    pub fn is_scheme(&self) -> bool {
        matches!(self, Type::Scheme(_))
    }

    // === Accessors ===

    pub fn as_var(&self) -> Option<&str> {
        match self {
            Type::Var(name) => Some(name),
            _ => None,
        }
    }

    /// Get (domain, codomain) if this is a function.
    pub fn as_func(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Func(domain, codomain) => Some((domain, codomain)),
            _ => None,
        }
    }

    pub fn as_scheme(&self) -> Option<&TypeScheme> {
        match self {
            Type::Scheme(scheme) => Some(scheme),
            _ => None,
        }
    }

    /// Collect the free type variables, in sorted order.
    pub fn free_vars(&self) -> BTreeSet<TVarName> {
        let mut vars = BTreeSet::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut BTreeSet<TVarName>) {
        match self {
            Type::Primitive(_) => {}
            Type::Var(name) => {
                vars.insert(name.clone());
            }
            Type::Func(domain, codomain) => {
                domain.collect_free_vars(vars);
                codomain.collect_free_vars(vars);
            }
            Type::Scheme(scheme) => vars.extend(scheme.free_vars()),
        }
    }
}

impl From<Primitive> for Type {
    fn from(p: Primitive) -> Self {
        Type::Primitive(p)
    }
}

impl From<TypeScheme> for Type {
    fn from(scheme: TypeScheme) -> Self {
        Type::Scheme(scheme)
    }
}

/// Type scheme: `body` quantified over the bound variable names.
/// Names are assumed unique; order is kept for display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeScheme {
    pub vars: Vec<TVarName>,
    pub body: Box<Type>,
}

impl TypeScheme {
    /// Create a monomorphic type scheme (no quantification).
    pub fn mono(ty: Type) -> Self {
        TypeScheme {
            vars: vec![],
            body: Box::new(ty),
        }
    }

    /// Create a type scheme with the given quantified variables.
    pub fn poly<S: Into<TVarName>>(vars: impl IntoIterator<Item = S>, ty: Type) -> Self {
        TypeScheme {
            vars: vars.into_iter().map(Into::into).collect(),
            body: Box::new(ty),
        }
    }

    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn binds(&self, name: &str) -> bool {
        self.vars.iter().any(|v| v == name)
    }

    /// Free variables of the body that are not bound here.
    pub fn free_vars(&self) -> BTreeSet<TVarName> {
        let mut vars = self.body.free_vars();
        for v in &self.vars {
            vars.remove(v);
        }
        vars
    }
}

//! Substitution for types.
//!
//! Implements the substitution data structure and the Substitutable trait
//! for applying substitutions to types and type schemes.

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::ty::{TVarName, Type, TypeScheme};

/// A substitution mapping type variable names to types.
///
/// Insertion order is kept for display; equality ignores it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subst {
    map: IndexMap<TVarName, Type>,
}

impl Subst {
    /// Create an empty substitution.
    pub fn empty() -> Self {
        Subst {
            map: IndexMap::new(),
        }
    }

    /// Create a singleton substitution.
    pub fn singleton(var: impl Into<TVarName>, ty: Type) -> Self {
        let mut map = IndexMap::new();
        map.insert(var.into(), ty);
        Subst { map }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Get the type for a variable, if present.
    pub fn get(&self, var: &str) -> Option<&Type> {
        self.map.get(var)
    }

    /// Check if a variable is in the domain.
    pub fn contains(&self, var: &str) -> bool {
        self.map.contains_key(var)
    }

    /// Insert a mapping. An existing key keeps its position and takes the new type.
    pub fn insert(&mut self, var: impl Into<TVarName>, ty: Type) {
        self.map.insert(var.into(), ty);
    }

    /// The domain, in insertion order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Compose two substitutions: `(self ∘ first)(x) = self(first(x))`.
    ///
    /// Every mapping of `first` is rewritten through `self`; mappings of
    /// `self` whose key `first` does not bind are appended unchanged.
    pub fn compose(&self, first: &Subst) -> Subst {
        let mut map = IndexMap::with_capacity(self.map.len() + first.map.len());

        for (var, ty) in &first.map {
            map.insert(var.clone(), self.apply(ty));
        }

        for (var, ty) in &self.map {
            if !map.contains_key(var) {
                map.insert(var.clone(), ty.clone());
            }
        }

        debug!(
            second = self.map.len(),
            first = first.map.len(),
            composed = map.len(),
            "composed substitutions"
        );
        Subst { map }
    }

    /// Apply this substitution to a substitutable value.
    pub fn apply<T: Substitutable>(&self, t: &T) -> T {
        t.apply_subst(self)
    }

    /// Create a new substitution with certain variables removed.
    pub fn remove_vars(&self, vars: &[TVarName]) -> Subst {
        self.map
            .iter()
            .filter(|(var, _)| !vars.contains(var))
            .map(|(var, ty)| (var.clone(), ty.clone()))
            .collect()
    }

    /// Iterate over the mappings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.map.iter().map(|(var, ty)| (var.as_str(), ty))
    }
}

impl IntoIterator for Subst {
    type Item = (TVarName, Type);
    type IntoIter = indexmap::map::IntoIter<TVarName, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl FromIterator<(TVarName, Type)> for Subst {
    fn from_iter<T: IntoIterator<Item = (TVarName, Type)>>(iter: T) -> Self {
        Subst {
            map: iter.into_iter().collect(),
        }
    }
}

/// Trait for types that can have substitutions applied.
pub trait Substitutable {
    /// Apply a substitution to this value.
    fn apply_subst(&self, subst: &Subst) -> Self;
}

impl Substitutable for Type {
    fn apply_subst(&self, subst: &Subst) -> Self {
        match self {
            Type::Primitive(_) => self.clone(),

            // Single step: the replacement is not substituted again.
            Type::Var(name) => subst.get(name).cloned().unwrap_or_else(|| self.clone()),

            Type::Func(domain, codomain) => {
                Type::func(domain.apply_subst(subst), codomain.apply_subst(subst))
            }

            Type::Scheme(scheme) => Type::Scheme(scheme.apply_subst(subst)),
        }
    }
}

impl Substitutable for TypeScheme {
    fn apply_subst(&self, subst: &Subst) -> Self {
        // Bound names shadow the substitution; nothing is renamed.
        let filtered_subst = subst.remove_vars(&self.vars);
        if filtered_subst.len() != subst.len() {
            trace!(bound = ?self.vars, "pruned bound variables from substitution");
        }
        TypeScheme {
            vars: self.vars.clone(),
            body: Box::new(self.body.apply_subst(&filtered_subst)),
        }
    }
}

/// Apply `subst` to `ty`.
pub fn apply_substitution(subst: &Subst, ty: &Type) -> Type {
    subst.apply(ty)
}

/// The substitution equivalent to applying `first`, then `second`.
pub fn compose_substitutions(second: &Subst, first: &Subst) -> Subst {
    second.compose(first)
}

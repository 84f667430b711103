//! Property-based tests for parsing, rendering and substitution laws.

use proptest::prelude::*;

use super::{parse_substitution, parse_type};
use crate::types::{Primitive, Subst, Type, TypeScheme};

// Lowercase start, so never a primitive name.
fn ident_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,3}").unwrap()
}

fn primitive_strategy() -> impl Strategy<Value = Type> {
    prop_oneof![Just(Primitive::Int), Just(Primitive::Bool)].prop_map(Type::Primitive)
}

// Types without schemes: primitives, variables and functions.
fn mono_strategy() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![primitive_strategy(), ident_strategy().prop_map(Type::Var)];

    leaf.prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), inner).prop_map(|(domain, codomain)| Type::func(domain, codomain))
    })
}

// Schemes only at the top: a scheme rendered inside a function does not
// parse back to the same tree.
fn type_strategy() -> impl Strategy<Value = Type> {
    prop_oneof![
        3 => mono_strategy(),
        1 => (prop::collection::vec(ident_strategy(), 1..4), mono_strategy())
            .prop_map(|(vars, body)| Type::Scheme(TypeScheme::poly(vars, body))),
    ]
}

fn subst_strategy() -> impl Strategy<Value = Subst> {
    prop::collection::vec((ident_strategy(), type_strategy()), 0..5)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_type_round_trip(ty in type_strategy()) {
        let source = ty.to_string();
        match parse_type(&source) {
            Ok(parsed) => {
                prop_assert_eq!(parsed, ty, "Source: {}", source);
            }
            Err(e) => {
                prop_assert!(false, "Parse failed: {}\nSource: {}", e, source);
            }
        }
    }

    #[test]
    fn prop_subst_round_trip(subst in subst_strategy()) {
        let source = subst.to_string();
        match parse_substitution(&source) {
            Ok(parsed) => {
                prop_assert_eq!(parsed, subst, "Source: {}", source);
            }
            Err(e) => {
                prop_assert!(false, "Parse failed: {}\nSource: {}", e, source);
            }
        }
    }

    #[test]
    fn prop_empty_subst_is_identity(ty in type_strategy()) {
        prop_assert_eq!(Subst::empty().apply(&ty), ty);
    }

    #[test]
    fn prop_primitives_are_invariant(subst in subst_strategy(), p in primitive_strategy()) {
        prop_assert_eq!(subst.apply(&p), p);
    }

    #[test]
    fn prop_compose_with_empty_is_identity(subst in subst_strategy()) {
        prop_assert_eq!(Subst::empty().compose(&subst), subst.clone());
        prop_assert_eq!(subst.compose(&Subst::empty()), subst);
    }

    #[test]
    fn prop_compose_domain_is_union(second in subst_strategy(), first in subst_strategy()) {
        let composed = second.compose(&first);
        for var in first.domain().chain(second.domain()) {
            prop_assert!(composed.contains(var));
        }
        for var in composed.domain() {
            prop_assert!(first.contains(var) || second.contains(var));
        }
    }

    #[test]
    fn prop_compose_on_variables(second in subst_strategy(), first in subst_strategy()) {
        let composed = second.compose(&first);
        for var in first.domain() {
            let v = Type::var(var);
            prop_assert_eq!(composed.apply(&v), second.apply(&first.apply(&v)));
        }
    }

    #[test]
    fn prop_compose_on_mono_types(
        second in subst_strategy(),
        first in subst_strategy(),
        ty in mono_strategy(),
    ) {
        let composed = second.compose(&first);
        prop_assert_eq!(composed.apply(&ty), second.apply(&first.apply(&ty)));
    }

    #[test]
    fn prop_whitespace_is_insignificant(ty in mono_strategy()) {
        let spaced = ty.to_string().replace("->", " \t-> ").replace('(', "( ");
        prop_assert_eq!(parse_type(&spaced).ok(), Some(ty));
    }
}

//! Fresh type variable generation.

use super::ty::Type;

/// Hands out type variables `t0`, `t1`, ... in order.
///
/// A supply is an ordinary value: callers that need fresh names own one and
/// pass it along, so independent callers never see each other's counters.
#[derive(Clone, Debug, Default)]
pub struct VarSupply {
    next: u32,
}

impl VarSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start numbering at `next`, e.g. to avoid names already in use.
    pub fn starting_at(next: u32) -> Self {
        VarSupply { next }
    }

    /// Generate the next fresh variable name.
    pub fn fresh_name(&mut self) -> String {
        let name = format!("t{}", self.next);
        self.next += 1;
        name
    }

    pub fn fresh(&mut self) -> Type {
        Type::Var(self.fresh_name())
    }
}

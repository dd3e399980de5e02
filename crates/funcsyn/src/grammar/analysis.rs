//! Nullable (epsilon-closure) analysis.

use crate::grammar::{Production, Symbol};
use hashbrown::{HashMap, HashSet};
use lasso::{Rodeo, Spur};

/// The set of nonterminals that can derive the empty token sequence.
///
/// Computed once at grammar construction by fixed-point iteration: a
/// nonterminal joins the set when some production's right-hand side is empty
/// or consists solely of nonterminals already in the set. Grammar
/// immutability is what makes storing the result sound.
#[derive(Debug)]
pub(crate) struct NullableSet {
    set: HashSet<Spur, ahash::RandomState>,
}

impl NullableSet {
    pub(crate) fn compute(
        productions: &HashMap<Spur, Vec<Production>, ahash::RandomState>,
        interner: &Rodeo,
    ) -> Self {
        let mut set: HashSet<Spur, ahash::RandomState> =
            HashSet::with_hasher(ahash::RandomState::new());

        let mut changed = true;
        while changed {
            changed = false;
            for (lhs, alternatives) in productions {
                if set.contains(lhs) {
                    continue;
                }
                let derivable = alternatives.iter().any(|production| {
                    production.rhs.iter().all(|symbol| match symbol {
                        Symbol::Terminal(_) => false,
                        Symbol::Nonterminal(name) => {
                            interner.get(name).is_some_and(|spur| set.contains(&spur))
                        }
                    })
                });
                if derivable {
                    set.insert(*lhs);
                    changed = true;
                }
            }
        }

        Self { set }
    }

    pub(crate) fn contains(&self, nonterminal: Spur) -> bool {
        self.set.contains(&nonterminal)
    }
}

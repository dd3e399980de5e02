use crate::error::MalformedGrammarError;
use crate::grammar::{NullableSet, Symbol, validate};
use compact_str::CompactString;
use hashbrown::HashMap;
use lasso::{Rodeo, RodeoReader, Spur};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A production rule: a nonterminal left-hand side and an ordered sequence
/// of symbols. An empty right-hand side is an epsilon production.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Production {
    /// The nonterminal this production defines.
    pub lhs: CompactString,
    /// The symbol sequence it derives. Empty for epsilon.
    pub rhs: SmallVec<[Symbol; 6]>,
}

impl Production {
    /// Create a production.
    pub fn new(lhs: impl Into<CompactString>, rhs: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into_iter().collect(),
        }
    }

    /// Whether the right-hand side is empty.
    #[must_use]
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        if self.rhs.is_empty() {
            return f.write_str(" ε");
        }
        for symbol in &self.rhs {
            write!(f, " {symbol}")?;
        }
        Ok(())
    }
}

/// An immutable context-free grammar.
///
/// A `Grammar` is built once through [`GrammarBuilder`] and never mutated.
/// Nonterminal names are interned so that chart cells and the nullable set
/// work with cheap copyable keys instead of strings, and the interner is
/// frozen into a read-only view at build time, making the grammar safe to
/// share across threads.
///
/// The set of nonterminals is implicitly the set of left-hand sides; the
/// set of terminals is implicitly the literals appearing on right-hand
/// sides. Construction guarantees that no right-hand side references an
/// undefined nonterminal.
#[derive(Debug)]
pub struct Grammar {
    productions: HashMap<Spur, Vec<Production>, ahash::RandomState>,
    start: Spur,
    interner: RodeoReader,
    nullable: NullableSet,
}

impl Grammar {
    /// The start symbol's name.
    #[must_use]
    pub fn start_symbol(&self) -> &str {
        self.interner.resolve(&self.start)
    }

    /// The productions defining `nonterminal`, in insertion order. Empty
    /// for names the grammar does not define.
    #[must_use]
    pub fn productions_for(&self, nonterminal: &str) -> &[Production] {
        self.interner
            .get(nonterminal)
            .map_or(&[], |spur| self.alternatives(spur))
    }

    /// Whether `nonterminal` is defined as a left-hand side.
    #[must_use]
    pub fn is_defined(&self, nonterminal: &str) -> bool {
        self.interner
            .get(nonterminal)
            .is_some_and(|spur| self.productions.contains_key(&spur))
    }

    /// Whether `symbol` is a terminal.
    #[must_use]
    pub fn is_terminal(&self, symbol: &Symbol) -> bool {
        symbol.is_terminal()
    }

    /// Whether `nonterminal` can derive the empty token sequence, possibly
    /// transitively. False for names the grammar does not define.
    #[must_use]
    pub fn is_nullable(&self, nonterminal: &str) -> bool {
        self.interner
            .get(nonterminal)
            .is_some_and(|spur| self.nullable.contains(spur))
    }

    /// Iterate over every production in the grammar.
    pub fn productions(&self) -> impl Iterator<Item = &Production> {
        self.productions.values().flatten()
    }

    /// Number of distinct nonterminals.
    #[must_use]
    pub fn nonterminal_count(&self) -> usize {
        self.productions.len()
    }

    /// The set of terminal literals appearing on right-hand sides.
    #[must_use]
    pub fn terminals(&self) -> hashbrown::HashSet<&str, ahash::RandomState> {
        let mut set = hashbrown::HashSet::with_hasher(ahash::RandomState::new());
        for production in self.productions() {
            for symbol in &production.rhs {
                if let Symbol::Terminal(literal) = symbol {
                    set.insert(literal.as_str());
                }
            }
        }
        set
    }

    pub(crate) const fn start_spur(&self) -> Spur {
        self.start
    }

    pub(crate) fn nonterminal_spur(&self, name: &str) -> Option<Spur> {
        self.interner.get(name)
    }

    pub(crate) fn alternatives(&self, nonterminal: Spur) -> &[Production] {
        self.productions
            .get(&nonterminal)
            .map_or(&[], Vec::as_slice)
    }

    pub(crate) fn spur_nullable(&self, nonterminal: Spur) -> bool {
        self.nullable.contains(nonterminal)
    }
}

/// Builder for constructing grammars.
pub struct GrammarBuilder {
    start: Option<CompactString>,
    productions: Vec<Production>,
    interner: Rodeo,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: None,
            productions: Vec::new(),
            interner: Rodeo::new(),
        }
    }

    /// Set the start symbol.
    #[must_use]
    pub fn start_symbol(mut self, name: impl Into<CompactString>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Add a production `lhs -> rhs`. Pass an empty sequence for an epsilon
    /// production. Repeated calls with the same `lhs` accumulate
    /// alternatives.
    #[must_use]
    pub fn production(
        mut self,
        lhs: impl Into<CompactString>,
        rhs: impl IntoIterator<Item = Symbol>,
    ) -> Self {
        self.productions.push(Production::new(lhs, rhs));
        self
    }

    /// Build the grammar from the configured productions.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedGrammarError`] if no start symbol was set, the
    /// production list is empty, the start symbol is undefined, or any
    /// right-hand side references an undefined nonterminal.
    pub fn build(self) -> Result<Grammar, MalformedGrammarError> {
        let Self {
            start,
            productions,
            mut interner,
        } = self;

        let start_name = start.ok_or(MalformedGrammarError::MissingStartSymbol)?;
        validate::validate_productions(&start_name, &productions)?;

        let mut by_lhs: HashMap<Spur, Vec<Production>, ahash::RandomState> =
            HashMap::with_hasher(ahash::RandomState::new());
        for production in productions {
            let lhs = interner.get_or_intern(production.lhs.as_str());
            by_lhs.entry(lhs).or_default().push(production);
        }
        let start = interner.get_or_intern(start_name.as_str());
        let nullable = NullableSet::compute(&by_lhs, &interner);

        Ok(Grammar {
            productions: by_lhs,
            start,
            interner: interner.into_reader(),
            nullable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(literal: &str) -> Symbol {
        Symbol::terminal(literal)
    }

    fn nt(name: &str) -> Symbol {
        Symbol::nonterminal(name)
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn grammar_is_shareable_across_threads() {
        assert_send_sync::<Grammar>();
    }

    #[test]
    fn builder_collects_alternatives_per_lhs() {
        let grammar = GrammarBuilder::new()
            .start_symbol("S")
            .production("S", [t("a")])
            .production("S", [t("b")])
            .build()
            .unwrap();

        assert_eq!(grammar.productions_for("S").len(), 2);
        assert_eq!(grammar.nonterminal_count(), 1);
    }

    #[test]
    fn build_without_start_symbol_fails() {
        let result = GrammarBuilder::new().production("S", [t("a")]).build();
        assert_eq!(result.err(), Some(MalformedGrammarError::MissingStartSymbol));
    }

    #[test]
    fn queries_on_unknown_names_are_defined() {
        let grammar = GrammarBuilder::new()
            .start_symbol("S")
            .production("S", [t("a")])
            .build()
            .unwrap();

        assert!(grammar.productions_for("Missing").is_empty());
        assert!(!grammar.is_defined("Missing"));
        assert!(!grammar.is_nullable("Missing"));
    }

    #[test]
    fn terminal_query_follows_the_symbol_tag() {
        let grammar = GrammarBuilder::new()
            .start_symbol("S")
            .production("S", [t("a"), nt("S")])
            .production("S", [])
            .build()
            .unwrap();

        assert!(grammar.is_terminal(&t("a")));
        assert!(!grammar.is_terminal(&nt("S")));
        assert_eq!(grammar.terminals().len(), 1);
    }

    #[test]
    fn production_display_uses_cfg_notation() {
        let production = Production::new("Body", [t("{"), nt("BodyContent"), t("}")]);
        assert_eq!(production.to_string(), "Body -> '{' BodyContent '}'");

        let epsilon = Production::new("ReturnTail", []);
        assert!(epsilon.is_epsilon());
        assert_eq!(epsilon.to_string(), "ReturnTail -> ε");
    }
}

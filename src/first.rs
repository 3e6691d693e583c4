// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
//! FIRST sets.
use std::collections::BTreeSet;

use crate::grammar::Grammar;
use crate::sets::{solve_to_fixed_point, FirstSets, SymbolSets};
use crate::symbol::Symbol;

/// FIRST of a string of symbols under the given FIRST sets.
///
/// Scanning stops at the first symbol that cannot vanish. The result holds
/// `ε` only when every symbol can vanish, which includes the empty string.
/// Nonterminals without an entry count as an empty, non-nullable set.
pub fn first_of_symbols(first: &FirstSets, symbols: &[Symbol]) -> BTreeSet<Symbol> {
    let mut result = BTreeSet::new();
    for symbol in symbols {
        match *symbol {
            Symbol::Epsilon => (),
            Symbol::Terminal(_) | Symbol::EndMarker => {
                result.insert(*symbol);
                return result;
            }
            Symbol::NonTerminal(nt) => {
                let set = match first.get(nt) {
                    Some(set) => set,
                    None => return result,
                };
                result.extend(set.iter().filter(|s| **s != Symbol::Epsilon).copied());
                if !set.contains(&Symbol::Epsilon) {
                    return result;
                }
            }
        }
    }
    result.insert(Symbol::Epsilon);
    result
}

/// Empty FIRST sets for every nonterminal the grammar mentions.
pub fn initial_first(grammar: &Grammar) -> FirstSets {
    SymbolSets::with_keys(grammar.referenced_non_terminals())
}

/// One full pass over every production. Returns the grown sets and whether
/// any set gained a symbol.
pub fn first_pass(grammar: &Grammar, first: &FirstSets) -> (FirstSets, bool) {
    let mut next = first.clone();
    let mut changed = false;
    for production in grammar.productions() {
        let leading = first_of_symbols(&next, &production.body);
        changed |= next.union_with(production.head, leading);
    }
    (next, changed)
}

/// Runs [`first_pass`] to convergence, also returning the number of passes.
pub(crate) fn solve_first(grammar: &Grammar) -> (FirstSets, usize) {
    solve_to_fixed_point(initial_first(grammar), |first| first_pass(grammar, first))
}

/// FIRST sets of every nonterminal. Does not validate the grammar:
/// undefined nonterminals end up with empty sets.
pub fn compute_first(grammar: &Grammar) -> FirstSets {
    solve_first(grammar).0
}

// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::symbol::Symbol;

/// Nonterminal to set of symbols. Sets only ever grow: there is no way to
/// remove a symbol once it is in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSets {
    map: HashMap<char, BTreeSet<Symbol>>,
}

pub type FirstSets = SymbolSets;
pub type FollowSets = SymbolSets;

impl SymbolSets {
    /// Empty sets for each of `non_terminals`.
    pub fn with_keys<I>(non_terminals: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        SymbolSets {
            map: non_terminals
                .into_iter()
                .map(|nt| (nt, BTreeSet::new()))
                .collect(),
        }
    }

    pub fn get(&self, non_terminal: char) -> Option<&BTreeSet<Symbol>> {
        self.map.get(&non_terminal)
    }

    pub fn contains(&self, non_terminal: char, symbol: Symbol) -> bool {
        self.get(non_terminal)
            .map_or(false, |set| set.contains(&symbol))
    }

    /// Returns whether the set has changed.
    pub(crate) fn insert(&mut self, non_terminal: char, symbol: Symbol) -> bool {
        self.map.entry(non_terminal).or_default().insert(symbol)
    }

    /// Returns whether the set has changed.
    pub(crate) fn union_with<I>(&mut self, non_terminal: char, symbols: I) -> bool
    where
        I: IntoIterator<Item = Symbol>,
    {
        let set = self.map.entry(non_terminal).or_default();
        let mut changed = false;
        for symbol in symbols {
            changed |= set.insert(symbol);
        }
        changed
    }

    /// Nonterminals with an entry, sorted.
    pub fn non_terminals(&self) -> Vec<char> {
        let mut keys: Vec<char> = self.map.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &BTreeSet<Symbol>)> + '_ {
        self.map.iter().map(|(nt, set)| (*nt, set))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// True when every set here is contained in the matching set of `other`.
    pub fn is_subset_of(&self, other: &SymbolSets) -> bool {
        self.map.iter().all(|(nt, set)| match other.get(*nt) {
            Some(theirs) => set.is_subset(theirs),
            None => set.is_empty(),
        })
    }
}

/// Runs `pass` until it reports no change. Returns the converged sets and the
/// number of passes, the last one being the pass that changed nothing.
pub(crate) fn solve_to_fixed_point<F>(mut sets: SymbolSets, mut pass: F) -> (SymbolSets, usize)
where
    F: FnMut(&SymbolSets) -> (SymbolSets, bool),
{
    let mut passes = 0;
    loop {
        let (next, changed) = pass(&sets);
        passes += 1;
        sets = next;
        if !changed {
            return (sets, passes);
        }
    }
}

// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
use std::collections::BTreeSet;

use crate::error::GrammarErrors;
use crate::first::solve_first;
use crate::follow::solve_follow;
use crate::grammar::Grammar;
use crate::sets::{FirstSets, FollowSets};
use crate::symbol::Symbol;

/// Computes FIRST and FOLLOW sets for a grammar that has passed validation.
/// Holds nothing but the grammar; every call starts from empty sets.
#[derive(Debug, Clone, Copy)]
pub struct SetSolver<'g> {
    grammar: &'g Grammar,
}

impl<'g> SetSolver<'g> {
    /// Fails with every undefined nonterminal instead of solving a grammar
    /// where they would silently contribute nothing.
    pub fn new(grammar: &'g Grammar) -> Result<Self, GrammarErrors> {
        grammar.validate()?;
        Ok(SetSolver { grammar })
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn compute_first(&self) -> FirstSets {
        solve_first(self.grammar).0
    }

    /// `first` must come from [`SetSolver::compute_first`] on the same grammar.
    pub fn compute_follow(&self, first: &FirstSets) -> FollowSets {
        solve_follow(self.grammar, first).0
    }

    /// Both passes in order.
    pub fn solve(&self) -> Analysis {
        let (first, first_passes) = solve_first(self.grammar);
        let (follow, follow_passes) = solve_follow(self.grammar, &first);
        Analysis {
            first,
            follow,
            first_passes,
            follow_passes,
        }
    }
}

/// Converged FIRST and FOLLOW sets. Read only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    first: FirstSets,
    follow: FollowSets,
    first_passes: usize,
    follow_passes: usize,
}

impl Analysis {
    pub fn first_sets(&self) -> &FirstSets {
        &self.first
    }

    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow
    }

    pub fn first(&self, non_terminal: char) -> Option<&BTreeSet<Symbol>> {
        self.first.get(non_terminal)
    }

    pub fn follow(&self, non_terminal: char) -> Option<&BTreeSet<Symbol>> {
        self.follow.get(non_terminal)
    }

    /// Whether `non_terminal` derives the empty string.
    pub fn is_nullable(&self, non_terminal: char) -> bool {
        self.first.contains(non_terminal, Symbol::Epsilon)
    }

    /// Passes the FIRST computation took, counting the final quiet one.
    pub fn first_passes(&self) -> usize {
        self.first_passes
    }

    /// Passes the FOLLOW computation took, counting the final quiet one.
    pub fn follow_passes(&self) -> usize {
        self.follow_passes
    }
}

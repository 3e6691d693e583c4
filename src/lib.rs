//! Computes FIRST and FOLLOW sets of a context free grammar.
//!
//! Build a [`Grammar`] from already classified [`Symbol`]s, then hand it to a
//! [`SetSolver`] (or call [`analyze`]). Reading grammar files and printing the
//! sets is left to the caller.
// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

mod error;
pub mod first;
pub mod follow;
mod grammar;
mod sets;
mod solver;
mod symbol;

pub use crate::error::{GrammarError, GrammarErrors};
pub use crate::first::{compute_first, first_of_symbols, first_pass};
pub use crate::follow::{compute_follow, follow_pass};
pub use crate::grammar::{Grammar, Production};
pub use crate::sets::{FirstSets, FollowSets, SymbolSets};
pub use crate::solver::{Analysis, SetSolver};
pub use crate::symbol::{Symbol, END_MARKER, EPSILON};

/// Validates `grammar` and computes both FIRST and FOLLOW sets.
pub fn analyze(grammar: &Grammar) -> Result<Analysis, GrammarErrors> {
    Ok(SetSolver::new(grammar)?.solve())
}

// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
use std::fmt::{self, Display};

/// Problems found when a grammar is checked before solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The start symbol heads no production.
    UndefinedStart(char),
    /// A body mentions a nonterminal that heads no production.
    UndefinedNonTerminal {
        non_terminal: char,
        referenced_by: char,
    },
}

impl Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::UndefinedStart(start) => {
                write!(f, "start symbol {} has no productions", start)
            }
            GrammarError::UndefinedNonTerminal {
                non_terminal,
                referenced_by,
            } => write!(
                f,
                "nonterminal {} is used in a production of {} but never defined",
                non_terminal, referenced_by
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

pub type GrammarErrors = Vec<GrammarError>;

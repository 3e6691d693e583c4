// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
use indexmap::{IndexMap, IndexSet};

use crate::error::{GrammarError, GrammarErrors};
use crate::symbol::Symbol;

/// One alternative of a nonterminal, `head -> body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub head: char,
    pub body: Vec<Symbol>,
}

/// Productions grouped by the nonterminal they define, in the order they were added,
/// together with the start symbol.
#[derive(Debug, Clone)]
pub struct Grammar {
    start: char,
    rule_map: IndexMap<char, Vec<Production>>,
}

impl Grammar {
    pub fn new(start: char) -> Self {
        Grammar {
            start,
            rule_map: IndexMap::new(),
        }
    }

    /// Appends another alternative for `non_terminal`. Duplicates are kept and
    /// nothing in `body` is checked here, see [`Grammar::validate`].
    pub fn add_production<I>(&mut self, non_terminal: char, body: I)
    where
        I: IntoIterator<Item = Symbol>,
    {
        let production = Production {
            head: non_terminal,
            body: body.into_iter().collect(),
        };
        self.rule_map
            .entry(non_terminal)
            .or_insert_with(Vec::new)
            .push(production);
    }

    /// Alternatives of `non_terminal`, empty when it has none.
    pub fn productions_of(&self, non_terminal: char) -> &[Production] {
        self.rule_map
            .get(&non_terminal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn start(&self) -> char {
        self.start
    }

    /// Nonterminals that head at least one production, in declaration order.
    pub fn non_terminals(&self) -> impl Iterator<Item = char> + '_ {
        self.rule_map.keys().copied()
    }

    /// Every production of the grammar, grouped by head.
    pub fn productions(&self) -> impl Iterator<Item = &Production> + '_ {
        self.rule_map.values().flatten()
    }

    /// Defined nonterminals followed by those only mentioned inside bodies.
    pub fn referenced_non_terminals(&self) -> IndexSet<char> {
        let mut all: IndexSet<char> = self.non_terminals().collect();
        all.insert(self.start);
        all.extend(
            self.productions()
                .flat_map(|production| production.body.iter())
                .filter_map(|symbol| symbol.non_terminal()),
        );
        all
    }

    /// Checks that the start symbol and every nonterminal used in a body have
    /// productions. Each undefined nonterminal is reported once, against the
    /// first production that uses it.
    pub fn validate(&self) -> Result<(), GrammarErrors> {
        let mut errors = Vec::new();
        if !self.rule_map.contains_key(&self.start) {
            errors.push(GrammarError::UndefinedStart(self.start));
        }

        let mut reported = IndexSet::new();
        for production in self.productions() {
            for non_terminal in production.body.iter().filter_map(|s| s.non_terminal()) {
                if self.rule_map.contains_key(&non_terminal) || non_terminal == self.start {
                    continue;
                }
                if reported.insert(non_terminal) {
                    errors.push(GrammarError::UndefinedNonTerminal {
                        non_terminal,
                        referenced_by: production.head,
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

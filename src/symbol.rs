// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
use std::fmt;

/// Character that spells the empty string in a production body.
pub const EPSILON: char = 'ε';
/// Character that spells the end of input.
pub const END_MARKER: char = '$';

/// A single grammar symbol. The variant is decided once, when the grammar
/// is built, and never looked at through character case again.
///
/// The derived ordering puts terminals first, sorted by character, then
/// nonterminals, then `ε` and `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Terminal(char),
    NonTerminal(char),
    Epsilon,
    EndMarker,
}

impl Symbol {
    /// Classifies one character: uppercase letters are nonterminals,
    /// `ε` is the empty string, `$` is the end marker and anything else is a terminal.
    pub fn classify(c: char) -> Self {
        match c {
            EPSILON => Symbol::Epsilon,
            END_MARKER => Symbol::EndMarker,
            _ if c.is_uppercase() => Symbol::NonTerminal(c),
            _ => Symbol::Terminal(c),
        }
    }

    /// Classifies a whole body such as `E+T`, skipping whitespace.
    pub fn classify_all(body: &str) -> Vec<Symbol> {
        body.chars()
            .filter(|c| !c.is_whitespace())
            .map(Symbol::classify)
            .collect()
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Terminal(c) | Symbol::NonTerminal(c) => c,
            Symbol::Epsilon => EPSILON,
            Symbol::EndMarker => END_MARKER,
        }
    }

    /// The nonterminal name, if this is one.
    pub fn non_terminal(self) -> Option<char> {
        match self {
            Symbol::NonTerminal(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_by_case() {
        assert_eq!(Symbol::classify('E'), Symbol::NonTerminal('E'));
        assert_eq!(Symbol::classify('i'), Symbol::Terminal('i'));
        assert_eq!(Symbol::classify('('), Symbol::Terminal('('));
        assert_eq!(Symbol::classify('ε'), Symbol::Epsilon);
        assert_eq!(Symbol::classify('$'), Symbol::EndMarker);
    }

    #[test]
    fn classify_body() {
        assert_eq!(
            Symbol::classify_all("E + T"),
            vec![
                Symbol::NonTerminal('E'),
                Symbol::Terminal('+'),
                Symbol::NonTerminal('T'),
            ]
        );
        assert_eq!(Symbol::classify_all(""), Vec::<Symbol>::new());
    }

    #[test]
    fn display_order() {
        let mut symbols = vec![
            Symbol::EndMarker,
            Symbol::Epsilon,
            Symbol::Terminal('i'),
            Symbol::Terminal('('),
        ];
        symbols.sort();
        let shown: String = symbols.iter().map(|s| s.to_string()).collect();
        assert_eq!(shown, "(iε$");
    }
}

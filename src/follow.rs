// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.
//! FOLLOW sets. Needs converged FIRST sets.
use crate::first::{first_of_symbols, first_pass};
use crate::grammar::Grammar;
use crate::sets::{solve_to_fixed_point, FirstSets, FollowSets, SymbolSets};
use crate::symbol::Symbol;

/// Empty FOLLOW sets for every nonterminal the grammar mentions, except the
/// start symbol which already holds `$`.
pub fn initial_follow(grammar: &Grammar) -> FollowSets {
    let mut follow = SymbolSets::with_keys(grammar.referenced_non_terminals());
    follow.insert(grammar.start(), Symbol::EndMarker);
    follow
}

/// One full pass over every nonterminal occurrence in every body.
pub fn follow_pass(grammar: &Grammar, first: &FirstSets, follow: &FollowSets) -> (FollowSets, bool) {
    let mut next = follow.clone();
    let mut changed = false;
    for production in grammar.productions() {
        for (i, symbol) in production.body.iter().enumerate() {
            let nt = match symbol.non_terminal() {
                Some(nt) => nt,
                None => continue,
            };

            // whatever can start the rest of the body follows nt
            let trailer = first_of_symbols(first, &production.body[i + 1..]);
            let reaches_end = trailer.contains(&Symbol::Epsilon);
            changed |= next.union_with(nt, trailer.into_iter().filter(|s| *s != Symbol::Epsilon));

            // rest of the body can vanish, so nt inherits the follows of the head
            if reaches_end && nt != production.head {
                let inherited: Vec<Symbol> = next
                    .get(production.head)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default();
                changed |= next.union_with(nt, inherited);
            }
        }
    }
    (next, changed)
}

pub(crate) fn solve_follow(grammar: &Grammar, first: &FirstSets) -> (FollowSets, usize) {
    debug_assert!(
        !first_pass(grammar, first).1,
        "FOLLOW sets need converged FIRST sets"
    );
    solve_to_fixed_point(initial_follow(grammar), |follow| {
        follow_pass(grammar, first, follow)
    })
}

/// FOLLOW sets of every nonterminal, given the converged FIRST sets of the
/// same grammar. Does not validate the grammar.
pub fn compute_follow(grammar: &Grammar, first: &FirstSets) -> FollowSets {
    solve_follow(grammar, first).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first::compute_first;
    use pretty_assertions::assert_eq;

    fn grammar(start: char, rules: &[(char, &str)]) -> Grammar {
        let mut grammar = Grammar::new(start);
        for (head, body) in rules {
            grammar.add_production(*head, Symbol::classify_all(body));
        }
        grammar
    }

    fn follow_of(grammar: &Grammar) -> FollowSets {
        compute_follow(grammar, &compute_first(grammar))
    }

    fn follow_string(follow: &FollowSets, nt: char) -> String {
        follow.get(nt).unwrap().iter().map(|s| s.as_char()).collect()
    }

    #[test]
    fn start_is_seeded_with_end_marker() {
        let follow = initial_follow(&grammar('S', &[('S', "a")]));
        assert_eq!(follow_string(&follow, 'S'), "$");
    }

    #[test]
    fn last_position_inherits_head_follow() {
        let follow = follow_of(&grammar('S', &[('S', "aA"), ('A', "b")]));
        assert_eq!(follow_string(&follow, 'A'), "$");
    }

    #[test]
    fn nullable_trailer_inherits_head_follow() {
        let follow = follow_of(&grammar(
            'S',
            &[('S', "AB"), ('A', "a"), ('B', "b"), ('B', "ε")],
        ));
        assert_eq!(follow_string(&follow, 'A'), "b$");
        assert_eq!(follow_string(&follow, 'B'), "$");
    }

    #[test]
    fn terminal_after_nullable_trailer() {
        let follow = follow_of(&grammar(
            'S',
            &[('S', "ABc"), ('A', "a"), ('B', "b"), ('B', "")],
        ));
        assert_eq!(follow_string(&follow, 'A'), "bc");
        assert_eq!(follow_string(&follow, 'B'), "c");
    }

    #[test]
    fn never_contains_epsilon() {
        let g = grammar('S', &[('S', "AB"), ('A', "ε"), ('B', "ε"), ('B', "Sb")]);
        let follow = follow_of(&g);
        for (_, set) in follow.iter() {
            assert!(!set.contains(&Symbol::Epsilon));
        }
        assert_eq!(follow_string(&follow, 'S'), "b$");
    }

    #[test]
    fn unused_non_terminal_has_empty_follow() {
        let follow = follow_of(&grammar('S', &[('S', "a"), ('U', "b")]));
        assert_eq!(follow_string(&follow, 'U'), "");
    }

    #[test]
    fn converged_pass_changes_nothing() {
        let g = grammar('S', &[('S', "aSb"), ('S', "")]);
        let first = compute_first(&g);
        let follow = compute_follow(&g, &first);
        let (again, changed) = follow_pass(&g, &first, &follow);
        assert!(!changed);
        assert_eq!(again, follow);
        assert_eq!(follow_string(&follow, 'S'), "b$");
    }
}

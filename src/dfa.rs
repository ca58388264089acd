// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Conversion of subset construction rows into a deterministic graph.

use std::collections::{BTreeSet, HashMap};

use crate::alphabet::Alphabet;
use crate::determinize::{EpsilonSearch, StateSet, Table};
use crate::graph::{Edge, Graph};
use crate::nfa::Nfa;
use crate::range::UnicodeRange;

/// The dense id of a DFA state.
pub type StateId = usize;

/// A deterministic finite automaton.
///
/// The start state is always state 0. Edges are labelled with the alphabet
/// symbol that triggers them and each state has at most one edge per symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    graph: Graph<UnicodeRange>,
    accepting: BTreeSet<StateId>,
    alphabet: Alphabet,
}

impl Dfa {
    /// Build the DFA described by the rows of `table`.
    ///
    /// State ids are assigned to sets of NFA vertices in the order in which
    /// the sets are first seen, either as the index of a row or as one of its
    /// next states. Rows with an empty index are skipped; the empty set is
    /// the implicit dead state.
    ///
    /// A state is accepting if any of its NFA vertices is the NFA accept
    /// vertex or reaches it through epsilon edges alone.
    #[tracing::instrument(level = "trace", skip(table, nfa))]
    pub fn new(table: &Table, nfa: &Nfa) -> Dfa {
        let alphabet = nfa.alphabet().clone();
        let mut ids = StateIds::default();
        let mut graph = Graph::new();
        let mut accepting = BTreeSet::new();
        let mut search = EpsilonSearch::new(nfa.graph());

        for row in table.rows().iter().filter(|row| !row.index().is_empty()) {
            let from = ids.record(row.index());
            if row
                .index()
                .iter()
                .any(|&vertex| search.reaches(vertex, nfa.accept()))
            {
                accepting.insert(from);
            }

            for (symbol, next) in row.next_states().iter().enumerate() {
                if next.is_empty() {
                    continue;
                }
                let to = ids.record(next);
                graph.add_edge(Edge::new(from, to, alphabet.ranges()[symbol]));
            }
        }

        while graph.vertex_count() < ids.len() {
            graph.add_vertex();
        }

        tracing::debug!(
            states = graph.vertex_count() as u64,
            accepting = accepting.len() as u64,
            edges = graph.edge_count() as u64,
            "built dfa"
        );

        Dfa {
            graph,
            accepting,
            alphabet,
        }
    }

    /// The graph of the automaton. Its vertices are the states.
    pub fn graph(&self) -> &Graph<UnicodeRange> {
        &self.graph
    }

    /// The number of states.
    pub fn state_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// The accepting states in ascending order.
    pub fn accepting_states(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Check if `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The alphabet the edges are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

// Memo table from sets of NFA vertices to DFA state ids.
#[derive(Default)]
struct StateIds {
    ids: HashMap<StateSet, StateId>,
}

impl StateIds {
    fn record(&mut self, set: &StateSet) -> StateId {
        if let Some(&id) = self.ids.get(set) {
            return id;
        }
        let id = self.ids.len();
        self.ids.insert(set.clone(), id);
        id
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pattern::*;
    use crate::testutils::*;

    fn build(pattern: &Pattern) -> Dfa {
        let nfa = Nfa::new(pattern);
        let table = Table::new(&nfa, None).unwrap();
        Dfa::new(&table, &nfa)
    }

    fn edge(from: StateId, to: StateId, c: char) -> Edge<UnicodeRange> {
        Edge::new(from, to, UnicodeRange::single(c))
    }

    #[test]
    fn symbol_dfa_has_two_states() {
        let sut = build(&symbol('a'));

        assert_eq!(sut.state_count(), 2);
        let expected: BTreeSet<_> = [1].iter().cloned().collect();
        assert_eq!(sut.accepting_states(), &expected);
        let edges: Vec<_> = sut.graph().edges().cloned().collect();
        assert_eq!(edges, vec![edge(0, 1, 'a')]);
    }

    #[test]
    fn alternating_pairs_dfa_has_expected_graph() {
        let sut = build(&alternating_pairs());

        assert_eq!(sut.state_count(), 5);
        let expected: BTreeSet<_> = [3, 4].iter().cloned().collect();
        assert_eq!(sut.accepting_states(), &expected);
        let edges: Vec<_> = sut.graph().edges().cloned().collect();
        assert_eq!(
            edges,
            vec![edge(0, 1, 'a'), edge(0, 2, 'b'), edge(1, 3, 'b'), edge(2, 4, 'a')]
        );
    }

    #[test]
    fn start_state_accepts_when_accept_is_reachable_by_epsilon() {
        let sut = build(&symbol('a').many());

        assert!(sut.is_accepting(0));
    }

    #[test]
    fn many_then_many_dfa_is_fully_accepting() {
        let sut = build(&a_many_b_many());

        for state in 0..sut.state_count() {
            assert!(sut.is_accepting(state), "state {} is not accepting", state);
        }
    }

    #[test]
    fn anchored_branch_leaves_start_with_line_begin() {
        let sut = build(&digits_or_anchored_a());

        let labels: Vec<_> = sut.graph().adjacent(0).iter().map(|e| *e.label()).collect();
        assert_eq!(
            labels,
            vec![UnicodeRange::new('0', '9'), UnicodeRange::line_begin()]
        );
        assert!(sut.is_accepting(0));
    }

    #[test]
    fn each_state_has_at_most_one_edge_per_symbol() {
        let sut = build(&repeat(literal("ABC"), 2, 5));

        for state in 0..sut.state_count() {
            let labels: BTreeSet<_> = sut
                .graph()
                .adjacent(state)
                .iter()
                .map(|e| *e.label())
                .collect();
            assert_eq!(labels.len(), sut.graph().adjacent(state).len());
        }
    }

    #[test]
    fn building_twice_gives_equal_dfas() {
        assert_eq!(build(&digits_or_a_many()), build(&digits_or_a_many()));
    }
}

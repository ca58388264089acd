// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Epsilon closure and subset construction.
//!
//! The determinizer works in three steps:
//!
//! 1. `ClosureTable` computes, for every NFA vertex, the set of vertices
//!    reachable through epsilon edges alone (its epsilon bucket) and, for each
//!    symbol, the vertices reached by one edge with that symbol taken from
//!    anywhere in the bucket.
//! 2. `ClosureTable::row` follows each of those symbol moves with the epsilon
//!    bucket of its targets (`a → a·ε*`), and `ClosureTable::row_of_vertices`
//!    unions the rows of a set of vertices.
//! 3. `Table::new` runs a breadth first search over the sets of vertices
//!    reachable from `{start}`, emitting one `Row` per distinct set.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::iter;

use crate::alphabet::SymbolId;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::nfa::Nfa;
use crate::range::Label;

/// A set of NFA vertices.
pub type StateSet = BTreeSet<VertexId>;

/// The transitions out of one vertex (or set of vertices) keyed by symbol.
pub type Transitions = BTreeMap<SymbolId, StateSet>;

// Iterative search over the epsilon edges of a graph. The visited marks and
// the stack are reused from one search to the next; a vertex is visited in the
// current search when its mark equals `generation`, so starting a search costs
// nothing proportional to the size of the graph.
pub(crate) struct EpsilonSearch<'a> {
    graph: &'a Graph<Label>,
    visited: Vec<u32>,
    generation: u32,
    stack: Vec<VertexId>,
}

impl<'a> EpsilonSearch<'a> {
    pub(crate) fn new(graph: &'a Graph<Label>) -> EpsilonSearch<'a> {
        EpsilonSearch {
            graph,
            visited: vec![0; graph.vertex_count()],
            generation: 0,
            stack: Vec::new(),
        }
    }

    fn next_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for mark in self.visited.iter_mut() {
                *mark = 0;
            }
            self.generation = 1;
        }
    }

    // Visits every vertex reachable from `start` through epsilon edges
    // (including `start`) until `visit` returns true. Returns whether it did.
    pub(crate) fn search<F>(&mut self, start: VertexId, mut visit: F) -> bool
    where
        F: FnMut(VertexId) -> bool,
    {
        self.next_generation();
        self.stack.clear();
        self.stack.push(start);

        while let Some(vertex) = self.stack.pop() {
            if self.visited[vertex] == self.generation {
                continue;
            }
            self.visited[vertex] = self.generation;
            if visit(vertex) {
                return true;
            }
            let stack = &mut self.stack;
            stack.extend(
                self.graph
                    .adjacent(vertex)
                    .iter()
                    .filter(|edge| edge.label().is_epsilon())
                    .map(|edge| edge.to()),
            );
        }
        false
    }

    pub(crate) fn closure(&mut self, start: VertexId) -> StateSet {
        let mut closure = StateSet::new();
        self.search(start, |vertex| {
            closure.insert(vertex);
            false
        });
        closure
    }

    pub(crate) fn reaches(&mut self, from: VertexId, target: VertexId) -> bool {
        self.search(from, |vertex| vertex == target)
    }
}

/// The per-vertex epsilon closures and symbol moves of an NFA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureTable {
    epsilon: Vec<StateSet>,
    moves: Vec<Transitions>,
}

impl ClosureTable {
    /// Compute the closure table for every vertex of `nfa`.
    pub fn new(nfa: &Nfa) -> ClosureTable {
        let graph = nfa.graph();
        let alphabet = nfa.alphabet();
        let mut search = EpsilonSearch::new(graph);

        let epsilon: Vec<_> = (0..graph.vertex_count())
            .map(|vertex| search.closure(vertex))
            .collect();

        let moves = epsilon
            .iter()
            .map(|bucket| {
                let mut moves = Transitions::new();
                for edge in bucket.iter().flat_map(|&v| graph.adjacent(v)) {
                    if let Some(range) = edge.label().range() {
                        let id = alphabet
                            .id(range)
                            .expect("alphabet is collected from the nfa graph");
                        moves.entry(id).or_insert_with(StateSet::new).insert(edge.to());
                    }
                }
                moves
            })
            .collect();

        ClosureTable { epsilon, moves }
    }

    /// The vertices reachable from `vertex` through epsilon edges alone.
    pub fn epsilon_bucket(&self, vertex: VertexId) -> &StateSet {
        &self.epsilon[vertex]
    }

    /// The vertices directly reached by one labelled edge out of the epsilon
    /// bucket of `vertex`, keyed by symbol.
    pub fn moves(&self, vertex: VertexId) -> &Transitions {
        &self.moves[vertex]
    }

    /// The transitions out of `vertex`, each followed by any number of
    /// epsilon edges.
    pub fn row(&self, vertex: VertexId) -> Transitions {
        self.moves[vertex]
            .iter()
            .map(|(&symbol, targets)| {
                let next = targets
                    .iter()
                    .flat_map(|&t| self.epsilon[t].iter().cloned())
                    .collect();
                (symbol, next)
            })
            .collect()
    }

    /// The union of `row` over `vertices`.
    pub fn row_of_vertices<'a, I>(&self, vertices: I) -> Transitions
    where
        I: IntoIterator<Item = &'a VertexId>,
    {
        let mut result = Transitions::new();
        for &vertex in vertices {
            for (symbol, next) in self.row(vertex) {
                result.entry(symbol).or_insert_with(StateSet::new).extend(next);
            }
        }
        result
    }
}

/// One row of the subset construction: a set of NFA vertices and, for every
/// symbol of the alphabet, the set reached from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: StateSet,
    next_states: Vec<StateSet>,
}

impl Row {
    /// The set of NFA vertices this row describes.
    pub fn index(&self) -> &StateSet {
        &self.index
    }

    /// The sets reached from `index`, indexed by symbol id. An empty set means
    /// that there is no transition for that symbol.
    pub fn next_states(&self) -> &[StateSet] {
        &self.next_states
    }
}

/// The rows of the subset construction in breadth first discovery order.
///
/// The first row is always the row for `{start}`. Every set that appears in
/// `next_states` of some row, including the empty set, has exactly one row
/// of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Run the subset construction for `nfa`.
    ///
    /// If `state_limit` is `Some(limit)` then construction fails with
    /// `Error::StateLimitExceeded` once more than `limit` rows would be
    /// emitted.
    #[tracing::instrument(level = "trace", skip(nfa))]
    pub fn new(nfa: &Nfa, state_limit: Option<usize>) -> Result<Table> {
        let closure = ClosureTable::new(nfa);
        let symbols = nfa.alphabet().len();

        let start: StateSet = iter::once(nfa.start()).collect();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back(start);

        let mut rows = Vec::new();
        while let Some(index) = queue.pop_front() {
            if let Some(limit) = state_limit {
                if rows.len() >= limit {
                    return Err(Error::StateLimitExceeded(limit));
                }
            }

            let mut transitions = closure.row_of_vertices(&index);
            let next_states: Vec<StateSet> = (0..symbols)
                .map(|symbol| transitions.remove(&symbol).unwrap_or_default())
                .collect();

            for next in next_states.iter() {
                if !seen.contains(next) {
                    seen.insert(next.clone());
                    queue.push_back(next.clone());
                }
            }

            tracing::trace!(row = rows.len() as u64, vertices = index.len() as u64, "row");
            rows.push(Row { index, next_states });
        }

        tracing::debug!(rows = rows.len() as u64, "subset construction finished");
        Ok(Table { rows })
    }

    /// The rows in discovery order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pattern::*;
    use crate::testutils::*;

    fn set(vertices: &[VertexId]) -> StateSet {
        vertices.iter().cloned().collect()
    }

    #[test]
    fn epsilon_bucket_of_star_entry_contains_inner_start_and_exit() {
        let nfa = Nfa::new(&symbol('a').many());

        let sut = ClosureTable::new(&nfa);

        assert_eq!(sut.epsilon_bucket(2), &set(&[0, 2, 3]));
        assert_eq!(sut.epsilon_bucket(0), &set(&[0]));
    }

    #[test]
    fn moves_hold_direct_targets_only() {
        let nfa = Nfa::new(&symbol('a').many());

        let sut = ClosureTable::new(&nfa);

        assert_eq!(sut.moves(2).get(&0), Some(&set(&[1])));
        assert!(sut.moves(1).is_empty());
    }

    #[test]
    fn row_follows_moves_with_epsilon_edges() {
        let nfa = Nfa::new(&symbol('a').many());

        let sut = ClosureTable::new(&nfa);

        assert_eq!(sut.row(2).get(&0), Some(&set(&[0, 1, 3])));
        assert_eq!(sut.row(1).get(&0), None);
        assert_eq!(sut.row(3).get(&0), Some(&set(&[0, 1, 3])));
    }

    #[test]
    fn row_of_vertices_is_union_of_rows() {
        let nfa = Nfa::new(&alternating_pairs());
        let sut = ClosureTable::new(&nfa);

        let result = sut.row_of_vertices(&set(&[1, 6]));

        assert_eq!(result.get(&0), Some(&set(&[7, 9])));
        assert_eq!(result.get(&1), Some(&set(&[3, 9])));
    }

    #[test]
    fn table_of_alternating_pairs_has_expected_rows() {
        let nfa = Nfa::new(&alternating_pairs());

        let sut = Table::new(&nfa, None).unwrap();

        let rows: Vec<_> = sut
            .rows()
            .iter()
            .map(|row| (row.index().clone(), row.next_states().to_vec()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (set(&[8]), vec![set(&[1, 2]), set(&[5, 6])]),
                (set(&[1, 2]), vec![set(&[]), set(&[3, 9])]),
                (set(&[5, 6]), vec![set(&[7, 9]), set(&[])]),
                (set(&[]), vec![set(&[]), set(&[])]),
                (set(&[3, 9]), vec![set(&[]), set(&[])]),
                (set(&[7, 9]), vec![set(&[]), set(&[])]),
            ]
        );
    }

    #[test]
    fn table_rows_are_unique_by_index() {
        let nfa = Nfa::new(&repeat(literal("ABC"), 2, 5));

        let sut = Table::new(&nfa, None).unwrap();

        let indices: HashSet<_> = sut.rows().iter().map(Row::index).collect();
        assert_eq!(indices.len(), sut.rows().len());
        assert_eq!(sut.rows()[0].index(), &set(&[nfa.start()]));
    }

    #[test]
    fn table_next_states_cover_the_alphabet() {
        let nfa = Nfa::new(&digits_or_anchored_a());

        let sut = Table::new(&nfa, None).unwrap();

        for row in sut.rows() {
            assert_eq!(row.next_states().len(), nfa.alphabet().len());
        }
    }

    #[test]
    fn table_beyond_state_limit_fails() {
        let nfa = Nfa::new(&alternating_pairs());

        let sut = Table::new(&nfa, Some(2));

        assert_matches!(sut, Err(Error::StateLimitExceeded(2)));
    }

    #[test]
    fn table_at_state_limit_succeeds() {
        let nfa = Nfa::new(&alternating_pairs());

        let sut = Table::new(&nfa, Some(6));

        assert_matches!(sut, Ok(ref table) if table.rows().len() == 6);
    }

    #[test]
    fn epsilon_search_reaches_through_chains() {
        let nfa = Nfa::new(&(symbol('a').many() + symbol('b').many()));
        let mut sut = EpsilonSearch::new(nfa.graph());

        assert!(sut.reaches(nfa.start(), nfa.accept()));
        assert!(!sut.reaches(0, nfa.accept()));
        assert!(sut.reaches(1, nfa.accept()));
    }

    #[test]
    fn epsilon_search_survives_generation_wrap() {
        let nfa = Nfa::new(&(symbol('a').many() + symbol('b').many()));
        let mut sut = EpsilonSearch::new(nfa.graph());
        let expected = sut.closure(nfa.start());
        sut.generation = u32::max_value();

        assert_eq!(sut.closure(nfa.start()), expected);
        assert_eq!(sut.generation, 1);
        assert_eq!(sut.closure(nfa.start()), expected);
        assert!(!sut.reaches(0, nfa.accept()));
    }

    #[test]
    fn closure_table_of_long_literal_has_small_buckets() {
        let text: String = ::std::iter::repeat('x').take(50_000).collect();
        let nfa = Nfa::new(&literal(&text));

        let sut = ClosureTable::new(&nfa);

        assert_eq!(sut.epsilon_bucket(1), &set(&[1, 2]));
        assert_eq!(sut.epsilon_bucket(nfa.accept()), &set(&[nfa.accept()]));
    }
}

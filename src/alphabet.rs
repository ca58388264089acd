// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! The registry of distinct labels used by an automaton.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::range::{Label, UnicodeRange};

/// The dense id of an alphabet symbol.
///
/// Symbol ids index the columns of the transition matrix.
pub type SymbolId = usize;

/// A bidirectional mapping between the distinct non-epsilon labels of an NFA
/// and dense symbol ids.
///
/// Ids are assigned in the order in which labels are first seen on the edges
/// of the graph, starting at 0. Epsilon never receives an id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    ranges: Vec<UnicodeRange>,
    ids: HashMap<UnicodeRange, SymbolId>,
}

impl Alphabet {
    /// Create an empty alphabet.
    pub fn new() -> Alphabet {
        Alphabet::default()
    }

    /// Collect the labels of every edge of `graph`.
    pub fn collect(graph: &Graph<Label>) -> Alphabet {
        let mut alphabet = Alphabet::new();
        for range in graph.edges().filter_map(|edge| edge.label().range()) {
            alphabet.insert(*range);
        }
        alphabet
    }

    /// Insert `range` if it is not already present and return its id.
    pub fn insert(&mut self, range: UnicodeRange) -> SymbolId {
        let next = self.ranges.len();
        let ranges = &mut self.ranges;
        *self.ids.entry(range).or_insert_with(|| {
            ranges.push(range);
            next
        })
    }

    /// Look up the id of `range`.
    pub fn id(&self, range: &UnicodeRange) -> Option<SymbolId> {
        self.ids.get(range).cloned()
    }

    /// Look up the range for `id`.
    pub fn range(&self, id: SymbolId) -> Result<&UnicodeRange> {
        self.ranges.get(id).ok_or(Error::UnknownSymbol(id))
    }

    /// The number of symbols.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the symbols in ascending id order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (SymbolId, &'a UnicodeRange)> + 'a {
        self.ranges.iter().enumerate()
    }

    pub(crate) fn ranges(&self) -> &[UnicodeRange] {
        &self.ranges
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn insert_assigns_ids_in_first_seen_order() {
        let mut sut = Alphabet::new();

        assert_eq!(sut.insert(UnicodeRange::single('b')), 0);
        assert_eq!(sut.insert(UnicodeRange::line_begin()), 1);
        assert_eq!(sut.insert(UnicodeRange::single('b')), 0);
        assert_eq!(sut.len(), 2);
    }

    #[test]
    fn equal_ranges_share_an_id() {
        let mut sut = Alphabet::new();

        let first = sut.insert(UnicodeRange::new('0', '9'));
        let second = sut.insert(UnicodeRange::new('9', '0'));

        assert_eq!(first, second);
    }

    #[test]
    fn lookup_is_bidirectional() {
        let mut sut = Alphabet::new();
        let range = UnicodeRange::new('a', 'z');

        let id = sut.insert(range);

        assert_eq!(sut.id(&range), Some(id));
        assert_eq!(sut.range(id), Ok(&range));
    }

    #[test]
    fn unknown_symbol_fails_loudly() {
        let sut = Alphabet::new();

        assert_matches!(sut.range(0), Err(Error::UnknownSymbol(0)));
    }

    #[test]
    fn collect_skips_epsilon_edges() {
        let mut graph = Graph::new();
        graph.add_edge(Edge::new(0, 1, Label::Epsilon));
        graph.add_edge(Edge::new(1, 2, UnicodeRange::single('a').into()));
        graph.add_edge(Edge::new(0, 3, UnicodeRange::line_end().into()));
        graph.add_edge(Edge::new(2, 3, UnicodeRange::single('a').into()));

        let sut = Alphabet::collect(&graph);

        let ranges: Vec<_> = sut.iter().map(|(_, r)| *r).collect();
        assert_eq!(
            ranges,
            vec![UnicodeRange::line_end(), UnicodeRange::single('a')]
        );
    }
}

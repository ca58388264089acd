// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Thompson-style construction of a nondeterministic finite automaton from a
//! `Pattern`.

use crate::alphabet::Alphabet;
use crate::graph::{Edge, Graph, VertexId};
use crate::pattern::{Pattern, PatternKind};
use crate::range::{Label, UnicodeRange};

/// A nondeterministic finite automaton with a single start vertex and a
/// single accept vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    graph: Graph<Label>,
    start: VertexId,
    accept: VertexId,
    alphabet: Alphabet,
}

impl Nfa {
    /// Build the NFA for `pattern`.
    ///
    /// Each node of the tree becomes a fragment with one entry and one exit
    /// vertex:
    ///
    /// - a symbol is an edge labelled with its range between two new vertices,
    /// - a concatenation joins the exit of its first fragment to the entry of
    ///   its second with an epsilon edge,
    /// - an alternation adds new entry and exit vertices with epsilon edges
    ///   fanning out to, and back in from, both fragments,
    /// - a kleene star adds new entry (`in`) and exit (`out`) vertices with
    ///   epsilon edges `in → inner`, `out → inner`, `inner → out` and
    ///   `in → out`. The `out` vertex both ends the repetition and starts
    ///   another iteration.
    ///
    /// Operands are built before their operators, left before right, so
    /// vertex ids follow that order.
    #[tracing::instrument(level = "trace", skip(pattern))]
    pub fn new(pattern: &Pattern) -> Nfa {
        let mut builder = Builder::default();
        for node in pattern.traverse() {
            builder.visit(node.kind());
        }
        let (graph, fragment) = builder.finish();
        let alphabet = Alphabet::collect(&graph);

        tracing::debug!(
            vertices = graph.vertex_count() as u64,
            edges = graph.edge_count() as u64,
            symbols = alphabet.len() as u64,
            "built nfa"
        );

        Nfa {
            graph,
            start: fragment.start,
            accept: fragment.end,
            alphabet,
        }
    }

    /// The graph of the automaton.
    pub fn graph(&self) -> &Graph<Label> {
        &self.graph
    }

    /// The start vertex.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// The accept vertex.
    pub fn accept(&self) -> VertexId {
        self.accept
    }

    /// The distinct labels of the automaton.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: VertexId,
    end: VertexId,
}

#[derive(Default)]
struct Builder {
    graph: Graph<Label>,
    fragments: Vec<Fragment>,
}

impl Builder {
    fn visit(&mut self, kind: &PatternKind) {
        let fragment = match kind {
            PatternKind::Alternation(_) => {
                let (first, second) = self.pop_pair();
                let entry = self.graph.add_vertex();
                let exit = self.graph.add_vertex();
                self.epsilon(entry, first.start);
                self.epsilon(entry, second.start);
                self.epsilon(first.end, exit);
                self.epsilon(second.end, exit);
                Fragment {
                    start: entry,
                    end: exit,
                }
            }
            PatternKind::Concatenation(_) => {
                let (first, second) = self.pop_pair();
                self.epsilon(first.end, second.start);
                Fragment {
                    start: first.start,
                    end: second.end,
                }
            }
            PatternKind::KleeneStar(_) => {
                let inner = self.pop();
                let entry = self.graph.add_vertex();
                let exit = self.graph.add_vertex();
                self.epsilon(entry, inner.start);
                self.epsilon(exit, inner.start);
                self.epsilon(inner.end, exit);
                self.epsilon(entry, exit);
                Fragment {
                    start: entry,
                    end: exit,
                }
            }
            PatternKind::Symbol(range) => self.symbol(*range),
        };
        self.fragments.push(fragment);
    }

    fn symbol(&mut self, range: UnicodeRange) -> Fragment {
        let start = self.graph.add_vertex();
        let end = self.graph.add_vertex();
        self.graph.add_edge(Edge::new(start, end, Label::Range(range)));
        Fragment { start, end }
    }

    fn epsilon(&mut self, from: VertexId, to: VertexId) {
        self.graph.add_edge(Edge::new(from, to, Label::Epsilon));
    }

    fn pop(&mut self) -> Fragment {
        self.fragments
            .pop()
            .expect("post-order traversal yields operands before their operator")
    }

    fn pop_pair(&mut self) -> (Fragment, Fragment) {
        let second = self.pop();
        let first = self.pop();
        (first, second)
    }

    fn finish(mut self) -> (Graph<Label>, Fragment) {
        let fragment = self.pop();
        debug_assert!(self.fragments.is_empty());
        (self.graph, fragment)
    }
}

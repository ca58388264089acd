// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Export of automata in the graphviz dot language.
//!
//! Accepting vertices are drawn as double circles and a point shaped `start`
//! node points at the start vertex.

use std::fmt::{self, Display};

use crate::dfa::Dfa;
use crate::graph::{Graph, VertexId};
use crate::nfa::Nfa;

/// Render `nfa` as a dot digraph. Epsilon edges are labelled `ε`.
pub fn nfa_to_dot(nfa: &Nfa) -> String {
    Dot {
        graph: nfa.graph(),
        start: nfa.start(),
        accepting: &[nfa.accept()],
    }
    .to_string()
}

/// Render `dfa` as a dot digraph.
pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let accepting: Vec<_> = dfa.accepting_states().iter().cloned().collect();
    Dot {
        graph: dfa.graph(),
        start: 0,
        accepting: &accepting,
    }
    .to_string()
}

struct Dot<'a, L: 'a> {
    graph: &'a Graph<L>,
    start: VertexId,
    accepting: &'a [VertexId],
}

impl<'a, L: Display> Display for Dot<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "rankdir=LR;")?;
        writeln!(f, "size=\"8,5\";")?;
        write!(f, "node [shape = doublecircle];")?;
        for vertex in self.accepting {
            write!(f, " {};", vertex)?;
        }
        writeln!(f)?;
        writeln!(f, "node [shape = point]; start;")?;
        writeln!(f, "node [shape = circle];")?;
        writeln!(f, "start -> {};", self.start)?;
        for edge in self.graph.edges() {
            writeln!(
                f,
                "{} -> {} [label=\"{}\"];",
                edge.from(),
                edge.to(),
                escape(&edge.label().to_string())
            )?;
        }
        writeln!(f, "}}")
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::determinize::Table;
    use crate::pattern::*;
    use crate::testutils::*;

    #[test]
    fn nfa_dot_marks_accept_and_start() {
        let sut = nfa_to_dot(&Nfa::new(&symbol('a')));

        assert_eq!(
            sut,
            "digraph {\n\
             rankdir=LR;\n\
             size=\"8,5\";\n\
             node [shape = doublecircle]; 1;\n\
             node [shape = point]; start;\n\
             node [shape = circle];\n\
             start -> 0;\n\
             0 -> 1 [label=\"a\"];\n\
             }\n"
        );
    }

    #[test]
    fn nfa_dot_labels_epsilon_edges() {
        let sut = nfa_to_dot(&Nfa::new(&alternating_pairs()));

        assert!(sut.contains("start -> 8;"));
        assert!(sut.contains("8 -> 0 [label=\"ε\"];"));
        assert!(sut.contains("node [shape = doublecircle]; 9;"));
    }

    #[test]
    fn dfa_dot_lists_every_accepting_state() {
        let nfa = Nfa::new(&alternating_pairs());
        let table = Table::new(&nfa, None).unwrap();

        let sut = dfa_to_dot(&Dfa::new(&table, &nfa));

        assert!(sut.contains("node [shape = doublecircle]; 3; 4;"));
        assert!(sut.contains("start -> 0;"));
        assert!(sut.contains("1 -> 3 [label=\"b\"];"));
    }

    #[test]
    fn dot_escapes_quote_labels() {
        let sut = nfa_to_dot(&Nfa::new(&symbol('"')));

        assert!(sut.contains("0 -> 1 [label=\"\\\"\"];"));
    }

    #[test]
    fn dot_shows_ranges_and_anchors() {
        let sut = nfa_to_dot(&Nfa::new(&(line_begin() + range('0', '9'))));

        assert!(sut.contains("[label=\"^\"]"));
        assert!(sut.contains("[label=\"[0 - 9]\"]"));
    }
}

// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! The labeled directed multigraph shared by the NFA and the DFA.

/// The dense id of a vertex in a `Graph`.
pub type VertexId = usize;

/// A labeled edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<L> {
    from: VertexId,
    to: VertexId,
    label: L,
}

impl<L> Edge<L> {
    /// Create a new edge.
    pub fn new(from: VertexId, to: VertexId, label: L) -> Edge<L> {
        Edge { from, to, label }
    }

    /// The source vertex.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// The target vertex.
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// The label of the edge.
    pub fn label(&self) -> &L {
        &self.label
    }
}

/// A directed multigraph with dense vertex ids.
///
/// Vertices are numbered from 0 in creation order. Each vertex keeps its
/// outgoing edges in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<L> {
    adj: Vec<Vec<Edge<L>>>,
}

impl<L> Graph<L> {
    /// Create an empty graph.
    pub fn new() -> Graph<L> {
        Graph { adj: Vec::new() }
    }

    /// Add a vertex and return its id.
    pub fn add_vertex(&mut self) -> VertexId {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Add an edge, creating any vertices needed for its endpoints.
    pub fn add_edge(&mut self, edge: Edge<L>) {
        let needed = edge.from.max(edge.to) + 1;
        if self.adj.len() < needed {
            self.adj.resize_with(needed, Vec::new);
        }
        self.adj[edge.from].push(edge);
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// The number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// The outgoing edges of `vertex` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the graph.
    pub fn adjacent(&self, vertex: VertexId) -> &[Edge<L>] {
        &self.adj[vertex]
    }

    /// Iterate over every edge, by source vertex and then in insertion order.
    pub fn edges<'a>(&'a self) -> impl Iterator<Item = &'a Edge<L>> + 'a {
        self.adj.iter().flat_map(|edges| edges.iter())
    }
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Graph::new()
    }
}

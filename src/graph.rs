/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A linked-list based weighted undirected graph.
//!
//! Vertices are the indices `0..n` fixed at construction. Every undirected
//! edge is stored as a pair of half-edges in a single array: the half-edge
//! `u -> v` has an even index, its mirror `v -> u` the odd index directly
//! following it. Each vertex keeps the index of the first half-edge leaving
//! it, the half-edges themselves are chained by a `next` index. New edges are
//! prepended to the chains, so adjacency lists are traversed in
//! most-recently-added-first order.
//!
//! Edges cannot be removed. A traversal borrows the graph immutably, hence
//! the graph cannot change while an algorithm runs on it.

use crate::config::GraphConfig;
use crate::error::{InvalidArgument, Result};

use crate::num::traits::Zero;

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
#[cfg(feature = "serialize")]
use crate::error::Error;
#[cfg(feature = "serialize")]
use std::convert::TryFrom;

/// One direction of an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct HalfEdge<W> {
    /// The vertex whose adjacency list contains this half-edge.
    pub origin: usize,
    /// The vertex this half-edge leads to.
    pub target: usize,
    pub weight: W,
}

impl<W> HalfEdge<W>
where
    W: Copy,
{
    /// Return the half-edge pointing in the opposite direction.
    pub fn mirror(&self) -> Self {
        HalfEdge {
            origin: self.target,
            target: self.origin,
            weight: self.weight,
        }
    }
}

impl<W> fmt::Display for HalfEdge<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {} (weight: {})", self.origin, self.target, self.weight)
    }
}

/// The graph data structure.
///
/// With the `serialize` feature a graph is stored as its vertex count and
/// edge list. Deserialization rebuilds it edge by edge, so invalid input is
/// rejected with the same checks as [`Graph::add_edge`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        into = "EdgeList<W>",
        try_from = "EdgeList<W>",
        bound(
            serialize = "W: serde::Serialize + Copy",
            deserialize = "W: serde::Deserialize<'de> + Copy + PartialOrd + num_traits::Zero"
        )
    )
)]
pub struct Graph<W> {
    /// The first half-edge leaving each vertex.
    heads: Vec<Option<usize>>,
    /// List of half-edges, mirrored pairs at `2k` and `2k + 1`.
    edges: Vec<EdgeData<W>>,
}

/// Data for a half-edge.
#[derive(Clone, Debug)]
struct EdgeData<W> {
    /// The sink vertex.
    snk: usize,
    /// The next half-edge adjacent to the same source vertex.
    next: Option<usize>,
    weight: W,
}

/// Serialized form of a graph.
#[cfg(feature = "serialize")]
#[derive(Serialize, Deserialize)]
struct EdgeList<W> {
    num_vertices: usize,
    /// Every edge once, in insertion order.
    edges: Vec<(usize, usize, W)>,
}

#[cfg(feature = "serialize")]
impl<W> From<Graph<W>> for EdgeList<W>
where
    W: Copy,
{
    fn from(g: Graph<W>) -> Self {
        EdgeList {
            num_vertices: g.num_vertices(),
            edges: g.edges().map(|e| (e.origin, e.target, e.weight)).collect(),
        }
    }
}

#[cfg(feature = "serialize")]
impl<W> TryFrom<EdgeList<W>> for Graph<W>
where
    W: Copy + PartialOrd + Zero,
{
    type Error = Error;

    fn try_from(list: EdgeList<W>) -> Result<Self> {
        Graph::from_edges(list.num_vertices, &list.edges)
    }
}

impl<W> Graph<W> {
    /// Create a graph with `n` isolated vertices using the default
    /// configuration.
    pub fn new(n: usize) -> Result<Self> {
        Graph::with_config(n, &GraphConfig::default())
    }

    /// Create a graph with `n` isolated vertices.
    ///
    /// Fails if `n` is zero or exceeds `config.max_vertices`.
    pub fn with_config(n: usize, config: &GraphConfig) -> Result<Self> {
        if n == 0 || n > config.max_vertices {
            return Err(InvalidArgument::VertexCount {
                count: n,
                max: config.max_vertices,
            }
            .into());
        }
        Ok(Graph {
            heads: vec![None; n],
            edges: vec![],
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.heads.len()
    }

    /// Return the number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    /// Return an iterator over the half-edges leaving `v`.
    ///
    /// The most recently added edge comes first. The iterator can be cloned
    /// to restart the traversal at its current position.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex of this graph.
    pub fn neighbors(&self, v: usize) -> Neighbors<'_, W> {
        Neighbors {
            graph: self,
            origin: v,
            cur: self.heads[v],
        }
    }

    /// Return the number of half-edges leaving `v`.
    pub fn degree(&self, v: usize) -> usize
    where
        W: Copy,
    {
        self.neighbors(v).count()
    }

    /// Return an iterator over all edges.
    ///
    /// Each undirected edge is reported once, in insertion order, oriented
    /// the way it was added.
    pub fn edges(&self) -> Edges<'_, W> {
        Edges { graph: self, cur: 0 }
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.num_vertices() {
            Ok(())
        } else {
            Err(InvalidArgument::VertexOutOfRange {
                vertex: v,
                count: self.num_vertices(),
            }
            .into())
        }
    }

    /// Turn the half-edge stored at index `e` into its public form.
    fn half_edge(&self, e: usize) -> HalfEdge<W>
    where
        W: Copy,
    {
        let data = &self.edges[e];
        HalfEdge {
            origin: self.edges[e ^ 1].snk,
            target: data.snk,
            weight: data.weight,
        }
    }
}

impl<W> Graph<W>
where
    W: Copy + PartialOrd + Zero,
{
    /// Create a graph with `n` vertices and the given `(u, v, weight)`
    /// edges.
    ///
    /// # Example
    ///
    /// ```
    /// use prim_mst::Graph;
    ///
    /// let g = Graph::from_edges(3, &[(0, 1, 4), (1, 2, 2)]).unwrap();
    /// assert_eq!(g.num_edges(), 2);
    ///
    /// let neighs: Vec<_> = g.neighbors(1).map(|e| (e.target, e.weight)).collect();
    /// assert_eq!(neighs, vec![(2, 2), (0, 4)]);
    /// ```
    pub fn from_edges(n: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut g = Graph::new(n)?;
        g.edges.reserve(2 * edges.len());
        for &(u, v, weight) in edges {
            g.add_edge(u, v, weight)?;
        }
        Ok(g)
    }

    /// Add the undirected edge `u - v`.
    ///
    /// The half-edges `u -> v` and `v -> u` are prepended to the adjacency
    /// lists of `u` and `v`. Parallel edges are allowed. On error the graph
    /// is left unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(InvalidArgument::SelfLoop(u).into());
        }
        // `!(w >= 0)` also rejects values without an order, e.g. NaN
        if !(weight >= W::zero()) {
            return Err(InvalidArgument::NegativeWeight { u, v }.into());
        }

        let eid = self.edges.len();
        self.edges.push(EdgeData {
            snk: v,
            next: self.heads[u],
            weight,
        });
        self.edges.push(EdgeData {
            snk: u,
            next: self.heads[v],
            weight,
        });
        self.heads[u] = Some(eid);
        self.heads[v] = Some(eid + 1);
        Ok(())
    }
}

/// Iterator over the half-edges leaving a vertex.
#[derive(Clone)]
pub struct Neighbors<'a, W> {
    graph: &'a Graph<W>,
    origin: usize,
    cur: Option<usize>,
}

impl<'a, W> Iterator for Neighbors<'a, W>
where
    W: Copy,
{
    type Item = HalfEdge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.cur?;
        let data = &self.graph.edges[e];
        self.cur = data.next;
        Some(HalfEdge {
            origin: self.origin,
            target: data.snk,
            weight: data.weight,
        })
    }
}

/// Iterator over all edges of a graph.
#[derive(Clone)]
pub struct Edges<'a, W> {
    graph: &'a Graph<W>,
    cur: usize,
}

impl<'a, W> Iterator for Edges<'a, W>
where
    W: Copy,
{
    type Item = HalfEdge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur < self.graph.edges.len() {
            let e = self.graph.half_edge(self.cur);
            self.cur += 2;
            Some(e)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.graph.edges.len() - self.cur) / 2;
        (n, Some(n))
    }
}

impl<'a, W> ExactSizeIterator for Edges<'a, W> where W: Copy {}

// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Implementation of Prim's algorithm
//!
//! The tree grows from a start vertex. In each step the lightest edge
//! leaving the current tree is added, which is correct by the cut property
//! of minimum spanning trees. Candidate edges are kept in a binary heap.
//! Edges whose target joined the tree after they were pushed are not removed
//! from the heap but skipped when they are extracted, so no decrease-key
//! operation is needed. The heap holds at most one half-edge of every edge.

use crate::collections::{BinHeap, PriQueue, VisitedSet};
use crate::error::{Error, InvalidArgument, Result};
use crate::graph::{Graph, HalfEdge};
use crate::mst::MstResult;

use std::error;
use std::fmt;

/// The state of a [`Prim`] traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// No start vertex has been chosen yet.
    NotStarted,
    /// The start vertex is in the tree, its edges are in the queue.
    Seeded,
    /// At least one step has been done.
    Growing,
    /// The tree spans all reachable vertices.
    Complete,
}

/// Step-wise Prim traversal.
///
/// A traversal is used exactly once: [`seed`](Prim::seed) it with a start
/// vertex, then call [`step`](Prim::step) until it returns `Ok(None)`, or
/// call [`run`](Prim::run).
///
/// # Example
///
/// ```
/// use prim_mst::{Error, Graph, Prim, State};
///
/// let g = Graph::from_edges(4, &[(0, 1, 3), (1, 2, 1), (0, 2, 2)]).unwrap();
/// let mut prim = Prim::new(&g);
/// prim.seed(0).unwrap();
///
/// assert_eq!(prim.step().unwrap().map(|e| (e.origin, e.target)), Some((0, 2)));
/// assert_eq!(prim.step().unwrap().map(|e| (e.origin, e.target)), Some((2, 1)));
/// // vertex 3 is isolated
/// assert_eq!(prim.step(), Err(Error::DisconnectedGraph { reached: 3, total: 4 }));
/// assert_eq!(prim.state(), State::Complete);
/// assert_eq!(prim.into_result().total_weight(), 3);
/// ```
pub struct Prim<'a, W> {
    g: &'a Graph<W>,
    state: State,
    visited: VisitedSet,
    queue: BinHeap<HalfEdge<W>, W>,
    tree: MstResult<W>,
}

impl<'a, W> Prim<'a, W>
where
    W: Copy + PartialOrd,
{
    pub fn new(g: &'a Graph<W>) -> Self {
        Prim {
            g,
            state: State::NotStarted,
            visited: VisitedSet::new(g.num_vertices()),
            queue: BinHeap::with_capacity(g.num_edges()),
            tree: MstResult::new(g.num_vertices(), 0),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Return `true` if `v` is already part of the tree.
    pub fn visited(&self, v: usize) -> bool {
        self.visited.contains(v)
    }

    /// Return the number of vertices in the tree.
    pub fn num_visited(&self) -> usize {
        self.visited.len()
    }

    /// Return the number of candidate edges in the queue, including stale
    /// ones.
    pub fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    /// Return the tree built so far.
    pub fn tree(&self) -> &MstResult<W> {
        &self.tree
    }

    /// Start the traversal at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the traversal has already been seeded.
    pub fn seed(&mut self, start: usize) -> Result<()> {
        assert_eq!(self.state, State::NotStarted, "Traversal has already been started");
        let n = self.g.num_vertices();
        if start >= n {
            return Err(InvalidArgument::VertexOutOfRange { vertex: start, count: n }.into());
        }

        self.tree = MstResult::new(n, start);
        self.visited.insert(start);
        for e in self.g.neighbors(start) {
            self.queue.push(e, e.weight);
        }
        self.state = if self.visited.is_full() {
            State::Complete
        } else {
            State::Seeded
        };
        Ok(())
    }

    /// Add the next vertex to the tree.
    ///
    /// Returns the accepted edge or `None` if the traversal is complete. If
    /// the frontier runs empty before all vertices have been reached, the
    /// traversal becomes complete and [`Error::DisconnectedGraph`] is
    /// returned; the partial tree remains available.
    ///
    /// # Panics
    ///
    /// Panics if the traversal has not been seeded.
    pub fn step(&mut self) -> Result<Option<HalfEdge<W>>> {
        match self.state {
            State::NotStarted => panic!("Traversal has not been seeded"),
            State::Complete => return Ok(None),
            State::Seeded | State::Growing => self.state = State::Growing,
        }

        let e = loop {
            match self.queue.extract_min() {
                Ok((e, _)) if self.visited.contains(e.target) => continue,
                Ok((e, _)) => break e,
                Err(Error::EmptyQueue) => {
                    self.state = State::Complete;
                    return Err(Error::DisconnectedGraph {
                        reached: self.visited.len(),
                        total: self.g.num_vertices(),
                    });
                }
                Err(err) => return Err(err),
            }
        };

        self.visited.insert(e.target);
        self.tree.insert(e);
        for f in self.g.neighbors(e.target) {
            if !self.visited.contains(f.target) {
                self.queue.push(f, f.weight);
            }
        }

        if self.visited.is_full() {
            self.state = State::Complete;
        }
        Ok(Some(e))
    }

    /// Run the traversal until it is complete.
    pub fn run(&mut self) -> Result<()> {
        while self.step()?.is_some() {}
        Ok(())
    }

    /// Return the tree.
    pub fn into_result(self) -> MstResult<W> {
        self.tree
    }
}

/// The failure of a call to [`prim`].
///
/// If the traversal has run but the graph is disconnected, `error` is
/// [`Error::DisconnectedGraph`] and `partial` holds the tree over the
/// component of the start vertex. For rejected arguments `partial` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimError<W> {
    pub error: Error,
    pub partial: Option<MstResult<W>>,
}

impl<W> PrimError<W> {
    /// Return the partial tree, if the traversal has run.
    pub fn into_partial(self) -> Option<MstResult<W>> {
        self.partial
    }
}

impl<W> From<Error> for PrimError<W> {
    fn from(error: Error) -> Self {
        PrimError { error, partial: None }
    }
}

impl<W> fmt::Display for PrimError<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<W> error::Error for PrimError<W> where W: fmt::Debug {}

/// Run Prim's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// * `g` is the undirected graph
/// * `start` is the vertex the tree is grown from
///
/// If the graph is not connected, a [`PrimError`] with
/// [`Error::DisconnectedGraph`] is returned. It carries the tree over the
/// component of `start`.
///
/// # Example
///
/// ```
/// use prim_mst::{prim, Error, Graph};
///
/// let g = Graph::from_edges(
///     6,
///     &[
///         (0, 5, 9), (0, 1, 4), (0, 2, 10), (1, 2, 6), (1, 5, 5), (2, 5, 1),
///         (2, 3, 7), (2, 4, 2), (3, 4, 11), (3, 5, 8), (4, 5, 3),
///     ],
/// )
/// .unwrap();
///
/// // run the algorithm
/// let tree = prim(&g, 0).unwrap();
///
/// // check the results
/// assert!(tree.check_spanning().is_ok());
/// assert_eq!(tree.total_weight(), 19);
///
/// let edges: Vec<_> = tree.iter().map(|e| (e.origin, e.target, e.weight)).collect();
/// assert_eq!(edges, vec![(0, 1, 4), (5, 2, 1), (2, 3, 7), (2, 4, 2), (1, 5, 5)]);
///
/// // two isolated vertices
/// let g = Graph::from_edges(4, &[(0, 1, 1)]).unwrap();
/// let err = prim(&g, 0).unwrap_err();
/// assert_eq!(err.error, Error::DisconnectedGraph { reached: 2, total: 4 });
/// assert_eq!(err.into_partial().map(|tree| tree.len()), Some(1));
/// ```
pub fn prim<W>(g: &Graph<W>, start: usize) -> std::result::Result<MstResult<W>, PrimError<W>>
where
    W: Copy + PartialOrd,
{
    let mut p = Prim::new(g);
    p.seed(start)?;
    match p.run() {
        Ok(()) => Ok(p.into_result()),
        Err(error @ Error::DisconnectedGraph { .. }) => Err(PrimError {
            error,
            partial: Some(p.into_result()),
        }),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::{prim, Prim, PrimError, State};
    use crate::error::{Error, InvalidArgument};
    use crate::graph::tests::sample;
    use crate::graph::Graph;

    #[test]
    fn test_sample() {
        let g = sample();
        let tree = prim(&g, 0).unwrap();

        assert_eq!(tree.start(), 0);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.total_weight(), 19);

        let accepted: Vec<_> = tree
            .traversal_order()
            .map(|e| (e.origin, e.target, e.weight))
            .collect();
        assert_eq!(accepted, vec![(0, 1, 4), (1, 5, 5), (5, 2, 1), (2, 4, 2), (2, 3, 7)]);

        assert_eq!(
            tree.to_string(),
            "Edge: 0 - 1 (weight: 4)\n\
             Edge: 5 - 2 (weight: 1)\n\
             Edge: 2 - 3 (weight: 7)\n\
             Edge: 2 - 4 (weight: 2)\n\
             Edge: 1 - 5 (weight: 5)\n"
        );
    }

    #[test]
    fn test_all_starts() {
        let g = sample();
        for start in 0..g.num_vertices() {
            let tree = prim(&g, start).unwrap();
            assert_eq!(tree.len(), 5);
            assert!(tree.get(start).is_none());
            assert_eq!(tree.total_weight(), 19);
            assert_eq!(tree, prim(&g, start).unwrap());
        }
    }

    #[test]
    fn test_states() {
        let g = sample();
        let mut p = Prim::new(&g);
        assert_eq!(p.state(), State::NotStarted);

        p.seed(0).unwrap();
        assert_eq!(p.state(), State::Seeded);
        assert!(p.visited(0));
        assert_eq!(p.frontier_len(), 3);

        let e = p.step().unwrap().unwrap();
        assert_eq!((e.origin, e.target, e.weight), (0, 1, 4));
        assert_eq!(p.state(), State::Growing);
        assert_eq!(p.num_visited(), 2);

        p.run().unwrap();
        assert_eq!(p.state(), State::Complete);
        assert_eq!(p.num_visited(), 6);
        assert_eq!(p.step(), Ok(None));
        assert_eq!(p.tree().len(), 5);
    }

    #[test]
    #[should_panic(expected = "already been started")]
    fn test_reseed() {
        let g = sample();
        let mut p = Prim::new(&g);
        p.seed(0).unwrap();
        let _ = p.seed(1);
    }

    #[test]
    fn test_single_vertex() {
        let g = Graph::<u32>::new(1).unwrap();
        let mut p = Prim::new(&g);
        p.seed(0).unwrap();
        assert_eq!(p.state(), State::Complete);
        assert_eq!(p.step(), Ok(None));

        let tree = prim(&g, 0).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.check_spanning(), Ok(()));
    }

    #[test]
    fn test_disconnected() {
        let g = Graph::from_edges(5, &[(0, 1, 1), (1, 2, 2), (3, 4, 1)]).unwrap();

        let mut p = Prim::new(&g);
        p.seed(0).unwrap();
        assert_eq!(p.run(), Err(Error::DisconnectedGraph { reached: 3, total: 5 }));
        assert_eq!(p.state(), State::Complete);
        assert_eq!(p.step(), Ok(None));

        let err = prim(&g, 0).unwrap_err();
        assert_eq!(err.error, Error::DisconnectedGraph { reached: 3, total: 5 });
        assert_eq!(err.to_string(), "graph is disconnected: reached 3 of 5 vertices");
        let tree = err.into_partial().unwrap();
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains(3) && !tree.contains(4));
        assert_eq!(
            tree.check_spanning(),
            Err(Error::DisconnectedGraph { reached: 3, total: 5 })
        );

        let tree = prim(&g, 4).unwrap_err().into_partial().unwrap();
        let edges: Vec<_> = tree.iter().map(|e| (e.origin, e.target)).collect();
        assert_eq!(edges, vec![(4, 3)]);
    }

    #[test]
    fn test_isolated_vertices() {
        let g = Graph::from_edges(4, &[(0, 1, 1)]).unwrap();
        match prim(&g, 0) {
            Err(PrimError {
                error: Error::DisconnectedGraph { reached, total },
                partial: Some(tree),
            }) => {
                assert_eq!((reached, total), (2, 4));
                assert_eq!(tree.len(), 1);
                assert_eq!(tree.get(1).map(|e| (e.origin, e.weight)), Some((0, 1)));
            }
            res => panic!("unexpected result {:?}", res),
        }

        let err = prim(&g, 3).unwrap_err();
        assert_eq!(err.error, Error::DisconnectedGraph { reached: 1, total: 4 });
        assert_eq!(err.partial.map(|tree| tree.is_empty()), Some(true));
    }

    #[test]
    fn test_stale_edges() {
        // the heavy edges into 2 become stale once 2 is reached via 1
        let g = Graph::from_edges(3, &[(0, 2, 9), (0, 1, 1), (1, 2, 1)]).unwrap();
        let mut p = Prim::new(&g);
        p.seed(0).unwrap();
        p.run().unwrap();
        assert_eq!(p.frontier_len(), 1);
        let tree = p.into_result();
        assert_eq!(tree.get(2).map(|e| e.origin), Some(1));
        assert_eq!(tree.total_weight(), 2);
    }

    #[test]
    fn test_parallel_edges() {
        let g = Graph::from_edges(2, &[(0, 1, 5.0), (1, 0, 0.5), (0, 1, 2.5)]).unwrap();
        let tree = prim(&g, 1).unwrap();
        assert_eq!(tree.get(0).map(|e| e.weight), Some(0.5));
    }

    #[test]
    fn test_invalid_start() {
        let g = sample();
        assert_eq!(
            prim(&g, 6),
            Err(PrimError {
                error: Error::InvalidArgument(InvalidArgument::VertexOutOfRange { vertex: 6, count: 6 }),
                partial: None,
            })
        );
    }
}

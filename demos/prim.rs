/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use prim_mst::{prim, Graph, MstResult, PrimError};

use std::error::Error;

const EDGES: [(usize, usize, u32); 11] = [
    (0, 5, 9),
    (0, 1, 4),
    (0, 2, 10),
    (1, 2, 6),
    (1, 5, 5),
    (2, 5, 1),
    (2, 3, 7),
    (2, 4, 2),
    (3, 4, 11),
    (3, 5, 8),
    (4, 5, 3),
];

fn run(g: &Graph<u32>, start: usize, niter: usize) -> Result<MstResult<u32>, PrimError<u32>> {
    let tstart = OffsetDateTime::now_utc();
    let mut tree = prim(g, start);
    for _ in 1..niter {
        tree = prim(g, start);
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    tree
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute a minimum spanning tree of a small sample graph with Prim's algorithm.";
        opt start:usize=0, desc:"The start vertex.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
    }
    .parse_or_exit();

    let g = Graph::from_edges(6, &EDGES)?;
    println!("  number of vertices: {}", g.num_vertices());
    println!("  number of edges: {}", g.num_edges());

    let tree = match run(&g, args.start, args.num) {
        Ok(tree) => tree,
        Err(PrimError {
            error,
            partial: Some(tree),
        }) => {
            println!("Warning: {}", error);
            tree
        }
        Err(err) => return Err(err.into()),
    };
    print!("{}", tree);
    println!("Weight: {}", tree.total_weight());
    Ok(())
}

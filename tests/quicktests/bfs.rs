use treepath::bfs::shortest_path;
use treepath::graph::{Adjacency, Graph};

use quickcheck_macros::quickcheck;

/// Vertex count for generated graphs. Small so that paths and dead ends are both common.
const VERTICES: u8 = 8;

fn name(v: u8) -> String {
    format!("v{}", v % VERTICES)
}

fn build(edges: &[(u8, u8)]) -> Graph {
    let mut graph: Graph = Graph::new();
    for v in 0..VERTICES {
        graph.add_vertex(&name(v));
    }
    for (i, (from, to)) in edges.iter().enumerate() {
        graph.add_edge(&name(*from), format!("e{i}"), &name(*to));
    }
    graph
}

/// Hop distances between every pair of vertices, by Floyd-Warshall.
fn distances(edges: &[(u8, u8)]) -> Vec<Vec<Option<usize>>> {
    let n = VERTICES as usize;
    let mut dist = vec![vec![None; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = Some(0);
    }
    for (from, to) in edges {
        let (from, to) = ((from % VERTICES) as usize, (to % VERTICES) as usize);
        if from != to {
            dist[from][to] = Some(1);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

#[quickcheck]
fn path_length_is_shortest(edges: Vec<(u8, u8)>, from: u8, to: u8) -> bool {
    let graph = build(&edges);
    let expected = distances(&edges)[(from % VERTICES) as usize][(to % VERTICES) as usize];

    shortest_path(&name(from), &name(to), &graph).map(|path| path.len()) == expected
}

#[quickcheck]
fn path_follows_edges(edges: Vec<(u8, u8)>, from: u8, to: u8) -> bool {
    let graph = build(&edges);
    let Some(path) = shortest_path(&name(from), &name(to), &graph) else {
        return true;
    };

    let vertices: Vec<_> = path.vertices().collect();
    path.source() == name(from)
        && path.destination() == name(to)
        && path.hops().iter().zip(&vertices).all(|(hop, previous)| {
            graph
                .edges(previous)
                .iter()
                .any(|edge| edge.label == hop.label && edge.to == hop.vertex)
        })
}

#[quickcheck]
fn same_vertex_has_no_edges(edges: Vec<(u8, u8)>, v: u8) -> bool {
    let graph = build(&edges);

    shortest_path(&name(v), &name(v), &graph).map_or(false, |path| path.is_empty())
}

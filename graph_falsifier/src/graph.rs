use crate::error::{check_probability, FalsifierError, Result};
use crate::random::RandomSource;

/// Simple undirected graph on the vertices `0..n`.
///
/// Adjacency lists are private and only touched by `add_edge` / `remove_edge`,
/// which always update both endpoints, so `u ∈ adj(v) ⇔ v ∈ adj(u)` holds
/// structurally. Self-loops and out-of-range vertices are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Edgeless graph on `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Graph {
            num_vertices,
            adjacency: vec![vec![]; num_vertices],
            edge_count: 0,
        }
    }

    pub fn complete(num_vertices: usize) -> Self {
        let adjacency: Vec<Vec<usize>> = (0..num_vertices)
            .map(|u| (0..num_vertices).filter(|&v| v != u).collect())
            .collect();
        Graph {
            num_vertices,
            adjacency,
            edge_count: max_edges(num_vertices),
        }
    }

    /// Builds a graph from an edge list. Duplicate edges are ignored.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Graph::new(num_vertices);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Erdős–Rényi `G(n, p)`: each of the `n(n-1)/2` pairs is present
    /// independently with probability `p`.
    pub fn erdos_renyi<R: RandomSource + ?Sized>(
        num_vertices: usize,
        p: f64,
        rng: &mut R,
    ) -> Result<Self> {
        check_probability("edge probability", p)?;
        let mut graph = Graph::new(num_vertices);
        for u in 0..num_vertices {
            for v in (u + 1)..num_vertices {
                if rng.next_unit() < p {
                    graph.link(u, v);
                }
            }
        }
        Ok(graph)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `n(n-1)/2` for this graph's vertex count.
    pub fn max_edges(&self) -> usize {
        max_edges(self.num_vertices)
    }

    pub fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.num_vertices && v < self.num_vertices && self.adjacency[u].contains(&v)
    }

    /// Adds `{u, v}`; returns `false` if it was already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_pair(u, v)?;
        if self.adjacency[u].contains(&v) {
            return Ok(false);
        }
        self.link(u, v);
        Ok(true)
    }

    /// Removes `{u, v}`; returns `false` if it was absent.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_pair(u, v)?;
        let pos_u = self.adjacency[u].iter().position(|&x| x == v);
        let pos_v = self.adjacency[v].iter().position(|&x| x == u);
        match (pos_u, pos_v) {
            (Some(pu), Some(pv)) => {
                self.adjacency[u].swap_remove(pu);
                self.adjacency[v].swap_remove(pv);
                self.edge_count -= 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Flips `{u, v}`. Returns `true` when the edge is present afterwards.
    pub fn toggle_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        if self.has_edge(u, v) {
            self.remove_edge(u, v)?;
            Ok(false)
        } else {
            self.add_edge(u, v)
        }
    }

    /// Edges as `(u, v)` with `u < v`, sorted.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges.sort_unstable();
        edges
    }

    /// Vertex pairs `(u, v)`, `u < v`, that are not edges.
    pub fn non_edge_list(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(self.max_edges() - self.edge_count);
        for u in 0..self.num_vertices {
            for v in (u + 1)..self.num_vertices {
                if !self.adjacency[u].contains(&v) {
                    pairs.push((u, v));
                }
            }
        }
        pairs
    }

    /// Same edge set, ignoring adjacency-list order.
    pub fn same_edges(&self, other: &Graph) -> bool {
        self.num_vertices == other.num_vertices && self.edge_list() == other.edge_list()
    }

    fn check_pair(&self, u: usize, v: usize) -> Result<()> {
        for vertex in [u, v] {
            if vertex >= self.num_vertices {
                return Err(FalsifierError::VertexOutOfRange {
                    vertex,
                    num_vertices: self.num_vertices,
                });
            }
        }
        if u == v {
            return Err(FalsifierError::SelfLoop(u));
        }
        Ok(())
    }

    // Caller guarantees a valid, absent pair.
    fn link(&mut self, u: usize, v: usize) {
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;
    }
}

/// Number of vertex pairs on `n` vertices.
pub fn max_edges(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

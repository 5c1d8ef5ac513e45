use std::collections::VecDeque;

use serde::{Serialize, Serializer};

use crate::conjecture::Variable;
use crate::graph::Graph;

/// Edge density `2|E| / (n(n-1))`, zero for `n <= 1`.
pub fn density(graph: &Graph) -> f64 {
    let n = graph.num_vertices();
    if n <= 1 {
        return 0.0;
    }
    (2 * graph.edge_count()) as f64 / (n * (n - 1)) as f64
}

/// Mean vertex degree, zero for the empty graph.
pub fn average_degree(graph: &Graph) -> f64 {
    let n = graph.num_vertices();
    if n == 0 {
        return 0.0;
    }
    let total: usize = (0..n).map(|u| graph.degree(u)).sum();
    total as f64 / n as f64
}

pub fn max_degree(graph: &Graph) -> usize {
    (0..graph.num_vertices()).map(|u| graph.degree(u)).max().unwrap_or(0)
}

/// Longest shortest path, by BFS from every vertex.
///
/// Returns `f64::INFINITY` when some BFS misses a vertex (the graph is
/// disconnected) and `0.0` for graphs with fewer than two vertices.
/// Costs `O(n(n + |E|))`; recomputed from scratch on every call.
pub fn diameter(graph: &Graph) -> f64 {
    let n = graph.num_vertices();
    if n <= 1 {
        return 0.0;
    }
    let mut longest: usize = 0;
    let mut dist = vec![usize::MAX; n];
    let mut queue = VecDeque::with_capacity(n);
    for source in 0..n {
        dist.fill(usize::MAX);
        dist[source] = 0;
        queue.push_back(source);
        let mut reached = 1;
        while let Some(u) = queue.pop_front() {
            for &v in graph.neighbors(u) {
                if dist[v] == usize::MAX {
                    dist[v] = dist[u] + 1;
                    longest = longest.max(dist[v]);
                    reached += 1;
                    queue.push_back(v);
                }
            }
        }
        if reached < n {
            return f64::INFINITY;
        }
    }
    longest as f64
}

/// The four invariants of one graph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InvariantSnapshot {
    pub density: f64,
    pub avg_degree: f64,
    pub max_degree: f64,
    /// `+inf` for disconnected graphs.
    #[serde(serialize_with = "serialize_extended")]
    pub diameter: f64,
}

impl InvariantSnapshot {
    pub fn compute(graph: &Graph) -> Self {
        InvariantSnapshot {
            density: density(graph),
            avg_degree: average_degree(graph),
            max_degree: max_degree(graph) as f64,
            diameter: diameter(graph),
        }
    }

    pub fn get(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Density => self.density,
            Variable::AvgDegree => self.avg_degree,
            Variable::MaxDegree => self.max_degree,
            Variable::Diameter => self.diameter,
        }
    }
}

// JSON has no infinity; write it as "inf".
fn serialize_extended<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Graph {
        let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
        Graph::from_edges(n, &edges).unwrap()
    }

    #[test]
    fn trivial_graphs() {
        for n in 0..2 {
            let g = Graph::new(n);
            assert_eq!(density(&g), 0.0);
            assert_eq!(average_degree(&g), 0.0);
            assert_eq!(max_degree(&g), 0);
            assert_eq!(diameter(&g), 0.0);
        }
    }

    #[test]
    fn path_and_cycle_diameters() {
        assert_eq!(diameter(&path(5)), 4.0);
        let mut cycle = path(6);
        cycle.add_edge(5, 0).unwrap();
        assert_eq!(diameter(&cycle), 3.0);
        assert_eq!(diameter(&Graph::complete(4)), 1.0);
    }

    #[test]
    fn disconnected_is_infinite() {
        assert_eq!(diameter(&Graph::new(2)), f64::INFINITY);
        let g = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(diameter(&g), f64::INFINITY);
    }

    #[test]
    fn star_snapshot() {
        let g = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let snap = InvariantSnapshot::compute(&g);
        assert_eq!(snap.density, 0.4);
        assert_eq!(snap.avg_degree, 1.6);
        assert_eq!(snap.max_degree, 4.0);
        assert_eq!(snap.diameter, 2.0);
        assert_eq!(snap.get(Variable::MaxDegree), 4.0);
    }

    #[test]
    fn infinite_diameter_serializes_as_inf() {
        let split = InvariantSnapshot::compute(&Graph::from_edges(4, &[(0, 1)]).unwrap());
        let json = serde_json::to_value(split).unwrap();
        assert_eq!(json["diameter"], "inf");
        assert_eq!(json["density"], 1.0 / 6.0);
        assert_eq!(json["max_degree"], 1.0);

        let star = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let json = serde_json::to_value(InvariantSnapshot::compute(&star)).unwrap();
        assert_eq!(json["diameter"], 2.0);
    }
}

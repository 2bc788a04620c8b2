//! Arena-indexed treatment graph.

use nmagrade_core::types::BTreeMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Dfs;

use super::comparisons::{study_pairs, StudyArms};

/// Sentinel distance for unreachable pairs.
const INF: u32 = u32::MAX;

/// Undirected graph of treatments. Nodes carry the treatment name and are
/// interned in lexicographic order, so `NodeIndex` order equals name order.
/// Edge weights count the studies in which the pair co-occurs.
#[derive(Debug, Clone, Default)]
pub struct TreatmentGraph {
    pub graph: UnGraph<String, u32>,
    pub node_index: BTreeMap<String, NodeIndex>,
}

impl TreatmentGraph {
    /// Build the graph from grouped study arms.
    pub fn build(studies: &[StudyArms<'_>]) -> Self {
        let mut names: Vec<&str> = studies
            .iter()
            .flat_map(|s| s.treatments.iter().copied())
            .collect();
        names.sort_unstable();
        names.dedup();

        let mut graph = UnGraph::with_capacity(names.len(), names.len());
        let mut node_index = BTreeMap::new();
        for name in names {
            let idx = graph.add_node(name.to_string());
            node_index.insert(name.to_string(), idx);
        }

        for arms in studies {
            for (a, b) in study_pairs(arms) {
                let (Some(&ia), Some(&ib)) = (node_index.get(a), node_index.get(b)) else {
                    continue;
                };
                match graph.find_edge(ia, ib) {
                    Some(edge) => {
                        if let Some(weight) = graph.edge_weight_mut(edge) {
                            *weight += 1;
                        }
                    }
                    None => {
                        graph.add_edge(ia, ib, 1);
                    }
                }
            }
        }

        Self { graph, node_index }
    }

    pub fn treatment_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct treatment pairs joined by an edge.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    /// Partition treatments into connected components using DFS.
    /// Each component is sorted by name; components appear in order of
    /// their smallest member.
    pub fn components(&self) -> Vec<Vec<String>> {
        let mut visited = vec![false; self.graph.node_count()];
        let mut components = Vec::new();

        for start in self.graph.node_indices() {
            if visited[start.index()] {
                continue;
            }
            let mut members = Vec::new();
            let mut dfs = Dfs::new(&self.graph, start);
            while let Some(node) = dfs.next(&self.graph) {
                visited[node.index()] = true;
                members.push(self.graph[node].clone());
            }
            members.sort();
            components.push(members);
        }

        components
    }

    /// Connected iff there is exactly one component and at least two treatments.
    pub fn is_connected(&self) -> bool {
        self.treatment_count() >= 2 && self.components().len() == 1
    }

    /// All-pairs shortest path lengths in edges (Floyd–Warshall).
    /// Unreachable pairs hold `u32::MAX`.
    pub fn distance_matrix(&self) -> Vec<Vec<u32>> {
        let n = self.graph.node_count();
        let mut dist = vec![vec![INF; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0;
        }
        for edge in self.graph.edge_indices() {
            if let Some((a, b)) = self.graph.edge_endpoints(edge) {
                dist[a.index()][b.index()] = 1;
                dist[b.index()][a.index()] = 1;
            }
        }

        for k in 0..n {
            for i in 0..n {
                if dist[i][k] == INF {
                    continue;
                }
                for j in 0..n {
                    let through = dist[i][k].saturating_add(dist[k][j]);
                    if through < dist[i][j] {
                        dist[i][j] = through;
                    }
                }
            }
        }

        dist
    }

    /// Largest finite shortest-path length; 0 for graphs with fewer than two
    /// treatments or no edges.
    pub fn diameter(&self) -> u32 {
        if self.treatment_count() <= 1 {
            return 0;
        }
        self.distance_matrix()
            .iter()
            .flatten()
            .copied()
            .filter(|&d| d != INF && d > 0)
            .max()
            .unwrap_or(0)
    }
}

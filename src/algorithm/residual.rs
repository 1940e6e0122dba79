//! 残量图
//!
//! 由原图和流量表导出：正向边表示剩余容量，反向（invert）边表示可以撤销的流量。
//! 每轮迭代重新构建，从不原地修改。

use super::flow_map::FlowMap;
use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, Graph};
use std::collections::HashMap;
use std::fmt;

/// 残量图
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    /// 导出的图
    graph: Graph,
    /// 残量边 ID -> 是否为反向边
    inverted: HashMap<EdgeId, bool>,
}

impl ResidualGraph {
    /// 从原图和流量表构建残量图
    ///
    /// 对原图中每条边 (v, w)：流量大于 0 时加入反向边 w -> v（权重为流量），
    /// 容量大于流量时加入正向边 v -> w（权重为剩余容量）。
    pub fn new(base: &Graph, flow_map: &FlowMap) -> Result<Self> {
        let mut graph = Graph::new();
        let mut inverted = HashMap::new();

        for edge in base.all_edges() {
            let (v, w) = edge.key();
            let attribute = flow_map.get((v, w)).ok_or(Error::MissingFlowEntry {
                origin: v,
                destination: w,
            })?;
            let (flux, capacity) = attribute.tuple();

            if flux > 0 {
                let id = graph.add_edge(w, v, flux);
                inverted.insert(id, true);
            }
            if capacity > flux {
                let id = graph.add_edge(v, w, capacity - flux);
                inverted.insert(id, false);
            }
        }

        Ok(Self { graph, inverted })
    }

    /// 获取导出的图
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 边是否为反向边（未知的边视为正向边）
    pub fn is_inverted(&self, edge: &Edge) -> bool {
        self.inverted.get(&edge.id()).copied().unwrap_or(false)
    }
}

impl fmt::Display for ResidualGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.graph.all_edges() {
            let kind = if self.is_inverted(&edge) {
                "inverted"
            } else {
                "residual"
            };
            writeln!(
                f,
                "{} -> {} | {} | capacity: {}",
                edge.origin(),
                edge.destination(),
                kind,
                edge.weight()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_residual_initial() {
        let base = Graph::from_edges([(v(0), v(1), 4), (v(1), v(2), 0)]);
        let flow = FlowMap::from_edges(&base.all_edges(), v(0), v(2)).unwrap();
        let residual = ResidualGraph::new(&base, &flow).unwrap();

        // 零容量边既没有正向边也没有反向边
        let edges = residual.graph().all_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].key(), (v(0), v(1)));
        assert_eq!(edges[0].weight(), 4);
        assert!(!residual.is_inverted(&edges[0]));
    }

    #[test]
    fn test_residual_partial_flow() {
        let base = Graph::from_edges([(v(0), v(1), 4)]);
        let mut flow = FlowMap::from_edges(&base.all_edges(), v(0), v(1)).unwrap();
        flow.set_flux((v(0), v(1)), 3).unwrap();

        let residual = ResidualGraph::new(&base, &flow).unwrap();
        let graph = residual.graph();

        let backward = graph.edges_of(v(1));
        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].weight(), 3);
        assert!(residual.is_inverted(&backward[0]));

        let forward = graph.edges_of(v(0));
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].weight(), 1);
        assert!(!residual.is_inverted(&forward[0]));
    }

    #[test]
    fn test_residual_saturated() {
        let base = Graph::from_edges([(v(0), v(1), 2)]);
        let mut flow = FlowMap::from_edges(&base.all_edges(), v(0), v(1)).unwrap();
        flow.set_flux((v(0), v(1)), 2).unwrap();

        let residual = ResidualGraph::new(&base, &flow).unwrap();
        assert!(residual.graph().edges_of(v(0)).is_empty());
        assert_eq!(residual.graph().edge_count(), 1);
    }

    #[test]
    fn test_antiparallel_flags_do_not_collide() {
        // 0 -> 1 有流量 2，1 -> 0 空闲：残量图中有两条 1 -> 0 边，一反一正
        let base = Graph::from_edges([(v(0), v(1), 5), (v(1), v(0), 3)]);
        let mut flow = FlowMap::from_edges(&base.all_edges(), v(0), v(1)).unwrap();
        flow.set_flux((v(0), v(1)), 2).unwrap();

        let residual = ResidualGraph::new(&base, &flow).unwrap();
        let from_one = residual.graph().edges_of(v(1));
        assert_eq!(from_one.len(), 2);

        let flags: Vec<(i64, bool)> = from_one
            .iter()
            .map(|e| (e.weight(), residual.is_inverted(e)))
            .collect();
        assert!(flags.contains(&(2, true)));
        assert!(flags.contains(&(3, false)));
    }

    #[test]
    fn test_missing_flow_entry() {
        let base = Graph::from_edges([(v(0), v(1), 5)]);
        let other = Graph::from_edges([(v(1), v(2), 5)]);
        let flow = FlowMap::from_edges(&other.all_edges(), v(0), v(2)).unwrap();

        let err = ResidualGraph::new(&base, &flow).unwrap_err();
        assert!(matches!(err, Error::MissingFlowEntry { .. }));
    }

    #[test]
    fn test_unknown_edge_not_inverted() {
        let base = Graph::from_edges([(v(0), v(1), 5)]);
        let flow = FlowMap::from_edges(&base.all_edges(), v(0), v(1)).unwrap();
        let residual = ResidualGraph::new(&base, &flow).unwrap();

        let stray = Edge::new(EdgeId::new(42), v(1), v(0), 1);
        assert!(!residual.is_inverted(&stray));
    }

    #[test]
    fn test_residual_display() {
        let base = Graph::from_edges([(v(0), v(1), 4)]);
        let mut flow = FlowMap::from_edges(&base.all_edges(), v(0), v(1)).unwrap();
        flow.set_flux((v(0), v(1)), 1).unwrap();

        let residual = ResidualGraph::new(&base, &flow).unwrap();
        let text = residual.to_string();

        assert!(text.contains("1 -> 0 | inverted | capacity: 1"));
        assert!(text.contains("0 -> 1 | residual | capacity: 3"));
    }
}

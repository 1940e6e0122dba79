//! 流分解
//!
//! 在只包含正流量边的图上反复查找源点到汇点的路径，记录后删除路径上的边，
//! 直到不存在路径。结果依赖遍历顺序，不保证是最小分解。

use super::flow_map::FlowMap;
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 分解出的一条源点到汇点路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPath {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 路径上的最小流量
    pub flow: i64,
}

/// 将流量表分解为源点到汇点的路径列表
pub fn decompose(flow_map: &FlowMap, source: VertexId, sink: VertexId) -> Vec<FlowPath> {
    let mut graph = Graph::from_edges(
        flow_map
            .used_edges()
            .into_iter()
            .map(|(edge, attribute)| (edge.origin(), edge.destination(), attribute.flux())),
    );

    let mut paths = Vec::new();
    while let Some(edges) = graph.path_between(source, sink) {
        let Some(flow) = edges.iter().map(|e| e.weight()).min() else {
            break;
        };

        let mut vertices: Vec<VertexId> = edges.iter().map(|e| e.origin()).collect();
        vertices.push(sink);

        for edge in &edges {
            graph.remove_edge(edge);
        }

        paths.push(FlowPath { vertices, flow });
    }

    debug!(paths = paths.len(), %source, %sink, "流分解完成");
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::max_flow;
    use std::collections::HashMap;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn ids(path: &FlowPath) -> Vec<u64> {
        path.vertices.iter().map(|x| x.as_u64()).collect()
    }

    #[test]
    fn test_single_edge() {
        let graph = Graph::from_edges([(v(0), v(1), 5)]);
        let result = max_flow(&graph, v(0), v(1)).unwrap();

        let paths = decompose(&result.flow_map, v(0), v(1));
        assert_eq!(paths.len(), 1);
        assert_eq!(ids(&paths[0]), vec![0, 1]);
        assert_eq!(paths[0].flow, 5);
    }

    #[test]
    fn test_two_paths() {
        let graph = Graph::from_edges([
            (v(0), v(1), 3),
            (v(1), v(3), 2),
            (v(0), v(2), 2),
            (v(2), v(3), 3),
        ]);
        let result = max_flow(&graph, v(0), v(3)).unwrap();

        let paths = decompose(&result.flow_map, v(0), v(3));
        assert_eq!(paths.len(), 2);
        assert_eq!(paths.iter().map(|p| p.flow).sum::<i64>(), result.value);
        for path in &paths {
            assert_eq!(path.vertices.first(), Some(&v(0)));
            assert_eq!(path.vertices.last(), Some(&v(3)));
        }
    }

    #[test]
    fn test_no_flow() {
        let graph = Graph::from_edges([(v(0), v(1), 5), (v(2), v(3), 5)]);
        let result = max_flow(&graph, v(0), v(3)).unwrap();

        assert!(decompose(&result.flow_map, v(0), v(3)).is_empty());
    }

    #[test]
    fn test_source_equals_sink_terminates() {
        let graph = Graph::from_edges([(v(0), v(1), 5)]);
        let result = max_flow(&graph, v(0), v(1)).unwrap();

        assert!(decompose(&result.flow_map, v(0), v(0)).is_empty());
    }

    #[test]
    fn test_decomposition_soundness() {
        let graph = Graph::from_edges([
            (v(0), v(1), 10),
            (v(0), v(2), 10),
            (v(1), v(2), 2),
            (v(1), v(3), 4),
            (v(1), v(4), 8),
            (v(2), v(4), 9),
            (v(4), v(3), 6),
            (v(3), v(5), 10),
            (v(4), v(5), 10),
        ]);
        let result = max_flow(&graph, v(0), v(5)).unwrap();
        let paths = decompose(&result.flow_map, v(0), v(5));
        assert!(!paths.is_empty());

        let mut carried: HashMap<(VertexId, VertexId), i64> = HashMap::new();
        for path in &paths {
            for pair in path.vertices.windows(2) {
                *carried.entry((pair[0], pair[1])).or_insert(0) += path.flow;
            }
        }

        for (key, amount) in carried {
            let flux = result.flow_map.get(key).unwrap().flux();
            assert!(amount <= flux, "边 {:?} 分解流量 {} 超过 {}", key, amount, flux);
        }
    }
}

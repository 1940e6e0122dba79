//! 增广路径

use super::residual::ResidualGraph;
use crate::graph::{Edge, VertexId};

/// 残量图中从源点到汇点的一条路径及其瓶颈
#[derive(Debug, Clone)]
pub struct AugmentingPath {
    bottleneck: i64,
    edges: Vec<Edge>,
}

impl AugmentingPath {
    /// 在残量图中查找增广路径，无路径或路径为空时返回 `None`
    pub fn find(residual: &ResidualGraph, source: VertexId, sink: VertexId) -> Option<Self> {
        let edges = residual.graph().path_between(source, sink)?;
        let bottleneck = edges.iter().map(Edge::weight).min()?;
        Some(Self { bottleneck, edges })
    }

    /// 瓶颈：路径上的最小边权
    pub fn bottleneck(&self) -> i64 {
        self.bottleneck
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::FlowMap;
    use crate::graph::Graph;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn residual_of(base: &Graph, source: u64, sink: u64) -> ResidualGraph {
        let flow = FlowMap::from_edges(&base.all_edges(), v(source), v(sink)).unwrap();
        ResidualGraph::new(base, &flow).unwrap()
    }

    #[test]
    fn test_find_bottleneck() {
        let base = Graph::from_edges([(v(0), v(1), 7), (v(1), v(2), 2), (v(2), v(3), 9)]);
        let residual = residual_of(&base, 0, 3);

        let path = AugmentingPath::find(&residual, v(0), v(3)).unwrap();
        assert_eq!(path.bottleneck(), 2);
        assert_eq!(path.len(), 3);
        assert_eq!(path.edges()[0].origin(), v(0));
        assert_eq!(path.edges()[2].destination(), v(3));
    }

    #[test]
    fn test_find_none() {
        let base = Graph::from_edges([(v(0), v(1), 7), (v(2), v(3), 2)]);
        let residual = residual_of(&base, 0, 3);

        assert!(AugmentingPath::find(&residual, v(0), v(3)).is_none());
    }

    #[test]
    fn test_find_empty_path_is_none() {
        let base = Graph::from_edges([(v(0), v(1), 7)]);
        let residual = residual_of(&base, 0, 0);

        assert!(AugmentingPath::find(&residual, v(0), v(0)).is_none());
    }
}

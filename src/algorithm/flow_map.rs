//! 流量表
//!
//! 记录每条被跟踪的有向边 (v, w) 当前的流量与容量

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, VertexId};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 边属性：(流量, 容量)
///
/// 不变量：`0 <= flux <= capacity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAttribute {
    flux: i64,
    capacity: i64,
}

impl EdgeAttribute {
    /// 从边创建属性，流量初始化为 0，容量为边权重
    pub fn from_edge(edge: &Edge) -> Result<Self> {
        if edge.weight() < 0 {
            return Err(Error::InvalidCapacity {
                origin: edge.origin(),
                destination: edge.destination(),
                weight: edge.weight(),
            });
        }
        Ok(Self {
            flux: 0,
            capacity: edge.weight(),
        })
    }

    pub fn flux(&self) -> i64 {
        self.flux
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// 剩余容量
    pub fn residual(&self) -> i64 {
        self.capacity - self.flux
    }

    /// 是否已饱和
    pub fn is_saturated(&self) -> bool {
        self.flux == self.capacity
    }

    /// (流量, 容量)
    pub fn tuple(&self) -> (i64, i64) {
        (self.flux, self.capacity)
    }
}

/// 流量表
#[derive(Debug, Clone)]
pub struct FlowMap {
    /// (v, w) -> 边属性
    map: IndexMap<(VertexId, VertexId), EdgeAttribute>,
    /// 源点
    source: VertexId,
    /// 汇点
    sink: VertexId,
    /// 最大流（求解收敛后写入一次）
    max_flow: Option<i64>,
}

impl FlowMap {
    /// 从边列表创建流量表，所有流量初始化为 0
    ///
    /// 负权边返回 `InvalidCapacity`；同一有序对出现第二条边返回 `ParallelEdge`。
    /// 出错时不会产生任何部分状态。
    pub fn from_edges<'a, I>(edges: I, source: VertexId, sink: VertexId) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut map = IndexMap::new();
        for edge in edges {
            let attribute = EdgeAttribute::from_edge(edge)?;
            match map.entry(edge.key()) {
                Entry::Occupied(_) => {
                    return Err(Error::ParallelEdge {
                        origin: edge.origin(),
                        destination: edge.destination(),
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(attribute);
                }
            }
        }

        Ok(Self {
            map,
            source,
            sink,
            max_flow: None,
        })
    }

    /// 获取边属性
    pub fn get(&self, key: (VertexId, VertexId)) -> Option<&EdgeAttribute> {
        self.map.get(&key)
    }

    /// 设置边流量
    pub fn set_flux(&mut self, key: (VertexId, VertexId), flux: i64) -> Result<()> {
        let (origin, destination) = key;
        let attribute = self
            .map
            .get_mut(&key)
            .ok_or(Error::MissingFlowEntry {
                origin,
                destination,
            })?;

        if flux < 0 {
            return Err(Error::NegativeFlux {
                origin,
                destination,
                flux,
            });
        }
        if flux > attribute.capacity {
            return Err(Error::FluxExceedsCapacity {
                origin,
                destination,
                flux,
                capacity: attribute.capacity,
            });
        }

        attribute.flux = flux;
        Ok(())
    }

    /// 迭代所有被跟踪的边
    pub fn iter(&self) -> impl Iterator<Item = (&(VertexId, VertexId), &EdgeAttribute)> + '_ {
        self.map.iter()
    }

    /// 被跟踪的边数量
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// 获取最大流（未收敛时为 `None`）
    pub fn max_flow(&self) -> Option<i64> {
        self.max_flow
    }

    /// 写入最大流，只允许写一次
    pub fn set_max_flow(&mut self, value: i64) -> Result<()> {
        if self.max_flow.is_some() {
            return Err(Error::MaxFlowAlreadySet);
        }
        self.max_flow = Some(value);
        Ok(())
    }

    /// 流量大于 0 的边
    ///
    /// 每条边都是新构造的，权重为该边的流量
    pub fn used_edges(&self) -> Vec<(Edge, EdgeAttribute)> {
        self.map
            .iter()
            .filter(|(_, attribute)| attribute.flux > 0)
            .enumerate()
            .map(|(i, (&(origin, destination), attribute))| {
                let edge = Edge::new(EdgeId::new(i as u64), origin, destination, attribute.flux);
                (edge, *attribute)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn sample() -> FlowMap {
        let graph = Graph::from_edges([(v(0), v(1), 5), (v(1), v(2), 3)]);
        FlowMap::from_edges(&graph.all_edges(), v(0), v(2)).unwrap()
    }

    #[test]
    fn test_flow_map_initial_state() {
        let flow = sample();

        assert_eq!(flow.len(), 2);
        assert_eq!(flow.get((v(0), v(1))).unwrap().tuple(), (0, 5));
        assert_eq!(flow.get((v(1), v(2))).unwrap().tuple(), (0, 3));
        assert!(flow.get((v(2), v(1))).is_none());
        assert_eq!(flow.source(), v(0));
        assert_eq!(flow.sink(), v(2));
        assert_eq!(flow.max_flow(), None);
        assert!(flow.used_edges().is_empty());
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let graph = Graph::from_edges([(v(0), v(1), 5), (v(1), v(2), -1)]);
        let err = FlowMap::from_edges(&graph.all_edges(), v(0), v(2)).unwrap_err();

        assert!(matches!(err, Error::InvalidCapacity { weight: -1, .. }));
    }

    #[test]
    fn test_parallel_edge_rejected() {
        let graph = Graph::from_edges([(v(0), v(1), 5), (v(0), v(1), 2)]);
        let err = FlowMap::from_edges(&graph.all_edges(), v(0), v(1)).unwrap_err();

        assert!(matches!(err, Error::ParallelEdge { .. }));
    }

    #[test]
    fn test_antiparallel_edges_tracked_separately() {
        let graph = Graph::from_edges([(v(0), v(1), 5), (v(1), v(0), 2)]);
        let flow = FlowMap::from_edges(&graph.all_edges(), v(0), v(1)).unwrap();

        assert_eq!(flow.len(), 2);
        assert_eq!(flow.get((v(1), v(0))).unwrap().capacity(), 2);
    }

    #[test]
    fn test_set_flux_bounds() {
        let mut flow = sample();

        flow.set_flux((v(0), v(1)), 5).unwrap();
        assert!(flow.get((v(0), v(1))).unwrap().is_saturated());

        let err = flow.set_flux((v(1), v(2)), 4).unwrap_err();
        assert!(matches!(
            err,
            Error::FluxExceedsCapacity {
                flux: 4,
                capacity: 3,
                ..
            }
        ));

        let err = flow.set_flux((v(1), v(2)), -1).unwrap_err();
        assert!(matches!(err, Error::NegativeFlux { flux: -1, .. }));

        let err = flow.set_flux((v(2), v(0)), 1).unwrap_err();
        assert!(matches!(err, Error::MissingFlowEntry { .. }));

        // 失败的写入不改变状态
        assert_eq!(flow.get((v(1), v(2))).unwrap().flux(), 0);
    }

    #[test]
    fn test_used_edges() {
        let mut flow = sample();
        flow.set_flux((v(1), v(2)), 2).unwrap();

        let used = flow.used_edges();
        assert_eq!(used.len(), 1);

        let (edge, attribute) = &used[0];
        assert_eq!(edge.key(), (v(1), v(2)));
        assert_eq!(edge.weight(), 2);
        assert_eq!(attribute.tuple(), (2, 3));
        assert_eq!(attribute.residual(), 1);
    }

    #[test]
    fn test_max_flow_write_once() {
        let mut flow = sample();

        flow.set_max_flow(3).unwrap();
        assert_eq!(flow.max_flow(), Some(3));
        assert!(matches!(flow.set_max_flow(4), Err(Error::MaxFlowAlreadySet)));
        assert_eq!(flow.max_flow(), Some(3));
    }
}

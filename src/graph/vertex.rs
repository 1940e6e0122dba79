//! 顶点定义
//!
//! 顶点按 (起点, 终点) 分桶保存出边，允许同一有序对之间存在平行边

use super::edge::Edge;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（小的非负整数键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 出边桶：(起点, 终点) -> 边列表，按插入顺序保存
    edges: IndexMap<(VertexId, VertexId), Vec<Edge>>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            edges: IndexMap::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 添加出边
    pub(crate) fn add_edge(&mut self, edge: Edge) {
        self.edges
            .entry((edge.origin(), edge.destination()))
            .or_default()
            .push(edge);
    }

    /// 按值删除出边，返回是否删除成功
    pub(crate) fn remove_edge(&mut self, edge: &Edge) -> bool {
        let key = (edge.origin(), edge.destination());
        let Some(bucket) = self.edges.get_mut(&key) else {
            return false;
        };

        let Some(pos) = bucket.iter().position(|e| e == edge) else {
            return false;
        };
        bucket.remove(pos);

        if bucket.is_empty() {
            self.edges.shift_remove(&key);
        }
        true
    }

    /// 获取指向 `destination` 的所有边
    pub fn edges_to(&self, destination: VertexId) -> &[Edge] {
        self.edges
            .get(&(self.id, destination))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 是否存在指向 `destination` 的边
    pub fn has_edge_to(&self, destination: VertexId) -> bool {
        self.edges.contains_key(&(self.id, destination))
    }

    /// 迭代所有出边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().flatten()
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

//! 图数据结构
//!
//! 内存中的有向带权多重图

use super::edge::{Edge, EdgeId};
use super::vertex::{Vertex, VertexId};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// 有向带权多重图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点表（按插入顺序）
    vertices: IndexMap<VertexId, Vertex>,
    /// 顶点数量
    vertex_count: usize,
    /// 边数量
    edge_count: usize,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 (起点, 终点, 权重) 列表创建图
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, i64)>,
    {
        let mut graph = Self::new();
        for (origin, destination, weight) in edges {
            graph.add_edge(origin, destination, weight);
        }
        graph
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（幂等）
    pub fn add_vertex(&mut self, id: VertexId) {
        if !self.vertices.contains_key(&id) {
            self.vertices.insert(id, Vertex::new(id));
            self.vertex_count += 1;
        }
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 获取所有顶点 ID
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    // ==================== 边操作 ====================

    /// 添加边，自动创建两端顶点
    pub fn add_edge(&mut self, origin: VertexId, destination: VertexId, weight: i64) -> EdgeId {
        self.add_vertex(origin);
        self.add_vertex(destination);

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        if let Some(vertex) = self.vertices.get_mut(&origin) {
            vertex.add_edge(Edge::new(id, origin, destination, weight));
            self.edge_count += 1;
        }

        id
    }

    /// 删除边（按值匹配），返回是否删除成功
    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        let Some(vertex) = self.vertices.get_mut(&edge.origin()) else {
            return false;
        };

        let removed = vertex.remove_edge(edge);
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// 获取顶点的所有出边
    pub fn edges_of(&self, id: VertexId) -> Vec<Edge> {
        self.vertices
            .get(&id)
            .map(|v| v.edges().cloned().collect())
            .unwrap_or_default()
    }

    /// 获取所有边
    pub fn all_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for vertex in self.vertices.values() {
            edges.extend(vertex.edges().cloned());
        }
        edges
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 路径查询 ====================

    /// DFS 查找 `start` 到 `end` 的一条路径
    ///
    /// 使用显式栈，不递归。弹出顶点后按桶顺序压入未访问的邻居，
    /// 因此最后插入的邻居最先被展开。`end` 不可达时返回 `None`；
    /// `start == end` 时返回空路径。
    pub fn path_between(&self, start: VertexId, end: VertexId) -> Option<Vec<Edge>> {
        let mut reached_by: HashMap<VertexId, &Edge> = HashMap::new();
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(current) = stack.pop() {
            if current == end {
                break;
            }

            let Some(vertex) = self.vertices.get(&current) else {
                continue;
            };

            for edge in vertex.edges() {
                let neighbor = edge.destination();
                if visited.insert(neighbor) {
                    reached_by.insert(neighbor, edge);
                    stack.push(neighbor);
                }
            }
        }

        if !visited.contains(&end) {
            return None;
        }

        // 沿 reached_by 反向重构路径
        let mut path = Vec::new();
        let mut current = end;
        while current != start {
            let edge = reached_by.get(&current)?;
            path.push((*edge).clone());
            current = edge.origin();
        }
        path.reverse();

        Some(path)
    }

    /// `start` 到 `end` 是否可达
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> bool {
        self.path_between(start, end).is_some()
    }

    /// 从 `start` 出发可到达的所有顶点（包括 `start`）
    pub fn reachable_from(&self, start: VertexId) -> HashSet<VertexId> {
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(current) = stack.pop() {
            if let Some(vertex) = self.vertices.get(&current) {
                for edge in vertex.edges() {
                    if visited.insert(edge.destination()) {
                        stack.push(edge.destination());
                    }
                }
            }
        }

        visited
    }
}

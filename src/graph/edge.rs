//! 边定义

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（在所属图内单调递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 有向带权边
///
/// 起点和终点不可变；权重在原图中表示容量，在残量图中表示剩余容量。
/// 两条边相等当且仅当起点、终点、权重和 ID 全部相同。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 起点
    origin: VertexId,
    /// 终点
    destination: VertexId,
    /// 权重
    weight: i64,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, origin: VertexId, destination: VertexId, weight: i64) -> Self {
        Self {
            id,
            origin,
            destination,
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取起点
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    /// 获取终点
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// 获取 (起点, 终点) 有序对
    pub fn key(&self) -> (VertexId, VertexId) {
        (self.origin, self.destination)
    }

    /// 获取权重
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// 设置权重
    pub fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} w {} id {}",
            self.origin, self.destination, self.weight, self.id.0
        )
    }
}

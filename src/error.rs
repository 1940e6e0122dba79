//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("无效的容量: 边 ({origin}, {destination}) 的权重为 {weight}")]
    InvalidCapacity {
        origin: VertexId,
        destination: VertexId,
        weight: i64,
    },

    #[error("不支持平行边: ({origin}, {destination}) 已存在")]
    ParallelEdge {
        origin: VertexId,
        destination: VertexId,
    },

    #[error("流量表中缺少边 ({origin}, {destination})")]
    MissingFlowEntry {
        origin: VertexId,
        destination: VertexId,
    },

    #[error("流量超出容量: 边 ({origin}, {destination}) 流量 {flux}, 容量 {capacity}")]
    FluxExceedsCapacity {
        origin: VertexId,
        destination: VertexId,
        flux: i64,
        capacity: i64,
    },

    #[error("流量为负: 边 ({origin}, {destination}) 流量 {flux}")]
    NegativeFlux {
        origin: VertexId,
        destination: VertexId,
        flux: i64,
    },

    #[error("流量值溢出: 顶点 {0} 的出边流量之和超出 i64 范围")]
    FlowOverflow(VertexId),

    #[error("超过最大迭代次数: {0}")]
    IterationLimitExceeded(usize),

    #[error("最大流已确定，不可重复设置")]
    MaxFlowAlreadySet,

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

//! FluxGraph - 有向整数带权图上的最大流引擎
//!
//! 提供：
//! - 允许平行边的有向带权图，以及基于显式栈的 DFS 路径查询
//! - Ford-Fulkerson 最大流（流量表、残量图、增广路径）
//! - 最小割和流分解
//! - 边列表导入与命令行输出

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{FlowMap, FlowPath, FlowReport, MaxFlow, MaxFlowSolver, ResidualGraph};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! 图算法模块
//!
//! 包含 Ford-Fulkerson 最大流及其配套结构：流量表、残量图、增广路径和流分解

mod augmenting_path;
mod decomposition;
mod flow_map;
mod max_flow;
mod report;
mod residual;

pub use augmenting_path::AugmentingPath;
pub use decomposition::{decompose, FlowPath};
pub use flow_map::{EdgeAttribute, FlowMap};
pub use max_flow::{max_flow, MaxFlow, MaxFlowSolver, SolverConfig, SolverState};
pub use report::{CutEdge, FlowReport, UsedEdge};
pub use residual::ResidualGraph;

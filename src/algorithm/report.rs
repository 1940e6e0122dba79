//! 最大流报告
//!
//! 供命令行输出和 JSON 序列化使用的结果快照

use super::decomposition::{decompose, FlowPath};
use super::max_flow::MaxFlow;
use crate::graph::VertexId;
use serde::{Deserialize, Serialize};

/// 流量大于 0 的边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedEdge {
    pub origin: VertexId,
    pub destination: VertexId,
    pub flux: i64,
    pub capacity: i64,
}

/// 最小割边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutEdge {
    pub origin: VertexId,
    pub destination: VertexId,
    pub capacity: i64,
}

/// 最大流报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowReport {
    pub source: VertexId,
    pub sink: VertexId,
    pub max_flow: i64,
    pub iterations: usize,
    pub used_edges: Vec<UsedEdge>,
    pub min_cut: Vec<CutEdge>,
    /// 未请求分解时为 `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<FlowPath>>,
}

impl FlowReport {
    /// 从求解结果生成报告，`decomposed` 为真时附带流分解路径
    pub fn new(result: &MaxFlow, decomposed: bool) -> Self {
        let source = result.flow_map.source();
        let sink = result.flow_map.sink();

        let used_edges = result
            .used_edges()
            .into_iter()
            .map(|(edge, attribute)| UsedEdge {
                origin: edge.origin(),
                destination: edge.destination(),
                flux: attribute.flux(),
                capacity: attribute.capacity(),
            })
            .collect();

        let min_cut = result
            .min_cut()
            .iter()
            .map(|&(origin, destination, capacity)| CutEdge {
                origin,
                destination,
                capacity,
            })
            .collect();

        let paths = decomposed.then(|| decompose(&result.flow_map, source, sink));

        Self {
            source,
            sink,
            max_flow: result.value,
            iterations: result.iterations,
            used_edges,
            min_cut,
            paths,
        }
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! 数据导入模块
//!
//! 从边列表文本导入图。格式：
//!
//! ```text
//! <顶点数> <边数>
//! <起点> <终点> [权重]
//! ...
//! ```
//!
//! 权重省略时为 1，空行被忽略，顶点 `0..顶点数` 会预先创建。
//! 声明的顶点数超过上限（默认 [`DEFAULT_MAX_VERTICES`]）时拒绝导入。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// 默认的顶点数上限
pub const DEFAULT_MAX_VERTICES: usize = 1 << 20;

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub declared_vertices: usize,
    pub declared_edges: usize,
    pub edges_imported: usize,
}

/// 边列表导入器
#[derive(Debug, Clone)]
pub struct EdgeListImporter {
    default_weight: i64,
    max_vertices: usize,
}

impl Default for EdgeListImporter {
    fn default() -> Self {
        Self {
            default_weight: 1,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl EdgeListImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置省略权重时使用的默认权重
    pub fn with_default_weight(mut self, weight: i64) -> Self {
        self.default_weight = weight;
        self
    }

    /// 设置声明顶点数的上限
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// 从文件导入
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> Result<(Graph, ImportStats)> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// 从文本导入
    pub fn parse_str(&self, content: &str) -> Result<(Graph, ImportStats)> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, header) = lines
            .next()
            .ok_or_else(|| Error::ParseError("文件为空".to_string()))?;
        let parts: Vec<&str> = header.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(Error::ParseError(format!(
                "第 {} 行: 首行应包含顶点数和边数",
                line_no
            )));
        }
        let declared_vertices: usize = parse_field(parts[0], line_no, "顶点数")?;
        let declared_edges: usize = parse_field(parts[1], line_no, "边数")?;
        if declared_vertices > self.max_vertices {
            return Err(Error::ParseError(format!(
                "第 {} 行: 顶点数 {} 超过上限 {}",
                line_no, declared_vertices, self.max_vertices
            )));
        }

        let mut graph = Graph::new();
        for key in 0..declared_vertices as u64 {
            graph.add_vertex(VertexId::new(key));
        }

        let mut stats = ImportStats {
            declared_vertices,
            declared_edges,
            edges_imported: 0,
        };

        for (line_no, line) in lines {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 2 || parts.len() > 3 {
                return Err(Error::ParseError(format!(
                    "第 {} 行: 格式错误 \"{}\"",
                    line_no, line
                )));
            }

            let origin: u64 = parse_field(parts[0], line_no, "起点")?;
            let destination: u64 = parse_field(parts[1], line_no, "终点")?;
            let weight: i64 = match parts.get(2) {
                Some(raw) => parse_field(raw, line_no, "权重")?,
                None => self.default_weight,
            };

            graph.add_edge(VertexId::new(origin), VertexId::new(destination), weight);
            stats.edges_imported += 1;
        }

        if stats.edges_imported != declared_edges {
            warn!(
                declared = declared_edges,
                imported = stats.edges_imported,
                "读取的边数与声明不一致"
            );
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "图导入完成"
        );

        Ok((graph, stats))
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, line_no: usize, name: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        Error::ParseError(format!("第 {} 行: {} 不是合法整数: \"{}\"", line_no, name, raw))
    })
}

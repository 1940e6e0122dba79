//! 最大流算法
//!
//! 实现 Ford-Fulkerson 算法（基于 DFS 查找增广路径）。
//! 每轮迭代从原图和流量表重新导出残量图，沿增广路径按瓶颈更新流量，
//! 直到残量图中不存在源点到汇点的路径。

use super::augmenting_path::AugmentingPath;
use super::flow_map::{EdgeAttribute, FlowMap};
use super::residual::ResidualGraph;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// 求解器配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// 最大增广次数，超过时报错而不是截断结果
    pub max_iterations: Option<usize>,
}

impl SolverConfig {
    /// 设置最大增广次数
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// 求解器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverState {
    /// 构建初始流量表和残量图
    Initializing,
    /// 正在查找并应用增广路径
    Augmenting,
    /// 已收敛
    Converged,
}

/// 最大流结果
#[derive(Debug, Clone)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: i64,
    /// 最终流量表
    pub flow_map: FlowMap,
    /// 最终残量图
    pub residual: ResidualGraph,
    /// 增广次数
    pub iterations: usize,
    /// 原图中的最小割边 (v, w, 容量)
    cut_edges: Vec<(VertexId, VertexId, i64)>,
}

impl MaxFlow {
    /// 最小割的源侧顶点集（残量图中从源点可达的顶点）
    pub fn source_side(&self) -> HashSet<VertexId> {
        self.residual.graph().reachable_from(self.flow_map.source())
    }

    /// 最小割：从源侧指向汇侧的原图边，容量之和等于最大流
    pub fn min_cut(&self) -> &[(VertexId, VertexId, i64)] {
        &self.cut_edges
    }

    /// 流量大于 0 的边
    pub fn used_edges(&self) -> Vec<(Edge, EdgeAttribute)> {
        self.flow_map.used_edges()
    }
}

/// Ford-Fulkerson 最大流求解器
pub struct MaxFlowSolver<'a> {
    graph: &'a Graph,
    source: VertexId,
    sink: VertexId,
    config: SolverConfig,
    state: SolverState,
    flow_map: FlowMap,
    residual: ResidualGraph,
    iterations: usize,
}

impl<'a> MaxFlowSolver<'a> {
    /// 创建求解器
    pub fn new(graph: &'a Graph, source: VertexId, sink: VertexId) -> Result<Self> {
        Self::with_config(graph, source, sink, SolverConfig::default())
    }

    /// 使用指定配置创建求解器
    ///
    /// 在任何增广之前校验输入：源点/汇点必须存在，边容量必须非负且没有平行边。
    pub fn with_config(
        graph: &'a Graph,
        source: VertexId,
        sink: VertexId,
        config: SolverConfig,
    ) -> Result<Self> {
        if !graph.contains_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        if !graph.contains_vertex(sink) {
            return Err(Error::VertexNotFound(sink));
        }

        debug!(
            state = ?SolverState::Initializing,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            %source,
            %sink,
            "初始化最大流求解器"
        );

        let flow_map = FlowMap::from_edges(&graph.all_edges(), source, sink)?;
        let residual = ResidualGraph::new(graph, &flow_map)?;

        Ok(Self {
            graph,
            source,
            sink,
            config,
            state: SolverState::Augmenting,
            flow_map,
            residual,
            iterations: 0,
        })
    }

    /// 当前状态
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// 已完成的增广次数
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// 当前流量表
    pub fn flow_map(&self) -> &FlowMap {
        &self.flow_map
    }

    /// 当前残量图
    pub fn residual(&self) -> &ResidualGraph {
        &self.residual
    }

    /// 执行一轮迭代，返回迭代后的状态
    pub fn step(&mut self) -> Result<SolverState> {
        if self.state == SolverState::Converged {
            return Ok(self.state);
        }

        match AugmentingPath::find(&self.residual, self.source, self.sink) {
            Some(path) => {
                if let Some(limit) = self.config.max_iterations {
                    if self.iterations >= limit {
                        return Err(Error::IterationLimitExceeded(limit));
                    }
                }

                self.augment(&path)?;
                self.iterations += 1;

                self.residual = ResidualGraph::new(self.graph, &self.flow_map)?;
                trace!(
                    iteration = self.iterations,
                    residual_edges = self.residual.graph().edge_count(),
                    "重建残量图"
                );
            }
            None => self.converge()?,
        }

        Ok(self.state)
    }

    /// 迭代直到收敛
    pub fn run(mut self) -> Result<MaxFlow> {
        while self.step()? != SolverState::Converged {}
        Ok(self.into_result())
    }

    /// 沿增广路径按瓶颈更新流量
    fn augment(&mut self, path: &AugmentingPath) -> Result<()> {
        let bottleneck = path.bottleneck();
        debug!(
            iteration = self.iterations + 1,
            bottleneck,
            length = path.len(),
            "找到增广路径"
        );

        for edge in path.edges() {
            let (v, w) = edge.key();
            let inverted = self.residual.is_inverted(edge);
            let key = if inverted { (w, v) } else { (v, w) };

            let attribute = self.flow_map.get(key).ok_or(Error::MissingFlowEntry {
                origin: key.0,
                destination: key.1,
            })?;

            let flux = if inverted {
                attribute.flux() - bottleneck
            } else {
                attribute
                    .flux()
                    .checked_add(bottleneck)
                    .ok_or(Error::FluxExceedsCapacity {
                        origin: key.0,
                        destination: key.1,
                        flux: i64::MAX,
                        capacity: attribute.capacity(),
                    })?
            };

            self.flow_map.set_flux(key, flux)?;
        }

        Ok(())
    }

    /// 收敛：最大流为源点出边的流量之和
    fn converge(&mut self) -> Result<()> {
        let value = self
            .graph
            .edges_of(self.source)
            .iter()
            .filter_map(|e| self.flow_map.get(e.key()))
            .map(EdgeAttribute::flux)
            .try_fold(0i64, i64::checked_add)
            .ok_or(Error::FlowOverflow(self.source))?;

        self.flow_map.set_max_flow(value)?;
        self.state = SolverState::Converged;

        info!(
            max_flow = value,
            iterations = self.iterations,
            source = %self.source,
            sink = %self.sink,
            "最大流求解完成"
        );
        Ok(())
    }

    fn into_result(self) -> MaxFlow {
        let source_side = self.residual.graph().reachable_from(self.source);
        let cut_edges = self
            .graph
            .all_edges()
            .into_iter()
            .filter(|e| source_side.contains(&e.origin()) && !source_side.contains(&e.destination()))
            .map(|e| (e.origin(), e.destination(), e.weight()))
            .collect();

        MaxFlow {
            value: self.flow_map.max_flow().unwrap_or(0),
            flow_map: self.flow_map,
            residual: self.residual,
            iterations: self.iterations,
            cut_edges,
        }
    }
}

/// 计算从 source 到 sink 的最大流
pub fn max_flow(graph: &Graph, source: VertexId, sink: VertexId) -> Result<MaxFlow> {
    MaxFlowSolver::new(graph, source, sink)?.run()
}

//! FluxGraph 命令行工具
//!
//! 从边列表文件导入图，计算最大流并输出结果

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fluxgraph::algorithm::{FlowReport, MaxFlowSolver, SolverConfig};
use fluxgraph::cli::{PrintMode, Printer};
use fluxgraph::graph::VertexId;
use fluxgraph::import::{EdgeListImporter, DEFAULT_MAX_VERTICES};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Vertical,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fluxgraph-cli")]
#[command(about = "FluxGraph 最大流命令行工具")]
struct Args {
    /// 边列表文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 源点
    #[arg(short, long)]
    source: u64,

    /// 汇点
    #[arg(short = 't', long)]
    sink: u64,

    /// 输出流分解路径
    #[arg(short, long)]
    decompose: bool,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// 最大增广次数
    #[arg(long)]
    max_iterations: Option<usize>,

    /// 省略权重时使用的默认权重
    #[arg(long, default_value = "1")]
    default_weight: i64,

    /// 声明顶点数的上限
    #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (graph, _) = EdgeListImporter::new()
        .with_default_weight(args.default_weight)
        .with_max_vertices(args.max_vertices)
        .import_file(&args.input)
        .with_context(|| format!("无法导入图: {}", args.input.display()))?;

    let config = SolverConfig {
        max_iterations: args.max_iterations,
    };
    let result = MaxFlowSolver::with_config(
        &graph,
        VertexId::new(args.source),
        VertexId::new(args.sink),
        config,
    )
    .context("输入校验失败")?
    .run()
    .context("最大流求解失败")?;

    let report = FlowReport::new(&result, args.decompose);

    match args.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Table | OutputFormat::Vertical => {
            let mode = if args.format == OutputFormat::Table {
                PrintMode::Table
            } else {
                PrintMode::Vertical
            };
            let printer = Printer::new(mode);
            println!("{}", printer.print_stats(graph.vertex_count(), graph.edge_count()));
            print!("{}", printer.print_report(&report));
        }
    }

    Ok(())
}

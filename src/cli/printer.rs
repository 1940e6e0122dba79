//! 结果打印器
//!
//! 提供表格和垂直格式的最大流报告输出

use crate::algorithm::FlowReport;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印最大流报告
    pub fn print_report(&self, report: &FlowReport) -> String {
        let mut output = format!(
            "最大流 ({} -> {}): {}\n增广次数: {}\n",
            report.source, report.sink, report.max_flow, report.iterations
        );

        output.push_str("\n流量大于 0 的边:\n");
        let rows: Vec<Vec<String>> = report
            .used_edges
            .iter()
            .map(|e| {
                vec![
                    e.origin.to_string(),
                    e.destination.to_string(),
                    e.flux.to_string(),
                    e.capacity.to_string(),
                ]
            })
            .collect();
        output.push_str(&self.print_rows(&columns(&["From", "To", "Flux", "Capacity"]), &rows));

        output.push_str("\n最小割:\n");
        let rows: Vec<Vec<String>> = report
            .min_cut
            .iter()
            .map(|e| {
                vec![
                    e.origin.to_string(),
                    e.destination.to_string(),
                    e.capacity.to_string(),
                ]
            })
            .collect();
        output.push_str(&self.print_rows(&columns(&["From", "To", "Capacity"]), &rows));

        if let Some(paths) = &report.paths {
            output.push_str(&format!(
                "\n{} 到 {} 的流分解路径:\n",
                report.source, report.sink
            ));
            let rows: Vec<Vec<String>> = paths
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let route: Vec<String> = p.vertices.iter().map(|x| x.to_string()).collect();
                    vec![(i + 1).to_string(), route.join(" -> "), p.flow.to_string()]
                })
                .collect();
            output.push_str(&self.print_rows(&columns(&["#", "Path", "Flow"]), &rows));
        }

        output
    }

    /// 打印若干行
    fn print_rows(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();

        // 设置表格格式
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        // 添加表头
        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        // 添加数据行
        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印图统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

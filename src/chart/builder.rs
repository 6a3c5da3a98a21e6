use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::chart::spec::{ChartSpec, Layout, Trace};
use crate::data::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// ChartRequest – one user action
// ---------------------------------------------------------------------------

/// A chart request as received from the host.  The kind arrives as a raw
/// string so unknown kinds can be reported instead of failing to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRequest {
    pub kind: String,
    pub x_column: String,
    /// Required for bar/line/scatter, ignored otherwise.
    #[serde(default)]
    pub y_column: Option<String>,
}

/// The five chart kinds the builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bar,
    Line,
    Scatter,
    Pie,
    Histogram,
}

impl ChartKind {
    fn parse(s: &str) -> Option<ChartKind> {
        match s {
            "bar" => Some(ChartKind::Bar),
            "line" => Some(ChartKind::Line),
            "scatter" => Some(ChartKind::Scatter),
            "pie" => Some(ChartKind::Pie),
            "histogram" => Some(ChartKind::Histogram),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure modes of chart building.  Each carries the offending name so the
/// host can present a user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("unknown chart kind: {0}")]
    UnknownChartKind(String),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("{0} charts require a y column")]
    MissingYColumn(String),
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build a chart specification from a table and a request.  Pure: identical
/// inputs always yield an identical spec.
///
/// Validation order: chart kind, then the x column, then (for xy kinds) the
/// y column.  Column types are not checked against the kind; the renderer
/// decides what it can draw.
pub fn build(table: &Table, request: &ChartRequest) -> Result<ChartSpec, BuildError> {
    let kind = ChartKind::parse(&request.kind)
        .ok_or_else(|| BuildError::UnknownChartKind(request.kind.clone()))?;

    let x = table
        .column(&request.x_column)
        .ok_or_else(|| BuildError::UnknownColumn(request.x_column.clone()))?;

    let (trace, title) = match kind {
        ChartKind::Bar | ChartKind::Line | ChartKind::Scatter => {
            let y_name = request
                .y_column
                .as_deref()
                .ok_or_else(|| BuildError::MissingYColumn(request.kind.clone()))?;
            let y = table
                .column(y_name)
                .ok_or_else(|| BuildError::UnknownColumn(y_name.to_string()))?;

            // Raw pairs, insertion order preserved.
            let xs = x.values.clone();
            let ys = y.values.clone();
            match kind {
                ChartKind::Bar => (
                    Trace::bar(xs, ys, y.name.clone()),
                    format!("{} by {}", y.name, x.name),
                ),
                ChartKind::Line => (
                    Trace::line(xs, ys, y.name.clone()),
                    format!("{} vs {}", y.name, x.name),
                ),
                _ => (
                    Trace::scatter_points(xs, ys, y.name.clone()),
                    format!("{} vs {} Scatter Plot", y.name, x.name),
                ),
            }
        }
        ChartKind::Pie => {
            let (labels, values) = value_counts(&x.values);
            (
                Trace::pie(labels, values),
                format!("Distribution of {}", x.name),
            )
        }
        ChartKind::Histogram => (
            // The renderer bins; the builder passes the raw values through.
            Trace::histogram(x.values.clone()),
            format!("Distribution of {}", x.name),
        ),
    };

    Ok(ChartSpec {
        data: vec![trace],
        layout: Layout::titled(title),
    })
}

/// Frequency of each distinct non-missing value, ordered by descending
/// count; ties keep first-appearance order.
fn value_counts(values: &[CellValue]) -> (Vec<CellValue>, Vec<u64>) {
    let mut order: Vec<CellValue> = Vec::new();
    let mut counts: HashMap<CellValue, u64> = HashMap::new();

    for value in values {
        if value.is_null() {
            continue;
        }
        match counts.get_mut(value) {
            Some(n) => *n += 1,
            None => {
                counts.insert(value.clone(), 1);
                order.push(value.clone());
            }
        }
    }

    let mut entries: Vec<(CellValue, u64)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    // Stable sort: equal counts keep first-appearance order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries.into_iter().unzip()
}

use serde::Serialize;

use crate::color;
use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// ChartSpec – renderer-agnostic description of one chart
// ---------------------------------------------------------------------------

/// Declarative chart description handed to the rendering collaborator.
/// Serializes to a Plotly-style figure: a list of traces plus layout.
/// The builder holds no reference after returning it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One data series.  Unused fields are omitted from the JSON so any
/// renderer can consume the spec without reparsing the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub marker: Marker,
}

impl Trace {
    fn xy(trace_type: &'static str, x: Vec<CellValue>, y: Vec<CellValue>, name: String) -> Self {
        Trace {
            trace_type,
            x: Some(x),
            y: Some(y),
            labels: None,
            values: None,
            mode: None,
            name: Some(name),
            marker: Marker::single(0),
        }
    }

    /// Vertical bars from raw (x, y) pairs.
    pub fn bar(x: Vec<CellValue>, y: Vec<CellValue>, name: String) -> Self {
        Self::xy("bar", x, y, name)
    }

    /// Connected line from raw (x, y) pairs.
    pub fn line(x: Vec<CellValue>, y: Vec<CellValue>, name: String) -> Self {
        let mut trace = Self::xy("scatter", x, y, name);
        trace.mode = Some("lines");
        trace
    }

    /// Point cloud from raw (x, y) pairs.
    pub fn scatter_points(x: Vec<CellValue>, y: Vec<CellValue>, name: String) -> Self {
        let mut trace = Self::xy("scatter", x, y, name);
        trace.mode = Some("markers");
        trace
    }

    /// Pie slices from pre-counted labels and values.
    pub fn pie(labels: Vec<CellValue>, values: Vec<u64>) -> Self {
        let slices = labels.len();
        Trace {
            trace_type: "pie",
            x: None,
            y: None,
            labels: Some(labels),
            values: Some(values),
            mode: None,
            name: None,
            marker: Marker::cycled(slices),
        }
    }

    /// Raw values for the renderer to bin.
    pub fn histogram(x: Vec<CellValue>) -> Self {
        Trace {
            trace_type: "histogram",
            x: Some(x),
            y: None,
            labels: None,
            values: None,
            mode: None,
            name: None,
            marker: Marker::single(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Marker / Layout – presentation defaults
// ---------------------------------------------------------------------------

/// Series colours.  A single xy series carries one colour; pie slices carry
/// one colour each, cycling through the palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl Marker {
    pub(crate) fn single(index: usize) -> Self {
        Marker {
            color: Some(color::series_color(index).to_string()),
            colors: None,
        }
    }

    pub(crate) fn cycled(n: usize) -> Self {
        Marker {
            color: None,
            colors: Some(color::series_colors(n)),
        }
    }
}

/// Fixed presentation flags: white plot and page background, black font,
/// the palette as the colour cycle.  Not configurable per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
    pub colorway: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

impl Layout {
    /// Layout with the fixed presentation defaults and the given title.
    pub fn titled(title: String) -> Self {
        Layout {
            title,
            plot_bgcolor: "white",
            paper_bgcolor: "white",
            font: Font { color: "black" },
            colorway: color::PALETTE.to_vec(),
        }
    }
}

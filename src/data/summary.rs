use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{CellValue, Column, ColumnType, Table};

/// Number of rows included in the head preview.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// ColumnProfile – inferred metadata for one column
// ---------------------------------------------------------------------------

/// Per-column classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    #[serde(rename = "type")]
    pub type_class: ColumnType,
    pub rows: usize,
}

impl ColumnProfile {
    pub fn of(column: &Column) -> Self {
        ColumnProfile {
            name: column.name.clone(),
            type_class: column.type_class(),
            rows: column.values.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// TableSummary – the structural summary shown after an upload
// ---------------------------------------------------------------------------

/// JSON-serializable structural summary of a loaded table: shape, column
/// classification, dtype strings, and a head preview for the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub dtypes: BTreeMap<String, String>,
    /// First [`PREVIEW_ROWS`] rows in column order.
    pub preview: Vec<Vec<CellValue>>,
}

/// Compute the structural summary of a table.  Pure function of the table.
pub fn summarize(table: &Table) -> TableSummary {
    let mut numeric_columns = Vec::new();
    let mut categorical_columns = Vec::new();
    let mut dtypes = BTreeMap::new();

    for column in table.columns() {
        match column.type_class() {
            ColumnType::Numeric => numeric_columns.push(column.name.clone()),
            ColumnType::Categorical => categorical_columns.push(column.name.clone()),
        }
        dtypes.insert(column.name.clone(), column.dtype().to_string());
    }

    TableSummary {
        rows: table.row_count(),
        columns: table.column_count(),
        column_names: table.columns().iter().map(|c| c.name.clone()).collect(),
        numeric_columns,
        categorical_columns,
        dtypes,
        preview: table.head(PREVIEW_ROWS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader;

    #[test]
    fn summarizes_shape_and_classification() {
        let table = loader::load(
            b"city,population,coastal\nOslo,700000,true\nBergen,290000,true\nRoros,5600,false\n",
            "csv",
        )
        .unwrap();
        let summary = summarize(&table);

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns, 3);
        assert_eq!(summary.column_names, vec!["city", "population", "coastal"]);
        assert_eq!(summary.numeric_columns, vec!["population"]);
        assert_eq!(summary.categorical_columns, vec!["city", "coastal"]);
        assert_eq!(summary.dtypes["population"], "int64");
        assert_eq!(summary.dtypes["coastal"], "bool");
        assert_eq!(summary.dtypes["city"], "object");
        assert_eq!(summary.preview.len(), 3);
    }

    #[test]
    fn preview_stops_at_five_rows() {
        let table = loader::load(b"n\n1\n2\n3\n4\n5\n6\n7\n", "csv").unwrap();
        let summary = summarize(&table);
        assert_eq!(summary.rows, 7);
        assert_eq!(summary.preview.len(), PREVIEW_ROWS);
        assert_eq!(summary.preview[0], vec![CellValue::Integer(1)]);
    }

    #[test]
    fn column_profile_reports_row_count() {
        let table = loader::load(b"a,b\n1,x\n2,y\n", "csv").unwrap();
        let profile = ColumnProfile::of(table.column("a").unwrap());
        assert_eq!(profile.name, "a");
        assert_eq!(profile.type_class, ColumnType::Numeric);
        assert_eq!(profile.rows, 2);
    }

    #[test]
    fn summary_serializes_to_json() {
        let table = loader::load(b"a\n1\n", "csv").unwrap();
        let json = serde_json::to_value(summarize(&table)).unwrap();
        assert_eq!(json["rows"], 1);
        assert_eq!(json["numeric_columns"][0], "a");
        assert_eq!(json["dtypes"]["a"], "int64");
        assert_eq!(json["preview"][0][0], 1);
    }
}

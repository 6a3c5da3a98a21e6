use std::fmt;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
/// Categorical aggregation keys maps with `CellValue`, so it must be
/// `Eq + Ord + Hash`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Missing value (empty field, blank cell).
    Null,
}

// -- Manual Eq/Ord/Hash so CellValue can key maps --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                Text(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Text(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

/// Serialize onto the natural JSON scalar so chart data arrays and head
/// previews need no wrapping.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Null => serializer.serialize_none(),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` when it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Column – one named column with derived classification
// ---------------------------------------------------------------------------

/// Inferred type class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Categorical,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    /// Classify the column: numeric when every non-missing value is a
    /// number and at least one such value exists, categorical otherwise.
    /// Mixed columns fall back to categorical.
    pub fn type_class(&self) -> ColumnType {
        let mut saw_value = false;
        for value in &self.values {
            if value.is_null() {
                continue;
            }
            if value.as_f64().is_none() {
                return ColumnType::Categorical;
            }
            saw_value = true;
        }
        if saw_value {
            ColumnType::Numeric
        } else {
            ColumnType::Categorical
        }
    }

    /// Dataframe-style dtype string for the structural summary.
    pub fn dtype(&self) -> &'static str {
        let (mut ints, mut floats, mut bools, mut texts) = (0usize, 0usize, 0usize, 0usize);
        for value in &self.values {
            match value {
                CellValue::Integer(_) => ints += 1,
                CellValue::Float(_) => floats += 1,
                CellValue::Bool(_) => bools += 1,
                CellValue::Text(_) => texts += 1,
                CellValue::Null => {}
            }
        }
        let non_null = ints + floats + bools + texts;
        if non_null == 0 || texts > 0 {
            "object"
        } else if bools == non_null {
            "bool"
        } else if ints == non_null {
            "int64"
        } else if ints + floats == non_null {
            "float64"
        } else {
            "object"
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Immutable rectangular dataset with uniquely-named columns of equal
/// length.  Built by the loader, which guarantees both invariants.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub(crate) fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns
                .windows(2)
                .all(|w| w[0].values.len() == w[1].values.len())
        );
        Table { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (all columns share this length).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// First `n` rows in row-major order, for display previews.
    pub fn head(&self, n: usize) -> Vec<Vec<CellValue>> {
        let rows = self.row_count().min(n);
        (0..rows)
            .map(|row| self.columns.iter().map(|c| c.values[row].clone()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_numbers_classify_numeric() {
        let col = Column::new(
            "score",
            vec![CellValue::Integer(1), CellValue::Float(2.5), CellValue::Null],
        );
        assert_eq!(col.type_class(), ColumnType::Numeric);
        assert_eq!(col.dtype(), "float64");
    }

    #[test]
    fn mixed_values_classify_categorical() {
        let col = Column::new(
            "id",
            vec![CellValue::Integer(1), CellValue::Text("a".to_string())],
        );
        assert_eq!(col.type_class(), ColumnType::Categorical);
        assert_eq!(col.dtype(), "object");
    }

    #[test]
    fn empty_and_all_null_columns_classify_categorical() {
        assert_eq!(
            Column::new("empty", vec![]).type_class(),
            ColumnType::Categorical
        );
        let nulls = Column::new("nulls", vec![CellValue::Null, CellValue::Null]);
        assert_eq!(nulls.type_class(), ColumnType::Categorical);
        assert_eq!(nulls.dtype(), "object");
    }

    #[test]
    fn dtype_distinguishes_int_bool_and_object() {
        let ints = Column::new("n", vec![CellValue::Integer(1), CellValue::Null]);
        assert_eq!(ints.dtype(), "int64");

        let bools = Column::new("flag", vec![CellValue::Bool(true), CellValue::Bool(false)]);
        assert_eq!(bools.dtype(), "bool");
        assert_eq!(bools.type_class(), ColumnType::Categorical);

        let text = Column::new("name", vec![CellValue::Text("x".to_string())]);
        assert_eq!(text.dtype(), "object");
    }

    #[test]
    fn table_shape_and_head() {
        let table = Table::new(vec![
            Column::new("a", vec![CellValue::Integer(1), CellValue::Integer(2)]),
            Column::new(
                "b",
                vec![
                    CellValue::Text("x".to_string()),
                    CellValue::Text("y".to_string()),
                ],
            ),
        ]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        for col in table.columns() {
            assert_eq!(col.values.len(), table.row_count());
        }

        let head = table.head(5);
        assert_eq!(head.len(), 2);
        assert_eq!(
            head[0],
            vec![CellValue::Integer(1), CellValue::Text("x".to_string())]
        );

        assert_eq!(table.head(1).len(), 1);
    }

    #[test]
    fn cell_values_serialize_as_json_scalars() {
        let row = vec![
            CellValue::Integer(3),
            CellValue::Float(0.5),
            CellValue::Text("hi".to_string()),
            CellValue::Bool(true),
            CellValue::Null,
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[3,0.5,"hi",true,null]"#);
    }
}

/// Data layer: core table model, loading, and summarisation.
///
/// Architecture:
/// ```text
///  .csv / .xlsx / .xls bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  named, typed columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  column profiles + head preview
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod summary;

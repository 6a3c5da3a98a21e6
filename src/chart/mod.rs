/// Chart layer: request validation and chart specification building.
///
/// ```text
///   Table + ChartRequest
///        │
///        ▼
///   ┌──────────┐
///   │ builder   │  validate kind/columns, aggregate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ ChartSpec │  JSON-serializable traces + layout
///   └──────────┘
/// ```
pub mod builder;
pub mod spec;

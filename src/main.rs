use std::path::Path;

use anyhow::{bail, Context, Result};

use tabviz::chart::builder::{self, ChartRequest};
use tabviz::store::DatasetStore;

/// Thin command-line host around the engine: load a dataset, print its
/// structural summary, optionally build one chart.
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((path, chart_args)) = args.split_first() else {
        bail!("usage: tabviz <data-file> [<kind> <x-column> [y-column]]");
    };

    let bytes = std::fs::read(path).with_context(|| format!("reading {path}"))?;
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let mut store = DatasetStore::new();
    let (id, summary) = store.load(&bytes, extension)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if chart_args.is_empty() {
        return Ok(());
    }
    if chart_args.len() < 2 {
        bail!("usage: tabviz <data-file> <kind> <x-column> [y-column]");
    }

    let request = ChartRequest {
        kind: chart_args[0].clone(),
        x_column: chart_args[1].clone(),
        y_column: chart_args.get(2).cloned(),
    };

    let table = store.get(id).context("dataset missing from store")?;
    let spec = builder::build(table, &request)?;
    log::info!("built {} chart on {}", request.kind, request.x_column);
    println!("{}", serde_json::to_string_pretty(&spec)?);

    Ok(())
}

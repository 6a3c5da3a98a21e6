// ---------------------------------------------------------------------------
// Chart colour palette
// ---------------------------------------------------------------------------

/// The fixed five-colour palette applied to every chart.
pub const PALETTE: [&str; 5] = ["#3b82f6", "#8b5cf6", "#10b981", "#f59e0b", "#ef4444"];

/// Colour for the series at `index`, cycling through the palette.
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Colours for `n` consecutive series, cycling through the palette.
pub fn series_colors(n: usize) -> Vec<String> {
    (0..n).map(|i| series_color(i).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_by_series_index() {
        assert_eq!(series_color(0), "#3b82f6");
        assert_eq!(series_color(4), "#ef4444");
        assert_eq!(series_color(5), "#3b82f6");
    }

    #[test]
    fn repeats_past_the_palette_end() {
        let colors = series_colors(7);
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[5], colors[0]);
        assert_eq!(colors[6], colors[1]);
    }
}

//! Writes a small deterministic sample dataset for exercising the CLI.

use csv::Writer;

/// Minimal deterministic PRNG (splitmix64) so the sample file is
/// reproducible.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, options: &'a [&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let regions = ["North", "South", "East", "West"];
    let products = ["Widget", "Gadget", "Gizmo"];

    let output_path = "sample_data.csv";
    let mut writer = Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["region", "product", "units", "revenue"])
        .expect("Failed to write header");

    let rows = 60;
    for _ in 0..rows {
        let region = rng.pick(&regions);
        let product = rng.pick(&products);
        let units = 1 + rng.next_u64() % 50;
        let revenue = units as f64 * (5.0 + rng.next_f64() * 20.0);
        writer
            .write_record([
                region.to_string(),
                product.to_string(),
                units.to_string(),
                format!("{revenue:.2}"),
            ])
            .expect("Failed to write record");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} rows to {output_path}");
}

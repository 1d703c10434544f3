#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]

use chainmap::{ChainStats, ChainedHashMap, MapConfig, MapError, hashing};
use log::info;
use plotters::prelude::*;
use rand::Rng;

// Random keys inserted for every load factor threshold
const NUM_KEYS: usize = 200_000;
// Load factor thresholds from 0.1 to 1.0
const NUM_LOAD_FACTORS: usize = 10;
// Bucket count used for the spreading comparison
const SPREAD_CAPACITY: usize = 1 << 10;

struct Sample {
    threshold: f64,
    stats: ChainStats,
}

// Fills a fresh map at the given threshold and reports its chains
fn measure(threshold: f64, keys: &[u64]) -> Result<ChainStats, MapError> {
    let config = MapConfig::default().with_load_factor(threshold);
    let mut map = ChainedHashMap::with_config(config)?;
    for &key in keys {
        map.insert(key, ())?;
    }
    Ok(map.chain_stats())
}

// Addresses hash codes that differ only above bit 20, once by masking alone
// and once through the spreading function
fn high_bit_chains(capacity: usize) -> (ChainStats, ChainStats) {
    let mut masked = vec![0; capacity];
    let mut spread = vec![0; capacity];

    for i in 0..capacity as u32 {
        let raw = i << 20;
        masked[raw as usize & (capacity - 1)] += 1;
        spread[hashing::bucket_index(raw, capacity)] += 1;
    }

    (ChainStats::from_chain_lengths(&masked), ChainStats::from_chain_lengths(&spread))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let thresholds: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (1.0 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    let mut rng = rand::rng();
    let keys: Vec<u64> = (0..NUM_KEYS).map(|_| rng.random()).collect();

    let mut samples = Vec::with_capacity(thresholds.len());
    for &threshold in &thresholds {
        let stats = measure(threshold, &keys)?;
        info!("threshold {:.2}: {}", threshold, stats);
        samples.push(Sample { threshold, stats });
    }

    let (masked, spread) = high_bit_chains(SPREAD_CAPACITY);
    info!("high-bit keys, mask only: {}", masked);
    info!("high-bit keys, spread + mask: {}", spread);

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];

    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_chain =
        samples.iter().map(|s| s.stats.longest_chain).max().unwrap_or(1) as f64 * 1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length by Load Factor Threshold", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0.05..1.05, 0.0..max_chain)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor Threshold")
        .y_desc("Chain Length (entries)")
        .axis_desc_style((font_family, 16))
        .draw()?;

    let series: [(&str, Vec<(f64, f64)>); 2] = [
        (
            "Mean non-empty chain",
            samples.iter().map(|s| (s.threshold, s.stats.mean_chain_length)).collect(),
        ),
        (
            "Longest chain",
            samples.iter().map(|s| (s.threshold, s.stats.longest_chain as f64)).collect(),
        ),
    ];

    for (idx, (label, points)) in series.into_iter().enumerate() {
        let color = &colors[idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(points.clone(), line_style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(points.into_iter().map(|p| Circle::new(p, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    info!("Generated plot image: chain_lengths.png");

    Ok(())
}

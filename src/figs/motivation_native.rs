//! Speedup of parallel implementations over optimized scalar code on
//! native hardware

use std::process;

use plotters::style::RGBColor;

use figs_lib::error::FigureResult;
use figs_lib::normalize;
use figs_lib::render;
use figs_lib::render::FigureStyle;
use figs_lib::table::ResultTable;

const FIGURE_NAME: &str = "fig-motivation-native";

const BMARKS: [&str; 7] = [
    "sgemm",
    "dct8x8m",
    "mriq",
    "rgb2cmyk",
    "bfs-nd",
    "maxmatch",
    "strsearch",
];

const CONFIGS: [&str; 6] = [
    "cmp-scalar",
    "cmp-avx",
    "cmp-tbb",
    "cmp-tbb-avx",
    "mic-tbb-avx",
    "gpgpu-cuda",
];

// Only the CMP configurations are charted; the accelerator rows are
// kept so their speedups can be quoted in the text
const NUM_CHARTED_CONFIGS: usize = 4;

// Measured execution time in seconds
const RUNTIME_DATA: [[f64; 7]; 6] = [
    // cmp-scalar
    [244.484, 49.467, 126.191, 25.8277, 18.2, 5.95, 105.561],
    // cmp-avx
    [34.914, 19.569, 52.283, 4.5209, 17.1, 5.91, 85.785],
    // cmp-tbb
    [22.564, 14.623, 15.460, 4.18735, 8.64, 1.75, 15.935],
    // cmp-tbb-avx
    [3.871, 16.834, 22.944, 5.35787, 8.6, 1.77, 13.357],
    // mic-tbb-avx
    [1.48, 5.04, 6.93, 1.89, 3.479, 1.34, 7.16],
    // gpgpu-cuda
    [0.512, 0.845, 0.959, 0.812, 4.720, 13.703, 17.405],
];

fn config_colors() -> Vec<RGBColor> {
    vec![
        RGBColor(0x00, 0x00, 0x00),
        RGBColor(0xcc, 0xeb, 0xff),
        RGBColor(0x66, 0xc2, 0xff),
        RGBColor(0x00, 0x99, 0xff),
    ]
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> FigureResult<()> {
    let table =
        ResultTable::from_rows(&CONFIGS, &BMARKS, &RUNTIME_DATA);

    let speedups = normalize::speedups(&table, 0)?;
    let charted: Vec<Vec<f64>> =
        speedups[..NUM_CHARTED_CONFIGS].to_vec();

    let style = FigureStyle::make(900, 450, config_colors());
    render::grouped_bars(
        FIGURE_NAME,
        &BMARKS,
        &CONFIGS[..NUM_CHARTED_CONFIGS],
        &charted,
        "Speedup",
        21.0,
        &style,
    )
}

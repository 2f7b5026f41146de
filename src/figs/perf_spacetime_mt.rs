//! Speedup over the in-order baseline, multicore design points

use std::process;

use plotters::style::RGBColor;

use figs_lib::error::FigureResult;
use figs_lib::normalize;
use figs_lib::render;
use figs_lib::render::FigureStyle;
use figs_lib::reorder;
use figs_lib::table::ResultTable;

const FIGURE_NAME: &str = "fig-evaluation-perf-spacetime-mt";

// Canonical benchmark axis; the trailing entry is a placeholder for
// the appended average column
const BMARKS: [&str; 18] = [
    "bilateral",
    "dct8x8m",
    "mriq",
    "bfs-d",
    "bfs-nd",
    "dict",
    "radix-1",
    "radix-2",
    "knn",
    "mis",
    "maxmatch",
    "nbody",
    "rdups",
    "rgb2cmyk",
    "sarray",
    "sgemm",
    "strsearch",
    "avg",
];

const NUM_REAL_BMARKS: usize = 17;

const ORDERED_BMARKS: [&str; 18] = [
    "nbody",
    "bilateral",
    "mriq",
    "sgemm",
    "rgb2cmyk",
    "dct8x8m",
    "knn",
    "bfs-nd",
    "radix-2",
    "radix-1",
    "rdups",
    "sarray",
    "strsearch",
    "bfs-d",
    "dict",
    "mis",
    "maxmatch",
    "avg",
];

const CONFIGS: [&str; 5] = [
    "IO",
    "MC-IO",
    "MC-O3",
    "MC-LTA-4/2x8/2",
    "MC-LTA-8/4x4/2",
];

// Simulated cycle counts, one row per configuration, columns in the
// canonical benchmark order (real benchmarks only)
const CYCLE_DATA: [[f64; 17]; 5] = [
    // IO
    [
        6.21762e+07, 9.6853e+07, 1.38979e+07, 1.11999e+08, 1.11999e+08,
        1.00005e+08, 2.14937e+08, 1.23254e+08, 5.73002e+07, 1.00801e+08,
        2.20669e+08, 2.39507e+08, 1.06215e+08, 6.24962e+07, 2.33191e+08,
        1.18787e+08, 2.99491e+07,
    ],
    // MC-IO
    [
        1.50793e+07, 2.47686e+07, 3.44848e+06, 4.65342e+07, 7.85213e+07,
        2.8046e+07, 7.64268e+07, 9.51608e+07, 3.85318e+07, 2.81444e+07,
        5.72897e+07, 6.14704e+07, 3.53858e+07, 1.80856e+07, 9.67182e+07,
        3.1286e+07, 8.95889e+06,
    ],
    // MC-O3
    [
        5.97651e+06, 1.69157e+07, 1.28594e+06, 3.24513e+07, 4.9139e+07,
        3.14912e+07, 4.63606e+07, 6.15649e+07, 1.93765e+07, 2.39772e+07,
        5.00547e+07, 3.27255e+07, 3.08482e+07, 1.58093e+07, 6.87773e+07,
        9.06889e+06, 2.74351e+06,
    ],
    // MC-LTA-4/2x8/2
    [
        2.17043e+06, 8.9177e+06, 4.57001e+05, 1.42737e+07, 4.07234e+07,
        8.15319e+06, 3.18858e+07, 3.69758e+07, 3.3123e+07, 9.51958e+06,
        1.85928e+07, 1.16084e+07, 1.12712e+07, 3.33391e+06, 4.85895e+07,
        3.94018e+06, 1.9732e+06,
    ],
    // MC-LTA-8/4x4/2
    [
        1.84654e+06, 8.86548e+06, 3.77628e+05, 1.22012e+07, 3.88795e+07,
        4.77974e+06, 3.02327e+07, 3.59192e+07, 3.19622e+07, 6.40907e+06,
        1.77926e+07, 7.72569e+06, 7.74767e+06, 3.19688e+06, 4.52065e+07,
        2.78036e+06, 1.54934e+06,
    ],
];

fn config_colors() -> Vec<RGBColor> {
    vec![
        RGBColor(0x00, 0x00, 0x00),
        RGBColor(0xff, 0xc3, 0x4d),
        RGBColor(0x80, 0xff, 0xbf),
        RGBColor(0xff, 0x99, 0x99),
        RGBColor(0x99, 0xd6, 0xff),
    ]
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> FigureResult<()> {
    let table = ResultTable::from_rows(
        &CONFIGS,
        &BMARKS[..NUM_REAL_BMARKS],
        &CYCLE_DATA,
    );

    let speedups = normalize::speedups(&table, 0)?;

    // Only the plain average is appended; the multicore designs share
    // one die so an area-adjusted column adds nothing
    let mut display_data = Vec::with_capacity(speedups.len());
    for series in &speedups {
        let mut appended = series.clone();
        appended.push(reorder::mean(series));
        display_data.push(reorder::reorder(
            &appended,
            &BMARKS,
            &ORDERED_BMARKS,
        )?);
    }

    let style = FigureStyle::make(1000, 500, config_colors());
    render::grouped_bars(
        FIGURE_NAME,
        &ORDERED_BMARKS,
        &CONFIGS,
        &display_data,
        "Speedup",
        32.0,
        &style,
    )
}

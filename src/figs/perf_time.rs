//! Speedup over the in-order baseline, temporal tasking design points

use std::process;

use plotters::style::RGBColor;

use figs_lib::error::FigureResult;
use figs_lib::normalize;
use figs_lib::render;
use figs_lib::render::FigureStyle;
use figs_lib::reorder;
use figs_lib::table::ResultTable;

const FIGURE_NAME: &str = "fig-evaluation-perf-time";

// Canonical benchmark axis; the trailing entries are placeholders for
// the appended summary columns
const BMARKS: [&str; 19] = [
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
    "avg/area",
];

const NUM_REAL_BMARKS: usize = 17;

// Display order used in the paper: regular benchmarks first, then the
// increasingly irregular ones, then the summary columns
const ORDERED_BMARKS: [&str; 19] = [
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
    "avg/area",
];

const CONFIGS: [&str; 9] = [
    "IO",
    "O3",
    "LTA-4/2x8/1",
    "LTA-4/2x8/2",
    "LTA-4/2x8/4",
    "LTA-4/2x8/8",
    "LTA-8/4x4/1",
    "LTA-8/4x4/2",
    "LTA-8/4x4/4",
];

// Simulated cycle counts, one row per configuration, columns in the
// canonical benchmark order (real benchmarks only)
const CYCLE_DATA: [[f64; 17]; 9] = [
    // IO
    [
        6.21762e+07, 9.6853e+07, 1.38979e+07, 1.11999e+08, 1.11999e+08,
        1.00005e+08, 2.14937e+08, 1.23254e+08, 5.73002e+07, 1.00801e+08,
        2.20669e+08, 2.39507e+08, 1.06215e+08, 6.24962e+07, 2.33191e+08,
        1.18787e+08, 2.99491e+07,
    ],
    // O3
    [
        2.2038e+07, 6.60528e+07, 5.23304e+06, 4.9687e+07, 4.9687e+07,
        5.78961e+07, 1.21024e+08, 7.01812e+07, 2.59591e+07, 3.83622e+07,
        7.16346e+07, 1.27389e+08, 6.28899e+07, 4.70559e+07, 1.00265e+08,
        3.58277e+07, 9.5489e+06,
    ],
    // LTA-4/2x8/1
    [
        9.22017e+06, 2.33754e+07, 1.93217e+06, 3.56515e+07, 6.0832e+07,
        2.85791e+07, 6.90154e+07, 6.75429e+07, 4.90623e+07, 3.67955e+07,
        4.40686e+07, 2.6983e+07, 4.16018e+07, 1.01901e+07, 7.7595e+07,
        1.64291e+07, 9.2244e+06,
    ],
    // LTA-4/2x8/2
    [
        8.63051e+06, 2.37315e+07, 1.73027e+06, 3.58237e+07, 5.98692e+07,
        3.18636e+07, 6.78158e+07, 6.68148e+07, 4.89574e+07, 3.69622e+07,
        4.25972e+07, 4.30216e+07, 4.38003e+07, 1.13956e+07, 7.98781e+07,
        1.38198e+07, 6.9701e+06,
    ],
    // LTA-4/2x8/4
    [
        8.78448e+06, 2.37295e+07, 1.8624e+06, 3.59144e+07, 6.06277e+07,
        2.97782e+07, 6.75005e+07, 6.9332e+07, 4.77358e+07, 3.65907e+07,
        4.3188e+07, 4.40858e+07, 4.39771e+07, 1.68911e+07, 7.97067e+07,
        1.51311e+07, 7.89144e+06,
    ],
    // LTA-4/2x8/8
    [
        1.04195e+07, 2.47246e+07, 2.85269e+06, 3.68561e+07, 6.41461e+07,
        4.04031e+07, 7.21379e+07, 6.93992e+07, 4.77274e+07, 3.93823e+07,
        5.09125e+07, 3.40489e+07, 5.04328e+07, 1.88981e+07, 8.55908e+07,
        2.16114e+07, 8.63648e+06,
    ],
    // LTA-8/4x4/1
    [
        7.41608e+06, 2.00253e+07, 1.5038e+06, 2.55355e+07, 5.15988e+07,
        1.6484e+07, 5.92133e+07, 6.39264e+07, 4.49455e+07, 2.38752e+07,
        3.34442e+07, 2.61732e+07, 2.73786e+07, 8.55007e+06, 6.77677e+07,
        1.08749e+07, 6.31471e+06,
    ],
    // LTA-8/4x4/2
    [
        7.24986e+06, 2.01137e+07, 1.4406e+06, 2.60734e+07, 5.28656e+07,
        1.80378e+07, 5.97767e+07, 6.59471e+07, 4.4765e+07, 2.38952e+07,
        3.3761e+07, 3.05817e+07, 2.96794e+07, 1.13304e+07, 7.09918e+07,
        9.85516e+06, 5.32857e+06,
    ],
    // LTA-8/4x4/4
    [
        7.81463e+06, 2.04336e+07, 1.6639e+06, 2.67658e+07, 5.31302e+07,
        2.12428e+07, 5.95769e+07, 6.49441e+07, 4.43546e+07, 2.32631e+07,
        3.60424e+07, 2.89854e+07, 3.07165e+07, 1.55005e+07, 7.19638e+07,
        1.25951e+07, 6.90972e+06,
    ],
];

/// Total area per configuration (um^2): core plus 32KB I$ + 32KB D$
/// with the matching crossbar network, plus per-lane instruction
/// buffers where the design point has extra lane groups
fn area_data() -> [f64; 9] {
    let cache_area = [
        2.0 * 262005.78 + 8495.39,   // 1-port crossbar network
        2.0 * 262005.78 + 24272.54,  // 2-port crossbar network
        2.0 * 262005.78 + 69350.12,  // 4-port crossbar network
        2.0 * 262005.78 + 198143.19, // 8-port crossbar network
    ];

    let pib_area = 1064.40;

    let core_area = [
        75981.95,       // io
        75981.95 * 3.0, // o3
        680345.62,      // LTA-4/2x8/1
        680345.62,      // LTA-4/2x8/2
        680345.62,      // LTA-4/2x8/4
        680345.62,      // LTA-4/2x8/8
        774124.82,      // LTA-8/4x4/1
        774124.82,      // LTA-8/4x4/2
        774124.82,      // LTA-8/4x4/4
    ];

    [
        core_area[0] + cache_area[0],
        core_area[1] + cache_area[0],
        core_area[2] + cache_area[1],
        core_area[3] + cache_area[1] + pib_area * 2.0,
        core_area[4] + cache_area[1] + pib_area * 3.0 * 2.0,
        core_area[5] + cache_area[1] + pib_area * 7.0 * 2.0,
        core_area[6] + cache_area[1],
        core_area[7] + cache_area[1] + pib_area * 4.0,
        core_area[8] + cache_area[1] + pib_area * 3.0 * 4.0,
    ]
}

fn config_colors() -> Vec<RGBColor> {
    vec![
        RGBColor(0x00, 0x00, 0x00),
        RGBColor(0x80, 0xff, 0xbf),
        RGBColor(0xff, 0xcc, 0xcc),
        RGBColor(0xff, 0x99, 0x99),
        RGBColor(0xff, 0x66, 0x66),
        RGBColor(0xff, 0x33, 0x33),
        RGBColor(0xcc, 0xeb, 0xff),
        RGBColor(0x99, 0xd6, 0xff),
        RGBColor(0x66, 0xc2, 0xff),
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
    let areas = area_data();

    // Speedup over IO, then avg / avg/area columns, then display order
    let speedups = normalize::speedups(&table, 0)?;

    let mut display_data = Vec::with_capacity(speedups.len());
    for (c, series) in speedups.iter().enumerate() {
        let appended =
            reorder::append_summaries(series, areas[0], areas[c]);
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
        10.0,
        &style,
    )
}

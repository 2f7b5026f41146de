//! Speedup over the in-order baseline, spatial tasking design points

use std::process;

use plotters::style::RGBColor;

use figs_lib::error::FigureResult;
use figs_lib::normalize;
use figs_lib::render;
use figs_lib::render::FigureStyle;
use figs_lib::reorder;
use figs_lib::table::ResultTable;

const FIGURE_NAME: &str = "fig-evaluation-perf-space";

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
    "LTA-4/1x8/1",
    "LTA-4/2x8/1",
    "LTA-4/4x8/1",
    "LTA-8/1x4/1",
    "LTA-8/2x4/1",
    "LTA-8/4x4/1",
    "LTA-8/8x4/1",
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
    // LTA-4/1x8/1
    [
        5.46224e+06, 2.52045e+07, 1.67079e+06, 4.15598e+07, 6.89339e+07,
        2.12606e+07, 7.85329e+07, 7.08254e+07, 5.01518e+07, 4.33168e+07,
        4.4625e+07, 1.91717e+07, 4.54065e+07, 1.08412e+07, 8.08117e+07,
        1.57291e+07, 1.0382e+07,
    ],
    // LTA-4/2x8/1
    [
        9.22017e+06, 2.33754e+07, 1.93217e+06, 3.56515e+07, 6.0832e+07,
        2.85791e+07, 6.90154e+07, 6.75429e+07, 4.90623e+07, 3.67955e+07,
        4.40686e+07, 2.6983e+07, 4.16018e+07, 1.01901e+07, 7.7595e+07,
        1.64291e+07, 9.2244e+06,
    ],
    // LTA-4/4x8/1
    [
        1.36042e+07, 3.58641e+07, 2.28518e+06, 2.65584e+07, 5.34201e+07,
        2.00578e+07, 6.01588e+07, 6.44666e+07, 4.59117e+07, 2.49205e+07,
        3.68213e+07, 4.38329e+07, 3.02481e+07, 9.62343e+06, 7.00787e+07,
        1.65616e+07, 6.77705e+06,
    ],
    // LTA-8/1x4/1
    [
        4.01958e+06, 2.08595e+07, 1.16403e+06, 4.00252e+07, 6.67766e+07,
        1.88071e+07, 7.71387e+07, 7.03166e+07, 4.94318e+07, 4.1237e+07,
        4.18723e+07, 1.57719e+07, 4.2636e+07, 9.60028e+06, 7.96016e+07,
        1.27497e+07, 7.98038e+06,
    ],
    // LTA-8/2x4/1
    [
        6.39428e+06, 1.72825e+07, 1.37428e+06, 3.37439e+07, 5.88742e+07,
        2.37387e+07, 6.79575e+07, 6.71529e+07, 4.80171e+07, 3.46944e+07,
        3.90664e+07, 2.03096e+07, 3.7668e+07, 9.08387e+06, 7.45908e+07,
        1.26451e+07, 7.79992e+06,
    ],
    // LTA-8/4x4/1
    [
        7.41608e+06, 2.00253e+07, 1.5038e+06, 2.55355e+07, 5.15988e+07,
        1.6484e+07, 5.92133e+07, 6.39264e+07, 4.49455e+07, 2.38752e+07,
        3.34442e+07, 2.61732e+07, 2.73786e+07, 8.55007e+06, 6.77677e+07,
        1.08749e+07, 6.31471e+06,
    ],
    // LTA-8/8x4/1
    [
        1.34413e+07, 3.52445e+07, 2.10226e+06, 1.93972e+07, 4.6336e+07,
        1.24771e+07, 5.29688e+07, 5.91383e+07, 4.31125e+07, 1.50062e+07,
        2.65977e+07, 4.08803e+07, 1.84192e+07, 8.9109e+06, 6.20944e+07,
        1.4835e+07, 5.39125e+06,
    ],
];

/// Total area per configuration (um^2): core plus 32KB I$ + 32KB D$
/// with the crossbar network matching the lane-group count
fn area_data() -> [f64; 9] {
    let cache_area = [
        2.0 * 262005.78 + 8495.39,   // 1-port crossbar network
        2.0 * 262005.78 + 24272.54,  // 2-port crossbar network
        2.0 * 262005.78 + 69350.12,  // 4-port crossbar network
        2.0 * 262005.78 + 198143.19, // 8-port crossbar network
    ];

    let core_area = [
        75981.95,       // io
        75981.95 * 3.0, // o3
        746055.46,      // LTA-4/1x8/1
        680345.62,      // LTA-4/2x8/1
        636995.21,      // LTA-4/4x8/1
        1019622.7,      // LTA-8/1x4/1
        862954.44,      // LTA-8/2x4/1
        774124.82,      // LTA-8/4x4/1
        732903.21,      // LTA-8/8x4/1
    ];

    [
        core_area[0] + cache_area[0],
        core_area[1] + cache_area[0],
        core_area[2] + cache_area[2],
        core_area[3] + cache_area[1],
        core_area[4] + cache_area[0],
        core_area[5] + cache_area[3],
        core_area[6] + cache_area[2],
        core_area[7] + cache_area[1],
        core_area[8] + cache_area[0],
    ]
}

fn config_colors() -> Vec<RGBColor> {
    vec![
        RGBColor(0x00, 0x00, 0x00),
        RGBColor(0x80, 0xff, 0xbf),
        RGBColor(0xff, 0xcc, 0xcc),
        RGBColor(0xff, 0x99, 0x99),
        RGBColor(0xff, 0x66, 0x66),
        RGBColor(0xcc, 0xeb, 0xff),
        RGBColor(0x99, 0xd6, 0xff),
        RGBColor(0x66, 0xc2, 0xff),
        RGBColor(0x33, 0xad, 0xff),
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
        12.0,
        &style,
    )
}

//! Energy efficiency vs. performance, spatial tasking design points

use std::process;

use plotters::style::RGBColor;

use figs_lib::error::FigureResult;
use figs_lib::normalize;
use figs_lib::render;
use figs_lib::render::FigureStyle;

const FIGURE_NAME: &str = "fig-evaluation-eeperf-space";

const BMARKS: [&str; 2] = ["bilateral", "strsearch"];

const CONFIGS: [&str; 9] = [
    "io",
    "o3",
    "4/1x8/1",
    "4/2x8/1",
    "4/4x8/1",
    "8/1x4/1",
    "8/2x4/1",
    "8/4x4/1",
    "8/8x4/1",
];

// Total energy per configuration; the single-lane group entries have
// the sleep-mode leakage of the absent lanes subtracted
fn energy_data() -> [[f64; 9]; 2] {
    [
        // bilateral
        [
            1321694465.7,
            2506392584.32,
            663007605.62 - 12053968.325,
            867145085.24,
            866983138.58,
            659045147.66 - 12134339.744,
            904477482.58,
            883914872.96,
            904486947.86,
        ],
        // strsearch
        [
            1073602322.5,
            2092823102.45,
            614451161.48 - 53424701.663,
            606284126.52,
            696057840.32,
            666632826.36 - 53319701.925,
            632172782.8,
            707431514.24,
            836457421.8,
        ],
    ]
}

const CYCLE_DATA: [[f64; 9]; 2] = [
    // bilateral
    [
        6.21762e+07, // io
        2.2038e+07,  // o3
        5.46224e+06, // LTA-4/1x8/1
        9.22017e+06, // LTA-4/2x8/1
        1.36042e+07, // LTA-4/4x8/1
        4.01958e+06, // LTA-8/1x4/1
        6.39428e+06, // LTA-8/2x4/1
        7.41608e+06, // LTA-8/4x4/1
        1.34413e+07, // LTA-8/8x4/1
    ],
    // strsearch
    [
        2.99491e+07, // io
        9.5489e+06,  // o3
        1.0382e+07,  // LTA-4/1x8/1
        9.2244e+06,  // LTA-4/2x8/1
        6.77705e+06, // LTA-4/4x8/1
        7.98038e+06, // LTA-8/1x4/1
        7.79992e+06, // LTA-8/2x4/1
        6.31471e+06, // LTA-8/4x4/1
        5.39125e+06, // LTA-8/8x4/1
    ],
];

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
    let energy = energy_data();

    // Both axes are rates (tasks/sec, tasks/joule) normalized to the
    // in-order reference design
    let mut panels = Vec::with_capacity(BMARKS.len());
    for (b, bmark) in BMARKS.iter().enumerate() {
        let perf = normalize::normalize_to_first(
            bmark,
            CONFIGS[0],
            &normalize::rates(bmark, &CONFIGS, &CYCLE_DATA[b])?,
        )?;
        let eff = normalize::normalize_to_first(
            bmark,
            CONFIGS[0],
            &normalize::rates(bmark, &CONFIGS, &energy[b])?,
        )?;

        let points: Vec<(f64, f64)> =
            perf.into_iter().zip(eff).collect();
        panels.push(points);
    }

    let style = FigureStyle::make(900, 450, config_colors());
    render::scatter_panels(
        FIGURE_NAME,
        &BMARKS,
        &CONFIGS,
        &panels,
        "Performance",
        "Energy Efficiency",
        &style,
    )
}

//! Area breakdown by structure, spatial tasking design points

use std::process;

use plotters::style::RGBColor;

use figs_lib::error::FigureResult;
use figs_lib::render;
use figs_lib::render::FigureStyle;

const FIGURE_NAME: &str = "area-breakdown-space";

const CONFIGS: [&str; 8] = [
    "IO",
    "4/1x8/1",
    "4/2x8/1",
    "4/4x8/1",
    "8/1x4/1",
    "8/2x4/1",
    "8/4x4/1",
    "8/8x4/1",
];

// Stack order, bottom to top
const STRUCTURES: [&str; 10] = [
    "gpp", "icache", "dcache", "wq", "lsu", "llfu", "slfu", "rf",
    "tmu", "pib",
];

// Total die area per configuration (mm^2); the tasking designs add a
// fixed 0.076 mm^2 for the memory crossbar
const TOTAL_AREA: [f64; 8] = [
    0.61,
    1.34 + 0.076,
    1.23 + 0.076,
    1.17 + 0.076,
    1.74 + 0.076,
    1.46 + 0.076,
    1.32 + 0.076,
    1.27 + 0.076,
];

/// Per-structure area fractions, one row per configuration, columns in
/// STRUCTURES order. The general-purpose control processor is reported
/// separately from the synthesized fractions, which are scaled to the
/// remainder of the die.
fn area_fractions() -> [[f64; 10]; 8] {
    [
        // IO
        [0.13, 0.43, 0.44, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        // 4/1x8/1
        [
            0.05,
            0.95 * 0.20,
            0.95 * 0.25,
            0.95 * 0.14,
            0.95 * 0.02,
            0.95 * 0.14,
            0.95 * 0.06,
            0.95 * 0.18,
            0.95 * 0.0,
            0.95 * 0.00075,
        ],
        // 4/2x8/1
        [
            0.06,
            0.94 * 0.21,
            0.94 * 0.23,
            0.94 * 0.15,
            0.94 * 0.02,
            0.94 * 0.07,
            0.94 * 0.07,
            0.94 * 0.22,
            0.94 * 0.02,
            0.94 * 0.0016,
        ],
        // 4/4x8/1
        [
            0.06,
            0.94 * 0.22,
            0.94 * 0.23,
            0.94 * 0.16,
            0.94 * 0.03,
            0.94 * 0.04,
            0.94 * 0.07,
            0.94 * 0.22,
            0.94 * 0.02,
            0.94 * 0.0034,
        ],
        // 8/1x4/1
        [
            0.04,
            0.96 * 0.15,
            0.96 * 0.26,
            0.96 * 0.11,
            0.96 * 0.02,
            0.96 * 0.20,
            0.96 * 0.09,
            0.96 * 0.16,
            0.96 * 0.0,
            0.96 * 0.00059,
        ],
        // 8/2x4/1
        [
            0.05,
            0.95 * 0.18,
            0.95 * 0.25,
            0.95 * 0.13,
            0.95 * 0.02,
            0.95 * 0.12,
            0.95 * 0.10,
            0.95 * 0.17,
            0.95 * 0.02,
            0.95 * 0.0014,
        ],
        // 8/4x4/1
        [
            0.05,
            0.95 * 0.20,
            0.95 * 0.23,
            0.95 * 0.14,
            0.95 * 0.02,
            0.95 * 0.07,
            0.95 * 0.12,
            0.95 * 0.19,
            0.95 * 0.02,
            0.95 * 0.003,
        ],
        // 8/8x4/1
        [
            0.06,
            0.94 * 0.21,
            0.94 * 0.21,
            0.94 * 0.15,
            0.94 * 0.02,
            0.94 * 0.04,
            0.94 * 0.13,
            0.94 * 0.21,
            0.94 * 0.02,
            0.94 * 0.0063,
        ],
    ]
}

fn structure_colors() -> Vec<RGBColor> {
    // One color per STRUCTURES entry, bottom to top
    vec![
        RGBColor(0x00, 0x00, 0x00), // gpp
        RGBColor(0xf2, 0xe6, 0xff), // icache
        RGBColor(0x00, 0x73, 0xe6), // dcache
        RGBColor(0xcc, 0x00, 0x00), // wq
        RGBColor(0x99, 0xcc, 0xff), // lsu
        RGBColor(0xff, 0xcc, 0x66), // llfu
        RGBColor(0xff, 0xff, 0x99), // slfu
        RGBColor(0xff, 0x33, 0x33), // rf
        RGBColor(0x00, 0xb3, 0x59), // tmu
        RGBColor(0xbd, 0x80, 0xff), // pib
    ]
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> FigureResult<()> {
    let fractions = area_fractions();

    // stacks[structure][config], absolute area in mm^2
    let mut stacks =
        vec![Vec::with_capacity(CONFIGS.len()); STRUCTURES.len()];
    for (c, row) in fractions.iter().enumerate() {
        for (s, fraction) in row.iter().enumerate() {
            stacks[s].push(fraction * TOTAL_AREA[c]);
        }
    }

    let style = FigureStyle::make(700, 450, structure_colors());
    render::stacked_bars(
        FIGURE_NAME,
        &[""],
        &CONFIGS,
        &STRUCTURES,
        &[stacks],
        "Area (mm^2)",
        &style,
    )
}

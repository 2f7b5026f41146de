//! Native runtime validation: speedup of parallel runtimes over scalar

use std::process;

use plotters::style::RGBColor;

use figs_lib::error::FigureResult;
use figs_lib::render;
use figs_lib::render::FigureStyle;
use figs_lib::reorder;
use figs_lib::table::ResultTable;

const FIGURE_NAME: &str = "runtime-validation";

const BMARKS: [&str; 6] =
    ["sgemm", "dct8x8m", "mriq", "bfs-nd", "maxmatch", "strsearch"];

const CONFIGS: [&str; 4] = ["scalar", "cilk++", "tbb", "lta"];

// Measured speedups over the scalar runtime on native hardware
const SPEEDUP_DATA: [[f64; 6]; 4] = [
    // scalar
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    // cilk++
    [10.42, 3.32, 7.53, 2.29, 1.61, 11.18],
    // tbb
    [11.76, 3.33, 8.83, 1.77, 1.73, 9.97],
    // lta
    [10.32, 3.38, 9.54, 1.77, 2.05, 11.22],
];

fn config_colors() -> Vec<RGBColor> {
    vec![
        RGBColor(0x00, 0x00, 0x00),
        RGBColor(0xff, 0x66, 0x66),
        RGBColor(0x66, 0xc2, 0xff),
        RGBColor(0x80, 0xff, 0xbf),
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
        ResultTable::from_rows(&CONFIGS, &BMARKS, &SPEEDUP_DATA);

    // Machine-readable table alongside the chart
    let output_path = format!("{}.csv", FIGURE_NAME);
    let mut writer = csv::Writer::from_path(&output_path)?;

    let mut header = vec!["Benchmark"];
    header.extend_from_slice(&CONFIGS);
    writer.write_record(&header)?;

    for (b, bmark) in BMARKS.iter().enumerate() {
        let mut record = vec![bmark.to_string()];
        for c in 0..table.num_configs() {
            record.push(format!("{:.2}", table.row(c)[b]));
        }
        writer.write_record(&record)?;
    }

    let mut avg_record = vec!["avg".to_string()];
    for c in 0..table.num_configs() {
        avg_record.push(format!("{:.2}", reorder::mean(table.row(c))));
    }
    writer.write_record(&avg_record)?;
    writer.flush()?;

    let series: Vec<Vec<f64>> =
        (0..table.num_configs()).map(|c| table.row(c).to_vec()).collect();

    let style = FigureStyle::make(800, 450, config_colors());
    render::grouped_bars(
        FIGURE_NAME,
        &BMARKS,
        &CONFIGS,
        &series,
        "Speedup",
        13.0,
        &style,
    )
}

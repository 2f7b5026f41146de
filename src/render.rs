//! Chart rendering on top of plotters

use plotters::prelude::*;

use crate::error::FigureError;
use crate::error::FigureResult;

fn render_err<E: std::fmt::Display>(name: &str, e: E) -> FigureError {
    FigureError::RenderError(name.to_string(), e.to_string())
}

/// Explicit per-figure style, passed into every rendering call instead
/// of living in process-wide tables
pub struct FigureStyle {
    pub width: u32,
    pub height: u32,
    pub colors: Vec<RGBColor>,
}

impl FigureStyle {
    pub fn make(width: u32, height: u32, colors: Vec<RGBColor>) -> Self {
        assert!(!colors.is_empty());
        Self {
            width,
            height,
            colors,
        }
    }

    pub fn color(&self, i: usize) -> RGBColor {
        self.colors[i % self.colors.len()]
    }
}

/// Grouped bar chart: one cluster per benchmark, one bar per
/// configuration, with a horizontal rule at the baseline (y = 1)
pub fn grouped_bars(
    name: &str,
    x_labels: &[&str],
    series_names: &[&str],
    series: &[Vec<f64>],
    y_desc: &str,
    y_max: f64,
    style: &FigureStyle,
) -> FigureResult<()> {
    assert!(series.len() == series_names.len());
    for row in series {
        assert!(row.len() == x_labels.len());
    }

    let output_path = format!("{}.svg", name);
    let root = SVGBackend::new(&output_path, (style.width, style.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(name, e))?;

    let num_x = x_labels.len();
    let num_series = series.len();
    let bar_width = 1.0 / (num_series as f64 + 2.0);
    let labels: Vec<String> =
        x_labels.iter().map(|s| s.to_string()).collect();

    let mut ctx = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..num_x as f64, 0.0..y_max)
        .map_err(|e| render_err(name, e))?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(num_x)
        .x_label_formatter(&|x| {
            let i = x.floor() as usize;
            labels.get(i).cloned().unwrap_or_default()
        })
        .y_desc(y_desc)
        .draw()
        .map_err(|e| render_err(name, e))?;

    for (s, values) in series.iter().enumerate() {
        let color = style.color(s);
        ctx.draw_series(values.iter().enumerate().map(|(b, v)| {
            let x0 = b as f64 + (s as f64 + 1.0) * bar_width;
            Rectangle::new([(x0, 0.0), (x0 + bar_width, *v)], color.filled())
        }))
        .map_err(|e| render_err(name, e))?
        .label(series_names[s])
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
        });
    }

    // Baseline rule
    ctx.draw_series(LineSeries::new(
        vec![(0.0, 1.0), (num_x as f64, 1.0)],
        &BLACK,
    ))
    .map_err(|e| render_err(name, e))?;

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| render_err(name, e))?;

    root.present().map_err(|e| render_err(name, e))?;
    Ok(())
}

/// Stacked bar chart: one panel per benchmark, one stacked bar per
/// configuration. `panels[p][stack][config]` holds the group values.
pub fn stacked_bars(
    name: &str,
    panel_titles: &[&str],
    x_labels: &[&str],
    stack_names: &[&str],
    panels: &[Vec<Vec<f64>>],
    y_desc: &str,
    style: &FigureStyle,
) -> FigureResult<()> {
    assert!(panels.len() == panel_titles.len());

    let output_path = format!("{}.svg", name);
    let root = SVGBackend::new(&output_path, (style.width, style.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(name, e))?;

    let areas = root.split_evenly((1, panels.len()));
    let num_x = x_labels.len();
    let labels: Vec<String> =
        x_labels.iter().map(|s| s.to_string()).collect();

    for (p, (area, stacks)) in areas.iter().zip(panels.iter()).enumerate() {
        assert!(stacks.len() == stack_names.len());

        // Tallest stacked bar in this panel sets the y range
        let mut y_max: f64 = 0.0;
        for c in 0..num_x {
            let total: f64 = stacks.iter().map(|s| s[c]).sum();
            y_max = y_max.max(total);
        }

        let mut ctx = ChartBuilder::on(area)
            .caption(panel_titles[p], ("sans-serif", 18))
            .margin(5)
            .x_label_area_size(60)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..num_x as f64, 0.0..y_max * 1.05)
            .map_err(|e| render_err(name, e))?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(num_x)
            .x_label_formatter(&|x| {
                let i = x.floor() as usize;
                labels.get(i).cloned().unwrap_or_default()
            })
            .y_desc(y_desc)
            .draw()
            .map_err(|e| render_err(name, e))?;

        let mut y_offset = vec![0.0; num_x];
        for (s, values) in stacks.iter().enumerate() {
            let color = style.color(s);
            let offsets = y_offset.clone();
            let anno = ctx
                .draw_series(values.iter().enumerate().map(|(c, v)| {
                    Rectangle::new(
                        [
                            (c as f64 + 0.3, offsets[c]),
                            (c as f64 + 0.7, offsets[c] + v),
                        ],
                        color.filled(),
                    )
                }))
                .map_err(|e| render_err(name, e))?;
            // One legend for the whole figure, on the first panel
            if p == 0 {
                anno.label(stack_names[s]).legend(move |(x, y)| {
                    Rectangle::new(
                        [(x, y - 5), (x + 10, y + 5)],
                        color.filled(),
                    )
                });
            }
            for (c, v) in values.iter().enumerate() {
                y_offset[c] += v;
            }
        }

        if p == 0 {
            ctx.configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| render_err(name, e))?;
        }
    }

    root.present().map_err(|e| render_err(name, e))?;
    Ok(())
}

/// Scatter chart: one panel per benchmark, one point per configuration,
/// with guide rules through (1, 1) for the baseline
pub fn scatter_panels(
    name: &str,
    panel_titles: &[&str],
    series_names: &[&str],
    panels: &[Vec<(f64, f64)>],
    x_desc: &str,
    y_desc: &str,
    style: &FigureStyle,
) -> FigureResult<()> {
    assert!(panels.len() == panel_titles.len());

    let output_path = format!("{}.svg", name);
    let root = SVGBackend::new(&output_path, (style.width, style.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(name, e))?;

    let areas = root.split_evenly((1, panels.len()));

    for (p, (area, points)) in areas.iter().zip(panels.iter()).enumerate() {
        assert!(points.len() == series_names.len());

        let x_max = points.iter().map(|(x, _)| *x).fold(0.0, f64::max) + 0.5;
        let y_max = points.iter().map(|(_, y)| *y).fold(0.0, f64::max) + 0.1;

        let mut ctx = ChartBuilder::on(area)
            .caption(panel_titles[p], ("sans-serif", 18))
            .margin(5)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)
            .map_err(|e| render_err(name, e))?;

        ctx.configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .map_err(|e| render_err(name, e))?;

        for (s, (x, y)) in points.iter().enumerate() {
            let color = style.color(s);
            let anno = ctx
                .draw_series(std::iter::once(Circle::new(
                    (*x, *y),
                    4,
                    color.filled(),
                )))
                .map_err(|e| render_err(name, e))?;
            if p == 0 {
                anno.label(series_names[s]).legend(move |(x, y)| {
                    Circle::new((x + 5, y), 4, color.filled())
                });
            }
        }

        // Baseline guides
        ctx.draw_series(LineSeries::new(
            vec![(0.0, 1.0), (x_max, 1.0)],
            BLACK.mix(0.5),
        ))
        .map_err(|e| render_err(name, e))?;
        ctx.draw_series(LineSeries::new(
            vec![(1.0, 0.0), (1.0, y_max)],
            BLACK.mix(0.5),
        ))
        .map_err(|e| render_err(name, e))?;

        if p == 0 {
            ctx.configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| render_err(name, e))?;
        }
    }

    root.present().map_err(|e| render_err(name, e))?;
    Ok(())
}

//! Blocking egui display for chart specs.

use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

use crate::{AxisScale, ChartSpec, TraceStyle};

/// Opens a blocking window rendering the chart and waits for it to close.
///
/// The backend has no native symlog axis, so axis scales are applied to the
/// point coordinates before plotting and noted on the axis labels instead.
/// An empty chart is valid and simply shows no data points.
///
/// # Errors
///
/// Returns the backend error unchanged if the native window cannot be
/// created; no recovery is attempted here.
pub fn show(spec: ChartSpec) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = spec.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp { spec }))),
    )
}

/// The egui [`eframe::App`] that renders one chart spec.
struct ChartApp {
    spec: ChartSpec,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let spec = &self.spec;
            let plot = Plot::new("chart")
                .legend(Legend::default())
                .show_grid(spec.grid)
                .x_axis_label(axis_label(&spec.x_label, spec.x_scale))
                .y_axis_label(axis_label(&spec.y_label, spec.y_scale));

            plot.show(ui, |plot_ui| {
                for trace in &spec.traces {
                    let points: PlotPoints = trace
                        .points
                        .iter()
                        .map(|p| [spec.x_scale.apply(p[0]), spec.y_scale.apply(p[1])])
                        .collect();

                    let mut line = Line::new(points).name(&trace.name);
                    if trace.style == TraceStyle::Dashed {
                        line = line.style(LineStyle::dashed_loose());
                    }
                    plot_ui.line(line);
                }
            });
        });
    }
}

fn axis_label(base: &str, scale: AxisScale) -> String {
    match scale {
        AxisScale::Linear => base.to_owned(),
        AxisScale::SymLog { .. } => format!("{base} (symlog)"),
    }
}

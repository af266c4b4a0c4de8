//! Render convergence diagnostics from solver log files.
//!
//! Each mode ingests one input file and opens an interactive chart window
//! per chart; close a window to move on to the next one.
//!
//! # Usage
//!
//! ```text
//! cargo run --example render --features plot -- convergence errors.txt
//! cargo run --example render --features plot -- accuracy accuracy_error_analysis.txt
//! cargo run --example render --features plot -- curve f1_plot.txt "f1(x)"
//! ```
//!
//! # Modes
//!
//! - **convergence \<log\>** — one chart per (function, method) pair found
//!   in an iteration log: error vs. iteration count on a symlog y-axis.
//!
//! - **accuracy \<log\>** — one chart per test function from an accuracy
//!   sweep log: Newton and Bisection error vs. requested precision,
//!   overlaid on the dashed y = x ideal diagonal.
//!
//! - **curve \<file\> \[title\]** — a raw function curve from an `x y`
//!   file on plain linear axes.
//!
//! A missing input file is not fatal: the pipeline warns and the charts it
//! would have fed are simply skipped as empty.

use std::error::Error;

use rootviz_charts::{ChartSpec, show};
use rootviz_core::{
    Category, PlotSeries, SolverMethod, TestFunction, load_classified, read_curve,
};

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new().init()?;

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| usage());

    match mode.as_str() {
        "convergence" => convergence(&args.next().unwrap_or_else(|| usage())),
        "accuracy" => accuracy(&args.next().unwrap_or_else(|| usage())),
        "curve" => {
            let path = args.next().unwrap_or_else(|| usage());
            curve(&path, args.next())
        }
        other => {
            eprintln!("Unknown mode: {other}");
            usage()
        }
    }
}

fn usage() -> ! {
    eprintln!("Usage: render [convergence <log> | accuracy <log> | curve <file> [title]]");
    std::process::exit(1)
}

/// One convergence chart per (function, method) pair that has data.
fn convergence(path: &str) -> Result<(), Box<dyn Error>> {
    let classified = load_classified(path)?;

    for (category, values) in classified.iter() {
        if values.is_empty() {
            continue;
        }
        let series = PlotSeries::iteration(category.label(), values);
        show(ChartSpec::convergence(series))?;
    }

    Ok(())
}

/// One accuracy chart per test function, with both methods overlaid.
fn accuracy(path: &str) -> Result<(), Box<dyn Error>> {
    let classified = load_classified(path)?;

    for function in TestFunction::ALL {
        let mut series = Vec::new();
        for method in SolverMethod::ALL {
            let values = classified.values(Category { function, method });
            if values.is_empty() {
                continue;
            }
            series.push(PlotSeries::accuracy(
                format!("{function} - {method}"),
                values,
            )?);
        }

        if series.is_empty() {
            continue;
        }
        show(ChartSpec::accuracy(format!("{function}(x)"), series))?;
    }

    Ok(())
}

/// A raw function curve from an `x y` file.
fn curve(path: &str, title: Option<String>) -> Result<(), Box<dyn Error>> {
    let points = read_curve(path)?;
    let title = title.unwrap_or_else(|| path.to_owned());
    show(ChartSpec::curve(title, points))?;
    Ok(())
}

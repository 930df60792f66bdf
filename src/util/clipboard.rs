//! Analysis report text and clipboard integration.

use std::fmt::Write as _;

use arboard::Clipboard;

use super::format_value;
use crate::error::Result;
use crate::plot::PlotState;

/// Plain-text summary of the view, active functions and last analysis.
pub fn analysis_report(state: &PlotState) -> String {
    let e = state.viewport.extent();
    let mut out = format!(
        "view: x [{}, {}] y [{}, {}]\n",
        format_value(e.x_min),
        format_value(e.x_max),
        format_value(e.y_min),
        format_value(e.y_max)
    );

    let names: Vec<&str> = state.functions().iter().map(|f| f.name.as_str()).collect();
    if names.is_empty() {
        out.push_str("functions: none\n");
    } else {
        let _ = writeln!(out, "functions: {}", names.join(", "));
    }

    let _ = writeln!(out, "zeros: {}", state.zeros.len());
    for z in &state.zeros {
        let _ = writeln!(out, "  x = {}", format_value(z.x));
    }

    let _ = writeln!(out, "extrema: {}", state.extrema.len());
    for p in &state.extrema {
        let _ = writeln!(
            out,
            "  {} x = {} y = {}",
            p.kind.name(),
            format_value(p.x),
            format_value(p.y)
        );
    }
    out
}

/// Copy the analysis report to the system clipboard.
pub fn copy_analysis_report(state: &PlotState) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(analysis_report(state))?;
    Ok(())
}

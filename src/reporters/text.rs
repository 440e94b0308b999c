//! Text (terminal) reporter

use super::RenderOptions;
use crate::models::{Frame, FrameMark, GameReport};
use anyhow::Result;
use console::Style;

/// Render report as terminal output
pub fn render(report: &GameReport, options: &RenderOptions) -> Result<String> {
    let bold = Style::new().bold().force_styling(options.color);
    let dim = Style::new().dim().force_styling(options.color);

    let mut out = format!("Result is: {}\n", bold.apply_to(report.total));

    if !options.frames {
        return Ok(out);
    }

    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        dim.apply_to("  FRAME  BALLS  MARK  BONUS  SCORE  TOTAL")
    ));
    out.push_str(&format!(
        "{}\n",
        dim.apply_to("  ─────────────────────────────────────────")
    ));

    for frame in &report.frames {
        let mark_style = mark_style(frame.mark).force_styling(options.color);
        out.push_str(&format!(
            "  {:>5}  {:<5}  {}  {:>5}  {:>5}  {:>5}\n",
            frame.number,
            format_balls(frame),
            mark_style.apply_to(format!("{:<4}", frame.mark.symbol())),
            frame.bonus,
            frame.score,
            frame.running_total
        ));
    }

    out.push_str(&format!(
        "\nStrikes: {}  Spares: {}  Open: {}\n",
        report.count(FrameMark::Strike),
        report.count(FrameMark::Spare),
        report.count(FrameMark::Open)
    ));
    if report.is_perfect() {
        out.push_str(&format!("{}\n", bold.apply_to("Perfect game!")));
    }

    Ok(out)
}

fn mark_style(mark: FrameMark) -> Style {
    match mark {
        FrameMark::Strike => Style::new().green().bold(),
        FrameMark::Spare => Style::new().yellow(),
        FrameMark::Open => Style::new().dim(),
    }
}

/// Balls as written on a score sheet
fn format_balls(frame: &Frame) -> String {
    match frame.mark {
        FrameMark::Strike => "X".to_string(),
        FrameMark::Spare => format!("{} /", frame.first),
        FrameMark::Open => format!("{} {}", frame.first, frame.second),
    }
}

use anyhow::{Context, Result, bail};

use lunaria_coordinator::{Coordinator, GridMode, LoadOutcome, RenderOutput};
use lunaria_grid::DayCell;

use crate::cli::{ModeArg, ShowArgs};
use crate::session;

/// Render one month in the active grid mode.
pub fn run(args: ShowArgs) -> Result<()> {
    let session = session::bootstrap(&args.config)?;

    let mode = match args.mode {
        Some(ModeArg::Custom) => GridMode::Custom,
        Some(ModeArg::Gregorian) => GridMode::Gregorian,
        None => match session.config.display.mode.as_str() {
            "custom" => GridMode::Custom,
            "gregorian" => GridMode::Gregorian,
            other => bail!("unknown display mode in config: {other:?}"),
        },
    };

    let mut coordinator = Coordinator::new(session.rules);
    let ticket = coordinator.begin_load(session.location.clone());
    let outcome = coordinator.complete_load(ticket, Ok(session.dataset), session.today)?;
    if !matches!(outcome, LoadOutcome::Applied(_)) {
        bail!("dataset load was not applied");
    }

    for _ in 0..args.offset.abs() {
        let moved = if args.offset > 0 {
            coordinator.next()?
        } else {
            coordinator.prev()?
        };
        if moved.is_none() {
            break; // reached the edge of the loaded dataset
        }
    }

    let output = coordinator
        .set_mode(mode)?
        .context("nothing to render after load")?;
    print_output(&output);
    Ok(())
}

fn print_output(output: &RenderOutput) {
    println!(
        "=== {} — {} ({} days) ===",
        output.view.label, output.event.label, output.event.month_length_days
    );
    if !output.authoritative {
        println!("[approximate display: astronomical data unavailable]");
    }
    if output.mode == GridMode::Gregorian {
        println!("Mon    Tue    Wed    Thu    Fri    Sat    Sun");
    }
    for week in &output.view.weeks {
        let row: Vec<String> = week.iter().map(|c| format_cell(c.as_ref(), output.mode)).collect();
        println!("{}", row.join(" "));
    }
    print_annotations(output);
    println!(
        "map-overlay: lat={:.4} lon={:.4} label={:?} month_length_days={}",
        output.event.lat, output.event.lon, output.event.label, output.event.month_length_days
    );
}

fn format_cell(cell: Option<&DayCell>, mode: GridMode) -> String {
    let Some(cell) = cell else {
        return "      ".to_string();
    };
    let glyph = cell.glyph.map(|g| g.symbol()).unwrap_or(' ');
    match mode {
        GridMode::Custom => {
            let day = cell.custom.map(|c| c.day_number).unwrap_or(0);
            format!("{day:>4}{glyph} ")
        }
        GridMode::Gregorian => {
            use chrono::Datelike;
            match cell.custom {
                Some(overlay) => format!(
                    "{:>2}|{}.{:<2}",
                    cell.iso_date.day(),
                    overlay.month_index + 1,
                    overlay.day_number
                ),
                None => format!("{:>2}|    ", cell.iso_date.day()),
            }
        }
    }
}

/// One line per day that carries a tag or counter, below the grid.
fn print_annotations(output: &RenderOutput) {
    for cell in output.view.cells() {
        let mut parts: Vec<String> = Vec::new();
        if let Some(s) = cell.silver {
            parts.push(format!("silver {s}"));
        }
        if let Some(b) = cell.bronze {
            parts.push(format!("bronze {b}"));
        }
        parts.extend(cell.tags.iter().cloned());
        if !parts.is_empty() {
            println!("  {}: {}", cell.iso_date, parts.join(", "));
        }
    }
}

use colored::{ColoredString, Colorize};
use serde::Serialize;

use coursecat_core::layout::SKILL_SEGMENTS;
use coursecat_core::{Diagnostic, TileView};

use crate::cli::GlobalOptions;
use crate::state::{AppState, UiState};

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Format the skill-level indicator, e.g. `■■□`
pub fn format_skill_level(level: u8) -> String {
    (0..SKILL_SEGMENTS)
        .map(|segment| if segment < level { '■' } else { '□' })
        .collect()
}

/// Parse `#rgb` or `#rrggbb`
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn paint(text: &str, color: Option<&str>) -> ColoredString {
    match color.and_then(hex_to_rgb) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn format_tile(tile: &TileView) -> String {
    let indicators: Vec<String> = tile
        .indicators
        .iter()
        .map(|i| format!("{} {}", paint("●", i.color.as_deref()), i.class_id))
        .collect();

    let mut line = format!(
        "  {} {} {} {}",
        format_skill_level(tile.skill_level),
        tile.name.bold(),
        format!("[{}]", tile.module_id).dimmed(),
        format!("({})", tile.difficulty_class).italic()
    );
    if !indicators.is_empty() {
        line.push_str("  ");
        line.push_str(&indicators.join("  "));
    }
    if !tile.unit_labels.is_empty() {
        line.push_str(&format!("\n      {}", tile.unit_labels.join(" · ").dimmed()));
    }
    line
}

/// Print the filter buttons and the visible tiles of each category
pub fn print_catalog(state: &AppState) {
    let buttons: Vec<String> = state
        .view
        .buttons
        .iter()
        .map(|b| {
            let label = format!("{} ({})", b.label, b.class_id);
            if state.filters.required_class() == Some(b.class_id.as_str()) {
                format!("[{}]", paint(&label, b.color.as_deref()).bold())
            } else {
                paint(&label, b.color.as_deref()).to_string()
            }
        })
        .collect();
    if !buttons.is_empty() {
        println!("{} {}\n", "Filters:".bold(), buttons.join("  "));
    }

    for bucket in &state.view.buckets {
        let tiles: Vec<_> = bucket
            .tiles
            .iter()
            .filter(|t| t.is_visible(&state.filters))
            .collect();
        if tiles.is_empty() {
            continue;
        }

        println!("{}", format!("## {}", bucket.category.label()).bold().underline());
        for tile in tiles {
            println!("{}", format_tile(tile));
        }
        println!();
    }

    println!("{}", state.get_status_line().dimmed());
}

/// Print the module popup with its expanded sections
pub fn print_popup(ui_state: &UiState) {
    let Some(popup) = &ui_state.popup else {
        return;
    };

    println!("{}", format!("# {}", popup.title).bold());
    println!("{}\n", popup.description);

    for (index, section) in popup.sections.iter().enumerate() {
        let open = ui_state.is_section_open(index);
        let marker = if open { "[-]" } else { "[+]" };
        println!("{} {}. {}", marker.cyan(), index + 1, section.name.bold());
        if open {
            println!("      {}", section.details);
        }
    }
}

/// Print catalog diagnostics
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        println!("{}", "No problems found.".green());
        return;
    }

    println!("{}\n", format!("{} problem(s) found:", diagnostics.len()).yellow().bold());
    for (i, diagnostic) in diagnostics.iter().enumerate() {
        println!("  {}. {}", i + 1, diagnostic);
    }
}

use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::ManifestSoup;

/// Per-manifest resolution counts.
#[derive(Debug, Default, PartialEq)]
pub struct Counts {
    pub total: usize,
    pub sites: usize,
    pub languages: usize,
}

impl Counts {
    pub fn of(soup: &ManifestSoup) -> Self {
        Counts {
            total: soup.entries.len(),
            sites: soup.entries.iter().filter(|e| e.site.is_resolved()).count(),
            languages: soup
                .entries
                .iter()
                .filter(|e| e.languages.is_classified())
                .count(),
        }
    }
}

/// Print a colored summary of the written register.
pub fn render(register: &[ManifestSoup], output: &Path, verbose: bool, quiet: bool) {
    let totals = register.iter().map(Counts::of).fold(Counts::default(), |acc, c| Counts {
        total: acc.total + c.total,
        sites: acc.sites + c.sites,
        languages: acc.languages + c.languages,
    });

    if quiet {
        println!(
            "Manifests: {}  Dependencies: {}  Sites: {}  Languages: {}",
            register.len(),
            totals.total,
            totals.sites.to_string().green(),
            totals.languages.to_string().green(),
        );
        return;
    }

    println!("\n {} {}\n", "Register:".bold(), output.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Manifest").add_attribute(Attribute::Bold),
            Cell::new("Dependencies").add_attribute(Attribute::Bold),
            Cell::new("Sites resolved").add_attribute(Attribute::Bold),
            Cell::new("Languages classified").add_attribute(Attribute::Bold),
        ]);

    for soup in register {
        let counts = Counts::of(soup);
        table.add_row(vec![
            Cell::new(&soup.manifest),
            Cell::new(counts.total).set_alignment(CellAlignment::Right),
            ratio_cell(counts.sites, counts.total),
            ratio_cell(counts.languages, counts.total),
        ]);
    }

    println!("{}", table);

    if verbose {
        render_unresolved(register);
    }
}

fn ratio_cell(resolved: usize, total: usize) -> Cell {
    let color = if resolved == total {
        Color::Green
    } else if resolved == 0 {
        Color::Red
    } else {
        Color::Yellow
    };
    Cell::new(format!("{}/{}", resolved, total))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

fn render_unresolved(register: &[ManifestSoup]) {
    for soup in register {
        for entry in &soup.entries {
            let reasons = entry.unresolved();
            if reasons.is_empty() {
                continue;
            }
            let reasons: Vec<String> = reasons.iter().map(|r| r.to_string()).collect();
            println!(
                " {} {} {}@{}: {}",
                "[WARN]".yellow().bold(),
                soup.manifest,
                entry.name,
                entry.version,
                reasons.join("; ").dimmed()
            );
        }
    }
}

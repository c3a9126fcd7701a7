//! Palette preview table
//!
//! Printed with `--verbose` or `--dry-run`: all 29 roles with hex value,
//! LAB coordinates, and a true-color swatch cell.

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::formats::ColorFormat;
use crate::semantic::{Role, SemanticPalette};
use crate::theme::ThemeMode;

#[derive(Tabled)]
struct PaletteRow {
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Hex")]
    hex: String,
    #[tabled(rename = "LAB")]
    lab: String,
    #[tabled(rename = "Swatch")]
    swatch: String,
}

/// Render the palette as a console table
#[must_use]
pub fn palette_table(palette: &SemanticPalette, theme: ThemeMode) -> String {
    let rows: Vec<PaletteRow> = Role::all()
        .into_iter()
        .filter_map(|role| {
            let color = palette.get(role)?;
            let (r, g, b) = color.rgb();
            let lab = color.lab();
            Some(PaletteRow {
                role: role.name(),
                hex: ColorFormat::Hex6.format(&color),
                lab: format!("lab({:.1}, {:.1}, {:.1})", lab.l, lab.a, lab.b),
                swatch: "      ".on_truecolor(r, g, b).to_string(),
            })
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("theme: {theme:?}\n{table}")
}

/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::Unit;

const HEADER: [&str; 4] = ["Unit", "Description", "Represents", "Aliases"];

/// Render a table describing `units`, one row per unit, in the
/// given order.
pub fn generate_unit_summary(units: &[Unit]) -> String {
    let rows = units
        .iter()
        .filter(|unit| !unit.is_anonymous())
        .map(|unit| {
            let record = unit.record();
            [
                unit.to_string(),
                record.doc.unwrap_or_default(),
                record.represents,
                record.names[1..].join(", "),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADER.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "=".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, row: &[String; 4], widths: &[usize; 4]) {
    let line = row
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

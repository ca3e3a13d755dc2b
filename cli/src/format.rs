//! Output formatting utilities.

use crate::error::FormatError;

const COLUMN_GAP: &str = "  ";

/// Render resolved partitions as a plain-text table.
///
/// One column per team under a `Team 1 … Team N` header, one row per
/// option. Each cell lists the team's names separated by `", "`.
pub fn render_options<S: AsRef<str>>(options: &[Vec<Vec<S>>]) -> Result<String, FormatError> {
    let teams = options.first().map(Vec::len).unwrap_or(0);
    if teams == 0 {
        return Err(FormatError::Empty);
    }
    if let Some((index, option)) = options.iter().enumerate().find(|(_, o)| o.len() != teams) {
        return Err(FormatError::TeamCountMismatch {
            index,
            expected: teams,
            found: option.len(),
        });
    }

    let header: Vec<String> = (1..=teams).map(|t| format!("Team {}", t)).collect();
    let rows: Vec<Vec<String>> = options
        .iter()
        .map(|option| {
            option
                .iter()
                .map(|team| {
                    team.iter()
                        .map(|name| name.as_ref())
                        .collect::<Vec<&str>>()
                        .join(", ")
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..teams)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_line(&header, &widths));
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    lines.push(render_line(&rule, &widths));
    for row in &rows {
        lines.push(render_line(row, &widths));
    }

    Ok(lines.join("\n"))
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

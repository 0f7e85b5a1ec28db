const MIN_WIDTH: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned text table. Numeric cells are right-aligned, the rest
/// left-aligned; cells wider than their column end in `…`.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, looks_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest shrinkable column one step at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    loop {
        let total = widths.iter().sum::<usize>() + gaps;
        if total <= max_width {
            return;
        }

        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        match widest {
            Some(index) => widths[index] -= 1,
            None => return,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

/// Wrap an already padded cell in an ANSI color chosen from its content.
fn colorize(cell: &str, padded: String) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "add" | "valid" | "ok" | "true" => "32",
        "expiring_soon" | "upcoming" | "warning" => "33",
        "remove" | "expired" | "revoked" | "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn aligns_text_left_and_numbers_right() {
        let table = render_rows(
            &["name", "days"],
            &[row(&["a.example.com", "3"]), row(&["b.example.com", "-12"])],
            PLAIN,
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "name           days  ");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "a.example.com       3");
        assert_eq!(lines[3], "b.example.com     -12");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_rows(&["a", "b"], &[row(&["x"])], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.contains('-')));
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let long = "x".repeat(40);
        let table = render_rows(
            &["name", "status"],
            &[row(&[&long, "valid"])],
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let body = table.lines().nth(2).unwrap_or_default();
        assert!(body.chars().count() <= 30);
        assert!(body.contains('…'));
    }

    #[test]
    fn colors_known_states_only() {
        let colored = render_rows(
            &["action", "name"],
            &[row(&["REMOVE", "old.example.com"])],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let body = colored.lines().nth(2).unwrap_or_default();
        assert!(body.starts_with("\u{1b}[31mREMOVE"));
        assert!(body.contains("old.example.com"));
        assert!(!body.contains("\u{1b}[32m"));
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    let cell = format_cell(&truncated, *width, numeric);
                    if options.color {
                        colorize_status(&cell)
                    } else {
                        cell
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        // Shrink the widest column that still has slack.
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }
        let Some(idx) = candidate_idx else {
            break;
        };
        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    for ch in value.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Colorize document/company status words in an already-padded cell.
fn colorize_status(cell: &str) -> String {
    let trimmed = cell.trim();
    let lower = trimmed.to_ascii_lowercase();
    let code = if matches!(lower.as_str(), "valid" | "true" | "active" | "authenticated" | "master")
    {
        Some("32")
    } else if matches!(lower.as_str(), "warning" | "pending" | "viewer") {
        Some("33")
    } else if matches!(lower.as_str(), "expired" | "false" | "inactive" | "denied") {
        Some("31")
    } else {
        None
    };

    match code {
        Some(code) => cell.replace(trimmed, &format!("\u{1b}[{code}m{trimmed}\u{1b}[0m")),
        None => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_aligned_headers_and_rows() {
        let rendered = render_entity_table(
            &["id", "status"],
            &[
                vec!["doc-1".into(), "valid".into()],
                vec!["doc-2".into(), "expired".into()],
            ],
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[2].contains("doc-1"));
    }

    #[test]
    fn numeric_cells_right_align() {
        let rendered = render_entity_table(
            &["name", "docs"],
            &[vec!["Matriz".into(), "12".into()]],
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let row = rendered.lines().last().unwrap();
        assert!(row.ends_with("12"), "numbers pad on the left: {row:?}");
    }

    #[test]
    fn long_values_truncate_with_ellipsis() {
        let rendered = render_entity_table(
            &["name"],
            &[vec!["Empresa com razão social muito comprida LTDA".into()]],
            TableOptions {
                max_width: Some(16),
                color: false,
            },
        );
        assert!(rendered.contains('…'));
    }

    #[test]
    fn missing_cells_render_placeholder() {
        let rendered = render_entity_table(
            &["id", "title"],
            &[vec!["doc-1".into()]],
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        assert!(rendered.lines().last().unwrap().contains('-'));
    }

    #[test]
    fn status_words_colorize_when_enabled() {
        let rendered = render_entity_table(
            &["status"],
            &[vec!["expired".into()]],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(rendered.contains("\u{1b}[31m"));
    }
}

//! Box-drawing helpers shared by the media blocks

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `width` columns (with an ellipsis) and pad with spaces
pub fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{}{}", text, " ".repeat(pad));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Hard-wrap `text` into chunks of at most `width` columns
///
/// Used for tokens such as URLs that have no spaces to break at.
pub fn wrap_columns(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += w;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// A bordered box `width` columns wide holding the given content rows
///
/// Rows are truncated to fit; `height` counts the borders and extra rows
/// are blank.
pub fn boxed(
    rows: &[(String, Style)],
    width: u16,
    height: u16,
    border: Style,
) -> Vec<Line<'static>> {
    let width = width.max(4) as usize;
    let height = height.max(2) as usize;
    let inner = width - 4;

    let mut lines = Vec::with_capacity(height);
    lines.push(Line::from(Span::styled(
        format!("┌{}┐", "─".repeat(width - 2)),
        border,
    )));
    for i in 0..height - 2 {
        let (text, style) = rows
            .get(i)
            .map(|(t, s)| (t.as_str(), *s))
            .unwrap_or(("", Style::default()));
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(fit(text, inner), style),
            Span::styled(" │", border),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(width - 2)),
        border,
    )));
    lines
}

/// Place equally wide columns of lines side by side with a gap
pub fn side_by_side(columns: Vec<Vec<Line<'static>>>, widths: &[u16], gap: u16) -> Vec<Line<'static>> {
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(rows);

    for row in 0..rows {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(gap as usize)));
            }
            let width = widths.get(i).copied().unwrap_or(0) as usize;
            match column.get(row) {
                Some(line) => {
                    let used = line.width();
                    spans.extend(line.spans.iter().cloned());
                    if used < width {
                        spans.push(Span::raw(" ".repeat(width - used)));
                    }
                }
                None => spans.push(Span::raw(" ".repeat(width))),
            }
        }
        out.push(Line::from(spans));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("anything", 0), "");
    }

    #[test]
    fn test_wrap_columns_keeps_every_character() {
        assert_eq!(wrap_columns("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap_columns("ab", 5), vec!["ab"]);
        assert!(wrap_columns("", 5).is_empty());
        assert_eq!(wrap_columns("界界界", 4), vec!["界界", "界"]);
    }

    #[test]
    fn test_boxed_dimensions() {
        let lines = boxed(&[("hello".to_string(), Style::default())], 10, 4, Style::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            text,
            vec!["┌────────┐", "│ hello  │", "│        │", "└────────┘"]
        );
    }

    #[test]
    fn test_side_by_side_pads_short_columns() {
        let left = vec![Line::raw("ab"), Line::raw("cd")];
        let right = vec![Line::raw("x")];
        let joined = side_by_side(vec![left, right], &[3, 2], 1);
        let text: Vec<String> = joined.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["ab  x ", "cd    "]);
    }
}

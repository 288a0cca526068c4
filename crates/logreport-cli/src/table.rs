//! Grid table rendering for report output.
//!
//! ```text
//! +------------+------------------+-------------------------+
//! | Endpoint   |   Requests Count |   Average Response Time |
//! +============+==================+=========================+
//! | /api/users |                2 |                   1.500 |
//! +------------+------------------+-------------------------+
//! ```

use console::{Alignment, measure_text_width, pad_str};
use logreport_core::report::SummaryRow;

/// Extra room given to every header so titles never touch the border.
const HEADER_PADDING: usize = 2;

/// Render headers and rows as a bordered grid.
///
/// Columns whose every value is numeric are right-aligned, header
/// included; all other columns are left-aligned. No trailing newline.
pub fn render_grid(headers: &[String], rows: &[SummaryRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|text| measure_text_width(text))
                .fold(measure_text_width(header) + HEADER_PADDING, usize::max)
        })
        .collect();

    let alignments: Vec<Alignment> = (0..headers.len())
        .map(|col| {
            let numeric = !rows.is_empty()
                && rows
                    .iter()
                    .all(|row| row.get(col).is_some_and(|cell| cell.is_numeric()));
            if numeric {
                Alignment::Right
            } else {
                Alignment::Left
            }
        })
        .collect();

    let mut lines = vec![border(&widths, '-'), line(headers, &widths, &alignments)];
    lines.push(border(&widths, '='));

    for row in &cells {
        lines.push(line(row, &widths, &alignments));
        lines.push(border(&widths, '-'));
    }

    lines.join("\n")
}

fn border(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("+{}+", segments.join("+"))
}

fn line(values: &[String], widths: &[usize], alignments: &[Alignment]) -> String {
    let padded: Vec<String> = values
        .iter()
        .zip(widths.iter().zip(alignments))
        .map(|(value, (width, align))| pad_str(value, *width, *align, None).into_owned())
        .collect();
    format!("| {} |", padded.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logreport_core::report::Cell;

    fn headers() -> Vec<String> {
        vec!["Endpoint".to_string(), "Requests Count".to_string()]
    }

    #[test]
    fn test_render_rows() {
        let rows = vec![
            vec![Cell::from("/api/users"), Cell::from(12u64)],
            vec![Cell::from("/"), Cell::from(3u64)],
        ];

        let rendered = render_grid(&headers(), &rows);

        let expected = "\
+------------+------------------+
| Endpoint   |   Requests Count |
+============+==================+
| /api/users |               12 |
+------------+------------------+
| /          |                3 |
+------------+------------------+";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_headers_only() {
        let rendered = render_grid(&headers(), &[]);

        let expected = "\
+------------+------------------+
| Endpoint   | Requests Count   |
+============+==================+";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_decimal_strings_are_right_aligned() {
        let headers = vec!["Average".to_string()];
        let rows = vec![vec![Cell::from("1.500")], vec![Cell::from("12.250")]];

        let rendered = render_grid(&headers, &rows);

        assert!(rendered.contains("|     1.500 |"));
        assert!(rendered.contains("|    12.250 |"));
    }
}

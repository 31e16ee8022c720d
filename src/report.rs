use crate::config::{MIN_COUNT_WIDTH, MIN_TERM_WIDTH};
use crate::text::frequency::FrequencyTable;

/// Render the title, a blank line, then one `term count` row per entry.
///
/// Rows go by descending count, ties in first-seen order. Column widths fit
/// the rendered rows, never narrower than the minimums.
pub fn format(title: Option<&str>, table: &FrequencyTable, limit: Option<usize>) -> Vec<String> {
    let rows = table.most_common(limit);

    let term_width = rows
        .iter()
        .map(|(term, _)| term.chars().count())
        .fold(MIN_TERM_WIDTH, usize::max);
    let count_width = rows
        .iter()
        .map(|(_, count)| count.to_string().len())
        .fold(MIN_COUNT_WIDTH, usize::max);

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(title.unwrap_or_default().to_string());
    out.push(String::new());
    for (term, count) in rows {
        out.push(format!("{:<tw$} {:>cw$}", term, count, tw = term_width, cw = count_width));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, usize)]) -> FrequencyTable {
        let mut t = FrequencyTable::new();
        for (term, count) in entries {
            t.add(term, *count);
        }
        t
    }

    #[test]
    fn minimum_widths() {
        let lines = format(Some("hey"), &table(&[("hamburger", 3), ("bun", 1)]), None);
        assert_eq!(
            lines,
            vec![
                "hey".to_string(),
                String::new(),
                "hamburger       3".to_string(),
                "bun             1".to_string(),
            ]
        );
    }

    #[test]
    fn widths_grow_to_fit() {
        let lines = format(
            Some("t"),
            &table(&[("internationalization", 12345), ("a", 2)]),
            None,
        );
        assert_eq!(lines[2], "internationalization 12345");
        assert_eq!(lines[3], "a                        2");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let lines = format(Some("t"), &table(&[("pear", 1), ("apple", 2), ("fig", 1), ("kiwi", 2)]), None);
        let terms: Vec<&str> = lines[2..].iter().map(|l| l.split_whitespace().next().unwrap()).collect();
        assert_eq!(terms, vec!["apple", "kiwi", "pear", "fig"]);
    }

    #[test]
    fn limit_applies_before_widths() {
        let lines = format(
            Some("t"),
            &table(&[("short", 5), ("extraordinarily", 1)]),
            Some(1),
        );
        assert_eq!(lines, vec!["t".to_string(), String::new(), "short           5".to_string()]);
    }

    #[test]
    fn empty_table_and_missing_title() {
        assert_eq!(format(None, &FrequencyTable::new(), None), vec![String::new(), String::new()]);
    }
}

// ABOUTME: HTML table extraction for article pages.
// ABOUTME: Fetches a page and returns the cleaned text of every table; failures degrade to an empty result.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::Error;

/// Fetches a page and extracts the text of every HTML table on it.
///
/// Issues a single GET with the fixed user-agent, bounded by `timeout`.
/// Returns the tables in document order, each with blank lines removed
/// and a trailing newline appended.
///
/// Any failure (network error, timeout, non-success status, parse
/// trouble) yields an empty vector so the hosting UI can continue
/// showing the article without its tables. This is the opposite policy
/// from the manifest fetcher, which propagates.
pub fn fetch_tables(url: &str, timeout: Duration) -> Vec<String> {
    match try_fetch_tables(url, timeout) {
        Ok(tables) => tables,
        Err(err) => {
            tracing::debug!(url, error = %err, "table extraction failed, continuing without tables");
            Vec::new()
        }
    }
}

fn try_fetch_tables(url: &str, timeout: Duration) -> Result<Vec<String>, Error> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(crate::USER_AGENT)
        .timeout(timeout)
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(tables_from_html(&body))
}

/// Extracts the visible text of every `<table>` element in a document.
///
/// Each entry is the concatenated text of one table with blank lines
/// stripped and a single trailing newline. Entries appear in document
/// order.
pub fn tables_from_html(html: &str) -> Vec<String> {
    let selector = match Selector::parse("table") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let doc = Html::parse_document(html);
    doc.select(&selector)
        .map(|table| {
            let text: String = table.text().collect();
            let mut cleaned = remove_blank_lines(&text);
            cleaned.push('\n');
            cleaned
        })
        .collect()
}

/// Drops every line that is empty after trimming whitespace.
pub fn remove_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn remove_blank_lines_drops_whitespace_only_lines() {
        assert_eq!(remove_blank_lines("a\n\n  \nb\n\t\nc"), "a\nb\nc");
    }

    #[test]
    fn remove_blank_lines_keeps_plain_text() {
        assert_eq!(remove_blank_lines("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn remove_blank_lines_empty_input() {
        assert_eq!(remove_blank_lines(""), "");
    }

    #[test]
    fn extracts_tables_in_document_order() {
        let html = r#"<html><body>
            <table><tr><td>first</td></tr></table>
            <p>between</p>
            <table><tr><td>second</td></tr></table>
        </body></html>"#;

        let tables = tables_from_html(html);
        assert_eq!(tables.len(), 2);
        assert!(tables[0].contains("first"));
        assert!(tables[1].contains("second"));
    }

    #[test]
    fn entries_contain_no_blank_lines_and_end_with_newline() {
        let html = "<table><tr><td>a\n\n\nb</td></tr>\n\n<tr><td>c</td></tr></table>";
        let tables = tables_from_html(html);
        assert_eq!(tables.len(), 1);

        let entry = &tables[0];
        assert!(entry.ends_with('\n'));
        assert!(entry
            .trim_end_matches('\n')
            .split('\n')
            .all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn page_without_tables_yields_empty() {
        assert!(tables_from_html("<html><body><p>text</p></body></html>").is_empty());
    }

    #[test]
    fn nested_table_text_is_included_in_outer_entry() {
        let html = "<table><tr><td>outer<table><tr><td>inner</td></tr></table></td></tr></table>";
        let tables = tables_from_html(html);
        // the nested table is also matched on its own
        assert_eq!(tables.len(), 2);
        assert!(tables[0].contains("outer"));
        assert!(tables[0].contains("inner"));
        assert!(tables[1].contains("inner"));
    }
}

use chrono::NaiveDate;

/// Formats a `"YYYY-MM"` value as `"Mon YYYY"`.
///
/// Empty input yields an empty string. Input that does not parse is returned
/// unchanged; the renderer does not validate dates.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    // Full ISO dates ("2023-05-14") carry the month in the same prefix.
    let month = value.get(..7).unwrap_or(value);
    match NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// `"<start> - Present"` for ongoing entries, `"<start> - <end>"` otherwise.
/// A missing end date renders the start alone.
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_date(start);
    if current {
        return format!("{start} - Present");
    }
    let end = format_date(end);
    if end.is_empty() {
        start
    } else {
        format!("{start} - {end}")
    }
}

/// Escapes text for insertion into HTML element content or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_year_month() {
        assert_eq!(format_date("2023-05"), "May 2023");
        assert_eq!(format_date("1999-12"), "Dec 1999");
    }

    #[test]
    fn test_format_date_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
    }

    #[test]
    fn test_format_date_full_iso_date() {
        assert_eq!(format_date("2021-01-31"), "Jan 2021");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("sometime"), "sometime");
        assert_eq!(format_date("2023-13"), "2023-13");
    }

    #[test]
    fn test_range_current_ignores_end() {
        assert_eq!(format_date_range("2020-03", "2022-01", true), "Mar 2020 - Present");
    }

    #[test]
    fn test_range_closed_and_open() {
        assert_eq!(format_date_range("2018-09", "2020-06", false), "Sep 2018 - Jun 2020");
        assert_eq!(format_date_range("2018-09", "", false), "Sep 2018");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}

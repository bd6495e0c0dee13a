//! Minimal RFC 4180 CSV writer for admin exports.

use std::borrow::Cow;

const LINE_END: &str = "\r\n";

/// Quote a field when it contains a separator, a quote or a line break.
/// Embedded quotes are doubled.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Flatten a list field into one cell
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

pub struct CsvWriter {
    out: String,
    columns: usize,
}

impl CsvWriter {
    pub fn new(headers: &[&str]) -> Self {
        let mut writer = Self {
            out: String::new(),
            columns: headers.len(),
        };
        writer.push_line(headers.iter().copied());
        writer
    }

    /// Append a row; missing trailing cells are left empty
    pub fn write_row<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: Vec<String> = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect();
        if cells.len() < self.columns {
            cells.resize(self.columns, String::new());
        }
        self.push_line(cells.iter().map(String::as_str));
    }

    fn push_line<'a>(&mut self, fields: impl Iterator<Item = &'a str>) {
        let line: Vec<Cow<'a, str>> = fields.map(escape_field).collect();
        self.out.push_str(&line.join(","));
        self.out.push_str(LINE_END);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_is_untouched() {
        assert_eq!(escape_field("Gent"), "Gent");
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(escape_field(r#"Badkamer "luxe""#), r#""Badkamer ""luxe""""#);
    }

    #[test]
    fn test_comma_and_newline_are_quoted() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_writer_output() {
        let mut writer = CsvWriter::new(&["ref", "services"]);
        writer.write_row(["OFF-2026-0001", &join_list(&["Dakwerken".to_string(), "Isolatie".to_string()])]);
        writer.write_row(["OFF-2026-0002"]);

        assert_eq!(
            writer.finish(),
            "ref,services\r\nOFF-2026-0001,\"Dakwerken, Isolatie\"\r\nOFF-2026-0002,\r\n"
        );
    }
}

//! Field splitting for the delimited sheet format.
//!
//! A small state machine rather than a full CSV dependency: the sheet is a
//! fixed 11-column export and this is the only place the format is read.

use wuqumo_core::error::{Result, WuqumoError};

/// Splits raw sheet text into records.
///
/// Returns `(line, fields)` pairs where `line` is the 1-based source line
/// the record starts on. Handles quoted fields (`"a,b"`), escaped quotes
/// (`""`), CRLF and LF line endings, and a final record with or without a
/// trailing newline. Blank lines are skipped and do not produce a record.
pub fn split_records(input: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            // CR is only meaningful as part of CRLF; the LF branch ends the record.
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                line += 1;
                record.push(std::mem::take(&mut field));
                flush_record(&mut records, &mut record, record_line);
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(WuqumoError::UnterminatedQuote { line: record_line });
    }

    // Final record when the file lacks a trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        flush_record(&mut records, &mut record, record_line);
    }

    Ok(records)
}

fn flush_record(records: &mut Vec<(usize, Vec<String>)>, record: &mut Vec<String>, line: usize) {
    // A lone empty field is a blank line, not a record.
    if record.len() == 1 && record[0].is_empty() {
        record.clear();
        return;
    }
    records.push((line, std::mem::take(record)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rows() {
        let records = split_records("a,b,c\nd,e,f\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], (1, vec!["a".into(), "b".into(), "c".into()]));
        assert_eq!(records[1], (2, vec!["d".into(), "e".into(), "f".into()]));
    }

    #[test]
    fn test_no_trailing_newline() {
        let records = split_records("a,b\nc,d").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].1, vec!["c".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_crlf_endings() {
        let records = split_records("a,b\r\nc,d\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].1, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(records[1].0, 2);
    }

    #[test]
    fn test_quoted_comma_and_newline() {
        let records = split_records("\"a,b\",c\n").unwrap();
        assert_eq!(records[0].1, vec!["a,b".to_string(), "c".to_string()]);

        let records = split_records("\"two\nlines\",x\nnext,y\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].1[0], "two\nlines");
        // The embedded newline still advances the line counter.
        assert_eq!(records[1].0, 3);
    }

    #[test]
    fn test_escaped_quote() {
        let records = split_records("\"say \"\"hi\"\"\",b\n").unwrap();
        assert_eq!(records[0].1[0], "say \"hi\"");
    }

    #[test]
    fn test_empty_fields() {
        let records = split_records("a,,c\n,,\n").unwrap();
        assert_eq!(records[0].1, vec!["a".to_string(), String::new(), "c".into()]);
        assert_eq!(records[1].1, vec![String::new(); 3]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let records = split_records("a,b\n\nc,d\n\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].0, 3);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = split_records("a,\"oops\n").unwrap_err();
        assert!(matches!(err, WuqumoError::UnterminatedQuote { line: 1 }));
    }

    #[test]
    fn test_empty_input() {
        assert!(split_records("").unwrap().is_empty());
        assert!(split_records("\n\n").unwrap().is_empty());
    }
}

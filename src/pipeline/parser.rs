use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::SourceFormat;

use super::BatchError;

static CSV_FIELD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|([^,]+)"#).expect("valid csv field regex"));

pub fn parse_messages(content: &str, format: SourceFormat) -> Result<Vec<String>, BatchError> {
    let lines: Vec<&str> = content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let messages: Vec<String> = match format {
        SourceFormat::Txt => lines.into_iter().map(str::to_string).collect(),
        SourceFormat::Csv => {
            let skip = usize::from(lines.first().is_some_and(|line| is_header(line)));
            lines
                .into_iter()
                .skip(skip)
                .map(extract_csv_message)
                .filter(|message| !message.is_empty())
                .collect()
        }
    };

    if messages.is_empty() {
        return Err(BatchError::EmptyInput);
    }
    Ok(messages)
}

fn is_header(line: &str) -> bool {
    line.to_lowercase().contains("message")
}

fn extract_csv_message(line: &str) -> String {
    match CSV_FIELD_REGEX.captures(line) {
        Some(caps) => caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        None => line.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_keeps_every_non_empty_line_in_order() {
        let content = "  first  \n\nsecond\r\n   \n third\n";
        let messages = parse_messages(content, SourceFormat::Txt).unwrap();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn txt_does_not_treat_message_line_as_header() {
        let content = "message one\nmessage two";
        let messages = parse_messages(content, SourceFormat::Txt).unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn csv_header_is_skipped_case_insensitively() {
        let content = "Category,MESSAGE\nham,See you at 5pm\nspam,Win cash\n";
        let messages = parse_messages(content, SourceFormat::Csv).unwrap();
        assert_eq!(messages, vec!["ham", "spam"]);
    }

    #[test]
    fn csv_without_header_keeps_all_lines() {
        let content = "hello there,ham\nclaim your prize,spam\n";
        let messages = parse_messages(content, SourceFormat::Csv).unwrap();
        assert_eq!(messages, vec!["hello there", "claim your prize"]);
    }

    #[test]
    fn csv_prefers_leading_quoted_field() {
        let content = "message,label\n\"Free entry, win now\",spam\n\" spaced \",ham\n";
        let messages = parse_messages(content, SourceFormat::Csv).unwrap();
        assert_eq!(messages, vec!["Free entry, win now", "spaced"]);
    }

    #[test]
    fn csv_line_starting_with_comma_uses_next_field() {
        let messages = parse_messages(",\"quoted later\"", SourceFormat::Csv).unwrap();
        assert_eq!(messages, vec!["quoted later"]);
    }

    #[test]
    fn csv_lines_yielding_nothing_are_dropped() {
        let content = "\"\",spam\nreal message,ham\n";
        let messages = parse_messages(content, SourceFormat::Csv).unwrap();
        assert_eq!(messages, vec!["real message"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            parse_messages("\n   \n", SourceFormat::Txt),
            Err(BatchError::EmptyInput)
        ));
        assert!(matches!(
            parse_messages("message\n", SourceFormat::Csv),
            Err(BatchError::EmptyInput)
        ));
    }
}

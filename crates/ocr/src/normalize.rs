use std::collections::HashSet;

re!(re_whitespace, r"\s+");

/// Single-line form of the transcript used for classification: everything
/// outside printable ASCII (newline excepted) is dropped, then all whitespace
/// runs collapse to one space.
pub fn clean_text(raw: &str) -> String {
    let printable: String = raw
        .chars()
        .filter(|c| matches!(c, '\x20'..='\x7E' | '\n'))
        .collect();
    re_whitespace().replace_all(&printable, " ").trim().to_string()
}

/// Trimmed, distinct lines longer than one character, in first-seen order.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split('\n')
        .map(str::trim)
        .filter(|l| l.chars().count() > 1)
        .filter(|l| seen.insert(*l))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_strips_non_ascii_and_collapses_whitespace() {
        let raw = "  भारत सरकार\nGOVERNMENT   OF INDIA\n\n1234 5678\u{7f}9012  ";
        assert_eq!(clean_text(raw), "GOVERNMENT OF INDIA 1234 56789012");
    }

    #[test]
    fn clean_text_drops_tabs_rather_than_spacing_them() {
        assert_eq!(clean_text("INCOME\tTAX"), "INCOMETAX");
    }

    #[test]
    fn clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("\n\n  \n"), "");
    }

    #[test]
    fn normalize_lines_dedups_and_preserves_order() {
        let raw = "RAM KUMAR\n  DL1234567890 \nRAM KUMAR\nx\n\nS/D/W OF SHYAM";
        assert_eq!(
            normalize_lines(raw),
            vec!["RAM KUMAR", "DL1234567890", "S/D/W OF SHYAM"]
        );
    }

    #[test]
    fn normalize_lines_dedup_is_case_sensitive() {
        assert_eq!(normalize_lines("Name\nNAME\nName"), vec!["Name", "NAME"]);
    }

    #[test]
    fn normalize_lines_empty_input() {
        assert!(normalize_lines("").is_empty());
    }

    #[test]
    fn normalize_lines_counts_characters_not_bytes() {
        // Single multi-byte character is still one character.
        assert!(normalize_lines("é\nक").is_empty());
        assert_eq!(normalize_lines("नाम"), vec!["नाम"]);
    }

    #[test]
    fn normalize_lines_never_yields_duplicates_or_short_lines() {
        let samples = [
            "a\nbb\nbb\n ccc \nccc\n\n\n d",
            "INCOME TAX\r\nINCOME TAX\n12\n1",
            "\u{0}\u{0}\n  \n--\n--",
        ];
        for raw in samples {
            let lines = normalize_lines(raw);
            let unique: HashSet<_> = lines.iter().collect();
            assert_eq!(unique.len(), lines.len(), "duplicates in {lines:?}");
            assert!(lines.iter().all(|l| l.chars().count() > 1));
        }
    }
}

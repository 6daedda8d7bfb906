//! Day/section parser for generated itinerary text.
//!
//! The model's output carries loose structural conventions, not a grammar:
//! day headers ("Day", digits, ":"), bold-delimited section labels, and
//! `* Morning:`-style activity lines. The parser is a line scanner over
//! those conventions and never fails — it only degrades to coarser blocks.

use serde::Serialize;

/// One itinerary day: the header line and the raw body lines under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBlock {
    pub title: String,
    pub body: Vec<String>,
}

/// A labeled out-of-band block discovered inside a day's body, e.g. `**Tips**`.
/// Rendered after all days, in first-encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub label: String,
    pub lines: Vec<String>,
}

/// True if the line (after leading whitespace) is a day header:
/// "Day", optional whitespace, one or more digits, then ":". Case-sensitive.
pub fn is_day_header(line: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix("Day") else {
        return false;
    };
    let rest = rest.trim_start();
    let after_digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    after_digits.len() < rest.len() && after_digits.starts_with(':')
}

/// Splits itinerary text into day blocks on header lines.
///
/// Lossless: if no header is found the whole (trimmed) text becomes one
/// synthetic "Day 1:" block, and any lines the model emitted before the
/// first header stay attached to the first block's body.
pub fn split_into_days(text: &str) -> Vec<DayBlock> {
    let mut blocks: Vec<DayBlock> = Vec::new();
    let mut preamble: Vec<String> = Vec::new();

    for line in text.lines() {
        if is_day_header(line) {
            blocks.push(DayBlock {
                title: line.trim().to_string(),
                body: Vec::new(),
            });
        } else if let Some(current) = blocks.last_mut() {
            current.body.push(line.to_string());
        } else {
            preamble.push(line.to_string());
        }
    }

    if blocks.is_empty() {
        return vec![DayBlock {
            title: "Day 1:".to_string(),
            body: text.trim().lines().map(str::to_string).collect(),
        }];
    }

    if !preamble.is_empty() {
        let first = &mut blocks[0];
        preamble.append(&mut first.body);
        first.body = preamble;
    }

    blocks
}

/// Line-scanner state: either collecting main lines or buffering an open section.
enum ScanState {
    ScanningMain,
    InSection(Section),
}

/// Partitions a day's body into main lines and labeled sections.
///
/// A header line, after trimming, both starts and ends with the `**`
/// delimiter. Everything after a header belongs to that section until the
/// next header or end of input; the open section is always flushed. No line
/// is dropped or duplicated.
pub fn split_sections(body: &[String]) -> (Vec<String>, Vec<Section>) {
    let mut main_lines: Vec<String> = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut state = ScanState::ScanningMain;

    for line in body {
        if let Some(label) = section_label(line) {
            if let ScanState::InSection(open) =
                std::mem::replace(&mut state, ScanState::ScanningMain)
            {
                sections.push(open);
            }
            state = ScanState::InSection(Section {
                label,
                lines: Vec::new(),
            });
        } else {
            match &mut state {
                ScanState::ScanningMain => main_lines.push(line.clone()),
                ScanState::InSection(open) => open.lines.push(line.clone()),
            }
        }
    }

    if let ScanState::InSection(open) = state {
        sections.push(open);
    }

    (main_lines, sections)
}

/// Some(label) if the trimmed line is a section header — starts and ends with
/// `**` and is more than the bare delimiter. The label is the text with the
/// delimiters and surrounding whitespace stripped.
fn section_label(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.len() >= 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        Some(trimmed.trim_matches('*').trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    // ── is_day_header ───────────────────────────────────────────────────────

    #[test]
    fn test_day_header_detection() {
        assert!(is_day_header("Day 1: Arrival"));
        assert!(is_day_header("Day 12:"));
        assert!(is_day_header("Day1: compact"));
        assert!(is_day_header("  Day 2: indented"));
    }

    #[test]
    fn test_day_header_rejects_non_headers() {
        assert!(!is_day_header("day 1: lowercase"));
        assert!(!is_day_header("Day one: spelled out"));
        assert!(!is_day_header("Daylight 2: not a day"));
        assert!(!is_day_header("Day 1 - no colon"));
        assert!(!is_day_header(""));
    }

    // ── split_into_days ─────────────────────────────────────────────────────

    #[test]
    fn test_split_into_days_two_headers() {
        let blocks = split_into_days("Day 1: Intro\nfoo\nDay 2: More\nbar");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].title, "Day 1: Intro");
        assert_eq!(blocks[0].body, lines(&["foo"]));
        assert_eq!(blocks[1].title, "Day 2: More");
        assert_eq!(blocks[1].body, lines(&["bar"]));
    }

    #[test]
    fn test_split_into_days_no_headers_wraps_synthetically() {
        let blocks = split_into_days("Just relax.");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Day 1:");
        assert_eq!(blocks[0].body, lines(&["Just relax."]));
    }

    #[test]
    fn test_split_into_days_keeps_preamble_lines() {
        let blocks = split_into_days("Here is your plan:\nDay 1: Go\nsee things");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Day 1: Go");
        assert_eq!(blocks[0].body, lines(&["Here is your plan:", "see things"]));
    }

    #[test]
    fn test_split_into_days_empty_input() {
        let blocks = split_into_days("");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Day 1:");
        assert!(blocks[0].body.is_empty());
    }

    #[test]
    fn test_split_into_days_is_lossless() {
        let text = "intro\nDay 1: A\nx\ny\nDay 2: B\nz";
        let blocks = split_into_days(text);
        let total_body: usize = blocks.iter().map(|b| b.body.len()).sum();
        // 4 non-header lines, plus 2 header lines carried as titles.
        assert_eq!(total_body + blocks.len(), text.lines().count());
    }

    // ── split_sections ──────────────────────────────────────────────────────

    #[test]
    fn test_split_sections_basic() {
        let body = lines(&["a", "**Tips**", "b", "c"]);
        let (main_lines, sections) = split_sections(&body);
        assert_eq!(main_lines, lines(&["a"]));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "Tips");
        assert_eq!(sections[0].lines, lines(&["b", "c"]));
    }

    #[test]
    fn test_split_sections_flushes_on_new_header() {
        let body = lines(&["**Tips**", "b", "**Etiquette**", "c"]);
        let (main_lines, sections) = split_sections(&body);
        assert!(main_lines.is_empty());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, "Tips");
        assert_eq!(sections[0].lines, lines(&["b"]));
        assert_eq!(sections[1].label, "Etiquette");
        assert_eq!(sections[1].lines, lines(&["c"]));
    }

    #[test]
    fn test_split_sections_no_headers_all_main() {
        let body = lines(&["a", "b"]);
        let (main_lines, sections) = split_sections(&body);
        assert_eq!(main_lines, body);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_split_sections_is_lossless() {
        let body = lines(&["a", "", "**Tips**", "b", "**More**", "c", "d"]);
        let (main_lines, sections) = split_sections(&body);

        let header_count = 2;
        let kept: usize = main_lines.len() + sections.iter().map(|s| s.lines.len()).sum::<usize>();
        assert_eq!(kept + header_count, body.len());
        assert_eq!(main_lines, lines(&["a", ""]));
        assert_eq!(sections[1].lines, lines(&["c", "d"]));
    }

    #[test]
    fn test_section_label_strips_delimiters_and_whitespace() {
        assert_eq!(section_label("  **Local Tips**  "), Some("Local Tips".to_string()));
        assert_eq!(section_label("** Spaced **"), Some("Spaced".to_string()));
        assert_eq!(section_label("**not closed"), None);
        assert_eq!(section_label("plain line"), None);
        assert_eq!(section_label("**"), None);
    }
}

//! Display-card assembly for the plan response.
//!
//! Two-pass rendering order, deliberately: every day card first (title plus
//! its formatted main lines, in document order), then all pooled sections
//! from every day, in first-encounter order. Sections are grouped at the end
//! of the view even though they sit inside days in the source text.

use serde::Serialize;

use crate::itinerary::parser::{split_into_days, split_sections};

/// Recognized activity-line prefixes and the icon+label they render as.
const ACTIVITY_LABELS: [(&str, &str); 4] = [
    ("* Morning:", "🌅 Morning"),
    ("* Afternoon:", "🏙️ Afternoon"),
    ("* Lunch:", "🍽️ Lunch"),
    ("* Evening:", "🌆 Evening"),
];

/// A self-contained day card: header line plus display-ready body lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCard {
    pub title: String,
    pub lines: Vec<String>,
}

/// A pooled section card, rendered after all day cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionCard {
    pub label: String,
    pub lines: Vec<String>,
}

/// Formats one main line for display. Recognized activity lines get their
/// icon+label prefix; any other non-blank line is emphasized verbatim; blank
/// lines yield `None` (no empty paragraph is emitted).
pub fn format_main_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    for (prefix, label) in ACTIVITY_LABELS {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return Some(format!("**{label} {}**", rest.trim()));
        }
    }

    Some(format!("**{trimmed}**"))
}

/// Parses the final itinerary text into day cards and pooled section cards.
pub fn build_cards(text: &str) -> (Vec<DayCard>, Vec<SectionCard>) {
    let mut days: Vec<DayCard> = Vec::new();
    let mut sections: Vec<SectionCard> = Vec::new();

    for block in split_into_days(text) {
        let (main_lines, day_sections) = split_sections(&block.body);

        days.push(DayCard {
            title: block.title,
            lines: main_lines.iter().filter_map(|l| format_main_line(l)).collect(),
        });

        for section in day_sections {
            sections.push(SectionCard {
                label: section.label,
                lines: section
                    .lines
                    .iter()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .map(|l| format!("**{l}**"))
                    .collect(),
            });
        }
    }

    (days, sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_main_line ────────────────────────────────────────────────────

    #[test]
    fn test_format_main_line_activity_labels() {
        assert_eq!(
            format_main_line("* Morning: Walk the gardens"),
            Some("**🌅 Morning Walk the gardens**".to_string())
        );
        assert_eq!(
            format_main_line("* Lunch: Ramen at the market"),
            Some("**🍽️ Lunch Ramen at the market**".to_string())
        );
        assert_eq!(
            format_main_line("  * Evening: River cruise"),
            Some("**🌆 Evening River cruise**".to_string())
        );
        assert_eq!(
            format_main_line("* Afternoon: Museum"),
            Some("**🏙️ Afternoon Museum**".to_string())
        );
    }

    #[test]
    fn test_format_main_line_passthrough_is_emphasized() {
        assert_eq!(
            format_main_line("A gentle start to the trip"),
            Some("**A gentle start to the trip**".to_string())
        );
    }

    #[test]
    fn test_format_main_line_skips_blank_lines() {
        assert_eq!(format_main_line(""), None);
        assert_eq!(format_main_line("   "), None);
    }

    // ── build_cards ─────────────────────────────────────────────────────────

    #[test]
    fn test_build_cards_days_then_pooled_sections() {
        let text = "Day 1: Arrive\n* Morning: Settle in\n**Tips**\nCarry cash\nDay 2: Explore\n* Afternoon: Old town";
        let (days, sections) = build_cards(text);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].title, "Day 1: Arrive");
        assert_eq!(days[0].lines, vec!["**🌅 Morning Settle in**"]);
        assert_eq!(days[1].lines, vec!["**🏙️ Afternoon Old town**"]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "Tips");
        assert_eq!(sections[0].lines, vec!["**Carry cash**"]);
    }

    #[test]
    fn test_build_cards_sections_keep_first_encounter_order() {
        let text =
            "Day 1: A\n**Tips**\nt\nDay 2: B\n**Etiquette**\ne\nDay 3: C\n**Getting Around**\ng";
        let (days, sections) = build_cards(text);
        assert_eq!(days.len(), 3);
        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Tips", "Etiquette", "Getting Around"]);
    }

    #[test]
    fn test_build_cards_unstructured_text_degrades_to_one_day() {
        let (days, sections) = build_cards("Just relax.");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].title, "Day 1:");
        assert_eq!(days[0].lines, vec!["**Just relax.**"]);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_build_cards_section_lines_skip_blanks() {
        let text = "Day 1: A\n**Tips**\n\nCarry cash\n  ";
        let (_, sections) = build_cards(text);
        assert_eq!(sections[0].lines, vec!["**Carry cash**"]);
    }
}

//! Recurrence (伏吟) of a dynamic pillar, such as a year or luck pillar,
//! against the natal chart.

use serde::Serialize;

use lunisolar_base::Language;

use crate::chart::{FourPillars, Pillar, PillarPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecurrenceMatch {
    /// Stem and branch both repeat.
    Exact,
    /// Only the branch repeats.
    Branch,
}

impl RecurrenceMatch {
    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Exact, Language::Chinese) => "伏吟",
            (Self::Branch, Language::Chinese) => "地支伏吟",
            (Self::Exact, Language::English) => "exact",
            (Self::Branch, Language::English) => "branch",
            (Self::Exact, Language::Vietnamese) => "Phục Ngâm",
            (Self::Branch, Language::Vietnamese) => "Phục Ngâm địa chi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecurrenceEvent {
    pub match_type: RecurrenceMatch,
    pub natal: PillarPosition,
    pub dynamic: Pillar,
    pub confidence: u8,
}

/// One event per natal pillar that repeats the dynamic pillar, lazily.
///
/// Exact matches score 95 on the Month pillar and 90 elsewhere; branch-only
/// matches 70 and 60.
pub fn detect_recurrence_iter(
    chart: &FourPillars,
    dynamic: Pillar,
) -> impl Iterator<Item = RecurrenceEvent> + '_ {
    chart.iter().filter_map(move |(natal, p)| {
        let on_month = natal == PillarPosition::Month;
        let (match_type, confidence) = if p == dynamic {
            (RecurrenceMatch::Exact, if on_month { 95 } else { 90 })
        } else if p.branch == dynamic.branch {
            (RecurrenceMatch::Branch, if on_month { 70 } else { 60 })
        } else {
            return None;
        };
        Some(RecurrenceEvent {
            match_type,
            natal,
            dynamic,
            confidence,
        })
    })
}

pub fn detect_recurrence(chart: &FourPillars, dynamic: Pillar) -> Vec<RecurrenceEvent> {
    detect_recurrence_iter(chart, dynamic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_branch_matches() {
        let chart: FourPillars = "甲子,丙子,戊辰,壬子".parse().unwrap();
        let dynamic: Pillar = "丙子".parse().unwrap();
        let events = detect_recurrence(&chart, dynamic);
        let summary: Vec<_> = events
            .iter()
            .map(|e| (e.natal, e.match_type, e.confidence))
            .collect();
        assert_eq!(
            summary,
            vec![
                (PillarPosition::Year, RecurrenceMatch::Branch, 60),
                (PillarPosition::Month, RecurrenceMatch::Exact, 95),
                (PillarPosition::Hour, RecurrenceMatch::Branch, 60),
            ]
        );
    }

    #[test]
    fn exact_outside_month() {
        let chart: FourPillars = "甲子,丙寅,戊辰,庚申".parse().unwrap();
        let events = detect_recurrence(&chart, "戊辰".parse().unwrap());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].match_type, RecurrenceMatch::Exact);
        assert_eq!(events[0].confidence, 90);

        let events = detect_recurrence(&chart, "甲寅".parse().unwrap());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].natal, PillarPosition::Month);
        assert_eq!(events[0].confidence, 70);
    }

    #[test]
    fn no_match() {
        let chart: FourPillars = "甲子,丙寅,戊辰,庚申".parse().unwrap();
        assert!(detect_recurrence(&chart, "癸亥".parse().unwrap()).is_empty());
    }
}

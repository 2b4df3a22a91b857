// src/model/calendar.rs

use serde::Serialize;

/// First day of the December (year-end) season.
pub const YEAR_END_START: usize = 334;
/// Day after the last day of the year-end season.
pub const YEAR_END_END: usize = 365;

/// Length of every special-event window (in days).
const EVENT_WINDOW: usize = 3;
/// Months that open with a special-event window (Hot Sale, Black Friday, ...).
const EVENT_MONTHS: [usize; 3] = [0, 3, 6];
const DAYS_PER_MONTH: usize = 30;

/// The demand regime a day falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    SpecialEvent,
    YearEnd,
    Normal,
}

/// Parameters of the binomial visit distribution for one regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisitProfile {
    pub trials: u64,
    pub probability: f64,
}

impl Regime {
    /// Classifies a day index. Special events win over the year-end season.
    pub fn for_day(day: usize) -> Self {
        if is_special_event(day) {
            Regime::SpecialEvent
        } else if (YEAR_END_START..YEAR_END_END).contains(&day) {
            Regime::YearEnd
        } else {
            Regime::Normal
        }
    }

    pub fn visit_profile(self) -> VisitProfile {
        match self {
            Regime::SpecialEvent => VisitProfile {
                trials: 7_500_000,
                probability: 0.8,
            },
            Regime::YearEnd => VisitProfile {
                trials: 5_000_000,
                probability: 0.8,
            },
            Regime::Normal => VisitProfile {
                trials: 4_000_000,
                probability: 0.766,
            },
        }
    }
}

fn is_special_event(day: usize) -> bool {
    EVENT_MONTHS.iter().any(|&month| {
        let start = month * DAYS_PER_MONTH;
        (start..start + EVENT_WINDOW).contains(&day)
    })
}

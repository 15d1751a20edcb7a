use std::f64::consts::PI;

use chrono::{Datelike, Local, TimeZone};

use crate::types::Quest;

/// Radius of the progress ring.
pub const RING_RADIUS: f64 = 54.0;

/// Bar height each completed quest adds to its weekday.
pub const CHART_STEP: u8 = 20;
pub const CHART_MAX: u8 = 100;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// `round(completed / total * 100)`, or 0 for an empty collection.
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (completed as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRing {
    pub percentage: u8,
    pub circumference: f64,
    /// Stroke offset of the arc; equal to the circumference at 0%.
    pub dash_offset: f64,
}

impl ProgressRing {
    pub fn new(percentage: u8) -> Self {
        let circumference = 2.0 * PI * RING_RADIUS;
        Self {
            percentage,
            circumference,
            dash_offset: circumference - circumference * f64::from(percentage) / 100.0,
        }
    }

    pub fn for_quests(quests: &[Quest]) -> Self {
        let completed = quests.iter().filter(|q| q.completed).count();
        Self::new(completion_percentage(completed, quests.len()))
    }
}

/// Weekly activity per weekday, Monday first. Each completed quest counts
/// on the weekday it was *created*.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeeklyChart {
    pub buckets: [u8; 7],
}

impl WeeklyChart {
    pub fn from_quests(quests: &[Quest]) -> Self {
        Self::from_quests_in(quests, &Local)
    }

    pub fn from_quests_in<Tz: TimeZone>(quests: &[Quest], tz: &Tz) -> Self {
        let mut chart = Self::default();
        for quest in quests.iter().filter(|q| q.completed) {
            let local = quest.created_at.with_timezone(tz);
            let day = local.weekday().num_days_from_monday() as usize;
            chart.buckets[day] = chart.buckets[day].saturating_add(CHART_STEP).min(CHART_MAX);
        }
        chart
    }

    pub fn bars(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        WEEKDAY_LABELS.iter().copied().zip(self.buckets.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quests::tests::quest;
    use chrono::Utc;

    #[test]
    fn test_empty_collection_is_zero_percent() {
        assert_eq!(completion_percentage(0, 0), 0);
        let ring = ProgressRing::for_quests(&[]);
        assert_eq!(ring.percentage, 0);
        assert_eq!(ring.dash_offset, ring.circumference);
    }

    #[test]
    fn test_one_of_four_is_twenty_five() {
        let quests = vec![
            quest("a", true, "2024-05-06T08:00:00Z"),
            quest("b", false, "2024-05-06T08:00:00Z"),
            quest("c", false, "2024-05-06T08:00:00Z"),
            quest("d", false, "2024-05-06T08:00:00Z"),
        ];
        let ring = ProgressRing::for_quests(&quests);
        assert_eq!(ring.percentage, 25);
        assert!((ring.dash_offset - ring.circumference * 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(1, 8), 13);
        assert_eq!(completion_percentage(5, 5), 100);
    }

    #[test]
    fn test_chart_clamps_at_one_hundred() {
        // 2024-05-08 is a Wednesday.
        let quests: Vec<Quest> = (0..6)
            .map(|i| quest(&i.to_string(), true, "2024-05-08T12:00:00Z"))
            .collect();
        let chart = WeeklyChart::from_quests_in(&quests, &Utc);
        assert_eq!(chart.buckets, [0, 0, 100, 0, 0, 0, 0]);
    }

    #[test]
    fn test_chart_counts_only_completed_by_created_weekday() {
        let quests = vec![
            quest("mon", true, "2024-05-06T09:00:00Z"),
            quest("sun", true, "2024-05-12T09:00:00Z"),
            quest("sun2", true, "2024-05-12T22:00:00Z"),
            quest("open", false, "2024-05-07T09:00:00Z"),
        ];
        let chart = WeeklyChart::from_quests_in(&quests, &Utc);
        assert_eq!(chart.buckets, [20, 0, 0, 0, 0, 0, 40]);

        let labels: Vec<&str> = chart.bars().map(|(label, _)| label).collect();
        assert_eq!(labels, WEEKDAY_LABELS);
    }
}

//! Free-interval detection within a day's active window.
//!
//! Walks the intervals already placed on a day, sorted by start, and yields
//! the gaps left between them. Placers re-run the scan after every
//! insertion, so freshly placed blocks immediately count as obstacles and
//! can never be double-booked.

use serde::{Deserialize, Serialize};

use super::{DayPlan, Interval};
use crate::time::MINUTES_PER_DAY;

/// The span of a day open for placement: wake time up to the start of the
/// next sleep period.
///
/// Bounds are absolute minutes of day and the window never wraps; for late
/// wake times the end exceeds 1440.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWindow {
    pub start: u32,
    pub end: u32,
}

impl ActiveWindow {
    /// Window for a given wake minute and nightly sleep duration.
    pub fn new(wake_minutes: u32, sleep_hours: f64) -> Self {
        let sleep_minutes = (sleep_hours * 60.0) as u32;
        Self {
            start: wake_minutes,
            end: wake_minutes + MINUTES_PER_DAY - sleep_minutes,
        }
    }
}

/// A maximal free region between placed intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeGap {
    pub start: u32,
    pub end: u32,
}

impl FreeGap {
    /// Length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Check if this gap can hold a block of the given length.
    pub fn can_fit(&self, minutes: u32) -> bool {
        self.duration_minutes() >= minutes
    }
}

/// Lazy scan over a day's free gaps, earliest first.
///
/// Restart by calling [`free_gaps`] again; the scan snapshots the day's
/// intervals when created.
pub struct FreeGaps {
    obstacles: Vec<Interval>,
    next: usize,
    cursor: u32,
    window_end: u32,
    tail_emitted: bool,
}

impl Iterator for FreeGaps {
    type Item = FreeGap;

    fn next(&mut self) -> Option<FreeGap> {
        while self.next < self.obstacles.len() {
            let obstacle = &self.obstacles[self.next];
            self.next += 1;

            let gap = (self.cursor < obstacle.start).then(|| FreeGap {
                start: self.cursor,
                end: obstacle.start,
            });
            self.cursor = self.cursor.max(obstacle.end);
            if gap.is_some() {
                return gap;
            }
        }

        if !self.tail_emitted {
            self.tail_emitted = true;
            if self.cursor < self.window_end {
                return Some(FreeGap {
                    start: self.cursor,
                    end: self.window_end,
                });
            }
        }

        None
    }
}

/// Scan the free gaps of `day` within `window`.
///
/// Every interval already on the day constrains the scan regardless of its
/// kind; a learning session placed a moment ago is as much an obstacle as a
/// fixed appointment.
pub fn free_gaps(day: &DayPlan, window: ActiveWindow) -> FreeGaps {
    let mut obstacles: Vec<Interval> = day.intervals().to_vec();
    obstacles.sort_by_key(|i| i.start);

    FreeGaps {
        obstacles,
        next: 0,
        cursor: window.start,
        window_end: window.end,
        tail_emitted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::IntervalKind;

    fn window_7_to_23() -> ActiveWindow {
        // wake 07:00, 8h sleep: active until 23:00
        ActiveWindow::new(420, 8.0)
    }

    fn collect(day: &DayPlan, window: ActiveWindow) -> Vec<(u32, u32)> {
        free_gaps(day, window).map(|g| (g.start, g.end)).collect()
    }

    #[test]
    fn empty_day_yields_the_whole_window() {
        let day = DayPlan::new();
        assert_eq!(collect(&day, window_7_to_23()), vec![(420, 1380)]);
    }

    #[test]
    fn obstacles_split_the_window() {
        let mut day = DayPlan::new();
        day.push(Interval::new(540, 600, "Standup", IntervalKind::Fixed));
        day.push(Interval::new(720, 780, "Lunch meeting", IntervalKind::Fixed));
        assert_eq!(
            collect(&day, window_7_to_23()),
            vec![(420, 540), (600, 720), (780, 1380)]
        );
    }

    #[test]
    fn sleep_split_leaves_a_single_daytime_gap() {
        let mut day = DayPlan::new();
        day.push(Interval::new(1380, 1439, "Sleep", IntervalKind::Fixed));
        day.push(Interval::new(0, 420, "Sleep", IntervalKind::Fixed));
        assert_eq!(collect(&day, window_7_to_23()), vec![(420, 1380)]);
    }

    #[test]
    fn overlapping_obstacles_advance_the_cursor_once() {
        let mut day = DayPlan::new();
        day.push(Interval::new(500, 700, "Workshop", IntervalKind::Fixed));
        day.push(Interval::new(600, 660, "Call", IntervalKind::Fixed));
        assert_eq!(
            collect(&day, window_7_to_23()),
            vec![(420, 500), (700, 1380)]
        );
    }

    #[test]
    fn non_fixed_intervals_are_obstacles_too() {
        let mut day = DayPlan::new();
        day.push(Interval::new(420, 540, "Rust", IntervalKind::Learning));
        assert_eq!(collect(&day, window_7_to_23()), vec![(540, 1380)]);
    }

    #[test]
    fn fully_packed_day_has_no_gaps() {
        let mut day = DayPlan::new();
        day.push(Interval::new(400, 1400, "Everything", IntervalKind::Fixed));
        assert!(collect(&day, window_7_to_23()).is_empty());
    }

    #[test]
    fn scan_is_restartable() {
        let mut day = DayPlan::new();
        day.push(Interval::new(540, 600, "Standup", IntervalKind::Fixed));
        let window = window_7_to_23();
        let first: Vec<_> = free_gaps(&day, window).collect();
        let second: Vec<_> = free_gaps(&day, window).collect();
        assert_eq!(first, second);
    }
}

use serde::Serialize;

use super::types::{IncompleteRange, SeriesKind, TimePoint};

/// Partition of one series into a solid segment and up to two dashed ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSegments<'a> {
    pub complete: &'a [TimePoint],
    pub incomplete_before: Vec<TimePoint>,
    pub incomplete_after: Vec<TimePoint>,
}

impl SeriesSegments<'_> {
    #[must_use]
    pub fn has_incomplete(&self) -> bool {
        !self.incomplete_before.is_empty() || !self.incomplete_after.is_empty()
    }
}

/// Splits `points` around the incomplete thresholds.
///
/// Thresholds only apply to line charts. When either dashed segment is
/// non-empty, the solid segment keeps one shared point at each boundary so the
/// solid and dashed strokes touch.
#[must_use]
pub fn partition_series(
    points: &[TimePoint],
    kind: SeriesKind,
    incomplete: IncompleteRange,
) -> SeriesSegments<'_> {
    let applies = kind == SeriesKind::Line;

    let incomplete_before: Vec<TimePoint> = match incomplete.before {
        Some(before) if applies => points.iter().copied().filter(|p| p.time <= before).collect(),
        _ => Vec::new(),
    };
    let incomplete_after: Vec<TimePoint> = match incomplete.after {
        Some(after) if applies => points.iter().copied().filter(|p| p.time >= after).collect(),
        _ => Vec::new(),
    };

    let complete = if incomplete_before.is_empty() && incomplete_after.is_empty() {
        points
    } else {
        let start = incomplete_before.len().saturating_sub(1);
        let end = (points.len() + 1)
            .saturating_sub(incomplete_after.len())
            .min(points.len());
        &points[start.min(end)..end]
    };

    SeriesSegments {
        complete,
        incomplete_before,
        incomplete_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute_points(count: usize) -> Vec<TimePoint> {
        (0..count)
            .map(|i| TimePoint::new(i as f64 * 60_000.0, i as f64))
            .collect()
    }

    #[test]
    fn everything_incomplete_leaves_boundary_overlap_only() {
        let points = minute_points(3);
        let segments = partition_series(&points, SeriesKind::Line, IncompleteRange::before(1e12));
        assert_eq!(segments.incomplete_before.len(), 3);
        assert_eq!(segments.complete, &points[2..3]);
    }

    #[test]
    fn empty_series_yields_empty_segments() {
        let segments = partition_series(&[], SeriesKind::Line, IncompleteRange::after(0.0));
        assert!(segments.complete.is_empty());
        assert!(!segments.has_incomplete());
    }
}

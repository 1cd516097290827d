//! Side-by-side column assignment for overlapping same-day sessions.
//!
//! Groups pixel intervals into clusters by transitive overlap: an interval
//! joins the first open cluster containing any member it intersects, so two
//! intervals that never touch can share a cluster through a third. This can
//! allocate more columns than the true maximum simultaneous overlap; it is
//! kept deliberately in place of a strict interval coloring.

use serde::Serialize;

/// Horizontal margin split across both edges of a day column, in percent.
pub const TOTAL_MARGIN_PCT: f32 = 4.0;
/// Gap between side-by-side columns, in percent.
pub const COLUMN_GAP_PCT: f32 = 1.0;

/// One session's vertical extent in pixel-offset space, half-open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelInterval {
    pub session_id: i64,
    pub start: f32,
    pub end: f32,
}

impl PixelInterval {
    fn intersects(&self, other: &PixelInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Column placement for one interval within its overlap cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSlot {
    pub session_id: i64,
    /// Zero-based column index within the cluster.
    pub column: usize,
    /// Total columns in the cluster.
    pub columns: usize,
}

impl ColumnSlot {
    /// Derive left/width percentages for rendering.
    pub fn geometry(&self) -> (f32, f32) {
        let width = (100.0 - TOTAL_MARGIN_PCT) / self.columns as f32 - COLUMN_GAP_PCT;
        let left = TOTAL_MARGIN_PCT / 2.0 + width * self.column as f32;
        (left, width)
    }
}

struct Cluster {
    members: Vec<PixelInterval>,
}

/// Assign each interval a column index and its cluster's column count.
///
/// Intervals are processed in ascending start order; the returned slots are
/// in the same order as the input.
pub fn assign_columns(intervals: &[PixelInterval]) -> Vec<ColumnSlot> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| {
        intervals[a]
            .start
            .partial_cmp(&intervals[b].start)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut clusters: Vec<Cluster> = Vec::new();
    // (cluster index, column) per input index
    let mut placement = vec![(0usize, 0usize); intervals.len()];

    for &idx in &order {
        let interval = intervals[idx];
        let joined = clusters
            .iter()
            .position(|c| c.members.iter().any(|m| m.intersects(&interval)));

        match joined {
            Some(ci) => {
                placement[idx] = (ci, clusters[ci].members.len());
                clusters[ci].members.push(interval);
            }
            None => {
                placement[idx] = (clusters.len(), 0);
                clusters.push(Cluster {
                    members: vec![interval],
                });
            }
        }
    }

    intervals
        .iter()
        .enumerate()
        .map(|(idx, interval)| {
            let (ci, column) = placement[idx];
            ColumnSlot {
                session_id: interval.session_id,
                column,
                columns: clusters[ci].members.len(),
            }
        })
        .collect()
}

//! Greedy bin-packing of a week's rental segments into stacked rows.

use super::segments::Segment;

/// Bitmask of the columns a segment occupies, bit 0 = column 1.
fn column_mask(segment: &Segment) -> u8 {
    let span_bits = (1u8 << segment.span) - 1;
    span_bits << (segment.start_column - 1)
}

/// Assign each segment the first row where its column range is free.
///
/// Segments are placed in `(start_column ascending, span descending)` order
/// so wider bars land first and fragment the rows less. Returns the segments
/// with their `row` fields set, in placement order.
pub fn pack(mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.sort_by(|a, b| {
        a.start_column
            .cmp(&b.start_column)
            .then(b.span.cmp(&a.span))
    });

    // Occupied-column mask per row
    let mut rows: Vec<u8> = Vec::new();

    for segment in segments.iter_mut() {
        let mask = column_mask(segment);
        let row = rows
            .iter()
            .position(|occupied| occupied & mask == 0)
            .unwrap_or_else(|| {
                rows.push(0);
                rows.len() - 1
            });
        rows[row] |= mask;
        segment.row = row;
    }

    segments
}

/// Number of rows used by packed segments: `max(row) + 1`, or 0 when empty.
pub fn row_count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .map(|s| s.row + 1)
        .max()
        .unwrap_or(0)
}

//! Temporal clustering of flagged points into anomaly intervals.
//!
//! Two stages, in order: runs of adjacent flagged indices become candidate
//! intervals, then candidates closer than a minimum gap are merged in a
//! single greedy left-to-right pass.

use crate::core::AnomalyInterval;

/// Collect maximal runs of consecutive flagged indices.
///
/// Adjacency is by array index, not by time. Each run becomes an interval
/// from the timestamp of its first flagged index to that of its last.
/// Only the common prefix of `mask` and `timestamps` is considered.
pub fn group_contiguous(mask: &[bool], timestamps: &[f64]) -> Vec<AnomalyInterval> {
    let n = mask.len().min(timestamps.len());
    let mut groups = Vec::new();
    let mut run_start: Option<usize> = None;

    for i in 0..n {
        match (mask[i], run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                groups.push(AnomalyInterval::new(
                    timestamps[start],
                    timestamps[i - 1],
                    start,
                    i - 1,
                ));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        groups.push(AnomalyInterval::new(
            timestamps[start],
            timestamps[n - 1],
            start,
            n - 1,
        ));
    }

    groups
}

/// Merge candidate intervals separated by less than `min_gap` seconds.
///
/// Candidates must be in ascending time order. The first is kept as-is; each
/// following candidate either extends the last accumulated interval (when
/// `start - last.end < min_gap`) or starts a new one. An extended interval
/// keeps its original start. Earlier results are never revisited.
pub fn merge_close(candidates: &[AnomalyInterval], min_gap: f64) -> Vec<AnomalyInterval> {
    candidates
        .iter()
        .fold(Vec::with_capacity(candidates.len()), |mut merged, &candidate| {
            match merged.last_mut() {
                Some(last) if candidate.start - last.end < min_gap => {
                    last.end = candidate.end;
                    last.end_index = candidate.end_index;
                }
                _ => merged.push(candidate),
            }
            merged
        })
}

/// Group a boolean anomaly mask into merged, time-ordered intervals.
///
/// Adjacent output intervals are at least `min_gap` seconds apart.
pub fn cluster_anomalies(mask: &[bool], timestamps: &[f64], min_gap: f64) -> Vec<AnomalyInterval> {
    let candidates = group_contiguous(mask, timestamps);
    if candidates.is_empty() {
        return candidates;
    }
    merge_close(&candidates, min_gap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    fn bounds(intervals: &[AnomalyInterval]) -> Vec<(f64, f64)> {
        intervals.iter().map(|i| (i.start, i.end)).collect()
    }

    // ==================== group_contiguous ====================

    #[test]
    fn group_contiguous_runs() {
        let mask = [false, true, true, false, true, false, false, true, true, true];
        let ts: Vec<f64> = seconds(10).iter().map(|t| t * 10.0).collect();

        let groups = group_contiguous(&mask, &ts);

        assert_eq!(bounds(&groups), vec![(10.0, 20.0), (40.0, 40.0), (70.0, 90.0)]);
        assert_eq!(groups[0].start_index, 1);
        assert_eq!(groups[0].end_index, 2);
        assert_eq!(groups[2].end_index, 9);
    }

    #[test]
    fn group_contiguous_uses_index_adjacency() {
        // Indices 1 and 2 are adjacent even though their timestamps are far apart
        let mask = [false, true, true, false];
        let ts = [0.0, 1.0, 500.0, 501.0];

        let groups = group_contiguous(&mask, &ts);

        assert_eq!(bounds(&groups), vec![(1.0, 500.0)]);
    }

    #[test]
    fn group_contiguous_all_flagged() {
        let groups = group_contiguous(&[true; 4], &seconds(4));
        assert_eq!(bounds(&groups), vec![(0.0, 3.0)]);
    }

    #[test]
    fn group_contiguous_nothing_flagged() {
        assert!(group_contiguous(&[false; 8], &seconds(8)).is_empty());
        assert!(group_contiguous(&[], &[]).is_empty());
    }

    #[test]
    fn group_contiguous_mismatched_lengths_use_prefix() {
        let groups = group_contiguous(&[false, true, true, true], &seconds(3));
        assert_eq!(bounds(&groups), vec![(1.0, 2.0)]);

        let groups = group_contiguous(&[true], &seconds(5));
        assert_eq!(bounds(&groups), vec![(0.0, 0.0)]);
    }

    // ==================== merge_close ====================

    #[test]
    fn merge_close_points_within_gap() {
        let candidates = [
            AnomalyInterval::new(100.0, 100.0, 100, 100),
            AnomalyInterval::new(140.0, 140.0, 140, 140),
        ];

        let merged = merge_close(&candidates, 60.0);
        assert_eq!(merged, vec![AnomalyInterval::new(100.0, 140.0, 100, 140)]);

        let separate = merge_close(&candidates, 30.0);
        assert_eq!(bounds(&separate), vec![(100.0, 100.0), (140.0, 140.0)]);
    }

    #[test]
    fn merge_close_gap_equal_to_minimum_stays_separate() {
        let candidates = [
            AnomalyInterval::new(0.0, 10.0, 0, 10),
            AnomalyInterval::new(70.0, 80.0, 70, 80),
        ];
        let merged = merge_close(&candidates, 60.0);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_close_chains_from_extended_end() {
        // Each gap is 50s, so the second extends the first and the third
        // is measured against the extended end
        let candidates = [
            AnomalyInterval::new(0.0, 10.0, 0, 1),
            AnomalyInterval::new(60.0, 70.0, 6, 7),
            AnomalyInterval::new(120.0, 130.0, 12, 13),
            AnomalyInterval::new(300.0, 310.0, 30, 31),
        ];

        let merged = merge_close(&candidates, 60.0);

        assert_eq!(
            merged,
            vec![
                AnomalyInterval::new(0.0, 130.0, 0, 13),
                AnomalyInterval::new(300.0, 310.0, 30, 31),
            ]
        );
    }

    #[test]
    fn merge_close_zero_gap_keeps_all() {
        let candidates = [
            AnomalyInterval::new(0.0, 1.0, 0, 1),
            AnomalyInterval::new(3.0, 4.0, 3, 4),
        ];
        assert_eq!(merge_close(&candidates, 0.0), candidates.to_vec());
    }

    #[test]
    fn merge_close_empty() {
        assert!(merge_close(&[], 60.0).is_empty());
    }

    // ==================== cluster_anomalies ====================

    #[test]
    fn cluster_anomalies_end_to_end() {
        let ts: Vec<f64> = seconds(200);
        let mut mask = vec![false; 200];
        mask[100] = true;
        mask[140] = true;

        let merged = cluster_anomalies(&mask, &ts, 60.0);
        assert_eq!(merged, vec![AnomalyInterval::new(100.0, 140.0, 100, 140)]);
        assert_eq!(merged[0].sample_span(), 41);

        let separate = cluster_anomalies(&mask, &ts, 30.0);
        assert_eq!(bounds(&separate), vec![(100.0, 100.0), (140.0, 140.0)]);
    }

    #[test]
    fn cluster_anomalies_output_is_separated() {
        let ts: Vec<f64> = seconds(1000);
        let mask: Vec<bool> = (0..1000).map(|i| i % 37 == 0 || i % 91 < 3).collect();

        let intervals = cluster_anomalies(&mask, &ts, 25.0);

        for pair in intervals.windows(2) {
            assert!(pair[0].start <= pair[0].end);
            assert!(pair[1].start - pair[0].end >= 25.0);
        }
    }
}

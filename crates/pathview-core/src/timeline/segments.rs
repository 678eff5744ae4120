//! Minute-bucket path segmentation

use crate::types::Sample;
use std::ops::Range;

/// One polyline of the reached path: a contiguous run of samples sharing a
/// minute bucket. Consecutive segments are never joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// `floor(t / 60)` shared by every sample in the run
    pub bucket: i64,
    /// Index range into the owning sequence
    pub range: Range<usize>,
}

impl PathSegment {
    /// Palette slot for this segment (`bucket mod palette_len`)
    pub fn color_index(&self, palette_len: usize) -> usize {
        if palette_len == 0 {
            return 0;
        }
        self.bucket.rem_euclid(palette_len as i64) as usize
    }
}

pub(super) fn split_by_bucket(prefix: &[Sample]) -> Vec<PathSegment> {
    let mut segments: Vec<PathSegment> = Vec::new();

    for (i, s) in prefix.iter().enumerate() {
        let bucket = s.minute_bucket();
        match segments.last_mut() {
            Some(current) if current.bucket == bucket => current.range.end = i + 1,
            _ => segments.push(PathSegment {
                bucket,
                range: i..i + 1,
            }),
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::sample;

    #[test]
    fn test_new_bucket_starts_new_segment() {
        let prefix = [
            sample(0.0, 0.0, 0.0),
            sample(30.0, 1.0, 1.0),
            sample(59.0, 2.0, 2.0),
            sample(60.0, 3.0, 3.0),
            sample(119.0, 4.0, 4.0),
            sample(400.0, 5.0, 5.0),
        ];
        let segments = split_by_bucket(&prefix);
        assert_eq!(
            segments,
            vec![
                PathSegment { bucket: 0, range: 0..3 },
                PathSegment { bucket: 1, range: 3..5 },
                PathSegment { bucket: 6, range: 5..6 },
            ]
        );
    }

    #[test]
    fn test_color_index_wraps_palette() {
        let seg = PathSegment { bucket: 7, range: 0..1 };
        assert_eq!(seg.color_index(6), 1);
        assert_eq!(seg.color_index(0), 0);
        let negative = PathSegment { bucket: -1, range: 0..1 };
        assert_eq!(negative.color_index(6), 5);
    }
}

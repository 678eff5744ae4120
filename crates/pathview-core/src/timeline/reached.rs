//! Last-two-reached-samples tracking

use crate::types::Sample;

/// The two most recently reached samples at a target time
///
/// Computed once per frame from the sequence prefix, independent of how the
/// path is drawn. `previous` is only set when `latest` is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReachedSamples {
    pub previous: Option<Sample>,
    pub latest: Option<Sample>,
}

impl ReachedSamples {
    /// Take the last two samples of an already-reached prefix
    pub fn from_prefix(prefix: &[Sample]) -> Self {
        match prefix {
            [] => Self::default(),
            [only] => Self {
                previous: None,
                latest: Some(*only),
            },
            [.., prev, last] => Self {
                previous: Some(*prev),
                latest: Some(*last),
            },
        }
    }

    /// Both slots filled, as `(previous, latest)`
    pub fn pair(&self) -> Option<(&Sample, &Sample)> {
        Some((self.previous.as_ref()?, self.latest.as_ref()?))
    }
}

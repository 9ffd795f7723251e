//! Sliding, wrapping windows over trajectory samples.

use core::ops::Range;

/// Index ranges to draw for one trajectory on one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRanges {
    /// `[start, min(start + window, len))`
    pub head: Range<usize>,
    /// Continuation from the beginning when the window runs past the end.
    pub wrap: Option<Range<usize>>,
}

impl WindowRanges {
    pub fn point_count(&self) -> usize {
        self.head.len() + self.wrap.as_ref().map_or(0, |r| r.len())
    }
}

/// Window of `window` samples starting at `(frame · stride) mod len`.
///
/// When the window runs past `len` the overflow wraps to index 0. The wrap
/// never reaches back to `start`, so trajectories shorter than the window
/// are drawn at most once per frame.
pub fn window_ranges(frame: u64, len: usize, window: usize, stride: usize) -> WindowRanges {
    if len == 0 {
        return WindowRanges {
            head: 0..0,
            wrap: None,
        };
    }
    let start = ((frame as u128 * stride as u128) % len as u128) as usize;
    let end = start.saturating_add(window);
    let head = start..end.min(len);
    let wrap = (end > len)
        .then(|| 0..(end - len).min(start))
        .filter(|r| !r.is_empty());
    WindowRanges { head, wrap }
}

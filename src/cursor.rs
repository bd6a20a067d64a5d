//! Keyboard-driven icon selection.

use serde::Deserialize;

use crate::atlas::{AtlasLayout, UvRect};
use crate::error::{Error, Result};

/// What happens when stepping past either end of the atlas.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Continue from the other end.
    Wrap,

    /// Stay on the first or last icon.
    Clamp,
}

impl Default for Overflow {
    fn default() -> Self {
        Overflow::Wrap
    }
}

/// The currently selected region of an atlas.
///
/// The index is always valid for the layout, so [`rect`] cannot fail.
///
/// [`rect`]: #method.rect
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IconCursor {
    layout: AtlasLayout,
    index: u32,
    overflow: Overflow,
}

impl IconCursor {
    /// Constructor. Starts at icon 0.
    pub fn new(layout: AtlasLayout, overflow: Overflow) -> Self {
        Self {
            layout,
            index: 0,
            overflow,
        }
    }

    /// Returns the atlas layout.
    pub fn layout(&self) -> AtlasLayout {
        self.layout
    }

    /// Returns the overflow policy.
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Returns the selected icon.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the texture rectangle of the selected icon.
    pub fn rect(&self) -> UvRect {
        // `index` is kept below `region_count` by every mutator.
        self.layout.rect_unchecked(self.index)
    }

    /// Selects an icon directly.
    ///
    /// An index past the end of the atlas is rejected and the selection is
    /// left unchanged.
    pub fn select(&mut self, index: u32) -> Result<()> {
        let count = self.layout.region_count();
        if index >= count {
            return Err(Error::OutOfRange { index, count });
        }
        self.index = index;
        Ok(())
    }

    /// Moves the selection by `delta` icons, returning the new index.
    pub fn step(&mut self, delta: i64) -> u32 {
        let count = i64::from(self.layout.region_count());
        let target = i64::from(self.index).saturating_add(delta);
        let index = match self.overflow {
            Overflow::Wrap => target.rem_euclid(count),
            Overflow::Clamp => target.max(0).min(count - 1),
        };
        self.index = index as u32;
        self.index
    }

    /// Moves to the following icon.
    pub fn next(&mut self) -> u32 {
        self.step(1)
    }

    /// Moves to the preceding icon.
    pub fn prev(&mut self) -> u32 {
        self.step(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(overflow: Overflow) -> IconCursor {
        IconCursor::new(AtlasLayout::new(4).unwrap(), overflow)
    }

    #[test]
    fn starts_at_zero() {
        let cursor = cursor(Overflow::Wrap);
        assert_eq!(0, cursor.index());
        assert_eq!([0.0, 0.75, 0.25, 1.0], cursor.rect().to_array());
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut cursor = cursor(Overflow::Wrap);
        assert_eq!(15, cursor.prev());
        assert_eq!(0, cursor.next());
    }

    #[test]
    fn prev_from_zero_clamps() {
        let mut cursor = cursor(Overflow::Clamp);
        assert_eq!(0, cursor.prev());
        cursor.select(15).unwrap();
        assert_eq!(15, cursor.next());
    }

    #[test]
    fn large_steps_wrap_euclidean() {
        let mut cursor = cursor(Overflow::Wrap);
        cursor.select(3).unwrap();
        assert_eq!(2, cursor.step(-17));
        assert_eq!(2, cursor.step(32));
        assert_eq!(1, cursor.step(i64::from(u32::max_value())));
    }

    #[test]
    fn extreme_steps_stay_in_range() {
        let mut wrap = cursor(Overflow::Wrap);
        wrap.select(3).unwrap();
        // i64::MAX ≡ 15 and i64::MIN ≡ 0 (mod 16).
        assert_eq!(15, wrap.step(i64::max_value()));
        wrap.select(3).unwrap();
        assert_eq!(0, wrap.step(i64::min_value()));

        let mut clamp = cursor(Overflow::Clamp);
        clamp.select(3).unwrap();
        assert_eq!(15, clamp.step(i64::max_value()));
        clamp.select(3).unwrap();
        assert_eq!(0, clamp.step(i64::min_value()));
    }

    #[test]
    fn select_out_of_range_keeps_selection() {
        let mut cursor = cursor(Overflow::Wrap);
        cursor.select(9).unwrap();
        assert!(cursor.select(16).is_err());
        assert_eq!(9, cursor.index());
    }

    #[test]
    fn rect_follows_selection() {
        let mut cursor = cursor(Overflow::Clamp);
        cursor.select(6).unwrap();
        assert_eq!([0.5, 0.5, 0.75, 0.75], cursor.rect().to_array());
    }
}

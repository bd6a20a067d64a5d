//! Square texture atlas addressing.
//!
//! An atlas is a single texture divided into `n × n` equally sized square
//! regions. Region 0 is the bottom-left region of the picture and indices
//! run left to right, then bottom to top:
//!
//! ```text
//! +----+----+----+----+
//! | 12 | 13 | 14 | 15 |
//! +----+----+----+----+
//! |  8 |  9 | 10 | 11 |
//! +----+----+----+----+
//! |  4 |  5 |  6 |  7 |
//! +----+----+----+----+
//! |  0 |  1 |  2 |  3 |
//! +----+----+----+----+
//! ```
//!
//! Texture co-ordinates address the pixel data, not the picture, so where
//! a region lands in `v` depends on the order the image stores its rows.
//! See [`RowOrder`].
//!
//! [`RowOrder`]: enum.RowOrder.html

use serde::Deserialize;

use crate::error::{Error, Result};

/// Largest side count whose region count still fits in a `u32`.
pub const MAX_SIDE_COUNT: u32 = 65535;

/// Order in which the atlas image stores its pixel rows.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Row 0 of the pixel data is the top of the picture.
    ///
    /// This is what PNG decoders produce, so the picture's bottom row of
    /// regions sits at the top of `v`.
    TopDown,

    /// Row 0 of the pixel data is the bottom of the picture.
    BottomUp,
}

impl Default for RowOrder {
    fn default() -> Self {
        RowOrder::TopDown
    }
}

/// Normalized texture co-ordinate rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    /// Left edge.
    pub u_min: f32,

    /// Lower edge.
    pub v_min: f32,

    /// Right edge.
    pub u_max: f32,

    /// Upper edge.
    pub v_max: f32,
}

impl UvRect {
    /// Returns the horizontal extent.
    pub fn width(&self) -> f32 {
        self.u_max - self.u_min
    }

    /// Returns the vertical extent.
    pub fn height(&self) -> f32 {
        self.v_max - self.v_min
    }

    /// Returns the midpoint as `(u, v)`.
    pub fn center(&self) -> (f32, f32) {
        (
            0.5 * (self.u_min + self.u_max),
            0.5 * (self.v_min + self.v_max),
        )
    }

    /// Returns `true` if `(u, v)` lies inside or on the edge of the rectangle.
    pub fn contains(&self, u: f32, v: f32) -> bool {
        u >= self.u_min && u <= self.u_max && v >= self.v_min && v <= self.v_max
    }

    /// Returns `[u_min, v_min, u_max, v_max]`, the layout of a GLSL `vec4`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.u_min, self.v_min, self.u_max, self.v_max]
    }
}

/// Subdivision of a square atlas into equally sized regions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AtlasLayout {
    /// Regions per side.
    side_count: u32,

    /// Row storage order of the atlas image.
    row_order: RowOrder,
}

impl AtlasLayout {
    /// Constructor for an atlas whose image stores rows top first.
    ///
    /// Fails with [`Error::InvalidLayout`] if `side_count` is zero or
    /// greater than [`MAX_SIDE_COUNT`].
    ///
    /// ```rust
    /// # extern crate playground;
    /// use playground::atlas::AtlasLayout;
    ///
    /// let layout = AtlasLayout::new(4).unwrap();
    /// assert_eq!(16, layout.region_count());
    /// assert!(AtlasLayout::new(0).is_err());
    /// ```
    ///
    /// [`Error::InvalidLayout`]: ../error/enum.Error.html
    /// [`MAX_SIDE_COUNT`]: constant.MAX_SIDE_COUNT.html
    pub fn new(side_count: u32) -> Result<Self> {
        Self::with_row_order(side_count, RowOrder::default())
    }

    /// Constructor with an explicit row storage order.
    pub fn with_row_order(side_count: u32, row_order: RowOrder) -> Result<Self> {
        if side_count == 0 || side_count > MAX_SIDE_COUNT {
            return Err(Error::InvalidLayout { side_count });
        }
        Ok(Self { side_count, row_order })
    }

    /// Returns the number of regions per side.
    pub fn side_count(&self) -> u32 {
        self.side_count
    }

    /// Returns the row storage order.
    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    /// Returns the total number of regions.
    pub fn region_count(&self) -> u32 {
        self.side_count * self.side_count
    }

    /// Returns the normalized side length of one region.
    pub fn region_size(&self) -> f32 {
        1.0 / self.side_count as f32
    }

    /// Returns the texture rectangle covering region `index`.
    ///
    /// ```rust
    /// # extern crate playground;
    /// use playground::atlas::AtlasLayout;
    ///
    /// let layout = AtlasLayout::new(4).unwrap();
    /// let rect = layout.rect_for_index(6).unwrap();
    /// assert_eq!([0.5, 0.5, 0.75, 0.75], rect.to_array());
    /// assert!(layout.rect_for_index(16).is_err());
    /// ```
    pub fn rect_for_index(&self, index: u32) -> Result<UvRect> {
        let count = self.region_count();
        if index >= count {
            return Err(Error::OutOfRange { index, count });
        }
        Ok(self.rect_unchecked(index))
    }

    /// Returns the index of the region containing `(u, v)`.
    ///
    /// The closed upper edges `u = 1` and `v = 1` belong to the last column
    /// and row respectively. Points outside `[0, 1]²` are rejected.
    pub fn index_for_point(&self, u: f32, v: f32) -> Result<u32> {
        let unit = 0.0 ..= 1.0;
        if !unit.contains(&u) || !unit.contains(&v) {
            return Err(Error::PointOutOfRange { u, v });
        }
        let n = self.side_count;
        let col = self.cell(u);
        let row = match self.row_order {
            RowOrder::TopDown => n - 1 - self.cell(v),
            RowOrder::BottomUp => self.cell(v),
        };
        Ok(row * n + col)
    }

    /// Iterates over every region as `(index, rect)` in index order.
    pub fn regions(&self) -> impl Iterator<Item = (u32, UvRect)> {
        let layout = *self;
        (0 .. self.region_count()).map(move |index| (index, layout.rect_unchecked(index)))
    }

    pub(crate) fn rect_unchecked(&self, index: u32) -> UvRect {
        let n = self.side_count;
        let col = index % n;
        let row = index / n;
        let row = match self.row_order {
            RowOrder::TopDown => n - 1 - row,
            RowOrder::BottomUp => row,
        };
        // Edges are computed as `k / n` so neighbours share edges bit for bit
        // and the last column/row ends at exactly 1.0.
        let edge = |k: u32| k as f32 / n as f32;
        UvRect {
            u_min: edge(col),
            v_min: edge(row),
            u_max: edge(col + 1),
            v_max: edge(row + 1),
        }
    }

    /// Column or row number of a co-ordinate in `[0, 1]`.
    fn cell(&self, x: f32) -> u32 {
        let n = self.side_count;
        let k = (x as f64 * n as f64).floor() as u32;
        k.min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_side_count_is_rejected() {
        match AtlasLayout::new(0) {
            Err(Error::InvalidLayout { side_count: 0 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn oversized_side_count_is_rejected() {
        assert!(AtlasLayout::new(MAX_SIDE_COUNT).is_ok());
        assert!(AtlasLayout::new(MAX_SIDE_COUNT + 1).is_err());
    }

    #[test]
    fn single_region_covers_the_whole_texture() {
        let layout = AtlasLayout::new(1).unwrap();
        let rect = layout.rect_for_index(0).unwrap();
        assert_eq!([0.0, 0.0, 1.0, 1.0], rect.to_array());
        assert_eq!(0, layout.index_for_point(1.0, 1.0).unwrap());
    }

    #[test]
    fn top_down_inverts_rows() {
        let layout = AtlasLayout::new(4).unwrap();
        assert_eq!([0.0, 0.75, 0.25, 1.0], layout.rect_for_index(0).unwrap().to_array());
        assert_eq!([0.75, 0.0, 1.0, 0.25], layout.rect_for_index(15).unwrap().to_array());
    }

    #[test]
    fn bottom_up_keeps_rows() {
        let layout = AtlasLayout::with_row_order(4, RowOrder::BottomUp).unwrap();
        assert_eq!([0.0, 0.0, 0.25, 0.25], layout.rect_for_index(0).unwrap().to_array());
        assert_eq!([0.5, 0.25, 0.75, 0.5], layout.rect_for_index(6).unwrap().to_array());
        assert_eq!([0.75, 0.75, 1.0, 1.0], layout.rect_for_index(15).unwrap().to_array());
    }

    #[test]
    fn out_of_range_reports_index_and_count() {
        let layout = AtlasLayout::new(3).unwrap();
        match layout.rect_for_index(9) {
            Err(Error::OutOfRange { index: 9, count: 9 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn points_outside_the_unit_square_are_rejected() {
        let layout = AtlasLayout::new(4).unwrap();
        assert!(layout.index_for_point(-0.01, 0.5).is_err());
        assert!(layout.index_for_point(0.5, 1.01).is_err());
        assert!(layout.index_for_point(::std::f32::NAN, 0.5).is_err());
    }

    #[test]
    fn edges_belong_to_the_upper_region() {
        let layout = AtlasLayout::new(4).unwrap();
        // u = 0.25 is the left edge of column 1; v = 0.75 the lower edge of
        // the picture's bottom row.
        assert_eq!(1, layout.index_for_point(0.25, 0.75).unwrap());
        assert_eq!(3, layout.index_for_point(1.0, 1.0).unwrap());
        assert_eq!(12, layout.index_for_point(0.0, 0.0).unwrap());
    }

    #[test]
    fn last_region_ends_at_one() {
        for n in 1 .. 64 {
            let layout = AtlasLayout::new(n).unwrap();
            let rect = layout.rect_for_index(layout.region_count() - 1).unwrap();
            assert_eq!(1.0, rect.u_max);
            assert!(rect.v_min >= 0.0);
        }
    }

    #[test]
    fn regions_are_yielded_in_index_order() {
        let layout = AtlasLayout::new(3).unwrap();
        let indices: Vec<u32> = layout.regions().map(|(index, _)| index).collect();
        assert_eq!((0 .. 9).collect::<Vec<_>>(), indices);
    }

    #[test]
    fn rect_helpers() {
        let rect = UvRect { u_min: 0.25, v_min: 0.5, u_max: 0.5, v_max: 0.75 };
        assert_eq!(0.25, rect.width());
        assert_eq!(0.25, rect.height());
        assert_eq!((0.375, 0.625), rect.center());
        assert!(rect.contains(0.25, 0.75));
        assert!(!rect.contains(0.2, 0.6));
    }
}

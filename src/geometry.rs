use crate::error::{PixfieldError, PixfieldResult};

/// Extent descriptor for a rectangular pixel grid.
///
/// Immutable once constructed; both dimensions are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Screen {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Screen {
    /// Create a validated screen with non-zero extent.
    pub fn new(width: u32, height: u32) -> PixfieldResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixfieldError::validation("Screen extent must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Total pixel count, `width * height`.
    pub fn pixels(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The full-screen field at the origin.
    pub fn field(self) -> Field {
        Field::new(0, 0, self.width, self.height)
    }

    /// Return `true` when `(x, y)` lies inside `[0, width) x [0, height)`.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

/// Rectangle (origin + extent) in a screen's coordinate space.
///
/// A field may lie partially or fully outside a screen's bounds; it owns no
/// pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Field {
    /// Origin x.
    pub x: i32,
    /// Origin y.
    pub y: i32,
    /// Extent width.
    pub width: u32,
    /// Extent height.
    pub height: u32,
}

impl Field {
    /// The 0x0 field at the origin.
    pub const EMPTY: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a field from origin and extent.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return `true` when the field covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Covered pixel count.
    pub fn pixels(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Exclusive right edge in i64 to avoid overflow at extreme origins.
    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Return `true` when `(x, y)` lies inside the field.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && i64::from(x) < self.right() && i64::from(y) < self.bottom()
    }

    /// Intersect two fields.
    ///
    /// No overlap yields [`Field::EMPTY`], never a negative extent.
    pub fn intersect(self, other: Self) -> Self {
        let x0 = i64::from(self.x.max(other.x));
        let y0 = i64::from(self.y.max(other.y));
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return Self::EMPTY;
        }
        Self {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        }
    }

    /// Clip against a screen's `[0, width) x [0, height)` bounds.
    pub fn clip_to(self, screen: Screen) -> Self {
        self.intersect(screen.field())
    }

    /// Shift the origin by `(dx, dy)` using saturating arithmetic.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// Row-major coordinate iterator: all x for y = origin.y, then the next
    /// row, and so on. Finite, restartable, deterministic.
    ///
    /// Every pixel-scanning operation in the crate traverses through this
    /// iterator, which keeps output byte-for-byte reproducible.
    pub fn iter(self) -> FieldIter {
        FieldIter {
            field: self,
            col: 0,
            row: 0,
        }
    }
}

impl IntoIterator for Field {
    type Item = (i32, i32);
    type IntoIter = FieldIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy row-major coordinate iterator over a [`Field`].
#[derive(Clone, Debug)]
pub struct FieldIter {
    field: Field,
    col: u32,
    row: u32,
}

impl Iterator for FieldIter {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.field.width == 0 || self.row >= self.field.height {
            return None;
        }
        let point = (
            self.field.x.wrapping_add(self.col as i32),
            self.field.y.wrapping_add(self.row as i32),
        );
        self.col += 1;
        if self.col == self.field.width {
            self.col = 0;
            self.row += 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.field.width == 0 || self.row >= self.field.height {
            0
        } else {
            let full_rows = (self.field.height - self.row - 1) as usize;
            full_rows * self.field.width as usize + (self.field.width - self.col) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_rejects_zero_extent() {
        assert!(Screen::new(0, 4).is_err());
        assert!(Screen::new(4, 0).is_err());
        let screen = Screen::new(4, 3).unwrap();
        assert_eq!(screen.pixels(), 12);
    }

    #[test]
    fn intersect_overlapping() {
        let a = Field::new(0, 0, 4, 4);
        let b = Field::new(2, 2, 4, 4);
        assert_eq!(a.intersect(b), Field::new(2, 2, 2, 2));
        assert_eq!(b.intersect(a), Field::new(2, 2, 2, 2));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = Field::new(0, 0, 4, 4);
        let b = Field::new(10, 10, 4, 4);
        assert_eq!(a.intersect(b), Field::EMPTY);
        assert!(a.intersect(b).is_empty());
    }

    #[test]
    fn clip_negative_origin() {
        let screen = Screen::new(8, 8).unwrap();
        let field = Field::new(-2, -3, 5, 5);
        assert_eq!(field.clip_to(screen), Field::new(0, 0, 3, 2));
    }

    #[test]
    fn clip_fully_outside() {
        let screen = Screen::new(8, 8).unwrap();
        assert!(Field::new(-10, 0, 4, 4).clip_to(screen).is_empty());
        assert!(Field::new(8, 0, 4, 4).clip_to(screen).is_empty());
    }

    #[test]
    fn iterator_is_row_major_and_exact() {
        let field = Field::new(1, 2, 3, 2);
        let coords: Vec<_> = field.iter().collect();
        assert_eq!(
            coords,
            vec![(1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)]
        );
        assert_eq!(field.iter().len(), 6);
    }

    #[test]
    fn iterator_covers_screen_in_bounds() {
        let screen = Screen::new(5, 4).unwrap();
        let coords: Vec<_> = screen.field().iter().collect();
        assert_eq!(coords.len(), screen.pixels());
        let mut seen = std::collections::HashSet::new();
        for (x, y) in coords {
            assert!(screen.contains(x, y));
            assert!(seen.insert((x, y)), "duplicate coordinate ({x}, {y})");
        }
    }

    #[test]
    fn iterator_restarts_fresh() {
        let field = Field::new(0, 0, 2, 2);
        assert_eq!(field.iter().count(), 4);
        assert_eq!(field.iter().count(), 4);
    }

    #[test]
    fn empty_field_yields_nothing() {
        assert_eq!(Field::EMPTY.iter().count(), 0);
        assert_eq!(Field::new(3, 3, 0, 5).iter().count(), 0);
        assert_eq!(Field::new(3, 3, 5, 0).iter().count(), 0);
    }
}

use crate::color::Color;
use crate::error::{PixfieldError, PixfieldResult};

/// Ordered palette of colors supporting direct indexing and fractional
/// interpolation.
///
/// Insertion order is significant. An empty sequence is legal to construct but
/// illegal to index or interpolate; replacing the palette means constructing a
/// new sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorSequence {
    colors: Vec<Color>,
}

/// Style used to map a fractional position onto palette entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Interpolator {
    /// Blend adjacent entries; positions outside `[0, len-1]` clamp to the
    /// nearest endpoint.
    #[default]
    ContinuousLinear,
    /// Blend adjacent entries on a cycle of period `len`; the segment after
    /// the last entry blends back toward the first.
    ContinuousCircular,
    /// Take the entry at the floor of the clamped position, no blending.
    DiscreteLinear,
    /// Take the entry at the floor of the wrapped position, no blending.
    DiscreteCircular,
}

impl ColorSequence {
    /// Copy the caller's colors into a new sequence.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Return `true` when the palette holds no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries in insertion order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Direct lookup by index.
    pub fn at(&self, index: usize) -> PixfieldResult<Color> {
        self.colors
            .get(index)
            .copied()
            .ok_or(PixfieldError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
    }

    /// Continuous-linear interpolation at `position`, clamped at both ends.
    ///
    /// Equivalent to `interpolate_with(Interpolator::ContinuousLinear, ..)`.
    pub fn interpolate(&self, position: f64) -> PixfieldResult<Color> {
        self.interpolate_with(Interpolator::ContinuousLinear, position)
    }

    /// Map `position` onto the palette with the chosen interpolator style.
    ///
    /// Continuous styles blend each channel independently in `f64` and round
    /// half-away-from-zero; that rounding rule is a committed contract. A NaN
    /// position is treated as `0.0`.
    pub fn interpolate_with(
        &self,
        interpolator: Interpolator,
        position: f64,
    ) -> PixfieldResult<Color> {
        let len = self.colors.len();
        if len == 0 {
            return Err(PixfieldError::EmptySequence);
        }
        let position = if position.is_nan() { 0.0 } else { position };

        Ok(match interpolator {
            Interpolator::ContinuousLinear => {
                let pos = position.clamp(0.0, (len - 1) as f64);
                let lo = pos.floor() as usize;
                let hi = (lo + 1).min(len - 1);
                lerp(self.colors[lo], self.colors[hi], pos - lo as f64)
            }
            Interpolator::ContinuousCircular => {
                let pos = position.rem_euclid(len as f64);
                // rem_euclid can land exactly on len when the period is tiny
                // relative to the input magnitude.
                let lo = (pos.floor() as usize).min(len - 1);
                let hi = (lo + 1) % len;
                lerp(self.colors[lo], self.colors[hi], pos - lo as f64)
            }
            Interpolator::DiscreteLinear => {
                let pos = position.clamp(0.0, (len - 1) as f64);
                self.colors[pos.floor() as usize]
            }
            Interpolator::DiscreteCircular => {
                let idx = (position.rem_euclid(len as f64).floor() as usize).min(len - 1);
                self.colors[idx]
            }
        })
    }
}

impl<'a> IntoIterator for &'a ColorSequence {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

fn lerp(lo: Color, hi: Color, t: f64) -> Color {
    let (lr, lg, lb, la) = lo.to_rgba();
    let (hr, hg, hb, ha) = hi.to_rgba();
    let ch = |l: u8, h: u8| (f64::from(l) + (f64::from(h) - f64::from(l)) * t).round() as u8;
    Color::from_rgba(ch(lr, hr), ch(lg, hg), ch(lb, hb), ch(la, ha))
}

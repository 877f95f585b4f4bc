use crate::compositor::Compositor;
use crate::error::{PixfieldError, PixfieldResult};
use crate::geometry::Field;
use crate::interface::Interface;
use crate::sequence::{ColorSequence, Interpolator};

/// Composite `src`'s region into `dst` at `dst_origin`.
///
/// The source extent is placed at `dst_origin` in `dst`'s local frame and
/// clipped against both interfaces' addressable pixels; each surviving
/// coordinate is combined through `compositor` in row-major order. An empty
/// overlap is a silent no-op, not an error — partial and no-overlap blits are
/// the normal outcome of scrolling and boundary placement.
#[tracing::instrument(skip_all, fields(dst_origin = ?dst_origin, compositor = ?compositor))]
pub fn blit(
    src: &Interface<'_>,
    dst: &mut Interface<'_>,
    dst_origin: (i32, i32),
    compositor: Compositor,
) -> PixfieldResult<()> {
    let placed = src.visible_field().translated(dst_origin.0, dst_origin.1);
    let region = placed.intersect(dst.visible_field());
    if region.is_empty() {
        tracing::trace!("empty overlap, nothing to blit");
        return Ok(());
    }

    for (dx, dy) in region {
        let sx = dx - dst_origin.0;
        let sy = dy - dst_origin.1;
        let s = src.get_pixel(sx, sy)?;
        let d = dst.get_pixel(dx, dy)?;
        dst.set_pixel(dx, dy, compositor.combine(s, d))?;
    }
    Ok(())
}

/// Composite two same-geometry interfaces, writing into `dst`.
///
/// Same iteration discipline as [`blit`], but the interfaces must share an
/// iterable extent; fails with `GeometryMismatch` otherwise. Intended for
/// combining a full frame over a full frame.
#[tracing::instrument(skip_all, fields(extent = ?src.extent(), compositor = ?compositor))]
pub fn compose(
    src: &Interface<'_>,
    dst: &mut Interface<'_>,
    compositor: Compositor,
) -> PixfieldResult<()> {
    if src.extent() != dst.extent() {
        return Err(PixfieldError::geometry(format!(
            "compose expects matching extents, got {:?} and {:?}",
            src.extent(),
            dst.extent()
        )));
    }

    let region: Field = src.visible_field().intersect(dst.visible_field());
    for (x, y) in region {
        let s = src.get_pixel(x, y)?;
        let d = dst.get_pixel(x, y)?;
        dst.set_pixel(x, y, compositor.combine(s, d))?;
    }
    Ok(())
}

/// Map a scalar buffer through a color sequence onto a region of `dst`.
///
/// `scalars` supplies one value per pixel of `field` in row-major order; each
/// value, shifted by `offset`, is looked up through `sequence` with the chosen
/// interpolator and written at the corresponding coordinate of `dst`'s local
/// frame. Positions are in palette-entry units, like
/// [`ColorSequence::interpolate_with`]. The field is clipped against `dst`'s
/// addressable pixels; scalar indices stay anchored to the unclipped field,
/// so partial placement never shifts the mapping.
///
/// Fails with `SizeMismatch` when `scalars` holds fewer values than the field
/// has pixels, and with `EmptySequence` on an empty palette.
#[tracing::instrument(skip_all, fields(field = ?field, interpolator = ?interpolator))]
pub fn scalar_field(
    dst: &mut Interface<'_>,
    field: Field,
    scalars: &[f64],
    sequence: &ColorSequence,
    interpolator: Interpolator,
    offset: f64,
) -> PixfieldResult<()> {
    if scalars.len() < field.pixels() {
        return Err(PixfieldError::SizeMismatch {
            required: field.pixels(),
            actual: scalars.len(),
        });
    }

    let region = field.intersect(dst.visible_field());
    for (x, y) in region {
        let idx =
            (y - field.y) as usize * field.width as usize + (x - field.x) as usize;
        let color = sequence.interpolate_with(interpolator, scalars[idx] + offset)?;
        dst.set_pixel(x, y, color)?;
    }
    Ok(())
}

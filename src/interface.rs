use crate::color::Color;
use crate::error::{PixfieldError, PixfieldResult};
use crate::geometry::{Field, Screen};

/// Bytes per pixel in the buffer contract: one byte each for R, G, B, A.
pub const BYTES_PER_PIXEL: usize = 4;

/// Buffer-size query of the pixel contract.
pub const fn bytes_per_pixel() -> usize {
    BYTES_PER_PIXEL
}

/// Allocate a zero-initialized pixel buffer for `pixel_count` pixels.
///
/// A convenience for callers; the engine itself never allocates pixel memory
/// on an interface's behalf.
pub fn allocate_pixel_memory(pixel_count: usize) -> Vec<u8> {
    vec![0; pixel_count * BYTES_PER_PIXEL]
}

/// A screen bound to a concrete pixel buffer, optionally restricted to a
/// window.
///
/// The buffer is exclusively borrowed for the interface's lifetime; the engine
/// never retains it beyond a single operation. Coordinates passed to the
/// accessors are relative to the window when one is set, else to the full
/// screen; a windowed interface addresses the same underlying buffer at
/// translated offsets.
#[derive(Debug)]
pub struct Interface<'a> {
    screen: Screen,
    buffer: &'a mut [u8],
    window: Option<Field>,
}

impl<'a> Interface<'a> {
    /// Bind `buffer` to `screen`.
    ///
    /// Fails with `SizeMismatch` when the buffer cannot hold
    /// `screen.pixels() * 4` bytes.
    pub fn new(screen: Screen, buffer: &'a mut [u8]) -> PixfieldResult<Self> {
        let required = screen.pixels() * BYTES_PER_PIXEL;
        if buffer.len() < required {
            return Err(PixfieldError::SizeMismatch {
                required,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            screen,
            buffer,
            window: None,
        })
    }

    /// Bind `buffer` to `screen`, restricted to `window`.
    ///
    /// The window may extend past the screen; the out-of-screen portion is
    /// simply never addressable.
    pub fn windowed(screen: Screen, buffer: &'a mut [u8], window: Field) -> PixfieldResult<Self> {
        let mut interface = Self::new(screen, buffer)?;
        interface.window = Some(window);
        Ok(interface)
    }

    /// The bound screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The window restriction, if any.
    pub fn window(&self) -> Option<Field> {
        self.window
    }

    /// Iterable extent: the window's when set, else the screen's.
    pub fn extent(&self) -> (u32, u32) {
        match self.window {
            Some(window) => (window.width, window.height),
            None => (self.screen.width, self.screen.height),
        }
    }

    /// The full local frame as a field at the origin.
    pub fn local_field(&self) -> Field {
        let (width, height) = self.extent();
        Field::new(0, 0, width, height)
    }

    /// Portion of the local frame that maps to real screen pixels, in local
    /// coordinates. Equals [`Interface::local_field`] unless the window hangs
    /// past the screen edge.
    pub fn visible_field(&self) -> Field {
        let (ox, oy) = self.origin();
        let (width, height) = self.extent();
        Field::new(ox, oy, width, height)
            .clip_to(self.screen)
            .translated(-ox, -oy)
    }

    /// Window origin in the global frame, `(0, 0)` for an unwindowed
    /// interface.
    pub fn origin(&self) -> (i32, i32) {
        match self.window {
            Some(window) => (window.x, window.y),
            None => (0, 0),
        }
    }

    /// Resolve a local coordinate to a linear pixel offset in the buffer.
    ///
    /// Fails with `OutOfBounds` when the resolved global coordinate leaves the
    /// screen.
    pub fn coordinate_to_offset(&self, x: i32, y: i32) -> PixfieldResult<usize> {
        let (ox, oy) = self.origin();
        let gx = ox.wrapping_add(x);
        let gy = oy.wrapping_add(y);
        if !self.screen.contains(gx, gy) {
            return Err(PixfieldError::OutOfBounds {
                x: gx,
                y: gy,
                width: self.screen.width,
                height: self.screen.height,
            });
        }
        Ok(gy as usize * self.screen.width as usize + gx as usize)
    }

    /// Read the pixel at a local coordinate.
    pub fn get_pixel(&self, x: i32, y: i32) -> PixfieldResult<Color> {
        let offset = self.coordinate_to_offset(x, y)?;
        self.get_pixel_at_offset(offset)
    }

    /// Write the pixel at a local coordinate.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> PixfieldResult<()> {
        let offset = self.coordinate_to_offset(x, y)?;
        self.set_pixel_at_offset(offset, color)
    }

    /// Read the pixel at a raw linear offset, ignoring any window.
    pub fn get_pixel_at_offset(&self, offset: usize) -> PixfieldResult<Color> {
        let base = self.byte_base(offset)?;
        Ok(Color::from_bytes([
            self.buffer[base],
            self.buffer[base + 1],
            self.buffer[base + 2],
            self.buffer[base + 3],
        ]))
    }

    /// Write the pixel at a raw linear offset, ignoring any window.
    pub fn set_pixel_at_offset(&mut self, offset: usize, color: Color) -> PixfieldResult<()> {
        let base = self.byte_base(offset)?;
        self.buffer[base..base + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
        Ok(())
    }

    /// Fill every addressable pixel of the local frame with `color`.
    pub fn fill(&mut self, color: Color) -> PixfieldResult<()> {
        for (x, y) in self.visible_field() {
            self.set_pixel(x, y, color)?;
        }
        Ok(())
    }

    fn byte_base(&self, offset: usize) -> PixfieldResult<usize> {
        let pixels = self.screen.pixels();
        if offset >= pixels {
            return Err(PixfieldError::IndexOutOfRange {
                index: offset,
                len: pixels,
            });
        }
        Ok(offset * BYTES_PER_PIXEL)
    }
}

/// Convert a coordinate in `from`'s local frame into `to`'s local frame.
///
/// Resolves through the shared global frame: add `from`'s window origin, then
/// subtract `to`'s. Total; the result may lie outside `to`'s bounds and is
/// clipped by consumers.
pub fn translate(from: &Interface<'_>, point: (i32, i32), to: &Interface<'_>) -> (i32, i32) {
    let (fx, fy) = from.origin();
    let (tx, ty) = to.origin();
    (
        point.0.wrapping_add(fx).wrapping_sub(tx),
        point.1.wrapping_add(fy).wrapping_sub(ty),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_requires_sufficient_buffer() {
        let screen = Screen::new(4, 4).unwrap();
        let mut short = vec![0u8; screen.pixels() * BYTES_PER_PIXEL - 1];
        assert!(matches!(
            Interface::new(screen, &mut short),
            Err(PixfieldError::SizeMismatch {
                required: 64,
                actual: 63,
            })
        ));

        let mut exact = allocate_pixel_memory(screen.pixels());
        assert!(Interface::new(screen, &mut exact).is_ok());
    }

    #[test]
    fn allocate_pixel_memory_is_zeroed() {
        let memory = allocate_pixel_memory(3);
        assert_eq!(memory.len(), 3 * bytes_per_pixel());
        assert!(memory.iter().all(|&b| b == 0));
    }

    #[test]
    fn offsets_are_row_major() {
        let screen = Screen::new(4, 3).unwrap();
        let mut memory = allocate_pixel_memory(screen.pixels());
        let interface = Interface::new(screen, &mut memory).unwrap();
        assert_eq!(interface.coordinate_to_offset(0, 0).unwrap(), 0);
        assert_eq!(interface.coordinate_to_offset(3, 0).unwrap(), 3);
        assert_eq!(interface.coordinate_to_offset(0, 1).unwrap(), 4);
        assert_eq!(interface.coordinate_to_offset(2, 2).unwrap(), 10);
    }

    #[test]
    fn out_of_bounds_coordinates_fail() {
        let screen = Screen::new(4, 3).unwrap();
        let mut memory = allocate_pixel_memory(screen.pixels());
        let interface = Interface::new(screen, &mut memory).unwrap();
        assert!(matches!(
            interface.coordinate_to_offset(4, 0),
            Err(PixfieldError::OutOfBounds { .. })
        ));
        assert!(matches!(
            interface.coordinate_to_offset(0, -1),
            Err(PixfieldError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn pixel_round_trip_through_buffer_bytes() {
        let screen = Screen::new(2, 2).unwrap();
        let mut memory = allocate_pixel_memory(screen.pixels());
        let mut interface = Interface::new(screen, &mut memory).unwrap();
        let color = Color::from_rgba(10, 20, 30, 40);
        interface.set_pixel(1, 1, color).unwrap();
        assert_eq!(interface.get_pixel(1, 1).unwrap(), color);
        drop(interface);
        // pixel (1, 1) of a 2x2 screen starts at byte 12
        assert_eq!(&memory[12..16], &[10, 20, 30, 40]);
    }

    #[test]
    fn windowed_coordinates_address_translated_offsets() {
        let screen = Screen::new(8, 8).unwrap();
        let mut memory = allocate_pixel_memory(screen.pixels());
        let window = Field::new(2, 3, 4, 4);
        let mut interface = Interface::windowed(screen, &mut memory, window).unwrap();
        assert_eq!(interface.extent(), (4, 4));
        // local (0, 0) is global (2, 3)
        assert_eq!(interface.coordinate_to_offset(0, 0).unwrap(), 3 * 8 + 2);
        interface.set_pixel(1, 1, Color::WHITE).unwrap();
        drop(interface);
        let offset = (4 * 8 + 3) * BYTES_PER_PIXEL;
        assert_eq!(&memory[offset..offset + 4], &[255, 255, 255, 255]);
    }

    #[test]
    fn window_past_screen_edge_limits_visibility() {
        let screen = Screen::new(8, 8).unwrap();
        let mut memory = allocate_pixel_memory(screen.pixels());
        let window = Field::new(6, 6, 4, 4);
        let interface = Interface::windowed(screen, &mut memory, window).unwrap();
        assert_eq!(interface.visible_field(), Field::new(0, 0, 2, 2));
        assert!(interface.get_pixel(3, 3).is_err());
        assert!(interface.get_pixel(1, 1).is_ok());
    }

    #[test]
    fn offset_accessors_ignore_window_but_check_bounds() {
        let screen = Screen::new(2, 2).unwrap();
        let mut memory = allocate_pixel_memory(screen.pixels());
        let window = Field::new(1, 1, 1, 1);
        let mut interface = Interface::windowed(screen, &mut memory, window).unwrap();
        interface
            .set_pixel_at_offset(0, Color::from_rgba(1, 2, 3, 4))
            .unwrap();
        assert_eq!(
            interface.get_pixel_at_offset(0).unwrap(),
            Color::from_rgba(1, 2, 3, 4)
        );
        assert!(matches!(
            interface.get_pixel_at_offset(4),
            Err(PixfieldError::IndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn fill_touches_only_visible_pixels() {
        let screen = Screen::new(4, 4).unwrap();
        let mut memory = allocate_pixel_memory(screen.pixels());
        let window = Field::new(3, 3, 2, 2);
        let mut interface = Interface::windowed(screen, &mut memory, window).unwrap();
        interface.fill(Color::WHITE).unwrap();
        drop(interface);
        let lit: usize = memory.chunks_exact(4).filter(|px| px[3] == 255).count();
        assert_eq!(lit, 1);
        assert_eq!(&memory[(3 * 4 + 3) * 4..], &[255, 255, 255, 255]);
    }

    #[test]
    fn translate_round_trips_between_frames() {
        let screen = Screen::new(16, 16).unwrap();
        let mut mem_a = allocate_pixel_memory(screen.pixels());
        let mut mem_b = allocate_pixel_memory(screen.pixels());
        let a = Interface::windowed(screen, &mut mem_a, Field::new(2, 3, 4, 4)).unwrap();
        let b = Interface::windowed(screen, &mut mem_b, Field::new(5, 1, 8, 8)).unwrap();

        let in_b = translate(&a, (1, 1), &b);
        assert_eq!(in_b, (-2, 3));
        assert_eq!(translate(&b, in_b, &a), (1, 1));
    }

    #[test]
    fn translate_without_windows_is_identity() {
        let screen = Screen::new(4, 4).unwrap();
        let mut mem_a = allocate_pixel_memory(screen.pixels());
        let mut mem_b = allocate_pixel_memory(screen.pixels());
        let a = Interface::new(screen, &mut mem_a).unwrap();
        let b = Interface::new(screen, &mut mem_b).unwrap();
        assert_eq!(translate(&a, (2, 3), &b), (2, 3));
    }
}

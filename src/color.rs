/// Packed 32-bit RGBA color, one 8-bit channel per byte.
///
/// The big-endian byte order of the packed value is `[r, g, b, a]`, matching the
/// pixel buffer byte contract, so a color round-trips losslessly between its
/// packed form and buffer bytes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Transparent black, the zero value of a freshly allocated buffer.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);

    /// Pack four channels into a color.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Unpack into `(r, g, b, a)`. Lossless inverse of [`Color::from_rgba`].
    pub const fn to_rgba(self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = self.0.to_be_bytes();
        (r, g, b, a)
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Buffer representation: `[r, g, b, a]`.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Rebuild a color from its buffer representation.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }
}

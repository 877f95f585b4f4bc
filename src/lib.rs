//! pixfield is a 2D raster pixel-compositing engine for memory-constrained
//! display surfaces such as LED matrices and embedded framebuffers.
//!
//! It operates purely on caller-owned linear RGBA8 buffers — no windowing
//! system, no event loop, no GPU. The building blocks:
//!
//! - Describe geometry with a [`Screen`] and rectangular [`Field`]s
//! - Bind a buffer to a screen (optionally windowed) as an [`Interface`]
//! - Copy or blend regions with [`blit`] and [`compose`] under a pluggable
//!   [`Compositor`]
//! - Linearize output through the fixed [`GAMMA8`] table and interpolate
//!   palettes with a [`ColorSequence`]
//!
//! Every operation is a bounded, deterministic, single-threaded pass; pixel
//! scans all traverse the same row-major field iterator, so output is
//! reproducible byte-for-byte.
#![forbid(unsafe_code)]

pub mod color;
pub mod compositor;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod geometry;
pub mod interface;
pub mod sequence;

pub use color::Color;
pub use compositor::{BitwiseOp, ChannelOp, Compositor};
pub use draw::{blit, compose, scalar_field};
pub use error::{PixfieldError, PixfieldResult};
pub use gamma::{GAMMA8, gamma_correct};
pub use geometry::{Field, FieldIter, Screen};
pub use interface::{
    BYTES_PER_PIXEL, Interface, allocate_pixel_memory, bytes_per_pixel, translate,
};
pub use sequence::{ColorSequence, Interpolator};

use crate::color::Color;

/// Per-channel bitwise operator for [`Compositor::Bitwise`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

/// Per-channel numeric operator for [`Compositor::Channelwise`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChannelOp {
    Min,
    Max,
    AddSaturate,
    SubSaturate,
    /// `(src * dst + 127) / 255`, rounding to nearest.
    Multiply,
}

/// A pluggable per-pixel combining function.
///
/// A closed set of blend modes; every variant is a pure total function of
/// `(src, dst)` over the full 8-bit channel domain and carries no buffer
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Compositor {
    /// Overwrite with the source pixel, ignoring destination and alpha.
    #[default]
    Direct,
    /// Write transparent black regardless of either input.
    Clear,
    /// Un-premultiplied Porter-Duff source-over using truncating integer
    /// division:
    ///
    /// `out.c = (src.c*src.a + dst.c*(255 - src.a)) / 255` per RGB channel,
    /// `out.a = src.a + dst.a*(255 - src.a)/255`.
    ///
    /// The truncation rule is a committed contract; it makes the
    /// `src.a == 0` and `src.a == 255` identities exact.
    Alpha,
    /// Per-channel bitwise combination.
    Bitwise(BitwiseOp),
    /// Per-channel numeric combination applied independently to R, G, B, A.
    Channelwise(ChannelOp),
}

impl Compositor {
    /// Combine a source and destination pixel.
    pub fn combine(self, src: Color, dst: Color) -> Color {
        match self {
            Self::Direct => src,
            Self::Clear => Color::TRANSPARENT,
            Self::Alpha => alpha_over(src, dst),
            Self::Bitwise(op) => {
                let f = match op {
                    BitwiseOp::And => |s: u8, d: u8| s & d,
                    BitwiseOp::Or => |s: u8, d: u8| s | d,
                    BitwiseOp::Xor => |s: u8, d: u8| s ^ d,
                };
                per_channel(src, dst, f)
            }
            Self::Channelwise(op) => {
                let f = match op {
                    ChannelOp::Min => |s: u8, d: u8| s.min(d),
                    ChannelOp::Max => |s: u8, d: u8| s.max(d),
                    ChannelOp::AddSaturate => |s: u8, d: u8| s.saturating_add(d),
                    ChannelOp::SubSaturate => |s: u8, d: u8| s.saturating_sub(d),
                    ChannelOp::Multiply => |s: u8, d: u8| mul_div255(s, d),
                };
                per_channel(src, dst, f)
            }
        }
    }
}

fn per_channel(src: Color, dst: Color, f: impl Fn(u8, u8) -> u8) -> Color {
    let (sr, sg, sb, sa) = src.to_rgba();
    let (dr, dg, db, da) = dst.to_rgba();
    Color::from_rgba(f(sr, dr), f(sg, dg), f(sb, db), f(sa, da))
}

fn alpha_over(src: Color, dst: Color) -> Color {
    let (sr, sg, sb, sa) = src.to_rgba();
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let (dr, dg, db, da) = dst.to_rgba();
    let sa32 = u32::from(sa);
    let inv = 255 - sa32;
    let ch = |s: u8, d: u8| ((u32::from(s) * sa32 + u32::from(d) * inv) / 255) as u8;
    let a = (sa32 + u32::from(da) * inv / 255) as u8;
    Color::from_rgba(ch(sr, dr), ch(sg, dg), ch(sb, db), a)
}

fn mul_div255(x: u8, y: u8) -> u8 {
    ((u32::from(x) * u32::from(y) + 127) / 255) as u8
}

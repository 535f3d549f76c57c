/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Source-over blend of `self` onto an opaque `dst`.
    ///
    /// Integer arithmetic with round-to-nearest so results are identical on
    /// every platform. The scene always paints wall and floor first, so the
    /// destination really is opaque by the time translucent shapes land.
    pub fn over(self, dst: Rgba) -> Rgba {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }
        let blend = |s: u8, d: u8| -> u8 {
            let v = u16::from(s) * u16::from(self.a) + u16::from(d) * u16::from(255 - self.a);
            ((v + 127) / 255) as u8
        };
        Rgba {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a: 255,
        }
    }
}

/// The fixed room-and-dog palette.
pub mod palette {
    use super::Rgba;

    pub const WALL: Rgba = Rgba::rgb(0xfe, 0xf3, 0xe2);
    pub const FLOOR: Rgba = Rgba::rgb(0xf0, 0xe6, 0xd3);
    pub const FLOOR_LINE: Rgba = Rgba::rgb(0xe0, 0xd4, 0xbf);
    pub const BASEBOARD: Rgba = Rgba::rgb(0xd4, 0xc4, 0xa8);

    pub const WINDOW_SKY: Rgba = Rgba::rgb(0xbd, 0xe0, 0xfe);
    pub const WINDOW_FRAME: Rgba = Rgba::rgb(0xf5, 0xf0, 0xe8);
    pub const SUN: Rgba = Rgba::rgb(0xff, 0xd1, 0x66);

    pub const POT: Rgba = Rgba::rgb(0xd4, 0x88, 0x6b);
    pub const POT_RIM: Rgba = Rgba::rgb(0xc2, 0x78, 0x56);
    pub const LEAF: Rgba = Rgba::rgb(0x7c, 0xb9, 0x7c);
    pub const LEAF_DARK: Rgba = Rgba::rgb(0x6a, 0xaa, 0x6a);

    pub const BED: Rgba = Rgba::rgb(0xe8, 0xb4, 0xc8);
    pub const BED_INNER: Rgba = Rgba::rgb(0xd9, 0x9a, 0xb5);

    pub const BOWL: Rgba = Rgba::rgb(0x88, 0xc9, 0xe8);
    pub const BOWL_INNER: Rgba = Rgba::rgb(0x70, 0xb8, 0xd9);
    pub const KIBBLE: Rgba = Rgba::rgb(0xc9, 0xa9, 0x6e);

    pub const COAT: Rgba = Rgba::rgb(0xf5, 0xd6, 0xa0);
    pub const COAT_SPOT: Rgba = Rgba::rgb(0xe8, 0xc0, 0x88);
    pub const EAR: Rgba = Rgba::rgb(0xd4, 0xa6, 0x70);
    pub const EAR_INNER: Rgba = Rgba::rgb(0xe8, 0xb4, 0xc8);
    pub const FEATURE: Rgba = Rgba::rgb(0x5a, 0x40, 0x30);
    pub const EYE_SHINE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const MOUTH: Rgba = Rgba::rgb(0xd4, 0x70, 0x70);
    pub const SNOOZE: Rgba = Rgba::rgb(0x88, 0xc9, 0xe8);

    pub const HEART_PINK: Rgba = Rgba::rgb(0xe8, 0xb4, 0xc8);
    pub const HEART_RED: Rgba = Rgba::rgb(0xfc, 0xa5, 0xa5);

    /// Soft shadow under the dog, 8% black.
    pub const SHADOW: Rgba = Rgba::rgba(0, 0, 0, 20);
    /// Cheek blush, 60% pink.
    pub const BLUSH: Rgba = Rgba::rgba(0xe8, 0xb4, 0xc8, 153);
}

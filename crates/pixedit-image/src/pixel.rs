/// A pixel unpacked into its four 8-bit channels.
///
/// The packed representation stores alpha in bits `[31:24]`, red in `[23:16]`,
/// green in `[15:8]` and blue in `[7:0]`.
///
/// # Examples
///
/// ```
/// use pixedit_image::Argb;
///
/// let pixel = Argb::from_packed(0x80C8_9664);
///
/// assert_eq!(pixel, Argb::new(128, 200, 150, 100));
/// assert_eq!(pixel.to_packed(), 0x80C8_9664);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb {
    /// Alpha channel
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Argb {
    /// Create a pixel from its channels.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create a fully opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(u8::MAX, r, g, b)
    }

    /// Unpack a 32-bit ARGB value.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Pack the channels into a 32-bit ARGB value.
    pub const fn to_packed(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb::from_packed(value)
    }
}

impl From<Argb> for u32 {
    fn from(pixel: Argb) -> Self {
        pixel.to_packed()
    }
}

//! Icon values and tab-size normalization

use std::fmt;

/// Default edge length, in pixels, of an icon shown on a dockable tab
pub const TAB_ICON_SIZE: u32 = 16;

/// An icon reference with its pixel dimensions
///
/// The toolkit owns the actual image data; the docking core only needs a
/// stable identity (`name`) and the size it will be drawn at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Icon {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// True if the icon already fits inside a `size` x `size` square
    pub fn fits(&self, size: u32) -> bool {
        self.width <= size && self.height <= size
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}

/// Scale an icon down so that it fits a `size` x `size` tab slot
///
/// Aspect ratio is preserved and neither dimension drops below one pixel.
/// Icons that already fit are returned unchanged.
pub fn scale_icon_as_needed(icon: Option<Icon>, size: u32) -> Option<Icon> {
    let icon = icon?;
    if icon.fits(size) || size == 0 {
        return Some(icon);
    }

    let longest = icon.width.max(icon.height) as u64;
    let scale = |dim: u32| -> u32 { ((dim as u64 * size as u64) / longest).max(1) as u32 };

    Some(Icon {
        width: scale(icon.width),
        height: scale(icon.height),
        name: icon.name,
    })
}

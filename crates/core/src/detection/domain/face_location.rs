use serde::Serialize;

use crate::shared::region::Region;

/// A face box as `(top, right, bottom, left)` pixel offsets from the
/// image's top-left corner. Serializes as a four-element JSON array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "[u32; 4]")]
pub struct FaceLocation {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl FaceLocation {
    /// Remaps `(x, y, w, h)` to `(y, x + w, y + h, x)`, clipped to the
    /// image so `left <= right <= width` and `top <= bottom <= height`.
    pub fn from_region(region: &Region, width: u32, height: u32) -> Self {
        let clip = |v: i64, max: u32| v.clamp(0, max as i64) as u32;
        let left = clip(region.x as i64, width);
        let top = clip(region.y as i64, height);
        let right = clip(region.right() as i64, width).max(left);
        let bottom = clip(region.bottom() as i64, height).max(top);
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<FaceLocation> for [u32; 4] {
    fn from(loc: FaceLocation) -> Self {
        [loc.top, loc.right, loc.bottom, loc.left]
    }
}

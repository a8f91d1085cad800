//! Compaction of module patterns into bar rectangles.
//!
//! Each maximal run of bars becomes one filled, axis-aligned [Rect]. The
//! rectangles map directly to vector path commands, see [Rect::path] and
//! [path_data].
use core::fmt;

use crate::bits::BitString;
use crate::error::GeometryError;

/// Axis-aligned filled rectangle.
///
/// The coordinate system starts in the top left corner with a horizontal
/// x-axis and a vertical y-axis pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate of the right edge (exclusive).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Drawing instructions for this rectangle.
    ///
    /// An absolute move to the top left corner, then clockwise around the
    /// outline with relative draws. This is the `M x,y h w v h h -w z` shape.
    pub fn path(&self) -> [PathSegment; 5] {
        [
            PathSegment::MoveTo(self.x, self.y),
            PathSegment::Horizontal(self.width),
            PathSegment::Vertical(self.height),
            PathSegment::Horizontal(-self.width),
            PathSegment::Close,
        ]
    }
}

/// Formats the rectangle as SVG path data, e.g. `M0,0h4v10h-4z`.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.path()
            .iter()
            .try_for_each(|segment| fmt::Display::fmt(segment, f))
    }
}

/// Segment of a vector graphics path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Absolute move without drawing, starts a new subpath.
    ///
    /// This is like a `M` entry in a SVG path.
    MoveTo(f64, f64),
    /// A horizontal draw, relative distance.
    ///
    /// This is like a `h` entry in a SVG path.
    Horizontal(f64),
    /// A vertical draw, relative distance.
    ///
    /// This is like a `v` entry in a SVG path.
    Vertical(f64),
    /// Close the current subpath.
    ///
    /// This is like a `z` entry in a SVG path.
    Close,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(x, y) => write!(f, "M{},{}", x, y),
            Self::Horizontal(n) => write!(f, "h{}", n),
            Self::Vertical(n) => write!(f, "v{}", n),
            Self::Close => f.write_str("z"),
        }
    }
}

impl BitString {
    /// Compute the bar rectangles for this pattern.
    ///
    /// Every bar is `bar_height` tall and starts at `y = 0`. A module is
    /// `module_width` wide, so a run of `n` bars starting at module `i`
    /// becomes a rectangle at `x = i * module_width` with width
    /// `n * module_width`. The rectangles are ordered by ascending `x`.
    pub fn bars(&self, module_width: f64, bar_height: f64) -> Result<Vec<Rect>, GeometryError> {
        check_positive(module_width).map_err(GeometryError::InvalidModuleWidth)?;
        check_positive(bar_height).map_err(GeometryError::InvalidBarHeight)?;
        Ok(self
            .runs()
            .map(|run| {
                Rect::new(
                    run.start as f64 * module_width,
                    0.0,
                    run.len as f64 * module_width,
                    bar_height,
                )
            })
            .collect())
    }
}

/// Turn a module pattern into one rectangle per maximal run of `'1'`.
///
/// Fails if `bits` is empty, contains anything but `'0'` and `'1'`, or if
/// one of the dimensions is not a positive finite number.
///
/// # Example
///
/// ```rust
/// # use barpath::geometry::{compact, Rect};
/// let bars = compact("1101", 2.0, 10.0).unwrap();
/// assert_eq!(bars, [Rect::new(0.0, 0.0, 4.0, 10.0), Rect::new(6.0, 0.0, 2.0, 10.0)]);
/// assert_eq!(bars[0].to_string(), "M0,0h4v10h-4z");
/// ```
pub fn compact(bits: &str, module_width: f64, bar_height: f64) -> Result<Vec<Rect>, GeometryError> {
    BitString::new(bits)?.bars(module_width, bar_height)
}

/// Concatenated path data of all rectangles, usable as a SVG `d` attribute.
pub fn path_data(rects: &[Rect]) -> String {
    rects.iter().map(Rect::to_string).collect()
}

pub(crate) fn check_positive(value: f64) -> Result<f64, f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(value)
    }
}

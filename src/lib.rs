//! Vector bar geometry for one dimensional barcodes.
//!
//! A symbology encoder (Code 128, EAN-13, ...) turns text into a pattern of
//! modules, where `1` is a bar and `0` a space. This crate takes it from there:
//! every maximal run of bars becomes one filled rectangle, ready to be drawn
//! on any vector surface, written as SVG path data or as a complete SVG
//! document.
//!
//! The encoders themselves are not part of this crate. Plug one in by
//! implementing [Encoder] or with [encoder::from_fn]. Text which already is
//! a module pattern can be rendered with [RawEncoder].
//!
//! # Example
//!
//! ```rust
//! use barpath::{Barcode, RawEncoder, RenderOptions, Symbology};
//!
//! let options = RenderOptions::default()
//!     .with_format(Symbology::Raw)
//!     .with_height(50.0)
//!     .with_text("demo");
//! let barcode = Barcode::render("11010010000", &RawEncoder, &options).unwrap();
//! assert_eq!(barcode.bars().len(), 3);
//! let svg = barpath::svg::to_svg(&barcode);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! For the bare geometry use [geometry::compact]:
//!
//! ```rust
//! let bars = barpath::geometry::compact("0011", 1.0, 10.0).unwrap();
//! assert_eq!((bars[0].x, bars[0].width), (2.0, 2.0));
//! ```
#![forbid(unsafe_code)]

mod barcode;
pub mod bits;
pub mod encoder;
mod error;
pub mod geometry;
mod options;
pub mod svg;

pub use barcode::{Barcode, Renderer};
pub use bits::BitString;
pub use encoder::{Encoder, Encoding, RawEncoder, Symbology};
pub use error::{EncodeError, Error, ErrorKind, GeometryError};
pub use geometry::{compact, PathSegment, Rect};
pub use options::{
    RenderOptions, DEFAULT_HEIGHT, DEFAULT_MODULE_WIDTH, DEFAULT_NORMAL_WIDTH,
    MIN_NATURAL_MODULE_WIDTH,
};

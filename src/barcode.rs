//! Rendering of encoded barcodes.
use tracing::{debug, trace};

use crate::encoder::{Encoder, Encoding, Symbology};
use crate::error::{EncodeError, Error, GeometryError};
use crate::geometry::{check_positive, path_data, Rect};
use crate::options::RenderOptions;

/// A rendered barcode.
///
/// Holds everything needed to draw the barcode: the bar rectangles, the
/// surface size, the label and the colors. Created by [Barcode::render] or
/// [Barcode::from_encoding], never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Barcode {
    format: Symbology,
    encoding: Encoding,
    bars: Vec<Rect>,
    module_width: f64,
    height: f64,
    surface_width: f64,
    label: Option<String>,
    line_color: String,
    text_color: String,
    background: String,
    font_size: f64,
    text_margin: f64,
}

impl Barcode {
    /// Encode `value` with `encoder` and compute the bars.
    ///
    /// The format is taken from `options`. Fails with
    /// [EncodeError::InvalidFormat] if the encoder does not support it, and
    /// passes on any error of the encoder.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use barpath::{Barcode, RawEncoder, RenderOptions, Symbology};
    /// let options = RenderOptions::default()
    ///     .with_format(Symbology::Raw)
    ///     .with_height(10.0);
    /// let barcode = Barcode::render("1101", &RawEncoder, &options).unwrap();
    /// assert_eq!(barcode.path_data(), "M0,0h4v10h-4zM6,0h2v10h-2z");
    /// assert_eq!(barcode.surface_width(), 8.0);
    /// ```
    pub fn render<E: Encoder + ?Sized>(
        value: &str,
        encoder: &E,
        options: &RenderOptions,
    ) -> Result<Self, Error> {
        let format = options.format;
        if !encoder.supports(format) {
            debug!(%format, "encoder does not support format");
            return Err(EncodeError::invalid_format(format.name()).into());
        }
        let encoding = encoder.encode(value, format)?;
        trace!(%format, modules = encoding.data.len(), "encoded value");
        Self::from_encoding(encoding, options)
    }

    /// Compute the bars for an existing encoding.
    pub fn from_encoding(encoding: Encoding, options: &RenderOptions) -> Result<Self, Error> {
        let bars = encoding.data.bars(options.module_width, options.height)?;
        let natural_width = encoding.data.len() as f64 * options.module_width;
        let surface_width = if options.uses_normal_width() {
            check_positive(options.normal_width).map_err(GeometryError::InvalidSurfaceWidth)?
        } else {
            natural_width
        };
        let label = match &options.text {
            Some(text) => Some(text.clone()),
            None if options.display_value && !encoding.text.is_empty() => {
                Some(encoding.text.clone())
            }
            None => None,
        };
        debug!(
            format = %options.format,
            modules = encoding.data.len(),
            bars = bars.len(),
            surface_width,
            "rendered barcode"
        );
        Ok(Self {
            format: options.format,
            encoding,
            bars,
            module_width: options.module_width,
            height: options.height,
            surface_width,
            label,
            line_color: options.line_color.clone(),
            text_color: options.text_color.clone(),
            background: options.background.clone(),
            font_size: options.font_size,
            text_margin: options.text_margin,
        })
    }

    pub fn format(&self) -> Symbology {
        self.format
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// The bar rectangles, ordered from left to right.
    pub fn bars(&self) -> &[Rect] {
        &self.bars
    }

    pub fn module_width(&self) -> f64 {
        self.module_width
    }

    /// Height of the bars.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width covered by the modules: number of modules times module width.
    pub fn natural_width(&self) -> f64 {
        self.encoding.data.len() as f64 * self.module_width
    }

    /// Width of the drawing surface.
    ///
    /// This is the natural width unless the module width is below 2, then the
    /// fixed `normal_width` of the options is used.
    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    /// Horizontal offset which centers the bars on the surface.
    pub fn offset_x(&self) -> f64 {
        ((self.surface_width - self.natural_width()) / 2.0).max(0.0)
    }

    /// The label text, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn line_color(&self) -> &str {
        &self.line_color
    }

    pub fn text_color(&self) -> &str {
        &self.text_color
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn text_margin(&self) -> f64 {
        self.text_margin
    }

    /// SVG path data of all bars.
    pub fn path_data(&self) -> String {
        path_data(&self.bars)
    }

    /// Compute a unicode representation ("ASCII art") of the modules.
    ///
    /// One character per module with a quiet zone on both sides. This is
    /// intended as a demo functionality.
    pub fn unicode(&self) -> String {
        const QUIET_ZONE: usize = 4;
        const CHAR: [char; 2] = [' ', '█'];
        let mut out = String::with_capacity((self.encoding.data.len() + 2 * QUIET_ZONE) * 3);
        out.extend(core::iter::repeat(CHAR[0]).take(QUIET_ZONE));
        out.extend(self.encoding.data.modules().map(|bar| CHAR[bar as usize]));
        out.extend(core::iter::repeat(CHAR[0]).take(QUIET_ZONE));
        out
    }
}

#[derive(Debug, Clone)]
struct Rendered {
    value: String,
    options: RenderOptions,
    barcode: Barcode,
}

/// Re-renders a barcode when its inputs change.
///
/// Keeps the last successful result. Calling [update](Renderer::update) with
/// the same value and options again returns it without encoding.
///
/// ```rust
/// # use barpath::{RawEncoder, RenderOptions, Renderer, Symbology};
/// let mut renderer = Renderer::new(RawEncoder);
/// let options = RenderOptions::default().with_format(Symbology::Raw);
/// assert_eq!(renderer.update("101", &options).unwrap().bars().len(), 2);
/// assert_eq!(renderer.update("111", &options).unwrap().bars().len(), 1);
/// assert!(renderer.update("121", &options).is_err());
/// assert_eq!(renderer.current().unwrap().bars().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<E> {
    encoder: E,
    last: Option<Rendered>,
}

impl<E: Encoder> Renderer<E> {
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            last: None,
        }
    }

    /// Get the barcode for `value` and `options`, rendering only if they
    /// differ from the previous call.
    ///
    /// On error the previous barcode stays available through
    /// [current](Self::current).
    pub fn update(&mut self, value: &str, options: &RenderOptions) -> Result<&Barcode, Error> {
        let rendered = match self.last.take() {
            Some(last) if last.value == value && last.options == *options => {
                trace!("inputs unchanged, keeping barcode");
                last
            }
            previous => match Barcode::render(value, &self.encoder, options) {
                Ok(barcode) => Rendered {
                    value: value.to_owned(),
                    options: options.clone(),
                    barcode,
                },
                Err(err) => {
                    debug!(error = %err, "render failed, keeping previous barcode");
                    self.last = previous;
                    return Err(err);
                }
            },
        };
        Ok(&self.last.insert(rendered).barcode)
    }

    /// The last successfully rendered barcode.
    pub fn current(&self) -> Option<&Barcode> {
        self.last.as_ref().map(|last| &last.barcode)
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Forget the last barcode, the next update renders again.
    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn into_encoder(self) -> E {
        self.encoder
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::encoder::{from_fn, RawEncoder};
    use crate::error::ErrorKind;
    use crate::geometry::Rect;
    use pretty_assertions::assert_eq;

    /// Pretends to encode digits: every digit `d` becomes `1` repeated `d`
    /// times followed by a `0`.
    struct DigitEncoder {
        calls: Cell<usize>,
    }

    impl DigitEncoder {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl Encoder for DigitEncoder {
        fn supports(&self, format: Symbology) -> bool {
            format == Symbology::Code128
        }

        fn encode(&self, text: &str, format: Symbology) -> Result<Encoding, EncodeError> {
            self.calls.set(self.calls.get() + 1);
            let mut data = String::new();
            for ch in text.chars() {
                let d = ch
                    .to_digit(10)
                    .ok_or_else(|| EncodeError::invalid_value(format, "digits only"))?;
                data.extend(core::iter::repeat('1').take(d as usize));
                data.push('0');
            }
            Encoding::new(format, data, format!("<{}>", text))
        }
    }

    fn raw() -> RenderOptions {
        RenderOptions::default().with_format(Symbology::Raw)
    }

    #[test]
    fn test_render_raw() {
        let barcode = Barcode::render("0011", &RawEncoder, &raw().with_height(10.0)).unwrap();
        assert_eq!(barcode.bars(), &[Rect::new(4.0, 0.0, 4.0, 10.0)]);
        assert_eq!(barcode.natural_width(), 8.0);
        assert_eq!(barcode.surface_width(), 8.0);
        assert_eq!(barcode.offset_x(), 0.0);
        assert_eq!(barcode.format(), Symbology::Raw);
        assert_eq!(barcode.label(), None);
    }

    #[test]
    fn test_render_with_encoder() {
        let enc = DigitEncoder::new();
        let barcode = Barcode::render("21", &enc, &RenderOptions::default()).unwrap();
        assert_eq!(barcode.encoding().data.as_str(), "11010");
        assert_eq!(
            barcode.bars(),
            &[
                Rect::new(0.0, 0.0, 4.0, 100.0),
                Rect::new(6.0, 0.0, 2.0, 100.0)
            ]
        );
        assert_eq!(barcode.path_data(), "M0,0h4v100h-4zM6,0h2v100h-2z");
    }

    #[test]
    fn test_surface_width_fallback() {
        let barcode = Barcode::render("1010", &RawEncoder, &raw().with_module_width(1.0)).unwrap();
        assert_eq!(barcode.natural_width(), 4.0);
        assert_eq!(barcode.surface_width(), 300.0);
        assert_eq!(barcode.offset_x(), 148.0);

        let barcode = Barcode::render(
            "1010",
            &RawEncoder,
            &raw().with_module_width(1.5).with_normal_width(5.0),
        )
        .unwrap();
        assert_eq!(barcode.surface_width(), 5.0);
        // wider than the surface, no negative offset
        assert_eq!(barcode.natural_width(), 6.0);
        assert_eq!(barcode.offset_x(), 0.0);

        let err = Barcode::render(
            "1010",
            &RawEncoder,
            &raw().with_module_width(1.0).with_normal_width(0.0),
        )
        .unwrap_err();
        assert_eq!(err, Error::Geometry(GeometryError::InvalidSurfaceWidth(0.0)));
    }

    #[test]
    fn test_label() {
        let enc = DigitEncoder::new();
        let plain = Barcode::render("1", &enc, &RenderOptions::default()).unwrap();
        assert_eq!(plain.label(), None);

        let shown = RenderOptions::default().with_display_value(true);
        let encoded = Barcode::render("1", &enc, &shown).unwrap();
        assert_eq!(encoded.label(), Some("<1>"));

        let custom = shown.with_text("custom");
        let custom = Barcode::render("1", &enc, &custom).unwrap();
        assert_eq!(custom.label(), Some("custom"));

        // the raw encoder has no text to display
        let unlabeled = Barcode::render("1", &RawEncoder, &raw().with_display_value(true)).unwrap();
        assert_eq!(unlabeled.label(), None);
    }

    #[test]
    fn test_errors() {
        let enc = DigitEncoder::new();
        let err = Barcode::render("12", &enc, &RenderOptions::default().with_format(Symbology::Ean13))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(enc.calls.get(), 0);

        let err = Barcode::render("1x", &enc, &RenderOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = Barcode::render("1", &enc, &RenderOptions::default().with_height(0.0))
            .unwrap_err();
        assert_eq!(err, Error::Geometry(GeometryError::InvalidBarHeight(0.0)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = Barcode::render("1", &enc, &RenderOptions::default().with_module_width(-1.0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_encoder_returning_garbage() {
        // an encoder which does not validate its own output
        let enc = from_fn(|_: &str, format| Encoding::new(format, "1012", ""));
        let err = Barcode::render("x", &enc, &RenderOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unicode() {
        let barcode = Barcode::render("1101", &RawEncoder, &raw()).unwrap();
        assert_eq!(barcode.unicode(), "    ██ █    ");
    }

    #[test]
    fn test_renderer_caches() {
        let mut renderer = Renderer::new(DigitEncoder::new());
        let options = RenderOptions::default();

        let first = renderer.update("12", &options).unwrap().clone();
        assert_eq!(renderer.encoder().calls.get(), 1);
        let again = renderer.update("12", &options).unwrap().clone();
        assert_eq!(renderer.encoder().calls.get(), 1);
        assert_eq!(first, again);

        renderer.update("13", &options).unwrap();
        assert_eq!(renderer.encoder().calls.get(), 2);

        let taller = options.clone().with_height(50.0);
        assert_eq!(renderer.update("13", &taller).unwrap().height(), 50.0);
        assert_eq!(renderer.encoder().calls.get(), 3);

        renderer.clear();
        assert!(renderer.current().is_none());
        renderer.update("13", &taller).unwrap();
        assert_eq!(renderer.encoder().calls.get(), 4);
    }

    #[test]
    fn test_renderer_keeps_previous_on_error() {
        let mut renderer = Renderer::new(DigitEncoder::new());
        let options = RenderOptions::default();
        renderer.update("3", &options).unwrap();

        let err = renderer.update("3a", &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        let current = renderer.current().unwrap();
        assert_eq!(current.encoding().data.as_str(), "1110");

        // failed inputs are not cached
        assert!(renderer.update("3a", &options).is_err());
        assert_eq!(renderer.encoder().calls.get(), 3);

        // the previous inputs still hit the cache
        renderer.update("3", &options).unwrap();
        assert_eq!(renderer.encoder().calls.get(), 3);
        assert_eq!(renderer.into_encoder().calls.get(), 3);
    }
}

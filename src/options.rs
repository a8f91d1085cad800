use crate::encoder::Symbology;

/// Default width of one module.
pub const DEFAULT_MODULE_WIDTH: f64 = 2.0;
/// Default bar height.
pub const DEFAULT_HEIGHT: f64 = 100.0;
/// Default surface width used when modules are narrower than [MIN_NATURAL_MODULE_WIDTH].
pub const DEFAULT_NORMAL_WIDTH: f64 = 300.0;
/// Below this module width the surface gets the fixed `normal_width`.
pub const MIN_NATURAL_MODULE_WIDTH: f64 = 2.0;

/// Options for rendering a barcode.
///
/// The [default](RenderOptions::default) renders CODE128 with two units per module,
/// 100 units high, black bars on white and no label. Options are changed with the
/// `with_*` methods:
///
/// ```rust
/// # use barpath::{RenderOptions, Symbology};
/// let options = RenderOptions::default()
///     .with_format(Symbology::Ean13)
///     .with_module_width(3.0)
///     .with_text("5 901234 123457");
/// assert_eq!(options.height, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderOptions {
    /// Symbology handed to the encoder.
    pub format: Symbology,
    /// Label shown below the bars. Nothing is shown if `None`, unless
    /// `display_value` is set.
    pub text: Option<String>,
    /// Show the encoder's text as label if `text` is `None`.
    pub display_value: bool,
    /// Width of a single module.
    pub module_width: f64,
    /// Height of the bars.
    pub height: f64,
    /// Surface width used if `module_width` is below [MIN_NATURAL_MODULE_WIDTH].
    pub normal_width: f64,
    /// Color of the bars.
    pub line_color: String,
    /// Color of the label.
    pub text_color: String,
    /// Background color.
    pub background: String,
    /// Font size of the label.
    pub font_size: f64,
    /// Gap between bars and label.
    pub text_margin: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: Symbology::Code128,
            text: None,
            display_value: false,
            module_width: DEFAULT_MODULE_WIDTH,
            height: DEFAULT_HEIGHT,
            normal_width: DEFAULT_NORMAL_WIDTH,
            line_color: "#000000".into(),
            text_color: "#000000".into(),
            background: "#ffffff".into(),
            font_size: 20.0,
            text_margin: 2.0,
        }
    }
}

impl RenderOptions {
    pub fn with_format(mut self, format: Symbology) -> Self {
        self.format = format;
        self
    }

    /// Override the label text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_display_value(mut self, display_value: bool) -> Self {
        self.display_value = display_value;
        self
    }

    pub fn with_module_width(mut self, module_width: f64) -> Self {
        self.module_width = module_width;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_normal_width(mut self, normal_width: f64) -> Self {
        self.normal_width = normal_width;
        self
    }

    pub fn with_line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = color.into();
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_text_margin(mut self, text_margin: f64) -> Self {
        self.text_margin = text_margin;
        self
    }

    /// Check if bars this narrow use the fixed surface width.
    pub fn uses_normal_width(&self) -> bool {
        self.module_width < MIN_NATURAL_MODULE_WIDTH
    }
}

//! Standalone SVG documents.
//!
//! The document has the size of the barcode's surface. It contains a
//! background rectangle, one path with all bars and, if the barcode has a label,
//! a centered text line below the bars.
use crate::barcode::Barcode;

/// Serialize `barcode` as a SVG document.
///
/// ```rust
/// # use barpath::{Barcode, RawEncoder, RenderOptions, Symbology};
/// let options = RenderOptions::default()
///     .with_format(Symbology::Raw)
///     .with_height(10.0);
/// let barcode = Barcode::render("101", &RawEncoder, &options).unwrap();
/// let svg = barpath::svg::to_svg(&barcode);
/// assert!(svg.contains(r#"d="M0,0h2v10h-2zM4,0h2v10h-2z""#));
/// ```
pub fn to_svg(barcode: &Barcode) -> String {
    let width = barcode.surface_width();
    let height = document_height(barcode);
    let mut svg = format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" ",
            "width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>",
        ),
        w = width,
        h = height,
        bg = escape(barcode.background()),
    );

    svg.push_str("<path");
    let offset = barcode.offset_x();
    if offset > 0.0 {
        svg.push_str(&format!(" transform=\"translate({},0)\"", offset));
    }
    svg.push_str(&format!(
        " fill=\"{}\" d=\"{}\"/>",
        escape(barcode.line_color()),
        barcode.path_data()
    ));

    if let Some(label) = barcode.label() {
        svg.push_str(&format!(
            concat!(
                "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" ",
                "font-family=\"monospace\" font-size=\"{size}\" fill=\"{fill}\">{text}</text>",
            ),
            x = width / 2.0,
            y = barcode.height() + barcode.text_margin() + barcode.font_size(),
            size = barcode.font_size(),
            fill = escape(barcode.text_color()),
            text = escape(label),
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Total height: bars plus the label line if there is one.
pub fn document_height(barcode: &Barcode) -> f64 {
    match barcode.label() {
        Some(_) => barcode.height() + barcode.text_margin() + barcode.font_size(),
        None => barcode.height(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

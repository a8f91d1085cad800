use barpath::{svg, Barcode, RawEncoder, RenderOptions, Symbology};

/// Print a SVG document for a pre-encoded module pattern.
fn main() {
    const PATTERN: &str = concat!(
        "11010010000",
        "11000101000",
        "10000110100",
        "10110111000",
        "1100011101011",
    );

    let options = RenderOptions::default()
        .with_format(Symbology::Raw)
        .with_height(60.0)
        .with_text("Hi");
    let barcode = Barcode::render(PATTERN, &RawEncoder, &options).unwrap();
    println!("{}", svg::to_svg(&barcode));
}

use barpath::{encoder, Encoding, EncodeError, RenderOptions, Renderer, Symbology};

/// Stand-in for a real symbology encoder: two bars per even digit, one bar
/// per odd digit.
fn toy_encode(text: &str, format: Symbology) -> Result<Encoding, EncodeError> {
    let mut data = String::from("101");
    for ch in text.chars() {
        match ch.to_digit(10) {
            Some(d) if d % 2 == 0 => data.push_str("1101"),
            Some(_) => data.push_str("1001"),
            None => return Err(EncodeError::invalid_value(format, "digits only")),
        }
    }
    data.push_str("101");
    Encoding::new(format, data, text)
}

/// Re-render only when the inputs change, like a view does on new props.
fn main() {
    let mut renderer = Renderer::new(encoder::from_fn(toy_encode).with_formats(Symbology::Itf));
    let mut options = RenderOptions::default()
        .with_format(Symbology::Itf)
        .with_display_value(true);

    for (value, module_width) in [("1234", 2.0), ("1234", 2.0), ("12x4", 2.0), ("1234", 1.0)] {
        options = options.with_module_width(module_width);
        match renderer.update(value, &options) {
            Ok(barcode) => println!(
                "{value}: {} bars, surface {} wide, label {:?}",
                barcode.bars().len(),
                barcode.surface_width(),
                barcode.label()
            ),
            Err(err) => println!("{value}: {err}"),
        }
    }
}

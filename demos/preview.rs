use barpath::{Barcode, RawEncoder, RenderOptions, Symbology};

/// Show a module pattern in the terminal together with its bars.
fn main() {
    let pattern = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "101011000110101".to_owned());
    let options = RenderOptions::default().with_format(Symbology::Raw);
    match Barcode::render(&pattern, &RawEncoder, &options) {
        Ok(barcode) => {
            for _ in 0..3 {
                println!("{}", barcode.unicode());
            }
            for bar in barcode.bars() {
                println!("x={:>4} width={:>3} {}", bar.x, bar.width, bar);
            }
        }
        Err(err) => eprintln!("{}", err),
    }
}

//! Boundary to the symbology encoders.
//!
//! This crate does not know how to encode text as Code 128, EAN-13 or any other
//! symbology. That is the job of an [Encoder], which turns text into a module
//! pattern. Everything after that, from bars to path data, is done here.
use core::fmt;
use core::str::FromStr;

use flagset::{flags, FlagSet, Flags};

use crate::bits::BitString;
use crate::error::EncodeError;

flags! {
    /// List of 1D barcode symbologies
    ///
    /// The names are the format names accepted by [FromStr], e.g. `"CODE128"` or
    /// `"EAN13"`. `Raw` is not a symbology, it marks text which already is a
    /// module pattern (see [RawEncoder]).
    pub enum Symbology: u32 {
        Code39     = 0x0000_0001,
        Code128    = 0x0000_0002,
        Code128A   = 0x0000_0004,
        Code128B   = 0x0000_0008,
        Code128C   = 0x0000_0010,
        Ean13      = 0x0000_0020,
        Ean8       = 0x0000_0040,
        Ean5       = 0x0000_0080,
        Ean2       = 0x0000_0100,
        Upc        = 0x0000_0200,
        UpcE       = 0x0000_0400,
        Itf14      = 0x0000_0800,
        Itf        = 0x0000_1000,
        Msi        = 0x0000_2000,
        Msi10      = 0x0000_4000,
        Msi11      = 0x0000_8000,
        Msi1010    = 0x0001_0000,
        Msi1110    = 0x0002_0000,
        Pharmacode = 0x0004_0000,
        Codabar    = 0x0008_0000,
        Raw        = 0x0010_0000,
    }
}

impl Symbology {
    /// Get flag set with all symbologies activated.
    pub fn all() -> FlagSet<Self> {
        FlagSet::full()
    }

    /// The format name, as accepted by [FromStr].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Code39 => "CODE39",
            Self::Code128 => "CODE128",
            Self::Code128A => "CODE128A",
            Self::Code128B => "CODE128B",
            Self::Code128C => "CODE128C",
            Self::Ean13 => "EAN13",
            Self::Ean8 => "EAN8",
            Self::Ean5 => "EAN5",
            Self::Ean2 => "EAN2",
            Self::Upc => "UPC",
            Self::UpcE => "UPCE",
            Self::Itf14 => "ITF14",
            Self::Itf => "ITF",
            Self::Msi => "MSI",
            Self::Msi10 => "MSI10",
            Self::Msi11 => "MSI11",
            Self::Msi1010 => "MSI1010",
            Self::Msi1110 => "MSI1110",
            Self::Pharmacode => "pharmacode",
            Self::Codabar => "codabar",
            Self::Raw => "RAW",
        }
    }
}

impl Default for Symbology {
    fn default() -> Self {
        Self::Code128
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a format name. Names are case sensitive.
impl FromStr for Symbology {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::LIST
            .iter()
            .find(|sym| sym.name() == s)
            .copied()
            .ok_or_else(|| EncodeError::invalid_format(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbology {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Symbology {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Output of an encoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoding {
    /// The module pattern.
    pub data: BitString,
    /// Human readable text, usually shown below the bars.
    pub text: String,
}

impl Encoding {
    /// Wrap raw encoder output.
    ///
    /// A pattern which is not a valid bit string is reported as
    /// [EncodeError::InvalidValue], it must never reach the drawing stage.
    pub fn new(
        format: Symbology,
        data: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, EncodeError> {
        let data = BitString::new(data)
            .map_err(|err| EncodeError::invalid_value(format, err.to_string()))?;
        Ok(Self {
            data,
            text: text.into(),
        })
    }
}

/// An external symbology encoder.
///
/// Implement this for whatever does the actual encoding work. Plain
/// functions and closures can be used through [from_fn].
pub trait Encoder {
    /// Check if the encoder implements `format`.
    ///
    /// The default implementation claims every symbology.
    fn supports(&self, format: Symbology) -> bool {
        let _ = format;
        true
    }

    /// Encode `text` as `format`.
    ///
    /// Fails with [EncodeError::InvalidFormat] if the format is not
    /// implemented and with [EncodeError::InvalidValue] if the text is not
    /// valid for the format (characters, length, checksum).
    fn encode(&self, text: &str, format: Symbology) -> Result<Encoding, EncodeError>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn supports(&self, format: Symbology) -> bool {
        (**self).supports(format)
    }

    fn encode(&self, text: &str, format: Symbology) -> Result<Encoding, EncodeError> {
        (**self).encode(text, format)
    }
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn supports(&self, format: Symbology) -> bool {
        (**self).supports(format)
    }

    fn encode(&self, text: &str, format: Symbology) -> Result<Encoding, EncodeError> {
        (**self).encode(text, format)
    }
}

/// Encoder backed by a function, see [from_fn].
#[derive(Clone)]
pub struct FnEncoder<F> {
    formats: FlagSet<Symbology>,
    encode: F,
}

impl<F> FnEncoder<F> {
    /// Restrict the formats this encoder accepts.
    pub fn with_formats(mut self, formats: impl Into<FlagSet<Symbology>>) -> Self {
        self.formats = formats.into();
        self
    }
}

impl<F> fmt::Debug for FnEncoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEncoder")
            .field("formats", &self.formats)
            .finish_non_exhaustive()
    }
}

impl<F> Encoder for FnEncoder<F>
where
    F: Fn(&str, Symbology) -> Result<Encoding, EncodeError>,
{
    fn supports(&self, format: Symbology) -> bool {
        self.formats.contains(format)
    }

    fn encode(&self, text: &str, format: Symbology) -> Result<Encoding, EncodeError> {
        if !self.supports(format) {
            return Err(EncodeError::invalid_format(format.name()));
        }
        (self.encode)(text, format)
    }
}

/// Use a function as encoder. It accepts all symbologies unless restricted
/// with [FnEncoder::with_formats].
///
/// ```rust
/// # use barpath::{encoder, Encoder, Encoding, EncodeError, Symbology};
/// let enc = encoder::from_fn(|text: &str, format| {
///     if text == "A" {
///         Encoding::new(format, "11010010000", text)
///     } else {
///         Err(EncodeError::invalid_value(format, "only A is supported"))
///     }
/// })
/// .with_formats(Symbology::Code128B);
/// assert!(enc.encode("A", Symbology::Code128B).is_ok());
/// assert!(enc.encode("A", Symbology::Ean13).is_err());
/// ```
pub fn from_fn<F>(encode: F) -> FnEncoder<F>
where
    F: Fn(&str, Symbology) -> Result<Encoding, EncodeError>,
{
    FnEncoder {
        formats: Symbology::all(),
        encode,
    }
}

/// Encoder for text which already is a module pattern.
///
/// Only [Symbology::Raw] is supported. The text is used as it is and
/// must be a valid bit string. The suggested label is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawEncoder;

impl Encoder for RawEncoder {
    fn supports(&self, format: Symbology) -> bool {
        format == Symbology::Raw
    }

    fn encode(&self, text: &str, format: Symbology) -> Result<Encoding, EncodeError> {
        if !self.supports(format) {
            return Err(EncodeError::invalid_format(format.name()));
        }
        Encoding::new(format, text, "")
    }
}

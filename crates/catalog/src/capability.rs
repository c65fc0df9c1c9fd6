use serde::{Deserialize, Serialize};

use bookstore_core::ValueObject;

/// Sale price of a book. No currency is attached.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Shipping weight in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub fn from_kg(kg: f64) -> Self {
        Self(kg)
    }

    pub fn kg(self) -> f64 {
        self.0
    }
}

impl ValueObject for Weight {}

impl core::fmt::Display for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} kg", self.0)
    }
}

/// File formats electronic books are distributed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileFormat {
    Pdf,
    Epub,
    Mobi,
}

impl FileFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Pdf => "PDF",
            FileFormat::Epub => "EPUB",
            FileFormat::Mobi => "MOBI",
        }
    }
}

impl core::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability: the variant can be sold for a price.
pub trait Priceable {
    fn price(&self) -> Price;
}

/// Capability: the variant is a physical item with a shipping weight.
pub trait Shippable {
    fn weight(&self) -> Weight;
}

/// Capability: the variant is delivered as a file.
pub trait Electronic {
    fn file_format(&self) -> FileFormat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_displays_with_dollar_sign() {
        assert_eq!(Price::new(49.99).to_string(), "$49.99");
        assert_eq!(Price::new(18.5).to_string(), "$18.5");
    }

    #[test]
    fn weight_displays_in_kilograms() {
        assert_eq!(Weight::from_kg(0.9).to_string(), "0.9 kg");
    }

    #[test]
    fn file_format_uses_uppercase_names() {
        assert_eq!(FileFormat::Epub.to_string(), "EPUB");
        assert_eq!(serde_json::to_string(&FileFormat::Mobi).unwrap(), "\"MOBI\"");
        let parsed: FileFormat = serde_json::from_str("\"PDF\"").unwrap();
        assert_eq!(parsed, FileFormat::Pdf);
    }
}

//! Text conversions for scalar leaf values.
//!
//! Numeric parsing goes through `FromStr` on trimmed text and is therefore
//! independent of the process locale; formatting goes through `Display`,
//! which for floats produces the shortest text that parses back to the
//! identical value.

use mrd_model::{DiffusionDimension, MultibandCalibration, Trajectory, WaveformType};

/// A value that crosses the XML text boundary.
pub(crate) trait XmlScalar: Sized {
    /// Human-readable type name used in invalid-value errors.
    const KIND: &'static str;

    fn from_text(text: &str) -> Option<Self>;
    fn to_text(&self) -> String;
}

macro_rules! numeric_scalar {
    ($ty:ty, $kind:literal) => {
        impl XmlScalar for $ty {
            const KIND: &'static str = $kind;

            fn from_text(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }

            fn to_text(&self) -> String {
                self.to_string()
            }
        }
    };
}

numeric_scalar!(u16, "unsigned short");
numeric_scalar!(u32, "unsigned long");
numeric_scalar!(i64, "long");
numeric_scalar!(f32, "float");
numeric_scalar!(f64, "double");

impl XmlScalar for String {
    const KIND: &'static str = "string";

    fn from_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn to_text(&self) -> String {
        self.clone()
    }
}

// Enum tokens are matched exactly, with no trimming or case folding.
macro_rules! enum_scalar {
    ($ty:ty, $kind:literal) => {
        impl XmlScalar for $ty {
            const KIND: &'static str = $kind;

            fn from_text(text: &str) -> Option<Self> {
                text.parse().ok()
            }

            fn to_text(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}

enum_scalar!(Trajectory, "trajectory type");
enum_scalar!(WaveformType, "waveform type");
enum_scalar!(MultibandCalibration, "multiband calibration type");
enum_scalar!(DiffusionDimension, "diffusion dimension");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_with_surrounding_whitespace() {
        assert_eq!(u16::from_text(" 256 "), Some(256));
        assert_eq!(i64::from_text("-42"), Some(-42));
        assert_eq!(u16::from_text("-1"), None);
        assert_eq!(u16::from_text(""), None);
        assert_eq!(u32::from_text("70000"), Some(70_000));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(f32::from_text("fast"), None);
        assert_eq!(i64::from_text("1.5"), None);
    }

    #[test]
    fn float_text_round_trips_exactly() {
        let value = 0.123_456_789_f32;
        let text = value.to_text();
        assert_eq!(f32::from_text(&text), Some(value));

        let value = 63_500_000.0_f64;
        assert_eq!(f64::from_text(&value.to_text()), Some(value));
    }

    #[test]
    fn enum_tokens_are_exact() {
        assert_eq!(Trajectory::from_text("spiral"), Some(Trajectory::Spiral));
        assert_eq!(Trajectory::from_text("Spiral"), None);
        assert_eq!(Trajectory::from_text(" spiral"), None);
        assert_eq!(Trajectory::Spiral.to_text(), "spiral");
    }
}

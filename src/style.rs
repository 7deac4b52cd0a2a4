//! Styling hints passed through to the renderer untouched.

use crate::error::{Result, SamplingError};

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Style parameters for a drawn polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    dash: LineDash,
    color: Option<&'static str>,
}

impl StrokeStyle {
    /// Creates a new solid stroke style with no colour preference.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        if width.is_nan() || width <= 0.0 {
            return Err(SamplingError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self {
            width,
            dash: LineDash::Solid,
            color: None,
        })
    }

    /// Sets the dash pattern.
    #[must_use]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    /// Sets a renderer colour name, e.g. `"black"`.
    #[must_use]
    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the dash pattern.
    #[must_use]
    pub fn dash(&self) -> LineDash {
        self.dash
    }

    /// Returns the colour name, if one was set.
    #[must_use]
    pub fn color(&self) -> Option<&'static str> {
        self.color
    }
}

/// How to draw point markers: a filled dot of the given size.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    size: f64,
    color: Option<&'static str>,
}

impl MarkerStyle {
    /// Creates a marker style with no colour preference.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not positive.
    pub fn new(size: f64) -> Result<Self> {
        if size.is_nan() || size <= 0.0 {
            return Err(SamplingError::InvalidParameters(
                "marker size must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self { size, color: None })
    }

    /// Sets a renderer colour name, e.g. `"red"`.
    #[must_use]
    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns the marker size.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the colour name, if one was set.
    #[must_use]
    pub fn color(&self) -> Option<&'static str> {
        self.color
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = StrokeStyle::new(2.0).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert_eq!(style.dash(), LineDash::Solid);
        assert_eq!(style.color(), None);
    }

    #[test]
    fn builder_sets_dash_and_color() {
        let style = StrokeStyle::new(1.0)
            .unwrap()
            .with_dash(LineDash::Dashed)
            .with_color("black");
        assert_eq!(style.dash(), LineDash::Dashed);
        assert_eq!(style.color(), Some("black"));
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(StrokeStyle::new(0.0).is_err());
    }

    #[test]
    fn new_with_negative_width_fails() {
        assert!(StrokeStyle::new(-1.0).is_err());
        assert!(StrokeStyle::new(f64::NAN).is_err());
    }

    #[test]
    fn marker_style_has_size_and_color() {
        let style = MarkerStyle::new(4.0).unwrap().with_color("red");
        assert!((style.size() - 4.0).abs() < f64::EPSILON);
        assert_eq!(style.color(), Some("red"));
        assert_eq!(MarkerStyle::new(1.0).unwrap().color(), None);
    }

    #[test]
    fn marker_style_rejects_non_positive_size() {
        assert!(MarkerStyle::new(0.0).is_err());
        assert!(MarkerStyle::new(-2.0).is_err());
        assert!(MarkerStyle::new(f64::NAN).is_err());
    }
}

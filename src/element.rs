//! Capability seam between the carousel core and the host's element handles.
//!
//! The core never touches a real DOM. The host hands it handles implementing
//! [`Element`] and applies the transforms written through them however its
//! platform renders styles.

use std::fmt;

use anyhow::ensure;

/// A CSS-equivalent transform write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Horizontal translation in pixels.
    TranslateX(f64),
    /// Uniform scale.
    Scale(f64),
    /// Horizontal-only scale.
    ScaleX(f64),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslateX(px) => write!(f, "translateX({px}px)"),
            Self::Scale(factor) => write!(f, "scale({factor})"),
            Self::ScaleX(factor) => write!(f, "scaleX({factor})"),
        }
    }
}

/// Host-side element handle.
pub trait Element {
    /// Rendered width of the element in pixels.
    fn client_width(&self) -> f64;

    /// Sets an explicit pixel width on the element.
    fn set_width(&mut self, px: f64);

    /// Writes a transform style to the element.
    fn set_transform(&mut self, transform: Transform);
}

/// One slide and the single image it contains.
#[derive(Debug)]
pub struct Slide<E> {
    pub element: E,
    pub image: E,
}

/// The element structure a carousel instance operates on.
///
/// The host resolves these handles up front; construction validates them
/// instead of failing on first use. The progress bar is optional and is
/// presence-checked before every write.
#[derive(Debug)]
pub struct Elements<E> {
    pub container: E,
    pub mask: E,
    pub slides: Vec<Slide<E>>,
    pub progress_bar: Option<E>,
}

impl<E: Element> Elements<E> {
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.slides.is_empty(), "carousel has no slide elements");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form() {
        assert_eq!(Transform::TranslateX(-12.5).to_string(), "translateX(-12.5px)");
        assert_eq!(Transform::Scale(0.94).to_string(), "scale(0.94)");
        assert_eq!(Transform::ScaleX(1.12).to_string(), "scaleX(1.12)");
    }
}

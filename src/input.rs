//! Unified pointer and wheel input.
//!
//! Mouse, touch and wheel sources are collapsed into one event type before
//! reaching the carousel, so the core only ever sees a single horizontal
//! coordinate and a wheel delta.

/// A pointer position sample from either input source.
///
/// Touch coordinates win over mouse coordinates when both are present, which
/// matches how hybrid devices report the two in the same event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub client_x: Option<f64>,
    pub touch_x: Option<f64>,
}

impl Pointer {
    pub fn mouse(client_x: f64) -> Self {
        Self {
            client_x: Some(client_x),
            ..Default::default()
        }
    }

    pub fn touch(touch_x: f64) -> Self {
        Self {
            touch_x: Some(touch_x),
            ..Default::default()
        }
    }

    /// Extracts the horizontal coordinate, preferring the touch point.
    pub fn x(&self) -> Option<f64> {
        self.touch_x.or(self.client_x)
    }
}

/// Input events the host forwards to a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Vertical wheel scroll, in pixels.
    Wheel { delta_y: f64 },
    /// Mouse button press or touch start over the slider.
    PointerDown(Pointer),
    /// Pointer motion while over the slider.
    PointerMove(Pointer),
    /// Mouse button release or touch end.
    PointerUp,
    /// The pointer left the document. Must terminate an in-flight drag so the
    /// carousel does not keep following motion it will never see end.
    PointerLeft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_coordinate_wins() {
        let pointer = Pointer {
            client_x: Some(10.),
            touch_x: Some(20.),
        };
        assert_eq!(pointer.x(), Some(20.));
    }

    #[test]
    fn mouse_fallback() {
        assert_eq!(Pointer::mouse(10.).x(), Some(10.));
        assert_eq!(Pointer::default().x(), None);
    }
}

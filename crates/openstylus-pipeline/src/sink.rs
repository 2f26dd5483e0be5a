//! Pointer sink capabilities.

use openstylus_geometry::Point;

/// Optional secondary capability: a sink that can also take normalized
/// pen pressure.
pub trait PressureSink {
    /// Forward a pressure value normalized to `[0, 1]`.
    fn set_pressure(&mut self, pressure: f32);
}

/// Platform pointer injection, supplied by the owning session.
///
/// This crate only ever calls into the capability; concrete
/// implementations (virtual pointer devices, test recorders) live with
/// the platform integration. The pressure sub-capability is queried
/// explicitly per report via [`Self::pressure`]; sinks without pressure
/// support keep the default `None`.
pub trait PointerSink: Send {
    /// Move the pointer to a screen-space position.
    fn set_position(&mut self, position: Point);

    /// The pressure sub-capability, if this sink has one.
    fn pressure(&mut self) -> Option<&mut dyn PressureSink> {
        None
    }
}

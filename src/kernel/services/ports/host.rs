//! Seams between the layout core and the host that renders the cards.
//!
//! The core reads dimensions through [`MeasurementProvider`], writes results
//! through [`StyleSink`] and learns about viewport changes from
//! [`ResizeSignal`]. It never creates or destroys elements.

use std::fmt;
use std::sync::mpsc::Receiver;

use crate::core::{MeasurementError, Position, Size};

pub trait MeasurementProvider {
    /// Opaque handle to a rendered element.
    type Element: Clone + fmt::Debug;

    /// All elements matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self::Element>;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    fn element_size(&self, element: &Self::Element) -> Result<Size, MeasurementError>;

    fn viewport_width(&self) -> Result<f64, MeasurementError>;
}

pub trait StyleSink<E> {
    fn set_width(&mut self, element: &E, width: f64);

    /// Places `element` absolutely at `position` inside its container.
    fn set_position(&mut self, element: &E, position: Position);
}

/// Viewport size change, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    pub width: f64,
    pub height: f64,
}

slotmap::new_key_type! { pub struct SubscriptionId; }

/// A live resize listener. Events queue on `events` until drained.
pub struct ResizeSubscription {
    pub id: SubscriptionId,
    pub events: Receiver<ResizeEvent>,
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

pub trait ResizeSignal {
    fn subscribe(&mut self) -> ResizeSubscription;

    /// Returns false if `id` was not subscribed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Everything a grid session needs from its host.
pub trait GridHost:
    MeasurementProvider + StyleSink<<Self as MeasurementProvider>::Element> + ResizeSignal
{
}

impl<T> GridHost for T where
    T: MeasurementProvider + StyleSink<<T as MeasurementProvider>::Element> + ResizeSignal
{
}

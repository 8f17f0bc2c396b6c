//! In-memory host for tests and embedding without a renderer.
//!
//! Elements carry a class list, a parent and a fixed size. Style writes are
//! recorded per element so callers can inspect what a layout pass produced.

use std::sync::mpsc::{self, Sender};

use slotmap::{new_key_type, SlotMap};

use crate::core::{MeasurementError, Position, Size};
use crate::kernel::services::ports::{
    MeasurementProvider, ResizeEvent, ResizeSignal, ResizeSubscription, StyleSink, SubscriptionId,
};

new_key_type! { pub struct ElementId; }

#[derive(Clone, Debug, Default)]
struct Element {
    classes: Vec<String>,
    parent: Option<ElementId>,
    size: Size,
    width: Option<f64>,
    position: Option<Position>,
}

#[derive(Default)]
pub struct HeadlessHost {
    elements: SlotMap<ElementId, Element>,
    order: Vec<ElementId>,
    viewport: Option<Size>,
    listeners: SlotMap<SubscriptionId, Sender<ResizeEvent>>,
    style_writes: usize,
}

impl HeadlessHost {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport: Some(Size::new(viewport_width, viewport_height)),
            ..Self::default()
        }
    }

    /// A host that has not been attached to a surface yet.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn add_container(&mut self, width: f64) -> ElementId {
        self.insert(Element {
            size: Size::new(width, 0.0),
            ..Element::default()
        })
    }

    pub fn add_card(&mut self, parent: ElementId, class: &str, height: f64) -> ElementId {
        self.add_element(Some(parent), class, height)
    }

    /// A card with no parent element.
    pub fn add_detached_card(&mut self, class: &str, height: f64) -> ElementId {
        self.add_element(None, class, height)
    }

    fn add_element(&mut self, parent: Option<ElementId>, class: &str, height: f64) -> ElementId {
        self.insert(Element {
            classes: class.split_whitespace().map(str::to_string).collect(),
            parent,
            size: Size::new(0.0, height),
            ..Element::default()
        })
    }

    fn insert(&mut self, element: Element) -> ElementId {
        let id = self.elements.insert(element);
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: ElementId) {
        if self.elements.remove(id).is_some() {
            self.order.retain(|e| *e != id);
        }
    }

    pub fn set_height(&mut self, id: ElementId, height: f64) {
        if let Some(element) = self.elements.get_mut(id) {
            element.size.height = height;
        }
    }

    pub fn set_container_width(&mut self, id: ElementId, width: f64) {
        if let Some(element) = self.elements.get_mut(id) {
            element.size.width = width;
        }
    }

    /// Changes the viewport and notifies every live listener.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Some(Size::new(width, height));
        let event = ResizeEvent { width, height };
        self.listeners.retain(|_, tx| tx.send(event).is_ok());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn styled_width(&self, id: ElementId) -> Option<f64> {
        self.elements.get(id)?.width
    }

    pub fn position(&self, id: ElementId) -> Option<Position> {
        self.elements.get(id)?.position
    }

    pub fn style_writes(&self) -> usize {
        self.style_writes
    }
}

impl MeasurementProvider for HeadlessHost {
    type Element = ElementId;

    fn select_all(&self, selector: &str) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.elements
                    .get(*id)
                    .is_some_and(|e| e.classes.iter().any(|c| c == selector))
            })
            .collect()
    }

    fn parent(&self, element: &ElementId) -> Option<ElementId> {
        self.elements.get(*element)?.parent
    }

    fn element_size(&self, element: &ElementId) -> Result<Size, MeasurementError> {
        self.elements
            .get(*element)
            .map(|e| e.size)
            .ok_or_else(|| MeasurementError::ElementUnavailable(format!("{:?}", element)))
    }

    fn viewport_width(&self) -> Result<f64, MeasurementError> {
        self.viewport
            .map(|v| v.width)
            .ok_or(MeasurementError::ViewportUnavailable)
    }
}

impl StyleSink<ElementId> for HeadlessHost {
    fn set_width(&mut self, element: &ElementId, width: f64) {
        if let Some(e) = self.elements.get_mut(*element) {
            e.width = Some(width);
            self.style_writes += 1;
        }
    }

    fn set_position(&mut self, element: &ElementId, position: Position) {
        if let Some(e) = self.elements.get_mut(*element) {
            e.position = Some(position);
            self.style_writes += 1;
        }
    }
}

impl ResizeSignal for HeadlessHost {
    fn subscribe(&mut self) -> ResizeSubscription {
        let (tx, rx) = mpsc::channel();
        let id = self.listeners.insert(tx);
        ResizeSubscription { id, events: rx }
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/headless.rs"]
mod tests;

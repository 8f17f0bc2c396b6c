//! Grid session: owns one grid's configuration and drives layout passes.
//!
//! A session is created against a host, lays the cards out once, then
//! listens for viewport resizes. The host's event loop feeds time into
//! [`GridSession::tick`]; a relayout runs once a resize burst settles.

use std::time::{Duration, Instant};

use crate::core::{ConfigError, MeasurementError, Result};
use crate::kernel::columns::resolve_columns;
use crate::kernel::packing::{pack, GridLayout};
use crate::kernel::scheduler::{Debouncer, Edge, DEFAULT_RESIZE_DELAY};
use crate::kernel::services::ports::{
    BreakpointOverrides, Breakpoints, GridConfig, GridHost, GridOptions, ResizeEvent,
    ResizeSubscription,
};

/// How a session reacts to resize bursts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub resize_delay: Duration,
    pub edge: Edge,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            resize_delay: DEFAULT_RESIZE_DELAY,
            edge: Edge::Trailing,
        }
    }
}

impl SessionOptions {
    pub fn resize_delay(mut self, delay: Duration) -> Self {
        self.resize_delay = delay;
        self
    }

    pub fn edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }
}

pub struct GridSession<H: GridHost> {
    config: GridConfig,
    breakpoints: Breakpoints,
    container: H::Element,
    cards: Vec<H::Element>,
    scheduler: Debouncer,
    subscription: Option<ResizeSubscription>,
    layout: Option<GridLayout>,
}

impl<H: GridHost> GridSession<H> {
    /// Validates `options`, finds the cards and their container, runs the
    /// first layout pass and subscribes to viewport resizes.
    pub fn initialize(
        host: &mut H,
        options: &GridOptions,
        breakpoints: Option<&BreakpointOverrides>,
        session: SessionOptions,
    ) -> Result<Self> {
        let config = GridConfig::from_options(options).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected grid options");
        })?;
        let breakpoints = breakpoints.map(Breakpoints::merged).unwrap_or_default();

        let cards = host.select_all(&config.element_selector);
        let Some(first) = cards.first() else {
            tracing::warn!(selector = %config.element_selector, "no grid elements found");
            return Err(ConfigError::NoMatchingElements(config.element_selector).into());
        };
        let Some(container) = host.parent(first) else {
            tracing::warn!(selector = %config.element_selector, "grid elements have no container");
            return Err(ConfigError::MissingContainer(config.element_selector).into());
        };

        let mut grid = Self {
            config,
            breakpoints,
            container,
            cards,
            scheduler: Debouncer::new(session.resize_delay, session.edge),
            subscription: None,
            layout: None,
        };

        let columns = grid.relayout(host)?.columns();
        grid.subscription = Some(host.subscribe());

        tracing::info!(
            selector = %grid.config.element_selector,
            cards = grid.cards.len(),
            columns,
            "grid initialized"
        );
        Ok(grid)
    }

    /// Measures, packs and writes styles for every card currently matching
    /// the selector. All reads happen before the first write.
    pub fn relayout(&mut self, host: &mut H) -> Result<&GridLayout> {
        let viewport_width = host.viewport_width()?;
        let container_width = host
            .element_size(&self.container)
            .map_err(|_| MeasurementError::ContainerUnavailable)?
            .width;
        if !(container_width.is_finite() && container_width > 0.0) {
            return Err(MeasurementError::ContainerUnavailable.into());
        }

        let cards = host.select_all(&self.config.element_selector);
        let heights = cards
            .iter()
            .map(|card| host.element_size(card).map(|size| size.height))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let columns = resolve_columns(
            viewport_width,
            &self.breakpoints,
            self.config.min_cols,
            self.config.max_cols,
        );
        let layout = pack(
            &heights,
            columns,
            container_width,
            self.config.gutter_width,
            self.config.gutter_height,
        );

        for card in &cards {
            host.set_width(card, layout.inner_width);
        }
        for (card, placement) in cards.iter().zip(&layout.placements) {
            host.set_position(card, placement.position());
        }

        tracing::debug!(
            target = "grid.layout",
            viewport_width,
            container_width,
            columns,
            cards = cards.len(),
            content_height = layout.content_height(),
            "relayout"
        );

        self.cards = cards;
        Ok(&*self.layout.insert(layout))
    }

    /// Reports one resize signal at `now`. Returns true if it caused an
    /// immediate relayout: the leading edge of a burst, or a settled trailing
    /// burst nobody ticked for.
    pub fn handle_resize(&mut self, host: &mut H, now: Instant) -> Result<bool> {
        if self.scheduler.call(now) {
            self.relayout(host)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Runs a relayout if a burst has settled, then feeds queued resize
    /// events to the scheduler. Returns true if a relayout ran.
    pub fn tick(&mut self, host: &mut H, now: Instant) -> Result<bool> {
        let mut ran = false;
        if self.scheduler.poll(now) {
            self.relayout(host)?;
            ran = true;
        }

        while self.next_resize_event().is_some() {
            ran |= self.handle_resize(host, now)?;
        }
        Ok(ran)
    }

    fn next_resize_event(&self) -> Option<ResizeEvent> {
        self.subscription.as_ref()?.events.try_recv().ok()
    }

    /// When the host should call [`GridSession::tick`] next, if anything is
    /// pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    /// Unsubscribes from resizes and drops any pending relayout.
    pub fn dispose(mut self, host: &mut H) {
        self.scheduler.cancel();
        if let Some(sub) = self.subscription.take() {
            host.unsubscribe(sub.id);
        }
        tracing::info!(selector = %self.config.element_selector, "grid disposed");
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn container(&self) -> &H::Element {
        &self.container
    }

    /// Cards seen by the most recent layout pass.
    pub fn cards(&self) -> &[H::Element] {
        &self.cards
    }

    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;

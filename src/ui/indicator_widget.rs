//! Custom Ratatui widget that renders the busy indicator: a ring of dots
//! with one highlighted dot, composed off-screen and blitted as half-blocks.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::{
    color::Rgb,
    geometry::Size,
    indicator::{Indicator, IndicatorSettings},
};

use super::surface::PaintSurface;

// ───────────────────────────────────────── state ─────────────

/// Persistent widget state: the indicator plus its private paint buffer.
#[derive(Debug, Clone)]
pub struct IndicatorView {
    indicator: Indicator,
    surface: PaintSurface,
    /// The surface holds no frame yet (fresh or just reallocated).
    surface_stale: bool,
}

impl Default for IndicatorView {
    fn default() -> Self {
        Self::new(IndicatorSettings::default())
    }
}

impl IndicatorView {
    pub fn new(settings: IndicatorSettings) -> Self {
        let indicator = Indicator::new(settings);
        let surface = PaintSurface::new(indicator.size());
        Self {
            indicator,
            surface,
            surface_stale: true,
        }
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    #[cfg(test)]
    pub fn surface(&self) -> &PaintSurface {
        &self.surface
    }

    // ── configuration (forwarded) ──────────────────────────────

    pub fn set_dot_diameter(&mut self, diameter: i32) {
        self.indicator.set_dot_diameter(diameter);
    }

    pub fn set_dot_count(&mut self, count: usize) {
        self.indicator.set_dot_count(count);
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.indicator.set_interval(interval);
    }

    pub fn set_idle_color(&mut self, color: Rgb) {
        self.indicator.set_idle_color(color);
    }

    pub fn set_active_color(&mut self, color: Rgb) {
        self.indicator.set_active_color(color);
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.indicator.set_background(color);
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.indicator.set_enabled(enabled)
    }

    pub fn tick(&mut self) -> bool {
        self.indicator.tick()
    }

    // ── lifecycle hooks ────────────────────────────────────────

    /// Size-changed notification: lock the aspect ratio, then reallocate the
    /// paint buffer (the layout is recomputed by the indicator).
    pub fn resize(&mut self, width: u32, height: u32) -> Size {
        let size = self.indicator.resize(width, height);
        if size != self.surface.size() {
            self.surface.reallocate(size);
            self.surface_stale = true;
        }
        size
    }

    /// Compose the current frame into the paint buffer if anything changed
    /// since the last one.  Returns `true` when a frame was drawn.
    pub fn paint(&mut self) -> bool {
        let requested = self.indicator.take_repaint();
        if !requested && !self.surface_stale {
            return false;
        }
        self.surface_stale = false;

        let ind = &self.indicator;
        self.surface.clear(ind.background());
        let diameter = ind.dot_diameter();
        for (i, p) in ind.layout().iter().enumerate() {
            self.surface.fill_ellipse(p.x, p.y, diameter, ind.dot_color(i));
        }
        true
    }
}

// ───────────────────────────────────────── widget ────────────

/// The indicator widget itself — created fresh each frame.
#[derive(Default)]
pub struct IndicatorWidget<'a> {
    block: Option<Block<'a>>,
}

impl<'a> IndicatorWidget<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for IndicatorWidget<'_> {
    type State = IndicatorView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        state.paint();
        state.surface.present(inner, buf);
    }
}

//! Indicator state — configuration, cached dot layout, and the highlight
//! state machine.
//!
//! The periodic timer lives in the host (`app::timer`); it only calls
//! [`Indicator::tick`].  Painting lives in `ui`; it only reads the state and
//! consumes the repaint request.

use std::time::Duration;

use super::color::Rgb;
use super::geometry::{dot_layout, PointF, Size};

pub const DEFAULT_SIDE: u32 = 90;
pub const DEFAULT_DOT_DIAMETER: i32 = 15;
pub const DEFAULT_DOT_COUNT: usize = 6;
pub const MIN_DOT_COUNT: usize = 3;
/// Upper bound on the dot count; one dot per degree is already a solid ring.
pub const MAX_DOT_COUNT: usize = 360;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);
/// A repeating timer needs a non-zero period.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Every configurable property of the indicator in one bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSettings {
    pub size: Size,
    pub dot_diameter: i32,
    pub dot_count: usize,
    pub interval: Duration,
    pub idle_color: Rgb,
    pub active_color: Rgb,
    pub background: Rgb,
    pub enabled: bool,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            size: Size::square(DEFAULT_SIDE),
            dot_diameter: DEFAULT_DOT_DIAMETER,
            dot_count: DEFAULT_DOT_COUNT,
            interval: DEFAULT_INTERVAL,
            idle_color: Rgb::GRAY,
            active_color: Rgb::YELLOW_GREEN,
            background: Rgb::CHARCOAL,
            enabled: true,
        }
    }
}

/// The busy indicator's complete state.
#[derive(Debug, Clone)]
pub struct Indicator {
    dot_diameter: i32,
    dot_count: usize,
    /// Always in `0..dot_count`.
    highlight: usize,
    idle_color: Rgb,
    active_color: Rgb,
    background: Rgb,
    interval: Duration,
    enabled: bool,
    size: Size,
    /// Size applied by the previous resize; drives the aspect lock.
    last_size: Size,
    layout: Vec<PointF>,
    repaint_requested: bool,
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new(IndicatorSettings::default())
    }
}

impl Indicator {
    pub fn new(settings: IndicatorSettings) -> Self {
        let mut indicator = Self {
            dot_diameter: settings.dot_diameter,
            dot_count: settings.dot_count.clamp(MIN_DOT_COUNT, MAX_DOT_COUNT),
            highlight: 0,
            idle_color: settings.idle_color,
            active_color: settings.active_color,
            background: settings.background,
            interval: settings.interval.max(MIN_INTERVAL),
            enabled: settings.enabled,
            size: Size::default(),
            last_size: Size::default(),
            layout: Vec::new(),
            repaint_requested: true,
        };
        indicator.resize(settings.size.width, settings.size.height);
        indicator
    }

    /// Snapshot of the current configuration.
    pub fn settings(&self) -> IndicatorSettings {
        IndicatorSettings {
            size: self.size,
            dot_diameter: self.dot_diameter,
            dot_count: self.dot_count,
            interval: self.interval,
            idle_color: self.idle_color,
            active_color: self.active_color,
            background: self.background,
            enabled: self.enabled,
        }
    }

    // ── property reads ─────────────────────────────────────────

    pub fn dot_diameter(&self) -> i32 {
        self.dot_diameter
    }

    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight
    }

    pub fn idle_color(&self) -> Rgb {
        self.idle_color
    }

    pub fn active_color(&self) -> Rgb {
        self.active_color
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Cached top-left dot origins, one per dot.
    pub fn layout(&self) -> &[PointF] {
        &self.layout
    }

    /// Colour a dot at `index` should be painted with this frame.
    pub fn dot_color(&self, index: usize) -> Rgb {
        if index == self.highlight {
            self.active_color
        } else {
            self.idle_color
        }
    }

    // ── configuration ──────────────────────────────────────────

    pub fn set_dot_diameter(&mut self, diameter: i32) {
        self.dot_diameter = diameter;
        self.relayout();
    }

    /// Clamped to `MIN_DOT_COUNT..=MAX_DOT_COUNT`.
    pub fn set_dot_count(&mut self, count: usize) {
        self.dot_count = count.clamp(MIN_DOT_COUNT, MAX_DOT_COUNT);
        self.highlight %= self.dot_count;
        self.relayout();
    }

    /// Changes the timer period only; the current frame stays as it is.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(MIN_INTERVAL);
        tracing::debug!(interval_ms = self.interval.as_millis() as u64, "indicator interval changed");
    }

    pub fn set_idle_color(&mut self, color: Rgb) {
        self.idle_color = color;
        self.repaint_requested = true;
    }

    pub fn set_active_color(&mut self, color: Rgb) {
        self.active_color = color;
        self.repaint_requested = true;
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
        self.repaint_requested = true;
    }

    /// Returns `true` when the enabled state actually changed.  The host
    /// starts or stops its timer in response; the highlight is kept.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        tracing::debug!(enabled, highlight = self.highlight, "indicator enabled changed");
        true
    }

    // ── animation ──────────────────────────────────────────────

    /// Advance one step: the highlight moves to the previous index, wrapping
    /// from 0 to the last dot.  Frozen while disabled.
    pub fn tick(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.highlight = match self.highlight {
            0 => self.dot_count - 1,
            k => k - 1,
        };
        self.repaint_requested = true;
        true
    }

    // ── resize ─────────────────────────────────────────────────

    /// Apply a new size, forcing the control square.
    ///
    /// Compared against the previously applied size: a changed height wins
    /// and the width follows it; otherwise a changed width drags the height
    /// along.  Returns the size actually applied.
    pub fn resize(&mut self, width: u32, height: u32) -> Size {
        let mut size = Size::new(width, height);
        if size.height != self.last_size.height {
            size.width = size.height;
        } else if size.width != self.last_size.width {
            size.height = size.width;
        }

        if size != self.size {
            tracing::debug!(requested = %Size::new(width, height), applied = %size, "indicator resized");
        }
        self.size = size;
        self.last_size = size;
        self.relayout();
        size
    }

    /// Consume the pending repaint request, if any.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn relayout(&mut self) {
        self.layout = dot_layout(self.size, self.dot_diameter, self.dot_count);
        self.repaint_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::dot_center;

    #[test]
    fn defaults_match_documented_values() {
        let ind = Indicator::default();
        assert_eq!(ind.size(), Size::square(90));
        assert_eq!(ind.dot_diameter(), 15);
        assert_eq!(ind.dot_count(), 6);
        assert_eq!(ind.interval(), Duration::from_millis(300));
        assert_eq!(ind.highlight_index(), 0);
        assert_eq!(ind.layout().len(), 6);
        assert!(ind.is_enabled());
    }

    #[test]
    fn dot_count_below_three_clamps_to_three() {
        let mut ind = Indicator::default();
        for n in [0, 1, 2] {
            ind.set_dot_count(n);
            assert_eq!(ind.dot_count(), 3);
            assert_eq!(ind.layout().len(), 3);
        }
        ind.set_dot_count(12);
        assert_eq!(ind.layout().len(), 12);

        let ind = Indicator::new(IndicatorSettings {
            dot_count: 1,
            ..IndicatorSettings::default()
        });
        assert_eq!(ind.dot_count(), 3);
    }

    #[test]
    fn huge_dot_count_is_bounded() {
        let mut ind = Indicator::default();
        ind.set_dot_count(usize::MAX);
        assert_eq!(ind.dot_count(), MAX_DOT_COUNT);
        assert_eq!(ind.layout().len(), MAX_DOT_COUNT);

        let ind = Indicator::new(IndicatorSettings {
            dot_count: usize::MAX,
            ..IndicatorSettings::default()
        });
        assert_eq!(ind.dot_count(), MAX_DOT_COUNT);
    }

    #[test]
    fn extreme_diameters_stay_harmless() {
        let mut ind = Indicator::default();
        for d in [i32::MIN, i32::MAX, 0] {
            ind.set_dot_diameter(d);
            assert_eq!(ind.dot_diameter(), d);
            assert_eq!(ind.layout().len(), 6);
        }
    }

    #[test]
    fn tick_decrements_with_wrap() {
        let mut ind = Indicator::default();
        for _ in 0..20 {
            let before = ind.highlight_index();
            assert!(ind.tick());
            let n = ind.dot_count();
            assert_eq!(ind.highlight_index(), (before + n - 1) % n);
        }
    }

    #[test]
    fn first_tick_wraps_to_last_dot() {
        let mut ind = Indicator::default();
        ind.tick();
        assert_eq!(ind.highlight_index(), 5);
    }

    #[test]
    fn six_ticks_complete_a_full_cycle() {
        let mut ind = Indicator::default();
        let start = ind.highlight_index();
        for _ in 0..6 {
            ind.tick();
        }
        assert_eq!(ind.highlight_index(), start);
    }

    #[test]
    fn disabled_indicator_freezes_and_resumes_in_place() {
        let mut ind = Indicator::default();
        ind.tick();
        ind.tick();
        assert_eq!(ind.highlight_index(), 4);

        assert!(ind.set_enabled(false));
        assert!(!ind.set_enabled(false));
        for _ in 0..10 {
            assert!(!ind.tick());
        }
        assert_eq!(ind.highlight_index(), 4);

        assert!(ind.set_enabled(true));
        ind.tick();
        assert_eq!(ind.highlight_index(), 3);
    }

    #[test]
    fn shrinking_dot_count_keeps_highlight_in_range() {
        let mut ind = Indicator::default();
        ind.set_dot_count(10);
        ind.tick(); // 9
        ind.set_dot_count(4);
        assert!(ind.highlight_index() < 4);
        assert_eq!(ind.highlight_index(), 1);
    }

    #[test]
    fn resize_forces_square() {
        let mut ind = Indicator::default();

        // Width only changed: height follows.
        assert_eq!(ind.resize(120, 90), Size::square(120));
        // Height changed: width follows.
        assert_eq!(ind.resize(120, 60), Size::square(60));
        // Both changed: height wins.
        assert_eq!(ind.resize(200, 100), Size::square(100));
        // Nothing changed.
        assert_eq!(ind.resize(100, 100), Size::square(100));

        let s = ind.size();
        assert_eq!(s.width, s.height);
    }

    #[test]
    fn resize_recomputes_layout_around_new_center() {
        let mut ind = Indicator::default();
        ind.resize(60, 60);
        let center = ind.size().center();
        for p in ind.layout() {
            let d = dot_center(*p, 15).distance(center);
            assert!((d - 15.0).abs() < 1e-3);
        }
    }

    #[test]
    fn diameter_change_recomputes_layout() {
        let mut ind = Indicator::default();
        ind.take_repaint();
        ind.set_dot_diameter(20);
        assert!(ind.take_repaint());
        for p in ind.layout() {
            let d = dot_center(*p, 20).distance(PointF::new(45.0, 45.0));
            assert!((d - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn interval_change_clamps_and_does_not_repaint() {
        let mut ind = Indicator::default();
        ind.take_repaint();
        ind.set_interval(Duration::ZERO);
        assert_eq!(ind.interval(), MIN_INTERVAL);
        ind.set_interval(Duration::from_millis(80));
        assert_eq!(ind.interval(), Duration::from_millis(80));
        assert!(!ind.take_repaint());
    }

    #[test]
    fn color_changes_request_repaint_without_relayout() {
        let mut ind = Indicator::default();
        let layout = ind.layout().to_vec();
        ind.take_repaint();

        ind.set_active_color(Rgb::new(255, 0, 0));
        assert!(ind.take_repaint());
        assert!(!ind.take_repaint());
        ind.set_idle_color(Rgb::BLACK);
        assert!(ind.take_repaint());
        assert_eq!(ind.layout(), layout.as_slice());

        assert_eq!(ind.dot_color(0), Rgb::new(255, 0, 0));
        assert_eq!(ind.dot_color(1), Rgb::BLACK);
    }

    #[test]
    fn settings_round_trip_through_constructor() {
        let settings = IndicatorSettings {
            size: Size::square(40),
            dot_diameter: 6,
            dot_count: 8,
            interval: Duration::from_millis(120),
            idle_color: Rgb::BLACK,
            active_color: Rgb::new(255, 0, 0),
            background: Rgb::new(1, 2, 3),
            enabled: false,
        };
        assert_eq!(Indicator::new(settings.clone()).settings(), settings);
    }
}

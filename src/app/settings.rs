//! Properties menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and UI renderers consume the same source of truth without cross-importing.

use std::time::Duration;

use super::state::AppState;
use crate::core::color::Rgb;

/// Colours the colour properties cycle through.
pub const PALETTE: &[Rgb] = &[
    Rgb::YELLOW_GREEN,
    Rgb::GRAY,
    Rgb::new(30, 144, 255),
    Rgb::new(255, 165, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 255),
    Rgb::new(64, 64, 64),
    Rgb::CHARCOAL,
    Rgb::BLACK,
];

/// Interval change per step.
const INTERVAL_STEP_MS: i64 = 50;
/// Size change per step, in logical units.
const SIZE_STEP: i64 = 10;

/// A single row in the properties popup.
pub enum PropertyItem {
    /// Boolean toggle — reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Numeric or cyclic value nudged by ±1 steps.
    Step {
        label: &'static str,
        value: fn(&AppState) -> String,
        step: fn(&mut AppState, i64),
    },
}

impl PropertyItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Step { label, .. } => label,
        }
    }

    /// Current value as shown in the popup.
    pub fn display_value(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => (if get(state) { "ON" } else { "OFF" }).to_string(),
            Self::Step { value, .. } => value(state),
        }
    }

    /// Apply a ±1 nudge (toggles simply flip).
    pub fn adjust(&self, state: &mut AppState, delta: i64) {
        match self {
            Self::Toggle { get, set, .. } => {
                let current = get(state);
                set(state, !current);
            }
            Self::Step { step, .. } => step(state, delta),
        }
    }
}

/// All items shown in the properties popup, in display order.
pub static PROPERTY_ITEMS: &[PropertyItem] = &[
    PropertyItem::Step {
        label: "Animation Interval",
        value: |s| format!("{}ms", s.view.indicator().interval().as_millis()),
        step: |s, d| {
            let ms = s.view.indicator().interval().as_millis() as i64 + d * INTERVAL_STEP_MS;
            s.view.set_interval(Duration::from_millis(ms.max(1) as u64));
        },
    },
    PropertyItem::Step {
        label: "Dot Diameter",
        value: |s| s.view.indicator().dot_diameter().to_string(),
        step: |s, d| {
            let diameter = s.view.indicator().dot_diameter() as i64 + d;
            s.view.set_dot_diameter(diameter.clamp(0, i32::MAX as i64) as i32);
        },
    },
    PropertyItem::Step {
        label: "Dot Count",
        value: |s| s.view.indicator().dot_count().to_string(),
        step: |s, d| {
            let count = (s.view.indicator().dot_count() as i64 + d).max(0);
            s.view.set_dot_count(count as usize);
        },
    },
    PropertyItem::Step {
        label: "Size",
        value: |s| s.view.indicator().size().to_string(),
        step: |s, d| {
            let side = (s.view.indicator().size().width as i64 + d * SIZE_STEP).max(0) as u32;
            s.view.resize(side, side);
        },
    },
    PropertyItem::Step {
        label: "Active Color",
        value: |s| s.view.indicator().active_color().to_string(),
        step: |s, d| {
            let next = cycle_color(s.view.indicator().active_color(), d);
            s.view.set_active_color(next);
        },
    },
    PropertyItem::Step {
        label: "Idle Color",
        value: |s| s.view.indicator().idle_color().to_string(),
        step: |s, d| {
            let next = cycle_color(s.view.indicator().idle_color(), d);
            s.view.set_idle_color(next);
        },
    },
    PropertyItem::Step {
        label: "Background",
        value: |s| s.view.indicator().background().to_string(),
        step: |s, d| {
            let next = cycle_color(s.view.indicator().background(), d);
            s.view.set_background(next);
        },
    },
    PropertyItem::Toggle {
        label: "Enabled",
        get: |s| s.view.indicator().is_enabled(),
        set: |s, v| {
            s.view.set_enabled(v);
        },
    },
];

/// Neighbour of `current` in [`PALETTE`]; colours outside the palette jump
/// to its first entry.
pub fn cycle_color(current: Rgb, delta: i64) -> Rgb {
    let len = PALETTE.len() as i64;
    match PALETTE.iter().position(|&c| c == current) {
        Some(idx) => PALETTE[(idx as i64 + delta).rem_euclid(len) as usize],
        None => PALETTE[0],
    }
}

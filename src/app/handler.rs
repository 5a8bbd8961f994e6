//! Input handling — maps key and resize events to state mutations.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

use super::settings::PROPERTY_ITEMS;
use super::state::{ActiveView, AppState};

/// Interval change per `.` / `,` press.
const INTERVAL_STEP: Duration = Duration::from_millis(50);
/// Size change per `h`/`j`/`k`/`l` press, in logical units.
const SIZE_STEP: u32 = 10;

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Indicator => handle_indicator_key(state, key),
        ActiveView::Properties => handle_properties_key(state, key),
    }
}

/// Terminal resized: refit the widget when it tracks the terminal.
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    if state.fit_to_terminal {
        state.fit_to(Rect::new(0, 0, width, height));
    }
}

// ── Indicator view ──────────────────────────────────────────────

fn handle_indicator_key(state: &mut AppState, key: KeyEvent) {
    let ind = state.view.indicator();
    let size = ind.size();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char(' ') => {
            let enabled = !ind.is_enabled();
            state.view.set_enabled(enabled);
            state.status_message = Some(if enabled { "Running" } else { "Paused" }.to_string());
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let count = ind.dot_count() + 1;
            state.view.set_dot_count(count);
        }
        KeyCode::Char('-') => {
            let count = ind.dot_count().saturating_sub(1);
            state.view.set_dot_count(count);
        }
        KeyCode::Char(']') => {
            let diameter = ind.dot_diameter().saturating_add(1);
            state.view.set_dot_diameter(diameter);
        }
        KeyCode::Char('[') => {
            let diameter = ind.dot_diameter().saturating_sub(1).max(0);
            state.view.set_dot_diameter(diameter);
        }
        KeyCode::Char('.') => {
            let interval = ind.interval().saturating_sub(INTERVAL_STEP);
            state.view.set_interval(interval);
        }
        KeyCode::Char(',') => {
            let interval = ind.interval() + INTERVAL_STEP;
            state.view.set_interval(interval);
        }
        // Width and height are nudged independently; the aspect lock makes
        // the other side follow.
        KeyCode::Char('l') | KeyCode::Right => {
            state.view.resize(size.width + SIZE_STEP, size.height);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            state.view.resize(size.width.saturating_sub(SIZE_STEP), size.height);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.view.resize(size.width, size.height + SIZE_STEP);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.view.resize(size.width, size.height.saturating_sub(SIZE_STEP));
        }
        KeyCode::Char('w') => state.save_config(),
        KeyCode::Char('?') | KeyCode::Char('p') => {
            state.active_view = ActiveView::Properties;
            state.properties_selected = 0;
        }
        _ => {}
    }
}

// ── Properties popup ────────────────────────────────────────────

fn handle_properties_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('p') => {
            state.active_view = ActiveView::Indicator;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.properties_selected = state.properties_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.properties_selected < PROPERTY_ITEMS.len() - 1 {
                state.properties_selected += 1;
            }
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
            adjust_selected(state, -1);
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Char('+') => {
            adjust_selected(state, 1);
        }
        KeyCode::Char('w') => state.save_config(),
        _ => {}
    }
}

fn adjust_selected(state: &mut AppState, delta: i64) {
    if let Some(item) = PROPERTY_ITEMS.get(state.properties_selected) {
        item.adjust(state, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::geometry::Size;

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn state() -> AppState {
        AppState::new(AppConfig::default(), false)
    }

    #[test]
    fn space_toggles_enabled_without_losing_frame() {
        let mut s = state();
        s.view.tick();
        press(&mut s, KeyCode::Char(' '));
        assert!(!s.view.indicator().is_enabled());
        s.view.tick();
        assert_eq!(s.view.indicator().highlight_index(), 5);

        press(&mut s, KeyCode::Char(' '));
        assert!(s.view.indicator().is_enabled());
        s.view.tick();
        assert_eq!(s.view.indicator().highlight_index(), 4);
    }

    #[test]
    fn minus_stops_at_three_dots() {
        let mut s = state();
        for _ in 0..10 {
            press(&mut s, KeyCode::Char('-'));
        }
        assert_eq!(s.view.indicator().dot_count(), 3);
        press(&mut s, KeyCode::Char('+'));
        assert_eq!(s.view.indicator().dot_count(), 4);
    }

    #[test]
    fn diameter_keys_saturate() {
        let mut s = state();
        s.view.set_dot_diameter(i32::MAX);
        press(&mut s, KeyCode::Char(']'));
        assert_eq!(s.view.indicator().dot_diameter(), i32::MAX);

        s.view.set_dot_diameter(i32::MIN);
        press(&mut s, KeyCode::Char('['));
        assert_eq!(s.view.indicator().dot_diameter(), 0);
    }

    #[test]
    fn size_keys_keep_control_square() {
        let mut s = state();
        press(&mut s, KeyCode::Char('l'));
        assert_eq!(s.view.indicator().size(), Size::square(100));
        press(&mut s, KeyCode::Char('k'));
        assert_eq!(s.view.indicator().size(), Size::square(90));
        press(&mut s, KeyCode::Char('j'));
        assert_eq!(s.view.indicator().size(), Size::square(100));
    }

    #[test]
    fn interval_keys_adjust_period() {
        let mut s = state();
        press(&mut s, KeyCode::Char('.'));
        assert_eq!(s.view.indicator().interval(), Duration::from_millis(250));
        press(&mut s, KeyCode::Char(','));
        press(&mut s, KeyCode::Char(','));
        assert_eq!(s.view.indicator().interval(), Duration::from_millis(350));
    }

    #[test]
    fn properties_popup_navigation_and_adjust() {
        let mut s = state();
        press(&mut s, KeyCode::Char('?'));
        assert_eq!(s.active_view, ActiveView::Properties);

        // Row 2 is the dot count.
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Right);
        assert_eq!(s.view.indicator().dot_count(), 7);

        for _ in 0..20 {
            press(&mut s, KeyCode::Down);
        }
        assert_eq!(s.properties_selected, PROPERTY_ITEMS.len() - 1);

        press(&mut s, KeyCode::Esc);
        assert_eq!(s.active_view, ActiveView::Indicator);
        assert!(!s.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut s = state();
        s.active_view = ActiveView::Properties;
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn resize_refits_only_in_fit_mode() {
        let mut s = state();
        handle_resize(&mut s, 80, 24);
        assert_eq!(s.view.indicator().size(), Size::square(90));

        s.fit_to_terminal = true;
        handle_resize(&mut s, 80, 24);
        // Pane inner is 78×21 cells → 78×42 px → 42×42.
        assert_eq!(s.view.indicator().size(), Size::square(42));
    }
}

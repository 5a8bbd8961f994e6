//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::ui::{indicator_widget::IndicatorView, layout::AppLayout};

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Indicator,
    Properties,
}

/// Top-level application state.
pub struct AppState {
    /// The hosted widget (indicator state + paint buffer).
    pub view: IndicatorView,
    /// Persisted properties, written back on save.
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Currently highlighted row in the properties popup.
    pub properties_selected: usize,
    /// When `true`, terminal resizes resize the widget to fill its pane.
    pub fit_to_terminal: bool,
}

impl AppState {
    pub fn new(config: AppConfig, fit_to_terminal: bool) -> Self {
        Self {
            view: IndicatorView::new(config.indicator.clone()),
            config,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            properties_selected: 0,
            fit_to_terminal,
        }
    }

    /// Resize the widget to the largest square that fits its pane inside a
    /// terminal of `terminal` cells.  One cell is one pixel wide and two tall.
    pub fn fit_to(&mut self, terminal: Rect) {
        let pane = AppLayout::from_area(terminal).indicator_inner;
        let side = (pane.width as u32).min(pane.height as u32 * 2);
        self.view.resize(side, side);
    }

    /// Write the live widget properties to the config file.
    pub fn save_config(&mut self) {
        self.config.indicator = self.view.indicator().settings();
        self.status_message = Some(match self.config.save() {
            Ok(()) => "Properties saved".to_string(),
            Err(e) => {
                tracing::warn!("saving config failed: {e:#}");
                format!("Save failed: {e}")
            }
        });
    }
}

//! An animated ring-of-dots busy indicator for the terminal.
//!
//! Run the binary to show the indicator.  Space pauses and resumes it,
//! `?` opens the properties popup, `q` quits.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
    timer::AnimationTimer,
};
use crate::config::AppConfig;
use crate::core::{color::Rgb, geometry::Size};
use crate::ui::{
    indicator_widget::IndicatorWidget, layout::AppLayout, popup::PropertiesPopup, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Animated ring-of-dots busy indicator")]
struct Cli {
    /// Animation interval in milliseconds.
    #[arg(long)]
    interval: Option<u64>,

    /// Dot diameter in logical units.
    #[arg(long)]
    diameter: Option<i32>,

    /// Number of dots (minimum 3).
    #[arg(long)]
    count: Option<usize>,

    /// Highlighted dot colour (#rrggbb, r,g,b or a name).
    #[arg(long)]
    active: Option<Rgb>,

    /// Idle dot colour.
    #[arg(long)]
    idle: Option<Rgb>,

    /// Widget background colour.
    #[arg(long)]
    background: Option<Rgb>,

    /// Side length of the (square) widget in logical units.
    #[arg(long, conflicts_with = "fit")]
    size: Option<u32>,

    /// Size the widget to fill the terminal, following resizes.
    #[arg(long)]
    fit: bool,

    /// Start with the animation paused.
    #[arg(long)]
    paused: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded config.
    fn apply(&self, config: &mut AppConfig) {
        let ind = &mut config.indicator;
        if let Some(ms) = self.interval {
            ind.interval = Duration::from_millis(ms);
        }
        if let Some(d) = self.diameter {
            ind.dot_diameter = d;
        }
        if let Some(n) = self.count {
            ind.dot_count = n;
        }
        if let Some(c) = self.active {
            ind.active_color = c;
        }
        if let Some(c) = self.idle {
            ind.idle_color = c;
        }
        if let Some(c) = self.background {
            ind.background = c;
        }
        if let Some(side) = self.size {
            ind.size = Size::square(side);
        }
        if self.paused {
            ind.enabled = false;
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // the TUI owns stdout
        .init();

    let cli = Cli::parse();

    let mut user_config = AppConfig::load();
    cli.apply(&mut user_config);
    let mut state = AppState::new(user_config, cli.fit);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    if state.fit_to_terminal {
        let size = terminal.size()?;
        state.fit_to(Rect::new(0, 0, size.width, size.height));
    }

    let mut events = spawn_event_reader(Duration::from_millis(100));
    let ind = state.view.indicator();
    let mut timer = AnimationTimer::new(ind.interval(), ind.is_enabled());
    tracing::debug!(settings = ?ind.settings(), "indicator started");

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            let block = Block::default()
                .title(format!(" dot-ring {} ", state.view.indicator().size()))
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            frame.render_stateful_widget(
                IndicatorWidget::new().block(block),
                layout.indicator_area,
                &mut state.view,
            );

            frame.render_widget(status_bar(state), layout.status_area);

            if state.active_view == ActiveView::Properties {
                frame.render_widget(
                    PropertiesPopup {
                        state: &*state,
                        selected: state.properties_selected,
                    },
                    frame.area(),
                );
            }
        })?;

        // One event or one tick per iteration; a tick is fully applied
        // before the next one can be awaited.
        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Resize(w, h) => handler::handle_resize(state, w, h),
                }
            }

            _ = timer.tick() => {
                state.view.tick();
            }
        }

        // Enabled-changed / interval-changed notifications.
        let ind = state.view.indicator();
        timer.sync(ind.is_enabled(), ind.interval());

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn status_bar(state: &AppState) -> Paragraph<'static> {
    let ind = state.view.indicator();
    let run_state = if ind.is_enabled() {
        Span::raw(" ● running ")
    } else {
        Span::styled(" ⏸ paused ", Theme::paused_style())
    };
    let details = format!(
        "{}ms | dot {}/{} ⌀{} | {} ",
        ind.interval().as_millis(),
        ind.highlight_index() + 1,
        ind.dot_count(),
        ind.dot_diameter(),
        ind.size(),
    );
    let hint = state
        .status_message
        .clone()
        .unwrap_or_else(|| "space: pause | ?: properties | w: save | q: quit".to_string());

    Paragraph::new(Line::from(vec![
        run_state,
        Span::raw(details),
        Span::raw("| "),
        Span::raw(hint),
    ]))
    .style(Theme::status_bar_style())
}

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
    tty::IsTty,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};

use glide_core::{AppConfig, Document};
use glide_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    theme::Theme,
    widgets::{DocumentWidget, ScrollButtonsWidget, StatusBarWidget},
};

pub async fn run(config: AppConfig, path: PathBuf) -> Result<()> {
    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let document = Document::new(name, &text);
    tracing::info!(lines = document.height(), "opened {}", path.display());

    if !io::stdout().is_tty() {
        bail!("glide requires a terminal (stdout is not a tty)");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("glide")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let mut app = App::new(document, config.clone());

    // Activation gate: evaluated once against the initial terminal size
    // (one row reserved for the status bar)
    let size = terminal.size()?;
    app.viewport
        .set_viewport_height(size.height.saturating_sub(1) as f64);
    app.attach_controls();

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Tracks whether to poll at the animation frame rate next iteration
    let mut needs_fast_update = false;
    // Document area of the last draw, used for mouse hit testing
    let mut content_area = Rect::default();

    // Main loop
    loop {
        // Advance animations and the deferred visibility update
        app.update_scroll_animation(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            content_area = main_layout[0];
            app.viewport
                .set_viewport_height(content_area.height as f64);

            DocumentWidget::render(frame, main_layout[0], &app, &theme);
            // Controls float over the document, drawn after it
            ScrollButtonsWidget::render(frame, main_layout[0], &app, &theme);
            StatusBarWidget::render(frame, main_layout[1], &app, &theme);
        })?;

        // Handle events (use the faster tick rate during animations)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, now);
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_mouse(mouse, content_area, now);
                }
                AppEvent::Resize(_, h) => {
                    app.handle_resize(h.saturating_sub(1) as f64);
                }
                AppEvent::Tick => {}
            }
        }

        // Pick next iteration's tick rate after the event may have started
        // or stopped an animation
        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    // Clear pending key on any action except the 'g' prefix itself
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollUp => app.scroll_by(-1.0, now),
        Action::ScrollDown => app.scroll_by(1.0, now),
        Action::ScrollHalfPageDown => app.scroll_half_page(1.0, now),
        Action::ScrollHalfPageUp => app.scroll_half_page(-1.0, now),
        Action::ScrollPageDown => app.scroll_full_page(1.0, now),
        Action::ScrollPageUp => app.scroll_full_page(-1.0, now),
        Action::JumpToTop => {
            app.clear_pending_key();
            app.animate_to_top(now);
        }
        Action::JumpToBottom => app.animate_to_bottom(now),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::None => {}
    }
}

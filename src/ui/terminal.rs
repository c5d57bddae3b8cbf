use crate::app::{AppEvent, Controller};
use crate::engine::config::WindowConfig;
use crate::ui::layout::ScreenLayout;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::render_screen;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll interval while nothing is scheduled (session finished)
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The display session: owns the terminal for as long as the reader runs.
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    window: WindowConfig,
    layout: ScreenLayout,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(window: WindowConfig) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new(&window.title)?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            window,
            layout: ScreenLayout::default(),
            _guard: guard,
        })
    }

    /// Runs until the user quits. The single `deadline` slot is the one
    /// pending advance; it is re-armed only from the delay `advance` returns.
    pub fn run_event_loop(&mut self, controller: &mut Controller) -> io::Result<()> {
        let mut deadline = controller.pending_delay().map(deadline_after);
        info!("Event loop started");

        loop {
            self.render_frame(controller)?;

            let timeout = deadline
                .map(|d| d.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_POLL);

            if event::poll(timeout)? {
                let app_event = match event::read()? {
                    Event::Key(key) => AppEvent::from_key(key),
                    Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                        self.layout.hit_test(mouse.column, mouse.row)
                    }
                    _ => AppEvent::None,
                };

                if app_event != AppEvent::None {
                    debug!(?app_event, "Input");
                }
                if !controller.handle_event(app_event) {
                    info!("Window closed");
                    return Ok(());
                }
            }

            if deadline.is_some_and(|d| Instant::now() >= d) {
                deadline = controller.advance().map(deadline_after);
            }
        }
    }

    pub fn render_frame(&mut self, controller: &Controller) -> io::Result<()> {
        let render_state = controller.render_state();
        let window = &self.window;
        let mut layout = self.layout;

        self.terminal.draw(|frame| {
            layout = ScreenLayout::new(frame.area(), window);
            render_screen(frame, &layout, &render_state);
        })?;

        self.layout = layout;
        Ok(())
    }
}

fn deadline_after(delay_ms: u64) -> Instant {
    Instant::now() + Duration::from_millis(delay_ms)
}

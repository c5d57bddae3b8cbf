use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, SetTitle};
use crossterm::{execute, ExecutableCommand};
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// guard. Restored on drop and on panic.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new(title: &str) -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(title)
        )?;

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = io::stdout().execute(DisableMouseCapture);
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            tracing::error!("Panic: {}", panic_info);
            previous(panic_info);
        }));
    });
}

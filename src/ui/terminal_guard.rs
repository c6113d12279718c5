use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

pub type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal once, on drop or from the panic hook, whichever
/// comes first.
///
/// Only panics on the thread that set the terminal up restore it. Request
/// tasks on the runtime's workers may panic while the form keeps drawing.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn install() -> Self {
        let restored = Arc::new(AtomicBool::new(false));
        let hook_flag = Arc::clone(&restored);
        let owner = thread::current().id();
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if claim_restore(&hook_flag, owner) {
                restore_terminal();
            }
            default_hook(info);
        }));
        Self { restored }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored.swap(true, Ordering::SeqCst) {
            restore_terminal();
        }
    }
}

/// True exactly once, and only when called on `owner`.
fn claim_restore(flag: &AtomicBool, owner: ThreadId) -> bool {
    thread::current().id() == owner && !flag.swap(true, Ordering::SeqCst)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Raw mode, alternate screen and bracketed paste for the form.
pub fn setup_terminal() -> io::Result<(FormTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::install();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::{ProgressCallback, SummaryClient, SummaryRequest, SummaryResult};
use crate::clipboard::system_clipboard;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::form::FormController;
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive form until the user quits.
///
/// Requests run on `handle` while this thread keeps drawing and reading
/// input.
pub fn run(config: &Config, handle: Handle) -> io::Result<()> {
    let client = SummaryClient::new(config.backend.clone()).map_err(io::Error::other)?;
    let form = FormController::new().with_mood_analysis(config.backend.analyze_mood);
    let mut app = App::new(
        form,
        system_clipboard(),
        config.output.clone(),
        client.base_url(),
    );

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    tracing::info!(base_url = client.base_url(), "Form started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Submit(request) = handle_key(&mut app, key) {
                    spawn_request(&handle, client.clone(), request, events.sender());
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Progress(pct)) => app.on_progress(pct),
            Ok(AppEvent::Settled(result)) => app.on_settled(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Send `request` in the background. Exactly one `Settled` event follows,
/// even if the task panics or is dropped with the runtime.
fn spawn_request(
    handle: &Handle,
    client: SummaryClient,
    request: SummaryRequest,
    tx: Sender<AppEvent>,
) {
    handle.spawn(async move {
        let settle_tx = tx.clone();
        let mut outcome = scopeguard::guard(
            SummaryResult::unreachable("request task aborted"),
            move |result| {
                let _ = settle_tx.send(AppEvent::Settled(result));
            },
        );

        let on_progress: ProgressCallback = Arc::new(move |pct| {
            let _ = tx.send(AppEvent::Progress(pct));
        });

        *outcome = client.summarize(&request, Some(on_progress)).await;
    });
}

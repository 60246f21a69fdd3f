use aminah_snippet::app::{App, AppEvent};
use aminah_snippet::engine::Config;
use aminah_snippet::logging::init_logging;
use aminah_snippet::ui::TuiManager;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_path = init_logging()?;
    if let Some(path) = &log_path {
        info!(path = %path.display(), "logging to file");
    }

    let mut app = App::new(Config::default());

    // Optional file argument goes straight into the preview
    if let Some(path) = std::env::args().nth(1) {
        app.handle_event(AppEvent::LoadFile(path));
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

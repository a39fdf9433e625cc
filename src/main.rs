mod app;
use flashcards_app::*;

use app::FlashcardApp;
use config::Config;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::debug!("Using {:?}", config.storage);

    let store = config.open_store()?;
    let session = DeckSession::open(store)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcard App",
        options,
        Box::new(|_cc| Ok(Box::new(FlashcardApp::new(session)))),
    )?;
    Ok(())
}

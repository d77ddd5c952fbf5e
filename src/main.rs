//! Lines Intersection entry point
//!
//! Loads settings, opens the native window and runs the game loop until the
//! window is closed.

use lines_intersection::platform::NativePlatform;
use lines_intersection::{GameLoop, Settings};

fn main() {
    env_logger::init();
    log::info!("Lines Intersection starting...");

    let settings = Settings::load_or_default();
    let title = settings.title.clone();
    let (width, height) = (settings.screen_width, settings.screen_height);

    let mut game = GameLoop::new(settings);
    let state = game.run(|| NativePlatform::create(&title, width, height));
    log::debug!("Game loop finished in state {state:?}");

    if game.init_failed() {
        std::process::exit(1);
    }
}

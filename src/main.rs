//! Block Dodge entry point
//!
//! On wasm32 the browser drives the game; natively a headless autopilot run is
//! simulated and summarized.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    block_dodge::platform::web::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frame cap for native runs (~1 hour at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_dodge::Settings;
    use block_dodge::platform::headless;

    env_logger::init();
    log::info!("Block Dodge (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    // Usage: block-dodge [seed] [max_frames]
    let mut args = std::env::args().skip(1);
    let settings = Settings::load();
    let fresh = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            std::process::exit(2);
        }
        None => settings.run_seed(fresh),
    };
    let max_frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {}", e);
            std::process::exit(2);
        }
        None => DEFAULT_MAX_FRAMES,
    };

    let report = headless::run(seed, max_frames, true);
    log::info!(
        "Finished after {} frames: score {}, level {}, health {}",
        report.frames,
        report.score,
        report.level,
        report.health
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode report: {}", e),
    }
}

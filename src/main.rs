//! Fuel Rush entry point
//!
//! In the browser this hands over to `platform::web`. Natively the game runs
//! headless with the autopilot driving and prints a JSON summary.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fuel_rush::Settings;
    use fuel_rush::platform::headless;

    env_logger::init();
    log::info!("Fuel Rush (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let settings = Settings::load();
    let seed = settings.seed_or(clock_seed());

    let summary = headless::run(&settings, seed);
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize run summary: {e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(e) = fuel_rush::platform::web::run() {
        web_sys::console::error_1(&e);
    }
}

//! Platform glue: logger setup and local task spawning.

use inkmind_recognize::BoxFuture;

/// Initialize logging (env_logger on native, browser console on WASM).
///
/// Safe to call more than once; later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("Starting InkMind");
    }
}

/// Initialize logging (env_logger on native, browser console on WASM).
///
/// Safe to call more than once; later calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Starting InkMind (WASM)");
    }
}

/// Run a UI-thread future to completion in the background.
///
/// # Panics
///
/// Panics when called outside a `tokio::task::LocalSet`.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local(future: BoxFuture<'static, ()>) {
    tokio::task::spawn_local(future);
}

/// Run a UI-thread future to completion in the background.
#[cfg(target_arch = "wasm32")]
pub fn spawn_local(future: BoxFuture<'static, ()>) {
    wasm_bindgen_futures::spawn_local(future);
}

// ============================================================================
// HR SALARY SLIP PORTAL - Yew front-end
// ============================================================================
// - Views: components, no business rules
// - Hooks: bind view models and stores to components
// - ViewModels: validation and API orchestration
// - Stores: plain state structs with transition methods
// - Services: HTTP client and session persistence
// - Models: payloads shared with the backend
// ============================================================================

mod app;
mod config;
mod context;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod test_support;

use log::Level;

use crate::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { Level::Debug } else { Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!(
        "🚀 HR Salary Slip Portal starting ({}, API {})",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    yew::Renderer::<app::App>::new().render();
}

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger was already initialized".into());
    }
    log::info!("Starting Vacation Monitoring frontend (wasm)");

    // env.js globals win over ./config.json; see `config::await_api_base_url`.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}

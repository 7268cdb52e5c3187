//! Browser entry point: logging, panic reporting, then the app.

use leptos::mount_to_body;
use leptos::view;
use runprogram_frontend::{App, RUN_PROGRAM_URL};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logging unavailable: {}", e).into());
    }

    log::info!("Upload form ready, posting to {}", RUN_PROGRAM_URL);
    mount_to_body(|| view! { <App/> });
}

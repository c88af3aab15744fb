use acme_website::app::App;
use acme_website::config::{app_config, RuntimeConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match app_config() {
        Ok(config) => (config, None),
        Err(e) => (RuntimeConfig::default(), Some(e)),
    };
    match config.log_level().to_level() {
        Some(level) => {
            if let Err(e) = console_log::init_with_level(level) {
                web_sys::console::error_1(&format!("logger init failed: {e}").into());
            }
        }
        None => log::set_max_level(log::LevelFilter::Off),
    }
    if let Some(e) = config_error {
        log::error!("using default configuration: {e}");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> })
}

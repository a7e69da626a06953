use log::{error, info};

use mingqi_frontend::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page behaviour");
    if let Err(err) = mingqi_frontend::start() {
        error!("Page behaviour not started: {}", err);
    }
}

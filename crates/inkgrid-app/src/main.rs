//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting InkGrid");

    let mut app = inkgrid_app::App::new();
    if let Err(e) = app.run() {
        log::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}

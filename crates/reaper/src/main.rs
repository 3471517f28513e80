use reaper_core::init_logging;

mod app;
mod color;
mod commands;
mod render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Default (no flag) = quiet mode, -v/--verbose = verbose mode
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    commands::run_command(&matches)?;

    Ok(())
}

//! Standalone mock of the text-to-speech API: port 8080, one catch-all
//! route, response selected by an in-code constant.

use log::error;
use std::process;
use voicemock::{Error, Mode, MockTtsServer, ServerConfig};

/// Selects the canned response served to every request. Edit and rebuild to
/// simulate a different API outcome; see [`Mode::from_code`] for the
/// recognized codes.
const MODE_CODE: u8 = 1;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = ServerConfig {
        mode: Mode::from_code(MODE_CODE)?,
        ..ServerConfig::default()
    };

    let server = MockTtsServer::bind(config)?;

    println!("Started listening on port {}...", server.addr().port());
    server.run();

    Ok(())
}

mod app;

use crate::app::App;
use anyhow::{Context, Result};
use fibcycle::{Emitter, EmitterConfig};
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    let app: App = App::new();
    app.init_logging();
    let emitter = Emitter::new(io::stdout().lock(), EmitterConfig::default())?;
    match emitter.run() {
        Ok(never) => match never {},
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed, stopping");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to write to stdout"),
    }
}

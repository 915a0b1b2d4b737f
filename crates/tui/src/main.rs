mod app;
mod config;
mod error;
mod form;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;

    // The TUI owns stdout, so log lines go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spesario_tui={level},ledger={level}",
            level = config.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let mut app = app::App::new(config);
    app.run()?;
    Ok(())
}

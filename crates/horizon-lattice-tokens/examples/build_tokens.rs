//! Token build example: aggregate a directory of theme files into CSS.
//!
//! Run with: cargo run -p horizon-lattice-tokens --example build_tokens -- <themes-dir> [config.toml]
//!
//! With the `hot-reload` feature the stylesheet is rebuilt whenever a theme
//! file changes.

use std::path::PathBuf;

use horizon_lattice_tokens::prelude::*;

fn build(engine: &TokenEngine, themes: &ThemeSet) {
    let semantic = engine.aggregate(themes);
    println!("{}", to_css(&engine.semantic_stylesheet(&semantic)));
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let themes_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("tokens"));
    let config = match args.next() {
        Some(path) => TokenConfig::from_file(path)?,
        None => TokenConfig::default(),
    };

    let engine = TokenEngine::new(config);
    #[allow(unused_mut)]
    let mut themes = ThemeSet::from_dir(&themes_dir)?;
    tracing::info!("Loaded {} themes from {}", themes.len(), themes_dir.display());
    build(&engine, &themes);

    #[cfg(feature = "hot-reload")]
    {
        let mut watcher = TokenWatcher::new()?;
        watcher.watch_dir(&themes_dir)?;

        loop {
            std::thread::sleep(std::time::Duration::from_millis(250));
            let changes = watcher.poll();
            if !changes.is_empty() && !watcher.apply_changes(&mut themes, &changes).is_empty() {
                build(&engine, &themes);
            }
        }
    }

    #[cfg(not(feature = "hot-reload"))]
    Ok(())
}

//! Page entry point.
//!
//! On `wasm32` this boots the page in the browser window (see the `web` module).
//!
//! Natively it runs the page headless against a static site directory:
//!
//! 1. Load `directory.toml` from the working directory, if present
//! 2. Initialize tracing to stderr
//! 3. Apply the theme saved in `<data_dir>/preferences.json`
//! 4. Read the dataset from `<static_root>/<dataset_path>`
//! 5. Render and filter, then write the list container markup to stdout
//!
//! The exit status is non-zero when the dataset could not be loaded; the error
//! notice is still written, exactly as the browser would show it.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
fn main() {
    directory_listing::web::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use directory_listing::dataset::FileSource;
    use directory_listing::infrastructure::preferences_path;
    use directory_listing::observability::init_tracing;
    use directory_listing::storage::{JsonPreferences, MemoryPreferences, PreferenceStore};
    use directory_listing::ui::HeadlessDocument;
    use directory_listing::{Config, DirectoryPage};
    use futures_util::FutureExt;
    use std::path::Path;
    use std::process::ExitCode;

    const CONFIG_FILE: &str = "directory.toml";

    let config = match Config::load(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    let span = tracing::debug_span!("headless_render");
    let _guard = span.entered();

    let store: Box<dyn PreferenceStore> = match JsonPreferences::new(preferences_path(&config.data_dir)) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preference file unusable, theme will not persist");
            Box::new(MemoryPreferences::default())
        }
    };

    let source = FileSource::new(config.static_root.clone());
    let theme_attribute = config.theme_attribute.clone();
    let mut page = DirectoryPage::new(config, HeadlessDocument::new(), store);

    // File reads complete synchronously, so the load future is ready on first poll.
    let loaded = page.start(&source).now_or_never().unwrap_or(false);

    tracing::info!(
        theme = ?page.document().theme_attribute(&theme_attribute),
        total = page.items().len(),
        visible = page.document().visible_count(),
        "page rendered"
    );
    println!("{}", page.document().list_markup().unwrap_or_default());

    if loaded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

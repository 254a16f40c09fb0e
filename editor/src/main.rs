use crate::editor::Editor;
use crate::scene::scene::demo_scene;
use crate::session::session::Session;
use inspector_core::logging::logging::{init_file_logger, init_stderr_logger, last_log};
use inspector_core::storage::editor_config::{ConfigSource, app_dir, load_config, save_config};
use std::path::PathBuf;
use std::process::ExitCode;

mod controls;
mod editor;
mod scene;
mod session;

fn main() -> ExitCode {
    let (config, source) = load_config();

    // Keep the handle alive, the logger stops with it.
    let logger = if config.log_to_file {
        app_dir().map_err(|e| e.to_string()).and_then(|dir| {
            init_file_logger(&dir.join("logs"), &config.log_level).map_err(|e| e.to_string())
        })
    } else {
        init_stderr_logger(&config.log_level).map_err(|e| e.to_string())
    };
    let _logger = match logger {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    source.log();

    // First run: leave an editable config behind.
    if matches!(source, ConfigSource::Missing(_)) {
        if let Err(e) = save_config(&config) {
            log::warn!("Could not write default config: {e}.");
        }
    }

    let session = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Session::load(&path),
        None => Session::demo(),
    };
    let session = match session {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut editor = Editor::new(demo_scene(), &config);
    let frames = session.run(&mut editor);

    log::info!(
        "Ran {frames} frames over {} entities, history at {} of {}, selected {:?}. Last status: {}",
        editor.scene.len(),
        editor.history.cursor(),
        editor.history.len(),
        editor.selected(),
        last_log()
    );
    log::info!("Final scene:\n{}", editor.scene.dump());
    println!("{}", editor.scene.dump());

    ExitCode::SUCCESS
}

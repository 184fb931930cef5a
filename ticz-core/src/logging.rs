use env_logger::Target;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Log to stderr (scripting subcommands).
pub fn init() {
    init_with(None);
}

/// Log to `log_file` when given, otherwise stderr. The TUI owns the terminal,
/// so it always passes a file. If the file cannot be opened we fall back to stderr.
pub fn init_with(log_file: Option<PathBuf>) {
    let target = log_file
        .as_deref()
        .and_then(|path| match open_log_file(path) {
            Ok(target) => Some(target),
            Err(err) => {
                eprintln!("⚠️ Cannot open log file {}: {}", path.display(), err);
                None
            }
        })
        .unwrap_or(Target::Stderr);

    // Respect RUST_LOG if set, otherwise default to info
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(target)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<Target> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Target::Pipe(Box::new(file)))
}

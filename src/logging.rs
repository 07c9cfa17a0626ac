use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::Result;
use env_logger::{Builder, Env, Target};

pub const LOG_FILE: &str = "urdu-reader.log";

/// Route `log` output to a file in `data_dir`; the terminal belongs to the UI.
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init(data_dir: &Path, default_level: &str) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()?;
    Ok(())
}

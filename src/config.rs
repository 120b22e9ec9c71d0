//! Task files.
//!
//! A task file holds one [`TaskChoice`] as JSON, in the same tagged layout
//! the wizard builds:
//!
//! ```json
//! {
//!   "type": "estimate-pi",
//!   "params": {
//!     "repeat_count": 1000,
//!     "sample_count": 100000,
//!     "seed": 42,
//!     "surface": { "type": "html-page", "params": { "path": "pi.html" } }
//!   }
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ui::types::choices::TaskChoice;

pub fn load_task<P: AsRef<Path>>(path: P) -> Result<TaskChoice> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let task = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid task file {}", path.display()))?;
    Ok(task)
}

pub fn save_task<P: AsRef<Path>>(task: &TaskChoice, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, task)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{EstimatePiParams, HtmlPageParameters, SurfaceChoice};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn saved_task_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.json");
        let task = TaskChoice::EstimatePi(EstimatePiParams {
            repeat_count: 12,
            seed: Some(3),
            surface: SurfaceChoice::HtmlPage(HtmlPageParameters {
                path: PathBuf::from("pi.html"),
                plotly_src: None,
            }),
            ..EstimatePiParams::default()
        });
        save_task(&task, &path).unwrap();
        assert_eq!(load_task(&path).unwrap(), task);
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_task(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_task("/no/such/task.json").is_err());
    }
}

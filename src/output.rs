use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PiError;

const RESULT_FILE: &str = "result.txt";
const MARKER_FILE: &str = "computed.json";

/// Writes the computed value to `<out_dir>/result.txt` and a companion
/// `computed.json` marker pointing a downstream consumer at it. Returns the
/// path of the result artifact.
pub fn write_artifacts(out_dir: &Path, pi: &str) -> Result<PathBuf, PiError> {
    let result_path = out_dir.join(RESULT_FILE);
    fs::write(&result_path, pi)?;

    let marker = serde_json::json!({
        "deterministic-output-path": result_path.to_string_lossy()
    });
    fs::write(out_dir.join(MARKER_FILE), marker.to_string())?;

    Ok(result_path)
}

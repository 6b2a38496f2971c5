//! Writing command results to a file or stdout.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `bytes` to `out`, or to stdout when no path is given.
pub fn write_output(out: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

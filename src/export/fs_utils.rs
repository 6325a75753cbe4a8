use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::ensure_parent_dir;
use std::io::{self, Write};
use std::path::Path;

/// Check whether `path` may be written.
///
/// A missing file or `force` is fine. Otherwise the user is asked, and
/// anything but "y"/"yes" cancels (including a closed stdin).
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    ensure_parent_dir(path)?;
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "'{}' exists; use --force to overwrite",
            path.display()
        )))
    }
}

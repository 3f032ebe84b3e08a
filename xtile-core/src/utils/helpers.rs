//! Small helpers that do not belong to a model.
use std::path::PathBuf;

/// `$XDG_RUNTIME_DIR/xtile/<file>`, creating the directory if needed.
///
/// # Errors
///
/// Fails when the XDG runtime directory is not set or cannot be created.
pub fn runtime_file(file: impl AsRef<std::path::Path>) -> crate::errors::Result<PathBuf> {
    let base = xdg::BaseDirectories::with_prefix("xtile")?;
    Ok(base.place_runtime_file(file)?)
}

#[cfg(test)]
pub(crate) mod test {
    pub async fn temp_path() -> std::io::Result<std::path::PathBuf> {
        tokio::task::spawn_blocking(|| tempfile::Builder::new().prefix("xtile").tempfile())
            .await
            .expect("Blocking task joined")?
            .into_temp_path()
            .keep()
            .map_err(Into::into)
    }
}

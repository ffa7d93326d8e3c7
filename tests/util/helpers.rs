use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGING: Once = Once::new();

pub(crate) fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing::subscriber::set_global_default(
            tracing_subscriber::FmtSubscriber::builder()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .finish(),
        )
        .unwrap()
    })
}

/// A temporary directory and a path inside it whose parent does not exist yet.
pub(crate) fn scratch_path(relative: &str) -> (TempDir, Utf8PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = Utf8Path::from_path(temp_dir.path())
        .unwrap()
        .join(relative);
    (temp_dir, path)
}

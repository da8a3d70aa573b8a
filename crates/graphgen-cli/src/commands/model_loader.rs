use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use graphgen_core::{Model, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{}: {source}", origin(.path))]
    Model { path: PathBuf, source: ModelError },
}

fn origin(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Decode the model at `path`, `-` meaning stdin.
pub fn load_model(path: &Path) -> Result<Model, LoadError> {
    let decoded = if is_stdin(path) {
        Model::from_reader(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Model::from_reader(BufReader::new(file))
    };

    let model = decoded.map_err(|source| LoadError::Model {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), objects = model.objects.len(), "model loaded");
    Ok(model)
}

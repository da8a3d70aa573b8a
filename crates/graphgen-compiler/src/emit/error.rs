use graphgen_core::ModelError;

/// Errors that can occur while emitting source for a model.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A kind resolves to an object the model does not declare.
    #[error("kind `{kind}` does not name any object")]
    UnknownObject { kind: String },
}

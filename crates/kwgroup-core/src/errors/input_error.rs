/// Errors raised while decoding raw keyword input.
///
/// Individual records never fail; only a batch whose outer shape is wrong does.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("malformed keyword batch: {reason}")]
    MalformedBatch { reason: String },
}

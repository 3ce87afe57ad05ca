use thiserror::Error;

/// Faults that abort a relay pipeline. Neither kind is recovered where it
/// originates; both propagate to the dispatcher's top-level handler, which
/// logs them and answers the webhook with a server error.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The generation service returned an unexpected or empty shape, or the
    /// transport to it failed.
    #[error("upstream generation failed: {0}")]
    Upstream(String),

    /// The messaging platform rejected the send, or the transport failed.
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_detail() {
        let err = RelayError::Upstream("no candidates".into());
        assert_eq!(err.to_string(), "upstream generation failed: no candidates");

        let err = RelayError::Delivery("403 Forbidden".into());
        assert_eq!(err.to_string(), "message delivery failed: 403 Forbidden");
    }
}

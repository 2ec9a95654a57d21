/// Misuse of a hash engine's lifecycle.
///
/// Every byte sequence is valid input, so the only failure is calling
/// `update` or `finalize` on an engine that has already produced its digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("hash engine already finalized")]
    Finalized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(Error::Finalized.to_string(), "hash engine already finalized");
    }
}

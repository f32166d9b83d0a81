use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(BlogError::NotFound("tag `rust`".into()).to_string(), "tag `rust` not found");
        assert_eq!(BlogError::MethodNotAllowed.to_string(), "method not allowed");
        let err: BlogError = anyhow::anyhow!("disk full").into();
        assert_eq!(err.to_string(), "disk full");
    }
}

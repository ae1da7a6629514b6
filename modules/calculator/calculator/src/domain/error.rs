use thiserror::Error;
use tonic::Status;

/// Domain-specific errors for calculator operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("divisor cannot be zero")]
    DivisionByZero,
}

impl From<DomainError> for Status {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DivisionByZero => Status::invalid_argument(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_invalid_argument() {
        let status = Status::from(DomainError::DivisionByZero);
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "divisor cannot be zero");
    }
}

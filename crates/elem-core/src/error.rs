use thiserror::Error;

pub type ElemResult<T> = Result<T, ElemError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElemError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Reference-data failure raised by a downstream crate, carried as text.
    #[error("Reference data error: {message}")]
    Data { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_names_bounds() {
        let err = ElemError::IndexOob {
            what: "atom",
            index: 7,
            len: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("index=7"));
        assert!(msg.contains("len=3"));
    }

    #[test]
    fn data_error_keeps_message() {
        let err = ElemError::Data {
            message: "covalent radius unavailable for Bk".into(),
        };
        assert!(err.to_string().contains("Bk"));
    }
}

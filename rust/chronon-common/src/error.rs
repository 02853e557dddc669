use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn overflow(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::Overflow {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn division_by_zero(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::DivisionByZero {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn parse(message: impl Into<String>, text: impl Into<String>, error_index: usize) -> Error {
        Error(
            ErrorKind::Parse {
                message: message.into(),
                text: text.into(),
                error_index,
                source: None,
            }
            .into(),
        )
    }

    pub fn parse_with_source(
        message: impl Into<String>,
        text: impl Into<String>,
        error_index: usize,
        source: Error,
    ) -> Error {
        Error(
            ErrorKind::Parse {
                message: message.into(),
                text: text.into(),
                error_index,
                source: Some(source),
            }
            .into(),
        )
    }

    /// Overflow and division by zero: the failures of exact integer arithmetic.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Overflow { .. } | ErrorKind::DivisionByZero { .. }
        )
    }

    pub fn is_parse(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parse { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("division by zero in {operation}")]
    DivisionByZero { operation: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{message}: '{text}' (at index {error_index})")]
    Parse {
        message: String,
        text: String,
        error_index: usize,
        #[source]
        source: Option<Error>,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(_: std::num::TryFromIntError) -> Self {
        Error::overflow("integer conversion")
    }
}

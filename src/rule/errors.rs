use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("missing declaring type in pattern '{pattern}'")]
    MissingDeclaringType { pattern: String },

    #[error("missing method name in pattern '{pattern}'")]
    MissingMethodName { pattern: String },

    #[error("missing parameter list in pattern '{pattern}'")]
    MissingParameterList { pattern: String },

    #[error("empty parameter type in pattern '{pattern}'")]
    EmptyParameterType { pattern: String },
}

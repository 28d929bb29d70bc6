pub mod config;
pub mod error;
pub mod template;
pub mod validate;

pub use template::{render, RequestConfig, SubjectProfile};
pub use validate::{resolve_inputs, Policy, RequestInputs};

pub type CsrConfResult<T> = Result<T, error::CsrConfError>;

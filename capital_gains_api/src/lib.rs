//! Client for the capital gains `calculate` endpoint.
//!
//! Posts a multipart form and returns the generated report archive as an
//! opaque [`Blob`], or an [`Error`] carrying a human-readable message.

mod blob;
mod client;
mod config;
mod errors;
mod request;
pub use self::blob::{Blob, DEFAULT_FILE_NAME};
pub use self::client::Client;
pub use self::config::{ApiConfig, BuildMode, BASE_URL_ENV_VAR, DEVELOPMENT_BASE_URL};
pub use self::errors::{Error, ErrorKind, CALCULATION_FAILED, INVOKE_FAILED};
pub use self::request::{CalculateRequest, Upload};

/// Re-exported so callers can build raw forms without depending on reqwest.
pub use reqwest::multipart;

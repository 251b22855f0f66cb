// Service exports
pub mod relay;

pub use relay::{RelayClient, RelayError, RelayResponse, CORS_HEADERS};

pub mod errors;
pub mod payload;
pub mod service;

pub use errors::TokenError;
pub use payload::TokenPayload;
pub use service::TokenService;

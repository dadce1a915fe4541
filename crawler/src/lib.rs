pub mod errors;
pub mod request;
pub mod session;
pub mod traits;

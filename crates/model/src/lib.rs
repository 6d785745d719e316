pub mod env;
pub mod record;
pub mod request;
pub mod response;

pub use record::LogRecord;
pub use request::{IncomingRequest, RequestError};
pub use response::OutgoingResponse;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

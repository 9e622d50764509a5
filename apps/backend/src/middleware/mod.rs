pub mod request_trace;
pub mod require_permission;
pub mod structured_logger;

pub use request_trace::{RequestId, RequestTrace};
pub use require_permission::{RequirePermission, RequiredPermission};
pub use structured_logger::StructuredLogger;

//! Domain primitives, the record holder, and ports.
//!
//! Public surface:
//! - [`RecordHolder`]: the fixed id/name pair served over HTTP.
//! - [`User`], [`UserId`]: entity returned by the lookup port.
//! - [`ProfileFields`]: request accepted by the profile stub.
//! - [`Error`], [`ErrorCode`]: transport-agnostic error payload.
//! - [`TraceId`]: request correlation identifier.

pub mod error;
pub mod ports;
pub mod profile;
pub mod record;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::profile::ProfileFields;
pub use self::record::RecordHolder;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId};

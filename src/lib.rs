//! Model types for the S3 bucket replication API.
//!
//! This crate covers the `GetBucketReplication`, `PutBucketReplication` and
//! `DeleteBucketReplication` operations: their request and response value
//! objects, the replication configuration shapes they carry, and the
//! per-request override configuration. Every value is produced through a
//! companion builder and compared by member values. There is no client and
//! no wire format here; execution layers bring their own.

pub mod config;
pub mod error;
pub mod fields;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use self::config::RequestOverrideConfig;
pub use self::fields::{FieldAccess, FieldValue};

use std::fmt::{Display, Formatter};

/// Returned by input builders when a required member is missing.
#[non_exhaustive]
#[derive(Debug)]
pub struct BuildError {
    kind: BuildErrorKind,
}
#[derive(Debug)]
enum BuildErrorKind {
    MissingField {
        field: &'static str,
        message: &'static str,
    },
}
impl BuildError {
    pub fn missing_field(field: &'static str, message: &'static str) -> Self {
        Self {
            kind: BuildErrorKind::MissingField { field, message },
        }
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind, BuildErrorKind::MissingField { .. })
    }
}
impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BuildErrorKind::MissingField { field, message } => {
                write!(f, "missing required field `{}`: {}", field, message)
            }
        }
    }
}
impl std::error::Error for BuildError {}

/// Generic metadata attached to every operation error: the service error
/// code, its message, and the request id of the failed call.
#[non_exhaustive]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct ErrorMetadata {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}
impl ErrorMetadata {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
impl std::fmt::Debug for ErrorMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ErrorMetadata");
        formatter.field("code", &self.code);
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
pub mod error_metadata {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) code: Option<String>,
        pub(crate) message: Option<String>,
        pub(crate) request_id: Option<String>,
    }
    impl Builder {
        pub fn code(mut self, input: impl Into<String>) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(mut self, input: Option<String>) -> Self {
            self.code = input;
            self
        }
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: Option<String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn build(self) -> crate::error::ErrorMetadata {
            crate::error::ErrorMetadata {
                code: self.code,
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl ErrorMetadata {
    pub fn builder() -> crate::error::error_metadata::Builder {
        crate::error::error_metadata::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct GetBucketReplicationError {
    pub kind: GetBucketReplicationErrorKind,
    pub(crate) meta: ErrorMetadata,
}
/// Types of errors that can occur for the `GetBucketReplication` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum GetBucketReplicationErrorKind {
    NoSuchBucket(crate::error::NoSuchBucket),
    /// The bucket exists but carries no replication configuration.
    ReplicationConfigurationNotFound(crate::error::ReplicationConfigurationNotFound),
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl Display for GetBucketReplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetBucketReplicationErrorKind::NoSuchBucket(_inner) => _inner.fmt(f),
            GetBucketReplicationErrorKind::ReplicationConfigurationNotFound(_inner) => {
                _inner.fmt(f)
            }
            GetBucketReplicationErrorKind::Unhandled(_inner) => _inner.fmt(f),
        }
    }
}
impl GetBucketReplicationError {
    pub fn new(kind: GetBucketReplicationErrorKind, meta: ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetBucketReplicationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: ErrorMetadata) -> Self {
        let message = err.message().unwrap_or("unhandled error").to_owned();
        Self {
            meta: err,
            kind: GetBucketReplicationErrorKind::Unhandled(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_no_such_bucket(&self) -> bool {
        matches!(&self.kind, GetBucketReplicationErrorKind::NoSuchBucket(_))
    }
    pub fn is_replication_configuration_not_found(&self) -> bool {
        matches!(
            &self.kind,
            GetBucketReplicationErrorKind::ReplicationConfigurationNotFound(_)
        )
    }
}
impl std::error::Error for GetBucketReplicationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetBucketReplicationErrorKind::NoSuchBucket(_inner) => Some(_inner),
            GetBucketReplicationErrorKind::ReplicationConfigurationNotFound(_inner) => Some(_inner),
            GetBucketReplicationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct PutBucketReplicationError {
    pub kind: PutBucketReplicationErrorKind,
    pub(crate) meta: ErrorMetadata,
}
#[non_exhaustive]
#[derive(Debug)]
pub enum PutBucketReplicationErrorKind {
    NoSuchBucket(crate::error::NoSuchBucket),
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl Display for PutBucketReplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PutBucketReplicationErrorKind::NoSuchBucket(_inner) => _inner.fmt(f),
            PutBucketReplicationErrorKind::Unhandled(_inner) => _inner.fmt(f),
        }
    }
}
impl PutBucketReplicationError {
    pub fn new(kind: PutBucketReplicationErrorKind, meta: ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PutBucketReplicationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: ErrorMetadata) -> Self {
        let message = err.message().unwrap_or("unhandled error").to_owned();
        Self {
            meta: err,
            kind: PutBucketReplicationErrorKind::Unhandled(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_no_such_bucket(&self) -> bool {
        matches!(&self.kind, PutBucketReplicationErrorKind::NoSuchBucket(_))
    }
}
impl std::error::Error for PutBucketReplicationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PutBucketReplicationErrorKind::NoSuchBucket(_inner) => Some(_inner),
            PutBucketReplicationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct DeleteBucketReplicationError {
    pub kind: DeleteBucketReplicationErrorKind,
    pub(crate) meta: ErrorMetadata,
}
#[non_exhaustive]
#[derive(Debug)]
pub enum DeleteBucketReplicationErrorKind {
    NoSuchBucket(crate::error::NoSuchBucket),
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl Display for DeleteBucketReplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteBucketReplicationErrorKind::NoSuchBucket(_inner) => _inner.fmt(f),
            DeleteBucketReplicationErrorKind::Unhandled(_inner) => _inner.fmt(f),
        }
    }
}
impl DeleteBucketReplicationError {
    pub fn new(kind: DeleteBucketReplicationErrorKind, meta: ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteBucketReplicationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: ErrorMetadata) -> Self {
        let message = err.message().unwrap_or("unhandled error").to_owned();
        Self {
            meta: err,
            kind: DeleteBucketReplicationErrorKind::Unhandled(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_no_such_bucket(&self) -> bool {
        matches!(&self.kind, DeleteBucketReplicationErrorKind::NoSuchBucket(_))
    }
}
impl std::error::Error for DeleteBucketReplicationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteBucketReplicationErrorKind::NoSuchBucket(_inner) => Some(_inner),
            DeleteBucketReplicationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct NoSuchBucket {
    pub message: Option<String>,
}
impl std::fmt::Debug for NoSuchBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NoSuchBucket");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl NoSuchBucket {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl Display for NoSuchBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NoSuchBucket")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for NoSuchBucket {}
pub mod no_such_bucket {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        pub fn build(self) -> crate::error::NoSuchBucket {
            crate::error::NoSuchBucket {
                message: self.message,
            }
        }
    }
}
impl NoSuchBucket {
    pub fn builder() -> crate::error::no_such_bucket::Builder {
        crate::error::no_such_bucket::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct ReplicationConfigurationNotFound {
    pub message: Option<String>,
}
impl std::fmt::Debug for ReplicationConfigurationNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ReplicationConfigurationNotFound");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl ReplicationConfigurationNotFound {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl Display for ReplicationConfigurationNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReplicationConfigurationNotFoundError")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ReplicationConfigurationNotFound {}
pub mod replication_configuration_not_found {

    #[derive(Default, Clone, PartialEq, Debug, Eq)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        pub fn build(self) -> crate::error::ReplicationConfigurationNotFound {
            crate::error::ReplicationConfigurationNotFound {
                message: self.message,
            }
        }
    }
}
impl ReplicationConfigurationNotFound {
    pub fn builder() -> crate::error::replication_configuration_not_found::Builder {
        crate::error::replication_configuration_not_found::Builder::default()
    }
}

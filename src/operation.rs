//! Marker types for the operations this crate models.

#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetBucketReplication {
    _private: (),
}
impl GetBucketReplication {
    pub fn builder() -> crate::input::get_bucket_replication_input::Builder {
        crate::input::get_bucket_replication_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct PutBucketReplication {
    _private: (),
}
impl PutBucketReplication {
    pub fn builder() -> crate::input::put_bucket_replication_input::Builder {
        crate::input::put_bucket_replication_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteBucketReplication {
    _private: (),
}
impl DeleteBucketReplication {
    pub fn builder() -> crate::input::delete_bucket_replication_input::Builder {
        crate::input::delete_bucket_replication_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}

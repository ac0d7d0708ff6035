use bytes::Bytes;

/// Filesystem helpers for the gateway
pub struct FileSystem;

/// File contents read from disk, ready to upload
#[derive(Debug, Clone)]
pub struct Payload {
    pub filename: String,
    pub bytes: Bytes,
}

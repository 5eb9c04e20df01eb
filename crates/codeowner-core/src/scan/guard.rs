//! Eligibility checks applied before a file is scanned.

/// Files larger than this many bytes are skipped (1 MiB).
pub const MAX_FILE_SIZE: u64 = 1 << 20;

/// Number of leading bytes inspected for binary content.
pub const BINARY_SNIFF_LEN: usize = 512;

/// Why a file was not scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The file exceeds the size limit.
    Oversized,
    /// The file looks binary.
    Binary,
}

/// Returns true if a file of `size` bytes exceeds `limit`.
pub fn is_oversized(size: u64, limit: u64) -> bool {
    size > limit
}

/// Returns true if the first `sniff_len` bytes of `content` contain a NUL.
pub fn is_binary(content: &[u8], sniff_len: usize) -> bool {
    let prefix = &content[..content.len().min(sniff_len)];
    prefix.contains(&0)
}

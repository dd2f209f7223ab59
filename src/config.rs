use serde::{Deserialize, Serialize};

/// Default compression threshold in bytes.
pub const DEFAULT_COMPRESSION_THRESHOLD: usize = 256;

/// Binary codec configuration.
///
/// Controls the per-node compression policy: a framed payload (`String`,
/// `Array`, `Object`) is compressed only when its serialized body is larger
/// than `compression_threshold` bytes *and* the node's depth falls inside
/// `[compression_min_depth, compression_max_depth]`. Depth 0 is the document
/// root. The defaults compress only top-level payloads over 256 bytes.
///
/// The policy never changes the wire format: the flag byte records per node
/// whether compression was applied, so any config decodes any stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    pub compression_threshold: usize,
    pub compression_min_depth: u64,
    pub compression_max_depth: u64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_threshold: DEFAULT_COMPRESSION_THRESHOLD,
            compression_min_depth: 0,
            compression_max_depth: 0,
        }
    }
}

impl CodecConfig {
    /// Configuration that never compresses anything.
    pub fn without_compression() -> Self {
        Self {
            compression_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Restricts compression to the inclusive depth range `[min, max]`.
    pub fn with_depth_range(mut self, min: u64, max: u64) -> Self {
        self.compression_min_depth = min;
        self.compression_max_depth = max;
        self
    }

    /// Решает, сжимать ли фреймированное тело размера `size` на глубине
    /// `depth`. Порог строгий: тело размером ровно в порог не сжимается.
    pub fn should_compress(&self, size: usize, depth: u64) -> bool {
        size > self.compression_threshold
            && depth >= self.compression_min_depth
            && depth <= self.compression_max_depth
    }
}

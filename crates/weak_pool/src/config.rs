/// Watermark configuration for a [`crate::Pool`]'s reserved-size resizing.
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub min_reserved_size: usize,
    pub high_watermark_ratio: f64,
    pub low_watermark_ratio: f64,
}

impl PoolConfig {
    /// Creates a new configuration.
    ///
    /// # Panics
    ///
    /// Panics if the watermark ratios are not both in `(0.0, 1.0)` or if
    /// `low_watermark_ratio >= high_watermark_ratio`.
    pub const fn new(
        min_reserved_size: usize,
        high_watermark_ratio: f64,
        low_watermark_ratio: f64,
    ) -> Self {
        assert!(min_reserved_size > 0, "min_reserved_size must be > 0");
        assert!(
            high_watermark_ratio > 0.0 && high_watermark_ratio < 1.0,
            "high_watermark_ratio must be in (0, 1)"
        );
        assert!(
            low_watermark_ratio > 0.0 && low_watermark_ratio < high_watermark_ratio,
            "low_watermark_ratio must be in (0, high_watermark_ratio)"
        );
        Self {
            min_reserved_size,
            high_watermark_ratio,
            low_watermark_ratio,
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PoolConfig {
    /// `MIN_RESERVED_SIZE = 16`, `HIGH_WATERMARK_RATIO = 0.875`,
    /// `LOW_WATERMARK_RATIO = 0.25`.
    pub const DEFAULT: PoolConfig = PoolConfig::new(16, 0.875, 0.25);
}

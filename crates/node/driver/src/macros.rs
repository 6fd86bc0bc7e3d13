//! Macros for recording metrics.

/// Sets a gauge value.
macro_rules! set {
    ($instrument:ident, $metric:ident, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($crate::Metrics::$metric).set($amount);
    };
}

/// Increments a counter, optionally with a label.
macro_rules! inc {
    ($instrument:ident, $metric:ident, $key:expr, $value:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($crate::Metrics::$metric, $key => $value).increment(1);
    };
    ($instrument:ident, $metric:ident) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($crate::Metrics::$metric).increment(1);
    };
}

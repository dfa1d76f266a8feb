// Prometheus metrics definitions for the iZurvive backend.

use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder,
};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // ── Gauges ───────────────────────────────────────────────────────

    /// Locations in the loaded catalog.
    pub static ref CATALOG_LOCATIONS: IntGauge =
        IntGauge::new("izurvive_catalog_locations", "Locations in the loaded catalog").unwrap();

    /// Spellings (search aliases) in the loaded catalog.
    pub static ref CATALOG_SPELLINGS: IntGauge =
        IntGauge::new("izurvive_catalog_spellings", "Spellings in the loaded catalog").unwrap();

    // ── Counters ─────────────────────────────────────────────────────

    /// Total location searches served.
    pub static ref SEARCHES_TOTAL: IntCounter =
        IntCounter::new("izurvive_searches_total", "Total location searches").unwrap();

    /// Searches that produced no results.
    pub static ref SEARCHES_NO_RESULTS_TOTAL: IntCounter = IntCounter::new(
        "izurvive_searches_no_results_total",
        "Searches that produced no results",
    )
    .unwrap();

    /// Catalog listing requests.
    pub static ref LISTING_REQUESTS_TOTAL: IntCounter = IntCounter::new(
        "izurvive_listing_requests_total",
        "Catalog listing requests",
    )
    .unwrap();

    // ── Histograms ───────────────────────────────────────────────────

    /// Search resolution time in seconds (filter + rank + format).
    pub static ref SEARCH_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "izurvive_search_duration_seconds",
            "Search resolution time in seconds",
        )
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),
    )
    .unwrap();
}

/// Register all metrics with the custom registry. Call once at startup.
pub fn register_metrics() {
    let collectors: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(CATALOG_LOCATIONS.clone()),
        Box::new(CATALOG_SPELLINGS.clone()),
        Box::new(SEARCHES_TOTAL.clone()),
        Box::new(SEARCHES_NO_RESULTS_TOTAL.clone()),
        Box::new(LISTING_REQUESTS_TOTAL.clone()),
        Box::new(SEARCH_DURATION_SECONDS.clone()),
    ];

    for c in collectors {
        REGISTRY.register(c).expect("failed to register metric");
    }
}

/// Serialize all registered metrics to the Prometheus text exposition format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_metrics_returns_string() {
        // Register and gather -- should not panic
        register_metrics();
        let output = gather_metrics();
        assert!(output.is_empty() || output.contains("izurvive_"));
    }

    #[test]
    fn test_metric_increments() {
        CATALOG_LOCATIONS.set(42);
        assert_eq!(CATALOG_LOCATIONS.get(), 42);
        CATALOG_SPELLINGS.set(120);
        assert_eq!(CATALOG_SPELLINGS.get(), 120);

        SEARCHES_TOTAL.inc();
        SEARCHES_NO_RESULTS_TOTAL.inc();
        LISTING_REQUESTS_TOTAL.inc();
        SEARCH_DURATION_SECONDS.observe(0.002);
    }
}

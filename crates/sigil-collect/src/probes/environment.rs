//! Connection, locale, plugin, timing and header probes.

use std::collections::BTreeMap;

use sigil_core::{
    HttpHeaderFingerprint, NetworkConnection, PerformanceTimings, Plugins, TimeZoneInfo,
};

use crate::host::Host;
use crate::probe;

/// Probe connection-quality hints.
pub fn network(host: &dyn Host) -> NetworkConnection {
    probe::or_default(host.connection(), "connection")
}

/// Probe timezone and locale.
pub fn time_zone(host: &dyn Host) -> TimeZoneInfo {
    TimeZoneInfo {
        time_zone: probe::or_default(host.time_zone(), "time_zone"),
        timezone_offset: probe::or_none(
            host.timezone_offset_minutes(),
            "timezone_offset_minutes",
        ),
        languages: probe::or_default(host.languages(), "languages"),
    }
}

/// Probe plugin enumerations.
pub fn plugins(host: &dyn Host) -> Plugins {
    Plugins {
        installed_plugins: probe::or_default(host.plugins(), "plugins"),
        mime_types: probe::or_default(host.mime_types(), "mime_types"),
    }
}

/// Probe navigation, memory and resource timings.
pub fn performance(host: &dyn Host) -> PerformanceTimings {
    let network_timing: BTreeMap<String, f64> =
        probe::or_default(host.resource_timing(), "resource_timing")
            .into_iter()
            .map(|entry| (entry.name, entry.response_end_ms - entry.start_time_ms))
            .collect();

    PerformanceTimings {
        timings: probe::or_default(host.navigation_timing(), "navigation_timing"),
        memory: probe::or_default(host.memory_info(), "memory_info"),
        network_timing,
        framerate: 0.0,
    }
}

/// Client-visible slice of the transport fingerprint.
///
/// Everything but the referer is populated server side; the placeholders
/// stay in the record by design.
pub fn http_header(host: &dyn Host) -> HttpHeaderFingerprint {
    HttpHeaderFingerprint {
        referer: probe::or_none(host.referrer(), "referrer"),
        ..HttpHeaderFingerprint::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ResourceTiming, StaticHost};

    #[test]
    fn network_defaults_are_sentinels() {
        let n = network(&StaticHost::minimal());
        assert_eq!(n.effective_type, "");
        assert!((n.downlink - 0.0).abs() < f64::EPSILON);
        assert_eq!(n.rtt, 0);
    }

    #[test]
    fn timezone_offset_distinguishes_unknown_from_utc() {
        let minimal = time_zone(&StaticHost::minimal());
        assert_eq!(minimal.timezone_offset, None);

        let utc = time_zone(&StaticHost::minimal().with_time_zone("Etc/UTC", 0));
        assert_eq!(utc.timezone_offset, Some(0));
        assert_eq!(utc.time_zone, "Etc/UTC");
    }

    #[test]
    fn resource_entries_fold_into_elapsed_times() {
        let host = StaticHost::minimal().with_resource_timing(vec![
            ResourceTiming {
                name: "https://example.test/app.js".to_string(),
                start_time_ms: 10.0,
                response_end_ms: 52.5,
            },
            ResourceTiming {
                name: "https://example.test/app.css".to_string(),
                start_time_ms: 12.0,
                response_end_ms: 30.0,
            },
        ]);

        let perf = performance(&host);
        assert_eq!(
            perf.network_timing.get("https://example.test/app.js"),
            Some(&42.5)
        );
        assert_eq!(perf.network_timing.len(), 2);
        assert!((perf.framerate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn header_category_is_placeholder_plus_referer() {
        let h = http_header(&StaticHost::minimal().with_referrer("https://ref.test/"));
        assert_eq!(h.referer.as_deref(), Some("https://ref.test/"));
        assert_eq!(h.header_count, None);
        assert!(h.headers_present.is_empty());
    }
}

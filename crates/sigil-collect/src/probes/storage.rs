//! Storage-surface probes.
//!
//! Read-only throughout: enumerating registrations, databases and cache
//! keys must never create any.

use sigil_core::StorageInfo;

use crate::host::Host;
use crate::probe;

/// Probe storage availability and accounting.
pub async fn storage(host: &dyn Host) -> StorageInfo {
    StorageInfo {
        cookies_enabled: probe::or_none(host.cookies_enabled(), "cookies_enabled"),
        storage_estimate: probe::or_default(host.storage_estimate().await, "storage_estimate"),
        service_workers: probe::or_default(
            host.service_worker_scopes().await,
            "service_worker_scopes",
        ),
        indexeddb_dbs: probe::or_default(host.indexed_db_names().await, "indexed_db_names"),
        cache_storage_keys: probe::or_default(
            host.cache_storage_keys().await,
            "cache_storage_keys",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    #[tokio::test]
    async fn minimal_host_degrades_to_defaults() {
        let s = storage(&StaticHost::minimal()).await;
        assert_eq!(s.cookies_enabled, None);
        assert_eq!(s.storage_estimate.usage, 0);
        assert_eq!(s.storage_estimate.quota, 0);
        assert!(s.service_workers.is_empty());
    }

    #[tokio::test]
    async fn populated_surfaces_flow_through() {
        let host = StaticHost::minimal()
            .with_cookies(true)
            .with_storage_estimate(1024, 120_000_000)
            .with_service_workers(vec!["https://example.test/app/".to_string()])
            .with_indexeddb_names(vec!["keyval".to_string()])
            .with_cache_keys(vec!["v1".to_string()]);

        let s = storage(&host).await;
        assert_eq!(s.cookies_enabled, Some(true));
        assert_eq!(s.storage_estimate.quota, 120_000_000);
        assert_eq!(s.indexeddb_dbs, vec!["keyval".to_string()]);
        assert_eq!(s.cache_storage_keys, vec!["v1".to_string()]);
    }

    #[tokio::test]
    async fn failing_estimate_does_not_poison_siblings() {
        let host = StaticHost::minimal()
            .with_failure("storage_estimate")
            .with_cookies(false)
            .with_cache_keys(vec!["v2".to_string()]);

        let s = storage(&host).await;
        assert_eq!(s.storage_estimate.usage, 0);
        assert_eq!(s.cookies_enabled, Some(false));
        assert_eq!(s.cache_storage_keys, vec!["v2".to_string()]);
    }
}

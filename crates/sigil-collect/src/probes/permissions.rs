//! Permission-state probes.

use sigil_core::{PermissionState, PermissionsStatus};

use crate::host::{Host, PermissionName};
use crate::probe;

/// Query the probed permission set, in schema order.
pub async fn permissions(host: &dyn Host) -> PermissionsStatus {
    PermissionsStatus {
        geolocation: query(host, PermissionName::Geolocation).await,
        notifications: query(host, PermissionName::Notifications).await,
        camera: query(host, PermissionName::Camera).await,
        microphone: query(host, PermissionName::Microphone).await,
        midi: query(host, PermissionName::Midi).await,
    }
}

async fn query(host: &dyn Host, name: PermissionName) -> Option<PermissionState> {
    probe::or_none(host.query_permission(name).await, name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    #[tokio::test]
    async fn absent_surface_reads_all_none() {
        let p = permissions(&StaticHost::minimal()).await;
        assert_eq!(p.geolocation, None);
        assert_eq!(p.midi, None);
    }

    #[tokio::test]
    async fn states_flow_through() {
        let host = StaticHost::minimal()
            .with_permission(PermissionName::Geolocation, PermissionState::Granted)
            .with_permission(PermissionName::Camera, PermissionState::Denied)
            .with_permission(PermissionName::Notifications, PermissionState::Prompt);

        let p = permissions(&host).await;
        assert_eq!(p.geolocation, Some(PermissionState::Granted));
        assert_eq!(p.camera, Some(PermissionState::Denied));
        assert_eq!(p.notifications, Some(PermissionState::Prompt));
        // Unconfigured permission stays distinguishable from denied
        assert_eq!(p.microphone, None);
    }

    #[tokio::test]
    async fn throwing_query_reads_none_not_denied() {
        let host = StaticHost::minimal()
            .with_failure("query_permission")
            .with_permission(PermissionName::Midi, PermissionState::Granted);

        let p = permissions(&host).await;
        assert_eq!(p.midi, None);
    }
}

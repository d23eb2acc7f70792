//! Hardware and browser identity, mostly user-agent derived.

use sigil_core::{BrowserInfo, Hardware};

use crate::host::Host;
use crate::probe;
use crate::ua;

/// Probe hardware hints.
pub fn hardware(host: &dyn Host) -> Hardware {
    let user_agent = probe::or_none(host.user_agent(), "user_agent");

    Hardware {
        os: user_agent
            .as_deref()
            .map_or_else(|| "Unknown".to_string(), ua::extract_os),
        cpu_cores: probe::or_default(host.hardware_concurrency(), "hardware_concurrency"),
        device_memory: probe::or_default(host.device_memory_gb(), "device_memory"),
        device_architecture: user_agent.as_deref().and_then(ua::architecture),
    }
}

/// Probe browser identity.
pub fn browser(host: &dyn Host) -> BrowserInfo {
    let user_agent = probe::or_none(host.user_agent(), "user_agent");

    BrowserInfo {
        browser: user_agent
            .as_deref()
            .map_or_else(|| "Unknown".to_string(), ua::browser_product),
        engine: user_agent
            .as_deref()
            .map_or_else(|| "Unknown".to_string(), ua::engine),
        build_id: probe::or_none(host.build_id(), "build_id"),
        // Not detectable client-side; a later behavioral layer may fill it
        private_mode: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use sigil_core::Architecture;

    #[test]
    fn hardware_scenario_arm64() {
        let host = StaticHost::minimal()
            .with_user_agent(
                "Mozilla/5.0 (Linux; Android 14; arm64) AppleWebKit/537.36 \
                 Chrome/124.0.0.0 Safari/537.36",
            )
            .with_hardware_concurrency(8)
            .with_device_memory(16.0);

        let hw = hardware(&host);
        assert_eq!(hw.cpu_cores, 8);
        assert!((hw.device_memory - 16.0).abs() < f64::EPSILON);
        assert_eq!(hw.device_architecture, Some(Architecture::Arm));
        assert_eq!(hw.os, "Android 14");
    }

    #[test]
    fn unknown_sentinels_without_capabilities() {
        let hw = hardware(&StaticHost::minimal());
        assert_eq!(hw.os, "Unknown");
        assert_eq!(hw.cpu_cores, 0);
        assert!((hw.device_memory - 0.0).abs() < f64::EPSILON);
        assert_eq!(hw.device_architecture, None);
    }

    #[test]
    fn browser_identity_from_user_agent() {
        let host = StaticHost::minimal()
            .with_user_agent(
                "Mozilla/5.0 (X11; Linux x86_64; rv:126.0) Gecko/20100101 Firefox/126.0",
            )
            .with_build_id("20181001000000");

        let info = browser(&host);
        assert_eq!(info.browser, "Firefox 126.0");
        assert_eq!(info.engine, "Gecko");
        assert_eq!(info.build_id.as_deref(), Some("20181001000000"));
        assert_eq!(info.private_mode, None);
    }
}

//! The probe wrapper -- one reviewable failure-to-default policy.
//!
//! Every capability read passes through here: an absent capability degrades
//! silently, a denied or failing one degrades with a `debug!` trace. No
//! probe failure is ever observable by the caller.

use tracing::debug;

use crate::host::{HostError, HostResult};

/// Resolve a probe to its value or the type's default.
pub fn or_default<T: Default>(result: HostResult<T>, what: &str) -> T {
    or(result, T::default(), what)
}

/// Resolve a probe to its value or an explicit default.
pub fn or<T>(result: HostResult<T>, default: T, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(HostError::Unsupported) => default,
        Err(e) => {
            debug!(probe = what, error = %e, "probe degraded to default");
            default
        }
    }
}

/// Resolve a probe to `Some(value)` or `None`.
///
/// For fields where "unmeasurable" must stay distinguishable from any
/// measured value.
pub fn or_none<T>(result: HostResult<T>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(HostError::Unsupported) => None,
        Err(e) => {
            debug!(probe = what, error = %e, "probe degraded to none");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_passes_through() {
        assert_eq!(or_default(Ok(7u32), "x"), 7);
        assert_eq!(or_none(Ok("v"), "x"), Some("v"));
    }

    #[test]
    fn unsupported_degrades_silently() {
        assert_eq!(or_default::<u32>(Err(HostError::Unsupported), "x"), 0);
        assert_eq!(or_none::<u32>(Err(HostError::Unsupported), "x"), None);
    }

    #[test]
    fn denied_degrades_to_default() {
        let denied: HostResult<Vec<String>> = Err(HostError::Denied("sandbox".into()));
        assert!(or_default(denied, "x").is_empty());

        let failed: HostResult<bool> = Err(HostError::Failed("boom".into()));
        assert!(or(failed, true, "x"));
    }
}

//! Device records and identifiers.

/// Reserved identifier standing for whatever the OS currently considers the default output device.
///
/// It is resolved anew every time it is compared, see [`identifiers_match`](crate::identifiers_match).
pub const DEFAULT_DEVICE_ID: &str = "default";

/// Returns `true` if the identifier is the [`DEFAULT_DEVICE_ID`] sentinel.
pub fn is_default_device_id(id: &str) -> bool {
    id == DEFAULT_DEVICE_ID
}

/// An active audio output device as seen during enumeration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeviceRecord {
    /// Human-readable label, not guaranteed to be unique.
    pub display_name: String,
    /// Opaque, stable identifier of the endpoint.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(DeviceRecord: Send, Sync, Clone);

    #[test]
    fn recognizes_default_sentinel() {
        assert!(is_default_device_id("default"));
        assert!(!is_default_device_id("Default"));
        assert!(!is_default_device_id(""));
        assert!(!is_default_device_id("{0.0.0.00000000}.{default}"));
    }
}

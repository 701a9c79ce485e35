//! Default device resolution and identifier matching.

use std::borrow::Cow;

use crate::backend::AudioSubsystem;
use crate::device::is_default_device_id;
use crate::internal::{
    ResultExt,
    err_with_context,
};

/// Returns the identifier of the subsystem's current default output device.
///
/// Nothing is cached, every call queries the subsystem again. Any failure, including the absence
/// of a default device, is logged and yields an empty string.
pub fn resolve_default_device_id_with<S>(subsystem: &S) -> String
where
    S: AudioSubsystem + ?Sized,
{
    subsystem
        .default_render_endpoint()
        .map_err(|err| err_with_context(err, "Failed to get default audio endpoint"))
        .and_then(|endpoint| {
            subsystem
                .endpoint_id(&endpoint)
                .map_err(|err| err_with_context(err, "Failed to get default device ID"))
        })
        .unwrap_or_default_and_log_error()
}

/// Compares two device identifiers, resolving the `"default"` sentinel with `resolve_default`.
///
/// - Returns `false` if either identifier is absent.
/// - Each side that is the sentinel is resolved separately, so `resolve_default` runs once per sentinel.
/// - The resolved values are compared exactly.
///
/// A failed resolution yields an empty string, so two failed resolutions compare equal.
pub fn identifiers_match_by<F>(id_a: Option<&str>, id_b: Option<&str>, mut resolve_default: F) -> bool
where
    F: FnMut() -> String,
{
    let (Some(id_a), Some(id_b)) = (id_a, id_b) else {
        return false;
    };
    let id_a = resolve_sentinel(id_a, &mut resolve_default);
    let id_b = resolve_sentinel(id_b, &mut resolve_default);
    id_a == id_b
}

fn resolve_sentinel<'a, F>(id: &'a str, resolve_default: &mut F) -> Cow<'a, str>
where
    F: FnMut() -> String,
{
    if is_default_device_id(id) {
        Cow::Owned(resolve_default())
    } else {
        Cow::Borrowed(id)
    }
}

/// Compares two device identifiers, resolving the `"default"` sentinel through the given subsystem.
///
/// See [`identifiers_match_by`] for the exact rules.
pub fn identifiers_match_with<S>(subsystem: &S, id_a: Option<&str>, id_b: Option<&str>) -> bool
where
    S: AudioSubsystem + ?Sized,
{
    identifiers_match_by(id_a, id_b, || resolve_default_device_id_with(subsystem))
}

#[cfg(all(windows, feature = "wasapi"))]
mod wasapi_entry {
    use super::{
        identifiers_match_by,
        resolve_default_device_id_with,
    };
    use crate::com::ComRuntime;
    use crate::wasapi::WasapiSubsystem;

    /// Returns the identifier of the current default audio output device, or an empty string on failure.
    pub fn resolve_default_device_id() -> String {
        let _com = match ComRuntime::initialize() {
            Ok(runtime) => runtime,
            Err(err) => {
                log::error!("Failed to initialize COM: {err}");
                return String::new();
            }
        };
        resolve_default_device_id_with(&WasapiSubsystem::new())
    }

    /// Compares two device identifiers, resolving `"default"` to the current default output device.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use audio_monitoring_devices::identifiers_match;
    ///
    /// let monitoring_device = Some("default");
    /// if identifiers_match(monitoring_device, Some("{0.0.0.00000000}.{5b6c2a4e}")) {
    ///     println!("Monitoring the default device");
    /// }
    /// ```
    pub fn identifiers_match(id_a: Option<&str>, id_b: Option<&str>) -> bool {
        identifiers_match_by(id_a, id_b, resolve_default_device_id)
    }
}

#[cfg(all(windows, feature = "wasapi"))]
pub use wasapi_entry::{
    identifiers_match,
    resolve_default_device_id,
};

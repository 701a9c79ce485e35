//! Enumeration of active audio output devices.

use std::fmt;
use std::io;

use crate::backend::{
    AudioSubsystem,
    EndpointCollection,
};
use crate::device::DeviceRecord;
use crate::internal::err_with_context;

/// The per-device retrieval step that failed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum DeviceInfoStep {
    GetDevice,
    GetId,
    GetFriendlyName,
}

impl fmt::Display for DeviceInfoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeviceInfoStep::GetDevice => "get device",
            DeviceInfoStep::GetId => "get device ID",
            DeviceInfoStep::GetFriendlyName => "get device friendly name",
        };
        f.write_str(text)
    }
}

#[derive(Debug)]
struct DeviceInfoError {
    index: u32,
    step: DeviceInfoStep,
    source: io::Error,
}

impl fmt::Display for DeviceInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to {} at index {}: {}",
            self.step, self.index, self.source
        )
    }
}

fn read_device_record<S>(
    subsystem: &S,
    endpoints: &S::Endpoints,
    index: u32,
) -> Result<DeviceRecord, DeviceInfoError>
where
    S: AudioSubsystem + ?Sized,
{
    let at_step = |step: DeviceInfoStep| move |source: io::Error| DeviceInfoError {
        index,
        step,
        source,
    };
    let endpoint = endpoints
        .item(index)
        .map_err(at_step(DeviceInfoStep::GetDevice))?;
    let id = subsystem
        .endpoint_id(&endpoint)
        .map_err(at_step(DeviceInfoStep::GetId))?;
    let display_name = subsystem
        .endpoint_friendly_name(&endpoint)
        .map_err(at_step(DeviceInfoStep::GetFriendlyName))?;
    Ok(DeviceRecord { display_name, id })
}

/// Visits active endpoints until the callback returns `false`.
///
/// Only subsystem level failures are returned. Devices that fail individually are logged and skipped.
fn try_enumerate_with<S, F>(subsystem: &S, mut callback: F) -> io::Result<()>
where
    S: AudioSubsystem + ?Sized,
    F: FnMut(&DeviceRecord) -> bool,
{
    let endpoints = subsystem
        .active_render_endpoints()
        .map_err(|err| err_with_context(err, "Failed to enumerate audio endpoints"))?;
    let count = endpoints
        .count()
        .map_err(|err| err_with_context(err, "Failed to get device count"))?;
    log::debug!("Found {count} active audio output endpoints");
    for index in 0..count {
        match read_device_record(subsystem, &endpoints, index) {
            Ok(record) => {
                if !callback(&record) {
                    log::debug!("Device enumeration stopped by callback at index {index}");
                    break;
                }
            }
            Err(err) => log::error!("{err}"),
        }
    }
    Ok(())
}

/// Calls `callback` for every active audio output device of the given subsystem, in OS order.
///
/// The callback returns `true` to continue and `false` to stop. The record lent to it is only valid
/// for the duration of the call.
///
/// Errors are logged, never returned:
///
/// - A device whose endpoint, ID or friendly name cannot be retrieved is skipped.
/// - A failure to acquire the endpoint collection or its size ends the enumeration without any callback.
pub fn enumerate_devices_with<S, F>(subsystem: &S, callback: F)
where
    S: AudioSubsystem + ?Sized,
    F: FnMut(&DeviceRecord) -> bool,
{
    if let Err(err) = try_enumerate_with(subsystem, callback) {
        log::error!("{err}");
    }
}

/// Returns all active audio output devices of the given subsystem.
///
/// Unlike [`enumerate_devices_with`], subsystem level failures are returned to the caller.
/// Individual devices that cannot be read are still skipped.
pub fn active_devices_with<S>(subsystem: &S) -> io::Result<Vec<DeviceRecord>>
where
    S: AudioSubsystem + ?Sized,
{
    let mut devices = Vec::new();
    try_enumerate_with(subsystem, |record| {
        devices.push(record.clone());
        true
    })?;
    Ok(devices)
}

#[cfg(all(windows, feature = "wasapi"))]
mod wasapi_entry {
    use std::io;

    use super::{
        active_devices_with,
        enumerate_devices_with,
    };
    use crate::com::ComRuntime;
    use crate::device::DeviceRecord;
    use crate::wasapi::WasapiSubsystem;

    /// Calls `callback` for every active audio output device, in OS order.
    ///
    /// COM is initialized for the calling thread for the duration of the call.
    /// See [`enumerate_devices_with`] for the callback and error semantics.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use audio_monitoring_devices::enumerate_devices;
    ///
    /// let mut names = Vec::new();
    /// enumerate_devices(|device| {
    ///     names.push(device.display_name.clone());
    ///     true
    /// });
    /// ```
    pub fn enumerate_devices<F>(callback: F)
    where
        F: FnMut(&DeviceRecord) -> bool,
    {
        let _com = match ComRuntime::initialize() {
            Ok(runtime) => runtime,
            Err(err) => {
                log::error!("Failed to initialize COM: {err}");
                return;
            }
        };
        enumerate_devices_with(&WasapiSubsystem::new(), callback);
    }

    /// Returns all active audio output devices.
    pub fn active_devices() -> io::Result<Vec<DeviceRecord>> {
        let _com = ComRuntime::initialize()?;
        active_devices_with(&WasapiSubsystem::new())
    }
}

#[cfg(all(windows, feature = "wasapi"))]
pub use wasapi_entry::{
    active_devices,
    enumerate_devices,
};

/*!
Discovery of audio output devices for monitoring.

Lists the active audio render endpoints and matches device identifiers, treating the
[`DEFAULT_DEVICE_ID`] token as whatever device the OS currently uses as its default output.

The logic runs against the [`AudioSubsystem`](backend::AudioSubsystem) abstraction. The Windows
implementation lives in [`wasapi`] (feature `wasapi`) together with entry points that set up COM
for the calling thread:

```no_run
# #[cfg(all(windows, feature = "wasapi"))]
# {
use audio_monitoring_devices::{
    DEFAULT_DEVICE_ID,
    enumerate_devices,
    identifiers_match,
};

enumerate_devices(|device| {
    let is_default = identifiers_match(Some(DEFAULT_DEVICE_ID), Some(&device.id));
    println!("{} (default: {is_default})", device.display_name);
    true
});
# }
```

Failures are reported through the [`log`] facade only.
*/

#![cfg_attr(nightly, feature(doc_auto_cfg))]

pub mod backend;
#[cfg(all(windows, feature = "wasapi"))]
pub mod com;
pub mod device;
pub mod enumerate;
pub mod matching;
#[cfg(all(windows, feature = "wasapi"))]
pub mod wasapi;

mod internal;
#[cfg_attr(not(all(windows, feature = "wasapi")), allow(dead_code))]
mod string;

pub use device::{
    DEFAULT_DEVICE_ID,
    DeviceRecord,
    is_default_device_id,
};
#[cfg(all(windows, feature = "wasapi"))]
pub use enumerate::{
    active_devices,
    enumerate_devices,
};
pub use enumerate::{
    active_devices_with,
    enumerate_devices_with,
};
#[cfg(all(windows, feature = "wasapi"))]
pub use matching::{
    identifiers_match,
    resolve_default_device_id,
};
pub use matching::{
    identifiers_match_by,
    identifiers_match_with,
    resolve_default_device_id_with,
};

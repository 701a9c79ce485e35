//! Windows Core Audio (MMDevice API) backend.

use std::io;

use num_enum::IntoPrimitive;
use windows::Win32::Devices::FunctionDiscovery::PKEY_Device_FriendlyName;
use windows::Win32::Media::Audio::{
    DEVICE_STATE_ACTIVE,
    ERole,
    IMMDevice,
    IMMDeviceCollection,
    IMMDeviceEnumerator,
    MMDeviceEnumerator,
    eCommunications,
    eConsole,
    eMultimedia,
    eRender,
};
use windows::Win32::System::Com::STGM_READ;
use windows::Win32::System::Com::StructuredStorage::PROPVARIANT;
use windows::Win32::System::Variant::VT_LPWSTR;
use windows::core::GUID;

use crate::backend::{
    AudioSubsystem,
    EndpointCollection,
};
use crate::com::{
    ComInterfaceExt,
    ComTaskMemory,
};
use crate::internal::{
    custom_err_with_code,
    err_with_context,
};
use crate::string::FromWideString;

impl ComInterfaceExt for IMMDeviceEnumerator {
    const CLASS_GUID: GUID = MMDeviceEnumerator;
}

/// Role whose default device is tracked.
#[derive(IntoPrimitive, Copy, Clone, Eq, PartialEq, Default, Debug)]
#[repr(i32)]
pub enum EndpointRole {
    /// Games, system notification sounds and voice commands.
    #[default]
    Console = eConsole.0,
    /// Music, movies, narration and live music recording.
    Multimedia = eMultimedia.0,
    /// Voice communications.
    Communications = eCommunications.0,
}

impl From<EndpointRole> for ERole {
    fn from(value: EndpointRole) -> Self {
        ERole(value.into())
    }
}

/// Audio subsystem backed by `IMMDeviceEnumerator`.
///
/// Holds no OS resources itself: every query creates its own enumerator. COM must be initialized
/// on the calling thread, e.g. with [`ComRuntime`](crate::com::ComRuntime).
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct WasapiSubsystem {
    default_role: EndpointRole,
}

impl WasapiSubsystem {
    /// Creates a subsystem tracking the default device of the [`EndpointRole::Console`] role.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the role used when querying the default device.
    pub fn with_default_role(mut self, role: EndpointRole) -> Self {
        self.default_role = role;
        self
    }

    /// Returns the role used when querying the default device.
    pub fn default_role(&self) -> EndpointRole {
        self.default_role
    }

    fn device_enumerator() -> io::Result<IMMDeviceEnumerator> {
        IMMDeviceEnumerator::new_instance()
            .map_err(|err| err_with_context(err, "Failed to create IMMDeviceEnumerator"))
    }
}

impl AudioSubsystem for WasapiSubsystem {
    type Endpoint = IMMDevice;
    type Endpoints = IMMDeviceCollection;

    fn active_render_endpoints(&self) -> io::Result<IMMDeviceCollection> {
        let enumerator = Self::device_enumerator()?;
        let endpoints = unsafe { enumerator.EnumAudioEndpoints(eRender, DEVICE_STATE_ACTIVE) }?;
        Ok(endpoints)
    }

    fn default_render_endpoint(&self) -> io::Result<IMMDevice> {
        let enumerator = Self::device_enumerator()?;
        let device =
            unsafe { enumerator.GetDefaultAudioEndpoint(eRender, self.default_role.into()) }?;
        Ok(device)
    }

    fn endpoint_id(&self, endpoint: &IMMDevice) -> io::Result<String> {
        let raw_id = unsafe { endpoint.GetId() }?;
        let _raw_id_memory = ComTaskMemory(raw_id.as_ptr());
        unsafe { raw_id.as_wide() }.to_utf8_string()
    }

    fn endpoint_friendly_name(&self, endpoint: &IMMDevice) -> io::Result<String> {
        let property_store = unsafe { endpoint.OpenPropertyStore(STGM_READ) }
            .map_err(|err| err_with_context(err.into(), "Failed to open property store"))?;
        let friendly_name_prop: PROPVARIANT =
            unsafe { property_store.GetValue(&PKEY_Device_FriendlyName) }?;
        friendly_name_from_variant(&friendly_name_prop)
    }
}

fn friendly_name_from_variant(friendly_name_prop: &PROPVARIANT) -> io::Result<String> {
    let variant_type = friendly_name_prop.vt();
    if variant_type != VT_LPWSTR {
        return Err(custom_err_with_code(
            "Device friendly name has unexpected variant type",
            variant_type.0,
        ));
    }
    let raw_name = unsafe { friendly_name_prop.Anonymous.Anonymous.Anonymous.pwszVal };
    if raw_name.is_null() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Device friendly name is null",
        ));
    }
    unsafe { raw_name.as_wide() }
        .to_utf8_string()
        .map_err(|err| err_with_context(err, "Failed to convert device friendly name"))
}

impl EndpointCollection for IMMDeviceCollection {
    type Endpoint = IMMDevice;

    fn count(&self) -> io::Result<u32> {
        let count = unsafe { self.GetCount() }?;
        Ok(count)
    }

    fn item(&self, index: u32) -> io::Result<IMMDevice> {
        let device = unsafe { self.Item(index) }?;
        Ok(device)
    }
}

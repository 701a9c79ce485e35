use std::cell::Cell;
use std::io;

use super::{
    AudioSubsystem,
    EndpointCollection,
};
use crate::internal::custom_err_with_code;

const E_FAIL: &str = "0x80004005";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum MockFailure {
    Item,
    Id,
    FriendlyName,
}

#[derive(Clone, Debug)]
pub(crate) struct MockDevice {
    pub name: &'static str,
    pub id: &'static str,
    pub failure: Option<MockFailure>,
}

impl MockDevice {
    pub(crate) fn new(name: &'static str, id: &'static str) -> Self {
        Self {
            name,
            id,
            failure: None,
        }
    }

    pub(crate) fn failing(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }
}

/// In-memory subsystem with scriptable failures.
#[derive(Default, Debug)]
pub(crate) struct MockSubsystem {
    pub devices: Vec<MockDevice>,
    /// `None` means no default device is configured.
    pub default_id: Option<&'static str>,
    pub fail_endpoints: bool,
    pub fail_count: bool,
    pub fail_default_id: bool,
    default_lookups: Cell<usize>,
}

impl MockSubsystem {
    pub(crate) fn with_devices(devices: impl IntoIterator<Item = MockDevice>) -> Self {
        Self {
            devices: devices.into_iter().collect(),
            ..Default::default()
        }
    }

    pub(crate) fn with_default(default_id: &'static str) -> Self {
        Self {
            default_id: Some(default_id),
            ..Default::default()
        }
    }

    pub(crate) fn default_lookups(&self) -> usize {
        self.default_lookups.get()
    }
}

#[derive(Debug)]
pub(crate) struct MockEndpoints {
    devices: Vec<MockDevice>,
    fail_count: bool,
}

impl EndpointCollection for MockEndpoints {
    type Endpoint = MockDevice;

    fn count(&self) -> io::Result<u32> {
        if self.fail_count {
            return Err(custom_err_with_code("Mock count failure", E_FAIL));
        }
        u32::try_from(self.devices.len()).map_err(io::Error::other)
    }

    fn item(&self, index: u32) -> io::Result<MockDevice> {
        let device = usize::try_from(index)
            .ok()
            .and_then(|index| self.devices.get(index))
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        if device.failure == Some(MockFailure::Item) {
            return Err(custom_err_with_code("Mock item failure", E_FAIL));
        }
        Ok(device.clone())
    }
}

impl AudioSubsystem for MockSubsystem {
    type Endpoint = MockDevice;
    type Endpoints = MockEndpoints;

    fn active_render_endpoints(&self) -> io::Result<MockEndpoints> {
        if self.fail_endpoints {
            return Err(custom_err_with_code("Mock endpoint collection failure", E_FAIL));
        }
        Ok(MockEndpoints {
            devices: self.devices.clone(),
            fail_count: self.fail_count,
        })
    }

    fn default_render_endpoint(&self) -> io::Result<MockDevice> {
        self.default_lookups.set(self.default_lookups.get() + 1);
        let failure = self.fail_default_id.then_some(MockFailure::Id);
        self.default_id
            .map(|id| MockDevice {
                name: "Default",
                id,
                failure,
            })
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Element not found"))
    }

    fn endpoint_id(&self, endpoint: &MockDevice) -> io::Result<String> {
        if endpoint.failure == Some(MockFailure::Id) {
            return Err(custom_err_with_code("Mock ID failure", E_FAIL));
        }
        Ok(endpoint.id.to_owned())
    }

    fn endpoint_friendly_name(&self, endpoint: &MockDevice) -> io::Result<String> {
        if endpoint.failure == Some(MockFailure::FriendlyName) {
            return Err(custom_err_with_code("Mock friendly name failure", E_FAIL));
        }
        Ok(endpoint.name.to_owned())
    }
}

//! Abstraction over the OS audio device discovery API.
//!
//! The enumeration and matching logic only talks to these traits. On Windows they are implemented
//! by [`WasapiSubsystem`](crate::wasapi::WasapiSubsystem).

use std::io;

#[cfg(test)]
pub(crate) mod mock;

/// Capabilities needed from an audio subsystem to discover output devices.
///
/// Every method acquires its own OS resources and releases them when the returned values are dropped.
pub trait AudioSubsystem {
    type Endpoint;
    type Endpoints: EndpointCollection<Endpoint = Self::Endpoint>;

    /// Returns the currently active render (output) endpoints.
    fn active_render_endpoints(&self) -> io::Result<Self::Endpoints>;

    /// Returns the render endpoint the OS currently uses as its default.
    fn default_render_endpoint(&self) -> io::Result<Self::Endpoint>;

    /// Returns the stable identifier of the endpoint as UTF-8.
    fn endpoint_id(&self, endpoint: &Self::Endpoint) -> io::Result<String>;

    /// Returns the human-readable name of the endpoint as UTF-8.
    fn endpoint_friendly_name(&self, endpoint: &Self::Endpoint) -> io::Result<String>;
}

/// An indexed snapshot of endpoints.
pub trait EndpointCollection {
    type Endpoint;

    fn count(&self) -> io::Result<u32>;

    fn item(&self, index: u32) -> io::Result<Self::Endpoint>;
}

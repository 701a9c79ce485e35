/*!
Component Object Model (COM) runtime scoping.
*/

use std::io;
use std::marker::PhantomData;

use num_enum::IntoPrimitive;
use windows::Win32::Foundation::RPC_E_CHANGED_MODE;
use windows::Win32::System::Com::{
    CLSCTX_INPROC_SERVER,
    COINIT,
    COINIT_APARTMENTTHREADED,
    COINIT_MULTITHREADED,
    CoCreateInstance,
    CoInitializeEx,
    CoTaskMemFree,
    CoUninitialize,
};
use windows::core::{
    GUID,
    Interface,
};

/// COM threading model for [`ComRuntime::initialize_with`].
#[derive(IntoPrimitive, Copy, Clone, Eq, PartialEq, Default, Debug)]
#[repr(i32)]
pub enum ComApartment {
    /// Single-threaded apartment.
    #[default]
    SingleThreaded = COINIT_APARTMENTTHREADED.0,
    /// Multithreaded apartment.
    MultiThreaded = COINIT_MULTITHREADED.0,
}

impl From<ComApartment> for COINIT {
    fn from(value: ComApartment) -> Self {
        COINIT(value.into())
    }
}

/// COM initialization of the current thread, undone when dropped.
///
/// Nested initializations on the same thread are fine. If the thread already uses a different
/// apartment type, the existing runtime is used as is and will not be uninitialized by this guard.
#[derive(Debug)]
pub struct ComRuntime {
    owns_initialization: bool,
    phantom: PhantomData<*mut ()>,
}

impl ComRuntime {
    /// Initializes COM for the current thread as a single-threaded apartment.
    pub fn initialize() -> io::Result<Self> {
        Self::initialize_with(ComApartment::default())
    }

    /// Initializes COM for the current thread with the given apartment type.
    ///
    /// Succeeds without taking ownership if the thread already uses another apartment type.
    pub fn initialize_with(apartment: ComApartment) -> io::Result<Self> {
        let init_result = unsafe { CoInitializeEx(None, apartment.into()) };
        let owns_initialization = if init_result == RPC_E_CHANGED_MODE {
            log::debug!("COM already initialized with a different apartment type, reusing it");
            false
        } else {
            init_result.ok()?;
            true
        };
        Ok(Self {
            owns_initialization,
            phantom: PhantomData,
        })
    }
}

impl Drop for ComRuntime {
    fn drop(&mut self) {
        if self.owns_initialization {
            unsafe { CoUninitialize() }
        }
    }
}

pub(crate) trait ComInterfaceExt: Interface {
    const CLASS_GUID: GUID;

    /// Creates an instance of the class. COM must be initialized on the calling thread.
    fn new_instance() -> io::Result<Self> {
        let result = unsafe { CoCreateInstance(&Self::CLASS_GUID, None, CLSCTX_INPROC_SERVER) };
        result.map_err(Into::into)
    }
}

/// COM task memory location to be automatically freed.
#[derive(Debug)]
pub(crate) struct ComTaskMemory<T>(pub *mut T);

impl<T> Drop for ComTaskMemory<T> {
    fn drop(&mut self) {
        unsafe { CoTaskMemFree(Some(self.0.cast_const().cast())) }
    }
}

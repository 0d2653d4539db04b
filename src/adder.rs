//! The computation side of the bridge: one stateless addition.

use std::os::raw::c_int;
use std::sync::Arc;

use libloading::Library;

/// Signature of the exported `add_numbers` symbol.
pub type AddFn = extern "C" fn(c_int, c_int) -> c_int;

/// Name the C-ABI export is resolved by.
pub const ADD_SYMBOL: &str = "add_numbers";

/// Two integers in, their sum out.
pub trait Adder {
    fn add(&self, a: i32, b: i32) -> i32;
}

/// Wrapping addition. Overflow is not reported.
#[no_mangle]
pub extern "C" fn add_numbers(a: c_int, b: c_int) -> c_int {
    a.wrapping_add(b)
}

/// `Adder` over a resolved `add_numbers` function pointer.
///
/// Holds the library the pointer came from so it cannot be unloaded
/// underneath a live adder.
#[derive(Clone)]
pub struct NativeAdder {
    func: AddFn,
    _library: Option<Arc<Library>>,
}

impl NativeAdder {
    pub(crate) fn new(func: AddFn, library: Option<Arc<Library>>) -> Self {
        Self {
            func,
            _library: library,
        }
    }
}

impl Adder for NativeAdder {
    fn add(&self, a: i32, b: i32) -> i32 {
        (self.func)(a, b)
    }
}

impl std::fmt::Debug for NativeAdder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeAdder")
            .field("func", &(self.func as *const ()))
            .field("dynamic", &self._library.is_some())
            .finish()
    }
}

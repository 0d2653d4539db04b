// native_lib: the native half of the JNI add-numbers sample.
//
// Built as a cdylib for the Android activity and as an rlib for the
// `addnum` host and the tests.

pub mod activity;
pub mod adder;
pub mod config;
pub mod error;
pub mod jni_bridge;
pub mod loader;
pub mod logging;
pub mod presentation;

pub use activity::{ClickOutcome, SumActivity};
pub use adder::{add_numbers, Adder, NativeAdder};
pub use config::SampleConfig;
pub use error::{InputError, LibraryLoadError, PresentationError, SampleError, SampleResult};
pub use loader::{LibrarySource, NativeLibrary};
pub use presentation::{
    FieldId, MessageKind, MessageSurface, RecordingSurface, SumPresenter, ToastDuration,
    TransientMessage,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    format!("native_lib v{}", VERSION)
}

// JNI entry points for com.example.myjnisample.MainActivity.
//
// The activity calls System.loadLibrary("native_lib") from its static
// initializer, which lands in JNI_OnLoad below before any native method can
// run.

#![allow(non_snake_case)]

use std::os::raw::c_void;

use jni::objects::JObject;
use jni::sys::{jint, JNI_ERR, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};

use crate::adder::{Adder, ADD_SYMBOL};
use crate::error::LibraryLoadError;
use crate::loader::{LibrarySource, NativeLibrary};
use crate::logging::{log_error, log_info};

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    log_info("JNI_OnLoad called");
    on_load(&LibrarySource::InProcess)
}

/// Initializes the library and picks the `JNI_OnLoad` return value.
pub fn on_load(source: &LibrarySource) -> jint {
    match NativeLibrary::initialize(source, ADD_SYMBOL) {
        Ok(library) => {
            log_info(&format!("{} ready ({})", crate::version(), library.origin()));
            JNI_VERSION_1_6
        }
        Err(err) => {
            // JNI_ERR makes System.loadLibrary throw UnsatisfiedLinkError.
            log_error(&format!("failed to initialize native_lib: {err}"));
            JNI_ERR
        }
    }
}

/// `private native int addNumbers(int a, int b)`
#[no_mangle]
pub extern "system" fn Java_com_example_myjnisample_MainActivity_addNumbers<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    a: jint,
    b: jint,
) -> jint {
    match add_for_jvm(a, b) {
        Ok(sum) => sum,
        Err(err) => {
            log_error(&format!("addNumbers called without a loaded library: {err}"));
            if let Err(throw_err) = env.throw_new("java/lang/IllegalStateException", err.to_string())
            {
                log_error(&format!("failed to raise IllegalStateException: {throw_err}"));
            }
            0
        }
    }
}

/// Body of the `addNumbers` export. Refuses to add before the library is
/// initialized.
pub fn add_for_jvm(a: jint, b: jint) -> Result<jint, LibraryLoadError> {
    let library = NativeLibrary::instance()?;
    Ok(library.adder().add(a, b))
}

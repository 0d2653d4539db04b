// Tagged logging: logcat on Android, stderr everywhere else.

pub const TAG: &str = "native_lib";

#[cfg(target_os = "android")]
mod sink {
    use std::ffi::CString;

    extern "C" {
        fn __android_log_write(
            prio: libc::c_int,
            tag: *const libc::c_char,
            text: *const libc::c_char,
        ) -> libc::c_int;
    }

    pub const ANDROID_LOG_INFO: libc::c_int = 4;
    pub const ANDROID_LOG_WARN: libc::c_int = 5;
    pub const ANDROID_LOG_ERROR: libc::c_int = 6;

    fn c_string(text: &str) -> CString {
        // Interior NULs would truncate the line in logcat anyway.
        CString::new(text.replace('\0', " ")).unwrap_or_default()
    }

    pub fn write(prio: libc::c_int, msg: &str) {
        let tag = c_string(super::TAG);
        let msg = c_string(msg);
        unsafe {
            __android_log_write(prio, tag.as_ptr(), msg.as_ptr());
        }
    }
}

#[cfg(target_os = "android")]
pub fn log_info(msg: &str) {
    sink::write(sink::ANDROID_LOG_INFO, msg);
}

#[cfg(target_os = "android")]
pub fn log_warn(msg: &str) {
    sink::write(sink::ANDROID_LOG_WARN, msg);
}

#[cfg(target_os = "android")]
pub fn log_error(msg: &str) {
    sink::write(sink::ANDROID_LOG_ERROR, msg);
}

#[cfg(not(target_os = "android"))]
pub fn log_info(msg: &str) {
    eprintln!("[{TAG}] {msg}");
}

#[cfg(not(target_os = "android"))]
pub fn log_warn(msg: &str) {
    eprintln!("[{TAG}] WARN: {msg}");
}

#[cfg(not(target_os = "android"))]
pub fn log_error(msg: &str) {
    eprintln!("[{TAG}] ERROR: {msg}");
}

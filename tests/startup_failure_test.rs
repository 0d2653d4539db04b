// Nothing in this binary loads the library successfully, so the
// process-wide slot stays empty for every test here.

use jni::sys::JNI_ERR;
use native_lib::jni_bridge::{add_for_jvm, on_load};
use native_lib::{
    LibraryLoadError, LibrarySource, NativeLibrary, RecordingSurface, SampleConfig, SampleError,
    SumActivity,
};

#[test]
fn test_missing_library_is_fatal_and_blocks_computation() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SampleConfig::default();
    config.library.in_process = false;
    config.library.search_paths = vec![dir.path().to_path_buf()];

    let result = SumActivity::create(&config, RecordingSurface::default());
    assert!(matches!(
        result,
        Err(SampleError::Library(LibraryLoadError::NotFound { .. }))
    ));
    assert!(!NativeLibrary::is_initialized());
    assert!(matches!(
        NativeLibrary::instance(),
        Err(LibraryLoadError::NotInitialized)
    ));
}

#[test]
fn test_unloadable_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libnative_lib.so");
    std::fs::write(&path, b"\x7fELF but not really").unwrap();

    let config = SampleConfig::default();
    let result = SumActivity::create_from(
        &LibrarySource::Path(path),
        &config,
        RecordingSurface::default(),
    );
    assert!(matches!(
        result,
        Err(SampleError::Library(LibraryLoadError::Open { .. }))
    ));
    assert!(!NativeLibrary::is_initialized());
}

#[test]
fn test_jvm_add_refuses_before_load() {
    assert!(matches!(
        add_for_jvm(2, 3),
        Err(LibraryLoadError::NotInitialized)
    ));
}

#[test]
fn test_on_load_failure_returns_jni_err() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("libnative_lib.so");
    assert_eq!(on_load(&LibrarySource::Path(missing)), JNI_ERR);
    assert!(!NativeLibrary::is_initialized());
    assert!(add_for_jvm(1, 1).is_err());
}

#[test]
fn test_in_process_symbol_typo_is_fatal() {
    let mut config = SampleConfig::default();
    config.library.symbol = "add_numbrs".to_string();

    let result = SumActivity::create(&config, RecordingSurface::default());
    assert!(matches!(
        result,
        Err(SampleError::Library(LibraryLoadError::UnknownSymbol { .. }))
    ));
    assert!(!NativeLibrary::is_initialized());
}

//! Process-wide, load-once access to the native library.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use libloading::Library;

use crate::adder::{add_numbers, AddFn, NativeAdder, ADD_SYMBOL};
use crate::error::LibraryLoadError;
use crate::logging::{log_info, log_warn};

static NATIVE_LIBRARY: OnceLock<Arc<NativeLibrary>> = OnceLock::new();

/// Where the `add_numbers` implementation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    /// The symbol linked into the current binary.
    InProcess,
    /// A module name such as `native_lib`, looked up in `search_paths`.
    Named {
        name: String,
        search_paths: Vec<PathBuf>,
    },
    /// An explicit shared library file.
    Path(PathBuf),
}

pub struct NativeLibrary {
    source: LibrarySource,
    origin: String,
    func: AddFn,
    handle: Option<Arc<Library>>,
}

impl NativeLibrary {
    /// Loads `source` and resolves `symbol` without touching the
    /// process-wide slot. In-process only `add_numbers` is available.
    pub fn open(source: &LibrarySource, symbol: &str) -> Result<Self, LibraryLoadError> {
        match source {
            LibrarySource::InProcess if symbol != ADD_SYMBOL => {
                Err(LibraryLoadError::UnknownSymbol {
                    symbol: symbol.to_string(),
                })
            }
            LibrarySource::InProcess => Ok(Self {
                source: source.clone(),
                origin: "in-process".to_string(),
                func: add_numbers,
                handle: None,
            }),
            LibrarySource::Named { name, search_paths } => {
                let path = locate(name, search_paths)?;
                Self::open_path(source, &path, symbol)
            }
            LibrarySource::Path(path) => Self::open_path(source, path, symbol),
        }
    }

    /// Loads the library once per process. Later calls return the handle
    /// from the first successful load, whatever `source` they pass.
    pub fn initialize(
        source: &LibrarySource,
        symbol: &str,
    ) -> Result<Arc<Self>, LibraryLoadError> {
        if let Some(handle) = NATIVE_LIBRARY.get() {
            if handle.source != *source {
                log_warn(&format!(
                    "native library already loaded from {}; ignoring {}",
                    handle.origin,
                    describe(source)
                ));
            }
            return Ok(handle.clone());
        }
        let library = Arc::new(Self::open(source, symbol)?);
        if NATIVE_LIBRARY.set(library.clone()).is_err() {
            // Another thread won the race; its handle is the process-wide one.
            return NATIVE_LIBRARY
                .get()
                .cloned()
                .ok_or(LibraryLoadError::NotInitialized);
        }
        log_info(&format!("native library loaded ({})", library.origin));
        Ok(library)
    }

    pub fn instance() -> Result<Arc<Self>, LibraryLoadError> {
        NATIVE_LIBRARY
            .get()
            .cloned()
            .ok_or(LibraryLoadError::NotInitialized)
    }

    pub fn is_initialized() -> bool {
        NATIVE_LIBRARY.get().is_some()
    }

    pub fn adder(&self) -> NativeAdder {
        NativeAdder::new(self.func, self.handle.clone())
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn open_path(
        source: &LibrarySource,
        path: &Path,
        symbol: &str,
    ) -> Result<Self, LibraryLoadError> {
        let library = unsafe { Library::new(path) }.map_err(|source| LibraryLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let func: AddFn = unsafe {
            *library
                .get::<AddFn>(symbol.as_bytes())
                .map_err(|source| LibraryLoadError::MissingSymbol {
                    symbol: symbol.to_string(),
                    path: path.to_path_buf(),
                    source,
                })?
        };
        Ok(Self {
            source: source.clone(),
            origin: path.display().to_string(),
            func,
            handle: Some(Arc::new(library)),
        })
    }
}

impl fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("origin", &self.origin)
            .finish()
    }
}

fn describe(source: &LibrarySource) -> String {
    match source {
        LibrarySource::InProcess => "in-process".to_string(),
        LibrarySource::Named { name, .. } => name.clone(),
        LibrarySource::Path(path) => path.display().to_string(),
    }
}

pub fn dynamic_lib_extension() -> &'static str {
    match env::consts::OS {
        "windows" => "dll",
        "macos" | "ios" => "dylib",
        _ => "so",
    }
}

pub fn dynamic_lib_prefix() -> &'static str {
    match env::consts::OS {
        "windows" => "",
        _ => "lib",
    }
}

/// Candidate file names for a module name. Cargo turns `-` into `_` in
/// library names, so both spellings are tried.
pub fn dynamic_lib_filenames(name: &str) -> Vec<String> {
    let mut names = vec![format!(
        "{}{}.{}",
        dynamic_lib_prefix(),
        name,
        dynamic_lib_extension()
    )];
    let underscored = name.replace('-', "_");
    if underscored != name {
        names.push(format!(
            "{}{}.{}",
            dynamic_lib_prefix(),
            underscored,
            dynamic_lib_extension()
        ));
    }
    names
}

fn default_search_paths() -> Vec<PathBuf> {
    let mut dirs = vec![];
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    if let Ok(cwd) = env::current_dir() {
        dirs.push(cwd);
    }
    dirs
}

fn locate(name: &str, search_paths: &[PathBuf]) -> Result<PathBuf, LibraryLoadError> {
    let dirs = if search_paths.is_empty() {
        default_search_paths()
    } else {
        search_paths.to_vec()
    };
    let mut searched = vec![];
    for dir in &dirs {
        for file in dynamic_lib_filenames(name) {
            let candidate = dir.join(file);
            if candidate.is_file() {
                return Ok(candidate);
            }
            searched.push(candidate);
        }
    }
    Err(LibraryLoadError::NotFound {
        name: name.to_string(),
        searched,
    })
}

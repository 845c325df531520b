use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The facade crate that re-exports every `fj_*` crate under a short name.
const FACADE_NAME: &str = "flatjson";
const CRATE_PREFIX: &str = "fj_";

/// The caller's `Cargo.toml`, used to find the path under which a
/// workspace crate is visible from the code a proc-macro expands into.
///
/// # Resolution rules
///
/// For a requested crate such as `fj_reflect`:
///
/// 1. If it is listed in `[dependencies]`, return `::fj_reflect`.
/// 2. If the caller depends on the facade crate `flatjson`, return
///    `::flatjson::reflect` (the `fj_` prefix is dropped).
/// 3. Repeat 1-2 against `[dev-dependencies]`.
/// 4. Otherwise fall back to `::fj_reflect`.
///
/// A crate that expands its own macros should add
/// `extern crate self as fj_reflect;` so the fallback path also resolves
/// inside the crate itself.
///
/// # Example
///
/// ```rust
/// # use fj_macro_utils::Manifest;
/// let manifest = Manifest::parse("[dependencies]\nflatjson = \"0.0.1\"\n");
/// let path: syn::Path = manifest.get_crate_path("fj_reflect");
/// # let _ = path;
/// ```
#[derive(Debug)]
pub struct Manifest {
    document: Document<Box<str>>,
    modified: Option<SystemTime>,
}

impl Manifest {
    /// Parses manifest text directly, without touching the filesystem.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not valid TOML.
    pub fn parse(text: &str) -> Self {
        let document = Document::parse(Box::<str>::from(text))
            .unwrap_or_else(|err| panic!("Failed to parse cargo manifest: {err}"));
        Self {
            document,
            modified: None,
        }
    }

    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("CARGO_MANIFEST_DIR should be defined by cargo.");
        };
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }

    #[inline(never)]
    fn load(path: &Path, modified: Option<SystemTime>) -> Self {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        let mut manifest = Self::parse(&text);
        manifest.modified = modified;
        manifest
    }

    fn parse_path(text: &str) -> syn::Path {
        syn::parse_str(text).unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn lookup(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{short}")));
        }
        None
    }

    /// Returns the path of the crate `name` as seen from the caller.
    ///
    /// See the type level documentation for the resolution order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match self.document.get(section) {
                Some(Item::Table(deps)) => Self::lookup(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Manifests are cached per path and re-read only when the file's
    /// modification time changes, so a proc-macro can call this once per
    /// expansion without re-parsing the file each time.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified = Self::modified_time(&path);

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified.is_some()
                && manifest.modified == modified
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path, modified);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

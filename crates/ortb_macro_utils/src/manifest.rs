use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate the path under which generated code can reach an `ortb_*` crate,
/// as seen from the Cargo.toml of the crate invoking the macro.
///
/// # Example
///
/// ```rust
/// # use ortb_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("ortb_describe"));
/// ```
///
/// Reading and parsing the manifest is not free; call this once per macro
/// invocation and pass the resulting path around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the name begins with `ortb_` and the caller depends on the facade
///    `openrtb`, return `::openrtb::short_name`
///    (e.g. `ortb_describe` -> `::openrtb::describe`).
/// 3. Same for the facade `ortb_core`, returning `::ortb_core::short_name`.
/// 4. Same for the alias `ortb`, returning `::ortb::short_name`.
/// 5. Repeat step 1-4 in `dev-dependencies`.
/// 6. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate referring to itself from its own tests needs
/// `extern crate self as crate_name;` in its root for rule 6 to resolve.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FULL_FACADE_NAME: &str = "openrtb";
const CORE_FACADE_NAME: &str = "ortb_core";
const SHORT_FACADE_NAME: &str = "ortb";
const CRATE_PREFIX: &str = "ortb_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn facade_path(facade: &str, module: &str) -> syn::Path {
        let mut path = Self::parse_path(&format!("::{facade}"));
        path.segments
            .push(syn::PathSegment::from(syn::Ident::new(
                module,
                proc_macro2::Span::call_site(),
            )));
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        [FULL_FACADE_NAME, CORE_FACADE_NAME, SHORT_FACADE_NAME]
            .into_iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| Self::facade_path(facade, module))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_path(&format!("::{name}"))
    }

    /// Run `func` against the caller's parsed Cargo.toml.
    ///
    /// Manifests are cached per path and re-read when their modification
    /// time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use toml_edit::Document;

    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::<str>::from(text)).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn resolve(text: &str, name: &str) -> String {
        manifest(text).get_crate_path(name).to_token_stream().to_string()
    }

    #[test]
    fn direct_dependency() {
        let text = "[dependencies]\nortb_describe = \"0.0.1\"\n";
        assert_eq!(resolve(text, "ortb_describe"), ":: ortb_describe");
    }

    #[test]
    fn through_facade() {
        let text = "[dependencies]\nortb_core = { path = \"..\" }\n";
        assert_eq!(resolve(text, "ortb_describe"), ":: ortb_core :: describe");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let text = "[dev-dependencies]\nopenrtb = \"1\"\n";
        assert_eq!(resolve(text, "ortb_describe"), ":: openrtb :: describe");
        assert_eq!(resolve("", "ortb_describe"), ":: ortb_describe");
    }
}

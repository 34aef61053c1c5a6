//! Import Manager
//!
//! Decides which packages a generated Go file imports and under which alias.
//!
//! Most imports follow from the shape of the document and are registered by
//! [`ImportManager::init`]. Whether `strings`, `bytes` and `reflect` are needed
//! depends on code emitted deep inside templates, so they are registered up
//! front (their alias is then stable) but held back until a template confirms
//! them with [`ImportManager::use_std_library`].

use crate::ast::Thrift;
use crate::error::{ConfigError, ImportError, Result};
use crate::features::Features;
use crate::golang::libs::{CONTEXT, FMT, SQL, SQL_DRIVER, THRIFT, UNKNOWN};
use crate::golang::redirect::IdRedirector;
use crate::golang::replacement::ImportReplacement;
use crate::logging::{Logger, NullLogger};
use codegen_namespace::{zero_indexed_rename, DefaultNamespace, Namespace};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Standard libraries whose use is only known while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StdLibrary {
    Strings,
    Bytes,
    Reflect,
}

impl StdLibrary {
    pub const ALL: [StdLibrary; 3] = [StdLibrary::Strings, StdLibrary::Bytes, StdLibrary::Reflect];

    /// Package name, which is also its import path.
    pub fn name(self) -> &'static str {
        match self {
            StdLibrary::Strings => "strings",
            StdLibrary::Bytes => "bytes",
            StdLibrary::Reflect => "reflect",
        }
    }
}

impl fmt::Display for StdLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StdLibrary {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StdLibrary::ALL
            .into_iter()
            .find(|lib| lib.name() == s)
            .ok_or_else(|| ConfigError::UnknownLibrary(s.to_string()))
    }
}

/// Final mapping of import path to alias, in registration order.
///
/// An empty alias means the package name already matches the path and no
/// alias clause is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportTable {
    imports: IndexMap<String, String>,
}

impl ImportTable {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.imports.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_str()))
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.imports
    }
}

/// Renders a Go import block, sorted by path.
impl fmt::Display for ImportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imports.is_empty() {
            return Ok(());
        }
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|(path, _)| *path);

        writeln!(f, "import (")?;
        for (path, alias) in sorted {
            if alias.is_empty() {
                writeln!(f, "\t{:?}", path)?;
            } else {
                writeln!(f, "\t{} {:?}", alias, path)?;
            }
        }
        writeln!(f, ")")
    }
}

/// An alias is redundant when it equals the path or its last segment.
pub fn elide_alias(alias: &str, path: &str) -> String {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    if alias == path || alias == last_segment {
        String::new()
    } else {
        alias.to_string()
    }
}

pub struct ImportManager<N = DefaultNamespace> {
    ns: IdRedirector<N>,
    /// Tentative libraries not confirmed yet. Only ever shrinks.
    lib_not_used: IndexSet<StdLibrary>,
    /// Underlying ids registered unconditionally; never suppressed.
    pinned: HashSet<String>,
    initialized: bool,
    logger: Arc<dyn Logger>,
}

impl ImportManager<DefaultNamespace> {
    /// Manager over a fresh namespace that numbers duplicates `name1`, `name2`, ...
    pub fn new(replacement: Arc<ImportReplacement>) -> Self {
        Self::with_namespace(DefaultNamespace::new(zero_indexed_rename), replacement)
    }
}

impl<N: Namespace> ImportManager<N> {
    pub fn with_namespace(namespace: N, replacement: Arc<ImportReplacement>) -> Self {
        Self {
            ns: IdRedirector::new(namespace, replacement),
            lib_not_used: StdLibrary::ALL.into_iter().collect(),
            pinned: HashSet::new(),
            initialized: false,
            logger: Arc::new(NullLogger::new()),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.ns.set_logger(logger.clone());
        self.logger = logger;
        self
    }

    /// Registers the imports implied by the declarations of `ast`.
    pub fn init(&mut self, features: Features, ast: &Thrift) -> Result<()> {
        if self.initialized {
            return Err(ImportError::AlreadyInitialized);
        }
        self.initialized = true;

        if !ast.enums.is_empty() {
            self.register(FMT);
            if features.contains(Features::SCAN_VALUE_FOR_ENUM) {
                self.register(SQL_DRIVER);
                self.register(SQL);
            }
        }

        let definition_only = features.contains(Features::DEFINITION_ONLY);
        let struct_count = ast.struct_like_count();
        if struct_count > 0 {
            self.register(FMT);
            if !definition_only {
                self.register(THRIFT);
            }
        }

        if !ast.services.is_empty() {
            if !definition_only {
                self.register(THRIFT);
            }
            for svc in &ast.services {
                if !svc.has_base() || !svc.functions.is_empty() {
                    self.register(CONTEXT);
                }
                if !svc.functions.is_empty() {
                    self.register(FMT);
                }
            }
        }

        if struct_count + ast.function_count() > 0
            && features.contains(Features::KEEP_UNKNOWN_FIELDS)
        {
            self.register(UNKNOWN);
        }

        if features.contains(Features::GEN_DEEP_EQUAL) {
            self.register_tentative(StdLibrary::Strings);
            self.register_tentative(StdLibrary::Bytes);
        } else if features.contains(Features::VALIDATE_SET) {
            self.register_tentative(StdLibrary::Reflect);
        }
        Ok(())
    }

    /// Confirms that rendered code uses `lib`.
    ///
    /// Idempotent, and accepted at any point of the protocol, including after
    /// [`ImportManager::resolve_imports`]: later resolutions include it.
    pub fn use_std_library(&mut self, lib: StdLibrary) {
        if self.lib_not_used.shift_remove(&lib) {
            self.logger.debug(&format!("confirm use of {}", lib));
        }
    }

    /// Whether `lib` has been confirmed. Says nothing about registration.
    pub fn is_used(&self, lib: StdLibrary) -> bool {
        !self.lib_not_used.contains(&lib)
    }

    /// Returns the import table for the current state.
    ///
    /// Every registered id is listed except tentative libraries that are still
    /// unconfirmed. Calling it again after more confirmations is allowed.
    pub fn resolve_imports(&self) -> Result<ImportTable> {
        if !self.initialized {
            return Err(ImportError::NotInitialized);
        }

        let suppressed: SmallVec<[&str; 3]> = self
            .lib_not_used
            .iter()
            .map(|lib| self.ns.resolve_id(lib.name()))
            .filter(|id| !self.pinned.contains(*id))
            .collect();

        let mut imports = IndexMap::new();
        self.ns.iterate(&mut |alias, path| {
            if !suppressed.iter().any(|id| *id == path) {
                imports.insert(path.to_string(), elide_alias(alias, path));
            }
            true
        });

        self.logger
            .debug(&format!("resolved {} imports", imports.len()));
        Ok(ImportTable { imports })
    }

    fn register(&mut self, (name, id): (&str, &str)) {
        let alias = self.ns.add(name, id);
        let target = self.ns.resolve_id(id).to_string();
        self.logger
            .debug(&format!("register import {} as {}", target, alias));
        self.pinned.insert(target);
    }

    fn register_tentative(&mut self, lib: StdLibrary) {
        let alias = self.ns.add(lib.name(), lib.name());
        self.logger
            .debug(&format!("register tentative import {} as {}", lib, alias));
    }
}

/// Templates register further imports (e.g. included IDL packages) through the
/// manager itself. Such ids are always emitted.
impl<N: Namespace> Namespace for ImportManager<N> {
    fn add(&mut self, name: &str, id: &str) -> String {
        let alias = self.ns.add(name, id);
        self.pinned.insert(self.ns.resolve_id(id).to_string());
        alias
    }

    fn get(&self, id: &str) -> Option<String> {
        self.ns.get(id)
    }

    fn reserve(&mut self, name: &str, id: &str) -> bool {
        let ok = self.ns.reserve(name, id);
        if ok {
            self.pinned.insert(self.ns.resolve_id(id).to_string());
        }
        ok
    }

    fn must_reserve(&mut self, name: &str, id: &str) {
        self.ns.must_reserve(name, id);
        self.pinned.insert(self.ns.resolve_id(id).to_string());
    }

    fn iterate(&self, f: &mut dyn FnMut(&str, &str) -> bool) {
        self.ns.iterate(f)
    }
}

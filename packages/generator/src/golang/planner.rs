//! Import Planner
//!
//! Runs the import protocol (init, render, resolve) for one or many files.
//! Every file gets its own manager and namespace; only the configuration is
//! shared, read-only, between files planned in parallel.

use crate::ast::Thrift;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::golang::imports::{ImportManager, ImportTable};
use crate::logging::{Logger, NullLogger};
use rayon::prelude::*;
use std::sync::Arc;

pub struct ImportPlanner {
    config: Arc<GeneratorConfig>,
    logger: Arc<dyn Logger>,
}

impl ImportPlanner {
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self {
            config,
            logger: Arc::new(NullLogger::new()),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A fresh, uninitialized manager for one file.
    pub fn manager(&self) -> ImportManager {
        ImportManager::new(self.config.import_replace.clone()).with_logger(self.logger.clone())
    }

    /// Initializes a manager for `ast`, lets `render` confirm libraries, and
    /// resolves the table once rendering is done.
    pub fn plan<F>(&self, ast: &Thrift, render: F) -> Result<ImportTable>
    where
        F: FnOnce(&Thrift, &mut ImportManager),
    {
        let mut manager = self.manager();
        manager.init(self.config.features, ast)?;
        render(ast, &mut manager);
        let table = manager.resolve_imports()?;
        self.logger
            .info(&format!("{}: {} imports", ast.filename, table.len()));
        Ok(table)
    }

    /// Plans every document in parallel. Results keep the order of `docs`.
    pub fn plan_all<F>(&self, docs: &[Thrift], render: F) -> Vec<Result<ImportTable>>
    where
        F: Fn(&Thrift, &mut ImportManager) + Sync,
    {
        docs.par_iter()
            .map(|ast| self.plan(ast, &render))
            .collect()
    }
}

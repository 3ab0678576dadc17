use anyhow::Context;
use std::sync::Arc;

use crate::module::{InitCtx, Module};

/// Module registry driving the lifecycle of every registered module
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module; modules are initialized in registration order
    pub fn register(&mut self, module: Arc<dyn Module>) {
        tracing::debug!(module = module.name(), "module registered");
        self.modules.push(module);
    }

    /// Get all registered modules
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&Arc<dyn Module>> {
        self.modules.iter().find(|module| module.name() == name)
    }

    /// Get the number of registered modules
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Initialize modules in registration order
    pub async fn init_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Start modules in registration order
    pub async fn start_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("starting {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "starting module");

            module
                .start(ctx)
                .await
                .with_context(|| format!("failed to start module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Stop modules in reverse registration order
    pub async fn stop_modules(&self) -> anyhow::Result<()> {
        tracing::info!("stopping {} modules", self.modules.len());

        for module in self.modules.iter().rev() {
            tracing::info!(module = module.name(), "stopping module");

            module
                .stop()
                .await
                .with_context(|| format!("failed to stop module '{}'", module.name()))?;
        }

        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::sync::Mutex;

    struct TestModule {
        name: &'static str,
        journal: Arc<Mutex<Vec<String>>>,
        fail_init: bool,
    }

    impl TestModule {
        fn new(name: &'static str, journal: &Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                name,
                journal: Arc::clone(journal),
                fail_init: false,
            }
        }

        fn record(&self, step: &str) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{}:{}", step, self.name));
        }
    }

    #[async_trait::async_trait]
    impl Module for TestModule {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            if self.fail_init {
                anyhow::bail!("boom");
            }
            self.record("init");
            Ok(())
        }

        async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            self.record("start");
            Ok(())
        }

        async fn stop(&self) -> anyhow::Result<()> {
            self.record("stop");
            Ok(())
        }
    }

    #[test]
    fn module_registry_creation() {
        let registry = ModuleRegistry::new();
        assert!(registry.modules().is_empty());
        assert_eq!(registry.module_count(), 0);
    }

    #[test]
    fn get_module_by_name() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(TestModule::new("catalog", &journal)));

        assert!(registry.get_module("catalog").is_some());
        assert!(registry.get_module("accounts").is_none());
    }

    #[tokio::test]
    async fn module_lifecycle_order() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ModuleRegistry::new();
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        registry.register(Arc::new(TestModule::new("first", &journal)));
        registry.register(Arc::new(TestModule::new("second", &journal)));

        registry.init_modules(&ctx).await.unwrap();
        registry.start_modules(&ctx).await.unwrap();
        registry.stop_modules().await.unwrap();

        let journal = journal.lock().unwrap();
        assert_eq!(
            *journal,
            vec![
                "init:first",
                "init:second",
                "start:first",
                "start:second",
                "stop:second",
                "stop:first",
            ]
        );
    }

    #[tokio::test]
    async fn init_failure_names_module() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ModuleRegistry::new();
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        let mut broken = TestModule::new("broken", &journal);
        broken.fail_init = true;
        registry.register(Arc::new(broken));

        let err = registry.init_modules(&ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to initialize module 'broken'");
    }
}

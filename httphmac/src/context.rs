use httphmac_core::{Context, OsEnv};

/// Create a context that reads the process environment.
pub fn default_context() -> Context {
    Context::new().with_env(OsEnv)
}

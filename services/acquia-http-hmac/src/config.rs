use super::constants::*;
use httphmac_core::Context;

/// Config carries all the configuration for acquia http hmac.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ACQUIA_HMAC_ID`]
    pub id: Option<String>,
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ACQUIA_HMAC_SECRET`]
    pub secret: Option<String>,
    /// `realm` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ACQUIA_HMAC_REALM`]
    pub realm: Option<String>,
    /// `version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ACQUIA_HMAC_VERSION`]
    /// - default to [`DEFAULT_VERSION`]
    pub version: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ACQUIA_HMAC_ID) {
            self.id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ACQUIA_HMAC_SECRET) {
            self.secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ACQUIA_HMAC_REALM) {
            self.realm.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ACQUIA_HMAC_VERSION) {
            self.version.get_or_insert(v);
        }

        self
    }

    /// Protocol version to sign with.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }
}

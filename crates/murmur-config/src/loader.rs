use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the engine or auth sections are unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server()?;
        self.validate_engine()?;
        self.validate_auth()?;
        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        // Route registration panics on paths without a leading slash
        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }

    fn validate_engine(&self) -> anyhow::Result<()> {
        if self.engine.model_path.as_os_str().is_empty() {
            anyhow::bail!("engine.model_path must be set");
        }

        if self.engine.beam_size == 0 {
            anyhow::bail!("engine.beam_size must be greater than 0");
        }

        if self.engine.max_concurrency == 0 {
            anyhow::bail!("engine.max_concurrency must be greater than 0");
        }

        if self.engine.body_limit_bytes == 0 {
            anyhow::bail!("engine.body_limit_bytes must be greater than 0");
        }

        Ok(())
    }

    fn validate_auth(&self) -> anyhow::Result<()> {
        if self.auth.token.expose_secret().is_empty() {
            anyhow::bail!("auth.token must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Config {
        toml::from_str(raw).expect("valid config")
    }

    #[test]
    fn minimal_config_validates() {
        let config = parse("[engine]\nmodel_path = \"models/ggml-tiny.bin\"");
        config.validate().unwrap();
        assert_eq!(config.engine.beam_size, 5);
        assert_eq!(config.engine.max_concurrency, 1);
    }

    #[test]
    fn empty_model_path_rejected() {
        let config = parse("[engine]\nmodel_path = \"\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("model_path"));
    }

    #[test]
    fn zero_beam_size_rejected() {
        let config = parse("[engine]\nmodel_path = \"m.bin\"\nbeam_size = 0");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("beam_size"));
    }

    #[test]
    fn zero_concurrency_rejected() {
        let config = parse("[engine]\nmodel_path = \"m.bin\"\nmax_concurrency = 0");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_concurrency"));
    }

    #[test]
    fn health_path_without_leading_slash_rejected() {
        let config = parse("[engine]\nmodel_path = \"m.bin\"\n[server.health]\npath = \"healthz\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("health.path"));
    }

    #[test]
    fn empty_token_rejected() {
        let config = parse("[engine]\nmodel_path = \"m.bin\"\n[auth]\ntoken = \"\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("auth.token"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result = toml::from_str::<Config>("[engine]\nmodel_path = \"m.bin\"\nbatch = 2");
        assert!(result.is_err());
    }
}

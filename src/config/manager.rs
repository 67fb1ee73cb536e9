use super::{analysis::AnalysisConfig, traits::ConfigSection};
use crate::error::BiosimError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Prefix of environment overrides, e.g. `BIOSIM_ANALYSIS__DIVERSITY_SAMPLE_SIZE`
pub const ENV_PREFIX: &str = "BIOSIM";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), BiosimError> {
        self.analysis.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AppConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppConfig> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BiosimError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        config.validate()?;

        *self.write() = config;
        Ok(())
    }

    /// Defaults, then the optional file, then `BIOSIM_*` environment variables
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), BiosimError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_ref()).required(true));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        *self.write() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BiosimError> {
        let toml_str = toml::to_string_pretty(&*self.read())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.read().clone()
    }

    /// Applies `f` to a copy and keeps it only if it still validates
    pub fn update<F>(&self, f: F) -> Result<(), BiosimError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write();
        let mut candidate = config.clone();
        f(&mut candidate);
        if let Err(e) = candidate.validate() {
            log::warn!("Rejected [{}] config update: {}", AnalysisConfig::section_name(), e);
            return Err(e);
        }
        *config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::similarity::ComparisonMethod;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("biosim-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_update_rejects_invalid() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.analysis.diversity_sample_size = 0);
        assert!(result.is_err());
        assert_eq!(manager.get().analysis.diversity_sample_size, 1000);

        manager
            .update(|c| c.analysis.genome_comparison_method = ComparisonMethod::HammingBits)
            .unwrap();
        assert_eq!(manager.get().analysis.genome_comparison_method, ComparisonMethod::HammingBits);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let manager = ConfigManager::new();
        manager
            .update(|c| {
                c.analysis.genome_comparison_method = ComparisonMethod::HammingWords;
                c.analysis.diversity_sample_size = 250;
                c.analysis.seed = Some(42);
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let loaded = ConfigManager::new();
        loaded.load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.get(), manager.get());
    }

    #[test]
    fn test_load_rejects_bad_method_code() {
        let path = temp_path("bad-method");
        std::fs::write(&path, "[analysis]\ngenome_comparison_method = 7\n").unwrap();

        let manager = ConfigManager::new();
        let result = manager.load_from_file(&path);
        std::fs::remove_file(&path).ok();

        match result {
            Err(BiosimError::TomlParse(e)) => {
                assert!(e.to_string().contains("Unknown genome comparison method 7"), "{}", e)
            }
            other => panic!("expected TOML parse error, got {:?}", other),
        }
        assert_eq!(manager.get(), AppConfig::default());
    }

    #[test]
    fn test_layered_load_reads_file() {
        let path = temp_path("layered");
        std::fs::write(
            &path,
            concat!(
                "[analysis]\ngenome_comparison_method = 1\n\n",
                "[analysis.length_penalty]\nsimilarity_weight = 0.6\nlength_ratio_weight = 0.4\n",
            ),
        )
        .unwrap();

        let manager = ConfigManager::new();
        let result = manager.load_layered(Some(&path));
        std::fs::remove_file(&path).ok();
        result.unwrap();

        let analysis = manager.get().analysis;
        assert_eq!(analysis.genome_comparison_method, ComparisonMethod::HammingBits);
        assert_eq!(analysis.length_penalty.similarity_weight, 0.6);
        assert_eq!(analysis.diversity_sample_size, 1000);
    }

    #[test]
    fn test_layered_load_without_file_uses_defaults() {
        let manager = ConfigManager::new();
        manager.load_layered(None::<&Path>).unwrap();
        assert!(manager.get().validate().is_ok());
    }
}

pub mod analysis;
pub mod manager;
pub mod traits;

pub use analysis::AnalysisConfig;
pub use manager::{AppConfig, ConfigManager, ENV_PREFIX};
pub use traits::ConfigSection;

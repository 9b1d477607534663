//! Application configuration

use clap::Args;

mod delays;
mod logging;
mod storage;

pub use delays::DelayConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

/// KeepStudy application settings, read from flags, the environment and `.env`.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Persistent storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Simulated latency settings.
    #[command(flatten)]
    pub delays: DelayConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use std::{path::Path, time::Duration};

    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        config: AppConfig,
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let harness = Harness::try_parse_from([
            "keepstudy",
            "--data-dir",
            "/tmp/keepstudy",
            "--payment-delay-ms",
            "0",
            "--log-format",
            "json",
        ])?;

        assert_eq!(harness.config.storage.data_dir, Path::new("/tmp/keepstudy"));
        assert_eq!(harness.config.delays.payment_delay(), Duration::ZERO);
        assert!(matches!(harness.config.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn invalid_delay_is_rejected() {
        let result = Harness::try_parse_from(["keepstudy", "--assistant-delay-ms", "soon"]);

        assert!(result.is_err(), "non-numeric delay should not parse");
    }
}

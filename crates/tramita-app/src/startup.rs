//! Startup logging.

use tracing::info;
use tramita_config::AppConfig;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
  _____                    _ _
 |_   _| __ __ _ _ __ ___ (_) |_ __ _
   | || '__/ _` | '_ ` _ \| | __/ _` |
   | || | | (_| | | | | | | | || (_| |
   |_||_|  \__,_|_| |_| |_|_|\__\__,_|
    "#);
}

/// Prints what the application was started with.
pub fn print_startup_info(config: &AppConfig, users: u64, procedures: u64) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Application: {} v{}", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);
    info!("Hash cost:   {} MiB", config.security.password_hash_cost);
    info!("Users:       {}", users);
    info!("Procedures:  {}", procedures);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default(), 1, 0);
    }
}

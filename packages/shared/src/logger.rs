//! Logging setup utilities for the Hiroba chat relay.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The default filter enables `default_log_level` for the calling binary and for
/// every Hiroba library crate. The `RUST_LOG` environment variable replaces the
/// default filter entirely when it is set.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "hiroba-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use hiroba_shared::logger::setup_logger;
///
/// setup_logger("hiroba-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the filter directive used when `RUST_LOG` is not set.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    format!(
        "hiroba_shared={level},hiroba_server={level},{binary}={level},tower_http={level}",
        level = default_log_level,
        binary = binary_name.replace('-', "_"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_binary_and_crates() {
        // テスト項目: デフォルトのフィルタにバイナリ名とライブラリ crate が含まれる
        // given (前提条件):
        let binary_name = "hiroba-server";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果): バイナリ名のハイフンはアンダースコアに変換される
        assert!(filter.contains("hiroba_server=debug"));
        assert!(filter.contains("hiroba_shared=debug"));
        assert!(filter.contains("tower_http=debug"));
        assert!(!filter.contains("hiroba-server"));
    }
}

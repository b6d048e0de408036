//! Client execution logic with reconnection support.

use std::time::Duration;

use crate::{
    domain::{UNLIMITED_ATTEMPTS, should_attempt_reconnect, should_exit_immediately},
    error::ClientError,
    session::run_client_session,
};

const RECONNECT_INTERVAL_SECS: u64 = 5;

fn attempt_label(attempt: u32, max_attempts: u32) -> String {
    if max_attempts == UNLIMITED_ATTEMPTS {
        attempt.to_string()
    } else {
        format!("{}/{}", attempt, max_attempts)
    }
}

/// Run the client, reconnecting and re-registering after every drop
///
/// The attempt counter restarts whenever a session got as far as being
/// registered, so only consecutive failures count against the limit.
/// `max_attempts == 0` reconnects forever.
pub async fn run_client(
    url: String,
    department_id: u32,
    max_attempts: u32,
) -> Result<(), ClientError> {
    let mut reconnect_count = 0;

    loop {
        tracing::info!(
            "Attempting to connect to {} for department {} (attempt {})",
            url,
            department_id,
            attempt_label(reconnect_count + 1, max_attempts)
        );

        let error = match run_client_session(&url, department_id).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                return Ok(());
            }
            Err(e) => e,
        };

        if should_exit_immediately(&error) {
            return Err(error);
        }

        tracing::warn!("{}", error);
        if matches!(error, ClientError::ConnectionLost(_)) {
            reconnect_count = 0;
        }
        reconnect_count += 1;

        if !should_attempt_reconnect(&error, reconnect_count, max_attempts) {
            tracing::error!(
                "Failed to reconnect after {} attempts. Exiting.",
                max_attempts
            );
            return Err(error);
        }

        tracing::info!(
            "Reconnecting in {} seconds... (attempt {})",
            RECONNECT_INTERVAL_SECS,
            attempt_label(reconnect_count + 1, max_attempts)
        );
        tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_label() {
        // テスト項目: 上限ありなら "n/max"、上限なしなら回数のみ表示する
        // given (前提条件):
        let bounded = (2, 5);
        let unbounded = (12, UNLIMITED_ATTEMPTS);

        // when (操作):
        let bounded = attempt_label(bounded.0, bounded.1);
        let unbounded = attempt_label(unbounded.0, unbounded.1);

        // then (期待する結果):
        assert_eq!(bounded, "2/5");
        assert_eq!(unbounded, "12");
    }
}

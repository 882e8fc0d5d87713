use anyhow::Context;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tokio::runtime::Builder;
use tokio::signal;

/// Shared cancellation flag, observed at the top of each sampling iteration.
/// Cancellation is the designed shutdown trigger, not a failure.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Waits for Ctrl+C on a dedicated current-thread runtime and flips the token.
pub fn spawn_ctrl_c_listener(cancel: CancelToken) {
    thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(err) => {
                log::error!("building signal runtime: {}", err);
                return;
            }
        };
        let waited = runtime.block_on(async { signal::ctrl_c().await.context("awaiting Ctrl+C") });
        if let Err(err) = waited {
            log::error!("signal listener: {}", err);
        }
        cancel.cancel();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_clear_and_latches() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
        let clone = token.clone();
        assert!(clone.is_cancelled());
    }
}

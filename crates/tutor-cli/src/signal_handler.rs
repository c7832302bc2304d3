//! Ctrl+C handling for the interactive chat
//!
//! At the prompt Ctrl+C exits. While a message is being processed it cancels
//! that message only.

use futures::stream::StreamExt;
use parking_lot::Mutex;
use signal_hook::consts::SIGINT;
use signal_hook_tokio::{Handle, Signals};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// What Ctrl+C applies to
#[derive(Debug, Clone)]
enum AppState {
    WaitingForInput,
    ProcessingMessage(CancellationToken),
}

pub struct SignalHandler {
    app_state: Arc<Mutex<AppState>>,
    signals_handle: Option<Handle>,
    task_handle: Option<JoinHandle<()>>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            app_state: Arc::new(Mutex::new(AppState::WaitingForInput)),
            signals_handle: None,
            task_handle: None,
        }
    }

    /// Start listening for SIGINT
    pub fn start(&mut self) -> std::io::Result<()> {
        if self.task_handle.is_some() {
            return Ok(());
        }

        let mut signals = Signals::new([SIGINT])?;
        self.signals_handle = Some(signals.handle());
        let app_state = self.app_state.clone();

        let handle = tokio::spawn(async move {
            while let Some(signal) = signals.next().await {
                if signal != SIGINT {
                    continue;
                }
                let state = app_state.lock().clone();
                match state {
                    AppState::WaitingForInput => {
                        eprintln!("\nGoodbye! Happy learning!");
                        std::process::exit(0);
                    }
                    AppState::ProcessingMessage(token) => {
                        tracing::debug!("SIGINT received, cancelling current message");
                        token.cancel();
                    }
                }
            }
        });

        self.task_handle = Some(handle);
        Ok(())
    }

    /// Enter message processing; Ctrl+C now cancels the returned token
    pub fn begin_message(&self) -> CancellationToken {
        let token = CancellationToken::new();
        *self.app_state.lock() = AppState::ProcessingMessage(token.clone());
        token
    }

    /// Back to the prompt
    pub fn end_message(&self) {
        *self.app_state.lock() = AppState::WaitingForInput;
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.signals_handle.take() {
            handle.close();
        }
        if let Some(task) = self.task_handle.take() {
            task.abort();
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SignalHandler {
    fn drop(&mut self) {
        self.stop();
    }
}

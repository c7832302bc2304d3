//! Terminal rendering of display intents

use crate::console::render_markup;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tutor_core::display::{DisplaySink, IndicatorHandle, IndicatorStatus, TurnRole};

/// Prints turns to stdout and shows the working indicator as a spinner
pub struct ConsoleSink {
    spinner: Mutex<Option<(IndicatorHandle, ProgressBar)>>,
    input_enabled: AtomicBool,
    echo_user_turns: bool,
}

impl ConsoleSink {
    /// `echo_user_turns` is off in the interactive loop, where the user
    /// already sees what they typed
    pub fn new(echo_user_turns: bool) -> Self {
        Self {
            spinner: Mutex::new(None),
            input_enabled: AtomicBool::new(true),
            echo_user_turns,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl DisplaySink for ConsoleSink {
    fn append_turn(&self, text: &str, role: TurnRole) {
        match role {
            TurnRole::User if self.echo_user_turns => {
                println!("{} {}", "You:".cyan().bold(), text);
            }
            TurnRole::User => {}
            TurnRole::Assistant => {
                println!("{} {}", "Tutor:".green().bold(), render_markup(text));
                println!();
            }
        }
    }

    fn show_working_indicator(&self) -> IndicatorHandle {
        let handle = IndicatorHandle::new();
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(IndicatorStatus::Thinking.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Some((_, previous)) = self.spinner.lock().replace((handle, bar)) {
            previous.finish_and_clear();
        }
        handle
    }

    fn update_working_indicator(&self, handle: IndicatorHandle, status: IndicatorStatus) {
        if let Some((current, bar)) = self.spinner.lock().as_ref() {
            if *current == handle {
                bar.set_message(status.to_string());
            }
        }
    }

    fn remove_working_indicator(&self, handle: IndicatorHandle) {
        let mut spinner = self.spinner.lock();
        if spinner.as_ref().is_some_and(|(current, _)| *current == handle) {
            if let Some((_, bar)) = spinner.take() {
                bar.finish_and_clear();
            }
        }
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.input_enabled.store(enabled, Ordering::Release);
    }
}

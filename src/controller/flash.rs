use crate::document::{Document, FlashLevel};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    /// Time a message stays fully visible, in milliseconds.
    #[serde(default = "Configuration::default_dismiss_delay")]
    pub dismiss_delay: u64,
    /// Time between hiding a message and removing it, in milliseconds.
    #[serde(default = "Configuration::default_fade_duration")]
    pub fade_duration: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            dismiss_delay: Self::default_dismiss_delay(),
            fade_duration: Self::default_fade_duration(),
        }
    }
}

impl Configuration {
    fn default_dismiss_delay() -> u64 {
        5000
    }

    fn default_fade_duration() -> u64 {
        300
    }

    fn get_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay)
    }

    fn get_fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration)
    }
}

/// Fades out then removes the flash message `id`.
///
/// Must be called from within a tokio runtime.
pub(crate) fn schedule_dismiss(
    document: Arc<Mutex<Document>>,
    config: &Configuration,
    id: u64,
) {
    let delay = config.get_dismiss_delay();
    let fade = config.get_fade_duration();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let hidden = document.lock().hide_flash(id);
        if !hidden {
            return;
        }
        tokio::time::sleep(fade).await;
        let removed = document.lock().remove_flash(id);
        if removed {
            metrics::counter!("flash_dismiss").increment(1);
            tracing::debug!("flash message {id} dismissed");
        }
    });
}

impl<A> super::Page<A> {
    /// Inserts a flash message and schedules its dismissal.
    pub fn push_flash(&self, level: FlashLevel, message: impl Into<String>) -> u64 {
        let id = self.document.lock().push_flash(level, message);
        schedule_dismiss(self.document.clone(), &self.flash, id);
        id
    }

    /// Removes a flash message right away, its pending timer then finds nothing.
    ///
    /// Returns `false` when the message was already gone.
    pub fn dismiss_flash(&self, id: u64) -> bool {
        let removed = self.document.lock().remove_flash(id);
        if removed {
            metrics::counter!("flash_dismiss", "origin" => "manual").increment(1);
            tracing::debug!("flash message {id} dismissed manually");
        }
        removed
    }
}

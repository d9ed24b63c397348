//! Event handlers of the mail-merge page.
//!
//! A [`Page`] owns the [`Document`] and exposes one method per user
//! interaction. Network failures never surface to the caller, they are logged
//! and leave the document as it was.

pub mod attachment;
pub mod email_form;
pub mod flash;
pub mod template_delete;
pub mod template_form;
pub mod template_select;

use crate::document::Document;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub use template_delete::Confirmation;

/// Hands out tickets so that only the latest request of a kind gets applied.
#[derive(Debug, Default)]
pub(crate) struct Generation(AtomicU64);

impl Generation {
    pub(crate) fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

pub struct Page<A> {
    api: A,
    document: Arc<Mutex<Document>>,
    flash: flash::Configuration,
    selection: Generation,
    edition: Generation,
}

impl<A> Page<A> {
    /// Takes over a freshly rendered document.
    ///
    /// Flash messages already on the page get their dismissal scheduled, so
    /// this must be called from within a tokio runtime.
    pub fn load(api: A, document: Document, flash: flash::Configuration) -> Self {
        let ids: Vec<u64> = document.flash_messages.iter().map(|item| item.id).collect();
        let document = Arc::new(Mutex::new(document));
        for id in ids {
            flash::schedule_dismiss(document.clone(), &flash, id);
        }
        Self {
            api,
            document,
            flash,
            selection: Generation::default(),
            edition: Generation::default(),
        }
    }

    pub fn read<R>(&self, func: impl FnOnce(&Document) -> R) -> R {
        func(&self.document.lock())
    }

    /// Applies user input, like typing in a field, to the document.
    pub fn update<R>(&self, func: impl FnOnce(&mut Document) -> R) -> R {
        func(&mut self.document.lock())
    }
}

use crate::document::FlashLevel;
use crate::service::client::TemplateApi;

/// Asks the user to confirm a destructive action.
pub trait Confirmation {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete the template \"{name}\"?")
}

impl<A: TemplateApi> super::Page<A> {
    /// Deletes a template once confirmed and removes it from the page.
    ///
    /// Nothing changes when the server answers without a message.
    pub async fn delete_template<C: Confirmation + ?Sized>(&self, name: &str, confirmation: &C) {
        if !confirmation.confirm(&delete_prompt(name)) {
            tracing::debug!("deletion of {name:?} declined");
            return;
        }
        metrics::counter!("template_delete").increment(1);
        let res = match self.api.delete_by_name(name).await {
            Ok(res) => res,
            Err(err) => {
                metrics::counter!("template_delete_error").increment(1);
                tracing::error!("unable to delete template {name:?}: {err}");
                return;
            }
        };
        let Some(message) = res.message else {
            if let Some(error) = res.error {
                tracing::debug!("template {name:?} not deleted: {error}");
            }
            return;
        };
        {
            let mut doc = self.document.lock();
            doc.remove_template_item(name);
            doc.template_select.remove_option(name);
        }
        self.push_flash(FlashLevel::Success, message);
    }
}

use crate::document::{FormMode, Section};
use crate::service::client::TemplateApi;

/// What the template form posts to `/templates`.
///
/// The server answers "updated successfully" when `is_edit` is set and
/// "saved successfully" otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSubmission {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub is_edit: bool,
}

impl<A: TemplateApi> super::Page<A> {
    /// Loads a template in the template form and switches it to edit mode.
    pub async fn edit_template(&self, name: &str) {
        let ticket = self.edition.next();
        metrics::counter!("template_fetch", "origin" => "edit").increment(1);
        let template = match self.api.find_by_name(name).await {
            Ok(found) => found,
            Err(err) => {
                metrics::counter!("template_fetch_error", "origin" => "edit").increment(1);
                tracing::error!("unable to load template {name:?} for edition: {err}");
                return;
            }
        };
        if !self.edition.is_current(ticket) {
            tracing::debug!("dropping outdated edition of {name:?}");
            return;
        }
        let mut doc = self.document.lock();
        doc.template_form.edit(name, template);
        doc.scroll_target = Some(Section::TemplateForm);
    }
}

impl<A> super::Page<A> {
    /// Puts the template form back in creation mode.
    pub fn cancel_edit(&self) {
        self.edition.next();
        self.document.lock().template_form.reset();
    }

    /// Hands the template form content over, leaving the form untouched.
    pub fn submit_template(&self) -> TemplateSubmission {
        let doc = self.document.lock();
        let form = &doc.template_form;
        TemplateSubmission {
            name: form.name.clone(),
            subject: form.subject.clone(),
            body: form.body.clone(),
            is_edit: matches!(form.mode, FormMode::Editing(_)),
        }
    }
}

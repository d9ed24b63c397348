use crate::service::client::TemplateApi;

impl<A: TemplateApi> super::Page<A> {
    /// Handles a change of the template dropdown.
    ///
    /// A template fills the email subject and body and lists its variables,
    /// the empty option clears them. When selections overlap, only the last
    /// one issued gets applied.
    pub async fn select_template(&self, value: &str) {
        let ticket = self.selection.next();
        if value.is_empty() {
            let mut doc = self.document.lock();
            doc.template_select.value.clear();
            doc.email_form.clear();
            doc.variables_hint.hide();
            return;
        }
        self.document.lock().template_select.value = value.to_owned();

        metrics::counter!("template_fetch", "origin" => "select").increment(1);
        let template = match self.api.find_by_name(value).await {
            Ok(found) => found,
            Err(err) => {
                metrics::counter!("template_fetch_error", "origin" => "select").increment(1);
                tracing::error!("unable to load template {value:?}: {err}");
                return;
            }
        };
        if !self.selection.is_current(ticket) {
            tracing::debug!("dropping outdated template {value:?}");
            return;
        }

        let mut doc = self.document.lock();
        if template.has_variables() {
            doc.variables_hint.show(&template.variables);
        } else {
            doc.variables_hint.hide();
        }
        doc.email_form.subject = template.subject;
        doc.email_form.body = template.body;
    }
}

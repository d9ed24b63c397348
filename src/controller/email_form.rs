/// What the email form posts once the host takes over the submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailSubmission {
    pub template: Option<String>,
    pub sender_email: String,
    pub recipients: String,
    pub cc: String,
    pub bcc: String,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<String>,
}

impl<A> super::Page<A> {
    /// Shows the loading overlay and hands the form content over.
    ///
    /// There is no validation and the overlay stays up, the next page load
    /// replaces the document.
    pub fn submit_email(&self) -> EmailSubmission {
        let mut doc = self.document.lock();
        doc.loading_overlay = true;
        let template = Some(doc.template_select.value.clone()).filter(|value| !value.is_empty());
        EmailSubmission {
            template,
            sender_email: doc.email_form.sender_email.clone(),
            recipients: doc.email_form.recipients.clone(),
            cc: doc.email_form.cc.clone(),
            bcc: doc.email_form.bcc.clone(),
            subject: doc.email_form.subject.clone(),
            body: doc.email_form.body.clone(),
            attachments: doc.selected_files.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::Page;
    use crate::document::Document;
    use crate::test_util::{template, FakeApi};

    #[tokio::test]
    async fn should_show_overlay_on_empty_form() {
        let page = Page::load(FakeApi::default(), Document::default(), Default::default());
        assert!(!page.read(|doc| doc.loading_overlay));
        let submission = page.submit_email();
        assert!(page.read(|doc| doc.loading_overlay));
        assert_eq!(submission.template, None);
        assert!(submission.subject.is_empty());
    }

    #[tokio::test]
    async fn should_hand_over_selected_template() {
        let api = FakeApi::default().with(template("Welcome", "Hello", "Hi {name}", &["name"]));
        let page = Page::load(api, Document::new(["Welcome"]), Default::default());
        page.select_template("Welcome").await;
        page.attachments_changed(["report.pdf"]);
        page.update(|doc| {
            doc.email_form.sender_email = "me@example.com".into();
            doc.email_form.recipients = "a@example.com,name=Ann\nb@example.com".into();
            doc.email_form.bcc = "audit@example.com".into();
        });
        let submission = page.submit_email();
        assert_eq!(submission.template.as_deref(), Some("Welcome"));
        assert_eq!(submission.sender_email, "me@example.com");
        assert_eq!(
            submission.recipients,
            "a@example.com,name=Ann\nb@example.com"
        );
        assert!(submission.cc.is_empty());
        assert_eq!(submission.bcc, "audit@example.com");
        assert_eq!(submission.subject, "Hello");
        assert_eq!(submission.body, "Hi {name}");
        assert_eq!(submission.attachments, vec!["report.pdf"]);
        assert!(page.read(|doc| doc.loading_overlay));
    }
}

use mailmerge::document::FormMode;
use mailmerge::service::client::HttpClient;
use mailmerge::Page;

#[derive(clap::Parser)]
pub(crate) struct Action {
    /// Name of the template to edit.
    pub name: String,
}

impl Action {
    pub(crate) async fn execute(self, page: Page<HttpClient>) -> Result<(), mailmerge::error::Error> {
        page.edit_template(&self.name).await;
        page.read(|doc| {
            let form = &doc.template_form;
            if form.mode == FormMode::Idle {
                tracing::warn!("template {:?} could not be loaded", self.name);
                return;
            }
            println!("{}", form.title);
            println!("Name: {}", form.name);
            println!("Subject: {}", form.subject);
            println!();
            println!("{}", form.body);
        });
        Ok(())
    }
}

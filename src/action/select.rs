use mailmerge::service::client::HttpClient;
use mailmerge::Page;

#[derive(clap::Parser)]
pub(crate) struct Action {
    /// Name of the template, an empty name clears the form.
    pub name: String,
}

impl Action {
    pub(crate) async fn execute(self, page: Page<HttpClient>) -> Result<(), mailmerge::error::Error> {
        page.select_template(&self.name).await;
        page.read(|doc| {
            println!("Subject: {}", doc.email_form.subject);
            if doc.variables_hint.visible {
                println!("{}", doc.variables_hint.text);
            }
            println!();
            println!("{}", doc.email_form.body);
        });
        Ok(())
    }
}

mod delete;
mod edit;
mod select;

use mailmerge::service::client::HttpClient;
use mailmerge::service::config::Configuration;
use mailmerge::{document::Document, Page};

#[derive(clap::Subcommand)]
pub(crate) enum Action {
    /// Pick a template for the email form and print what it fills
    Select(select::Action),
    /// Load a template in the template editor
    Edit(edit::Action),
    /// Delete a template
    Delete(delete::Action),
}

impl Action {
    pub(crate) async fn execute(self, config: Configuration) -> Result<(), mailmerge::error::Error> {
        let client = config.client.build()?;
        match self {
            Self::Select(inner) => {
                let page = create_page(client, &inner.name, &config);
                inner.execute(page).await
            }
            Self::Edit(inner) => {
                let page = create_page(client, &inner.name, &config);
                inner.execute(page).await
            }
            Self::Delete(inner) => {
                let page = create_page(client, &inner.name, &config);
                inner.execute(page).await
            }
        }
    }
}

/// The terminal only knows about the template it was asked for.
fn create_page(client: HttpClient, name: &str, config: &Configuration) -> Page<HttpClient> {
    let names = Some(name).filter(|value| !value.is_empty());
    Page::load(client, Document::new(names), config.flash.clone())
}

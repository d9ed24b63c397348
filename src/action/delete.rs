use mailmerge::service::client::HttpClient;
use mailmerge::Page;
use std::cell::RefCell;
use std::io::{BufRead, Write};

#[derive(clap::Parser)]
pub(crate) struct Action {
    /// Name of the template to delete.
    pub name: String,
    /// Skip the confirmation prompt.
    #[clap(short, long)]
    pub yes: bool,
}

fn ask(message: &str) -> std::io::Result<bool> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{message} [y/N] ")?;
    stdout.flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

impl Action {
    pub(crate) async fn execute(self, page: Page<HttpClient>) -> Result<(), mailmerge::error::Error> {
        let failure = RefCell::new(None);
        let confirm = |message: &str| -> bool {
            if self.yes {
                return true;
            }
            ask(message).unwrap_or_else(|err| {
                *failure.borrow_mut() = Some(err);
                false
            })
        };
        page.delete_template(&self.name, &confirm).await;
        if let Some(err) = failure.into_inner() {
            return Err(err.into());
        }
        page.read(|doc| {
            for item in doc.flash_messages.iter() {
                println!("{}", item.message);
            }
        });
        Ok(())
    }
}

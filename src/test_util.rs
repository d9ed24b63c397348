use crate::service::client::{Error, TemplateApi};
use mailmerge_prelude::{DeleteResponse, Template};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub fn template(name: &str, subject: &str, body: &str, variables: &[&str]) -> Template {
    Template {
        name: name.into(),
        subject: subject.into(),
        body: body.into(),
        variables: variables.iter().map(|item| item.to_string()).collect(),
    }
}

#[derive(Debug, Default)]
struct Inner {
    templates: HashMap<String, Template>,
    delays: HashMap<String, Duration>,
    requests: Vec<String>,
    silent_delete: bool,
}

/// In memory template api recording every request it receives.
#[derive(Clone, Debug, Default)]
pub struct FakeApi(Arc<Mutex<Inner>>);

impl FakeApi {
    pub fn with(self, template: Template) -> Self {
        let key = template.name.clone();
        self.with_key(&key, template)
    }

    /// Serves `template` when `key` is requested, whatever its own name.
    pub fn with_key(self, key: &str, template: Template) -> Self {
        self.0.lock().templates.insert(key.into(), template);
        self
    }

    pub fn with_delay(self, name: &str, delay: Duration) -> Self {
        self.0.lock().delays.insert(name.into(), delay);
        self
    }

    /// Deletions answer without a message, like an outdated server would.
    pub fn with_silent_delete(self) -> Self {
        self.0.lock().silent_delete = true;
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.0.lock().requests.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.lock().templates.contains_key(name)
    }

    async fn record(&self, method: &str, name: &str) {
        let delay = {
            let mut inner = self.0.lock();
            inner.requests.push(format!("{method} {name}"));
            inner.delays.get(name).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait::async_trait]
impl TemplateApi for FakeApi {
    async fn find_by_name(&self, name: &str) -> Result<Template, Error> {
        self.record("GET", name).await;
        self.0
            .lock()
            .templates
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound("Template not found".into()))
    }

    async fn delete_by_name(&self, name: &str) -> Result<DeleteResponse, Error> {
        self.record("DELETE", name).await;
        let mut inner = self.0.lock();
        if inner.silent_delete {
            return Ok(DeleteResponse::default());
        }
        Ok(match inner.templates.remove(name) {
            Some(_) => DeleteResponse {
                message: Some(format!("Template \"{name}\" deleted successfully")),
                error: None,
            },
            None => DeleteResponse {
                message: None,
                error: Some("Template not found".into()),
            },
        })
    }
}

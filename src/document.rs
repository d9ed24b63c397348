//! Headless model of the mail-merge page.
//!
//! Every field mirrors a visible element of the page. Controllers only mutate
//! this structure, rendering it is left to the host.

pub const NO_TEMPLATE_LABEL: &str = "No template - Write custom email";
pub const CREATE_TITLE: &str = "Create New Template";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn template(name: &str) -> Self {
        Self {
            value: name.to_owned(),
            label: name.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSelect {
    pub options: Vec<SelectOption>,
    pub value: String,
}

impl Default for TemplateSelect {
    fn default() -> Self {
        Self {
            options: vec![SelectOption {
                value: String::new(),
                label: NO_TEMPLATE_LABEL.to_owned(),
            }],
            value: String::new(),
        }
    }
}

impl TemplateSelect {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }

    /// Removes the option with the given value, returns `false` when there was none.
    pub fn remove_option(&mut self, value: &str) -> bool {
        let before = self.options.len();
        self.options.retain(|opt| opt.value != value);
        if self.value == value {
            self.value.clear();
        }
        before != self.options.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailForm {
    pub sender_email: String,
    /// One recipient per line, optionally followed by `,key=value` variables.
    pub recipients: String,
    pub cc: String,
    pub bcc: String,
    pub subject: String,
    pub body: String,
}

impl EmailForm {
    pub(crate) fn clear(&mut self) {
        self.subject.clear();
        self.body.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariablesHint {
    pub text: String,
    pub visible: bool,
}

impl VariablesHint {
    pub(crate) fn show(&mut self, variables: &[String]) {
        self.text = format!("Available variables: {}", variables.join(", "));
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateForm {
    pub title: String,
    pub name: String,
    pub name_readonly: bool,
    pub subject: String,
    pub body: String,
    pub mode: FormMode,
    pub cancel_visible: bool,
}

impl Default for TemplateForm {
    fn default() -> Self {
        Self {
            title: CREATE_TITLE.to_owned(),
            name: String::new(),
            name_readonly: false,
            subject: String::new(),
            body: String::new(),
            mode: FormMode::Idle,
            cancel_visible: false,
        }
    }
}

impl TemplateForm {
    /// Value of the hidden `is_edit` input posted with the form.
    pub fn is_edit(&self) -> &'static str {
        match self.mode {
            FormMode::Idle => "false",
            FormMode::Editing(_) => "true",
        }
    }

    /// Fills the form with `template`, the title naming the template as requested.
    pub(crate) fn edit(&mut self, requested: &str, template: mailmerge_prelude::Template) {
        self.title = format!("Edit Template: {requested}");
        self.name_readonly = true;
        self.subject = template.subject;
        self.body = template.body;
        self.mode = FormMode::Editing(template.name.clone());
        self.name = template.name;
        self.cancel_visible = true;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateItem {
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    pub level: FlashLevel,
    pub message: String,
    /// Cleared when the message starts fading out.
    pub shown: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentItem {
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    TemplateForm,
}

#[derive(Clone, Debug, Default)]
pub struct Document {
    pub template_select: TemplateSelect,
    pub email_form: EmailForm,
    pub variables_hint: VariablesHint,
    pub template_form: TemplateForm,
    pub template_items: Vec<TemplateItem>,
    pub flash_messages: Vec<FlashMessage>,
    pub loading_overlay: bool,
    pub selected_files: Vec<String>,
    pub attachment_preview: Vec<AttachmentItem>,
    pub scroll_target: Option<Section>,
    next_flash_id: u64,
}

impl Document {
    /// Builds the page as the server renders it, listing the given templates.
    pub fn new<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut doc = Self::default();
        for name in templates {
            let name = name.as_ref();
            doc.template_select
                .options
                .push(SelectOption::template(name));
            doc.template_items.push(TemplateItem {
                name: name.to_owned(),
            });
        }
        doc
    }

    pub fn with_flash(mut self, level: FlashLevel, message: impl Into<String>) -> Self {
        self.push_flash(level, message);
        self
    }

    pub fn push_flash(&mut self, level: FlashLevel, message: impl Into<String>) -> u64 {
        self.next_flash_id += 1;
        let id = self.next_flash_id;
        self.flash_messages.push(FlashMessage {
            id,
            level,
            message: message.into(),
            shown: true,
        });
        id
    }

    pub fn flash(&self, id: u64) -> Option<&FlashMessage> {
        self.flash_messages.iter().find(|item| item.id == id)
    }

    pub(crate) fn hide_flash(&mut self, id: u64) -> bool {
        match self.flash_messages.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.shown = false;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_flash(&mut self, id: u64) -> bool {
        let before = self.flash_messages.len();
        self.flash_messages.retain(|item| item.id != id);
        before != self.flash_messages.len()
    }

    pub fn has_template_item(&self, name: &str) -> bool {
        self.template_items.iter().any(|item| item.name == name)
    }

    pub(crate) fn remove_template_item(&mut self, name: &str) -> bool {
        let before = self.template_items.len();
        self.template_items.retain(|item| item.name != name);
        before != self.template_items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, FlashLevel, FormMode, TemplateForm, NO_TEMPLATE_LABEL};

    #[test]
    fn should_list_templates_after_the_empty_option() {
        let doc = Document::new(["Welcome", "Reminder"]);
        let labels: Vec<_> = doc
            .template_select
            .options
            .iter()
            .map(|opt| opt.label.as_str())
            .collect();
        assert_eq!(labels, vec![NO_TEMPLATE_LABEL, "Welcome", "Reminder"]);
        assert_eq!(doc.template_select.options[0].value, "");
        assert!(doc.has_template_item("Reminder"));
    }

    #[test]
    fn should_clear_selection_when_removing_selected_option() {
        let mut doc = Document::new(["Welcome"]);
        doc.template_select.value = "Welcome".into();
        assert!(doc.template_select.remove_option("Welcome"));
        assert!(doc.template_select.value.is_empty());
        assert!(!doc.template_select.remove_option("Welcome"));
    }

    #[test]
    fn should_derive_edit_flag_from_mode() {
        let mut form = TemplateForm::default();
        assert_eq!(form.is_edit(), "false");
        form.mode = FormMode::Editing("Welcome".into());
        assert_eq!(form.is_edit(), "true");
        form.reset();
        assert_eq!(form, TemplateForm::default());
    }

    #[test]
    fn should_give_flash_messages_distinct_ids() {
        let mut doc = Document::default().with_flash(FlashLevel::Info, "first");
        let second = doc.push_flash(FlashLevel::Error, "second");
        assert_eq!(doc.flash_messages.len(), 2);
        assert_ne!(doc.flash_messages[0].id, second);
        assert!(doc.hide_flash(second));
        assert!(!doc.flash(second).unwrap().shown);
        assert!(doc.remove_flash(second));
        assert!(!doc.remove_flash(second));
    }
}

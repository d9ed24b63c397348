use crate::document::AttachmentItem;

impl<A> super::Page<A> {
    /// Replaces the selected files and rebuilds their preview.
    pub fn attachments_changed<I, S>(&self, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files: Vec<String> = files.into_iter().map(Into::into).collect();
        let mut doc = self.document.lock();
        doc.attachment_preview = files
            .iter()
            .map(|name| AttachmentItem { name: name.clone() })
            .collect();
        doc.selected_files = files;
    }
}

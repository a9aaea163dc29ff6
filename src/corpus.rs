use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single document held by the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// unique within a session
    pub id: Uuid,
    /// display name (file name or "Manual Ref n")
    pub name: String,
    pub text: String,
}

impl Document {
    /// Create a document with a fresh v4 id
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            text: text.into(),
        }
    }

    /// whitespace-delimited token count
    #[inline]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Session-scoped store of the submission and its reference documents.
///
/// The interface layer owns one `Corpus` per session and mutates it only
/// through the methods below. Nothing is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    submission: String,
    references: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the submission text
    pub fn set_submission(&mut self, text: impl Into<String>) -> &mut Self {
        self.submission = text.into();
        self
    }

    /// Append a reference document and return its id.
    /// Any string is accepted, including an empty one.
    pub fn add_reference(&mut self, name: impl Into<String>, text: impl Into<String>) -> Uuid {
        let doc = Document::new(name, text);
        let id = doc.id;
        self.references.push(doc);
        id
    }

    /// Append pasted text as `Manual Ref {n}`.
    /// Blank text is ignored and `None` is returned.
    pub fn add_pasted_reference(&mut self, text: impl Into<String>) -> Option<Uuid> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        let name = format!("Manual Ref {}", self.references.len() + 1);
        Some(self.add_reference(name, text))
    }

    /// Remove every reference. The submission is kept.
    pub fn clear_references(&mut self) {
        self.references.clear();
    }

    pub fn submission(&self) -> &str {
        &self.submission
    }

    /// references in insertion order
    pub fn references(&self) -> &[Document] {
        &self.references
    }

    pub fn get_reference(&self, id: &Uuid) -> Option<&Document> {
        self.references.iter().find(|doc| doc.id == *id)
    }

    pub fn reference_num(&self) -> usize {
        self.references.len()
    }

    /// `- name (n words)` lines for the current references
    pub fn reference_listing(&self) -> Vec<String> {
        self.references
            .iter()
            .map(|doc| format!("- {} ({} words)", doc.name, doc.word_count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_submission_overwrites() {
        let mut corpus = Corpus::new();
        corpus.set_submission("first");
        corpus.set_submission("second");
        assert_eq!(corpus.submission(), "second");
    }

    #[test]
    fn add_reference_assigns_unique_ids_in_order() {
        let mut corpus = Corpus::new();
        let a = corpus.add_reference("a.txt", "alpha");
        let b = corpus.add_reference("b.txt", "");
        assert_ne!(a, b);
        let names: Vec<&str> = corpus.references().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(corpus.get_reference(&b).map(|d| d.text.as_str()), Some(""));
    }

    #[test]
    fn pasted_references_are_numbered_and_blank_is_ignored() {
        let mut corpus = Corpus::new();
        corpus.add_reference("essay.txt", "some text");
        assert!(corpus.add_pasted_reference("   \n").is_none());
        let id = corpus.add_pasted_reference("pasted words here").unwrap();
        assert_eq!(corpus.get_reference(&id).unwrap().name, "Manual Ref 2");
        assert_eq!(corpus.reference_num(), 2);
    }

    #[test]
    fn clear_references_keeps_submission() {
        let mut corpus = Corpus::new();
        corpus.set_submission("mine");
        corpus.add_reference("r", "theirs");
        corpus.clear_references();
        assert!(corpus.references().is_empty());
        assert_eq!(corpus.submission(), "mine");
    }

    #[test]
    fn listing_shows_word_counts() {
        let mut corpus = Corpus::new();
        corpus.add_reference("notes.txt", "one two  three\nfour");
        assert_eq!(corpus.reference_listing(), vec!["- notes.txt (4 words)".to_string()]);
    }
}

//! Single-owner editing session over one document tree.
//!
//! A [`Session`] holds the current root behind an [`Arc`]. Readers get their
//! own handle to whatever root was current when they asked; edits build a new
//! root with the tree editor and swap it in, so earlier handles keep seeing
//! the tree they were given.

use std::sync::Arc;

use tracing::debug;

use crate::codec::{decode_token, encode_token};
use crate::error::SessionError;
use crate::model::Document;
use crate::tree::{build_tree, extract, label_description_updater, try_update_at_path, TreeNode};

#[derive(Debug, Clone)]
pub struct Session {
    current: Arc<Document>,
}

impl Session {
    /// Starts a session from a pasted token.
    pub fn from_token(token: &str) -> Result<Self, SessionError> {
        let document = decode_token(token)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            current: Arc::new(document),
        }
    }

    /// The current root. The handle stays valid across later edits.
    pub fn current(&self) -> Arc<Document> {
        Arc::clone(&self.current)
    }

    /// Copies out the document at `path` in the current root.
    pub fn extract(&self, path: &str) -> Result<Document, SessionError> {
        Ok(extract(&self.current, path)?.clone())
    }

    /// Path-labelled view of the current root.
    pub fn tree(&self) -> TreeNode<'_> {
        build_tree(&self.current)
    }

    /// Sets label and description on the document at `path`.
    ///
    /// Empty strings clear the field. Fails with [`SessionError::StalePath`]
    /// if `path` no longer resolves (e.g. it came from a tree built before
    /// the root was replaced); the current root is left as it was.
    pub fn edit_label_description(
        &mut self,
        path: &str,
        label: &str,
        description: &str,
    ) -> Result<(), SessionError> {
        let updated =
            try_update_at_path(&self.current, path, label_description_updater(label, description))
                .map_err(|err| {
                    debug!(path, error = %err, "edit target no longer resolves");
                    SessionError::StalePath {
                        path: path.to_string(),
                    }
                })?;
        self.replace(updated);
        Ok(())
    }

    /// Swaps in a new root.
    pub fn replace(&mut self, document: Document) {
        debug!(
            previous_nodes = build_tree(&self.current).node_count(),
            nodes = build_tree(&document).node_count(),
            "replacing session root"
        );
        self.current = Arc::new(document);
    }

    /// Encodes the current root with the default profile.
    pub fn token(&self) -> Result<String, SessionError> {
        Ok(encode_token(&self.current)?)
    }
}

impl From<Document> for Session {
    fn from(document: Document) -> Self {
        Self::from_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::DocumentAccessor;
    use crate::error::PathError;
    use crate::model::{BlueprintBuilder, BookBuilder};

    fn book() -> Document {
        BookBuilder::new()
            .label("book")
            .blueprint(BlueprintBuilder::new().label("first").build())
            .blueprint(BlueprintBuilder::new().label("second").build())
            .build()
    }

    #[test]
    fn test_token_round_trip() {
        let session = Session::from_document(book());
        let token = session.token().unwrap();
        let reopened = Session::from_token(&token).unwrap();
        assert_eq!(*reopened.current(), book());
    }

    #[test]
    fn test_bad_token() {
        let err = Session::from_token("not a token").unwrap_err();
        assert!(matches!(err, SessionError::Decode(_)));
    }

    #[test]
    fn test_edit_keeps_old_handles() {
        let mut session = Session::from_document(book());
        let before = session.current();

        session
            .edit_label_description("2", "renamed", "now with text")
            .unwrap();

        let after = session.current();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, book());

        let edited = DocumentAccessor::from(session.extract("2").unwrap());
        assert_eq!(edited.label(), Ok(Some("renamed")));
        assert_eq!(edited.description(), Ok(Some("now with text")));
    }

    #[test]
    fn test_stale_path() {
        let mut session = Session::from_document(book());
        let before = session.current();

        let err = session.edit_label_description("3", "x", "").unwrap_err();
        assert_eq!(err, SessionError::StalePath { path: "3".into() });
        assert!(Arc::ptr_eq(&before, &session.current()));
    }

    #[test]
    fn test_extract_error() {
        let session = Session::from_document(book());
        assert_eq!(
            session.extract("1.1"),
            Err(SessionError::Path(PathError::NoBookAtPath {
                traversed: "1".into()
            }))
        );
    }

    #[test]
    fn test_tree_reflects_replacement() {
        let mut session = Session::from_document(book());
        assert_eq!(session.tree().node_count(), 3);

        session.replace(BlueprintBuilder::new().build());
        assert_eq!(session.tree().node_count(), 1);
    }
}

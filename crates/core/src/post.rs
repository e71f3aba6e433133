//! Blog post entity and the search matching rule.

use serde::{Deserialize, Serialize};

use crate::PostId;

/// A persisted blog entry.
///
/// `title` is plain text (escaped on render). `text` is trusted markup and is
/// rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub text: String,
}

impl Post {
    /// Case-insensitive substring match against title or text.
    ///
    /// A blank query matches every post.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle) || self.text.to_lowercase().contains(&needle)
    }
}

/// Insert payload for a post (the store assigns the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub text: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            text: self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn post(title: &str, text: &str) -> Post {
        NewPost::new(title, text).with_id(PostId::new(1))
    }

    #[test]
    fn matches_title_or_text_ignoring_case() {
        let p = post("First", "Lorem ipsum");
        assert!(p.matches("first"));
        assert!(p.matches("IPSUM"));
        assert!(p.matches("rem ip"));
        assert!(!p.matches("hello"));
    }

    #[test]
    fn blank_query_matches_everything() {
        let p = post("anything", "at all");
        assert!(p.matches(""));
        assert!(p.matches("   "));
    }

    #[test]
    fn query_is_trimmed() {
        assert!(post("hello world", "").matches("  hello "));
    }

    proptest! {
        #[test]
        fn any_substring_of_title_matches(title in "[a-zA-Z ]{1,24}", start in 0usize..24, len in 1usize..24) {
            let p = post(&title, "");
            let start = start.min(title.len() - 1);
            let end = (start + len).min(title.len());
            let needle = &title[start..end];
            prop_assert!(p.matches(needle));
        }
    }
}

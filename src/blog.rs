use serde::{Deserialize, Serialize};

pub type BlogID = u64;

pub const DEFAULT_STORE_PATH: &str = "./blog-store";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8010";

/// Name shown on the welcome page.
pub const BLOGGER: &str = "hao";

/// Compare records with [`Blog::same_record`]; there is no `PartialEq`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Assigned by the repository on first save, fixed after that.
    pub id: Option<BlogID>,
    pub title: String,
    /// Markdown body
    #[serde(default)]
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields accepted from the submission form. Anything else the browser sends
/// (an `id`, for instance) is dropped, so a submission always creates a new blog.
#[derive(Debug, Deserialize)]
pub struct BlogForm {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Blog {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Blog {
        Blog {
            id: None,
            title: title.into(),
            content: content.into(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Two blogs are the same record iff both are persisted under the same id.
    pub fn same_record(&self, other: &Blog) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl BlogForm {
    pub fn into_blog(self) -> Blog {
        Blog::new(self.title, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_binds_to_new_blog() {
        let form: BlogForm = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        let blog = form.into_blog();

        assert!(blog.is_new());
        assert_eq!(blog.title, "Hello");
        assert_eq!(blog.content, "");
    }

    #[test]
    fn identity_needs_an_id() {
        let a = Blog::new("a", "");
        let b = a.clone();
        assert!(!a.same_record(&b));

        let a = Blog { id: Some(3), ..a };
        let b = Blog {
            id: Some(3),
            title: String::from("renamed"),
            ..b
        };
        assert!(a.same_record(&b));
        assert!(!a.same_record(&Blog { id: Some(4), ..b }));
    }
}

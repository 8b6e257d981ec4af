use super::{BlogRepository, IdCounter};
use crate::blog::{Blog, BlogID};
use crate::error::PersistenceError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct MemoryRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    blogs: BTreeMap<BlogID, Blog>,
    ids: IdCounter,
}

impl MemoryRepository {
    pub fn new() -> MemoryRepository {
        MemoryRepository {
            inner: RwLock::new(Inner {
                blogs: BTreeMap::new(),
                ids: IdCounter::starting_after(None),
            }),
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for MemoryRepository {
    async fn save(&self, mut blog: Blog) -> Result<Blog, PersistenceError> {
        let mut inner = self.inner.write().await;

        let id = match blog.id {
            Some(id) => {
                inner.ids.observe(id);
                id
            }
            None => inner.ids.allocate()?,
        };
        blog.id = Some(id);
        inner.blogs.insert(id, blog.clone());

        Ok(blog)
    }

    async fn find_all(&self) -> Result<Vec<Blog>, PersistenceError> {
        Ok(self.inner.read().await.blogs.values().cloned().collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Blog>, PersistenceError> {
        Ok(self
            .inner
            .read()
            .await
            .blogs
            .values()
            .filter(|blog| blog.title == title)
            .cloned()
            .collect())
    }
}

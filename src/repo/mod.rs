use crate::blog::{Blog, BlogID};
use crate::error::PersistenceError;
use async_trait::async_trait;

pub mod json;
pub mod memory;

pub use json::JsonFileRepository;
pub use memory::MemoryRepository;

/// Everything the controller may do with stored blogs.
#[async_trait]
pub trait BlogRepository: Send + Sync + std::fmt::Debug {
    /// Inserts a new blog (assigning it a fresh id) or overwrites the record
    /// stored under its existing id. Returns the blog as stored.
    async fn save(&self, blog: Blog) -> Result<Blog, PersistenceError>;

    /// Every stored blog, ordered by id.
    async fn find_all(&self) -> Result<Vec<Blog>, PersistenceError>;

    /// Blogs whose title equals `title` exactly, ordered by id.
    async fn find_by_title(&self, title: &str) -> Result<Vec<Blog>, PersistenceError>;
}

/// Hands out ids for new blogs, never repeating one that has been stored.
/// Once `BlogID::MAX` is taken there is nothing left to hand out.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdCounter {
    next: Option<BlogID>,
}

impl IdCounter {
    pub(crate) fn starting_after(max_existing: Option<BlogID>) -> IdCounter {
        IdCounter {
            next: max_existing.map_or(Some(1), |id| id.checked_add(1)),
        }
    }

    pub(crate) fn allocate(&mut self) -> Result<BlogID, PersistenceError> {
        let id = self.next.ok_or(PersistenceError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(id)
    }

    /// Upserts may carry ids the counter has not reached yet.
    pub(crate) fn observe(&mut self, id: BlogID) {
        if let Some(next) = self.next {
            if id >= next {
                self.next = id.checked_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_from_one() {
        let mut ids = IdCounter::starting_after(None);
        assert_eq!(ids.allocate().unwrap(), 1);
        assert_eq!(ids.allocate().unwrap(), 2);

        let mut ids = IdCounter::starting_after(Some(41));
        assert_eq!(ids.allocate().unwrap(), 42);
    }

    #[test]
    fn last_id_exhausts_the_counter() {
        let mut ids = IdCounter::starting_after(Some(BlogID::MAX - 1));
        assert_eq!(ids.allocate().unwrap(), BlogID::MAX);
        assert!(matches!(ids.allocate(), Err(PersistenceError::IdsExhausted)));

        let mut ids = IdCounter::starting_after(Some(BlogID::MAX));
        assert!(matches!(ids.allocate(), Err(PersistenceError::IdsExhausted)));
    }

    #[test]
    fn observing_the_last_id_exhausts_the_counter() {
        let mut ids = IdCounter::starting_after(None);
        ids.observe(BlogID::MAX);
        assert!(matches!(ids.allocate(), Err(PersistenceError::IdsExhausted)));

        // lower ids never move it back
        ids.observe(3);
        assert!(matches!(ids.allocate(), Err(PersistenceError::IdsExhausted)));
    }
}

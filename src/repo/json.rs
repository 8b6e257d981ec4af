use super::{BlogRepository, IdCounter};
use crate::blog::{Blog, BlogID};
use crate::error::PersistenceError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Stores each blog as `<store>/blog/<id>.json`.
#[derive(Debug)]
pub struct JsonFileRepository {
    blog_dir: PathBuf,
    // held for the whole of a save so ids and files stay in step
    ids: Mutex<IdCounter>,
}

impl JsonFileRepository {
    pub async fn open(
        store_path: impl AsRef<Path>,
    ) -> Result<JsonFileRepository, PersistenceError> {
        let blog_dir = store_path.as_ref().join("blog");
        tokio::fs::create_dir_all(&blog_dir)
            .await
            .map_err(|err| PersistenceError::Unavailable(format!("{blog_dir:?}: {err}")))?;

        let max_existing = stored_ids(&blog_dir).await?.into_iter().max();
        tracing::debug!(?blog_dir, ?max_existing, "opened blog store");

        Ok(JsonFileRepository {
            blog_dir,
            ids: Mutex::new(IdCounter::starting_after(max_existing)),
        })
    }

    fn blog_path(&self, id: BlogID) -> PathBuf {
        self.blog_dir.join(format!("{id}.json"))
    }

    async fn read_blog(&self, id: BlogID) -> Result<Blog, PersistenceError> {
        let path = self.blog_path(id);
        let file = tokio::fs::read(&path).await?;
        let blog = serde_json::from_slice::<Blog>(&file)?;

        match blog.id {
            Some(stored_id) if stored_id == id => Ok(blog),
            Some(stored_id) => Err(PersistenceError::Corrupt {
                path,
                reason: format!("file holds blog {stored_id}"),
            }),
            None => Err(PersistenceError::Corrupt {
                path,
                reason: String::from("stored blog has no id"),
            }),
        }
    }

    async fn read_all(&self) -> Result<Vec<Blog>, PersistenceError> {
        let mut ids = stored_ids(&self.blog_dir).await?;
        ids.sort_unstable();

        let mut blogs = Vec::with_capacity(ids.len());
        for id in ids {
            match self.read_blog(id).await {
                Ok(blog) => blogs.push(blog),
                // removed between listing and reading
                Err(PersistenceError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err),
            }
        }

        Ok(blogs)
    }
}

#[async_trait]
impl BlogRepository for JsonFileRepository {
    async fn save(&self, mut blog: Blog) -> Result<Blog, PersistenceError> {
        let mut ids = self.ids.lock().await;

        let id = match blog.id {
            Some(id) => id,
            None => ids.allocate()?,
        };
        blog.id = Some(id);

        let path = self.blog_path(id);
        let temp_path = self.blog_dir.join(format!("{id}.json.tmp"));
        tokio::fs::write(&temp_path, serde_json::to_vec(&blog)?).await?;
        tokio::fs::rename(&temp_path, &path).await?;

        ids.observe(id);
        Ok(blog)
    }

    async fn find_all(&self) -> Result<Vec<Blog>, PersistenceError> {
        self.read_all().await
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Blog>, PersistenceError> {
        let mut blogs = self.read_all().await?;
        blogs.retain(|blog| blog.title == title);
        Ok(blogs)
    }
}

/// Ids of every `<id>.json` file in `blog_dir`. Other files are skipped.
async fn stored_ids(blog_dir: &Path) -> Result<Vec<BlogID>, PersistenceError> {
    let mut entries = tokio::fs::read_dir(blog_dir).await?;
    let mut ids = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name();
        let Some(id) = file_name
            .to_str()
            .and_then(|name| name.strip_suffix(".json"))
            .and_then(|stem| stem.parse::<BlogID>().ok())
        else {
            continue;
        };
        ids.push(id);
    }

    Ok(ids)
}

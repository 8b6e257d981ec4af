//! HTML pages. Each template struct carries the page's named attributes;
//! askama escapes everything substituted into them.

use crate::blog::Blog;
use askama::Template;
use axum::http::StatusCode;

#[derive(Template)]
#[template(path = "welcome.html")]
struct WelcomeTemplate<'a> {
    blogger: &'a str,
}

#[derive(Template)]
#[template(path = "postBlog.html")]
struct PostBlogTemplate;

#[derive(Template)]
#[template(path = "listAllBlog.html")]
struct ListAllBlogTemplate {
    blogs: Vec<BlogEntry>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    code: &'a str,
    status: String,
}

/// A blog as the list page shows it.
struct BlogEntry {
    id: String,
    title: String,
    posted: String,
    // already HTML, inserted unescaped
    content_html: String,
}

impl From<&Blog> for BlogEntry {
    fn from(blog: &Blog) -> BlogEntry {
        BlogEntry {
            id: blog.id.map(|id| id.to_string()).unwrap_or_default(),
            title: blog.title.clone(),
            posted: blog.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            content_html: render_markdown(&blog.content),
        }
    }
}

pub fn welcome(blogger: &str) -> askama::Result<String> {
    WelcomeTemplate { blogger }.render()
}

pub fn post_blog_form() -> askama::Result<String> {
    PostBlogTemplate.render()
}

pub fn list_all_blogs(blogs: &[Blog]) -> askama::Result<String> {
    ListAllBlogTemplate {
        blogs: blogs.iter().map(BlogEntry::from).collect(),
    }
    .render()
}

pub fn error_page(status: StatusCode) -> askama::Result<String> {
    ErrorTemplate {
        code: status.as_str(),
        status: status.to_string(),
    }
    .render()
}

// default options leave raw HTML out of the output
fn render_markdown(content: &str) -> String {
    comrak::markdown_to_html(content, &comrak::Options::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_names_the_blogger() {
        assert!(welcome("hao").unwrap().contains("Welcome, hao!"));
    }

    #[test]
    fn form_posts_title_and_content() {
        let form = post_blog_form().unwrap();
        assert!(form.contains("action=\"/postBlog.do\""));
        assert!(form.contains("name=\"title\""));
        assert!(form.contains("name=\"content\""));
    }

    #[test]
    fn list_escapes_titles_and_renders_markdown() {
        let blog = Blog {
            id: Some(2),
            ..Blog::new("<b>bold</b> & co", "some *emphasis*\n\n<script>alert(1)</script>")
        };
        let page = list_all_blogs(&[blog]).unwrap();

        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
        assert!(page.contains("<em>emphasis</em>"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("id=\"blog-2\""));
    }

    #[test]
    fn empty_list_says_so() {
        assert!(list_all_blogs(&[]).unwrap().contains("No blogs yet."));
    }

    #[test]
    fn error_page_shows_status() {
        let page = error_page(StatusCode::INTERNAL_SERVER_ERROR).unwrap();
        assert!(page.contains("<title>500</title>"));
        assert!(page.contains("<h1>500 Internal Server Error</h1>"));
    }
}

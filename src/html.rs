//! Server-rendered pages. Markup is assembled by hand; every piece of
//! user-supplied text goes through [`escape`] first.

use chrono::{DateTime, Utc};

use crate::models::Post;

/// Entity-escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\
         </body>\n\
         </html>\n",
        escape(title),
        body
    )
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub fn index_page(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Posts</h1>\n<a href=\"/create-post\">New post</a>\n");

    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for post in posts {
            body.push_str(&format!(
                "<li>\n<h2><a href=\"/post/{id}\">{title}</a></h2>\n<p>{content}</p>\n\
                 <small>Author {author} &middot; {created}</small>\n</li>\n",
                id = post.id,
                title = escape(&post.title),
                content = escape(&post.content),
                author = post.author_id,
                created = timestamp(&post.created_at),
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Blog", &body)
}

pub fn post_page(post: &Post) -> String {
    let title = escape(&post.title);
    let content = escape(&post.content);
    let body = format!(
        "<h1>{title}</h1>\n\
         <p>{content}</p>\n\
         <p><small>Author {author} &middot; created {created} &middot; \
         updated {updated}</small></p>\n\
         <h2>Edit</h2>\n\
         <form method=\"post\" action=\"/edit-post/{id}\">\n\
         <input type=\"text\" name=\"title\" value=\"{title}\">\n\
         <textarea name=\"content\">{content}</textarea>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <a href=\"/\">Back to posts</a>\n",
        id = post.id,
        author = post.author_id,
        created = timestamp(&post.created_at),
        updated = timestamp(&post.updated_at),
    );

    layout(&post.title, &body)
}

pub fn create_post_page() -> String {
    layout(
        "New post",
        "<h1>New post</h1>\n\
         <form method=\"post\" action=\"/create-post\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"Title\">\n\
         <textarea name=\"content\" placeholder=\"Content\"></textarea>\n\
         <button type=\"submit\">Create</button>\n\
         </form>\n\
         <a href=\"/\">Back to posts</a>\n",
    )
}

pub fn post_created_page() -> String {
    layout(
        "Post created",
        "<h2>Post created successfully!</h2>\n\
         <a href=\"/\">Back to posts</a>\n\
         <script>\n\
         setTimeout(() => { window.location.href = \"/\"; }, 2000);\n\
         </script>\n",
    )
}

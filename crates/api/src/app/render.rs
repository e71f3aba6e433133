//! HTML pages.
//!
//! Post titles, flash messages, errors and echoed queries are escaped. Post
//! text is trusted markup written by the logged-in author and is emitted
//! unescaped.

use std::fmt::Write as _;

use axum::http::StatusCode;

use microblog_core::Post;

const EMPTY_PLACEHOLDER: &str = "No entries yet. Add some!";

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
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

pub fn index_page(posts: &[Post], logged_in: bool, flashes: &[String]) -> String {
    let mut body = String::new();

    if logged_in {
        body.push_str(
            r#"<form action="/add" method="post" class="add-entry">
  <dl>
    <dt>Title:</dt><dd><input type="text" size="30" name="title"></dd>
    <dt>Text:</dt><dd><textarea name="text" rows="5" cols="40"></textarea></dd>
    <dd><input type="submit" value="Share"></dd>
  </dl>
</form>
"#,
        );
    }

    body.push_str(&entry_list(posts, logged_in, EMPTY_PLACEHOLDER));
    layout("Microblog", logged_in, flashes, &body)
}

pub fn login_page(error: Option<&str>, flashes: &[String]) -> String {
    let mut body = String::from("<h2>Login</h2>\n");
    if let Some(error) = error {
        let _ = writeln!(
            body,
            r#"<p class="error"><strong>Error:</strong> {}</p>"#,
            escape_html(error)
        );
    }
    body.push_str(
        r#"<form action="/login" method="post">
  <dl>
    <dt>Username:</dt><dd><input type="text" name="username"></dd>
    <dt>Password:</dt><dd><input type="password" name="password"></dd>
    <dd><input type="submit" value="Login"></dd>
  </dl>
</form>
"#,
    );
    layout("Login", false, flashes, &body)
}

pub fn search_page(query: Option<&str>, posts: &[Post], logged_in: bool, flashes: &[String]) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"<form action="/search/" method="get" class="search">
  <input type="text" name="query" value="{}">
  <input type="submit" value="Search">
</form>
"#,
        escape_html(query.unwrap_or_default())
    );

    let empty = match query {
        Some(q) => format!("No entries match &quot;{}&quot;.", escape_html(q)),
        None => EMPTY_PLACEHOLDER.to_string(),
    };
    body.push_str(&entry_list(posts, logged_in, &empty));
    layout("Search", logged_in, flashes, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h2>{}</h2>\n<p class=\"error\">{}</p>\n",
        status.as_u16(),
        escape_html(message)
    );
    layout(status.canonical_reason().unwrap_or("Error"), false, &[], &body)
}

/// `empty` is inserted verbatim; callers escape any user input in it.
fn entry_list(posts: &[Post], logged_in: bool, empty: &str) -> String {
    let mut out = String::from("<ul class=\"entries\">\n");
    if posts.is_empty() {
        let _ = writeln!(out, "  <li><em>{empty}</em></li>");
    }
    for post in posts {
        let _ = write!(
            out,
            "  <li class=\"entry\" id=\"post-{id}\"><h2>{title}</h2>{text}",
            id = post.id,
            title = escape_html(&post.title),
            text = post.text,
        );
        if logged_in {
            let _ = write!(out, " <a class=\"delete\" href=\"/delete/{}\">delete</a>", post.id);
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
    out
}

fn layout(title: &str, logged_in: bool, flashes: &[String], body: &str) -> String {
    let nav = if logged_in {
        r#"<a href="/logout">log out</a>"#
    } else {
        r#"<a href="/login">log in</a>"#
    };

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<div class="page">
<h1><a href="/">Microblog</a></h1>
<div class="metanav">{nav} | <a href="/search/">search</a></div>
"#,
        title = escape_html(title),
    );
    for message in flashes {
        let _ = writeln!(out, r#"<div class="flash">{}</div>"#, escape_html(message));
    }
    out.push_str(body);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use microblog_core::{NewPost, PostId};

    use super::*;

    fn post(id: i64, title: &str, text: &str) -> Post {
        NewPost::new(title, text).with_id(PostId::new(id))
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<Hello>"), "&lt;Hello&gt;");
        assert_eq!(escape_html(r#"a & "b" 'c'"#), "a &amp; &quot;b&quot; &#x27;c&#x27;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn empty_index_shows_placeholder() {
        let html = index_page(&[], false, &[]);
        assert!(html.contains("No entries yet. Add some!"));
        assert!(!html.contains("action=\"/add\""));
    }

    #[test]
    fn title_is_escaped_but_text_is_raw() {
        let html = index_page(
            &[post(1, "<Hello>", "<strong>HTML</strong> allowed here")],
            true,
            &[],
        );
        assert!(html.contains("&lt;Hello&gt;"));
        assert!(html.contains("<strong>HTML</strong> allowed here"));
        assert!(!html.contains("<h2><Hello></h2>"));
        assert!(html.contains("href=\"/delete/1\""));
    }

    #[test]
    fn delete_links_only_when_logged_in() {
        let html = index_page(&[post(3, "t", "x")], false, &[]);
        assert!(!html.contains("/delete/3"));
        assert!(html.contains("log in"));
    }

    #[test]
    fn flashes_and_errors_are_escaped() {
        let html = login_page(Some("Invalid <username>"), &["<b>hi</b>".to_string()]);
        assert!(html.contains("Invalid &lt;username&gt;"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn search_echoes_escaped_query() {
        let html = search_page(Some("<script>"), &[], false, &[]);
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(html.contains("No entries match &quot;&lt;script&gt;&quot;."));
        assert!(!html.contains("<script>"));
    }
}

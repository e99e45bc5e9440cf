//! Server-rendered views
//!
//! Minimal HTML5 built from typed view models. No template engine: the
//! pages are small enough that plain builders over one escape helper
//! keep the whole surface greppable. Presentation polish is explicitly
//! out of scope; correctness of escaping is not.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use lineup_commons::{QueueEntry, QueueTable, User};

/// Escape text for interpolation into HTML bodies and quoted
/// attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a rendered page in a 200 HTML response.
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Shared page chrome. The navigation varies with login state; every
/// page goes through here so the session is visible everywhere.
fn layout(title: &str, viewer: Option<&User>, body: &str) -> String {
    let nav = match viewer {
        Some(user) => format!(
            concat!(
                r#"<a href="/">Tables</a> <a href="/search">Search</a> "#,
                r#"<a href="/queue">New table</a> "#,
                r#"<span>Signed in as {}</span> <a href="/logout">Log out</a>"#
            ),
            escape(&user.username)
        ),
        None => concat!(
            r#"<a href="/">Tables</a> <a href="/search">Search</a> "#,
            r#"<a href="/login">Log in</a> <a href="/register">Register</a>"#
        )
        .to_string(),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Lineup</title>\n</head>\n<body>\n\
         <nav>{nav}</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        nav = nav,
        body = body,
    )
}

fn error_fragment(error: Option<&str>) -> String {
    match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", escape(message)),
        None => String::new(),
    }
}

fn created_label(table: &QueueTable) -> String {
    table
        .created_at_utc()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// The table listing, used by `/` and `/search`.
pub struct ListingView<'a> {
    pub heading: &'a str,
    pub tables: &'a [QueueTable],
    pub viewer: Option<&'a User>,
    /// `Some` renders the search box, prefilled with the query.
    pub query: Option<&'a str>,
    /// Shown instead of the list when there are no tables.
    pub empty_message: &'a str,
}

impl ListingView<'_> {
    pub fn render(&self) -> String {
        let mut body = format!("<h1>{}</h1>\n", escape(self.heading));

        if let Some(query) = self.query {
            body.push_str(&format!(
                concat!(
                    r#"<form method="get" action="/search">"#,
                    r#"<input type="text" name="searching_table" value="{}">"#,
                    r#"<button type="submit">Search</button></form>"#,
                    "\n"
                ),
                escape(query)
            ));
        }

        if self.tables.is_empty() {
            body.push_str(&format!("<p>{}</p>\n", escape(self.empty_message)));
        } else {
            body.push_str("<ul class=\"queue-tables\">\n");
            for table in self.tables {
                body.push_str(&format!(
                    r#"<li><a href="/make/{id}">{name}</a> <small>created {created}</small>"#,
                    id = table.id,
                    name = escape(&table.name),
                    created = created_label(table),
                ));
                if self.viewer.is_some() {
                    body.push_str(&format!(
                        concat!(
                            r#" <form method="post" action="/delete/{id}">"#,
                            r#"<button type="submit">Delete</button></form>"#
                        ),
                        id = table.id,
                    ));
                }
                body.push_str("</li>\n");
            }
            body.push_str("</ul>\n");
        }

        layout(self.heading, self.viewer, &body)
    }
}

/// One queue table with its entries and the add-entry form. The page
/// is login-gated, so the viewer is always present.
pub struct TableDetailView<'a> {
    pub table: &'a QueueTable,
    pub entries: &'a [QueueEntry],
    pub viewer: &'a User,
    pub error: Option<&'a str>,
}

impl TableDetailView<'_> {
    pub fn render(&self) -> String {
        let mut body = format!(
            "<h1>{}</h1>\n<p><small>created {}</small></p>\n",
            escape(&self.table.name),
            created_label(self.table),
        );
        body.push_str(&error_fragment(self.error));

        if self.entries.is_empty() {
            body.push_str("<p>No entries yet.</p>\n");
        } else {
            body.push_str("<ol class=\"queue-entries\">\n");
            for entry in self.entries {
                body.push_str(&format!("<li>{}</li>\n", escape(&entry.name)));
            }
            body.push_str("</ol>\n");
        }

        body.push_str(&format!(
            concat!(
                r#"<form method="post" action="/make/{id}">"#,
                r#"<label>Name <input type="text" name="name"></label> "#,
                r#"<button type="submit">Add to queue</button></form>"#,
                "\n",
                r#"<p><a href="/">Back to tables</a></p>"#,
                "\n"
            ),
            id = self.table.id,
        ));

        layout(&self.table.name, Some(self.viewer), &body)
    }
}

/// Registration form, optionally re-rendered with an error and the
/// submitted identity fields (the password is never echoed).
pub struct RegisterView<'a> {
    pub error: Option<&'a str>,
    pub username: &'a str,
    pub email: &'a str,
}

impl RegisterView<'_> {
    pub fn render(&self) -> String {
        let mut body = "<h1>Register</h1>\n".to_string();
        body.push_str(&error_fragment(self.error));
        body.push_str(&format!(
            concat!(
                r#"<form method="post" action="/register">"#,
                "\n",
                r#"<label>Username <input type="text" name="username" value="{username}"></label>"#,
                "\n",
                r#"<label>Email <input type="email" name="email" value="{email}"></label>"#,
                "\n",
                r#"<label>Password <input type="password" name="password"></label>"#,
                "\n",
                r#"<button type="submit">Create account</button>"#,
                "\n</form>\n",
                r#"<p>Already have an account? <a href="/login">Log in</a></p>"#,
                "\n"
            ),
            username = escape(self.username),
            email = escape(self.email),
        ));
        layout("Register", None, &body)
    }
}

/// Login form with the single generic failure message.
pub struct LoginView<'a> {
    pub error: Option<&'a str>,
    pub username: &'a str,
}

impl LoginView<'_> {
    pub fn render(&self) -> String {
        let mut body = "<h1>Log in</h1>\n".to_string();
        body.push_str(&error_fragment(self.error));
        body.push_str(&format!(
            concat!(
                r#"<form method="post" action="/login">"#,
                "\n",
                r#"<label>Username <input type="text" name="username" value="{username}"></label>"#,
                "\n",
                r#"<label>Password <input type="password" name="password"></label>"#,
                "\n",
                r#"<button type="submit">Log in</button>"#,
                "\n</form>\n",
                r#"<p>New here? <a href="/register">Register</a></p>"#,
                "\n"
            ),
            username = escape(self.username),
        ));
        layout("Log in", None, &body)
    }
}

/// New-queue-table form. Login-gated.
pub struct NewTableView<'a> {
    pub viewer: &'a User,
    pub error: Option<&'a str>,
    pub table_name: &'a str,
}

impl NewTableView<'_> {
    pub fn render(&self) -> String {
        let mut body = "<h1>New queue table</h1>\n".to_string();
        body.push_str(&error_fragment(self.error));
        body.push_str(&format!(
            concat!(
                r#"<form method="post" action="/queue">"#,
                "\n",
                r#"<label>Table name <input type="text" name="table_name" value="{name}"></label>"#,
                "\n",
                r#"<button type="submit">Create</button>"#,
                "\n</form>\n"
            ),
            name = escape(self.table_name),
        ));
        layout("New queue table", Some(self.viewer), &body)
    }
}

/// Standalone error page for statuses that reach the error mapping.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    layout(&title, None, &format!("<p>{}</p>\n", escape(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_commons::{EntryId, TableId, UserId};

    fn viewer() -> User {
        User {
            id: UserId::new(1),
            username: "amira".to_string(),
            email: "amira@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            is_admin: false,
            created_at: 1_700_000_000_000,
        }
    }

    fn table(id: i64, name: &str) -> QueueTable {
        QueueTable {
            id: TableId::new(id),
            name: name.to_string(),
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_escape_covers_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_listing_shows_tables_and_delete_for_viewer() {
        let tables = vec![table(3, "Front desk")];
        let user = viewer();
        let page = ListingView {
            heading: "Queue tables",
            tables: &tables,
            viewer: Some(&user),
            query: None,
            empty_message: "No queue tables yet.",
        }
        .render();

        assert!(page.contains(r#"<a href="/make/3">Front desk</a>"#));
        assert!(page.contains(r#"action="/delete/3""#));
        assert!(page.contains("Signed in as amira"));
        assert!(page.contains(r#"<a href="/logout">"#));
    }

    #[test]
    fn test_listing_for_anonymous_hides_delete() {
        let tables = vec![table(3, "Front desk")];
        let page = ListingView {
            heading: "Queue tables",
            tables: &tables,
            viewer: None,
            query: None,
            empty_message: "No queue tables yet.",
        }
        .render();

        assert!(!page.contains("/delete/"));
        assert!(page.contains(r#"<a href="/login">"#));
        assert!(page.contains(r#"<a href="/register">"#));
    }

    #[test]
    fn test_listing_empty_message() {
        let page = ListingView {
            heading: "Queue tables",
            tables: &[],
            viewer: None,
            query: None,
            empty_message: "No queue tables yet.",
        }
        .render();
        assert!(page.contains("No queue tables yet."));
        assert!(!page.contains("<ul"));
    }

    #[test]
    fn test_table_names_are_escaped() {
        let tables = vec![table(1, "<script>alert(1)</script>")];
        let page = ListingView {
            heading: "Queue tables",
            tables: &tables,
            viewer: None,
            query: None,
            empty_message: "",
        }
        .render();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_search_box_prefills_the_query() {
        let page = ListingView {
            heading: "Search queue tables",
            tables: &[],
            viewer: None,
            query: Some("clinic"),
            empty_message: "No matching queue tables.",
        }
        .render();
        assert!(page.contains(r#"name="searching_table" value="clinic""#));
    }

    #[test]
    fn test_detail_renders_entries_in_order() {
        let t = table(5, "Bakery");
        let user = viewer();
        let entries = vec![
            QueueEntry {
                id: EntryId::new(1),
                table_id: t.id,
                name: "Lena".to_string(),
            },
            QueueEntry {
                id: EntryId::new(2),
                table_id: t.id,
                name: "Marco".to_string(),
            },
        ];
        let page = TableDetailView {
            table: &t,
            entries: &entries,
            viewer: &user,
            error: None,
        }
        .render();

        let lena = page.find("<li>Lena</li>").unwrap();
        let marco = page.find("<li>Marco</li>").unwrap();
        assert!(lena < marco);
        assert!(page.contains(r#"action="/make/5""#));
    }

    #[test]
    fn test_register_view_keeps_identity_fields_not_password() {
        let page = RegisterView {
            error: Some("That username is already taken."),
            username: "amira",
            email: "amira@example.com",
        }
        .render();
        assert!(page.contains("That username is already taken."));
        assert!(page.contains(r#"name="username" value="amira""#));
        assert!(page.contains(r#"name="email" value="amira@example.com""#));
        assert!(page.contains(r#"<input type="password" name="password">"#));
    }

    #[test]
    fn test_error_page_names_the_status() {
        let page = error_page(StatusCode::NOT_FOUND, "That page does not exist.");
        assert!(page.contains("404 Not Found"));
        assert!(page.contains("That page does not exist."));
    }
}

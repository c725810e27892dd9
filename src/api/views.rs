//! Server-rendered HTML for every page.
//!
//! All user-supplied text goes through `html_escape` before it reaches the markup.

use axum::http::StatusCode;
use axum::response::Html;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

use super::menu::Page;
use super::session::VisitorSession;
use crate::db::{FoundItem, LostItem};

const APP_NAME: &str = "RecoverEase";

const STYLE: &str = r"
body { background-color: #eaf4ff; font-family: Arial, sans-serif; margin: 0; }
.layout { display: flex; }
.sidebar { width: 220px; padding: 20px; }
.main { flex: 1; background-color: white; margin: 20px; padding: 20px; border-radius: 10px;
        box-shadow: 0px 4px 6px rgba(0, 0, 0, 0.1); }
.navbar { background-color: black; padding: 10px; text-align: center; }
.navbar a { color: white; text-decoration: none; margin: 0 15px; font-weight: bold; }
.navbar a:hover { color: #00bfff; }
button { background-color: #007bff; color: white; border-radius: 5px; border: none; padding: 6px 12px; }
button:hover { background-color: #0056b3; }
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #007bff; color: white; }
.notice { padding: 10px; border-radius: 5px; margin-bottom: 15px; }
.success { background-color: #d4edda; }
.info { background-color: #d1ecf1; }
.warning { background-color: #fff3cd; }
.error { background-color: #f8d7da; }
";

/// Feedback shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn render(&self) -> String {
        let (class, msg) = match self {
            Self::Success(m) => ("success", m),
            Self::Info(m) => ("info", m),
            Self::Warning(m) => ("warning", m),
            Self::Error(m) => ("error", m),
        };
        format!(r#"<div class="notice {class}">{}</div>"#, text(msg))
    }
}

/// Full page: navbar, sidebar menu, notices, then `content` (already escaped markup).
#[must_use]
pub fn render(
    visitor: &VisitorSession,
    active: Page,
    notices: &[Notice],
    content: &str,
) -> Html<String> {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>{APP_NAME} - {}</title><style>{STYLE}</style></head><body>"#,
        text(active.label())
    );
    html.push_str(&navbar());
    html.push_str(r#"<div class="layout">"#);
    html.push_str(&sidebar(visitor, active));
    let _ = write!(
        html,
        r#"<div class="main"><h1>{APP_NAME}: Lost &amp; Found</h1><h2>{}</h2>"#,
        text(active.label())
    );
    for notice in notices {
        html.push_str(&notice.render());
    }
    html.push_str(content);
    html.push_str("</div></div></body></html>");

    Html(html)
}

fn navbar() -> String {
    let links = [
        (Page::Home, "HOME"),
        (Page::ReportLost, "REPORT LOST ITEM"),
        (Page::ReportFound, "REPORT FOUND ITEM"),
        (Page::Admin, "ADMIN PANEL"),
        (Page::Logout, "LOGOUT"),
    ];

    let mut html = String::from(r#"<div class="navbar">"#);
    for (page, label) in links {
        let _ = write!(html, r#"<a href="{}">{label}</a>"#, page.path());
    }
    html.push_str("</div>");
    html
}

fn sidebar(visitor: &VisitorSession, active: Page) -> String {
    let mut html = String::from(
        r#"<div class="sidebar"><form method="get" action="/menu"><label for="choice">Menu</label><br><select id="choice" name="choice">"#,
    );
    for page in Page::MENU {
        let selected = if page == active { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{selected}>{}</option>"#,
            attr(page.label()),
            text(page.label())
        );
    }
    html.push_str(r#"</select> <button type="submit">Go</button></form>"#);

    if visitor.logged_in {
        let role = if visitor.is_admin { " (admin)" } else { "" };
        let _ = write!(
            html,
            "<p>Signed in as <strong>{}</strong>{role}</p>",
            text(&visitor.username)
        );
    } else {
        html.push_str("<p>Not signed in</p>");
    }
    html.push_str("</div>");
    html
}

fn delete_button(action: &str) -> String {
    format!(
        r#"<form method="post" action="{}"><button type="submit">Delete</button></form>"#,
        attr(action)
    )
}

#[must_use]
pub fn lost_items_table(items: &[LostItem], with_delete: bool) -> String {
    if items.is_empty() {
        return "<p>No lost items reported.</p>".to_string();
    }

    let mut html = String::from(
        "<table><tr><th>ID</th><th>Owner</th><th>Item</th><th>Last seen</th><th>Status</th>",
    );
    if with_delete {
        html.push_str("<th></th>");
    }
    html.push_str("</tr>");

    for item in items {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            item.id,
            text(&item.owner_name),
            text(&item.item_desc),
            text(&item.last_seen_location),
            text(&item.status)
        );
        if with_delete {
            let _ = write!(
                html,
                "<td>{}</td>",
                delete_button(&format!("/admin/lost/{}/delete", item.id))
            );
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

#[must_use]
pub fn found_items_table(items: &[FoundItem], with_delete: bool) -> String {
    if items.is_empty() {
        return "<p>No found items reported.</p>".to_string();
    }

    let mut html = String::from(
        "<table><tr><th>ID</th><th>Finder</th><th>Item</th><th>Found at / contact</th>",
    );
    if with_delete {
        html.push_str("<th></th>");
    }
    html.push_str("</tr>");

    for item in items {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            item.id,
            text(&item.finder_name),
            text(&item.item_desc),
            text(&item.found_location)
        );
        if with_delete {
            let _ = write!(
                html,
                "<td>{}</td>",
                delete_button(&format!("/admin/found/{}/delete", item.id))
            );
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

fn input(label: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        r#"<p><label for="{name}">{}</label><br><input id="{name}" name="{name}" type="{kind}" value="{}"></p>"#,
        text(label),
        attr(value)
    )
}

fn form(action: &str, fields: &[String], submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">{}<button type="submit">{}</button></form>"#,
        fields.concat(),
        text(submit)
    )
}

#[must_use]
pub fn login_form(username: &str) -> String {
    form(
        Page::Login.path(),
        &[
            input("Username", "username", "text", username),
            input("Password", "password", "password", ""),
        ],
        "Login",
    )
}

#[must_use]
pub fn register_form(username: &str) -> String {
    form(
        Page::Register.path(),
        &[
            input("Username", "username", "text", username),
            input("Password", "password", "password", ""),
            input("Confirm Password", "confirm_password", "password", ""),
        ],
        "Register",
    )
}

#[must_use]
pub fn report_lost_form() -> String {
    form(
        Page::ReportLost.path(),
        &[
            input("Your Name", "owner_name", "text", ""),
            input("Item Description", "item_desc", "text", ""),
            input("Last Seen Location", "last_seen_location", "text", ""),
        ],
        "Report Lost Item",
    )
}

#[must_use]
pub fn report_found_form() -> String {
    form(
        Page::ReportFound.path(),
        &[
            input("Your Name", "finder_name", "text", ""),
            input("Item Description", "item_desc", "text", ""),
            input("Found Location / Contact", "found_location", "text", ""),
        ],
        "Report Found Item",
    )
}

/// Bare page for failures that happen before a visitor could be loaded.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>{APP_NAME} - {}</title><style>{STYLE}</style></head><body><div class="main"><h1>{}</h1><div class="notice error">{}</div><p><a href="/">Back to home</a></p></div></body></html>"#,
        status.as_u16(),
        text(status.canonical_reason().unwrap_or("Error")),
        text(message)
    )
}

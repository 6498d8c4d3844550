//! HTML rendering for view models

use std::fmt::Write;

use super::models::{ErrorView, UserFormView, UserListView, UserView};

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

pub(super) fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Users</a> | <a href=\"/create\">Create user</a></nav>\n\
         <h1>{title}</h1>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

fn search_form(query: Option<&str>) -> String {
    format!(
        "<form method=\"get\" action=\"/search\">\n\
         <input type=\"search\" name=\"name\" value=\"{}\" placeholder=\"Search by name\" required>\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
        escape_html(query.unwrap_or_default()),
    )
}

fn user_row(user: &UserView) -> String {
    format!(
        "<tr>\
         <td>{id}</td><td>{first}</td><td>{last}</td><td>{email}</td><td>{age}</td><td>{bio}</td>\
         <td><a href=\"/{id}/update\">Edit</a> \
         <form method=\"post\" action=\"/{id}/delete\" style=\"display:inline\" \
         onsubmit=\"return confirm('Delete this user?');\">\
         <button type=\"submit\">Delete</button></form></td>\
         </tr>\n",
        id = user.id,
        first = escape_html(&user.first_name),
        last = escape_html(&user.last_name),
        email = escape_html(&user.email),
        age = user.age.map(|a| a.to_string()).unwrap_or_default(),
        bio = escape_html(user.bio.as_deref().unwrap_or_default()),
    )
}

pub(super) fn user_list(view: &UserListView) -> String {
    let mut body = search_form(view.query.as_deref());

    if let Some(message) = &view.message {
        let _ = writeln!(body, "<p class=\"message\">{}</p>", escape_html(message));
    }

    if view.users.is_empty() {
        return body;
    }

    body.push_str(
        "<table>\n<thead><tr><th>ID</th><th>First name</th><th>Last name</th>\
         <th>Email</th><th>Age</th><th>Bio</th><th></th></tr></thead>\n<tbody>\n",
    );

    for user in &view.users {
        body.push_str(&user_row(user));
    }

    body.push_str("</tbody>\n</table>\n");
    body
}

fn input(label: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label>\n\
         <input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></p>\n",
        value = escape_html(value),
    )
}

pub(super) fn user_form(view: &UserFormView) -> String {
    let mut body = String::new();

    if !view.errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");

        for error in &view.errors {
            let _ = writeln!(body, "<li>{}</li>", escape_html(error));
        }

        body.push_str("</ul>\n");
    }

    let user = view.user.as_ref();
    let first_name = user.map(|u| u.first_name.as_str()).unwrap_or_default();
    let last_name = user.map(|u| u.last_name.as_str()).unwrap_or_default();
    let email = user.map(|u| u.email.as_str()).unwrap_or_default();
    let bio = user.and_then(|u| u.bio.as_deref()).unwrap_or_default();
    let age = user
        .and_then(|u| u.age)
        .map(|a| a.to_string())
        .unwrap_or_default();

    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"{}\">",
        escape_html(&view.action)
    );
    body.push_str(&input("First name", "first_name", "text", first_name));
    body.push_str(&input("Last name", "last_name", "text", last_name));
    body.push_str(&input("Email", "email", "email", email));
    body.push_str(&input("Age", "age", "number", &age));
    let _ = writeln!(
        body,
        "<p><label for=\"bio\">Bio</label>\n<textarea id=\"bio\" name=\"bio\">{}</textarea></p>",
        escape_html(bio)
    );
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");

    body
}

pub(super) fn error_page(view: &ErrorView) -> String {
    format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to users</a></p>\n",
        escape_html(&view.message)
    )
}

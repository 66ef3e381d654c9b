//! Header and sidebar state

use crate::models::Role;
use crate::router::Route;
use crate::state::session::Session;
use crate::views::markup::{link, Markup};

/// Navigation entries in sidebar order
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/users", "Users"),
    ("/courses", "Courses"),
    ("/enrollments", "My enrollments"),
];

/// Visibility of everything around the main content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub header_visible: bool,
    pub sidebar_visible: bool,
    pub full_width: bool,
    pub welcome: Option<String>,
    pub users_nav_visible: bool,
    pub enrollments_nav_visible: bool,
    pub active_link: String,
}

impl Chrome {
    pub fn for_session(session: &Session) -> Self {
        let user = session.current_user.as_ref().filter(|_| session.is_authenticated);
        let active_link = Route::parse(&session.current_route).path().to_string();

        match user {
            Some(user) => {
                let (users_nav_visible, enrollments_nav_visible) = match user.role {
                    Role::Admin => (true, false),
                    Role::Visitor => (false, true),
                };
                Self {
                    header_visible: true,
                    sidebar_visible: true,
                    full_width: false,
                    welcome: Some(format!("Welcome, {}", user.name)),
                    users_nav_visible,
                    enrollments_nav_visible,
                    active_link,
                }
            }
            None => Self {
                header_visible: false,
                sidebar_visible: false,
                full_width: true,
                welcome: None,
                users_nav_visible: false,
                enrollments_nav_visible: false,
                active_link,
            },
        }
    }

    fn nav_visible(&self, href: &str) -> bool {
        match href {
            "/users" => self.users_nav_visible,
            "/enrollments" => self.enrollments_nav_visible,
            _ => true,
        }
    }

    /// Targets of the navigation entries a user can actually see
    pub fn visible_links(&self) -> Vec<String> {
        if !self.sidebar_visible {
            return Vec::new();
        }
        NAV_ITEMS
            .iter()
            .filter(|(href, _)| self.nav_visible(href))
            .map(|(href, _)| href.to_string())
            .collect()
    }

    pub fn render_header(&self) -> Markup {
        let welcome = self.welcome.as_deref().unwrap_or_default();
        Markup::raw(format!(
            r#"<header id="header" class="navbar"{}><span id="userWelcome">{}</span><button type="button" class="btn btn-outline-light" data-action="logout">Log out</button></header>"#,
            hidden(!self.header_visible),
            Markup::text(welcome)
        ))
    }

    pub fn render_sidebar(&self) -> Markup {
        let mut items = Markup::new();
        for (href, label) in NAV_ITEMS {
            let id = match *href {
                "/users" => r#" id="usersNavItem""#,
                "/enrollments" => r#" id="enrollmentsNavItem""#,
                _ => "",
            };
            let class = if self.active_link == *href { "nav-link active" } else { "nav-link" };
            items.push_raw(&format!(r#"<li class="nav-item"{}{}>"#, id, hidden(!self.nav_visible(href))));
            items.push(link(href, label, class));
            items.push_raw("</li>");
        }

        Markup::raw(format!(
            r#"<nav id="sidebar"{}><ul class="nav flex-column">{}</ul></nav>"#,
            hidden(!self.sidebar_visible),
            items
        ))
    }
}

fn hidden(is_hidden: bool) -> &'static str {
    if is_hidden {
        r#" style="display: none""#
    } else {
        ""
    }
}

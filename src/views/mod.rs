//! View rendering
//!
//! Views produce markup and never touch a document directly. After every
//! event the application assembles a `Frame`, and `Frame::to_document`
//! lays it out over the fixed element ids the page shell expects.

pub mod chrome;
pub mod markup;
pub mod modals;
pub mod pages;

pub use chrome::Chrome;
pub use markup::{links_in, Markup};
pub use modals::{Modal, ModalKind};

use crate::services::notification::Alert;

/// Element ids of the page shell
pub mod ids {
    pub const HEADER: &str = "header";
    pub const SIDEBAR: &str = "sidebar";
    pub const MAIN_CONTENT: &str = "mainContent";
    pub const LOADING_SPINNER: &str = "loadingSpinner";
    pub const USER_WELCOME: &str = "userWelcome";
    pub const USERS_NAV_ITEM: &str = "usersNavItem";
    pub const ENROLLMENTS_NAV_ITEM: &str = "enrollmentsNavItem";
    pub const MODAL: &str = "modal";
    pub const MODAL_BODY: &str = "modalBody";
}

/// Main content produced for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub body: Markup,
}

impl View {
    pub fn new(title: &str, body: Markup) -> Self {
        Self {
            title: title.to_string(),
            body,
        }
    }
}

/// Everything visible after handling one event
#[derive(Debug, Clone)]
pub struct Frame {
    pub path: String,
    pub chrome: Chrome,
    pub view: View,
    pub modal: Option<Modal>,
    pub alerts: Vec<Alert>,
    pub loading: bool,
}

impl Frame {
    /// Client-side links reachable from the frame
    pub fn links(&self) -> Vec<String> {
        let mut links = self.chrome.visible_links();
        links.extend(links_in(self.view.body.as_str()));
        links
    }

    pub fn to_document(&self) -> String {
        let mut doc = String::new();
        doc.push_str(self.chrome.render_header().as_str());
        doc.push_str(self.chrome.render_sidebar().as_str());

        let main_class = if self.chrome.full_width { "main-content full-width" } else { "main-content" };
        doc.push_str(&format!(r#"<main id="{}" class="{}">"#, ids::MAIN_CONTENT, main_class));
        for alert in &self.alerts {
            doc.push_str(&format!(
                r#"<div class="alert {}" role="alert">{}</div>"#,
                alert.kind.css_class(),
                Markup::text(&alert.message)
            ));
        }
        doc.push_str(self.view.body.as_str());
        doc.push_str("</main>");

        doc.push_str(&format!(
            r#"<div id="{}" class="spinner"{}></div>"#,
            ids::LOADING_SPINNER,
            if self.loading { "" } else { r#" style="display: none""# }
        ));

        let (modal_title, modal_body, modal_style) = match &self.modal {
            Some(modal) => (Markup::text(&modal.title), modal.body.as_str(), ""),
            None => (Markup::new(), "", r#" style="display: none""#),
        };
        doc.push_str(&format!(
            r#"<div id="{}" class="modal"{}><h5 class="modal-title">{}</h5><div id="{}">{}</div></div>"#,
            ids::MODAL,
            modal_style,
            modal_title,
            ids::MODAL_BODY,
            modal_body
        ));
        doc
    }
}

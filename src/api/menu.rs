use axum::{
    extract::Query,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use std::str::FromStr;

use super::WebError;

/// The seven menu entries. Every page is reachable from every other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    ReportLost,
    ReportFound,
    Admin,
    Logout,
}

impl Page {
    pub const MENU: [Self; 7] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::ReportLost,
        Self::ReportFound,
        Self::Admin,
        Self::Logout,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::ReportLost => "Report Lost",
            Self::ReportFound => "Report Found",
            Self::Admin => "Admin",
            Self::Logout => "Logout",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ReportLost => "/report-lost",
            Self::ReportFound => "/report-found",
            Self::Admin => "/admin",
            Self::Logout => "/logout",
        }
    }
}

impl FromStr for Page {
    type Err = WebError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::MENU
            .into_iter()
            .find(|page| page.label() == s)
            .ok_or_else(|| WebError::not_found("Menu entry", s))
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub choice: String,
}

/// GET /menu?choice=<label>
/// Sidebar select box target; sends the visitor to the chosen page.
pub async fn select(Query(query): Query<MenuQuery>) -> Result<impl IntoResponse, WebError> {
    let page: Page = query.choice.parse()?;
    Ok(Redirect::to(page.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for page in Page::MENU {
            assert_eq!(page.label().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("report lost".parse::<Page>().is_err());
        assert!("Settings".parse::<Page>().is_err());
    }

    #[test]
    fn paths_are_distinct() {
        let mut paths: Vec<_> = Page::MENU.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::MENU.len());
    }
}

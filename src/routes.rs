//! Route Table
//!
//! The three pages and the `/` redirect, as plain data the router and the
//! navigation bar both read from.

/// A page that can be rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Catalog,
    Cart,
}

/// Outcome of looking up a path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(&'static str),
    NotFound,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Catalog, Page::Cart];

    /// Single path segment, without the leading slash
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Catalog => "catalogo",
            Page::Cart => "carrito",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/home",
            Page::Catalog => "/catalogo",
            Page::Cart => "/carrito",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Page::Home => "Inicio",
            Page::Catalog => "Catálogo",
            Page::Cart => "Carrito",
        }
    }
}

/// Segment of the root path, which only redirects
pub const ROOT_SEGMENT: &str = "";

/// Where `/` sends the user
pub const DEFAULT_PATH: &str = Page::Home.path();

/// Look up a path. Only exact matches count; a trailing slash is tolerated.
pub fn resolve(path: &str) -> Resolution {
    let trimmed = path.trim_end_matches('/');
    if trimmed.trim_start_matches('/') == ROOT_SEGMENT {
        return Resolution::Redirect(DEFAULT_PATH);
    }
    Page::ALL
        .into_iter()
        .find(|p| p.path() == trimmed)
        .map_or(Resolution::NotFound, Resolution::Render)
}

/// Resolve a path, following redirects, to the page it ends up rendering
pub fn page_for(path: &str) -> Option<Page> {
    let mut current = path;
    // Bounded so a redirect cycle cannot spin
    for _ in 0..4 {
        match resolve(current) {
            Resolution::Render(page) => return Some(page),
            Resolution::Redirect(target) => current = target,
            Resolution::NotFound => return None,
        }
    }
    None
}

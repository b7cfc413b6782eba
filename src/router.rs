//! Client-side navigation between the app's pages.

/// Where `/` lands.
pub const HOME_PATH: &str = "/home";
pub const UPLOAD_PATH: &str = "/upload";
pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Upload,
    /// Carries the normalized path that matched nothing
    NotFound(String),
}

impl Route {
    /// Match a path against the known pages. `/` redirects to home.
    pub fn resolve(path: &str) -> Self {
        let path = normalize(path);
        match path.to_lowercase().as_str() {
            "/" | HOME_PATH => Route::Home,
            UPLOAD_PATH => Route::Upload,
            _ => Route::NotFound(path),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => HOME_PATH,
            Route::Upload => UPLOAD_PATH,
            Route::NotFound(path) => path.as_str(),
        }
    }
}

/// Strip query, fragment and trailing slash; ensure a leading slash.
fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_end_matches('/');
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[derive(Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: &str) -> Self {
        Self {
            current: Route::resolve(start),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn navigate(&mut self, path: &str) {
        let target = Route::resolve(path);
        if target == self.current {
            return;
        }
        log::debug!("Navigating {} -> {}", self.current.path(), target.path());
        let previous = std::mem::replace(&mut self.current, target);
        self.history.push(previous);
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.history.pop() {
            log::debug!("Back to {}", previous.path());
            self.current = previous;
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

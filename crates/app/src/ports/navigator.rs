//! Navigator port: moving between the two pages.

/// The pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Actions,
}

impl Page {
    /// Client-side route of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Actions => "/actions",
        }
    }
}

/// Replaces the current page; the previous page is not kept in history.
pub trait Navigator {
    fn replace(&self, page: Page);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn replace(&self, page: Page) {
        (**self).replace(page);
    }
}

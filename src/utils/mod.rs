pub mod router;

use web_sys::{Document, History, Window};

#[inline]
pub fn window() -> Window {
    web_sys::window().expect("no window found")
}

/// Returns the root [`Document`].
///
/// # Panics
///
/// Panics if there is no [`Document`] in root window or no root window is present. This should
/// never be the case in a web environment.
pub fn document() -> Document {
    window().document().expect("no document present")
}

pub fn history() -> History {
    window().history().expect("no history")
}

/// Returns the current location of the window as `pathname + search + hash`.
pub fn location() -> String {
    let location = window().location();

    let mut href = location.pathname().unwrap_or_else(|_| String::from("/"));
    href.push_str(&location.search().unwrap_or_default());
    href.push_str(&location.hash().unwrap_or_default());

    href
}

// MangaMark state managers
// Managers hold mutable application state: the bookmark map and the user options.

pub mod bookmark_store;
pub mod options_manager;

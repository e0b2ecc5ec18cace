pub mod notify;
pub mod page;
pub mod render;

pub use notify::{Notifier, StderrNotifier};
pub use page::{Container, Element, Page, TextInput};

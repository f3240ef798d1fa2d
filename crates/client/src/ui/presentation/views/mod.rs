//! Top-level screens, one per `ViewKind`.

mod editor;
mod home;
mod login;
mod wiki;

pub use editor::EditorView;
pub use home::HomeView;
pub use login::LoginView;
pub use wiki::WikiView;

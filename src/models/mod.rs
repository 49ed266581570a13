pub mod loading;
pub mod session;
pub mod user;

// Re-export the model types so code outside can do
// "use crate::models::{Loading, Session, User};"
pub use loading::Loading;
pub use session::Session;
pub use user::User;

pub mod admin;
pub mod home;
pub mod not_found;
pub mod sections;

pub use admin::AdminPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use sections::{ExplorePage, SettingsPage, UploadPage};

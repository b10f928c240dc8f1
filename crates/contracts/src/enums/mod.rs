pub mod app_route;
pub mod app_tab;

pub use app_route::{paths, AppRoute};
pub use app_tab::{codes, AppTab};

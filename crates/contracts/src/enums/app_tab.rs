use serde::{Deserialize, Serialize};
use std::fmt;

use super::app_route::AppRoute;

/// Идентификаторы табов внутри страницы
pub mod codes {
    pub const UPLOAD: &str = "upload";
    pub const EXPLORE: &str = "explore";
    pub const SETTINGS: &str = "settings";
}

/// Табы главной страницы. Закрытое множество: текущий таб всегда одно из этих значений.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTab {
    #[default]
    Upload,
    Explore,
    Settings,
}

impl AppTab {
    /// Получить код таба
    pub fn code(&self) -> &'static str {
        match self {
            AppTab::Upload => codes::UPLOAD,
            AppTab::Explore => codes::EXPLORE,
            AppTab::Settings => codes::SETTINGS,
        }
    }

    /// Получить человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Upload => "Upload",
            AppTab::Explore => "Explore",
            AppTab::Settings => "Settings",
        }
    }

    /// Раздел с тем же содержимым, открытый на отдельной странице
    pub fn route(&self) -> AppRoute {
        match self {
            AppTab::Upload => AppRoute::Upload,
            AppTab::Explore => AppRoute::Explore,
            AppTab::Settings => AppRoute::Settings,
        }
    }

    /// Получить все табы
    pub fn all() -> Vec<AppTab> {
        vec![AppTab::Upload, AppTab::Explore, AppTab::Settings]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            codes::UPLOAD => Some(AppTab::Upload),
            codes::EXPLORE => Some(AppTab::Explore),
            codes::SETTINGS => Some(AppTab::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for AppTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_short_identifiers() {
        for tab in AppTab::all() {
            let code = tab.code();
            assert!(!code.is_empty());
            assert_eq!(code, code.to_lowercase());
            assert!(!code.contains('/'), "{} contains a path separator", code);
        }
    }

    #[test]
    fn test_legal_codes() {
        let codes: Vec<&str> = AppTab::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["upload", "explore", "settings"]);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(AppTab::from_code("upload"), Some(AppTab::Upload));
        assert_eq!(AppTab::from_code("explore"), Some(AppTab::Explore));
        assert_eq!(AppTab::from_code("settings"), Some(AppTab::Settings));
        assert_eq!(AppTab::from_code("Upload"), None);
        assert_eq!(AppTab::from_code("admin"), None);
        assert_eq!(AppTab::from_code("/upload"), None);
        assert_eq!(AppTab::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&AppTab::Explore).unwrap(), "\"explore\"");
        let tab: AppTab = serde_json::from_str("\"settings\"").unwrap();
        assert_eq!(tab, AppTab::Settings);
        assert!(serde_json::from_str::<AppTab>("\"home\"").is_err());
    }

    #[test]
    fn test_tab_routes_share_names() {
        for tab in AppTab::all() {
            assert_eq!(tab.route().segment(), tab.code());
        }
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(AppTab::default(), AppTab::Upload);
        assert_eq!(AppTab::Settings.to_string(), "settings");
    }
}

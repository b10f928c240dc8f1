use std::fmt;

/// Пути верхнеуровневой навигации - единственный источник правды для роутера.
pub mod paths {
    pub const HOME: &str = "/";
    pub const UPLOAD: &str = "/upload";
    pub const EXPLORE: &str = "/explore";
    pub const SETTINGS: &str = "/settings";
    pub const ADMIN: &str = "/admin";
}

/// Разделы приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Upload,
    Explore,
    Settings,
    Admin,
}

impl AppRoute {
    /// Получить путь раздела
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => paths::HOME,
            AppRoute::Upload => paths::UPLOAD,
            AppRoute::Explore => paths::EXPLORE,
            AppRoute::Settings => paths::SETTINGS,
            AppRoute::Admin => paths::ADMIN,
        }
    }

    /// Путь без ведущего `/` (то, с чем сравнивает роутер)
    pub fn segment(&self) -> &'static str {
        let path = self.path();
        path.strip_prefix('/').unwrap_or(path)
    }

    /// Заголовок для навигации
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Upload => "Upload",
            AppRoute::Explore => "Explore",
            AppRoute::Settings => "Settings",
            AppRoute::Admin => "Admin",
        }
    }

    /// Раздел доступен только пользователю с разрешением
    pub fn requires_permission(&self) -> bool {
        matches!(self, AppRoute::Admin)
    }

    /// Получить все разделы в порядке отображения
    pub fn all() -> Vec<AppRoute> {
        vec![
            AppRoute::Home,
            AppRoute::Upload,
            AppRoute::Explore,
            AppRoute::Settings,
            AppRoute::Admin,
        ]
    }

    /// Парсинг из пути
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            paths::HOME => Some(AppRoute::Home),
            paths::UPLOAD => Some(AppRoute::Upload),
            paths::EXPLORE => Some(AppRoute::Explore),
            paths::SETTINGS => Some(AppRoute::Settings),
            paths::ADMIN => Some(AppRoute::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_start_with_slash() {
        for route in AppRoute::all() {
            let path = route.path();
            assert!(!path.is_empty(), "{:?} has an empty path", route);
            assert!(path.starts_with('/'), "{:?} path {} lacks leading /", route, path);
        }
    }

    #[test]
    fn test_literal_paths() {
        assert_eq!(AppRoute::Home.path(), "/");
        assert_eq!(AppRoute::Upload.path(), "/upload");
        assert_eq!(AppRoute::Explore.path(), "/explore");
        assert_eq!(AppRoute::Settings.path(), "/settings");
        assert_eq!(AppRoute::Admin.path(), "/admin");
    }

    #[test]
    fn test_paths_are_unique() {
        let unique: HashSet<&str> = AppRoute::all().iter().map(|r| r.path()).collect();
        assert_eq!(unique.len(), AppRoute::all().len());
    }

    #[test]
    fn test_from_path() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/unknown"), None);
        assert_eq!(AppRoute::from_path("upload"), None);
        assert_eq!(AppRoute::from_path(""), None);
    }

    #[test]
    fn test_segment() {
        assert_eq!(AppRoute::Home.segment(), "");
        assert_eq!(AppRoute::Upload.segment(), "upload");
        assert_eq!(AppRoute::Admin.segment(), "admin");
    }

    #[test]
    fn test_only_admin_requires_permission() {
        let guarded: Vec<AppRoute> = AppRoute::all()
            .into_iter()
            .filter(|r| r.requires_permission())
            .collect();
        assert_eq!(guarded, vec![AppRoute::Admin]);
    }
}

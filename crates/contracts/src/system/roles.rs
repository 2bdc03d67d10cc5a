use serde::{Deserialize, Serialize};

/// Who is looking at the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Admin,
    #[default]
    Employee,
}

impl ViewerRole {
    pub fn code(&self) -> &'static str {
        match self {
            ViewerRole::Admin => "admin",
            ViewerRole::Employee => "employee",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewerRole::Admin => "Administrator",
            ViewerRole::Employee => "Employee",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(ViewerRole::Admin),
            "employee" => Some(ViewerRole::Employee),
            _ => None,
        }
    }

    /// Sidebar entries available to the role, first one is the landing page
    pub fn nav_items(&self) -> Vec<NavItem> {
        match self {
            ViewerRole::Admin => vec![NavItem::TeamAttendance],
            ViewerRole::Employee => vec![NavItem::Dashboard, NavItem::MyAttendance],
        }
    }

    pub fn landing_page(&self) -> NavItem {
        match self {
            ViewerRole::Admin => NavItem::TeamAttendance,
            ViewerRole::Employee => NavItem::Dashboard,
        }
    }

    pub fn can_open(&self, item: NavItem) -> bool {
        self.nav_items().contains(&item)
    }
}

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavItem {
    Dashboard,
    MyAttendance,
    TeamAttendance,
}

impl NavItem {
    pub fn code(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "employee-dashboard",
            NavItem::MyAttendance => "user-attendance",
            NavItem::TeamAttendance => "admin-attendance",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [NavItem::Dashboard, NavItem::MyAttendance, NavItem::TeamAttendance]
            .into_iter()
            .find(|item| item.code() == code)
    }

    pub fn title(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::MyAttendance => "My Attendance",
            NavItem::TeamAttendance => "Attendance",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "dashboard",
            NavItem::MyAttendance | NavItem::TeamAttendance => "calendar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes() {
        assert_eq!(ViewerRole::from_code("admin"), Some(ViewerRole::Admin));
        assert_eq!(ViewerRole::from_code("Admin"), None);
        assert_eq!(ViewerRole::default(), ViewerRole::Employee);
    }

    #[test]
    fn test_role_gating() {
        assert!(ViewerRole::Admin.can_open(NavItem::TeamAttendance));
        assert!(!ViewerRole::Admin.can_open(NavItem::Dashboard));
        assert!(ViewerRole::Employee.can_open(NavItem::MyAttendance));
        assert!(!ViewerRole::Employee.can_open(NavItem::TeamAttendance));
    }

    #[test]
    fn test_landing_page_is_first_nav_item() {
        for role in [ViewerRole::Admin, ViewerRole::Employee] {
            assert_eq!(role.nav_items()[0], role.landing_page());
        }
    }

    #[test]
    fn test_nav_item_codes() {
        assert_eq!(NavItem::from_code("user-attendance"), Some(NavItem::MyAttendance));
        assert_eq!(NavItem::from_code("admin-attendance"), Some(NavItem::TeamAttendance));
        assert_eq!(NavItem::from_code("settings"), None);
    }
}

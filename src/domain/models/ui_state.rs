use serde::{Deserialize, Serialize};

use crate::domain::models::menu::MenuTree;
use crate::shared::logging::log_device_change;

/// Viewport width (px) below which the shell behaves as mobile
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn from_viewport_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Desktop => "desktop",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub opened: bool,
}

/// How a sidebar toggle should change the flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarToggle {
    Set(bool),
    Flip,
}

/// Shared UI flags read by the router guard and the layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUiState {
    pub device: DeviceClass,
    pub sidebar: SidebarState,
}

impl AppUiState {
    pub fn new(device: DeviceClass, opened: bool) -> Self {
        Self {
            device,
            sidebar: SidebarState { opened },
        }
    }

    pub fn toggle_sidebar(&mut self, toggle: SidebarToggle) {
        self.sidebar.opened = match toggle {
            SidebarToggle::Set(opened) => opened,
            SidebarToggle::Flip => !self.sidebar.opened,
        };
    }

    pub fn toggle_device(&mut self, device: DeviceClass) {
        self.device = device;
    }

    /// Reclassify the device from the viewport width.
    ///
    /// Only a class change touches the sidebar: mobile closes it, desktop opens it.
    pub fn apply_viewport(&mut self, width: f64, breakpoint: f64) {
        let device = DeviceClass::from_viewport_width(width, breakpoint);
        if device == self.device {
            return;
        }

        log_device_change(device.as_str(), width);
        self.toggle_device(device);
        self.toggle_sidebar(SidebarToggle::Set(!device.is_mobile()));
    }
}

/// State object owned by the application shell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    pub menu: MenuTree,
    pub ui: AppUiState,
}

impl ShellState {
    pub fn new(menu: MenuTree) -> Self {
        Self {
            menu,
            ui: AppUiState::new(DeviceClass::Desktop, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_from_viewport_width() {
        assert_eq!(DeviceClass::from_viewport_width(375.0, 768.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(768.0, 768.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_viewport_width(1440.0, 768.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = AppUiState::new(DeviceClass::Desktop, false);

        state.toggle_sidebar(SidebarToggle::Flip);
        assert!(state.sidebar.opened);

        state.toggle_sidebar(SidebarToggle::Set(true));
        assert!(state.sidebar.opened);

        state.toggle_sidebar(SidebarToggle::Set(false));
        assert!(!state.sidebar.opened);
    }

    #[test]
    fn test_apply_viewport_switches_class_and_sidebar() {
        let mut state = AppUiState::new(DeviceClass::Desktop, true);

        state.apply_viewport(400.0, DEFAULT_MOBILE_BREAKPOINT_PX);
        assert_eq!(state.device, DeviceClass::Mobile);
        assert!(!state.sidebar.opened);

        state.apply_viewport(1200.0, DEFAULT_MOBILE_BREAKPOINT_PX);
        assert_eq!(state.device, DeviceClass::Desktop);
        assert!(state.sidebar.opened);
    }

    #[test]
    fn test_apply_viewport_same_class_keeps_sidebar() {
        let mut state = AppUiState::new(DeviceClass::Mobile, true);

        state.apply_viewport(320.0, DEFAULT_MOBILE_BREAKPOINT_PX);

        assert_eq!(state.device, DeviceClass::Mobile);
        assert!(state.sidebar.opened);
    }
}

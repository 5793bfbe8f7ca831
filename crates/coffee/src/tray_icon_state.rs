/// Tray icon states for the sleep-prevention toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Caffeinate off; the system may idle-sleep normally.
    Inactive,
    /// Caffeinate running; display idle sleep is blocked.
    Active,
}

impl TrayIconState {
    /// Map the controller's active flag onto an icon variant.
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

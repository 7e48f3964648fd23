//! Linux-specific helpers: interface state from sysfs.

/// Read up/down status from `/sys/class/net/<interface>/operstate`.
///
/// `"up"` and `"unknown"` (loopback reports unknown) count as up. On
/// non-Linux targets, or when sysfs is unreadable, the interface is assumed
/// up rather than hiding it from the widget.
pub(super) fn interface_is_up(interface_name: &str) -> bool {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/operstate", interface_name);
        if let Ok(content) = std::fs::read_to_string(&path) {
            return matches!(content.trim(), "up" | "unknown");
        }
        true
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = interface_name;
        true
    }
}

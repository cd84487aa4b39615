use phf::phf_map;

use crate::configs::DeviceKind;

/// Windows marketing version to NT kernel version.
pub static WINDOWS_NT_VERSIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "7" => "6.1",
    "8" => "6.2",
    "8.1" => "6.3",
    "10" => "10.0",
    "11" => "10.0",
};

/// Fallback NT version for unknown Windows releases.
pub const DEFAULT_NT_VERSION: &str = "10.0";

/// The NT version for a Windows release, `10.0` when unknown.
pub fn windows_nt_version(version: &str) -> &'static str {
    WINDOWS_NT_VERSIONS
        .get(version)
        .copied()
        .unwrap_or(DEFAULT_NT_VERSION)
}

#[inline]
fn underscored(version: &str) -> String {
    version.replace('.', "_")
}

/// Build the parenthesised OS fragment of the user-agent.
pub fn format_os_fragment(device: DeviceKind, os_version: &str) -> String {
    match device {
        DeviceKind::DesktopMac => {
            format!("Macintosh; Intel Mac OS X {}", underscored(os_version))
        }
        DeviceKind::DesktopWindows => {
            format!("Windows NT {}; Win64; x64", windows_nt_version(os_version))
        }
        DeviceKind::Phone => format!(
            "iPhone; CPU iPhone OS {} like Mac OS X",
            underscored(os_version)
        ),
        DeviceKind::Tablet => format!("iPad; CPU OS {} like Mac OS X", underscored(os_version)),
    }
}

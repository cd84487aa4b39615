use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// The browser family to generate a user-agent for.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    /// Chrome.
    Chrome,
    /// Safari.
    Safari,
    /// Firefox.
    Firefox,
}

impl BrowserKind {
    /// All browser kinds in selection order.
    pub const ALL: [BrowserKind; 3] = [BrowserKind::Chrome, BrowserKind::Safari, BrowserKind::Firefox];

    /// The version table file for the browser.
    pub fn table_name(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome.json",
            BrowserKind::Safari => "safari.json",
            BrowserKind::Firefox => "firefox.json",
        }
    }

    /// Lowercase name of the browser.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Safari => "safari",
            BrowserKind::Firefox => "firefox",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(BrowserKind::Chrome),
            "safari" => Ok(BrowserKind::Safari),
            "firefox" => Ok(BrowserKind::Firefox),
            other => Err(Error::invalid_input(format!("unknown browser: {other}"))),
        }
    }
}

/// The device to generate a user-agent for.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, serde::Serialize, serde::Deserialize)]
pub enum DeviceKind {
    /// A Mac desktop.
    #[serde(rename = "desktop-mac", alias = "mac")]
    DesktopMac,
    /// A Windows desktop.
    #[serde(rename = "desktop-windows", alias = "windows")]
    DesktopWindows,
    /// An iPhone.
    #[serde(rename = "phone", alias = "iphone")]
    Phone,
    /// An iPad.
    #[serde(rename = "tablet", alias = "ipad")]
    Tablet,
}

impl DeviceKind {
    /// All device kinds in selection order.
    pub const ALL: [DeviceKind; 4] = [
        DeviceKind::DesktopMac,
        DeviceKind::DesktopWindows,
        DeviceKind::Phone,
        DeviceKind::Tablet,
    ];

    /// The operating system running on the device.
    pub fn os(&self) -> OsKind {
        match self {
            DeviceKind::DesktopMac => OsKind::MacOs,
            DeviceKind::DesktopWindows => OsKind::Windows,
            DeviceKind::Phone => OsKind::Ios,
            DeviceKind::Tablet => OsKind::IpadOs,
        }
    }

    /// The coarse form factor of the device.
    pub fn form_factor(&self) -> FormFactor {
        match self {
            DeviceKind::DesktopMac | DeviceKind::DesktopWindows => FormFactor::Desktop,
            DeviceKind::Phone => FormFactor::Mobile,
            DeviceKind::Tablet => FormFactor::Tablet,
        }
    }

    /// The OS version table file for the device.
    pub fn table_name(&self) -> &'static str {
        self.os().table_name()
    }

    /// Canonical name of the device.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::DesktopMac => "desktop-mac",
            DeviceKind::DesktopWindows => "desktop-windows",
            DeviceKind::Phone => "phone",
            DeviceKind::Tablet => "tablet",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop-mac" | "mac" => Ok(DeviceKind::DesktopMac),
            "desktop-windows" | "windows" => Ok(DeviceKind::DesktopWindows),
            "phone" | "iphone" => Ok(DeviceKind::Phone),
            "tablet" | "ipad" => Ok(DeviceKind::Tablet),
            other => Err(Error::invalid_input(format!("unknown device: {other}"))),
        }
    }
}

/// The operating system reported in metadata.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, serde::Serialize, serde::Deserialize)]
pub enum OsKind {
    /// macOS.
    #[serde(rename = "macos")]
    MacOs,
    /// Windows.
    #[serde(rename = "windows")]
    Windows,
    /// iOS.
    #[serde(rename = "ios")]
    Ios,
    /// iPadOS.
    #[serde(rename = "ipados")]
    IpadOs,
}

impl OsKind {
    /// The version table file for the operating system.
    pub fn table_name(&self) -> &'static str {
        match self {
            OsKind::MacOs => "macos.json",
            OsKind::Windows => "windows.json",
            OsKind::Ios => "ios.json",
            OsKind::IpadOs => "ipad.json",
        }
    }

    /// Lowercase name of the operating system.
    pub fn as_str(&self) -> &'static str {
        match self {
            OsKind::MacOs => "macos",
            OsKind::Windows => "windows",
            OsKind::Ios => "ios",
            OsKind::IpadOs => "ipados",
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse device category.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    /// Desktop or laptop.
    Desktop,
    /// Phone.
    Mobile,
    /// Tablet.
    Tablet,
}

/// Options for a generation call. Unset fields are picked at random.
#[derive(Default, Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// The browser to emulate.
    #[serde(default)]
    pub browser: Option<BrowserKind>,
    /// The device to emulate.
    #[serde(default)]
    pub device: Option<DeviceKind>,
    /// How many user-agents to produce, defaults to one.
    #[serde(default)]
    pub count: Option<usize>,
    /// Attach structured metadata to each user-agent.
    #[serde(default)]
    pub include_metadata: bool,
}

impl GenerationRequest {
    /// A request with every field left to the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the browser.
    pub fn with_browser(mut self, browser: BrowserKind) -> Self {
        self.browser = Some(browser);
        self
    }

    /// Set the device.
    pub fn with_device(mut self, device: DeviceKind) -> Self {
        self.device = Some(device);
        self
    }

    /// Set the number of user-agents.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    /// The effective count.
    pub fn count(&self) -> usize {
        self.count.unwrap_or(1)
    }
}

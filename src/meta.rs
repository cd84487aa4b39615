use crate::configs::{BrowserKind, FormFactor, OsKind};

/// Browser name and version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BrowserMeta {
    /// The browser.
    pub name: BrowserKind,
    /// e.g. `114.0.5735.133`
    pub version: String,
}

/// Operating system name and version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OsMeta {
    /// The operating system.
    pub name: OsKind,
    /// e.g. `12.6`
    pub version: String,
}

/// Structured description of a generated user-agent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgentMeta {
    /// Browser information.
    pub browser: BrowserMeta,
    /// Operating system information.
    pub os: OsMeta,
    /// Coarse device category.
    pub form_factor: FormFactor,
}

/// Inputs of [`build_meta`].
#[derive(Debug, Clone, Copy)]
pub struct MetaParams<'a> {
    pub browser: BrowserKind,
    pub browser_version: &'a str,
    pub os: OsKind,
    pub os_version: &'a str,
    pub form_factor: FormFactor,
}

pub fn build_meta(params: MetaParams<'_>) -> UserAgentMeta {
    UserAgentMeta {
        browser: BrowserMeta {
            name: params.browser,
            version: params.browser_version.to_string(),
        },
        os: OsMeta {
            name: params.os,
            version: params.os_version.to_string(),
        },
        form_factor: params.form_factor,
    }
}

use crate::configs::BrowserKind;
use crate::errors::Result;
use crate::random::RandomSource;
use crate::resolver::resolve_version_rng;
use crate::versions::{VersionRole, VersionTable};

/// Every generated user-agent starts with this token.
pub const MOZILLA_PREFIX: &str = "Mozilla/5.0";

/// The sampled versions a browser template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserVersions {
    /// Chrome version, AppleWebKit version and trailing Safari label.
    Chrome {
        /// e.g. `138.0.7204.184`
        version: String,
        /// e.g. `537.36`
        webkit: String,
        /// e.g. `537.36`
        safari: String,
    },
    /// Safari version and AppleWebKit version.
    Safari {
        /// e.g. `17.4.1`
        version: String,
        /// e.g. `605.1.15`
        webkit: String,
    },
    /// Firefox version.
    Firefox {
        /// e.g. `128.0`
        version: String,
    },
}

impl BrowserVersions {
    /// The browser these versions belong to.
    pub fn browser(&self) -> BrowserKind {
        match self {
            BrowserVersions::Chrome { .. } => BrowserKind::Chrome,
            BrowserVersions::Safari { .. } => BrowserKind::Safari,
            BrowserVersions::Firefox { .. } => BrowserKind::Firefox,
        }
    }

    /// The primary browser version.
    pub fn primary(&self) -> &str {
        match self {
            BrowserVersions::Chrome { version, .. }
            | BrowserVersions::Safari { version, .. }
            | BrowserVersions::Firefox { version } => version,
        }
    }

    /// Draw the versions a browser needs from its table, primary first.
    pub fn resolve<R: RandomSource + ?Sized>(
        browser: BrowserKind,
        table: &VersionTable,
        rng: &mut R,
    ) -> Result<Self> {
        let version = resolve_version_rng(table.require(VersionRole::Primary)?, rng)?;

        Ok(match browser {
            BrowserKind::Chrome => {
                let webkit = resolve_version_rng(table.require(VersionRole::Webkit)?, rng)?;
                let safari = resolve_version_rng(table.require(VersionRole::Safari)?, rng)?;
                BrowserVersions::Chrome {
                    version,
                    webkit,
                    safari,
                }
            }
            BrowserKind::Safari => {
                let webkit = resolve_version_rng(table.require(VersionRole::Webkit)?, rng)?;
                BrowserVersions::Safari { version, webkit }
            }
            BrowserKind::Firefox => BrowserVersions::Firefox { version },
        })
    }
}

/// Fill the browser template around an OS fragment.
pub fn compose_ua(os_fragment: &str, versions: &BrowserVersions) -> String {
    match versions {
        BrowserVersions::Chrome {
            version,
            webkit,
            safari,
        } => format!(
            "{MOZILLA_PREFIX} ({os_fragment}) AppleWebKit/{webkit} (KHTML, like Gecko) Chrome/{version} Safari/{safari}"
        ),
        // The webkit build doubles as the trailing Safari tag.
        BrowserVersions::Safari { version, webkit } => format!(
            "{MOZILLA_PREFIX} ({os_fragment}) AppleWebKit/{webkit} (KHTML, like Gecko) Version/{version} Safari/{webkit}"
        ),
        BrowserVersions::Firefox { version } => format!(
            "{MOZILLA_PREFIX} ({os_fragment}; rv:{version}) Gecko/20100101 Firefox/{version}"
        ),
    }
}

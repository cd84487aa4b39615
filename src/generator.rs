use crate::configs::{BrowserKind, DeviceKind, GenerationRequest};
use crate::errors::Result;
use crate::meta::{build_meta, MetaParams, UserAgentMeta};
use crate::random::{PooledRandom, RandomSource};
use crate::resolver::resolve_version_rng;
use crate::sampler::pick_uniform;
use crate::spoof_os::format_os_fragment;
use crate::spoof_user_agent::{compose_ua, BrowserVersions};
use crate::tables::{TableCache, TableSource};
use crate::versions::VersionRole;

#[cfg(feature = "embedded-data")]
use crate::tables::EmbeddedTables;

/// One generated user-agent, with or without metadata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum UserAgentRecord {
    /// The bare user-agent string.
    Plain(String),
    /// The user-agent and its structured metadata.
    WithMeta {
        /// The user-agent string.
        ua: String,
        /// What was sampled to build it.
        metadata: UserAgentMeta,
    },
}

impl UserAgentRecord {
    /// The user-agent string.
    pub fn ua(&self) -> &str {
        match self {
            UserAgentRecord::Plain(ua) | UserAgentRecord::WithMeta { ua, .. } => ua,
        }
    }

    /// The metadata when it was requested.
    pub fn metadata(&self) -> Option<&UserAgentMeta> {
        match self {
            UserAgentRecord::Plain(_) => None,
            UserAgentRecord::WithMeta { metadata, .. } => Some(metadata),
        }
    }
}

/// The result of a generation call: a bare record for `count == 1`, a list otherwise.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Generated {
    /// Exactly one record was requested.
    One(UserAgentRecord),
    /// Zero or several records, in generation order.
    Many(Vec<UserAgentRecord>),
}

impl Generated {
    /// Flatten into a list.
    pub fn into_vec(self) -> Vec<UserAgentRecord> {
        match self {
            Generated::One(record) => vec![record],
            Generated::Many(records) => records,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        match self {
            Generated::One(_) => 1,
            Generated::Many(records) => records.len(),
        }
    }

    /// No record was generated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Samples version tables and composes user-agents.
///
/// Owns the table cache and the random source, so repeated calls reuse parsed tables.
#[derive(Debug)]
pub struct UserAgentGenerator<S, R = PooledRandom> {
    cache: TableCache<S>,
    random: R,
}

#[cfg(feature = "embedded-data")]
impl Default for UserAgentGenerator<EmbeddedTables, PooledRandom> {
    fn default() -> Self {
        Self::new(EmbeddedTables, PooledRandom::new())
    }
}

impl<S: TableSource, R: RandomSource> UserAgentGenerator<S, R> {
    /// A generator over `source` drawing from `random`.
    pub fn new(source: S, random: R) -> Self {
        Self {
            cache: TableCache::new(source),
            random,
        }
    }

    /// Generate according to `request`. Any failure aborts the whole batch.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Generated> {
        let count = request.count();

        if count == 0 {
            return Ok(Generated::Many(Vec::new()));
        }

        let browser = match request.browser {
            Some(browser) => browser,
            None => *pick_uniform(&BrowserKind::ALL, self.random.next_f64())?,
        };
        let device = match request.device {
            Some(device) => device,
            None => *pick_uniform(&DeviceKind::ALL, self.random.next_f64())?,
        };

        let mut records = Vec::with_capacity(count);

        for _ in 0..count {
            records.push(self.generate_record(browser, device, request.include_metadata)?);
        }

        if count == 1 {
            if let Some(record) = records.pop() {
                return Ok(Generated::One(record));
            }
        }

        Ok(Generated::Many(records))
    }

    /// Generate a single record for a fixed browser and device.
    pub fn generate_record(
        &mut self,
        browser: BrowserKind,
        device: DeviceKind,
        include_metadata: bool,
    ) -> Result<UserAgentRecord> {
        let os_table = self.cache.get(device.table_name())?;
        let os_version =
            resolve_version_rng(os_table.require(VersionRole::Primary)?, &mut self.random)?;
        let os_fragment = format_os_fragment(device, &os_version);

        let browser_table = self.cache.get(browser.table_name())?;
        let versions = BrowserVersions::resolve(browser, &browser_table, &mut self.random)?;
        let ua = compose_ua(&os_fragment, &versions);

        tracing::trace!(%browser, %device, ua = ua.as_str(), "generated user-agent");

        Ok(if include_metadata {
            let metadata = build_meta(MetaParams {
                browser,
                browser_version: versions.primary(),
                os: device.os(),
                os_version: &os_version,
                form_factor: device.form_factor(),
            });
            UserAgentRecord::WithMeta { ua, metadata }
        } else {
            UserAgentRecord::Plain(ua)
        })
    }

    /// The table cache.
    pub fn cache(&self) -> &TableCache<S> {
        &self.cache
    }

    /// Drop every cached table.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The random source.
    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }
}

#[cfg(all(test, feature = "embedded-data"))]
mod tests {
    use super::*;
    use crate::configs::{FormFactor, OsKind};
    use crate::random::ScriptedRandom;

    fn scripted(values: &[f64]) -> UserAgentGenerator<EmbeddedTables, ScriptedRandom> {
        UserAgentGenerator::new(EmbeddedTables, ScriptedRandom::new(values.to_vec()))
    }

    #[test]
    fn zero_count_touches_nothing() {
        let mut generator = scripted(&[0.5]);
        let out = generator
            .generate(&GenerationRequest::new().with_count(0))
            .unwrap();
        assert_eq!(out, Generated::Many(Vec::new()));
        assert_eq!(generator.random_mut().draws(), 0);
        assert_eq!(generator.cache().loads(), 0);
    }

    #[test]
    fn single_count_is_unwrapped() {
        let mut generator = scripted(&[0.3]);
        let out = generator
            .generate(
                &GenerationRequest::new()
                    .with_browser(BrowserKind::Chrome)
                    .with_device(DeviceKind::DesktopMac),
            )
            .unwrap();
        match out {
            Generated::One(UserAgentRecord::Plain(ua)) => {
                assert!(ua.starts_with("Mozilla/5.0 (Macintosh; Intel Mac OS X "));
                assert!(ua.contains("Chrome/"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn batches_keep_order_and_count() {
        let mut generator = scripted(&[0.1, 0.4, 0.7, 0.95]);
        let out = generator
            .generate(
                &GenerationRequest::new()
                    .with_browser(BrowserKind::Firefox)
                    .with_device(DeviceKind::DesktopWindows)
                    .with_count(3),
            )
            .unwrap();
        assert_eq!(out.len(), 3);
        for record in out.into_vec() {
            assert!(record.ua().starts_with("Mozilla/5.0 (Windows NT "));
            assert!(record.ua().contains("Firefox/"));
            assert!(record.metadata().is_none());
        }
        // one os draw and one browser draw per record
        assert_eq!(generator.random_mut().draws(), 6);
        assert_eq!(generator.cache().loads(), 2);
    }

    #[test]
    fn metadata_for_phone_and_tablet() {
        let mut generator = scripted(&[0.5]);
        let record = generator
            .generate_record(BrowserKind::Safari, DeviceKind::Phone, true)
            .unwrap();
        let meta = record.metadata().unwrap();
        assert_eq!(meta.os.name, OsKind::Ios);
        assert_eq!(meta.form_factor, FormFactor::Mobile);
        assert_eq!(meta.browser.name, BrowserKind::Safari);
        assert!(record.ua().contains(&format!("Version/{}", meta.browser.version)));
        assert!(record
            .ua()
            .contains(&format!("iPhone OS {}", meta.os.version.replace('.', "_"))));

        let record = generator
            .generate_record(BrowserKind::Chrome, DeviceKind::Tablet, true)
            .unwrap();
        let meta = record.metadata().unwrap();
        assert_eq!(meta.os.name, OsKind::IpadOs);
        assert_eq!(meta.form_factor, FormFactor::Tablet);
        assert!(record.ua().contains(&format!("Chrome/{}", meta.browser.version)));
    }

    #[test]
    fn unset_kinds_are_drawn_first() {
        // browser draw 0.9 -> firefox, device draw 0.0 -> desktop-mac.
        let mut generator = scripted(&[0.9, 0.0]);
        let record = generator
            .generate(&GenerationRequest::new().with_metadata(true))
            .unwrap()
            .into_vec()
            .remove(0);
        let meta = record.metadata().unwrap();
        assert_eq!(meta.browser.name, BrowserKind::Firefox);
        assert_eq!(meta.os.name, OsKind::MacOs);
        assert_eq!(meta.form_factor, FormFactor::Desktop);
    }

    #[test]
    fn clear_cache_reloads() {
        let mut generator = scripted(&[0.2]);
        generator
            .generate_record(BrowserKind::Chrome, DeviceKind::DesktopMac, false)
            .unwrap();
        assert_eq!(generator.cache().len(), 2);
        generator.clear_cache();
        assert!(generator.cache().is_empty());
        generator
            .generate_record(BrowserKind::Chrome, DeviceKind::DesktopMac, false)
            .unwrap();
        assert_eq!(generator.cache().loads(), 4);
    }
}

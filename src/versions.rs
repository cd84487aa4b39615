use crate::errors::{Error, Result};
use crate::sampler::Weighted;

/// A finer-grained version nested under a weighted bucket.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubVariant {
    /// The full version string (e.g. `138.0.7204.184`).
    pub value: String,
}

/// A version bucket with a relative selection weight.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeightedVersion {
    /// The bucket value (e.g. `138`).
    pub value: String,
    /// Relative weight, negative values count as zero.
    pub weight: f64,
    /// Optional sub-variants picked uniformly once the bucket is chosen.
    #[serde(
        rename = "subVariants",
        alias = "subValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_variants: Option<Vec<SubVariant>>,
}

impl WeightedVersion {
    /// A bucket without sub-variants.
    pub fn new(value: impl Into<String>, weight: f64) -> Self {
        Self {
            value: value.into(),
            weight,
            sub_variants: None,
        }
    }

    /// Attach sub-variants to the bucket.
    pub fn with_sub_variants<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.sub_variants = Some(
            values
                .into_iter()
                .map(|value| SubVariant {
                    value: value.into(),
                })
                .collect(),
        );
        self
    }
}

impl Weighted for WeightedVersion {
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// One entry of a version list as it appears in a table file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum VersionEntry {
    /// A bare version string.
    Bare(String),
    /// A weighted record.
    Weighted(WeightedVersion),
}

/// A version list classified by shape when the table is loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionSequence {
    /// Bare strings, picked uniformly.
    Bare(Vec<String>),
    /// Weighted records without sub-variants.
    Weighted(Vec<WeightedVersion>),
    /// Weighted records whose first entry declares sub-variants.
    WeightedWithSubVariants(Vec<WeightedVersion>),
}

impl VersionSequence {
    /// Classify raw entries. Mixed bare and weighted entries are a data shape error.
    pub fn classify(table: &str, role: VersionRole, entries: Vec<VersionEntry>) -> Result<Self> {
        let weighted = matches!(entries.first(), Some(VersionEntry::Weighted(_)));

        if weighted {
            let mut records = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    VersionEntry::Weighted(record) => records.push(record),
                    VersionEntry::Bare(value) => {
                        return Err(Error::data_shape(
                            table,
                            format!(
                                "{} mixes weighted records with bare version {value}",
                                role.field_name()
                            ),
                        ))
                    }
                }
            }
            let with_sub_variants = records
                .first()
                .map_or(false, |first| first.sub_variants.is_some());

            Ok(if with_sub_variants {
                VersionSequence::WeightedWithSubVariants(records)
            } else {
                VersionSequence::Weighted(records)
            })
        } else {
            let mut values = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    VersionEntry::Bare(value) => values.push(value),
                    VersionEntry::Weighted(record) => {
                        return Err(Error::data_shape(
                            table,
                            format!(
                                "{} mixes bare versions with weighted record {}",
                                role.field_name(),
                                record.value
                            ),
                        ))
                    }
                }
            }
            Ok(VersionSequence::Bare(values))
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            VersionSequence::Bare(values) => values.len(),
            VersionSequence::Weighted(records)
            | VersionSequence::WeightedWithSubVariants(records) => records.len(),
        }
    }

    /// The list has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The role a version list plays inside a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionRole {
    /// The browser or OS version.
    Primary,
    /// The AppleWebKit engine version.
    Webkit,
    /// The trailing Safari label used by Chrome.
    Safari,
}

impl VersionRole {
    /// The json field holding the list.
    pub fn field_name(&self) -> &'static str {
        match self {
            VersionRole::Primary => "versions",
            VersionRole::Webkit => "webkitVersions",
            VersionRole::Safari => "safariVersions",
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVersionTable {
    versions: Vec<VersionEntry>,
    #[serde(default)]
    webkit_versions: Option<Vec<VersionEntry>>,
    #[serde(default)]
    safari_versions: Option<Vec<VersionEntry>>,
}

/// An immutable, classified version table.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionTable {
    name: String,
    versions: VersionSequence,
    webkit_versions: Option<VersionSequence>,
    safari_versions: Option<VersionSequence>,
}

impl VersionTable {
    /// Parse and classify a table file.
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        let raw: RawVersionTable = serde_json::from_str(source).map_err(|source| Error::Parse {
            file: name.to_string(),
            source,
        })?;

        if raw.versions.is_empty() {
            return Err(Error::data_shape(name, "versions must not be empty"));
        }

        let versions = VersionSequence::classify(name, VersionRole::Primary, raw.versions)?;
        let webkit_versions = raw
            .webkit_versions
            .map(|entries| VersionSequence::classify(name, VersionRole::Webkit, entries))
            .transpose()?;
        let safari_versions = raw
            .safari_versions
            .map(|entries| VersionSequence::classify(name, VersionRole::Safari, entries))
            .transpose()?;

        Ok(Self {
            name: name.to_string(),
            versions,
            webkit_versions,
            safari_versions,
        })
    }

    /// The table file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The list for a role, if the table carries it.
    pub fn sequence(&self, role: VersionRole) -> Option<&VersionSequence> {
        match role {
            VersionRole::Primary => Some(&self.versions),
            VersionRole::Webkit => self.webkit_versions.as_ref(),
            VersionRole::Safari => self.safari_versions.as_ref(),
        }
    }

    /// The list for a role, or an invalid input error naming the missing field.
    pub fn require(&self, role: VersionRole) -> Result<&VersionSequence> {
        self.sequence(role).ok_or_else(|| {
            Error::invalid_input(format!(
                "{} is missing {}",
                self.name,
                role.field_name()
            ))
        })
    }
}

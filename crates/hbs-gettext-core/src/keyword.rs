use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MSGID: &str = "msgid";
pub const MSGID_PLURAL: &str = "msgid_plural";
pub const MSGCTXT: &str = "msgctxt";

const POSITIONAL_ROLES: [&str; 2] = [MSGID, MSGID_PLURAL];

/// Argument mapping for one keyword as supplied by a caller.
///
/// All three shapes are accepted for compatibility with older configs:
///
/// ```toml
/// pgettext = { msgctxt = 0, msgid = 1 }
/// ngettext = ["msgid", "msgid_plural"]
/// _ = [0]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KeywordPositions {
    Roles(BTreeMap<String, usize>),
    Names(Vec<String>),
    Indices(Vec<usize>),
}

impl KeywordPositions {
    fn into_roles(self, keyword: &str) -> Result<BTreeMap<String, usize>, ConfigError> {
        match self {
            KeywordPositions::Roles(roles) => Ok(roles),
            KeywordPositions::Names(names) => Ok(names
                .into_iter()
                .enumerate()
                .map(|(index, role)| (role, index))
                .collect()),
            KeywordPositions::Indices(indices) => {
                if indices.len() > POSITIONAL_ROLES.len() {
                    return Err(ConfigError::TooManyPositions {
                        keyword: keyword.to_string(),
                        count: indices.len(),
                    });
                }
                Ok(POSITIONAL_ROLES
                    .iter()
                    .zip(indices)
                    .map(|(role, index)| (role.to_string(), index))
                    .collect())
            }
        }
    }
}

impl From<BTreeMap<String, usize>> for KeywordPositions {
    fn from(roles: BTreeMap<String, usize>) -> Self {
        KeywordPositions::Roles(roles)
    }
}

impl From<Vec<usize>> for KeywordPositions {
    fn from(indices: Vec<usize>) -> Self {
        KeywordPositions::Indices(indices)
    }
}

impl From<Vec<&str>> for KeywordPositions {
    fn from(names: Vec<&str>) -> Self {
        KeywordPositions::Names(names.into_iter().map(str::to_string).collect())
    }
}

/// Role name to argument index for one keyword. Always holds `msgid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleMap {
    roles: BTreeMap<String, usize>,
    #[serde(skip)]
    msgid: usize,
}

impl RoleMap {
    fn new(keyword: &str, roles: BTreeMap<String, usize>) -> Result<Self, ConfigError> {
        let msgid = roles
            .get(MSGID)
            .copied()
            .ok_or_else(|| ConfigError::MissingMsgid {
                keyword: keyword.to_string(),
            })?;
        Ok(Self { roles, msgid })
    }

    pub fn msgid(&self) -> usize {
        self.msgid
    }

    pub fn get(&self, role: &str) -> Option<usize> {
        self.roles.get(role).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.roles.iter().map(|(role, index)| (role.as_str(), *index))
    }

    /// Roles other than `msgid`, `msgid_plural` and `msgctxt`.
    pub fn custom_roles(&self) -> impl Iterator<Item = (&str, usize)> {
        self.iter()
            .filter(|(role, _)| !matches!(*role, MSGID | MSGID_PLURAL | MSGCTXT))
    }
}

/// Normalized keyword table, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSpec {
    keywords: BTreeMap<String, RoleMap>,
}

impl KeywordSpec {
    pub fn from_positions<K>(
        input: impl IntoIterator<Item = (K, KeywordPositions)>,
    ) -> Result<Self, ConfigError>
    where
        K: Into<String>,
    {
        let mut keywords = BTreeMap::new();
        for (keyword, positions) in input {
            let keyword = keyword.into();
            let roles = positions.into_roles(&keyword)?;
            let role_map = RoleMap::new(&keyword, roles)?;
            keywords.insert(keyword, role_map);
        }
        Ok(Self { keywords })
    }

    pub fn get(&self, keyword: &str) -> Option<&RoleMap> {
        self.keywords.get(keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoleMap)> {
        self.keywords
            .iter()
            .map(|(keyword, roles)| (keyword.as_str(), roles))
    }
}

// GNU xgettext's JavaScript keywords.
const DEFAULT_KEYWORDS: &[(&str, &[(&str, usize)])] = &[
    ("_", &[(MSGID, 0)]),
    ("gettext", &[(MSGID, 0)]),
    ("dgettext", &[(MSGID, 1)]),
    ("dcgettext", &[(MSGID, 1)]),
    ("ngettext", &[(MSGID, 0), (MSGID_PLURAL, 1)]),
    ("dngettext", &[(MSGID, 1), (MSGID_PLURAL, 2)]),
    ("pgettext", &[(MSGCTXT, 0), (MSGID, 1)]),
    ("dpgettext", &[(MSGCTXT, 1), (MSGID, 2)]),
];

impl Default for KeywordSpec {
    fn default() -> Self {
        let keywords = DEFAULT_KEYWORDS
            .iter()
            .map(|(keyword, roles)| {
                let roles = roles
                    .iter()
                    .map(|(role, index)| (role.to_string(), *index))
                    .collect::<BTreeMap<_, _>>();
                let msgid = roles.get(MSGID).copied().unwrap_or_default();
                (keyword.to_string(), RoleMap { roles, msgid })
            })
            .collect();
        Self { keywords }
    }
}

pub mod grouping;
pub mod meta;

pub use grouping::{get_members_by_cube, get_name_member_pairs, MembersByCube};
pub use meta::{CubeMeta, Meta};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single queryable field of a cube.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CubeMember {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
    /// Data type reported by the backend, e.g. `number` or `time`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl CubeMember {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            short_title: None,
            data_type: None,
        }
    }

    pub fn with_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MemberCategory {
    Measures,
    Dimensions,
    Segments,
    TimeDimensions,
}

impl MemberCategory {
    /// All categories in the order the metadata provider lists them
    pub const ALL: [MemberCategory; 4] = [
        MemberCategory::Measures,
        MemberCategory::Dimensions,
        MemberCategory::Segments,
        MemberCategory::TimeDimensions,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MemberCategory::Measures => "measures",
            MemberCategory::Dimensions => "dimensions",
            MemberCategory::Segments => "segments",
            MemberCategory::TimeDimensions => "timeDimensions",
        }
    }
}

impl fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The members of one cube that belong to a single category.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCube {
    pub cube_name: String,
    pub cube_title: String,
    #[serde(default)]
    pub members: Vec<CubeMember>,
}

/// Category key to cubes mapping, as produced for the query builder.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableMembers {
    #[serde(default)]
    pub measures: Vec<AvailableCube>,
    #[serde(default)]
    pub dimensions: Vec<AvailableCube>,
    #[serde(default)]
    pub segments: Vec<AvailableCube>,
    #[serde(default)]
    pub time_dimensions: Vec<AvailableCube>,
}

impl AvailableMembers {
    pub fn get(&self, category: MemberCategory) -> &[AvailableCube] {
        match category {
            MemberCategory::Measures => &self.measures,
            MemberCategory::Dimensions => &self.dimensions,
            MemberCategory::Segments => &self.segments,
            MemberCategory::TimeDimensions => &self.time_dimensions,
        }
    }

    /// Entries in mapping order: measures, dimensions, segments, time dimensions.
    pub fn iter(&self) -> impl Iterator<Item = (MemberCategory, &[AvailableCube])> {
        MemberCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

use super::{AvailableCube, AvailableMembers, CubeMember};
use serde::{Deserialize, Serialize};

const TIME_TYPE: &str = "time";

/// Schema metadata document returned by the backend's meta endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Meta {
    #[serde(default)]
    pub cubes: Vec<CubeMeta>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CubeMeta {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub measures: Vec<CubeMember>,
    #[serde(default)]
    pub dimensions: Vec<CubeMember>,
    #[serde(default)]
    pub segments: Vec<CubeMember>,
}

impl CubeMeta {
    fn available<'a, I>(&self, members: I) -> AvailableCube
    where
        I: IntoIterator<Item = &'a CubeMember>,
    {
        AvailableCube {
            cube_name: self.name.clone(),
            cube_title: self.title.clone().unwrap_or_else(|| self.name.clone()),
            members: members.into_iter().cloned().collect(),
        }
    }
}

impl Meta {
    /// Lists every cube under each category, in meta order.
    ///
    /// Time dimensions are the dimensions whose type is `time`.
    pub fn available_members(&self) -> AvailableMembers {
        AvailableMembers {
            measures: self.cubes.iter().map(|c| c.available(&c.measures)).collect(),
            dimensions: self
                .cubes
                .iter()
                .map(|c| c.available(&c.dimensions))
                .collect(),
            segments: self.cubes.iter().map(|c| c.available(&c.segments)).collect(),
            time_dimensions: self
                .cubes
                .iter()
                .map(|c| {
                    c.available(
                        c.dimensions
                            .iter()
                            .filter(|d| d.data_type.as_deref() == Some(TIME_TYPE)),
                    )
                })
                .collect(),
        }
    }
}

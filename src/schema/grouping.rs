use super::{AvailableCube, AvailableMembers, CubeMember, MemberCategory};
use serde::Serialize;
use std::collections::HashMap;

/// All members of one cube, split by category.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembersByCube {
    pub cube_name: String,
    pub cube_title: String,
    pub measures: Vec<CubeMember>,
    pub dimensions: Vec<CubeMember>,
    pub segments: Vec<CubeMember>,
    pub time_dimensions: Vec<CubeMember>,
}

impl MembersByCube {
    fn empty(cube_name: &str, cube_title: &str) -> Self {
        Self {
            cube_name: cube_name.to_string(),
            cube_title: cube_title.to_string(),
            measures: Vec::new(),
            dimensions: Vec::new(),
            segments: Vec::new(),
            time_dimensions: Vec::new(),
        }
    }

    pub fn bucket(&self, category: MemberCategory) -> &[CubeMember] {
        match category {
            MemberCategory::Measures => &self.measures,
            MemberCategory::Dimensions => &self.dimensions,
            MemberCategory::Segments => &self.segments,
            MemberCategory::TimeDimensions => &self.time_dimensions,
        }
    }

    fn bucket_mut(&mut self, category: MemberCategory) -> &mut Vec<CubeMember> {
        match category {
            MemberCategory::Measures => &mut self.measures,
            MemberCategory::Dimensions => &mut self.dimensions,
            MemberCategory::Segments => &mut self.segments,
            MemberCategory::TimeDimensions => &mut self.time_dimensions,
        }
    }
}

/// Flattens cubes into `(member name, member)` pairs, cube order first.
///
/// Duplicate names across cubes are kept.
pub fn get_name_member_pairs(cubes: &[AvailableCube]) -> Vec<(&str, &CubeMember)> {
    cubes
        .iter()
        .flat_map(|cube| cube.members.iter())
        .map(|member| (member.name.as_str(), member))
        .collect()
}

/// Regroups category-keyed cubes into one entry per cube name.
///
/// Buckets accumulate when a cube shows up under several categories. The
/// title comes from the first record seen for a cube name. Entries are
/// returned in first-seen order.
pub fn get_members_by_cube(available_members: &AvailableMembers) -> Vec<MembersByCube> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut members_by_cube: Vec<MembersByCube> = Vec::new();

    for (category, cubes) in available_members.iter() {
        for cube in cubes {
            let position = *index.entry(cube.cube_name.as_str()).or_insert_with(|| {
                members_by_cube.push(MembersByCube::empty(&cube.cube_name, &cube.cube_title));
                members_by_cube.len() - 1
            });

            members_by_cube[position]
                .bucket_mut(category)
                .extend(cube.members.iter().cloned());
        }
    }

    members_by_cube
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn cube(name: &str, title: &str, members: &[&str]) -> AvailableCube {
        AvailableCube {
            cube_name: name.to_string(),
            cube_title: title.to_string(),
            members: members
                .iter()
                .map(|m| CubeMember::new(*m, ucfirst_title(m)))
                .collect(),
        }
    }

    fn ucfirst_title(name: &str) -> String {
        crate::utils::ucfirst(name).unwrap()
    }

    #[fixture]
    fn orders_and_users() -> AvailableMembers {
        AvailableMembers {
            measures: vec![
                cube("Orders", "Orders", &["Orders.count", "Orders.total"]),
                cube("Users", "Users", &["Users.count"]),
            ],
            dimensions: vec![
                cube("Orders", "Orders (renamed)", &["Orders.status"]),
                cube("Products", "Products", &["Products.name"]),
            ],
            segments: vec![cube("Users", "Users", &["Users.active"])],
            time_dimensions: vec![cube("Orders", "Orders", &["Orders.createdAt"])],
        }
    }

    #[test]
    fn test_name_member_pairs_preserve_order() {
        let cubes = vec![cube("A", "A", &["a"]), cube("B", "B", &["b", "c"])];

        let pairs = get_name_member_pairs(&cubes);
        let names: Vec<&str> = pairs.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(pairs[1].1, &cubes[1].members[0]);
        assert_eq!(pairs[2].1, &cubes[1].members[1]);
    }

    #[test]
    fn test_name_member_pairs_keep_duplicates() {
        let cubes = vec![cube("A", "A", &["x"]), cube("B", "B", &["x"])];

        let pairs = get_name_member_pairs(&cubes);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|(name, _)| *name == "x"));
    }

    #[test]
    fn test_name_member_pairs_empty() {
        assert!(get_name_member_pairs(&[]).is_empty());
    }

    #[test]
    fn test_members_by_cube_single_cube_two_categories() {
        let available = AvailableMembers {
            measures: vec![cube("Orders", "Orders", &["count"])],
            dimensions: vec![cube("Orders", "Orders", &["status"])],
            ..Default::default()
        };

        let grouped = get_members_by_cube(&available);
        assert_eq!(grouped.len(), 1);

        let orders = &grouped[0];
        assert_eq!(orders.cube_name, "Orders");
        assert_eq!(orders.measures, vec![CubeMember::new("count", "Count")]);
        assert_eq!(orders.dimensions, vec![CubeMember::new("status", "Status")]);
        assert!(orders.segments.is_empty());
        assert!(orders.time_dimensions.is_empty());
    }

    #[rstest]
    fn test_members_by_cube_accumulates_across_categories(orders_and_users: AvailableMembers) {
        let grouped = get_members_by_cube(&orders_and_users);

        let names: Vec<&str> = grouped.iter().map(|c| c.cube_name.as_str()).collect();
        assert_eq!(names, vec!["Orders", "Users", "Products"]);

        let orders = &grouped[0];
        assert_eq!(orders.measures.len(), 2);
        assert_eq!(orders.dimensions[0].name, "Orders.status");
        assert_eq!(orders.time_dimensions[0].name, "Orders.createdAt");
        assert!(orders.segments.is_empty());

        let users = &grouped[1];
        assert_eq!(users.measures[0].name, "Users.count");
        assert_eq!(users.segments[0].name, "Users.active");
    }

    #[rstest]
    fn test_members_by_cube_keeps_first_title(orders_and_users: AvailableMembers) {
        let grouped = get_members_by_cube(&orders_and_users);
        assert_eq!(grouped[0].cube_title, "Orders");
    }

    #[rstest]
    fn test_members_by_cube_places_each_member_once(orders_and_users: AvailableMembers) {
        let grouped = get_members_by_cube(&orders_and_users);

        for (category, cubes) in orders_and_users.iter() {
            for source in cubes {
                let target = grouped
                    .iter()
                    .find(|c| c.cube_name == source.cube_name)
                    .unwrap();
                for member in &source.members {
                    let hits: usize = MemberCategory::ALL
                        .iter()
                        .map(|c| target.bucket(*c).iter().filter(|m| *m == member).count())
                        .sum();
                    assert_eq!(hits, 1);
                    assert!(target.bucket(category).contains(member));
                }
            }
        }
    }

    #[test]
    fn test_members_by_cube_registers_cube_without_members() {
        let available = AvailableMembers {
            segments: vec![cube("Empty", "Empty", &[])],
            ..Default::default()
        };

        let grouped = get_members_by_cube(&available);
        assert_eq!(grouped.len(), 1);
        assert!(MemberCategory::ALL
            .iter()
            .all(|c| grouped[0].bucket(*c).is_empty()));
    }

    #[test]
    fn test_members_by_cube_serializes_camel_case() {
        let available = AvailableMembers {
            time_dimensions: vec![cube("Orders", "Orders", &["Orders.createdAt"])],
            ..Default::default()
        };

        let json = serde_json::to_value(get_members_by_cube(&available)).unwrap();
        assert_eq!(json[0]["cubeName"], "Orders");
        assert_eq!(json[0]["timeDimensions"][0]["name"], "Orders.createdAt");
        assert_eq!(json[0]["measures"], serde_json::json!([]));
    }
}

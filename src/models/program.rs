use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Level name -> exercise groups of that level
pub type ProgramDocument = OrderedMap<LevelDocument>;

/// Exercise group name -> exercise group
pub type LevelDocument = OrderedMap<ExerciseGroup>;

/// String-keyed map that keeps keys in insertion order.
///
/// Serializes as a JSON object whose keys appear in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and gets the new
    /// value; the old value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// One exercise row as seen through an [`ExerciseGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise<'a> {
    pub name: &'a str,
    pub rounds: i64,
    pub rest_seconds: i64,
}

/// Exercises defined by one CSV file, stored as three parallel lists.
///
/// The lists only grow together through [`ExerciseGroup::push`], so they
/// always have the same length. Serialized as
/// `[[names...], [rounds...], [rest_seconds...]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseGroup {
    names: Vec<String>,
    rounds: Vec<i64>,
    rest_seconds: Vec<i64>,
}

impl ExerciseGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, rounds: i64, rest_seconds: i64) {
        self.names.push(name.into());
        self.rounds.push(rounds);
        self.rest_seconds.push(rest_seconds);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rounds(&self) -> &[i64] {
        &self.rounds
    }

    pub fn rest_seconds(&self) -> &[i64] {
        &self.rest_seconds
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn exercises(&self) -> impl Iterator<Item = Exercise<'_>> {
        self.names
            .iter()
            .zip(&self.rounds)
            .zip(&self.rest_seconds)
            .map(|((name, &rounds), &rest_seconds)| Exercise {
                name,
                rounds,
                rest_seconds,
            })
    }
}

impl Serialize for ExerciseGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.names, &self.rounds, &self.rest_seconds).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExerciseGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (names, rounds, rest_seconds) =
            <(Vec<String>, Vec<i64>, Vec<i64>)>::deserialize(deserializer)?;
        if names.len() != rounds.len() || names.len() != rest_seconds.len() {
            return Err(de::Error::custom(format!(
                "exercise group lists differ in length: {} names, {} rounds, {} rest values",
                names.len(),
                rounds.len(),
                rest_seconds.len()
            )));
        }
        Ok(Self {
            names,
            rounds,
            rest_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> ExerciseGroup {
        let mut group = ExerciseGroup::new();
        group.push("Push-up", 3, 45);
        group.push("Squat", 1, 30);
        group
    }

    #[test]
    fn test_push_keeps_lists_aligned() {
        let group = sample_group();
        assert_eq!(group.len(), 2);
        assert_eq!(group.names(), ["Push-up", "Squat"]);
        assert_eq!(group.rounds(), [3, 1]);
        assert_eq!(group.rest_seconds(), [45, 30]);
    }

    #[test]
    fn test_exercises_iterates_rows() {
        let group = sample_group();
        let rows: Vec<_> = group.exercises().collect();
        assert_eq!(
            rows[0],
            Exercise {
                name: "Push-up",
                rounds: 3,
                rest_seconds: 45
            }
        );
        assert_eq!(rows[1].name, "Squat");
    }

    #[test]
    fn test_group_serializes_as_three_lists() {
        let json = serde_json::to_string(&sample_group()).unwrap();
        assert_eq!(json, r#"[["Push-up","Squat"],[3,1],[45,30]]"#);
    }

    #[test]
    fn test_group_rejects_unequal_lists() {
        let result: Result<ExerciseGroup, _> = serde_json::from_str(r#"[["a","b"],[1],[30,30]]"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("differ in length"));
    }

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("mid", 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_ordered_map_replace_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().collect::<Vec<_>>(), [("a", &10), ("b", &2)]);
    }

    #[test]
    fn test_document_deserialize_preserves_order() {
        let json = r#"{"Level 2":{"Legs":[["Squat"],[4],[60]]},"Level 1":{}}"#;
        let doc: ProgramDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.keys().collect::<Vec<_>>(), ["Level 2", "Level 1"]);
        assert!(doc.get("Level 1").unwrap().is_empty());
        let legs = doc.get("Level 2").unwrap().get("Legs").unwrap();
        assert_eq!(legs.rounds(), [4]);
        assert_eq!(serde_json::to_string(&doc).unwrap(), json);
    }

    #[test]
    fn test_non_ascii_names_stay_unescaped() {
        let mut group = ExerciseGroup::new();
        group.push("Chống đẩy", 2, 30);
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains("Chống đẩy"));
    }
}

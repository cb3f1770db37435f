use bevy_ecs::prelude::Resource;
use indexmap::IndexMap;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::str::FromStr;
use valence_ident::Ident;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegistryId<E> {
    Index {
        index: usize,
        marker: PhantomData<E>,
    },
    Identifier {
        identifier: Ident<String>,
    },
    StaticIdentifier {
        identifier: Ident<&'static str>,
    },
}

impl<E> RegistryId<E> {
    pub fn index(index: usize) -> Self {
        RegistryId::Index {
            index,
            marker: PhantomData,
        }
    }
}

impl<E> From<Ident<String>> for RegistryId<E> {
    fn from(value: Ident<String>) -> Self {
        RegistryId::Identifier { identifier: value }
    }
}

impl<E> From<Ident<&'static str>> for RegistryId<E> {
    fn from(value: Ident<&'static str>) -> Self {
        RegistryId::StaticIdentifier { identifier: value }
    }
}

/// Entries keyed by namespaced identifier, kept in insertion order, with an
/// optional case-insensitive alias for every entry.
#[derive(Resource)]
pub struct Registry<E> {
    items: IndexMap<Ident<String>, E>,
    names: NameIndex<usize>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Registry<E> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            names: NameIndex::new(),
        }
    }

    pub fn get(&self, id: impl Into<RegistryId<E>>) -> Option<&E> {
        match id.into() {
            RegistryId::Index { index, .. } => self.items.get_index(index).map(|(_, v)| v),
            RegistryId::Identifier { identifier } => self.items.get(&identifier),
            RegistryId::StaticIdentifier { identifier } => self.items.get(identifier.as_str()),
        }
    }

    pub fn get_full(&self, id: impl Into<RegistryId<E>>) -> Option<(usize, &E)> {
        match id.into() {
            RegistryId::Index { index, .. } => self.items.get_index(index).map(|(_, v)| (index, v)),
            RegistryId::Identifier { identifier } => self
                .items
                .get_full(&identifier)
                .map(|(index, _, v)| (index, v)),
            RegistryId::StaticIdentifier { identifier } => self
                .items
                .get_full(identifier.as_str())
                .map(|(index, _, v)| (index, v)),
        }
    }

    /// Looks an entry up by its alias, ignoring ASCII case.
    pub fn get_by_name(&self, name: &str) -> Option<&E> {
        let index = *self.names.get(name)?;
        self.items.get_index(index).map(|(_, v)| v)
    }

    /// Looks an entry up by the raw identifier string; a missing namespace
    /// means `minecraft`. Matching ignores ASCII case.
    pub fn get_by_identifier_str(&self, identifier: &str) -> Option<&E> {
        let ident = Ident::<String>::from_str(&identifier.to_ascii_lowercase()).ok()?;
        self.items.get(&ident)
    }

    pub fn insert(&mut self, id: impl Into<Ident<String>>, entry: E) -> RegistryRef<E> {
        let id = id.into();
        let (index, _) = self.items.insert_full(id.clone(), entry);

        RegistryRef {
            index,
            identifier: id,
            marker: PhantomData,
        }
    }

    /// Inserts an entry and makes it reachable through `get_by_name` as well.
    pub fn insert_named(
        &mut self,
        id: impl Into<Ident<String>>,
        name: &str,
        entry: E,
    ) -> RegistryRef<E> {
        let registry_ref = self.insert(id, entry);
        self.names.insert(name, registry_ref.index);
        registry_ref
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident<String>, &E)> + '_ {
        self.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = RegistryId<E>> + '_ {
        (0..self.items.len()).map(RegistryId::index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegistryRef<E> {
    index: usize,
    identifier: Ident<String>,
    marker: PhantomData<E>,
}

impl<E> RegistryRef<E> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn identifier(&self) -> &Ident<String> {
        &self.identifier
    }
}

impl<E> From<RegistryRef<E>> for RegistryId<E> {
    fn from(value: RegistryRef<E>) -> Self {
        RegistryId::Index {
            index: value.index,
            marker: PhantomData,
        }
    }
}

/// Case-insensitive name lookup. Keys are folded to ASCII upper case, the
/// convention of legacy enum-style names (`OAK_DOOR`, `BOTTOM_OPEN_NORTH`).
#[derive(Clone, Debug)]
pub struct NameIndex<E> {
    entries: IndexMap<String, E>,
}

impl<E> Default for NameIndex<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> NameIndex<E> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the previous entry when the folded name was already taken.
    pub fn insert(&mut self, name: &str, entry: E) -> Option<E> {
        self.entries.insert(name.to_ascii_uppercase(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&E> {
        self.entries.get(name.to_ascii_uppercase().as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &E)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valence_ident::ident;

    #[derive(Debug, PartialEq)]
    struct TestEntry(u32);

    #[test]
    fn registry_lookups() {
        const A: Ident<&'static str> = ident!("test_entry");

        let mut reg = Registry::<TestEntry>::new();
        let r = reg.insert(A, TestEntry(1));
        reg.insert(ident!("other_entry"), TestEntry(2));

        assert_eq!(r.index(), 0);
        assert_eq!(reg.get(r), Some(&TestEntry(1)));
        assert_eq!(reg.get(ident!("other_entry")), Some(&TestEntry(2)));
        assert_eq!(reg.get(RegistryId::index(1)), Some(&TestEntry(2)));
        assert!(reg.get(ident!("not_found")).is_none());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.ids().count(), 2);
    }

    #[test]
    fn reinsert_keeps_index() {
        let mut reg = Registry::<TestEntry>::new();
        reg.insert(ident!("a"), TestEntry(1));
        reg.insert(ident!("b"), TestEntry(2));
        let r = reg.insert(ident!("a"), TestEntry(3));

        assert_eq!(r.index(), 0);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(ident!("a")), Some(&TestEntry(3)));
    }

    #[test]
    fn named_lookup_ignores_case() {
        let mut reg = Registry::<TestEntry>::new();
        reg.insert_named(ident!("wooden_door"), "OAK_DOOR", TestEntry(64));

        assert_eq!(reg.get_by_name("oak_door"), Some(&TestEntry(64)));
        assert_eq!(reg.get_by_name("Oak_Door"), Some(&TestEntry(64)));
        assert_eq!(reg.get_by_name("wooden_door"), None);
        assert_eq!(
            reg.get_by_identifier_str("minecraft:wooden_door"),
            Some(&TestEntry(64))
        );
        assert_eq!(reg.get_by_identifier_str("WOODEN_DOOR"), Some(&TestEntry(64)));
        assert_eq!(reg.get_by_identifier_str("not valid!"), None);
    }

    #[test]
    fn name_index_replaces_folded_duplicates() {
        let mut names = NameIndex::new();
        assert_eq!(names.insert("north", 1), None);
        assert_eq!(names.insert("NORTH", 2), Some(1));
        assert_eq!(names.get("North"), Some(&2));
        assert!(names.contains("nOrTh"));
        assert_eq!(names.len(), 1);
    }
}

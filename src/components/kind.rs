//! Component type descriptors.
//!
//! A [`ComponentType`] is composed exactly once, when the type is
//! registered. Composition merges the type's own file declarations with
//! every ancestor's merged set: a role declared on the type itself always
//! wins, otherwise the first ancestor in declaration order supplies it.
//! Components only ever read the resulting set.

use std::path::{Path, PathBuf};

use super::file::FileTemplate;

/// Role of the file whose content becomes the component configuration.
pub const DEFINITION_ROLE: &str = "definition";

/// Name of the built-in directory next to a type's home.
pub const CORE_DIR_NAME: &str = "config";

/// Type-level metadata and merged file set for one component type.
#[derive(Debug)]
pub struct ComponentType {
    name: String,
    tag: String,
    collection: String,
    core_dir: PathBuf,
    user_extendable: bool,
    description_key: Option<&'static str>,
    files: Vec<FileTemplate>,
}

impl ComponentType {
    /// Start declaring a type named `name` whose built-in directory lives
    /// under `home`.
    pub fn builder(name: impl Into<String>, home: impl Into<PathBuf>) -> ComponentTypeBuilder {
        ComponentTypeBuilder {
            name: name.into(),
            home: home.into(),
            own: Vec::new(),
            ancestors: Vec::new(),
            user_extendable: None,
            collection: None,
            description_key: None,
            inherited_description_key: None,
        }
    }

    /// Declared type name (e.g. `Function`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical lower-case type tag (e.g. `function`).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Name of the collection holding components of this type.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Directory holding the built-in components of this type.
    pub fn core_dir(&self) -> &Path {
        &self.core_dir
    }

    /// Whether users may create components of this type.
    pub fn is_user_extendable(&self) -> bool {
        self.user_extendable
    }

    /// Definition key whose value becomes a component's description.
    pub fn description_key(&self) -> Option<&'static str> {
        self.description_key
    }

    /// Merged file set, own declarations first.
    pub fn files(&self) -> &[FileTemplate] {
        &self.files
    }

    /// Look up a file template by role.
    pub fn file(&self, role: &str) -> Option<&FileTemplate> {
        self.files.iter().find(|f| f.role() == role)
    }

    /// All role names in the merged set.
    pub fn roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().map(|f| f.role())
    }
}

/// Builder for [`ComponentType`].
#[derive(Debug)]
pub struct ComponentTypeBuilder {
    name: String,
    home: PathBuf,
    own: Vec<FileTemplate>,
    ancestors: Vec<Vec<FileTemplate>>,
    user_extendable: Option<bool>,
    collection: Option<String>,
    description_key: Option<&'static str>,
    inherited_description_key: Option<&'static str>,
}

impl ComponentTypeBuilder {
    /// Declare a file on this type.
    pub fn file(mut self, template: FileTemplate) -> Self {
        self.own.push(template);
        self
    }

    /// Inherit from `base`. Earlier calls take precedence over later ones.
    pub fn extends(mut self, base: &ComponentType) -> Self {
        self.ancestors.push(base.files.clone());
        if self.inherited_description_key.is_none() {
            self.inherited_description_key = base.description_key;
        }
        self
    }

    /// Allow or forbid user-created components. Not inherited.
    pub fn user_extendable(mut self, extendable: bool) -> Self {
        self.user_extendable = Some(extendable);
        self
    }

    /// Override the collection name (defaults to `<tag>s`).
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collection = Some(name.into());
        self
    }

    /// Take component descriptions from `key` in the definition.
    pub fn describe_from(mut self, key: &'static str) -> Self {
        self.description_key = Some(key);
        self
    }

    /// Compose the type.
    ///
    /// # Panics
    ///
    /// Panics if neither the type nor any ancestor declares the
    /// [`DEFINITION_ROLE`] file. That is a mistake in the type
    /// declaration, not a runtime condition.
    pub fn build(self) -> ComponentType {
        let ancestors: Vec<&[FileTemplate]> = self.ancestors.iter().map(Vec::as_slice).collect();
        let files = merge_files(&self.own, &ancestors);
        assert!(
            files.iter().any(|f| f.role() == DEFINITION_ROLE),
            "component type '{}' has no '{}' file",
            self.name,
            DEFINITION_ROLE
        );

        let tag = self.name.to_lowercase();
        ComponentType {
            collection: self.collection.unwrap_or_else(|| format!("{}s", tag)),
            core_dir: self.home.join(CORE_DIR_NAME),
            user_extendable: self.user_extendable.unwrap_or(true),
            description_key: self.description_key.or(self.inherited_description_key),
            files,
            tag,
            name: self.name,
        }
    }
}

/// Merge own declarations with ancestor file sets.
///
/// Own declarations come first and always win. A role missing from the
/// type itself is taken from the first ancestor that declares it.
pub fn merge_files(own: &[FileTemplate], ancestors: &[&[FileTemplate]]) -> Vec<FileTemplate> {
    let mut merged: Vec<FileTemplate> = Vec::with_capacity(own.len());

    for template in own {
        match merged.iter_mut().find(|m| m.role() == template.role()) {
            Some(slot) => *slot = *template,
            None => merged.push(*template),
        }
    }

    for ancestor in ancestors {
        for template in ancestor.iter() {
            if !merged.iter().any(|m| m.role() == template.role()) {
                merged.push(*template);
            }
        }
    }

    merged
}

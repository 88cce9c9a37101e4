//! Composite folder/file trees.
//!
//! A [`Folder`] owns an ordered list of children. Creating it makes sure its
//! directory exists, then creates each child in order: a child folder is
//! placed at `parent/child_name`, a child file is written into the parent
//! directory under its own name. The first error stops the walk; whatever
//! was written before it stays on disk.

use crate::artifact::Artifact;
use crate::data::TemplateData;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// A node in a tree to be created.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Folder(Folder),
    File(File),
}

impl Component {
    pub fn name(&self) -> &str {
        match self {
            Component::Folder(folder) => folder.name(),
            Component::File(file) => file.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Component::Folder(folder) => folder.set_name(name),
            Component::File(file) => file.set_name(name),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Component::Folder(folder) => folder.path(),
            Component::File(file) => file.path(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        match self {
            Component::Folder(folder) => folder.set_path(path),
            Component::File(file) => file.set_path(path),
        }
    }

    pub fn create(&mut self, artifact: &Artifact<'_>) -> Result<()> {
        match self {
            Component::Folder(folder) => folder.create(artifact),
            Component::File(file) => file.create(artifact),
        }
    }
}

impl From<Folder> for Component {
    fn from(folder: Folder) -> Self {
        Component::Folder(folder)
    }
}

impl From<File> for Component {
    fn from(file: File) -> Self {
        Component::File(file)
    }
}

/// A directory and its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder {
    name: String,
    path: Option<PathBuf>,
    children: Vec<Component>,
}

impl Folder {
    /// A folder placed by its parent during creation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            children: Vec::new(),
        }
    }

    /// A tree root, already placed at `path`.
    pub fn root(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path: Some(path),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Appends a child; children are created in insertion order.
    pub fn add(&mut self, child: impl Into<Component>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style variant of [`Folder::add`].
    pub fn with(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Creates this directory, then every child in order.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the folder was never placed
    /// * The first error raised by the filesystem or any child
    pub fn create(&mut self, artifact: &Artifact<'_>) -> Result<()> {
        let path = self.path.clone().ok_or_else(|| {
            Error::ConfigError(format!("folder '{}' has no path", self.name))
        })?;

        if !artifact.fs.exists(&path) {
            debug!("Creating folder '{}'", path.display());
            artifact.fs.create_dir_all(&path)?;
        }

        for child in &mut self.children {
            let child_path = match &*child {
                Component::Folder(folder) => path.join(folder.name()),
                Component::File(_) => path.clone(),
            };
            child.set_path(child_path);
            child.create(artifact)?;
        }
        Ok(())
    }
}

/// A file rendered from a template.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    name: String,
    path: Option<PathBuf>,
    template_id: String,
    template_data: TemplateData,
}

impl File {
    pub fn new(
        name: impl Into<String>,
        template_id: impl Into<String>,
        template_data: TemplateData,
    ) -> Self {
        Self {
            name: name.into(),
            path: None,
            template_id: template_id.into(),
            template_data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Directory the file is written into.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn template_data(&self) -> &TemplateData {
        &self.template_data
    }

    /// Renders the template and writes it to `path/name`.
    pub fn create(&mut self, artifact: &Artifact<'_>) -> Result<()> {
        let dir = self.path.as_ref().ok_or_else(|| {
            Error::ConfigError(format!("file '{}' has no path", self.name))
        })?;
        artifact.render_to(&self.template_id, &self.template_data, &dir.join(&self.name))
    }
}

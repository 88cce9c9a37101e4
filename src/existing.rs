//! Discovery of what an existing project already contains.
//! Resources are the folders directly under the content folder, their
//! entries are the folders one level below, and public pages are the page
//! files found under the routes folder.

use crate::config::ProjectConfig;
use crate::constants::{DRAFT_PREFIX, PAGE_EXTENSIONS};
use crate::data::{MenuItems, NoPageItems};
use crate::error::{Error, Result};
use crate::pathmaker::PathMaker;
use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

fn sub_directories(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| Error::ScanError(e.to_string()))?;
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(DRAFT_PREFIX) && !name.starts_with('.') {
                names.push(name);
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Names of the resources in the project, sorted.
pub fn resources(config: &ProjectConfig) -> Result<Vec<String>> {
    let content = PathMaker::new(config).project().content_folder();
    debug!("Scanning resources in '{}'", content.display());
    sub_directories(&content)
}

/// Entry names of every resource in `resources`.
pub fn resource_contents(
    config: &ProjectConfig,
    resources: &[String],
) -> Result<IndexMap<String, Vec<String>>> {
    let paths = PathMaker::new(config).project();
    let mut contents = IndexMap::new();
    for resource in resources {
        let entries = sub_directories(&paths.path_to_existing_resource(resource))?;
        contents.insert(resource.clone(), entries);
    }
    Ok(contents)
}

fn page_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in PAGE_EXTENSIONS {
        let glob = Glob::new(&format!("*.{}", ext)).map_err(|e| Error::ScanError(e.to_string()))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::ScanError(e.to_string()))
}

/// Public pages: routes holding a page file, excluding resource routes,
/// the site index, the API and anything prefixed with `__`.
pub fn public_pages(config: &ProjectConfig, resources: &[String]) -> Result<Vec<String>> {
    let paths = PathMaker::new(config).project();
    let routes = paths.routes_folder();
    if !routes.is_dir() {
        return Ok(Vec::new());
    }
    let api = paths.api_folder();
    let matcher = page_matcher()?;

    let mut pages = Vec::new();
    for entry in WalkDir::new(&routes).min_depth(2) {
        let entry = entry.map_err(|e| Error::ScanError(e.to_string()))?;
        if !entry.file_type().is_file() || !matcher.is_match(entry.file_name()) {
            continue;
        }
        if entry.path().starts_with(&api) {
            continue;
        }
        let Some(parent) = entry.path().parent() else {
            continue;
        };
        let Ok(route) = parent.strip_prefix(&routes) else {
            continue;
        };
        let route = route.to_string_lossy().replace('\\', "/");
        let hidden = route
            .split('/')
            .any(|segment| segment.starts_with(DRAFT_PREFIX) || segment.starts_with('['));
        let owned_by_resource = resources
            .iter()
            .any(|r| route == *r || route.starts_with(&format!("{}/", r)));
        if hidden || owned_by_resource || pages.contains(&route) {
            continue;
        }
        pages.push(route);
    }
    pages.sort();
    Ok(pages)
}

/// Menu entries for the project as it is on disk.
pub fn menu_items(config: &ProjectConfig, with_content: bool) -> Result<MenuItems> {
    let resources = resources(config)?;
    let contents = resource_contents(config, &resources)?;
    Ok(MenuItems {
        resources,
        contents,
        with_content,
    })
}

/// Sitemap and feed entries for the project as it is on disk.
pub fn no_page_items(config: &ProjectConfig, base_url: &str) -> Result<NoPageItems> {
    let resources = resources(config)?;
    let contents = resource_contents(config, &resources)?;
    let pages = public_pages(config, &resources)?;
    Ok(NoPageItems {
        base_url: base_url.trim_end_matches('/').to_string(),
        resources,
        contents,
        pages,
    })
}

use std::fs;
use std::path::Path;

use kiln::config::{ProjectConfig, Settings};
use kiln::existing::{menu_items, no_page_items, public_pages, resource_contents, resources};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn sample_project() -> (TempDir, ProjectConfig) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(root, "content/posts/hello/index.svx");
    touch(root, "content/posts/world/index.svx");
    touch(root, "content/posts/__draft/index.svx");
    touch(root, "content/docs/intro/index.svx");
    touch(root, "content/.cache/x");
    touch(root, "src/routes/+page.svelte");
    touch(root, "src/routes/about/+page.svelte");
    touch(root, "src/routes/contact/+page.svelte");
    touch(root, "src/routes/guides/setup/+page.svx");
    touch(root, "src/routes/posts/+page.svelte");
    touch(root, "src/routes/posts/[slug=string]/+page.svelte");
    touch(root, "src/routes/__wip/+page.svelte");
    touch(root, "src/routes/api/v1/posts/+server.ts");
    let config = ProjectConfig::new(root, Settings::default()).unwrap();
    (dir, config)
}

#[test]
fn test_resources_skip_hidden_folders() {
    let (_dir, config) = sample_project();
    assert_eq!(resources(&config).unwrap(), vec!["docs", "posts"]);
}

#[test]
fn test_resource_contents() {
    let (_dir, config) = sample_project();
    let names = resources(&config).unwrap();
    let contents = resource_contents(&config, &names).unwrap();
    assert_eq!(contents["posts"], vec!["hello", "world"]);
    assert_eq!(contents["docs"], vec!["intro"]);
}

#[test]
fn test_public_pages() {
    let (_dir, config) = sample_project();
    let names = resources(&config).unwrap();
    assert_eq!(
        public_pages(&config, &names).unwrap(),
        vec!["about", "contact", "guides/setup"]
    );
}

#[test]
fn test_empty_project() {
    let dir = TempDir::new().unwrap();
    let config = ProjectConfig::new(dir.path(), Settings::default()).unwrap();
    assert!(resources(&config).unwrap().is_empty());
    assert!(public_pages(&config, &[]).unwrap().is_empty());
}

#[test]
fn test_items() {
    let (_dir, config) = sample_project();

    let menu = menu_items(&config, true).unwrap();
    assert!(menu.with_content);
    assert_eq!(menu.resources, vec!["docs", "posts"]);

    let items = no_page_items(&config, "https://example.com/").unwrap();
    assert_eq!(items.base_url, "https://example.com");
    assert_eq!(items.pages.len(), 3);
    assert_eq!(items.contents["posts"].len(), 2);
}

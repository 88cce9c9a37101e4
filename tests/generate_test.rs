use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use kiln::config::{parse_settings, ProjectConfig, Settings};
use kiln::css::CssLib;
use kiln::data::{MenuItems, MetadataType, NoPageItems, PageLanguage, ThemeData, ThemeKind};
use kiln::error::Error;
use kiln::fs::{FileSystem, MemoryFs, OsFs};
use kiln::generate::{ContentTemplate, Generator, ProjectOptions};
use kiln::renderer::MiniJinjaRenderer;
use kiln::resources::Bundle;
use tempfile::TempDir;

fn workdir() -> ProjectConfig {
    ProjectConfig::new("/work", Settings::default()).unwrap()
}

fn options(kind: ThemeKind, css_lib: CssLib) -> ProjectOptions {
    ProjectOptions {
        name: "site".into(),
        theme: ThemeData::new(kind, "site_theme", css_lib),
    }
}

fn read(fs: &MemoryFs, path: &str) -> String {
    fs.read_to_string(Path::new(path))
        .unwrap_or_else(|| panic!("{} was not written", path))
}

#[test_log::test]
fn test_init_blank_project() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);

    let project = generator
        .init_project(&workdir(), &options(ThemeKind::Blank, CssLib::TailwindCss))
        .unwrap();
    assert_eq!(project.root(), Path::new("/work/site"));

    for file in [
        "/work/site/.env.production",
        "/work/site/kiln.json",
        "/work/site/config/defaults.js.ts",
        "/work/site/config/externals.js.ts",
        "/work/site/config/website.js.ts",
        "/work/site/config/menu.js.ts",
        "/work/site/src/routes/+page.svelte",
        "/work/site/src/routes/+page.ts",
        "/work/site/src/routes/+layout.svelte",
        "/work/site/src/app.css",
        "/work/site/tailwind.config.cjs",
        "/work/site/package.json",
        "/work/site/themes/site_theme/theme.config.js",
        "/work/site/themes/site_theme/partials/Hero.svelte",
    ] {
        assert!(fs.read(Path::new(file)).is_some(), "{} missing", file);
    }
    for dir in [
        "/work/site/content",
        "/work/site/static",
        "/work/site/themes/site_theme/components",
    ] {
        assert!(fs.dirs().contains(&PathBuf::from(dir)), "{} missing", dir);
    }

    let settings = parse_settings(&read(&fs, "/work/site/kiln.json")).unwrap();
    assert_eq!(
        settings.theme.active,
        Some(ThemeData::new(ThemeKind::Blank, "site_theme", CssLib::TailwindCss))
    );
    assert!(read(&fs, "/work/site/src/routes/+page.svelte").contains("site_theme/partials/Hero"));
    assert!(!read(&fs, "/work/site/config/menu.js.ts").contains("{%"));
}

#[test]
fn test_init_with_external_theme() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);

    generator
        .init_project(&workdir(), &options(ThemeKind::Existing, CssLib::Bootstrap))
        .unwrap();

    assert!(!fs.exists(Path::new("/work/site/themes")));
    assert!(!read(&fs, "/work/site/src/routes/+page.svelte").contains("Hero"));
    assert!(fs.exists(Path::new("/work/site/src/_variables.scss")));
}

#[test]
fn test_new_theme_project() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);

    generator
        .new_theme(&workdir(), "lab", "aurora", CssLib::VanillaCss)
        .unwrap();

    assert!(fs.exists(Path::new("/work/lab/themes/aurora/theme.config.js")));
    assert!(fs.exists(Path::new("/work/lab/themes/aurora/partials")));
    assert!(!fs.exists(Path::new("/work/lab/themes/aurora/partials/Hero.svelte")));
    assert!(!read(&fs, "/work/lab/src/routes/+page.svelte").contains("Hero"));
}

#[test]
fn test_resource_metadata_and_content() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let project = ProjectConfig::new("/site", Settings::default()).unwrap();

    generator.new_resource(&project, "posts").unwrap();
    for file in [
        "/site/src/routes/posts/+page.svelte",
        "/site/src/routes/posts/+page.ts",
        "/site/src/routes/posts/[slug=string]/+page.svelte",
        "/site/src/routes/posts/[slug=string]/+layout.svelte",
        "/site/src/lib/loadPosts.ts",
        "/site/src/params/string.js",
        "/site/src/routes/api/v1/posts/+server.ts",
        "/site/src/routes/api/v1/posts/[slug=string]/+server.ts",
    ] {
        assert!(fs.read(Path::new(file)).is_some(), "{} missing", file);
    }
    assert!(fs.exists(Path::new("/site/content/posts")));

    generator
        .add_metadata(&project, "posts", "category", MetadataType::List)
        .unwrap();
    let api = read(&fs, "/site/src/routes/api/v1/posts/category/[slug=generic]/+server.ts");
    assert!(api.contains("list of 'category'"));
    assert!(api.contains("loadPostsCategory.ts"));
    assert!(fs.exists(Path::new("/site/src/lib/loadPostsCategory.ts")));

    generator
        .new_content(&project, "posts", "first-post", ContentTemplate::Sample)
        .unwrap();
    assert!(read(&fs, "/site/content/posts/first-post/index.svx").contains("title: First Post"));
}

#[test]
fn test_missing_resource() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let project = ProjectConfig::new("/site", Settings::default()).unwrap();

    let err = generator
        .add_metadata(&project, "posts", "tags", MetadataType::Single)
        .unwrap_err();
    assert!(matches!(err, Error::ArtifactNotFound { .. }));

    let err = generator
        .new_content(&project, "posts", "hello", ContentTemplate::Blank)
        .unwrap_err();
    assert!(matches!(err, Error::ArtifactNotFound { .. }));
    assert!(fs.files().is_empty());
}

#[test]
fn test_pages() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let project = ProjectConfig::new("/site", Settings::default()).unwrap();

    generator.new_page(&project, "about", PageLanguage::Svelte).unwrap();
    generator.new_page(&project, "faq", PageLanguage::Markdown).unwrap();

    assert!(fs.exists(Path::new("/site/src/routes/about/+page.svelte")));
    assert!(fs.exists(Path::new("/site/src/routes/about/+page.ts")));
    assert!(fs.exists(Path::new("/site/src/routes/faq/+page.svx")));
    assert!(!fs.exists(Path::new("/site/src/routes/faq/+page.ts")));
}

#[test]
fn test_menu_and_xml() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let project = ProjectConfig::new("/site", Settings::default()).unwrap();

    let mut contents = IndexMap::new();
    contents.insert("posts".to_string(), vec!["hello".to_string()]);

    generator
        .generate_menu(
            &project,
            MenuItems {
                resources: vec!["posts".into()],
                contents: contents.clone(),
                with_content: true,
            },
        )
        .unwrap();
    let menu = read(&fs, "/site/config/menu.js.ts");
    assert!(menu.contains("url: '/posts'"));
    assert!(menu.contains("url: '/posts/hello'"));

    generator
        .generate_xml(
            &project,
            "site",
            NoPageItems {
                base_url: "https://example.com".into(),
                resources: vec!["posts".into()],
                contents,
                pages: vec!["about".into()],
            },
        )
        .unwrap();
    let sitemap = read(&fs, "/site/static/sitemap.xml");
    assert!(sitemap.contains("https://example.com/about/"));
    assert!(sitemap.contains("https://example.com/posts/hello/"));
    assert!(fs.exists(Path::new("/site/static/rss.xml")));
}

#[test]
fn test_xml_rejects_bad_url() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let project = ProjectConfig::new("/site", Settings::default()).unwrap();

    let items = NoPageItems {
        base_url: "not a url".into(),
        ..Default::default()
    };
    assert!(matches!(
        generator.generate_xml(&project, "site", items),
        Err(Error::OptionNotValid { .. })
    ));
    assert!(fs.files().is_empty());
}

#[test]
fn test_init_on_disk() {
    let dir = TempDir::new().unwrap();
    let bundle = Bundle::embedded();
    let fs = OsFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let workdir = ProjectConfig::new(dir.path(), Settings::default()).unwrap();

    let project = generator
        .init_project(&workdir, &options(ThemeKind::Styled, CssLib::Scss))
        .unwrap();
    generator.new_resource(&project, "posts").unwrap();

    let root = dir.path().join("site");
    assert!(root.join("src/app.scss").is_file());
    assert!(root.join("themes/site_theme/partials/Footer.svelte").is_file());
    assert!(root.join("src/routes/posts/+page.svelte").is_file());

    let reloaded = ProjectConfig::from_root(&root).unwrap();
    assert_eq!(
        reloaded.active_theme().map(|t| t.kind),
        Some(ThemeKind::Styled)
    );
}

#[test]
fn test_names_cannot_leave_the_project() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let project = ProjectConfig::new("/site", Settings::default()).unwrap();

    for name in ["../x", "../../escape", "/etc", "posts/../..", "a//b", ""] {
        assert!(
            matches!(
                generator.new_resource(&project, name),
                Err(Error::OptionNotValid { .. })
            ),
            "'{}' was accepted",
            name
        );
    }
    assert!(matches!(
        generator.new_page(&project, "../x", PageLanguage::Svelte),
        Err(Error::OptionNotValid { .. })
    ));
    assert!(fs.files().is_empty());
}

#[test]
fn test_names_are_slugified() {
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);
    let project = ProjectConfig::new("/site", Settings::default()).unwrap();

    generator.new_page(&project, "About Us", PageLanguage::Svelte).unwrap();
    assert!(fs.exists(Path::new("/site/src/routes/about-us/+page.svelte")));
    assert!(fs.exists(Path::new("/site/src/routes/about-us/+page.ts")));
    assert!(!fs.exists(Path::new("/site/src/routes/About Us")));

    generator.new_resource(&project, "Blog/Posts").unwrap();
    assert!(fs.exists(Path::new("/site/content/blog/posts")));
    assert!(fs.exists(Path::new("/site/src/lib/loadBlogPosts.ts")));

    generator
        .new_content(&project, "Blog/Posts", "My First Post", ContentTemplate::Blank)
        .unwrap();
    assert!(fs.exists(Path::new("/site/content/blog/posts/my-first-post/index.svx")));

    generator
        .add_metadata(&project, "blog/posts", "Main Category", MetadataType::Single)
        .unwrap();
    assert!(fs.exists(Path::new(
        "/site/src/routes/blog/posts/main-category/+page.svelte"
    )));
}

//! Text helpers exposed to templates.
//! Every helper is a pure function of its arguments, except `today` and
//! `current_year` which read the local clock.

use chrono::{Datelike, Local};
use cruet::Inflector;
use regex::Regex;
use std::sync::OnceLock;

/// A named helper function a builder can expose to its templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Helper {
    Capitalize,
    ToTitle,
    ToSlug,
    ToSnakeCase,
    ToVariableName,
    ToLibFile,
    ReplaceIfNested,
    ToUrl,
    Trimmed,
    PlusOne,
    Sum,
    StringsJoin,
    Today,
    CurrentYear,
}

impl Helper {
    /// Name under which templates call the helper.
    pub fn name(&self) -> &'static str {
        match self {
            Helper::Capitalize => "capitalize",
            Helper::ToTitle => "to_title",
            Helper::ToSlug => "to_slug",
            Helper::ToSnakeCase => "to_snake_case",
            Helper::ToVariableName => "to_variable_name",
            Helper::ToLibFile => "to_lib_file",
            Helper::ReplaceIfNested => "replace_if_nested",
            Helper::ToUrl => "to_url",
            Helper::Trimmed => "trimmed",
            Helper::PlusOne => "plus_one",
            Helper::Sum => "sum",
            Helper::StringsJoin => "strings_join",
            Helper::Today => "today",
            Helper::CurrentYear => "current_year",
        }
    }
}

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"))
}

/// `getting-started` becomes `Getting Started`.
pub fn capitalize(s: &str) -> String {
    s.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Title used in front matter; same casing rules as [`capitalize`].
pub fn to_title(s: &str) -> String {
    capitalize(s)
}

/// `Hello, World!` becomes `hello-world`.
pub fn to_slug(s: &str) -> String {
    non_alphanumeric()
        .replace_all(&s.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// lowerCamelCase identifier, e.g. `blog-posts` becomes `blogPosts`.
pub fn to_variable_name(s: &str) -> String {
    s.to_camel_case()
}

/// `posts` becomes `loadPosts.ts`.
pub fn to_lib_file(s: &str) -> String {
    format!("load{}.ts", replace_if_nested(s).to_pascal_case())
}

/// Flattens nested resource names: `blog/posts` becomes `blog_posts`.
pub fn replace_if_nested(s: &str) -> String {
    s.replace('/', "_")
}

pub fn to_url(s: &str) -> String {
    format!("/{}", trimmed(s))
}

/// Strips surrounding double quotes.
pub fn trimmed(s: &str) -> String {
    s.trim_matches('"').to_string()
}

pub fn plus_one(n: i64) -> i64 {
    n + 1
}

pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

pub fn strings_join(items: &[String], sep: &str) -> String {
    items.join(sep)
}

/// Local date as `DD-Mon-YYYY`.
pub fn today() -> String {
    Local::now().format("%d-%b-%Y").to_string()
}

pub fn current_year() -> i64 {
    i64::from(Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("getting-started"), "Getting Started");
        assert_eq!(capitalize("posts"), "Posts");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("site_theme"), "Site_theme");
    }

    #[test]
    fn test_to_slug() {
        assert_eq!(to_slug("Hello, World!"), "hello-world");
        assert_eq!(to_slug("  my first post "), "my-first-post");
    }

    #[test]
    fn test_names() {
        assert_eq!(to_variable_name("blog-posts"), "blogPosts");
        assert_eq!(to_snake_case("publishedAt"), "published_at");
        assert_eq!(to_lib_file("posts"), "loadPosts.ts");
        assert_eq!(to_lib_file("blog/posts"), "loadBlogPosts.ts");
        assert_eq!(replace_if_nested("blog/posts"), "blog_posts");
    }

    #[test]
    fn test_url_and_numbers() {
        assert_eq!(to_url("\"about\""), "/about");
        assert_eq!(trimmed("\"x\""), "x");
        assert_eq!(plus_one(1), 2);
        assert_eq!(sum(2, 3), 5);
        assert_eq!(strings_join(&["a".into(), "b".into()], "/"), "a/b");
    }

    #[test]
    fn test_dates() {
        assert_eq!(today().len(), 11);
        assert!(current_year() >= 2024);
    }
}

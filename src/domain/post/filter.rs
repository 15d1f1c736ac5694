// src/domain/post/filter.rs
//! Listing predicates and page window, consumed by every read repository.
use crate::domain::post::entity::Post;
use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: u32 = 6;
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub published_only: bool,
    /// Case-insensitive substring matched against title, content, excerpt
    /// and the stored tag string.
    pub search: Option<String>,
    /// Case-insensitive exact match.
    pub category: Option<String>,
    pub featured_only: bool,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl PostFilter {
    /// Filter used by the public listing.
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = non_blank(search);
        self
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = non_blank(category);
        self
    }

    /// Only the literal `"true"` turns the featured restriction on.
    pub fn with_featured_flag(mut self, featured: Option<&str>) -> Self {
        self.featured_only = featured == Some("true");
        self
    }

    pub fn search_needle(&self) -> Option<String> {
        self.search.as_deref().map(str::to_lowercase)
    }

    /// `LIKE` pattern for the search text with wildcards escaped.
    pub fn search_like_pattern(&self) -> Option<String> {
        self.search_needle().map(|needle| {
            let mut escaped = String::with_capacity(needle.len() + 2);
            escaped.push('%');
            for ch in needle.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(ch);
            }
            escaped.push('%');
            escaped
        })
    }

    pub fn category_needle(&self) -> Option<String> {
        self.category.as_deref().map(str::to_lowercase)
    }

    pub fn matches(&self, post: &Post) -> bool {
        if self.published_only && !post.published {
            return false;
        }
        if self.featured_only && !post.featured {
            return false;
        }
        if let Some(category) = self.category_needle() {
            let same = post
                .category
                .as_ref()
                .is_some_and(|c| c.as_str().to_lowercase() == category);
            if !same {
                return false;
            }
        }
        if let Some(needle) = self.search_needle() {
            let tags = post.tags.to_storage();
            let haystacks = [
                post.title.as_str(),
                post.content.as_str(),
                post.excerpt.as_str(),
                tags.as_str(),
            ];
            return haystacks
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }
        true
    }
}

/// Listing order: newest publication first, then newest creation, then id.
/// Posts without `published_at` sort last.
pub fn listing_order(a: &Post, b: &Post) -> Ordering {
    let published = match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    published
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

/// 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Page 0 becomes 1; a page size outside `1..=50` falls back to the
    /// default instead of being clamped.
    pub fn new(page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let per_page = if (1..=MAX_PAGE_SIZE).contains(&per_page) {
            per_page
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self { page, per_page }
    }

    /// Lenient parsing of raw query values; anything unparsable uses the
    /// default.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<u32>().ok());
        let defaults = Self::default();
        Self::new(
            parse(page).unwrap_or(defaults.page),
            parse(limit).unwrap_or(defaults.per_page),
        )
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn per_page(self) -> u32 {
        self.per_page
    }

    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn total_pages(self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

//! Category filtering for the portfolio and free-text search for the blog.
//!
//! Both are a [`Query`] over a slice of records. [`filter`] keeps the records
//! a query accepts in their original order; an unmatched query gives an empty
//! result, never an error.

use std::fmt;

use crate::content::{featured_post, recent_posts, BlogPost, Category, Project, BLOG_POSTS};

pub trait Query<T> {
    /// True when the query accepts every record and filtering can be skipped.
    fn is_unfiltered(&self) -> bool;

    fn matches(&self, record: &T) -> bool;
}

pub fn filter<'a, T, Q>(records: &'a [T], query: &Q) -> Vec<&'a T>
where
    Q: Query<T> + fmt::Debug,
{
    if query.is_unfiltered() {
        return records.iter().collect();
    }
    let matched = records
        .iter()
        .filter(|r| query.matches(r))
        .collect::<Vec<_>>();
    log::debug!(
        "{:?} matched {} of {} records",
        query,
        matched.len(),
        records.len()
    );
    matched
}

/// Case-insensitive substring search over a post's title, excerpt and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    lowered: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn hit(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.lowered)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Query<BlogPost> for SearchTerm {
    fn is_unfiltered(&self) -> bool {
        self.is_empty()
    }

    fn matches(&self, post: &BlogPost) -> bool {
        self.hit(post.title) || self.hit(post.excerpt) || post.tags.iter().any(|t| self.hit(t))
    }
}

/// The portfolio's category buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// A label outside the category set; accepts nothing.
    Unmatched,
}

impl CategoryFilter {
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::FullStack),
        CategoryFilter::Only(Category::Frontend),
        CategoryFilter::Only(Category::Backend),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
            CategoryFilter::Unmatched => "",
        }
    }

    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == "All" {
            return CategoryFilter::All;
        }
        Category::from_label(label)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::Unmatched)
    }
}

impl Query<Project> for CategoryFilter {
    fn is_unfiltered(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => project.category == *c,
            CategoryFilter::Unmatched => false,
        }
    }
}

pub fn search_posts<'a>(posts: &'a [BlogPost], term: &SearchTerm) -> Vec<&'a BlogPost> {
    filter(posts, term)
}

pub fn filter_projects<'a>(projects: &'a [Project], category: CategoryFilter) -> Vec<&'a Project> {
    filter(projects, &category)
}

/// What the blog listing shows for a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Only set while no search is active.
    pub featured: Option<&'static BlogPost>,
    pub heading: String,
    pub posts: Vec<&'static BlogPost>,
    pub searching: bool,
}

pub fn listing(term: &SearchTerm) -> Listing {
    if term.is_empty() {
        return Listing {
            featured: featured_post(),
            heading: "Recent Articles".to_string(),
            posts: recent_posts(),
            searching: false,
        };
    }
    let posts = search_posts(BLOG_POSTS, term);
    Listing {
        featured: None,
        heading: format!("Search Results ({})", posts.len()),
        posts,
        searching: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BLOG_POSTS, PROJECTS};

    fn post_ids(posts: &[&BlogPost]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    fn project_ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    fn is_subsequence(sub: &[u32], full: &[u32]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == s))
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let res = search_posts(BLOG_POSTS, &SearchTerm::new(""));
        assert_eq!(res.len(), BLOG_POSTS.len());
        assert_eq!(post_ids(&res), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        for q in ["typescript", "TYPESCRIPT", "TypeScript", "tYpEsCrIpT"] {
            let res = search_posts(BLOG_POSTS, &SearchTerm::new(q));
            assert_eq!(post_ids(&res), vec![3], "query {q}");
        }
    }

    #[test]
    fn test_search_matches_tag_only() {
        for (q, id) in [("javascript", 1), ("technology", 2), ("backend", 5)] {
            let res = search_posts(BLOG_POSTS, &SearchTerm::new(q));
            assert_eq!(post_ids(&res), vec![id], "query {q}");
            let post = res[0];
            assert!(!post.title.to_lowercase().contains(q));
            assert!(!post.excerpt.to_lowercase().contains(q));
        }
    }

    #[test]
    fn test_search_matches_excerpt() {
        let res = search_posts(BLOG_POSTS, &SearchTerm::new("webassembly"));
        assert_eq!(post_ids(&res), vec![2]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let res = search_posts(BLOG_POSTS, &SearchTerm::new("haskell"));
        assert!(res.is_empty());
    }

    #[test]
    fn test_search_preserves_order() {
        let all = post_ids(&BLOG_POSTS.iter().collect::<Vec<_>>());
        for q in ["a", "design", "react", "css", "e", "api"] {
            let res = search_posts(BLOG_POSTS, &SearchTerm::new(q));
            assert!(is_subsequence(&post_ids(&res), &all), "query {q}");
        }
    }

    #[test]
    fn test_search_is_idempotent() {
        for q in ["react", "design", "Frontend", ""] {
            let term = SearchTerm::new(q);
            let once: Vec<BlogPost> = search_posts(BLOG_POSTS, &term)
                .into_iter()
                .copied()
                .collect();
            let twice = search_posts(&once, &term);
            assert_eq!(twice.len(), once.len());
            assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn test_listing_without_search() {
        let view = listing(&SearchTerm::default());
        assert_eq!(view.featured.map(|p| p.id), Some(1));
        assert_eq!(view.heading, "Recent Articles");
        assert_eq!(post_ids(&view.posts), vec![2, 3, 4, 5, 6]);
        assert!(!view.searching);
    }

    #[test]
    fn test_listing_search_hides_featured() {
        let view = listing(&SearchTerm::new("react"));
        assert_eq!(view.featured, None);
        assert_eq!(view.heading, "Search Results (1)");
        assert_eq!(post_ids(&view.posts), vec![1]);
        assert!(view.searching);
    }

    #[test]
    fn test_listing_search_without_match() {
        let view = listing(&SearchTerm::new("haskell"));
        assert_eq!(view.featured, None);
        assert_eq!(view.heading, "Search Results (0)");
        assert!(view.posts.is_empty());
        assert!(view.searching);
    }

    #[test]
    fn test_listing_from_tag_button() {
        let view = listing(&SearchTerm::new("Backend"));
        assert_eq!(view.featured, None);
        assert_eq!(view.heading, "Search Results (1)");
        assert_eq!(post_ids(&view.posts), vec![5]);
    }

    #[test]
    fn test_category_all_returns_everything() {
        let res = filter_projects(PROJECTS, CategoryFilter::All);
        assert_eq!(project_ids(&res), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(CategoryFilter::from_label(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
    }

    #[test]
    fn test_category_exact_match() {
        let full = filter_projects(PROJECTS, CategoryFilter::from_label("Full Stack"));
        assert_eq!(project_ids(&full), vec![1, 2, 5]);

        let front = filter_projects(PROJECTS, CategoryFilter::from_label("Frontend"));
        assert_eq!(project_ids(&front), vec![3, 6]);

        let back = filter_projects(PROJECTS, CategoryFilter::Only(Category::Backend));
        assert_eq!(project_ids(&back), vec![4]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let f = CategoryFilter::from_label("Mobile");
        assert_eq!(f, CategoryFilter::Unmatched);
        assert!(filter_projects(PROJECTS, f).is_empty());

        // equality, not substring or case folding
        assert!(filter_projects(PROJECTS, CategoryFilter::from_label("frontend")).is_empty());
    }

    #[test]
    fn test_category_filter_is_idempotent() {
        for choice in CategoryFilter::CHOICES {
            let once: Vec<Project> = filter_projects(PROJECTS, choice)
                .into_iter()
                .copied()
                .collect();
            let twice = filter_projects(&once, choice);
            assert_eq!(twice.into_iter().copied().collect::<Vec<_>>(), once);
        }
    }

    #[test]
    fn test_choice_labels() {
        let labels: Vec<&str> = CategoryFilter::CHOICES.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All", "Full Stack", "Frontend", "Backend"]);
        for choice in CategoryFilter::CHOICES {
            assert_eq!(CategoryFilter::from_label(choice.label()), choice);
        }
    }
}

//! The site's content store.
//!
//! Every record is compiled into the binary (and the wasm bundle) so both the
//! server render and the hydrated client filter over the same data.

use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub brand: &'static str,
    pub url: &'static str,
    pub blog_description: &'static str,
    pub email: &'static str,
    pub author: Author,
}

pub static SITE: Site = Site {
    brand: "Developer",
    url: "https://developer.com",
    blog_description: "Thoughts, tutorials, and insights about web development, technology, and the ever-evolving world of software engineering.",
    email: "hello@developer.com",
    author: Author {
        name: "Alex Johnson",
        initials: "AJ",
        role: "Full-stack Developer",
        bio: "Full-stack developer passionate about creating beautiful, functional, and user-centered digital experiences.",
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Home",
        href: "/",
    },
    NavLink {
        name: "Portfolio",
        href: "/portfolio",
    },
    NavLink {
        name: "Blog",
        href: "/blog",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

impl SocialKind {
    /// Icon class for the devicon / extra icon fonts loaded by the shell.
    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "devicon-github-plain",
            SocialKind::LinkedIn => "devicon-linkedin-plain",
            SocialKind::Email => "extra-email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub kind: SocialKind,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: "#",
        kind: SocialKind::GitHub,
    },
    SocialLink {
        name: "LinkedIn",
        href: "#",
        kind: SocialKind::LinkedIn,
    },
    SocialLink {
        name: "Email",
        href: "mailto:hello@developer.com",
        kind: SocialKind::Email,
    },
];

pub static SKILLS: &[&str] = &[
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "PostgreSQL",
    "Docker",
    "AWS",
    "GraphQL",
    "Next.js",
    "Tailwind CSS",
];

/// Portfolio categories. The set is closed; the "All" choice is not a
/// category but a filter, see [`crate::filter::CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FullStack,
    Frontend,
    Backend,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::FullStack, Category::Frontend, Category::Backend];

    pub fn label(&self) -> &'static str {
        match self {
            Category::FullStack => "Full Stack",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: Category,
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform built with React, Node.js, and PostgreSQL. Features include user authentication, payment processing, inventory management, and admin dashboard.",
        tech: &["React", "Node.js", "PostgreSQL", "Stripe", "Redux"],
        category: Category::FullStack,
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "Collaborative task management application with real-time updates, team collaboration features, and project tracking capabilities.",
        tech: &["Next.js", "Socket.io", "MongoDB", "Tailwind CSS"],
        category: Category::FullStack,
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 3,
        title: "Weather Dashboard",
        description: "A beautiful weather dashboard that provides detailed weather information with interactive charts and location-based forecasts.",
        tech: &["React", "Chart.js", "Weather API", "CSS3"],
        category: Category::Frontend,
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 4,
        title: "REST API Service",
        description: "A robust REST API service with authentication, rate limiting, caching, and comprehensive documentation built with Node.js and Express.",
        tech: &["Node.js", "Express", "MongoDB", "JWT", "Redis"],
        category: Category::Backend,
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 5,
        title: "Personal Finance Tracker",
        description: "A comprehensive personal finance tracking application with budget planning, expense categorization, and financial insights.",
        tech: &["Vue.js", "Python", "Django", "Chart.js"],
        category: Category::FullStack,
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 6,
        title: "Component Library",
        description: "A reusable React component library with TypeScript support, comprehensive documentation, and Storybook integration.",
        tech: &["React", "TypeScript", "Storybook", "Rollup"],
        category: Category::Frontend,
        demo_url: "#",
        github_url: "#",
    },
];

/// Teaser cards on the home page. Shorter copy than the portfolio entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProject {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub static FEATURED_PROJECTS: &[FeaturedProject] = &[
    FeaturedProject {
        id: 1,
        title: "E-commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and PostgreSQL",
        tech: &["React", "Node.js", "PostgreSQL"],
    },
    FeaturedProject {
        id: 2,
        title: "Task Management App",
        description: "Collaborative task management tool with real-time updates",
        tech: &["Next.js", "Socket.io", "MongoDB"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Markdown body
    pub content: &'static str,
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

const PLACEHOLDER_CONTENT: &str = "Full content would go here...";

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Building Scalable React Applications: Best Practices and Patterns",
        excerpt: "Learn how to structure large React applications for maintainability and performance. We'll explore component architecture, state management, and optimization techniques.",
        content: include_str!("../posts/building-scalable-react-applications.md"),
        date: "2024-03-15",
        read_time: "8 min read",
        tags: &["React", "JavaScript", "Architecture"],
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "The Future of Web Development: Exploring Modern Technologies",
        excerpt: "A deep dive into emerging web technologies including WebAssembly, Edge Computing, and the Jamstack architecture that are shaping the future of web development.",
        content: PLACEHOLDER_CONTENT,
        date: "2024-03-10",
        read_time: "12 min read",
        tags: &["Web Development", "Technology", "Future"],
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "TypeScript Tips and Tricks for Better Developer Experience",
        excerpt: "Discover advanced TypeScript patterns and utilities that can improve your development workflow and help you write more robust applications.",
        content: PLACEHOLDER_CONTENT,
        date: "2024-03-05",
        read_time: "6 min read",
        tags: &["TypeScript", "Development", "Tips"],
        featured: false,
    },
    BlogPost {
        id: 4,
        title: "Database Design Principles for Modern Applications",
        excerpt: "Understanding database design patterns, normalization, and performance optimization techniques for building efficient data-driven applications.",
        content: PLACEHOLDER_CONTENT,
        date: "2024-02-28",
        read_time: "10 min read",
        tags: &["Database", "PostgreSQL", "Performance"],
        featured: false,
    },
    BlogPost {
        id: 5,
        title: "API Design Best Practices: Creating Developer-Friendly Interfaces",
        excerpt: "Learn how to design RESTful APIs that are intuitive, well-documented, and easy to integrate. Covering authentication, versioning, and error handling.",
        content: PLACEHOLDER_CONTENT,
        date: "2024-02-20",
        read_time: "9 min read",
        tags: &["API", "REST", "Backend"],
        featured: false,
    },
    BlogPost {
        id: 6,
        title: "CSS Grid vs Flexbox: When to Use Each Layout Method",
        excerpt: "A comprehensive comparison of CSS Grid and Flexbox, with practical examples and use cases to help you choose the right layout method for your projects.",
        content: PLACEHOLDER_CONTENT,
        date: "2024-02-15",
        read_time: "7 min read",
        tags: &["CSS", "Layout", "Frontend"],
        featured: false,
    },
];

const RECENT_LIMIT: usize = 5;

impl BlogPost {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// `3/15/2024`, as shown on listing cards.
    pub fn short_date(&self) -> String {
        use chrono::Datelike;
        match self.parsed_date() {
            Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
            None => self.date.to_string(),
        }
    }

    /// `March 15, 2024`, as shown on the article page.
    pub fn long_date(&self) -> String {
        match self.parsed_date() {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => self.date.to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

/// The first post flagged as featured.
pub fn featured_post() -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.featured)
}

/// Non-featured posts in store order, capped for the "Recent Articles" grid.
pub fn recent_posts() -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|p| !p.featured)
        .take(RECENT_LIMIT)
        .collect()
}

/// Every tag across all posts, deduplicated, in first-seen order.
pub fn all_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in BLOG_POSTS.iter().flat_map(|p| p.tags.iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

pub fn find_post(id: u32) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let post_ids: HashSet<u32> = BLOG_POSTS.iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), BLOG_POSTS.len());

        let project_ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(project_ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_at_most_one_featured_post() {
        let featured = BLOG_POSTS.iter().filter(|p| p.featured).count();
        assert!(featured <= 1);

        let post = featured_post().expect("store has a featured post");
        assert_eq!(post.id, 1);
    }

    #[test]
    fn test_recent_posts_skip_featured() {
        let recent = recent_posts();
        assert_eq!(recent.len(), 5);
        assert!(recent.iter().all(|p| !p.featured));
        let ids: Vec<u32> = recent.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_all_tags_deduplicated_in_order() {
        let tags = all_tags();
        let unique: HashSet<&str> = tags.iter().copied().collect();
        assert_eq!(unique.len(), tags.len());
        assert_eq!(&tags[..3], &["React", "JavaScript", "Architecture"]);
        assert_eq!(tags.last(), Some(&"Frontend"));
        // 6 posts with 3 distinct tags each
        assert_eq!(tags.len(), 18);
    }

    #[test]
    fn test_find_post() {
        assert_eq!(find_post(3).map(|p| p.title), Some(BLOG_POSTS[2].title));
        assert!(find_post(0).is_none());
        assert!(find_post(42).is_none());
    }

    #[test]
    fn test_date_formats() {
        let post = find_post(1).unwrap();
        assert_eq!(post.short_date(), "3/15/2024");
        assert_eq!(post.long_date(), "March 15, 2024");

        let odd = BlogPost {
            date: "sometime",
            ..*post
        };
        assert_eq!(odd.short_date(), "sometime");
        assert_eq!(odd.long_date(), "sometime");
    }

    #[test]
    fn test_category_labels_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(Category::from_label("All"), None);
        assert_eq!(Category::from_label("frontend"), None);
        assert_eq!(Category::FullStack.to_string(), "Full Stack");
    }

    #[test]
    fn test_featured_post_body_is_markdown() {
        let post = featured_post().unwrap();
        assert!(post.content.starts_with("# Introduction"));
        assert!(post.content.contains("```jsx"));
    }
}

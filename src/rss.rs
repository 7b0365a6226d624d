use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
};

use crate::content::{BlogPost, SITE};
use crate::highlight::render_markdown;

pub const FEED_PATH: &str = "rss.xml";

fn post_item(p: &BlogPost) -> Item {
    let link = format!("{}{}", SITE.url, p.href());
    let guid = GuidBuilder::default().value(&link).permalink(true).build();
    let author = format!("{} ({})", SITE.email, SITE.author.name);
    let categories = p
        .tags
        .iter()
        .map(|t| CategoryBuilder::default().name(t.to_string()).build())
        .collect::<Vec<_>>();

    let mut item = ItemBuilder::default();
    item.title(p.title.to_string())
        .description(p.excerpt.to_string())
        .author(author)
        .link(link)
        .guid(guid)
        .categories(categories)
        .content(render_markdown(p.content));
    if let Some(published) = p.parsed_date().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        item.pub_date(published.and_utc().to_rfc2822());
    }
    item.build()
}

pub fn build_channel(posts: &[BlogPost]) -> Channel {
    let items = posts.iter().map(post_item).collect::<Vec<_>>();

    let feed_url = format!("{}/{}", SITE.url, FEED_PATH);
    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(feed_url);
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{}'s Blog", SITE.author.name))
        .description(SITE.blog_description)
        .link(format!("{}/blog", SITE.url))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .last_build_date(env!("BUILD_TIME").to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BLOG_POSTS;

    #[test]
    fn test_one_item_per_post() {
        let channel = build_channel(BLOG_POSTS);
        assert_eq!(channel.items().len(), BLOG_POSTS.len());
        assert_eq!(channel.title(), "Alex Johnson's Blog");
        assert_eq!(channel.link(), "https://developer.com/blog");
    }

    #[test]
    fn test_item_fields() {
        let channel = build_channel(BLOG_POSTS);
        let item = &channel.items()[0];
        assert_eq!(item.link(), Some("https://developer.com/blog/1"));
        let guid = item.guid().expect("item has a guid");
        assert!(guid.is_permalink());
        assert_eq!(guid.value(), "https://developer.com/blog/1");
        assert_eq!(item.pub_date(), Some("Fri, 15 Mar 2024 00:00:00 +0000"));
        let tags: Vec<&str> = item.categories().iter().map(|c| c.name()).collect();
        assert_eq!(tags, vec!["React", "JavaScript", "Architecture"]);
        assert!(item
            .content()
            .is_some_and(|c| c.contains("<h1>Introduction</h1>")));
    }

    #[test]
    fn test_serializes_to_rss() {
        let xml = build_channel(BLOG_POSTS).to_string();
        assert!(xml.contains("<rss"));
        assert!(xml.contains("atom:link"));
        assert!(xml.contains("TypeScript Tips and Tricks"));
    }
}

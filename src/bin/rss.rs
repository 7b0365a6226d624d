use std::fs::File;
use std::path::Path;

use portfolio_site::content::BLOG_POSTS;
use portfolio_site::rss::{build_channel, FEED_PATH};

fn main() {
    let channel = build_channel(BLOG_POSTS);

    let path = Path::new("public").join(FEED_PATH);
    let file = File::create(&path).expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
    println!("wrote {} items to {}", channel.items().len(), path.display());
}

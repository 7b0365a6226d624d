fn main() {
    // RFC 2822 so the feed can use it as lastBuildDate directly
    let build_time = chrono::Utc::now().to_rfc2822();

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}

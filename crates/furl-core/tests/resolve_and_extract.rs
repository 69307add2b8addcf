//! End-to-end: resolve a request, then query the context through the public API.

use furl_core::sanitize::{filter, normalize};
use furl_core::{RequestSnapshot, UrlContext, UrlPart, Value, DEFAULT_ACTION};
use std::collections::HashMap;

fn resolve(url: &str) -> UrlContext {
    let request = RequestSnapshot::from_url(url, "GET").expect("valid request url");
    UrlContext::init(&request, None, true)
}

#[test]
fn slugs_never_contain_empty_entries() {
    let ctx = resolve("https://site.test//a///b//");
    assert_eq!(ctx.slugs(), ["a", "b"]);
    assert_eq!(ctx.get_slugs(), ["/a", "/b"]);
    assert!(ctx.get_slugs().iter().all(|s| s.len() > 1));
}

#[test]
fn ids_from_slugs() {
    let ctx = resolve("https://site.test/shop/item-7");
    assert_eq!(ctx.get_id(None), 7);
    assert_eq!(ctx.get_id(Some(0)), 7);
    assert_eq!(ctx.get("id", &["0"]), Value::Int(7));
    assert_eq!(ctx.get("slug", &[]), Value::from("/"));
    assert_eq!(ctx.find_id(), Some(7));
    assert_eq!(ctx.id_found(), Some(7));

    let ctx = resolve("https://site.test/blog/post");
    assert_eq!(ctx.get_id(None), 0);
    assert_eq!(ctx.find_id(), None);

    let ctx = resolve("https://site.test/");
    assert_eq!(ctx.get_id(None), 0);
    assert_eq!(ctx.find_id(), None);
}

#[test]
fn ids_around_a_token() {
    let ctx = resolve("https://site/x/user-5/edit/");
    assert_eq!(ctx.get_id_before("edit"), Some(5));
    assert_eq!(ctx.get_id_after("edit"), None);
    assert_eq!(ctx.get_id_before("admin.edit"), Some(5));
}

#[test]
fn tokens_around_a_key() {
    let ctx = resolve("https://site/blog/tag/a/b/c/");
    assert_eq!(ctx.get_after("tag").as_deref(), Some("a.b.c"));
    assert_eq!(ctx.get_before("tag", None).as_deref(), Some("blog"));
    assert_eq!(ctx.get_url_before("tag").as_deref(), Some("https://site/blog/"));
    assert_eq!(
        ctx.get_url_after("tag", true),
        Some(UrlPart::Segments(vec!["a".into(), "b".into(), "c".into()]))
    );
    assert_eq!(ctx.get_last_word(false, true), "c");
}

#[test]
fn action_whitelist() {
    let mut ctx = resolve("https://site.test/contact");
    ctx.set_action(["home", "about"], DEFAULT_ACTION);
    assert_eq!(ctx.action(), "error404");

    let mut ctx = resolve("https://site.test/about/team");
    ctx.set_action(["home", "about"], DEFAULT_ACTION);
    assert_eq!(ctx.action(), "about");
    assert_eq!(ctx.callback(), "team");
}

#[test]
fn mismatched_base_falls_back_to_host_root() {
    let request = RequestSnapshot::from_url("https://site.test/app/page", "GET").unwrap();

    let ctx = UrlContext::init(&request, Some("https://elsewhere.test/app"), true);
    assert_eq!(ctx.base_url(), Some("https://site.test/"));

    let ctx = UrlContext::init(&request, Some("https://site.test/other"), true);
    assert_eq!(ctx.base_url(), Some("https://site.test/"));

    let ctx = UrlContext::init(&request, Some("https://site.test/app/"), true);
    assert_eq!(ctx.base_url(), Some("https://site.test/app/"));
    assert_eq!(ctx.slugs(), ["page"]);
}

#[test]
fn base_plus_slugs_rebuilds_current() {
    let request = RequestSnapshot::from_url("https://site.test/app/users/7/edit", "GET").unwrap();
    let ctx = UrlContext::init(&request, Some("https://site.test/app"), true);
    let rebuilt = format!("{}{}", ctx.domain(false), ctx.slugs().join("/"));
    assert_eq!(format!("{rebuilt}/"), ctx.current().unwrap());
}

#[test]
fn query_pairs_replace_slugs() {
    let request = RequestSnapshot::from_url("https://site.test/list?page=2", "GET").unwrap();
    let ctx = UrlContext::init(&request, None, false);
    assert_eq!(ctx.slugs(), ["page=2"]);
    assert_eq!(ctx.action(), "page=2");
    assert!(!ctx.ignore_get());

    // `&` in a request signal is HTML-escaped before tokenization.
    let request = RequestSnapshot::from_url("https://site.test/list?page=2&sort=new", "GET").unwrap();
    let ctx = UrlContext::init(&request, None, false);
    assert_eq!(ctx.slugs(), ["page=2", "amp;sort=new"]);
    assert_eq!(ctx.get_last_word(true, true), "new");
}

#[test]
fn cgi_style_signals() {
    let mut env = HashMap::new();
    env.insert("REQUEST_SCHEME".to_string(), "http".to_string());
    env.insert("HTTP_HOST".to_string(), "localhost:8080".to_string());
    env.insert("REQUEST_URI".to_string(), "/Users/Profile-12/".to_string());
    env.insert("REQUEST_METHOD".to_string(), "POST".to_string());
    env.insert("SERVER_ADDR".to_string(), "::1".to_string());

    let ctx = UrlContext::init(&env, None, true);
    assert_eq!(ctx.current(), Some("http://localhost:8080/users/profile-12/"));
    assert_eq!(ctx.method(), Some("post"));
    assert_eq!(ctx.domain(true), "http://127.0.0.1:8080/");
    assert_eq!(ctx.get("id", &[]), Value::Int(12));
}

#[test]
fn normalize_is_idempotent_on_urls() {
    for url in [
        "https://example.com/a/b?c=d&e=f#g",
        "https://example.com/(x)/[y]/z!",
        "http://user@host:8080/~me/",
    ] {
        let once = normalize(url);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn filter_keeps_url_structure() {
    assert_eq!(
        filter(Value::from("https://Example.com/Some_Path/file.html?x=1")),
        Value::from("https://example.com/some_path/file.htmlx=1")
    );
}

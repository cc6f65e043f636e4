//! End-to-end scenarios combining templates, path building and queries.

use url_builder::{ParamKey, Primitive, QueryArray, UrlBuilder};

struct TemplateCase {
    url: &'static str,
    params: Vec<(&'static str, &'static str)>,
    queries: Vec<(&'static str, i32)>,
    result: &'static str,
}

#[test]
fn test_template_interpolation() {
    let cases = vec![
        TemplateCase {
            url: "https://github.com/{user}/{repo}",
            params: vec![("user", "ikeohachidi"), ("repo", "url-builder")],
            queries: vec![("page", 1), ("limit", 40)],
            result: "https://github.com/ikeohachidi/url-builder?page=1&limit=40",
        },
        TemplateCase {
            url: "https://github.com/ikeohachidi/{repo}",
            params: vec![("repo", "url-builder")],
            queries: vec![],
            result: "https://github.com/ikeohachidi/url-builder",
        },
    ];

    for case in cases {
        let mut builder = UrlBuilder::parse(case.url).unwrap();
        for (key, value) in &case.params {
            builder.set_param(*key, *value);
        }
        for (key, value) in &case.queries {
            builder.set_query(*key, *value);
        }
        assert_eq!(builder.to_string(), case.result, "Template failed: {}", case.url);
    }
}

#[test]
fn test_build_from_scratch() {
    let mut builder = UrlBuilder::new();
    builder
        .set_host_name("github.com")
        .set_scheme("ws")
        .add_param("ikeohachidi")
        .add_params(["url-builder", "settings"])
        .set_query("hello", "world")
        .set_query("name", "chidi");

    assert_eq!(
        builder.to_string(),
        "ws://github.com/ikeohachidi/url-builder/settings?hello=world&name=chidi"
    );
    assert_eq!(builder.get_param(2usize), Some(&Primitive::from("settings")));
}

#[test]
fn test_render_without_hostname() {
    let mut builder = UrlBuilder::create(None).unwrap();
    builder
        .set_scheme("aaa")
        .add_params(["url-builder", "settings"])
        .set_query("hello", "world")
        .set_query("name", "chidi");

    assert_eq!(
        builder.to_string(),
        "aaa:///url-builder/settings?hello=world&name=chidi"
    );
}

#[test]
fn test_render_without_scheme() {
    let mut builder = UrlBuilder::new();
    builder.set_host_name("github.com").set_query("hello", "world");

    assert_eq!(builder.to_string(), "github.com?hello=world");
}

#[test]
fn test_speculative_params_across_templates() {
    // The same parameter set applied to templates that use only some of it.
    let params = vec![("user", "chidi"), ("repo", "url-builder"), ("branch", "main")];

    let templates = vec![
        ("https://github.com/{user}", "https://github.com/chidi"),
        (
            "https://github.com/{user}/{repo}/tree/{branch}",
            "https://github.com/chidi/url-builder/tree/main",
        ),
        ("https://github.com/explore", "https://github.com/explore"),
    ];

    for (template, expected) in templates {
        let mut builder = UrlBuilder::parse(template).unwrap();
        builder.set_params(params.iter().copied());
        assert_eq!(builder.to_string(), expected);
    }
}

#[test]
fn test_set_params_order_and_mixed_keys() {
    let mut builder = UrlBuilder::parse("https://host/{a}/{b}").unwrap();
    builder.set_params(vec![
        (ParamKey::Name("a".to_string()), "first"),
        (ParamKey::Index(0), "second"),
        (ParamKey::Index(1), "third"),
    ]);

    assert_eq!(builder.to_string(), "https://host/second/third");
}

#[test]
fn test_query_array_then_scalar_overwrite() {
    let mut builder = UrlBuilder::parse("https://search.example.com?q=old&page=2").unwrap();
    builder.set_query_array("q", QueryArray::new(",", ["rust", "url"]));
    assert_eq!(builder.to_string(), "https://search.example.com?q=rust,url&page=2");

    builder.set_query("q", "new");
    assert_eq!(builder.to_string(), "https://search.example.com?q=new&page=2");
}

#[test]
fn test_mutation_then_conversion() {
    let mut builder = UrlBuilder::parse("http://localhost/api/{version}/users").unwrap();
    builder
        .set_scheme("https")
        .set_host_name("api.example.com")
        .set_param("version", "v2")
        .set_query("active", true);

    let url = builder.to_url().unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/api/v2/users?active=true");
    assert_eq!(url.query(), Some("active=true"));
}

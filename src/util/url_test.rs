use super::*;

#[test]
fn encode_component_leaves_unreserved_alone() {
    assert_eq!(encode_component("abcXYZ019-_.~"), "abcXYZ019-_.~");
}

#[test]
fn encode_component_escapes_email_and_url_characters() {
    assert_eq!(encode_component("a@x.com"), "a%40x.com");
    assert_eq!(
        encode_component("http://localhost:8080/auth/callback"),
        "http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fcallback"
    );
}

#[test]
fn encode_component_escapes_space_and_utf8() {
    assert_eq!(encode_component("openid email"), "openid%20email");
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn with_query_without_pairs_is_base() {
    assert_eq!(with_query("https://api.test/visas", &[]), "https://api.test/visas");
}

#[test]
fn with_query_joins_encoded_pairs() {
    let url = with_query(
        "https://api.test/visas",
        &[("limit", "6".to_owned()), ("addedBy", "a@x.com".to_owned())],
    );
    assert_eq!(url, "https://api.test/visas?limit=6&addedBy=a%40x.com");
}

#[test]
fn parse_pairs_strips_prefix_and_splits() {
    assert_eq!(
        parse_pairs("#id_token=abc.def&state=s1"),
        vec![("id_token", "abc.def"), ("state", "s1")]
    );
}

#[test]
fn parse_pairs_handles_bare_keys_and_empty_input() {
    assert_eq!(parse_pairs("?flag&x=1"), vec![("flag", ""), ("x", "1")]);
    assert!(parse_pairs("").is_empty());
    assert!(parse_pairs("#").is_empty());
}

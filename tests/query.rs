use lenient_uri::{add_query, parse, parse_query_string, QueryMap, Uri};

const MAGNET: &str = "magnet:?xt=urn:btih:f8c020dac7a083defda1769a1196a13facc38ef6&dn=Linux+64x+server+11.10+Pt+Pt&tr=udp%3A%2F%2Ftracker.openbittorrent.com%3A80&tr=udp%3A%2F%2Ftracker.publicbt.com%3A80&tr=udp%3A%2F%2Ftracker.ccc.de%3A80";

#[test]
fn magnet_query() {
    let query = parse(MAGNET).query();
    assert_eq!(query.len(), 3);
    assert_eq!(query.keys().collect::<Vec<_>>(), ["xt", "dn", "tr"]);
    assert_eq!(query.get("xt"), Some("urn:btih:f8c020dac7a083defda1769a1196a13facc38ef6"));
    assert_eq!(query.get("dn"), Some("Linux 64x server 11.10 Pt Pt"));
    assert_eq!(
        query.get_all("tr"),
        [
            "udp://tracker.openbittorrent.com:80",
            "udp://tracker.publicbt.com:80",
            "udp://tracker.ccc.de:80",
        ]
    );
    assert_eq!(query.get("missing"), None);
    assert!(query.get_all("missing").is_empty());
}

#[test]
fn decoding() {
    let query = parse_query_string("a=1&b&=c&d=%zz&e=x%20y+z&a=2");
    let pairs: Vec<_> = query.iter().collect();
    assert_eq!(
        pairs,
        [("a", "1"), ("a", "2"), ("b", ""), ("", "c"), ("d", "%zz"), ("e", "x y z")]
    );
    assert!(parse_query_string("").is_empty());
    assert!(parse("http://h/").query().is_empty());
}

#[test]
fn query_map() {
    let mut map: QueryMap = [("a", "1"), ("b", "2")].into_iter().collect();
    map.append("a", "3");
    map.extend([("c", "x y")]);
    assert!(map.contains_key("c"));
    assert_eq!(map.to_string(), "a=1&a=3&b=2&c=x+y");

    assert_eq!(map.remove("a"), Some(vec!["1".to_owned(), "3".to_owned()]));
    assert_eq!(map.remove("a"), None);
    assert_eq!(map.len(), 2);

    let mut seen = vec![];
    for (k, v) in &map {
        seen.push(format!("{k}={v}"));
    }
    assert_eq!(seen, ["b=2", "c=x y"]);
    assert_eq!(QueryMap::new(), QueryMap::default());
}

#[test]
fn adding() {
    let data = add_query("http://example.org/?a=1", [("b", "x y"), ("a", "2")]);
    assert_eq!(data.to_string(), "http://example.org/?a=1&b=x+y&a=2");

    let data = add_query("http://example.org/#f", [("q", "a&b=c")]);
    assert_eq!(data.to_string(), "http://example.org/?q=a%26b%3Dc#f");
    assert_eq!(data.query().get("q"), Some("a&b=c"));

    let data = add_query("http://example.org/", Vec::<(String, String)>::new());
    assert_eq!(data.query, None);

    let uri = Uri::parse("http://example.org/?a=%41").add_query([("b", "1")]);
    assert_eq!(uri.query_string(), "a=A&b=1");
}

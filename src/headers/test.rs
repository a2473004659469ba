use crate::headers::{AsHeaderName, IntoHeaderName};
use crate::headers::{HeaderError, HeaderMap, HeaderName, HeaderValue};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderMap>();
    is_send_sync::<HeaderName>();
    is_send_sync::<HeaderValue>();
    fn _is_dyn_compat(_: &dyn AsHeaderName) { }
    fn _is_into_name<T: IntoHeaderName>() { }
};

#[test]
fn header_map() {
    let mut map = HeaderMap::new();

    assert!(map.get("content-type").is_none());
    assert_eq!(map.get_str("content-type"), ("", false));

    map.append("content-type", HeaderValue::from_static("FOO"));
    assert!(map.contains_key("content-type"));
    assert!(map.contains_key("Content-Type"));

    map.append("Accept", HeaderValue::from_static("BAR"));
    map.append("content-length", HeaderValue::from_static("LEN"));
    map.append("host", HeaderValue::from_static("BAR"));

    assert_eq!(map.len(), 4);
    assert_eq!(map.get("ACCEPT").unwrap(), "BAR");
    assert_eq!(map.get_str("Host"), ("BAR", true));

    // Insert Multi

    map.append("content-length", HeaderValue::from_static("BAR"));

    let mut all = map.get_all("Content-Length");
    assert!(matches!(all.next(), Some(v) if v.as_str() == "LEN"));
    assert!(matches!(all.next(), Some(v) if v.as_str() == "BAR"));
    assert!(all.next().is_none());

    // first value wins on lookup
    assert_eq!(map.get("content-length").unwrap(), "LEN");

    // Insert Replace

    let old = map.insert("content-length", HeaderValue::from_static("7"));
    assert_eq!(old.unwrap(), "LEN");
    assert_eq!(map.get_all("content-length").count(), 1);
    assert_eq!(map.get("content-length").unwrap(), "7");

    // Remove

    assert!(map.remove("accept").is_some());
    assert!(map.remove("accept").is_none());
    assert!(!map.contains_key("accept"));
    assert!(map.contains_key("host"));

    // Clear

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(!map.contains_key("content-type"));
    assert!(!map.contains_key("host"));
}

#[test]
fn header_map_insertion_order() {
    let mut map = HeaderMap::new();
    map.append("X-B", HeaderValue::from_static("2"));
    map.append("x-a", HeaderValue::from_static("1"));
    map.append("x-b", HeaderValue::from_static("3"));

    let pairs = map
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>();
    assert_eq!(pairs, ["x-b=2", "x-a=1", "x-b=3"]);

    let mut visited = vec![];
    map.for_each(|name, value| visited.push((name.to_string(), value.to_string())));
    assert_eq!(visited.len(), 3);
    assert_eq!(visited[0], ("x-b".to_string(), "2".to_string()));
    assert_eq!(visited[2], ("x-b".to_string(), "3".to_string()));
}

#[test]
fn header_name_and_value() {
    let name = HeaderName::from_slice(b"Content-Type").unwrap();
    assert_eq!(name.as_str(), "content-type");
    assert_eq!(name, "CONTENT-TYPE");

    assert_eq!(HeaderName::from_slice(b"").unwrap_err(), HeaderError::InvalidName);
    assert_eq!(HeaderName::from_slice(b"Host ").unwrap_err(), HeaderError::InvalidName);
    assert_eq!(HeaderName::from_slice(b"Ho st").unwrap_err(), HeaderError::InvalidName);

    let value = HeaderValue::from_slice(b" \t text/html; charset=utf-8 \t").unwrap();
    assert_eq!(value.as_str(), "text/html; charset=utf-8");
    assert_eq!(HeaderValue::from_slice(b"").unwrap().as_str(), "");

    assert_eq!(HeaderValue::from_slice(b"a\rb").unwrap_err(), HeaderError::InvalidValue);
    assert_eq!(HeaderValue::from_slice(b"a\0b").unwrap_err(), HeaderError::InvalidValue);
    assert_eq!(HeaderValue::from_slice("caf\u{e9}").unwrap_err(), HeaderError::InvalidValue);
}

#[test]
fn test_parse_chunk() {
    macro_rules! test {
        (#[error] $input:literal, $err:ident) => {
            let mut map = HeaderMap::new();
            assert_eq!(map.parse_chunk(&$input[..]), Err(HeaderError::$err));
        };
        {
            $input:literal;
            ($read:expr, $done:literal);
            [$($name:literal: $value:literal),*]
        } => {
            let mut map = HeaderMap::new();
            let (read, done) = map.parse_chunk(&$input[..]).unwrap();
            assert_eq!(read, $read, "invalid consumed bytes");
            assert_eq!(done, $done, "invalid end of headers flag");
            let parsed = map.iter().map(|(n, v)| (n.as_str(), v.as_str())).collect::<Vec<_>>();
            let expected: Vec<(&str, &str)> = vec![$(($name, $value)),*];
            assert_eq!(parsed, expected);
        };
    }

    test! {
        b"Host: localhost:42069\r\n\r\n";
        (23, true);
        ["host": "localhost:42069"]
    }
    test! {
        b"Content-Length: 1224\r\nContent-Type: text/html\r\n\r\nHello World!";
        (47, true);
        ["content-length": "1224", "content-type": "text/html"]
    }
    test! {
        b"Host:    padded    \r\nUser-Agent: curl/7.81.0\r\nAcc";
        (46, false);
        ["host": "padded", "user-agent": "curl/7.81.0"]
    }
    test! {
        b"Set-Person: lane\r\nSet-Person: prime\r\n";
        (37, false);
        ["set-person": "lane", "set-person": "prime"]
    }
    test! {
        b"X-Empty:\r\n\r\n";
        (10, true);
        ["x-empty": ""]
    }

    // Empty line is left for the caller
    test! { b"\r\nHello World!"; (0, true); [] }

    // Pending
    test! { b""; (0, false); [] }
    test! { b"Host: local"; (0, false); [] }
    test! { b"Host: localhost\r"; (0, false); [] }
    test! { b"\r"; (0, false); [] }

    // Error
    test!(#[error] b"Host localhost\r\n\r\n", Malformed);
    test!(#[error] b"       Host: localhost:42069       \r\n\r\n", InvalidName);
    test!(#[error] b"Host : localhost\r\n\r\n", InvalidName);
    test!(#[error] b": localhost\r\n\r\n", InvalidName);
    test!(#[error] b"H\xc2st: localhost\r\n\r\n", InvalidName);
    test!(#[error] b"Host: local\x7fhost\r\n\r\n", InvalidValue);
    test!(#[error] b"User-Agent: caf\xc3\xa9\r\n\r\n", InvalidValue);
}

#[test]
fn test_parse_chunk_keeps_parsed_headers_on_error() {
    let mut map = HeaderMap::new();
    let err = map.parse_chunk(b"Host: x\r\nBad Line\r\n").unwrap_err();
    assert_eq!(err, HeaderError::Malformed);
    assert_eq!(map.get_str("host"), ("x", true));
}

//! Tests for the HTTP wire types.

#[cfg(test)]
mod tests {
    use crate::http::{parse_head, HttpVersion, Method, ParseError, Response, StatusCode};

    #[test]
    fn parses_simple_get_request() {
        let head = b"GET /api HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let request = parse_head(head).unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api");
        assert_eq!(request.version, HttpVersion::Http11);
        assert_eq!(request.header("Host").unwrap(), "example.com");
    }

    #[test]
    fn parses_multiple_headers() {
        let head =
            b"GET /about HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n";
        let request = parse_head(head).unwrap();
        assert_eq!(request.header("User-Agent").unwrap(), "test");
        assert_eq!(request.header("Accept").unwrap(), "*/*");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let head = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let request = parse_head(head).unwrap();
        assert!(request.has_header("host"));
        assert!(request.has_header("HOST"));
        assert!(request.has_header("Host"));
    }

    #[test]
    fn strips_query_string_from_path() {
        let head = b"GET /time?tz=eat&fmt=long HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let request = parse_head(head).unwrap();
        assert_eq!(request.path, "/time");
    }

    #[test]
    fn rejects_missing_host_on_http11() {
        let head = b"GET / HTTP/1.1\r\n\r\n";
        let result = parse_head(head);
        assert!(matches!(result, Err(ParseError::MissingHeader("Host"))));
    }

    #[test]
    fn accepts_missing_host_on_http10() {
        let head = b"GET / HTTP/1.0\r\n\r\n";
        let request = parse_head(head).unwrap();
        assert_eq!(request.version, HttpVersion::Http10);
    }

    #[test]
    fn rejects_unknown_method() {
        let head = b"BREW /coffee HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_head(head);
        assert!(matches!(result, Err(ParseError::UnsupportedMethod(ref m)) if m == "BREW"));
    }

    #[test]
    fn rejects_unknown_version() {
        let head = b"GET / HTTP/9.9\r\nHost: example.com\r\n\r\n";
        let result = parse_head(head);
        assert!(matches!(result, Err(ParseError::UnsupportedVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn rejects_header_without_colon() {
        let head = b"GET / HTTP/1.1\r\nNotAHeader\r\n\r\n";
        let result = parse_head(head);
        assert!(matches!(result, Err(ParseError::MalformedHeader)));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_head(b""), Err(ParseError::EmptyRequest)));
    }

    #[test]
    fn rejects_short_request_line() {
        let result = parse_head(b"GET\r\n");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }

    #[test]
    fn rejects_relative_path() {
        let result = parse_head(b"GET index.html HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidPath)));
    }

    #[test]
    fn keeps_colons_in_header_values() {
        let head = b"GET / HTTP/1.1\r\nHost: example.com\r\nX-Clock: 10:30:00\r\n\r\n";
        let request = parse_head(head).unwrap();
        assert_eq!(request.header("X-Clock").unwrap(), "10:30:00");
    }

    #[test]
    fn status_code_reason_phrases() {
        assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
        assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
        assert_eq!(
            StatusCode::InternalServerError.reason_phrase(),
            "Internal Server Error"
        );
    }

    #[test]
    fn response_carries_server_header() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(
            response.headers.get("Server"),
            Some(&"nairobi-api".to_string())
        );
        assert!(response.body.is_empty());
    }

    #[test]
    fn response_body_sets_content_length() {
        let response = Response::new(StatusCode::Ok).with_body("Karibu!");
        assert_eq!(response.body, b"Karibu!");
        assert_eq!(
            response.headers.get("Content-Length"),
            Some(&"7".to_string())
        );
    }

    #[test]
    fn response_json_sets_content_type() {
        #[derive(serde::Serialize)]
        struct Probe {
            ok: bool,
        }

        let response = Response::new(StatusCode::Ok)
            .with_json(&Probe { ok: true })
            .unwrap();
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(response.body, br#"{"ok":true}"#);
    }

    #[test]
    fn response_to_bytes_layout() {
        let response = Response::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body("Karibu, world!");

        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 14\r\n"));
        assert!(text.contains("Server: nairobi-api\r\n"));
        assert!(text.ends_with("\r\n\r\nKaribu, world!"));
    }
}

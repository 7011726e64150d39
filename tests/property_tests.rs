// Property tests for the translation rules
// Author: kelexine (https://github.com/kelexine)

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use http_lambda::error::GatewayError;
use http_lambda::server::inbound::{collect_headers, canonical_header_key, parse_target};
use http_lambda::translation::{build_envelope, decode_body, decode_result};
use proptest::prelude::*;
use std::collections::HashMap;

const HEADER_NAMES: [&str; 4] = ["x-one", "x-two", "accept", "content-type"];

proptest! {
    #[test]
    fn prop_valid_paths_split_on_first_slash(
        name in "[A-Za-z0-9_-]{1,24}",
        rest in "[A-Za-z0-9_./-]{1,48}",
    ) {
        let target = parse_target(&format!("/{}/{}", name, rest)).unwrap();
        prop_assert_eq!(target.function_name, name);
        prop_assert_eq!(target.sub_path, format!("/{}", rest));
    }

    #[test]
    fn prop_single_segment_is_malformed(name in "[A-Za-z0-9_-]{0,24}") {
        let result = parse_target(&format!("/{}", name));
        prop_assert!(matches!(result, Err(GatewayError::MalformedPath(_))));
    }

    #[test]
    fn prop_first_header_value_wins(
        entries in proptest::collection::vec((0..HEADER_NAMES.len(), "[a-z0-9 ]{0,12}"), 0..16),
    ) {
        let mut headers = HeaderMap::new();
        let mut expected: HashMap<String, String> = HashMap::new();
        for (index, value) in &entries {
            let name = HeaderName::from_static(HEADER_NAMES[*index]);
            headers.append(name, HeaderValue::from_str(value).unwrap());
            expected
                .entry(canonical_header_key(HEADER_NAMES[*index]))
                .or_insert_with(|| value.clone());
        }

        prop_assert_eq!(collect_headers(&headers), expected);
    }

    #[test]
    fn prop_base64_body_round_trip(body in proptest::collection::vec(any::<u8>(), 0..512)) {
        let envelope = build_envelope("POST", "/", HashMap::new(), &body);
        prop_assert!(envelope.is_base64_encoded);
        prop_assert_eq!(decode_body(envelope.body, true).unwrap(), body);
    }

    #[test]
    fn prop_zero_status_is_always_rejected(
        body in ".{0,32}",
        encoded in any::<bool>(),
        header_value in "[a-z]{0,8}",
    ) {
        let payload = serde_json::json!({
            "statusCode": 0,
            "body": body,
            "isBase64Encoded": encoded,
            "headers": {"X-Any": header_value},
        });
        let result = decode_result(payload.to_string().as_bytes());
        prop_assert!(matches!(result, Err(GatewayError::ResponseDecode(_))));
    }
}

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

/// https://url.spec.whatwg.org/#userinfo-percent-encode-set
const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// `+`, `%` and `&` carry meaning in query strings and form bodies, so they
/// must always arrive percent-encoded.
const TWITTER_SET: &AsciiSet = &USERINFO.add(b'+').add(b'%').add(b'&');

/// `percent_encoding` crate recommends you to create your own set for encoding.
/// To be consistent in the whole codebase - we created a function that can be used
/// for encoding related stuff.
pub fn url_encode(data: &[u8]) -> String {
    percent_encode(data, TWITTER_SET).to_string()
}

/// Encode `name=value` pairs into an `application/x-www-form-urlencoded` body.
pub fn url_encoded_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                url_encode(name.as_bytes()),
                url_encode(value.as_bytes())
            )
        })
        .collect::<Vec<String>>()
        .join("&")
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn encode_reserved_characters() {
        assert_eq!(
            url_encode("100% + 50% = @you & me".as_bytes()),
            "100%25%20%2B%2050%25%20%3D%20%40you%20%26%20me"
        );
    }

    #[test]
    fn encode_form_pairs() {
        assert_eq!(
            url_encoded_pairs(&[("status", "tea & biscuits"), ("trim_user", "true")]),
            "status=tea%20%26%20biscuits&trim_user=true"
        );
    }
}

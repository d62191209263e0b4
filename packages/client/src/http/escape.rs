//! Percent-encoding for URL components

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched are removed from the set
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component (space becomes `%20`, not `+`)
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Encode `key=value` pairs and join them with `&`, preserving order
pub fn encode_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key.as_ref()),
                encode_component(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn reserved_and_non_ascii_are_escaped() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a+b&c=d"), "a%2Bb%26c%3Dd");
        assert_eq!(encode_component("p@ss/word?"), "p%40ss%2Fword%3F");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn pairs_keep_order() {
        assert_eq!(
            encode_pairs([("b", "2"), ("a", "x y")]),
            "b=2&a=x%20y"
        );
        assert_eq!(encode_pairs(Vec::<(&str, &str)>::new()), "");
    }
}

use crate::domain::model::ChatLink;
use crate::utils::error::Result;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

pub const CHAT_BASE_URL: &str = "https://wa.me/";

/// Same table as JavaScript's `encodeURIComponent`, plus `'`, which the URL
/// parser would otherwise rewrite to `%27` inside a query.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Builds `https://wa.me/{phone}?text={encoded message}`.
///
/// The phone number is taken as-is; whether it is a reachable WhatsApp
/// account is the chat service's business.
pub fn build_chat_link(phone: &str, message: &str) -> Result<ChatLink> {
    let raw = format!(
        "{}{}?text={}",
        CHAT_BASE_URL,
        encode_component(phone),
        encode_component(message)
    );
    let url = Url::parse(&raw)?;
    Ok(ChatLink::from_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DEFAULT_MESSAGE, DEFAULT_PHONE};

    #[test]
    fn test_default_settings_produce_known_link() {
        let link = build_chat_link(DEFAULT_PHONE, DEFAULT_MESSAGE).unwrap();
        assert_eq!(
            link.as_str(),
            "https://wa.me/5531984466426?text=Ol%C3%A1!%20Vim%20atrav%C3%A9s%20do%20seu%20site%20e%20gostaria%20de%20mais%20informa%C3%A7%C3%B5es%20sobre%20seus%20produtos%2Fservi%C3%A7os."
        );
    }

    #[test]
    fn test_encode_component_reserved_characters() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("?&/=#+"), "%3F%26%2F%3D%23%2B");
        assert_eq!(encode_component("-_.!~*()"), "-_.!~*()");
        assert_eq!(encode_component("it's"), "it%27s");
        assert_eq!(encode_component("ção"), "%C3%A7%C3%A3o");
    }

    #[test]
    fn test_message_round_trips() {
        let messages = [
            "Olá! Tudo bem?",
            "preço & prazo / entrega?",
            "100% de desconto = 50+50",
            "linha 1\nlinha 2",
            "it's #1 (really) ~ok*",
            "emoji 👋",
        ];

        for message in messages {
            let link = build_chat_link("5511999999999", message).unwrap();
            assert_eq!(link.decoded_message().as_deref(), Some(message), "{}", link);
        }
    }

    #[test]
    fn test_host_and_path_do_not_depend_on_message() {
        for message in ["x", "a?b=c&d", "/../etc", "https://evil.example/"] {
            let link = build_chat_link("5531984466426", message).unwrap();
            assert_eq!(link.url().scheme(), "https");
            assert_eq!(link.url().host_str(), Some("wa.me"));
            assert_eq!(link.url().path(), "/5531984466426");
            assert_eq!(link.phone(), "5531984466426");
        }
    }

    #[test]
    fn test_phone_is_reported_decoded() {
        let link = build_chat_link("55 11", "x").unwrap();
        assert_eq!(link.url().path(), "/55%2011");
        assert_eq!(link.phone(), "55 11");
    }

    #[test]
    fn test_link_survives_reparse_unchanged() {
        let link = build_chat_link("5511999999999", "it's a (test) & more").unwrap();
        let reparsed = Url::parse(link.as_str()).unwrap();
        assert_eq!(reparsed.as_str(), link.as_str());
    }
}

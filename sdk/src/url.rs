//! Endpoint templates and named-parameter substitution.
//!
//! Substitution is a literal string replacement. Nothing is percent-encoded,
//! so identifiers containing `/`, `?`, `&` or spaces must be encoded by the
//! caller before they reach the client.

pub const SINGLE_CAMPAIGN_TEMPLATE: &str = "{baseUrl}/{environmentId}/campaigns/{campaignId}";
pub const ALL_CAMPAIGNS_TEMPLATE: &str = "{baseUrl}/{environmentId}/campaigns";
pub const ACTIVATION_TEMPLATE: &str = "{baseUrl}/activate";

/// Replace every `{name}` token in `template` with its value.
///
/// Parameters are applied in order. Tokens with no matching parameter are
/// left untouched.
#[must_use]
pub fn replace_named_parameter(template: &str, parameters: &[(&str, &str)]) -> String {
    parameters
        .iter()
        .fold(template.to_string(), |url, (name, value)| {
            url.replace(&format!("{{{name}}}"), value)
        })
}

/// Append `?mode=<mode>` verbatim.
pub(crate) fn with_mode_query(mut url: String, mode: &str) -> String {
    url.push_str("?mode=");
    url.push_str(mode);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_single_token() {
        assert_eq!(
            replace_named_parameter("{baseUrl}/activate", &[("baseUrl", "https://x")]),
            "https://x/activate"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let url = replace_named_parameter("/{id}/{id}", &[("id", "a")]);
        assert_eq!(url, "/a/a");
    }

    #[test]
    fn leaves_unknown_tokens_in_place() {
        let url = replace_named_parameter(ALL_CAMPAIGNS_TEMPLATE, &[("baseUrl", "https://x")]);
        assert_eq!(url, "https://x/{environmentId}/campaigns");
    }

    #[test]
    fn does_not_escape_reserved_characters() {
        let url = replace_named_parameter(
            SINGLE_CAMPAIGN_TEMPLATE,
            &[
                ("baseUrl", "https://x"),
                ("environmentId", "e1"),
                ("campaignId", "a b/c?d&e"),
            ],
        );
        assert_eq!(url, "https://x/e1/campaigns/a b/c?d&e");
    }

    #[test]
    fn mode_query_is_appended_verbatim() {
        assert_eq!(
            with_mode_query("https://x/e1/campaigns".into(), "simple"),
            "https://x/e1/campaigns?mode=simple"
        );
    }
}

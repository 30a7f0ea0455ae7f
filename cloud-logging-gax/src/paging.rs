//! Call options for list operations.

/// Position in a paged listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageToken {
    /// Start from the first page.
    InitialPage,
    /// Continue from a token returned by a previous call.
    Token(String),
}

impl PageToken {
    /// The value sent on the wire, where the first page is an empty token.
    pub fn as_wire_str(&self) -> &str {
        match self {
            PageToken::InitialPage => "",
            PageToken::Token(token) => token,
        }
    }
}

/// Per-call options handed to the RPC client.
///
/// `page_token` is `None` for calls that do not page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub page_token: Option<PageToken>,
}

/// Builds the options for a list call.
///
/// A missing token selects [`PageToken::InitialPage`] rather than an empty
/// string, so "first page" stays distinct from an empty continuation up to the
/// point where the request is encoded.
pub fn build_paging_options(page_token: Option<&str>) -> CallOptions {
    let page_token = match page_token {
        Some(token) => PageToken::Token(token.to_owned()),
        None => PageToken::InitialPage,
    };
    CallOptions {
        page_token: Some(page_token),
    }
}

/// Turns a returned continuation token into the caller-facing form, where
/// "no more pages" is `None`.
pub(crate) fn next_page_token(token: String) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_token_selects_first_page() {
        let options = build_paging_options(None);
        assert_eq!(options.page_token, Some(PageToken::InitialPage));
    }

    #[test]
    fn token_is_carried_verbatim() {
        let options = build_paging_options(Some("abc"));
        assert_eq!(options.page_token, Some(PageToken::Token("abc".into())));
    }

    #[test]
    fn empty_token_is_not_the_first_page() {
        let options = build_paging_options(Some(""));
        assert_eq!(options.page_token, Some(PageToken::Token(String::new())));
        assert_ne!(options, build_paging_options(None));
    }

    #[test]
    fn wire_form() {
        assert_eq!(PageToken::InitialPage.as_wire_str(), "");
        assert_eq!(PageToken::Token("abc".into()).as_wire_str(), "abc");
    }

    #[test]
    fn empty_next_token_means_no_more_pages() {
        assert_eq!(next_page_token(String::new()), None);
        assert_eq!(next_page_token("next".into()), Some("next".into()));
    }

    #[test]
    fn default_options_do_not_page() {
        assert_eq!(CallOptions::default().page_token, None);
    }
}

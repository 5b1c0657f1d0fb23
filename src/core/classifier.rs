//! Heuristic classification of a rendered referral page.
//!
//! Page structure varies across deployments, so the coarse full-text checks
//! run first and the structured element scan is only a fallback. When no
//! heuristic fires the verdict is `Unknown` rather than a guess.

use crate::domain::model::ReferralStatus;

/// Elements worth scanning when the full-text checks are inconclusive.
pub const CANDIDATE_SELECTOR: &str = "h1, h2, h3, .message, .error, .success, .credit";

const INVALID_PHRASES: [&str; 2] = ["invalid referral code", "this referral code is invalid"];

/// The three observable facets of a loaded page.
#[derive(Debug, Clone, Default)]
pub struct PageFacets {
    pub text: String,
    pub title: String,
    pub headings: Vec<String>,
}

/// Decide the status of a loaded page. Checks run in a fixed order and the
/// first match wins; `Error` is never produced here (the runner assigns it
/// on navigation failure).
pub fn classify(credit_amount: u32, facets: &PageFacets) -> ReferralStatus {
    let marker = format!("${}", credit_amount);
    let text = facets.text.to_lowercase();

    if is_valid_text(&marker, &text) {
        return ReferralStatus::Valid;
    }

    if is_invalid_text(&text) {
        return ReferralStatus::Invalid;
    }

    let title = facets.title.to_lowercase();
    if title.contains("invalid") && title.contains("referral") {
        return ReferralStatus::Invalid;
    }

    for heading in &facets.headings {
        let heading = heading.to_lowercase();
        if heading.contains("invalid referral code") {
            return ReferralStatus::Invalid;
        }
        // The element scan also accepts the older $20 promo wording, which
        // the full-text check does not.
        if heading.contains("credit") && (heading.contains(&marker) || heading.contains("$20")) {
            return ReferralStatus::Valid;
        }
    }

    ReferralStatus::Unknown
}

/// An unclaimed code shows a credit message with the promotional dollar
/// amount. "credit" alone is not enough.
fn is_valid_text(marker: &str, text: &str) -> bool {
    text.contains("credit") && text.contains(marker)
}

fn is_invalid_text(text: &str) -> bool {
    INVALID_PHRASES.iter().any(|phrase| text.contains(phrase))
        || (text.contains("invalid") && text.contains("referral") && text.contains("code"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_text(text: &str) -> PageFacets {
        PageFacets {
            text: text.to_string(),
            ..PageFacets::default()
        }
    }

    #[test]
    fn test_credit_with_amount_is_valid() {
        let facets = with_text("You both get $50 in credit");
        assert_eq!(classify(50, &facets), ReferralStatus::Valid);
    }

    #[test]
    fn test_credit_without_amount_is_not_valid() {
        let facets = with_text("sign up and earn credit towards your plan");
        assert_ne!(classify(50, &facets), ReferralStatus::Valid);
    }

    #[test]
    fn test_amount_is_threaded_from_config() {
        let facets = with_text("you both get $75 in credit");
        assert_eq!(classify(75, &facets), ReferralStatus::Valid);
        assert_eq!(classify(50, &facets), ReferralStatus::Unknown);
    }

    #[test]
    fn test_invalid_phrases() {
        assert_eq!(
            classify(50, &with_text("Invalid Referral Code")),
            ReferralStatus::Invalid
        );
        assert_eq!(
            classify(50, &with_text("This referral code is invalid")),
            ReferralStatus::Invalid
        );
    }

    #[test]
    fn test_invalid_tokens_need_not_be_contiguous() {
        let facets = with_text("the referral you used has an invalid code attached");
        assert_eq!(classify(50, &facets), ReferralStatus::Invalid);
    }

    #[test]
    fn test_valid_check_wins_over_invalid_check() {
        // first match wins: the credit marker is checked before any invalid
        // phrasing
        let facets = with_text("you get $50 credit. invalid referral code below.");
        assert_eq!(classify(50, &facets), ReferralStatus::Valid);
    }

    #[test]
    fn test_title_fallback() {
        let facets = PageFacets {
            text: "nothing conclusive here".to_string(),
            title: "Invalid Referral — Cursor".to_string(),
            headings: vec![],
        };
        assert_eq!(classify(50, &facets), ReferralStatus::Invalid);
    }

    #[test]
    fn test_text_verdict_ignores_title() {
        let facets = PageFacets {
            text: "this referral code is invalid".to_string(),
            title: "Get $50 credit".to_string(),
            headings: vec![],
        };
        assert_eq!(classify(50, &facets), ReferralStatus::Invalid);
    }

    #[test]
    fn test_element_scan_invalid() {
        let facets = PageFacets {
            headings: vec!["Welcome".to_string(), "Invalid referral code".to_string()],
            ..PageFacets::default()
        };
        assert_eq!(classify(50, &facets), ReferralStatus::Invalid);
    }

    #[test]
    fn test_element_scan_accepts_20_dollar_wording() {
        // only the element scan accepts $20; the full-text check does not
        let headings = vec!["Claim your $20 credit".to_string()];
        let via_elements = PageFacets {
            headings,
            ..PageFacets::default()
        };
        assert_eq!(classify(50, &via_elements), ReferralStatus::Valid);

        let via_text = with_text("claim your $20 credit");
        assert_eq!(classify(50, &via_text), ReferralStatus::Unknown);
    }

    #[test]
    fn test_element_scan_first_match_wins() {
        let facets = PageFacets {
            headings: vec![
                "invalid referral code".to_string(),
                "$50 credit".to_string(),
            ],
            ..PageFacets::default()
        };
        assert_eq!(classify(50, &facets), ReferralStatus::Invalid);
    }

    #[test]
    fn test_nothing_matched_is_unknown() {
        let facets = PageFacets {
            text: "welcome to the site".to_string(),
            title: "Home".to_string(),
            headings: vec!["Latest news".to_string()],
        };
        assert_eq!(classify(50, &facets), ReferralStatus::Unknown);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let facets = PageFacets {
            text: "You Both Get $50 In CREDIT".to_string(),
            ..PageFacets::default()
        };
        assert_eq!(classify(50, &facets), ReferralStatus::Valid);
    }
}

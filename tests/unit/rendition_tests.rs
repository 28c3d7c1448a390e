/*!
 * Tests for rendition hints and closed enumeration tokens
 */

use std::str::FromStr;

use serde_json::json;

use pubmeta::errors::MetadataError;
use pubmeta::metadata::Direction;
use pubmeta::rendition::{Flow, Layout, Orientation, Rendition, Spread};

/// Test that every canonical token parses and round-trips
#[test]
fn test_from_str_withCanonicalTokens_shouldRoundTrip() {
    for token in ["reflowable", "fixed"] {
        assert_eq!(Layout::from_str(token).unwrap().as_str(), token);
    }
    for token in ["auto", "paginated", "continuous", "document"] {
        assert_eq!(Flow::from_str(token).unwrap().as_str(), token);
    }
    for token in ["auto", "landscape", "portrait"] {
        assert_eq!(Orientation::from_str(token).unwrap().as_str(), token);
    }
    for token in ["auto", "landscape", "portrait", "both", "none"] {
        assert_eq!(Spread::from_str(token).unwrap().as_str(), token);
    }
    for token in ["ltr", "rtl", "auto"] {
        assert_eq!(Direction::from_str(token).unwrap().as_str(), token);
    }
}

/// Test case and whitespace normalization when parsing tokens
#[test]
fn test_from_str_withMixedCaseTokens_shouldNormalize() {
    assert_eq!(Layout::from_str(" Reflowable ").unwrap(), Layout::Reflowable);
    assert_eq!(Flow::from_str("PAGINATED").unwrap(), Flow::Paginated);
    assert_eq!(Direction::from_str("LTR").unwrap(), Direction::LeftToRight);
}

/// Test rejection of unknown tokens at construction time
#[test]
fn test_from_str_withUnknownTokens_shouldReject() {
    assert!(Layout::from_str("scrolled").is_err());
    assert!(Flow::from_str("spiral").is_err());
    assert!(Orientation::from_str("upside-down").is_err());
    assert!(Spread::from_str("double").is_err());
    assert!(Direction::from_str("ttb").is_err());

    let err = Layout::from_str("scrolled").unwrap_err();
    match err {
        MetadataError::UnknownToken { field, token } => {
            assert_eq!(field, "layout");
            assert_eq!(token, "scrolled");
        }
        other => panic!("Unexpected error: {}", other),
    }
}

/// Test Display uses the wire token
#[test]
fn test_display_withEnumVariants_shouldUseWireTokens() {
    assert_eq!(Layout::Fixed.to_string(), "fixed");
    assert_eq!(Spread::Both.to_string(), "both");
    assert_eq!(Direction::RightToLeft.to_string(), "rtl");
}

/// Test rendition emptiness drives whole-object omission
#[test]
fn test_is_empty_withNoHints_shouldBeTrue() {
    let mut sut = Rendition::default();
    assert!(sut.is_empty());

    // An empty viewport string still counts as unset
    sut.viewport = Some(String::new());
    assert!(sut.is_empty());

    sut.layout = Some(Layout::Fixed);
    assert!(!sut.is_empty());
}

/// Test rendition projection includes only present hints
#[test]
fn test_to_json_withPartialHints_shouldEmitPresentHintsOnly() {
    let sut = Rendition {
        layout: Some(Layout::Fixed),
        orientation: Some(Orientation::Landscape),
        ..Default::default()
    };

    assert_eq!(
        sut.to_json(),
        json!({"layout": "fixed", "orientation": "landscape"})
    );
}

/// Test the fully populated rendition object
#[test]
fn test_to_json_withAllHints_shouldEmitEveryField() {
    let sut = Rendition {
        layout: Some(Layout::Reflowable),
        flow: Some(Flow::Paginated),
        orientation: Some(Orientation::Auto),
        spread: Some(Spread::Landscape),
        viewport: Some("1280x760".to_string()),
    };

    assert_eq!(
        sut.to_json(),
        json!({
            "viewport": "1280x760",
            "layout": "reflowable",
            "flow": "paginated",
            "spread": "landscape",
            "orientation": "auto"
        })
    );
}

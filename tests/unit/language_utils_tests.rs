/*!
 * Tests for language tag utilities
 */

use pubmeta::language_utils::{
    get_language_name, language_tags_match, normalize_to_part2t, validate_language_tag,
    LanguageCodeType,
};

/// Test validation of language tags
#[test]
fn test_validate_language_tag_withValidTags_shouldReturnCorrectType() {
    // ISO 639-1 tests
    assert!(matches!(validate_language_tag("en").unwrap(), LanguageCodeType::Part1));
    assert!(matches!(validate_language_tag("fr").unwrap(), LanguageCodeType::Part1));
    assert!(matches!(validate_language_tag("de").unwrap(), LanguageCodeType::Part1));

    // ISO 639-2/T tests
    assert!(matches!(validate_language_tag("eng").unwrap(), LanguageCodeType::Part2T));
    assert!(matches!(validate_language_tag("fra").unwrap(), LanguageCodeType::Part2T));

    // ISO 639-2/B tests
    assert!(matches!(validate_language_tag("fre").unwrap(), LanguageCodeType::Part2B));
    assert!(matches!(validate_language_tag("ger").unwrap(), LanguageCodeType::Part2B));

    // Region and script subtags
    assert!(matches!(validate_language_tag("en-US").unwrap(), LanguageCodeType::Part1));
    assert!(matches!(validate_language_tag("zh-Hant").unwrap(), LanguageCodeType::Part1));

    // Whitespace and case tests
    assert!(matches!(validate_language_tag(" EN ").unwrap(), LanguageCodeType::Part1));
    assert!(matches!(validate_language_tag("ENG").unwrap(), LanguageCodeType::Part2T));

    // Invalid tags
    assert!(validate_language_tag("xyz").is_err());
    assert!(validate_language_tag("123").is_err());
    assert!(validate_language_tag("e").is_err());
    assert!(validate_language_tag("en--US").is_err());
    assert!(validate_language_tag("").is_err());
}

/// Test normalization of tags to ISO 639-2/T format
#[test]
fn test_normalize_to_part2t_withValidTags_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fr").unwrap(), "fra");
    assert_eq!(normalize_to_part2t("eng").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fre").unwrap(), "fra");
    assert_eq!(normalize_to_part2t("ger").unwrap(), "deu");

    // Region subtags are ignored for normalization
    assert_eq!(normalize_to_part2t("en-US").unwrap(), "eng");

    // Case insensitivity
    assert_eq!(normalize_to_part2t("EN").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("FRE").unwrap(), "fra");

    // Invalid tags
    assert!(normalize_to_part2t("xyz").is_err());
}

/// Test matching of different tag formats
#[test]
fn test_language_tags_match_withMatchingTags_shouldReturnTrue() {
    assert!(language_tags_match("en", "eng"));
    assert!(language_tags_match("eng", "en"));
    assert!(language_tags_match("fr", "fra"));
    assert!(language_tags_match("fre", "fra"));
    assert!(language_tags_match("en-US", "en-GB"));

    assert!(!language_tags_match("en", "fr"));
    assert!(!language_tags_match("en", "xyz"));
}

/// Test language display names
#[test]
fn test_get_language_name_withValidTags_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert_eq!(get_language_name("deu").unwrap(), "German");
    assert!(get_language_name("xyz").is_err());
}

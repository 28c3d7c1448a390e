use anyhow::{anyhow, Result};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Language utilities for publication language tags
///
/// This module validates the BCP 47-style tags carried in a publication's
/// `languages` list: a primary subtag that must be a known ISO 639-1
/// (2-letter) or ISO 639-2 (3-letter) code, optionally followed by region
/// or script subtags (`en-US`, `zh-Hant`) that are checked syntactically.
// @const: Subtag syntax regex (primary subtag plus optional extensions)
static TAG_SYNTAX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap()
});

/// Primary subtag type
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

/// Validate a language tag, returning the type of its primary subtag.
pub fn validate_language_tag(tag: &str) -> Result<LanguageCodeType> {
    let normalized_tag = tag.trim();
    if !TAG_SYNTAX_REGEX.is_match(normalized_tag) {
        return Err(anyhow!("Invalid language tag syntax: {}", tag));
    }

    let primary = normalized_tag
        .split('-')
        .next()
        .unwrap_or(normalized_tag)
        .to_lowercase();

    // Check for ISO 639-1 (2-letter) code
    if primary.len() == 2 {
        if Language::from_639_1(&primary).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    }
    // Check for ISO 639-2 (3-letter) code
    else if primary.len() == 3 {
        // Try to parse as ISO 639-2/T code
        if Language::from_639_3(&primary).is_some() {
            return Ok(LanguageCodeType::Part2T);
        }

        // Check if it's a ISO 639-2/B code that differs from ISO 639-2/T
        if part2b_to_part2t(&primary).is_some() {
            return Ok(LanguageCodeType::Part2B);
        }
    }

    Err(anyhow!("Invalid language tag: {}", tag))
}

/// Normalize the primary subtag of a tag to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(tag: &str) -> Result<String> {
    let primary = tag
        .trim()
        .split('-')
        .next()
        .unwrap_or("")
        .to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if primary.len() == 2 {
        if let Some(lang) = Language::from_639_1(&primary) {
            return Ok(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if primary.len() == 3 {
        if Language::from_639_3(&primary).is_some() {
            return Ok(primary);
        }

        if let Some(part2t) = part2b_to_part2t(&primary) {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language tag: {}", tag))
}

/// Check if two language tags refer to the same language, ignoring
/// region/script subtags.
pub fn language_tags_match(tag1: &str, tag2: &str) -> bool {
    let normalized1 = match normalize_to_part2t(tag1) {
        Ok(n) => n,
        Err(_) => return false,
    };

    let normalized2 = match normalize_to_part2t(tag2) {
        Ok(n) => n,
        Err(_) => return false,
    };

    normalized1 == normalized2
}

/// Get the English language name for a tag
pub fn get_language_name(tag: &str) -> Result<String> {
    let normalized = normalize_to_part2t(tag)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from tag: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

/// Map an ISO 639-2/B (bibliographic) code to its 639-2/T equivalent
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"), // French
        "ger" => Some("deu"), // German
        "dut" => Some("nld"), // Dutch
        "gre" => Some("ell"), // Greek
        "chi" => Some("zho"), // Chinese
        "cze" => Some("ces"), // Czech
        "ice" => Some("isl"), // Icelandic
        "alb" => Some("sqi"), // Albanian
        "arm" => Some("hye"), // Armenian
        "baq" => Some("eus"), // Basque
        "bur" => Some("mya"), // Burmese
        "per" => Some("fas"), // Persian
        "geo" => Some("kat"), // Georgian
        "may" => Some("msa"), // Malay
        "mac" => Some("mkd"), // Macedonian
        "rum" => Some("ron"), // Romanian
        "slo" => Some("slk"), // Slovak
        "wel" => Some("cym"), // Welsh
        _ => None,
    }
}

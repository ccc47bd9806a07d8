/*!
 * Tests for language utility functions
 */

use std::str::FromStr;

use m2align::language_utils::{CorpusLanguage, get_language_name, normalize_to_part2t};

/// Test normalization of language codes to ISO 639-2/T format
#[test]
fn test_normalize_to_part2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("de").unwrap(), "deu");
    assert_eq!(normalize_to_part2t("ger").unwrap(), "deu");
    assert_eq!(normalize_to_part2t(" ENG ").unwrap(), "eng");
    assert!(normalize_to_part2t("e").is_err());
    assert!(normalize_to_part2t("123").is_err());
}

/// Test language names for supported codes
#[test]
fn test_get_language_name_withValidCodes_shouldReturnEnglishNames() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("deu").unwrap(), "German");
}

/// Test parsing of corpus languages from CLI strings
#[test]
fn test_corpusLanguage_fromStr_shouldAcceptBothIsoForms() {
    assert_eq!(CorpusLanguage::from_str("en").unwrap(), CorpusLanguage::English);
    assert_eq!(CorpusLanguage::from_str("eng").unwrap(), CorpusLanguage::English);
    assert_eq!(CorpusLanguage::from_str("deu").unwrap(), CorpusLanguage::German);
    assert!(CorpusLanguage::from_str("fra").is_err());
}

/// Test that every supported language round-trips through its codes
#[test]
fn test_corpusLanguage_codes_shouldRoundTrip() {
    for language in CorpusLanguage::ALL {
        assert_eq!(CorpusLanguage::from_code(language.code()).unwrap(), language);
        assert_eq!(CorpusLanguage::from_code(language.part2t()).unwrap(), language);
        assert_eq!(language.to_string(), language.code());
    }
}

/// Test the serialized form used in configuration files
#[test]
fn test_corpusLanguage_serde_shouldUseTwoLetterCodes() {
    assert_eq!(serde_json::to_string(&CorpusLanguage::German).unwrap(), "\"de\"");
    let parsed: CorpusLanguage = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(parsed, CorpusLanguage::English);
}

/*!
 * Tests for sentence alignment and edit merging through the public API
 */

use m2align::alignment::{Aligner, EditSpan, MergePolicy, Merger};
use m2align::annotation::{Annotator, LexiconAnnotator, Sentence, SuffixStemmer};
use m2align::conversion::{ConversionOptions, Converter};
use m2align::language_utils::CorpusLanguage;
use m2align::resources::{Resources, TagMap, WordList};

use crate::common::SAMPLE_LEXICON;

const EXTRA_LEXICON: &str = "I\tPRP\ti
often\tRB\toften
go\tVBP\tgo
home\tNN\thome
";

fn annotator() -> LexiconAnnotator {
    let language = CorpusLanguage::English;
    let lexicon = format!("{}{}", SAMPLE_LEXICON, EXTRA_LEXICON);
    LexiconAnnotator::parse(&lexicon, language, TagMap::for_language(language)).unwrap()
}

fn annotate(text: &str) -> Sentence {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    annotator().annotate(&words)
}

fn converter() -> Converter {
    Converter::new(
        ConversionOptions::default(),
        Resources::builtin(CorpusLanguage::English, WordList::default()),
        Box::new(annotator()),
    )
}

fn merged(orig: &Sentence, cor: &Sentence, policy: MergePolicy) -> Vec<EditSpan> {
    let stemmer = SuffixStemmer::for_language(CorpusLanguage::English);
    let alignment = Aligner::default().align(orig, cor, &stemmer);
    assert!(alignment.validate(orig.len(), cor.len()).is_ok());
    Merger::new(orig, cor).merge(&alignment.ops, policy)
}

/// Test that identical sentences produce no edits
#[test]
fn test_alignEdits_withIdenticalSentences_shouldBeEmpty() {
    let sentence = annotate("It is correct .");
    let edits = converter().align_edits("0", &sentence, &sentence).unwrap();
    assert!(edits.is_empty());
}

/// Test that a swapped adverb becomes a single word-order edit
#[test]
fn test_alignEdits_withSwappedWords_shouldProduceWordOrderEdit() {
    let orig = annotate("I often go home .");
    let cor = annotate("I go often home .");

    let edits = converter().align_edits("0", &orig, &cor).unwrap();

    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0].to_string(), "A 1 3|||R:WO|||go often|||REQUIRED|||-NONE-|||0");
}

/// Test that the merge policy changes how a verb chain is cut
#[test]
fn test_merge_withVerbChain_shouldDependOnPolicy() {
    let orig = annotate("He has eaten .");
    let cor = annotate("He was eating .");

    let rules = merged(&orig, &cor, MergePolicy::Rules);
    assert_eq!(rules, vec![EditSpan::new(1, 3, 1, 3)]);

    let split = merged(&orig, &cor, MergePolicy::AllSplit);
    assert!(split.len() >= 2);

    let all = merged(&orig, &cor, MergePolicy::AllMerge);
    assert_eq!(all, vec![EditSpan::new(1, 3, 1, 3)]);
}

/// Test that edits carry the annotator id and the corrected tokens
#[test]
fn test_alignEdits_withInsertion_shouldUseCorrectedTokens() {
    let orig = annotate("I go .");
    let cor = annotate("I often go .");

    let edits = converter().align_edits("3", &orig, &cor).unwrap();

    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0].orig, Some((1, 1)));
    assert_eq!(edits[0].correction, "often");
    assert_eq!(edits[0].annotator, "3");
    assert!(edits[0].category.starts_with("M:"));
}

/*!
 * Annotated tokens and sentences.
 *
 * A `Sentence` is produced once by an `Annotator` and is read-only afterwards.
 * Every component that inspects the sentence borrows its tokens.
 */

use std::fmt;

/// One word with the linguistic features supplied by the annotator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    // @field: Surface text
    text: String,

    // @field: Fine-grained tag (PTB, STTS, ...)
    tag: String,

    // @field: Coarse universal POS
    pos: String,

    // @field: Lemma (or stem when no lemmatiser is available)
    lemma: String,

    // @field: Dependency label, empty when unparsed
    dep: String,

    // @field: Index of the syntactic head, own index when unknown
    head: usize,

    // @field: Zero-based position in the sentence
    index: usize,
}

impl Token {
    /// Create a token without dependency information
    pub fn new(index: usize, text: &str, tag: &str, pos: &str, lemma: &str) -> Self {
        Self {
            text: text.to_string(),
            tag: tag.to_string(),
            pos: pos.to_string(),
            lemma: lemma.to_string(),
            dep: String::new(),
            head: index,
            index,
        }
    }

    /// Attach a dependency label and head index
    pub fn with_dependency(mut self, dep: &str, head: usize) -> Self {
        self.dep = dep.to_string();
        self.head = head;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn dep(&self) -> &str {
        &self.dep
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Lower-cased surface text
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    /// `text|lemma|tag|pos|dep`, the form used on annotation lines
    pub fn annotation(&self) -> String {
        format!("{}|{}|{}|{}|{}", self.text, self.lemma, self.tag, self.pos, self.dep)
    }
}

/// Annotated sentence, owned by whoever requested the annotation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence from tokens whose indices are already positional
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens in the half-open range `[start, end)`, clamped to the sentence
    pub fn slice(&self, start: usize, end: usize) -> &[Token] {
        let end = end.min(self.tokens.len());
        let start = start.min(end);
        &self.tokens[start..end]
    }

    /// Surface words in order
    pub fn words(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::text).collect()
    }

    /// Dependents of the token at `index`
    pub fn children(&self, index: usize) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(move |t| t.head == index && t.index != index)
    }

    /// Space-joined annotation of every token
    pub fn annotation(&self) -> String {
        self.tokens
            .iter()
            .map(Token::annotation)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.words().join(" "))
    }
}

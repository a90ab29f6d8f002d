// Tokenizers for the two counting modes, plus the sentence splitter used by
// the normalizer.
//
// `WordPatternTokenizer` keeps maximal runs of word characters that are at
// least two characters long, so "3" and "r" disappear and "node.js" becomes
// "node" + "js". `TreebankTokenizer` applies the Penn Treebank rewrite rules
// and splits on whitespace, which keeps single characters, numbers and
// tokens like "c++" intact.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::traits::Tokenizer;

/// Word-character runs of length two or more.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordPatternTokenizer;

impl Tokenizer for WordPatternTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|token| token.chars().nth(1).is_some())
            .map(str::to_string)
            .collect()
    }
}

/// Penn Treebank style tokenizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreebankTokenizer;

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = text.to_string();
        for rule in TREEBANK_RULES.before_padding.iter() {
            text = rule.apply(&text);
        }

        // The ending-quote and contraction rules expect a space on both sides.
        let mut text = format!(" {text} ");
        for rule in TREEBANK_RULES.after_padding.iter() {
            text = rule.apply(&text);
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid treebank pattern"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

struct TreebankRules {
    before_padding: Vec<Rule>,
    after_padding: Vec<Rule>,
}

static TREEBANK_RULES: LazyLock<TreebankRules> = LazyLock::new(|| TreebankRules {
    before_padding: vec![
        // Starting quotes
        Rule::new(r#"^""#, "``"),
        Rule::new(r"(``)", " $1 "),
        Rule::new(r#"([ (\[{<])("|'')"#, "$1 `` "),
        // Punctuation; commas and colons inside numbers stay put
        Rule::new(r"([:,])([^\d])", " $1 $2"),
        Rule::new(r"([:,])$", " $1 "),
        Rule::new(r"\.\.\.", " ... "),
        Rule::new(r"[;@#$%&]", " $0 "),
        // Only the final period of the text is split off
        Rule::new(r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2$3 "),
        Rule::new(r"[?!]", " $0 "),
        Rule::new(r"([^'])' ", "$1 ' "),
        // Brackets
        Rule::new(r"[\]\[(){}<>]", " $0 "),
        Rule::new(r"--", " -- "),
    ],
    after_padding: vec![
        // Ending quotes
        Rule::new(r#"""#, " '' "),
        Rule::new(r"(\S)('')", "$1 $2 "),
        Rule::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
        Rule::new(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
        // Contractions
        Rule::new(r"(?i)\b(can)(not)\b", " $1 $2 "),
        Rule::new(r"(?i)\b(d)('ye)\b", " $1 $2 "),
        Rule::new(r"(?i)\b(gim)(me)\b", " $1 $2 "),
        Rule::new(r"(?i)\b(gon)(na)\b", " $1 $2 "),
        Rule::new(r"(?i)\b(got)(ta)\b", " $1 $2 "),
        Rule::new(r"(?i)\b(lem)(me)\b", " $1 $2 "),
        Rule::new(r"(?i)\b(more)('n)\b", " $1 $2 "),
        Rule::new(r"(?i)\b(wan)(na)\s", " $1 $2 "),
        Rule::new(r"(?i) ('t)(is)\b", " $1 $2 "),
        Rule::new(r"(?i) ('t)(was)\b", " $1 $2 "),
    ],
});

/// Split text into sentences at `.`, `!` or `?` followed by whitespace.
///
/// Returned slices are trimmed and never empty. The terminator stays with
/// its sentence so the Treebank rules can split it off as a final period.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(_, next)) = chars.peek() {
            if next.is_whitespace() {
                let end = i + c.len_utf8();
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treebank(text: &str) -> Vec<String> {
        TreebankTokenizer.tokenize(text)
    }

    #[test]
    fn test_word_pattern_drops_short_tokens() {
        let tokens = WordPatternTokenizer.tokenize("r, c and python 3 on node.js");
        assert_eq!(tokens, vec!["and", "python", "on", "node", "js"]);
    }

    #[test]
    fn test_word_pattern_keeps_underscores_and_unicode() {
        let tokens = WordPatternTokenizer.tokenize("snake_case café");
        assert_eq!(tokens, vec!["snake_case", "café"]);
    }

    #[test]
    fn test_treebank_splits_commas_and_final_period() {
        assert_eq!(
            treebank("python, aws, docker."),
            vec!["python", ",", "aws", ",", "docker", "."]
        );
    }

    #[test]
    fn test_treebank_keeps_numbers_and_inner_periods() {
        assert_eq!(
            treebank("python 3 and node.js, 1,000 rows"),
            vec!["python", "3", "and", "node.js", ",", "1,000", "rows"]
        );
    }

    #[test]
    fn test_treebank_keeps_plus_plus() {
        assert_eq!(treebank("c++ or c#"), vec!["c++", "or", "c", "#"]);
    }

    #[test]
    fn test_treebank_splits_brackets_and_questions() {
        assert_eq!(
            treebank("tools (spark/hive)? yes!"),
            vec!["tools", "(", "spark/hive", ")", "?", "yes", "!"]
        );
    }

    #[test]
    fn test_treebank_splits_contractions() {
        assert_eq!(treebank("we can't cannot"), vec!["we", "ca", "n't", "can", "not"]);
        assert_eq!(treebank("the team's tools"), vec!["the", "team", "'s", "tools"]);
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("sql required. python preferred!  node.js is a plus");
        assert_eq!(
            sentences,
            vec!["sql required.", "python preferred!", "node.js is a plus"]
        );
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("   ").is_empty());
    }
}

use std::ops::Range;

use crate::directive::{Directive, ParsedLabel};
use crate::tag::{TagSpec, TAGS};

/// Decorative character removed everywhere, including the marker prefix itself.
pub const PATH_SEPARATOR: char = '/';

/// Filler character removed from arguments (`bg:dark_blue` → `darkblue`).
const FILLER: char = '_';

// ── Words ─────────────────────────────────────────────────────────────────

/// A whitespace-delimited word of the cleaned label, by byte range.
#[derive(Debug, Clone)]
struct Word {
    span: Range<usize>,
    consumed: bool,
}

fn split_words(src: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, ch) in src.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(Word { span: s..i, consumed: false });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(Word { span: s..src.len(), consumed: false });
    }
    words
}

// ── Parser ────────────────────────────────────────────────────────────────

struct LabelParser<'s> {
    src: &'s str,
    words: Vec<Word>,
}

impl<'s> LabelParser<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, words: split_words(src) }
    }

    fn word(&self, index: usize) -> &'s str {
        &self.src[self.words[index].span.clone()]
    }

    /// Index of the first live word containing `token`.
    fn find_live(&self, token: &str) -> Option<usize> {
        (0..self.words.len()).find(|&i| !self.words[i].consumed && self.word(i).contains(token))
    }

    /// Index of the first live word after `index`.
    fn next_live(&self, index: usize) -> Option<usize> {
        (index + 1..self.words.len()).find(|&i| !self.words[i].consumed)
    }

    /// Consumes the word carrying `tag` and returns its directive.
    ///
    /// When the token ends its word (`bg:  red`), the whitespace run after it
    /// is collapsed by joining the next live word, so the argument is the same
    /// as for `bg:red`.
    fn take(&mut self, tag: &TagSpec) -> Option<Directive> {
        let index = self.find_live(tag.token)?;
        self.words[index].consumed = true;

        if tag.role.is_switch() {
            self.consume_repeats(self.word(index));
            return Some(Directive::new(tag.role, String::new()));
        }

        let mut word = self.word(index).to_owned();
        let dangling = word
            .find(tag.token)
            .is_some_and(|at| at + tag.token.len() == word.len());
        if dangling {
            if let Some(next) = self.next_live(index) {
                self.words[next].consumed = true;
                word.push_str(self.word(next));
            }
        }
        self.consume_repeats(&word);

        let argument: String = word.replace(tag.token, "").chars().filter(|&c| c != FILLER).collect();
        Some(Directive::new(tag.role, argument))
    }

    /// Consumes every live word equal to a claimed one; only the first copy yields a directive.
    fn consume_repeats(&mut self, claimed: &str) {
        for i in 0..self.words.len() {
            if !self.words[i].consumed && self.word(i) == claimed {
                self.words[i].consumed = true;
            }
        }
    }

    /// Rebuilds the text from unconsumed words.
    ///
    /// Each live word is followed by the whitespace that followed it in the
    /// source, so spacing inside the user's text survives. Leading and
    /// trailing whitespace is dropped.
    fn remainder(&self) -> Option<String> {
        let mut text = String::new();
        let mut gap: Option<Range<usize>> = None;

        for (i, word) in self.words.iter().enumerate().filter(|(_, w)| !w.consumed) {
            if let Some(gap) = gap.take() {
                text.push_str(&self.src[gap]);
            }
            text.push_str(&self.src[word.span.clone()]);

            let gap_end = self.words.get(i + 1).map_or(self.src.len(), |next| next.span.start);
            gap = Some(word.span.end..gap_end);
        }

        if text.is_empty() { None } else { Some(text) }
    }
}

/// Tokenizes a tagged row name into plain text and directives.
///
/// The caller has already matched the marker prefix; every `/` is dropped here,
/// so the prefix and any decorative slashes disappear together. Tags are then
/// taken in [`TAGS`] order, each from the first remaining word that contains
/// its token. The input is never modified; the remainder is built once from
/// the words no tag claimed.
///
/// ```
/// use rowpaint_tags::{parse_label, Directive};
///
/// let parsed = parse_label("//gr:red-blue t:white ts:14 hello");
/// assert_eq!(parsed.text.as_deref(), Some("hello"));
/// assert_eq!(parsed.directives[0], Directive::Gradient("red-blue".into()));
/// ```
pub fn parse_label(raw: &str) -> ParsedLabel {
    let cleaned: String = raw.chars().filter(|&c| c != PATH_SEPARATOR).collect();
    let mut parser = LabelParser::new(&cleaned);

    let directives = TAGS.iter().filter_map(|tag| parser.take(tag)).collect();

    ParsedLabel { text: parser.remainder(), directives }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagRole;

    fn arg(label: &str, role: TagRole) -> Option<String> {
        parse_label(label).argument(role).map(str::to_owned)
    }

    // ── extraction ────────────────────────────────────────────────────────

    #[test]
    fn end_to_end_label() {
        let parsed = parse_label("//gr:red-blue t:white ts:14 hello");
        assert_eq!(parsed.text.as_deref(), Some("hello"));
        assert_eq!(
            parsed.directives,
            vec![
                Directive::Gradient("red-blue".into()),
                Directive::TextColor("white".into()),
                Directive::TextSize("14".into()),
            ]
        );
    }

    #[test]
    fn directives_follow_vocabulary_order_not_label_order() {
        let parsed = parse_label("//tf:b,l bg:black");
        let roles: Vec<_> = parsed.directives.iter().map(Directive::role).collect();
        assert_eq!(roles, vec![TagRole::Background, TagRole::TextFormat]);
    }

    #[test]
    fn absent_tag_is_absent() {
        let parsed = parse_label("//just a title");
        assert!(parsed.directives.is_empty());
        assert_eq!(parsed.text.as_deref(), Some("just a title"));
        assert_eq!(parsed.argument(TagRole::Border), None);
    }

    #[test]
    fn filler_underscores_are_dropped_from_argument() {
        assert_eq!(arg("//bg:dark_blue", TagRole::Background).as_deref(), Some("darkblue"));
    }

    #[test]
    fn border_sentinel_survives() {
        assert_eq!(arg("//bg:red b:= Title", TagRole::Border).as_deref(), Some("="));
    }

    // ── whitespace collapsing ─────────────────────────────────────────────

    #[test]
    fn whitespace_after_tag_is_collapsed() {
        assert_eq!(parse_label("//bg:  red"), parse_label("//bg:red"));
    }

    #[test]
    fn collapse_joins_next_unclaimed_word() {
        // `bg:red` is claimed first, so `b:` joins `hello`.
        let parsed = parse_label("//b: bg:red hello");
        assert_eq!(parsed.argument(TagRole::Border), Some("hello"));
        assert_eq!(parsed.argument(TagRole::Background), Some("red"));
        assert_eq!(parsed.text, None);
    }

    #[test]
    fn dangling_tag_at_end_has_empty_argument() {
        let parsed = parse_label("//Title ts:");
        assert_eq!(parsed.argument(TagRole::TextSize), Some(""));
        assert_eq!(parsed.text.as_deref(), Some("Title"));
    }

    // ── switches ──────────────────────────────────────────────────────────

    #[test]
    fn icon_aliases_are_switches() {
        for label in ["//icon: Cam", "//icn: Cam", "//ic: Cam"] {
            let parsed = parse_label(label);
            assert_eq!(parsed.directives, vec![Directive::Icon], "{label}");
            // A switch never swallows the following word.
            assert_eq!(parsed.text.as_deref(), Some("Cam"), "{label}");
        }
    }

    #[test]
    fn present_switch_reports_empty_argument() {
        assert_eq!(arg("//icon:", TagRole::Icon).as_deref(), Some(""));
    }

    // ── stripping ─────────────────────────────────────────────────────────

    #[test]
    fn stripping_is_complete() {
        let parsed = parse_label("//gr:red-blue bg:black b:white t:red bs:3 ts:12 tf:n,r icon: My/Group");
        let text = parsed.text.unwrap();
        assert_eq!(text, "MyGroup");
        assert!(!text.contains('/'));
        for tag in TAGS.iter() {
            assert!(!text.contains(tag.token), "{} left in {text:?}", tag.token);
        }
    }

    #[test]
    fn marker_only_label_has_no_text() {
        assert_eq!(parse_label("//").text, None);
        assert_eq!(parse_label("// bg:red  ").text, None);
    }

    #[test]
    fn inner_whitespace_runs_are_kept() {
        assert_eq!(parse_label("//  two   words ").text.as_deref(), Some("two   words"));
    }

    #[test]
    fn claimed_word_takes_its_following_whitespace() {
        assert_eq!(parse_label("//My  bg:red Title").text.as_deref(), Some("My  Title"));
        assert_eq!(parse_label("//bg:red   Title").text.as_deref(), Some("Title"));
    }

    #[test]
    fn repeated_tag_words_are_all_stripped() {
        let parsed = parse_label("//bg:red bg:red Title");
        assert_eq!(parsed.text.as_deref(), Some("Title"));
        assert_eq!(parsed.directives, vec![Directive::Background("red".into())]);

        assert_eq!(parse_label("//icon: icon: Cam").text.as_deref(), Some("Cam"));
        assert_eq!(parse_label("//ts:14 ts:14 Hi").text.as_deref(), Some("Hi"));
    }

    #[test]
    fn repeat_of_collapsed_tag_is_stripped() {
        // `bg: red` is claimed as `bg:red`, so a later literal `bg:red` is the same word.
        assert_eq!(parse_label("//bg: red bg:red Title").text.as_deref(), Some("Title"));
    }

    #[test]
    fn differing_repeat_is_left_in_text() {
        let parsed = parse_label("//bg:red bg:blue Title");
        assert_eq!(parsed.argument(TagRole::Background), Some("red"));
        assert_eq!(parsed.text.as_deref(), Some("bg:blue Title"));
    }

    // ── ambiguity ─────────────────────────────────────────────────────────

    #[test]
    fn first_tag_in_vocabulary_claims_a_shared_word() {
        // `rgb:` contains `b:`, and `b:` is checked before `t:`.
        let parsed = parse_label("//t:rgb:1,1,1 Title");
        assert_eq!(parsed.argument(TagRole::Border), Some("t:rg1,1,1"));
        assert!(!parsed.has(TagRole::TextColor));
    }

    #[test]
    fn tags_are_case_sensitive() {
        let parsed = parse_label("//BG:red");
        assert!(parsed.directives.is_empty());
        assert_eq!(parsed.text.as_deref(), Some("BG:red"));
    }
}

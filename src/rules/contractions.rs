use crate::text::compile_pattern;
use crate::{PatternRule, Resolution};

/// Expanded auxiliaries to contractions.
///
/// Ordering invariants:
/// - `will not` / `would not` precede the subject + will/would forms
///   ("I will not" becomes "I won't", not "I'll not").
/// - subject + `is`/`are`/`has` forms precede the bare negations
///   ("It is not" becomes "It's not", "who has not" becomes "who's not").
///
/// Subject + auxiliary forms only contract when another word follows, so a
/// clause-final "what it is" or "yes, I will" stays expanded.
pub fn rules() -> Vec<PatternRule> {
    vec![
        phrase!("will not" => "won't"),
        phrase!("would not" => "wouldn't"),
        // subject + be / has
        before_word("who has", "who", "has", "${1}'s${2}"),
        before_word("who is", "who", "is", "${1}'s${2}"),
        before_word("it is", "it", "is", "${1}'s${2}"),
        before_word("that is", "that", "is", "${1}'s${2}"),
        before_word("there is", "there", "is", "${1}'s${2}"),
        before_word("here is", "here", "is", "${1}'s${2}"),
        before_word("what is", "what", "is", "${1}'s${2}"),
        before_word("he is", "he", "is", "${1}'s${2}"),
        before_word("she is", "she", "is", "${1}'s${2}"),
        before_word("I am", "I", "am", "I'm${2}"),
        before_word("you are", "you", "are", "${1}'re${2}"),
        before_word("we are", "we", "are", "${1}'re${2}"),
        before_word("they are", "they", "are", "${1}'re${2}"),
        // subject + have been
        phrase!("I have been" => "I've been"),
        phrase!("you have been" => "you've been"),
        phrase!("we have been" => "we've been"),
        phrase!("they have been" => "they've been"),
        // subject + will / would
        before_word("I will", "I", "will", "I'll${2}"),
        before_word("you will", "you", "will", "${1}'ll${2}"),
        before_word("we will", "we", "will", "${1}'ll${2}"),
        before_word("they will", "they", "will", "${1}'ll${2}"),
        before_word("he will", "he", "will", "${1}'ll${2}"),
        before_word("she will", "she", "will", "${1}'ll${2}"),
        before_word("it will", "it", "will", "${1}'ll${2}"),
        before_word("I would", "I", "would", "I'd${2}"),
        before_word("you would", "you", "would", "${1}'d${2}"),
        before_word("we would", "we", "would", "${1}'d${2}"),
        before_word("they would", "they", "would", "${1}'d${2}"),
        // negations
        phrase!("cannot" => "can't"),
        phrase!("can not" => "can't"),
        phrase!("do not" => "don't"),
        phrase!("does not" => "doesn't"),
        phrase!("did not" => "didn't"),
        phrase!("is not" => "isn't"),
        phrase!("are not" => "aren't"),
        phrase!("was not" => "wasn't"),
        phrase!("were not" => "weren't"),
        phrase!("has not" => "hasn't"),
        phrase!("have not" => "haven't"),
        phrase!("had not" => "hadn't"),
        phrase!("should not" => "shouldn't"),
        phrase!("could not" => "couldn't"),
        phrase!("must not" => "mustn't"),
        // informal
        rule!(
            name: "going to",
            re: r"(?i)\bgoing\s+to\s+(be|do|get|have|make|take|see|go|try|keep|start|say|tell|need|want|happen|work|change|find|give|put|show|look|leave|stay|lose|win)\b",
            to: "gonna ${1}",
        ),
        rule!(
            name: "let us",
            re: r"(?i)\blet\s+us\s+(go|see|start|try|begin|move|talk|look|take|get|make|say|think|focus|turn)\b",
            to: "let's ${1}",
        ),
    ]
}

fn before_word(name: &'static str, subject: &str, aux: &str, to: &'static str) -> PatternRule {
    let pattern = format!(r"(?i)\b({subject})\s+{aux}(\s+\w)");
    PatternRule::new(name, compile_pattern(&pattern), Resolution::Fixed(to))
}

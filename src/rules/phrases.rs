//! AI-phrase and drama tables (randomized resolutions).
//!
//! Candidates are written lowercase; a match that starts with a capital
//! letter gets a capitalized candidate. An empty candidate drops the phrase
//! together with the whitespace after it.

use crate::PatternRule;

/// Formal transitions and hedges, longest first.
pub fn ai_phrase_rules() -> Vec<PatternRule> {
    vec![
        // hedges
        rule!(
            name: "it is important to note that",
            re: r"(?i)\bit\s+is\s+important\s+to\s+note\s+that\s*",
            to: ["", "keep in mind ", "note that "],
        ),
        rule!(
            name: "it is worth noting that",
            re: r"(?i)\bit\s+is\s+worth\s+noting\s+that\s*",
            to: ["", "keep in mind ", "oh, and "],
        ),
        rule!(
            name: "it should be noted that",
            re: r"(?i)\bit\s+should\s+be\s+noted\s+that\s*",
            to: ["", "note that "],
        ),
        rule!(
            name: "it is crucial to",
            re: r"(?i)\bit\s+is\s+(?:crucial|essential|vital)\s+to\b",
            to: ["you really need to", "you have to"],
        ),
        rule!(
            name: "it goes without saying that",
            re: r"(?i)\bit\s+goes\s+without\s+saying\s+that\s*",
            to: ["", "obviously "],
        ),
        // closing transitions
        rule!(
            name: "in conclusion,",
            re: r"(?i)\bin\s+conclusion,\s*",
            to: ["so ", "all in all, ", "bottom line, ", ""],
        ),
        rule!(
            name: "in summary,",
            re: r"(?i)\bin\s+summary,\s*",
            to: ["so ", "in short, ", ""],
        ),
        rule!(
            name: "to sum up,",
            re: r"(?i)\bto\s+sum\s+up,\s*",
            to: ["so ", "in short, ", ""],
        ),
        // additive transitions
        rule!(
            name: "furthermore,",
            re: r"(?i)\bfurthermore,\s*",
            to: ["and ", "plus ", "also ", ""],
        ),
        rule!(
            name: "moreover,",
            re: r"(?i)\bmoreover,\s*",
            to: ["and ", "plus ", "also ", ""],
        ),
        rule!(
            name: "additionally,",
            re: r"(?i)\badditionally,\s*",
            to: ["also ", "plus ", "and "],
        ),
        rule!(
            name: "in addition,",
            re: r"(?i)\bin\s+addition,\s*",
            to: ["also ", "plus ", "on top of that, "],
        ),
        // contrastive transitions
        rule!(
            name: "nevertheless,",
            re: r"(?i)\bnevertheless,\s*",
            to: ["still, ", "even so, ", "but "],
        ),
        rule!(
            name: "nonetheless,",
            re: r"(?i)\bnonetheless,\s*",
            to: ["still, ", "even so, ", "but "],
        ),
        rule!(
            name: "on the other hand,",
            re: r"(?i)\bon\s+the\s+other\s+hand,\s*",
            to: ["then again, ", "but "],
        ),
        // causal transitions
        rule!(
            name: "consequently,",
            re: r"(?i)\bconsequently,\s*",
            to: ["so ", "because of that, "],
        ),
        rule!(
            name: "as a result,",
            re: r"(?i)\bas\s+a\s+result,\s*",
            to: ["so ", "because of that, "],
        ),
        rule!(
            name: "therefore,",
            re: r"(?i)\btherefore,\s*",
            to: ["so ", "that's why "],
        ),
        rule!(
            name: "thus,",
            re: r"(?i)\bthus,\s*",
            to: ["so "],
        ),
        // sequencing
        rule!(
            name: "ultimately,",
            re: r"(?i)\bultimately,\s*",
            to: ["in the end, ", "at the end of the day, "],
        ),
        rule!(
            name: "overall,",
            re: r"(?i)\boverall,\s*",
            to: ["all in all, ", "on the whole, ", ""],
        ),
        rule!(name: "firstly,", re: r"(?i)\bfirstly,\s*", to: ["first, ", "to start, "]),
        rule!(name: "secondly,", re: r"(?i)\bsecondly,\s*", to: ["second, ", "next, "]),
        rule!(name: "lastly,", re: r"(?i)\blastly,\s*", to: ["finally, ", "last, "]),
        // stock phrasing
        rule!(
            name: "in today's world",
            re: r"(?i)\bin\s+today's\s+(?:fast-paced\s+|digital\s+|modern\s+)?world\b",
            to: ["these days", "nowadays", "today"],
        ),
        rule!(
            name: "plays a crucial role in",
            re: r"(?i)\bplays\s+a\s+(?:crucial|pivotal|vital|key|significant)\s+role\s+in\b",
            to: ["matters a lot for", "is a big part of"],
        ),
        rule!(
            name: "navigate the complexities of",
            re: r"(?i)\bnavigate\s+the\s+complexities\s+of\b",
            to: ["deal with", "handle", "work through"],
        ),
        phrase!("delves into" => ["digs into", "looks at", "gets into"]),
        phrase!("delve into" => ["dig into", "look at", "get into"]),
        phrase!("a testament to" => ["proof of", "a sign of"]),
        phrase!("in the realm of" => ["in", "when it comes to"]),
        phrase!("a myriad of" => ["lots of", "plenty of", "tons of"]),
        phrase!("a plethora of" => ["lots of", "plenty of", "tons of"]),
    ]
}

/// Intensifiers. No candidate is itself a target of this table.
pub fn drama_rules() -> Vec<PatternRule> {
    vec![
        phrase!("extremely" => ["really", "super", "seriously"]),
        phrase!("significantly" => ["really", "noticeably", "seriously"]),
        phrase!("incredibly" => ["really", "super"]),
        phrase!("exceptionally" => ["really", "unusually"]),
        phrase!("remarkably" => ["surprisingly", "pretty"]),
        phrase!("absolutely" => ["totally", "really"]),
        phrase!("very" => ["really", "pretty", "quite"]),
        phrase!("tremendous" => ["huge", "big"]),
        phrase!("paramount" => ["key", "really important"]),
        phrase!("crucial" => ["key", "important", "big"]),
        phrase!("vital" => ["key", "important"]),
        phrase!("pivotal" => ["key", "big"]),
        phrase!("groundbreaking" => ["new", "fresh"]),
        phrase!("revolutionary" => ["new", "big"]),
        phrase!("seamless" => ["smooth", "easy"]),
        phrase!("seamlessly" => ["smoothly", "easily"]),
    ]
}

use crate::PatternRule;

/// Formal vocabulary to plain English.
///
/// Multi-word phrases come first. No replacement is matched by any entry in
/// this table, which keeps the pass idempotent (checked in `rules::tests`).
pub fn rules() -> Vec<PatternRule> {
    vec![
        // phrases
        phrase!("due to the fact that" => "because"),
        phrase!("in the event that" => "if"),
        phrase!("at this point in time" => "now"),
        phrase!("with regard to" => "about"),
        phrase!("in light of" => "given"),
        phrase!("a majority of" => "most"),
        phrase!("in order to" => "to"),
        phrase!("prior to" => "before"),
        // verbs
        phrase!("utilize" => "use"),
        phrase!("utilizes" => "uses"),
        phrase!("utilized" => "used"),
        phrase!("utilizing" => "using"),
        phrase!("utilization" => "use"),
        phrase!("leverage" => "use"),
        phrase!("facilitate" => "help"),
        phrase!("facilitates" => "helps"),
        phrase!("facilitated" => "helped"),
        phrase!("assist" => "help"),
        phrase!("assists" => "helps"),
        phrase!("ascertain" => "find out"),
        phrase!("comprehend" => "understand"),
        phrase!("commence" => "start"),
        phrase!("commenced" => "started"),
        phrase!("terminate" => "end"),
        phrase!("terminated" => "ended"),
        phrase!("purchase" => "buy"),
        phrase!("purchased" => "bought"),
        phrase!("demonstrate" => "show"),
        phrase!("demonstrates" => "shows"),
        phrase!("demonstrated" => "showed"),
        phrase!("indicate" => "show"),
        phrase!("indicates" => "shows"),
        phrase!("obtain" => "get"),
        phrase!("obtained" => "got"),
        phrase!("require" => "need"),
        phrase!("requires" => "needs"),
        phrase!("possess" => "have"),
        phrase!("possesses" => "has"),
        phrase!("inquire" => "ask"),
        phrase!("modify" => "change"),
        phrase!("enhance" => "improve"),
        phrase!("enhances" => "improves"),
        phrase!("endeavor" => "try"),
        phrase!("implement" => "put in place"),
        // adjectives, adverbs, nouns
        phrase!("additional" => "more"),
        phrase!("numerous" => "many"),
        phrase!("sufficient" => "enough"),
        phrase!("approximately" => "about"),
        phrase!("regarding" => "about"),
        phrase!("subsequently" => "later"),
        phrase!("optimal" => "best"),
        phrase!("beneficial" => "helpful"),
        phrase!("individuals" => "people"),
        phrase!("methodology" => "method"),
        phrase!("paradigm" => "model"),
    ]
}

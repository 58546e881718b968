/// What the operator chose at the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Close,
    Abort,
}

/// Only `y` (any case) confirms. The line terminator is ignored; anything
/// else, including an empty line, aborts.
pub fn decide(answer: &str) -> Decision {
    let answer = answer.trim_end_matches(['\n', '\r']);
    if answer.eq_ignore_ascii_case("y") {
        Decision::Close
    } else {
        Decision::Abort
    }
}

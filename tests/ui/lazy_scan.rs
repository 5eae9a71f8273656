use sensitive_filter::{Automaton, Occurrence, Occurrences};

fn first(occurrences: Occurrences<'_>) -> Option<Occurrence> {
    occurrences.take(1).next()
}

fn main() {
    let automaton = Automaton::builder().words(&["foo", "oo"]).build();

    assert_eq!(first(automaton.scan("xfoo")), Some(Occurrence::new(1, 3)));
}

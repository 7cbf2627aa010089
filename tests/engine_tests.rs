/// End-to-end playthroughs — scripted tokens in, captured narration out.
use std::io::Cursor;

use darkwood::engine::{Ending, Engine, Pacing};
use darkwood::story::graph::dark_forest_scenario;

/// Run the scenario against a scripted input, one token per line.
fn play(script: &str) -> (Ending, String) {
    let graph = dark_forest_scenario();
    let mut out = Vec::new();
    let mut engine = Engine::new(Cursor::new(script.as_bytes()), &mut out, Pacing::instant());
    let ending = engine.run(&graph).unwrap();
    (ending, String::from_utf8(out).unwrap())
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn eating_the_berries_is_fatal() {
    let (ending, out) = play("2\n1\n");
    assert_eq!(ending, Ending::Died);
    assert!(out.contains("The berries were poisonous!"));
}

#[test]
fn searching_past_the_berries_survives_the_night() {
    let (ending, out) = play("2\n2\n");
    assert_eq!(ending, Ending::Survived);
    assert!(out.contains("You survive the night. Well done!"));
    assert!(out.contains("You made it through alive."));
}

#[test]
fn fighting_the_bear_is_fatal() {
    let (ending, out) = play("1\n1\n1\n");
    assert_eq!(ending, Ending::Died);
    assert!(out.contains("The bear overpowers you."));
}

#[test]
fn giving_up_on_the_cave_is_fatal() {
    let (ending, out) = play("1\n2\n");
    assert_eq!(ending, Ending::Died);
    assert!(out.contains("you don't survive the night"));
}

#[test]
fn fleeing_the_cave_loops_back_to_the_shelter_search() {
    // Flee the bear, then give up on shelter the second time around.
    let (ending, out) = play("1\n1\n2\n2\n");
    assert_eq!(ending, Ending::Died);
    assert!(out.contains("the bear doesn't chase you"));
    assert!(out.contains("you don't survive the night"));
    // The loop re-enters the shelter scene, not the start of the story.
    assert_eq!(count(&out, "you find a small cave"), 2);
    assert_eq!(count(&out, "You wake up in a dark, scary forest"), 1);
}

#[test]
fn invalid_tokens_reprompt_without_advancing() {
    let (ending, out) = play("3\nx\n2\n2\n");
    assert_eq!(ending, Ending::Survived);
    assert_eq!(count(&out, "Invalid choice. Try again."), 2);
    // The opening menu shows three times: once up front, twice on retry.
    assert_eq!(count(&out, "1. Look for shelter."), 3);
    // Neither bad token leaked the story forward.
    assert_eq!(count(&out, "You wake up in a dark, scary forest"), 1);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let (ending, _) = play("  2  \n\t2\n");
    assert_eq!(ending, Ending::Survived);
}

#[test]
fn exhausted_input_is_an_error_not_a_hang() {
    let graph = dark_forest_scenario();
    let mut out = Vec::new();
    let mut engine = Engine::new(Cursor::new(&b""[..]), &mut out, Pacing::instant());
    assert!(engine.run(&graph).is_err());
}

#[test]
fn prompt_line_names_the_valid_tokens() {
    let (_, out) = play("2\n2\n");
    assert!(out.contains("Enter your choice (1 or 2): "));
}

use std::io::Cursor;

use poker_hand_verifier::{Console, OutputFormat, VerifierConfig};

fn run_session(input: &str, config: VerifierConfig) -> String {
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), config);
    console.run().expect("session should finish cleanly");
    String::from_utf8(console.into_output()).expect("console writes UTF-8")
}

fn count_lines(output: &str, line: &str) -> usize {
    output.lines().filter(|l| *l == line).count()
}

fn text_config(seed: u64) -> VerifierConfig {
    VerifierConfig {
        seed: Some(seed),
        output: OutputFormat::Text,
    }
}

#[test]
fn test_quit_immediately() {
    let output = run_session("q\n", text_config(1));
    assert!(output.contains("Welcome to the Poker Hand Verifier!"));
    assert!(output.contains("- Randomly generate cards: R or r"));
    assert!(output.trim_end().ends_with("Quit program"));
    assert!(!output.contains(">Dealer"));
}

#[test]
fn test_manual_round() {
    let output = run_session("m\n2C2D5H9SKC 3C3D4H8SKD\nq\n", text_config(1));
    assert_eq!(count_lines(&output, "Manually enter cards"), 1);
    assert!(output.contains("Hand 2 wins with One Pair"));
    assert!(output.contains("- Play again: P or p"));
}

#[test]
fn test_manual_round_tie() {
    let output = run_session("M\n2C5D9HJSKC 2H5S9CJDKS\nQ\n", text_config(1));
    assert!(output.contains("Tie with High Card"));
}

#[test]
fn test_manual_round_reprompts_until_valid() {
    let input = "m\n2C2D5H9SKC\n2C2D5H9SKX 3C3D4H8SKD\n2C2D5H9SKC 3C3D4H8SKC\n4C4D4H9S9C ACADAHAS2C\nq\n";
    let output = run_session(input, text_config(1));

    assert!(output.contains("Please input two hands separated by a space."));
    assert!(output.contains("Invalid characters for card detected: KX"));
    assert!(output.contains("Duplicate card detected: KC"));
    assert!(output.contains("Hand 2 wins with Four of a Kind"));
    assert_eq!(output.matches(">Dealer ").count(), 4);
}

#[test]
fn test_invalid_menu_key_is_rejected() {
    let output = run_session("x\np\nq\n", text_config(1));
    assert!(output.contains("x is not valid. Please enter a valid character:"));
    // Play again is only offered after a round
    assert!(output.contains("p is not valid. Please enter a valid character:"));
    assert!(output.trim_end().ends_with("Quit program"));
}

#[test]
fn test_play_again_runs_another_round() {
    let output = run_session("r\np\nr\nq\n", text_config(3));
    assert_eq!(count_lines(&output, "Randomly generate cards"), 2);
    assert_eq!(output.matches(">Dealer ").count(), 2);
    assert_eq!(count_lines(&output, "Play again"), 1);
}

#[test]
fn test_seeded_random_rounds_repeat() {
    let first = run_session("r\nq\n", text_config(42));
    let second = run_session("r\nq\n", text_config(42));
    assert_eq!(first, second);

    let dealt = first
        .lines()
        .find(|line| line.starts_with(">Dealer "))
        .expect("dealt hands are shown");
    // ">Dealer " then two hands of ten characters separated by a space
    assert_eq!(dealt.len(), 8 + 21);
}

#[test]
fn test_end_of_input_quits() {
    let output = run_session("m\n", text_config(1));
    assert_eq!(count_lines(&output, "Manually enter cards"), 1);
    assert!(output.trim_end().ends_with("Quit program"));

    let output = run_session("", text_config(1));
    assert!(output.trim_end().ends_with("Quit program"));
}

#[test]
fn test_json_output() {
    let config = VerifierConfig {
        seed: Some(1),
        output: OutputFormat::Json,
    };
    let output = run_session("m\n2C2D5H9SKC 3C3D4H8SKD\nq\n", config);

    // The outcome follows the `>Dealer ` prompt on the same line
    let json_line = output
        .lines()
        .find_map(|line| line.find('{').map(|start| &line[start..]))
        .expect("outcome printed as JSON");
    let value: serde_json::Value = serde_json::from_str(json_line).unwrap();

    assert_eq!(value["verdict"], "PlayerB");
    assert_eq!(value["category"], "OnePair");
    assert_eq!(value["player_b"]["tie_break"], serde_json::json!(["Three", "King", "Eight", "Four"]));
}

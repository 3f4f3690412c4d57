#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Regression tests for marketcrew-trace: buffering discipline, colour
//! rotation, idempotence on clean text, and a realistic crew transcript.

use marketcrew_core::TraceSink;
use marketcrew_trace::{Annotator, AnnotatorConfig, MemoryDisplay, CHAIN_ENTERED, CHAIN_FINISHED};

fn roster_config() -> AnnotatorConfig {
    AnnotatorConfig::default().with_role_markers([
        "Lead Market Analyst",
        "Chief Marketing Strategist",
        "Creative Content Creator",
    ])
}

// --- Buffering ---

#[test]
fn test_partial_then_rest_flushes_exactly_once() {
    let mut a = Annotator::new(&roster_config(), MemoryDisplay::default()).unwrap();
    a.consume("partial");
    assert!(a.sink().flushes.is_empty());
    a.consume("rest\n");
    assert_eq!(a.sink().flushes, vec!["partialrest\n".to_string()]);
}

#[test]
fn test_markers_split_across_chunks_are_not_tagged() {
    // Markers are matched per chunk; a marker cut in half stays plain.
    let mut a = Annotator::new(&roster_config(), MemoryDisplay::default()).unwrap();
    a.consume("Lead Market ");
    a.consume("Analyst\n");
    assert_eq!(a.sink().flushes, vec!["Lead Market Analyst\n".to_string()]);
}

// --- Idempotence ---

#[test]
fn test_clean_text_is_byte_identical_modulo_buffering() {
    let input = [
        "The station reaches ",
        "40,000 listeners.\n",
        "Competitors: none with the same format.\n",
        "trailing",
    ];
    let mut a = Annotator::new(&roster_config(), MemoryDisplay::default()).unwrap();
    for chunk in input {
        a.consume(chunk);
    }
    let display = a.finish();
    assert_eq!(display.flushes.concat(), input.concat());
}

// --- Colour rotation ---

#[test]
fn test_four_colour_palette_five_rotations() {
    let config = AnnotatorConfig {
        palette: vec![
            "c0".to_string(),
            "c1".to_string(),
            "c2".to_string(),
            "c3".to_string(),
        ],
        role_markers: Vec::new(),
    };
    let mut a = Annotator::new(&config, MemoryDisplay::default()).unwrap();
    for _ in 0..5 {
        a.consume(&format!("> {CHAIN_ENTERED}...\n"));
    }

    let colors: Vec<&str> = a
        .sink()
        .flushes
        .iter()
        .map(|f| f.split('[').next().unwrap().trim_start_matches("> :"))
        .collect();
    assert_eq!(colors, vec!["c1", "c2", "c3", "c0", "c1"]);
}

#[test]
fn test_second_chain_rotates_role_colour() {
    let mut a = Annotator::new(&roster_config(), MemoryDisplay::default()).unwrap();
    a.consume(&format!("{CHAIN_ENTERED}\n"));
    a.consume("Lead Market Analyst\n");
    a.consume(&format!("{CHAIN_ENTERED}\n"));
    a.consume("Lead Market Analyst\n");
    let flushes = &a.sink().flushes;
    assert_eq!(flushes[1], ":green[Lead Market Analyst]\n");
    assert_eq!(flushes[3], ":blue[Lead Market Analyst]\n");
}

// --- Transcript ---

#[test]
fn test_crew_transcript() {
    let transcript = [
        "\x1b[1m\x1b[95m [DEBUG]: == Working Agent: Lead Market Analyst\x1b[00m\n",
        "\x1b[1m\x1b[95m [INFO]: == Starting Task: product_analysis\x1b[00m\n",
        "\n\n\x1b[1m> Entering new CrewAgentExecutor chain...\x1b[0m\n",
        "Final Answer: ",
        "Mary Cranston hosts a daily minute.",
        "\n",
        "\n\x1b[1m> Finished chain.\x1b[0m\n",
    ];

    let mut a = Annotator::new(&roster_config(), MemoryDisplay::default()).unwrap();
    {
        let sink: &mut dyn TraceSink = &mut a;
        for chunk in transcript {
            sink.write(chunk);
        }
    }
    let display = a.finish();

    assert_eq!(display.notifications, vec!["product_analysis".to_string()]);
    assert_eq!(display.flushes.len(), 5);
    assert_eq!(
        display.flushes[0],
        " [DEBUG]: == Working Agent: :red[Lead Market Analyst]\n"
    );
    assert_eq!(
        display.flushes[2],
        format!("\n\n> :green[{CHAIN_ENTERED}]...\n")
    );
    assert_eq!(
        display.flushes[3],
        "Final Answer: Mary Cranston hosts a daily minute.\n"
    );
    assert_eq!(display.flushes[4], format!("\n> :green[{CHAIN_FINISHED}]\n"));
}

// --- Config ---

#[test]
fn test_config_from_toml() {
    let config: AnnotatorConfig = toml::from_str(
        r#"
        role_markers = ["Senior Photographer"]
    "#,
    )
    .unwrap();
    assert_eq!(config.palette, vec!["red", "green", "blue", "orange"]);
    assert_eq!(config.role_markers, vec!["Senior Photographer"]);
}

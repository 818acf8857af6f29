use escape_time_explorer::{
    AsciiFrame, DEFAULT_ASCII_HEIGHT, DEFAULT_ASCII_ITERATIONS, DEFAULT_ASCII_WIDTH,
};

const DEFAULT_FRAME: &str = include_str!("fixtures/ascii_default_frame.txt");

#[test]
fn default_frame_matches_reference_output() {
    let frame = AsciiFrame::new(
        DEFAULT_ASCII_WIDTH,
        DEFAULT_ASCII_HEIGHT,
        DEFAULT_ASCII_ITERATIONS,
    )
    .unwrap();

    let rendered = frame.render();

    for (row, (ours, expected)) in rendered.lines().zip(DEFAULT_FRAME.lines()).enumerate() {
        assert_eq!(ours, expected, "row {}", row);
    }
    assert_eq!(rendered, DEFAULT_FRAME);
}

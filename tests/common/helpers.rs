use indicatif::TermLike;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
use std::io;
use std::sync::{Arc, Mutex};
use rainbar::progress::TrailStyle;
use rainbar::{CaptureWriter, ProgressBar, ProgressBarBuilder, RefreshMethod};

// Common test constants
pub const TEST_NAME: &str = "Download";
pub const TEST_COLUMNS: usize = 80;
pub const TEST_EMBLEM: &str = ">";
pub const TEST_GLYPH: char = '~';

// === Style Helpers ===

/// Creates an uncolored style with a one column emblem
pub fn create_plain_style() -> TrailStyle {
    TrailStyle::plain().with_emblem(TEST_EMBLEM)
}

/// Creates a style that always emits color sequences
pub fn create_colored_style() -> TrailStyle {
    TrailStyle::default()
        .with_emblem(TEST_EMBLEM)
        .with_color_mode(rainbar::ColorMode::Always)
}

// === Bar Helpers ===

/// Creates a capture writer with the common test width
pub fn create_capture_writer() -> CaptureWriter {
    CaptureWriter::new(TEST_COLUMNS)
}

/// Creates a bar drawing into a capture writer
pub fn create_test_bar(
    max: u64,
    refresh_method: RefreshMethod,
    style: TrailStyle,
) -> (ProgressBar, CaptureWriter) {
    let capture = create_capture_writer();
    let bar = ProgressBarBuilder::new(TEST_NAME, max)
        .refresh_method(refresh_method)
        .style(style)
        .writer(capture.clone())
        .build();
    (bar, capture)
}

/// Creates an event-driven bar with the plain style
pub fn create_event_bar(max: u64) -> (ProgressBar, CaptureWriter) {
    create_test_bar(max, RefreshMethod::Event, create_plain_style())
}

/// Creates a timer-driven bar with the plain style
pub fn create_interval_bar(max: u64) -> (ProgressBar, CaptureWriter) {
    create_test_bar(max, RefreshMethod::Interval, create_plain_style())
}

// === HTTP Helpers ===

/// Creates response headers announcing `length` bytes
pub fn create_content_length_headers(length: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static(length));
    headers
}

/// Creates body chunks of the given sizes
pub fn create_chunks(sizes: &[usize]) -> Vec<Result<Vec<u8>, io::Error>> {
    sizes
        .iter()
        .map(|size| Ok((0..*size).map(|i| (i % 256) as u8).collect()))
        .collect()
}

// === Terminal Helpers ===

/// A terminal that records everything written to it
#[derive(Debug, Clone)]
pub struct RecordingTerm {
    width: u16,
    output: Arc<Mutex<String>>,
}

impl RecordingTerm {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            output: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn contents(&self) -> String {
        self.output.lock().expect("poisoned terminal").clone()
    }

    fn push(&self, s: &str) {
        self.output.lock().expect("poisoned terminal").push_str(s);
    }
}

impl TermLike for RecordingTerm {
    fn width(&self) -> u16 {
        self.width
    }

    fn move_cursor_up(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_down(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_right(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_left(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        self.push(s);
        self.push("\n");
        Ok(())
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        self.push(s);
        Ok(())
    }

    fn clear_line(&self) -> io::Result<()> {
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

// === Assertion Helpers ===

/// Counts the trail glyphs of a plain line
pub fn count_glyphs(line: &str) -> usize {
    line.chars().filter(|c| *c == TEST_GLYPH).count()
}

/// Expected trail length for the common test name, width and emblem
pub fn expected_trail_len(value: u64, max: u64) -> usize {
    let available = TEST_COLUMNS - TEST_NAME.len() - (10 + TEST_EMBLEM.len() + 5);
    (available as f64 * (value as f64 / max as f64)).floor() as usize
}

/// Asserts the number of frames and line terminators recorded
pub fn assert_frames(capture: &CaptureWriter, frames: usize, terminations: usize) {
    assert_eq!(capture.frames().len(), frames, "unexpected frame count");
    assert_eq!(
        capture.terminations(),
        terminations,
        "unexpected line terminator count"
    );
}

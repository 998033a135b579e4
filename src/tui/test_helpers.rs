use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Flatten the terminal buffer into one string.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Assert that the rendered buffer contains the given text.
pub fn assert_buffer_contains(terminal: &Terminal<TestBackend>, text: &str) {
    let content = buffer_text(terminal);
    assert!(
        content.contains(text),
        "Buffer does not contain '{text}'.\nBuffer content: {content}"
    );
}

/// Assert that the rendered buffer does not contain the given text.
pub fn assert_buffer_lacks(terminal: &Terminal<TestBackend>, text: &str) {
    let content = buffer_text(terminal);
    assert!(
        !content.contains(text),
        "Buffer unexpectedly contains '{text}'.\nBuffer content: {content}"
    );
}

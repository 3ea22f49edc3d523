/// Ctrl+Enter submits the prompt from inside the text area.
pub fn is_submit_shortcut(key: &str, ctrl: bool) -> bool {
    ctrl && key == "Enter"
}

//! Embedded prompt resources and the placeholder renderer.
//!
//! The four templates live as markdown under `prompts/` and are compiled into
//! the binary. Placeholders use the `{{name}}` form.

/// System prompt for posts written from a free-text topic
pub const TEXT_SYSTEM_PROMPT: &str = include_str!("../../prompts/system_text.md");

/// System prompt for teaser posts written from a video transcript
pub const VIDEO_SYSTEM_PROMPT: &str = include_str!("../../prompts/system_video.md");

/// User prompt template for free-text topics
pub const TEXT_USER_TEMPLATE: &str = include_str!("../../prompts/user_text.md");

/// User prompt template for video URLs
pub const VIDEO_USER_TEMPLATE: &str = include_str!("../../prompts/user_video.md");

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Render `template`, replacing each `{{name}}` whose name appears in `values`.
///
/// Rendering is a single pass: substituted text is copied to the output and
/// never scanned again. Unknown placeholders are kept verbatim.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

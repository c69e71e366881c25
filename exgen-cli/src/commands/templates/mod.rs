pub mod project;
pub mod resource;

/// Simple template rendering: replaces `{{key}}` with value.
///
/// Surrounding blank lines are dropped and the output always ends with a
/// single newline.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.trim().to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{}}}}}", key), value);
    }
    output.push('\n');
    output
}

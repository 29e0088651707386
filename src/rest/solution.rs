//! Path solutions: the immutable composite keys addressing REST resources

/// Composite key identifying one remote resource instance
///
/// A solution maps fixed field names to identifier strings and fully
/// determines the resource URI via [`Solution::URI_TEMPLATE`]. Implementors
/// are plain value types; nothing mutates a solution after construction.
pub trait Solution: Clone + std::fmt::Debug + PartialEq + Send + Sync {
    /// URI template with `{field}` placeholders, relative to the API base URL
    const URI_TEMPLATE: &'static str;

    /// Field names and values, in template order
    fn fields(&self) -> Vec<(&'static str, &str)>;

    /// The resource URI with every field substituted verbatim
    fn uri(&self) -> String {
        render_template(Self::URI_TEMPLATE, &self.fields())
    }

    /// `name=value` pairs separated by spaces, used in `Display` output
    fn describe(&self) -> String {
        self.fields()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Substitute `{name}` placeholders in a single pass
///
/// Values are inserted as-is and never rescanned, so a value that itself
/// contains braces is not expanded again. Unknown placeholders are kept.
pub fn render_template(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match fields.iter().find(|(field, _)| *field == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

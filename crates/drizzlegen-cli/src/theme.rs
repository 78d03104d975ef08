use console::{style, StyledObject};

/// Heading printed before a command's output
pub(crate) fn title(text: &str) -> StyledObject<&str> {
    style(text).cyan().bold().underlined()
}

/// Marker in front of each written file
pub(crate) fn written() -> StyledObject<&'static str> {
    style("✔").green().bold()
}

pub(crate) fn path(path: &std::path::Path) -> StyledObject<String> {
    style(path.display().to_string()).dim()
}

//! Class-token merge utility.
//!
//! Widgets describe their appearance as whitespace-separated class tokens
//! ("btn btn-primary disabled") which the active
//! [`Theme`](crate::theme::Theme) resolves to a [`Style`](crate::Style).
//! This module handles the string side: combining fragments, dropping
//! empties, collapsing whitespace, and deduplicating tokens.

/// Combine class fragments into a single normalized class string.
///
/// Empty fragments are skipped, runs of whitespace collapse to a single
/// space, and repeated tokens keep their first occurrence.
///
/// # Examples
///
/// ```
/// use vulcan_tui::class::merge_classes;
///
/// let merged = merge_classes(["btn  btn-primary", "", "btn rounded"]);
/// assert_eq!(merged, "btn btn-primary rounded");
/// ```
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    for part in parts {
        for token in part.split_whitespace() {
            if !seen.contains(&token) {
                seen.push(token);
            }
        }
    }
    seen.join(" ")
}

/// Incremental builder over [`merge_classes`] with conditional membership.
///
/// The conditional form covers what the original kit expressed as a
/// class → condition map.
///
/// # Examples
///
/// ```
/// use vulcan_tui::class::ClassList;
///
/// let classes = ClassList::new()
///     .add("btn")
///     .add_if("btn-disabled", false)
///     .add_if("btn-primary", true)
///     .add_opt(Some("rounded"))
///     .merge();
/// assert_eq!(classes, "btn btn-primary rounded");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class fragment unconditionally.
    #[must_use]
    pub fn add(mut self, classes: &str) -> Self {
        self.parts.push(classes.to_string());
        self
    }

    /// Add a class fragment only when `condition` holds.
    #[must_use]
    pub fn add_if(self, classes: &str, condition: bool) -> Self {
        if condition { self.add(classes) } else { self }
    }

    /// Add an optional class fragment.
    #[must_use]
    pub fn add_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(c) => self.add(c),
            None => self,
        }
    }

    /// Produce the merged, deduplicated class string.
    #[must_use]
    pub fn merge(&self) -> String {
        merge_classes(self.parts.iter().map(String::as_str))
    }
}

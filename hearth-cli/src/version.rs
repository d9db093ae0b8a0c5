//! Console version label
//!
//! Build metadata is carried as keyword-expanded source-control strings; the
//! version label is whatever tag, branch, or revision can be recovered from
//! them.

const HEAD_URL: &str = "$HeadURL$";
const REVISION: &str = "$Revision$";

/// Version label of this console build
pub fn build_label() -> String {
    version_label(HEAD_URL, REVISION)
}

/// Derive a display label from keyword-expanded source-control metadata.
///
/// A tag name wins over a branch name, a branch name over a bare revision
/// number; unexpanded keywords yield `Untagged`. The first underscore in the
/// label becomes a dot so tag names like `2_0_1` read as versions.
pub fn version_label(head_url: &str, revision: &str) -> String {
    let mut label = String::new();

    if let Some(tag) = path_component_after(head_url, "tags/") {
        label = tag.to_string();
    } else if let Some(branch) = path_component_after(head_url, "branches/") {
        label = format!("Branch: {}", branch);
    } else if let Some(start) = revision.find("$Revision:") {
        let rest = &revision[start + "$Revision:".len()..];
        if let Some(end) = rest.find('$') {
            let number = rest[..end].trim();
            if !number.is_empty() {
                label = format!("r{}", number);
            }
        }
    }

    if label.is_empty() {
        "Untagged".to_string()
    } else {
        label.replacen('_', ".", 1)
    }
}

/// The path component directly after `marker`, if any follows it
fn path_component_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let end = rest.find('/')?;

    if end == 0 { None } else { Some(&rest[..end]) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_wins() {
        let label = version_label(
            "$HeadURL: http://svn.example.org/repo/tags/2_0_1/web/js/index.js $",
            "$Revision: 6648 $",
        );
        assert_eq!(label, "2.0_1");
    }

    #[test]
    fn test_branch_name_when_no_tag() {
        let label = version_label(
            "$HeadURL: http://svn.example.org/repo/branches/maintenance/web/js/index.js $",
            "$Revision: 6648 $",
        );
        assert_eq!(label, "Branch: maintenance");
    }

    #[test]
    fn test_revision_number_as_fallback() {
        let label = version_label(
            "$HeadURL: http://svn.example.org/repo/patches/individual/web/js/index.js $",
            "$Revision: 6648 $",
        );
        assert_eq!(label, "r6648");
    }

    #[test]
    fn test_unexpanded_keywords_yield_untagged() {
        assert_eq!(version_label("$HeadURL$", "$Revision$"), "Untagged");
    }

    #[test]
    fn test_tag_without_following_path_is_ignored() {
        let label = version_label(
            "$HeadURL: http://svn.example.org/repo/tags/2_0_1 $",
            "$Revision: 17 $",
        );
        assert_eq!(label, "r17");
    }
}

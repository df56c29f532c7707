//! Turning a matched link into an absolute URL
//!
//! Links are appended verbatim: no `..` resolution, query handling or
//! percent-encoding is applied.

/// Where relative links found in an index are rooted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkBase {
    /// Links are siblings of this page; its last path segment is replaced
    Page(String),
    /// Links live directly under this directory URL
    Directory(String),
}

impl LinkBase {
    /// Compose the absolute URL for `link`
    pub fn join(&self, link: &str) -> String {
        match self {
            LinkBase::Page(page) => {
                let parent = page.rsplit_once('/').map_or(page.as_str(), |(head, _)| head);
                format!("{}/{}", parent, link)
            }
            LinkBase::Directory(dir) => format!("{}/{}", dir, link),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_base_replaces_last_segment() {
        let base = LinkBase::Page("http://www.fon.hum.uva.nl/praat/download_mac.html".into());
        assert_eq!(
            base.join("praat6123_mac64.dmg"),
            "http://www.fon.hum.uva.nl/praat/praat6123_mac64.dmg"
        );
    }

    #[test]
    fn test_page_base_with_trailing_slash() {
        let base = LinkBase::Page("https://example.com/downloads/".into());
        assert_eq!(base.join("a.dmg"), "https://example.com/downloads/a.dmg");
    }

    #[test]
    fn test_page_base_without_slash() {
        let base = LinkBase::Page("index.html".into());
        assert_eq!(base.join("a.dmg"), "index.html/a.dmg");
    }

    #[test]
    fn test_directory_base_appends() {
        let base = LinkBase::Directory("https://downloads.puppetlabs.com/mac/10.9/PC1/x86_64".into());
        assert_eq!(
            base.join("puppet-agent-1.2.5-1.osx10.9.dmg"),
            "https://downloads.puppetlabs.com/mac/10.9/PC1/x86_64/puppet-agent-1.2.5-1.osx10.9.dmg"
        );
    }

    #[test]
    fn test_link_used_verbatim() {
        let base = LinkBase::Directory("https://example.com/mac".into());
        assert_eq!(
            base.join("../x%20y.dmg?z=1"),
            "https://example.com/mac/../x%20y.dmg?z=1"
        );
    }
}

//! Path tokenization and separator collapsing.
//!
//! The two string operations everything else leans on. Both are single-pass
//! and allocation-light; neither touches percent-decoding (parameters have
//! their own store, see [`crate::Params`]).

/// Splits the request path into its non-empty segments.
///
/// `prefix` (scheme + host + base path) is removed from the front of `url`
/// first; if it does not match, the url is tokenized as-is. Each segment
/// then loses any trailing `?query`, and empty segments are dropped. Order
/// is preserved, duplicates are kept.
pub(crate) fn segments(url: &str, prefix: &str) -> Vec<String> {
    let path = url.strip_prefix(prefix).unwrap_or(url);

    path.split('/')
        .map(|segment| segment.split('?').next().unwrap_or(""))
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Derives the deployment prefix from the entry-script path by dropping the
/// script filename: `/app/index.php` → `/app/`, `/index.php` → `/`.
///
/// A script path with no separator at all (shouldn't happen on any sane
/// host) degrades to the root prefix.
pub(crate) fn base_path(script_name: &str) -> String {
    match script_name.rfind('/') {
        Some(i) => script_name[..=i].to_owned(),
        None => "/".to_owned(),
    }
}

/// Collapses doubled separators: every `//` becomes `/`, in one
/// left-to-right pass.
///
/// Deliberately not a fixpoint: `///` collapses to `//`, not `/`. Callers
/// only ever produce a double slash by joining a `/`-terminated base with a
/// `/`-initial suffix, and a single pass fixes exactly that. Runs of three
/// or more slashes were already in the input, and pass through recognizably.
pub(crate) fn collapse(path: &str) -> String {
    path.replace("//", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_slash_and_drops_empties() {
        assert_eq!(
            segments("http://localhost/clients/report", "http://localhost/"),
            vec!["clients", "report"],
        );
    }

    #[test]
    fn strips_query_from_the_trailing_segment() {
        assert_eq!(
            segments("http://localhost/clients/report?x=1&y=2", "http://localhost/"),
            vec!["clients", "report"],
        );
    }

    #[test]
    fn a_query_only_tail_contributes_no_segment() {
        assert_eq!(
            segments("http://localhost/clients/?x=1", "http://localhost/"),
            vec!["clients"],
        );
    }

    #[test]
    fn consecutive_slashes_yield_no_phantom_segments() {
        assert_eq!(
            segments("http://localhost//a///b/", "http://localhost/"),
            vec!["a", "b"],
        );
    }

    #[test]
    fn unmatched_prefix_tokenizes_the_whole_url_path() {
        // prefix mismatch leaves the url untouched; the scheme part then
        // tokenizes too. Degraded, never lossy.
        assert_eq!(
            segments("http://localhost/a", "https://other/"),
            vec!["http:", "localhost", "a"],
        );
    }

    #[test]
    fn base_path_prefix_longer_than_root() {
        assert_eq!(
            segments(
                "http://localhost/app/clients/report",
                "http://localhost/app/",
            ),
            vec!["clients", "report"],
        );
    }

    #[test]
    fn base_path_drops_the_script_filename() {
        assert_eq!(base_path("/index.php"), "/");
        assert_eq!(base_path("/app/index.php"), "/app/");
        assert_eq!(base_path("/dir/matriz/main.cgi"), "/dir/matriz/");
    }

    #[test]
    fn base_path_degrades_to_root() {
        assert_eq!(base_path(""), "/");
        assert_eq!(base_path("index.php"), "/");
        assert_eq!(base_path("/"), "/");
    }

    #[test]
    fn collapse_fixes_a_joined_double_slash() {
        assert_eq!(collapse("/app//clients"), "/app/clients");
    }

    #[test]
    fn collapse_is_single_pass_not_a_fixpoint() {
        assert_eq!(collapse("/a///b"), "/a//b");
        assert_eq!(collapse("////"), "//");
    }

    #[test]
    fn collapse_leaves_clean_paths_alone() {
        assert_eq!(collapse("/clients/report"), "/clients/report");
        assert_eq!(collapse("/"), "/");
    }
}

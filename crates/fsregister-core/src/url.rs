//! Request URL composition.
//!
//! Every URL has the shape `{base}/{API_VERSION}/{path}`; the base URL never
//! carries the version.

use crate::ResourceType;

/// Fixed API version appended to the base URL for every request.
pub const API_VERSION: &str = "V0.1";

/// Public FS Register services root.
pub const DEFAULT_BASE_URL: &str = "https://register.fca.org.uk/services";

/// Query sent to the common search endpoint to list regulated markets.
const REGULATED_MARKETS_QUERY: &str = "RM";

/// Removes leading and trailing path separators from a segment.
pub fn strip_separators(segment: &str) -> &str {
    segment.trim_matches('/')
}

/// Builds `/{ResourceBase}/{identifier}[/{modifier}]*` under the versioned base.
///
/// A modifier may span several path segments (`"Requirements/OR-1/InvestmentTypes"`);
/// it is split on `/` and each segment is encoded on its own. The identifier is
/// always a single segment.
pub fn resource_url<S: AsRef<str>>(
    base_url: &str,
    resource_type: ResourceType,
    identifier: &str,
    modifiers: &[S],
) -> String {
    let mut url = versioned_root(base_url);
    push_segment(&mut url, resource_type.endpoint_base());
    push_segment(&mut url, identifier);
    for segment in modifiers
        .iter()
        .flat_map(|modifier| modifier.as_ref().split('/'))
    {
        push_segment(&mut url, segment);
    }
    url
}

/// Builds the common search URL for a free-text query and resource filter.
pub fn search_url(base_url: &str, query: &str, resource_type: ResourceType) -> String {
    let mut url = versioned_root(base_url);
    push_segment(&mut url, "Search");
    url.push_str("?q=");
    url.push_str(&urlencoding::encode(query));
    url.push_str("&type=");
    url.push_str(resource_type.as_str());
    url
}

pub fn regulated_markets_url(base_url: &str) -> String {
    let mut url = versioned_root(base_url);
    push_segment(&mut url, "CommonSearch");
    url.push_str("?q=");
    url.push_str(REGULATED_MARKETS_QUERY);
    url
}

fn versioned_root(base_url: &str) -> String {
    let mut url = base_url.trim_end_matches('/').to_owned();
    push_segment(&mut url, API_VERSION);
    url
}

fn push_segment(url: &mut String, segment: &str) {
    let segment = strip_separators(segment.trim());
    if segment.is_empty() {
        return;
    }
    url.push('/');
    url.push_str(&urlencoding::encode(segment));
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://register.fca.org.uk/services";

    #[test]
    fn builds_detail_url_without_modifiers() {
        let url = resource_url::<&str>(BASE, ResourceType::Firm, "122702", &[]);
        assert_eq!(url, "https://register.fca.org.uk/services/V0.1/Firm/122702");
    }

    #[test]
    fn strips_separators_from_modifiers() {
        let url = resource_url(
            BASE,
            ResourceType::Firm,
            "113849",
            &["/Requirements/", "OR-0262545/", "/InvestmentTypes"],
        );
        assert_eq!(
            url,
            "https://register.fca.org.uk/services/V0.1/Firm/113849/Requirements/OR-0262545/InvestmentTypes"
        );
    }

    #[test]
    fn never_produces_double_separators() {
        let candidates = ["Names", "/Names", "Names/", "//Names//", "/", ""];
        let mut combinations: Vec<Vec<&str>> = vec![Vec::new()];
        let mut frontier: Vec<Vec<&str>> = vec![Vec::new()];
        for _ in 0..3 {
            frontier = frontier
                .iter()
                .flat_map(|prefix| {
                    candidates.iter().map(move |candidate| {
                        let mut next = prefix.clone();
                        next.push(*candidate);
                        next
                    })
                })
                .collect();
            combinations.extend(frontier.iter().cloned());
        }

        for modifiers in &combinations {
            for base in [BASE, "https://register.fca.org.uk/services/"] {
                let url = resource_url(base, ResourceType::Fund, "/185045/", modifiers.as_slice());
                let path = url.trim_start_matches("https://");
                assert!(!path.contains("//"), "double separator in {url}");
                assert!(!url.ends_with('/'), "trailing separator in {url}");
            }
        }
    }

    #[test]
    fn splits_multi_segment_modifiers() {
        let joined = resource_url(
            BASE,
            ResourceType::Firm,
            "113849",
            &["Requirements/OR-1/InvestmentTypes"],
        );
        let separate = resource_url(
            BASE,
            ResourceType::Firm,
            "113849",
            &["Requirements", "OR-1", "InvestmentTypes"],
        );

        assert_eq!(joined, separate);
        assert!(joined.ends_with("/Firm/113849/Requirements/OR-1/InvestmentTypes"));
        assert!(!joined.contains("%2F"));
    }

    #[test]
    fn encodes_segments_and_query() {
        let url = resource_url(BASE, ResourceType::Firm, "113849", &["Passports", "Czech Republic", "Permission"]);
        assert!(url.ends_with("/Passports/Czech%20Republic/Permission"));

        let url = search_url(BASE, "Hastings Insurance Services Limited", ResourceType::Firm);
        assert_eq!(
            url,
            "https://register.fca.org.uk/services/V0.1/Search?q=Hastings%20Insurance%20Services%20Limited&type=firm"
        );
    }

    #[test]
    fn regulated_markets_use_common_search() {
        assert_eq!(
            regulated_markets_url(BASE),
            "https://register.fca.org.uk/services/V0.1/CommonSearch?q=RM"
        );
    }
}

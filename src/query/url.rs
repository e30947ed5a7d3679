//! OSLC query URL construction.

use crate::protocol::constants::query;
use crate::types::QueryOptions;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in query values: the URI component unreserved set
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn append(url: &mut String, key: &str, value: &str) {
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(key);
    url.push('=');
    url.extend(utf8_percent_encode(value, COMPONENT));
}

/// Build the query URL for `options`.
///
/// Parameters are appended to `options.from` in a fixed order: paging, page cursor,
/// `oslc.prefix`, `oslc.properties`, `oslc.select`, `oslc.where`, `oslc.orderBy`. Paging is
/// only requested from query bases that already carry a query string, which is how Jazz
/// applications publish pageable query capabilities.
///
/// # Examples
///
/// ```
/// use oslc_client::{query::build_query_url, QueryOptions};
///
/// let options = QueryOptions::new("https://s/rm/views?oslc.query=true", "http://www.w3.org/2000/01/rdf-schema#member")
///     .paginate(5)
///     .with_where("dcterms:identifier=12");
/// assert_eq!(
///     build_query_url(&options),
///     "https://s/rm/views?oslc.query=true&oslc.paging=true&oslc.pageSize=5&oslc.where=dcterms%3Aidentifier%3D12"
/// );
/// ```
pub fn build_query_url(options: &QueryOptions) -> String {
    let mut url = options.from.clone();

    if options.paginate && options.from.contains('?') {
        append(&mut url, query::PAGING, "true");
        if let Some(size) = options.page_size {
            append(&mut url, query::PAGE_SIZE, &size.to_string());
        }
    }
    if let Some(page) = &options.page_arg {
        append(&mut url, &page.key, &page.value.to_string());
    }

    let clauses = [
        (query::PREFIX, &options.prefix),
        (query::PROPERTIES, &options.properties),
        (query::SELECT, &options.select),
        (query::WHERE, &options.r#where),
        (query::ORDER_BY, &options.order_by),
    ];
    for (key, value) in clauses {
        if let Some(value) = value {
            append(&mut url, key, value);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBER: &str = "http://www.w3.org/2000/01/rdf-schema#member";

    #[test]
    fn test_plain_base() {
        let options = QueryOptions::new("https://s/q", MEMBER).with_select("*");
        assert_eq!(build_query_url(&options), "https://s/q?oslc.select=*");
        assert_eq!(build_query_url(&QueryOptions::new("https://s/q", MEMBER)), "https://s/q");
    }

    #[test]
    fn test_fixed_parameter_order() {
        let options = QueryOptions::new("https://s/q?oslc.query=true", MEMBER)
            .with_order_by("-dcterms:modified")
            .with_where("dcterms:title=\"a b\"")
            .with_select("dcterms:title")
            .with_properties("dcterms:identifier")
            .with_prefix("dcterms=<http://purl.org/dc/terms/>")
            .with_page_arg("page", 3)
            .paginate(10);

        let url = build_query_url(&options);
        assert_eq!(
            url,
            "https://s/q?oslc.query=true\
             &oslc.paging=true&oslc.pageSize=10\
             &page=3\
             &oslc.prefix=dcterms%3D%3Chttp%3A%2F%2Fpurl.org%2Fdc%2Fterms%2F%3E\
             &oslc.properties=dcterms%3Aidentifier\
             &oslc.select=dcterms%3Atitle\
             &oslc.where=dcterms%3Atitle%3D%22a%20b%22\
             &oslc.orderBy=-dcterms%3Amodified"
        );
        assert_eq!(url, build_query_url(&options.clone()));
    }

    #[test]
    fn test_paging_needs_query_string() {
        let options = QueryOptions::new("https://s/q", MEMBER).paginate(10);
        assert_eq!(build_query_url(&options), "https://s/q");
    }

    #[test]
    fn test_page_arg_without_paging() {
        let options = QueryOptions::new("https://s/q", MEMBER).with_page_arg("startIndex", 50);
        assert_eq!(build_query_url(&options), "https://s/q?startIndex=50");
    }
}

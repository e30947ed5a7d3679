use super::fixtures::{
    catalog, compact, config, query_results, requirement, root_services, service_provider, RDF_XML,
};
use crate::error::OslcError;
use crate::protocol::namespaces::{OSLC_RM, OSLC_RM10, RDFS};
use crate::resource::Representation;
use crate::server::OslcServer;
use crate::types::QueryOptions;
use mockito::{Matcher, Server, ServerGuard};

/// Mock server with the discovery documents, plus a session that used "Proj A"
async fn connected() -> (ServerGuard, OslcServer) {
    let mut server = Server::new_async().await;
    let base = server.url();
    // mocks are removed from the server when dropped
    let mut discovery = Vec::new();
    for (path, body) in [
        ("/rm/rootservices", root_services(&base)),
        ("/rm/oslc_rm/catalog", catalog(&base)),
        ("/rm/oslc_rm/_pa1/services.xml", service_provider(&base)),
    ] {
        let mock = server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", RDF_XML)
            .with_body(body)
            .create_async()
            .await;
        discovery.push(mock);
    }

    let mut oslc = OslcServer::new(format!("{}/rm", base), config()).unwrap();
    oslc.connect(&OSLC_RM10.term("rmServiceProviders")).await.unwrap();
    oslc.use_service_provider("Proj A").await.unwrap();
    drop(discovery);
    (server, oslc)
}

#[tokio::test]
async fn test_query_with_paging_and_count() {
    let (mut server, oslc) = connected().await;
    let base = server.url();
    let query = server
        .mock("GET", "/rm/views")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("oslc.query".into(), "true".into()),
            Matcher::UrlEncoded("oslc.paging".into(), "true".into()),
            Matcher::UrlEncoded("oslc.pageSize".into(), "2".into()),
            Matcher::UrlEncoded("oslc.select".into(), "dcterms:title".into()),
        ]))
        .with_status(200)
        .with_header("content-type", RDF_XML)
        .with_body(query_results(&base, &["1", "2"]))
        .expect(1)
        .create_async()
        .await;

    let from = oslc.query_base(&OSLC_RM.term("Requirement")).unwrap();
    let options = QueryOptions::new(from, RDFS.term("member"))
        .with_select("dcterms:title")
        .paginate(2)
        .with_total_count();
    let results = oslc.query(&options).await.unwrap();

    assert_eq!(results.total_count, Some(42));
    assert_eq!(results.next_page.as_deref(), Some("https://s/page2"));
    let mut titles: Vec<_> = results
        .resources
        .iter()
        .filter_map(|r| r.get_title())
        .collect();
    titles.sort();
    assert_eq!(titles, ["Requirement 1", "Requirement 2"]);
    query.assert_async().await;
}

#[tokio::test]
async fn test_query_failure_carries_status() {
    let (mut server, oslc) = connected().await;
    let _query = server
        .mock("GET", "/rm/views")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_header("content-type", RDF_XML)
        .with_body(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:oslc="http://open-services.net/ns/core#">
  <oslc:Error><oslc:message>Invalid where clause</oslc:message></oslc:Error>
</rdf:RDF>"#,
        )
        .create_async()
        .await;

    let from = oslc.query_base(&OSLC_RM.term("Requirement")).unwrap();
    let err = oslc
        .query(&QueryOptions::new(from, RDFS.term("member")).with_where("bogus"))
        .await
        .unwrap_err();
    match err {
        OslcError::QueryFailed { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some("Invalid where clause"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_query_unauthorized() {
    let (mut server, oslc) = connected().await;
    let _query = server
        .mock("GET", "/rm/views")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let from = oslc.query_base(&OSLC_RM.term("Requirement")).unwrap();
    let err = oslc
        .query(&QueryOptions::new(from, RDFS.term("member")))
        .await
        .unwrap_err();
    assert!(matches!(err, OslcError::Unauthorized(_)));
}

#[tokio::test]
async fn test_read_by_id() {
    let (mut server, oslc) = connected().await;
    let base = server.url();
    let _query = server
        .mock("GET", "/rm/views")
        .match_query(Matcher::UrlEncoded(
            "oslc.where".into(),
            "dcterms:identifier=\"7\"".into(),
        ))
        .with_status(200)
        .with_header("content-type", RDF_XML)
        .with_body(query_results(&base, &["7"]))
        .create_async()
        .await;
    let read = server
        .mock("GET", "/rm/resources/7")
        .with_status(200)
        .with_header("content-type", "application/rdf+xml; charset=UTF-8")
        .with_header("etag", "\"v7\"")
        .with_body(requirement(&base, "7"))
        .expect(1)
        .create_async()
        .await;

    let representation = oslc
        .read_by_id(&OSLC_RM.term("Requirement"), "7", None)
        .await
        .unwrap();
    assert!(!representation.is_compact());
    let resource = representation.into_resource();
    assert_eq!(resource.etag(), Some("\"v7\""));
    assert_eq!(resource.get_description().as_deref(), Some("Full description"));
    read.assert_async().await;
}

#[tokio::test]
async fn test_read_by_id_without_match() {
    let (mut server, oslc) = connected().await;
    let base = server.url();
    let _query = server
        .mock("GET", "/rm/views")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", RDF_XML)
        .with_body(query_results(&base, &[]))
        .create_async()
        .await;

    let err = oslc
        .read_by_id(&OSLC_RM.term("Requirement"), "123", None)
        .await
        .unwrap_err();
    assert!(matches!(err, OslcError::NotFound(_)));
    assert_eq!(err.code(), 404);
}

#[tokio::test]
async fn test_read_by_id_unknown_type() {
    let (_server, oslc) = connected().await;
    let err = oslc
        .read_by_id("http://open-services.net/ns/cm#ChangeRequest", "1", None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 404);
}

#[tokio::test]
async fn test_read_compact() {
    let (mut server, oslc) = connected().await;
    let base = server.url();
    let _compact = server
        .mock("GET", "/rm/resources/9")
        .with_status(200)
        .with_header("content-type", "application/x-oslc-compact+xml")
        .with_body(compact(&base, "9"))
        .create_async()
        .await;

    let uri = format!("{}/rm/resources/9", base);
    let representation = oslc.read(&uri).await.unwrap();
    let Representation::Compact(compact) = representation else {
        panic!("expected a compact representation");
    };
    assert_eq!(compact.resource().get_title().as_deref(), Some("Requirement 9"));
    let preview = compact.small_preview().unwrap();
    assert_eq!(preview.hint_height.as_deref(), Some("10em"));
    assert_eq!(
        preview.document,
        Some(format!("{}/rm/preview/9?size=small", base))
    );
    assert!(compact.large_preview().is_none());
}

mod common;

use std::sync::Arc;

use mockito::{Matcher, Server, ServerGuard};
use petstore_client::{
    ApiClient, Configuration, FakeApi, FileParam, FormPart, RequestOptions,
    models::{
        TestObjectForMultipartRequestsRequestMarker,
        UploadFileWithAdditionalPropertiesRequestObject,
    },
};
use test_log::test;

use common::foo_png;

fn fake_api(server: &ServerGuard) -> FakeApi {
    let config = Configuration::new().with_host(format!("{}/v2", server.url()));
    FakeApi::new(Arc::new(ApiClient::new(config).unwrap()))
}

#[test]
fn test_multipart_requests() -> anyhow::Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v2/fake/object_for_multipart_requests")
        .match_body(Matcher::Regex(
            r#"name="marker"\r\n\r\n\{"name":"name"\}"#.into(),
        ))
        .with_status(200)
        .with_body("some text")
        .create();

    let marker = TestObjectForMultipartRequestsRequestMarker::new("name");
    fake_api(&server).test_object_for_multipart_requests(&marker)?;
    mock.assert();
    Ok(())
}

#[test]
fn test_multipart_requests_with_file_and_additional_properties() -> anyhow::Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v2/fake/upload_file_with_additional_properties")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="count"\r\n\r\n100"#.into()),
            Matcher::Regex(r#"name="object"\r\n\r\n\{"name":"foo"\}"#.into()),
            Matcher::Regex(r#"name="file"; filename="foo.png""#.into()),
        ]))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"code": 200, "type": "success", "message": "OK"}"#)
        .expect(1)
        .create();

    let file = FileParam::bytes("foo.png", std::fs::read(foo_png())?);
    let object = UploadFileWithAdditionalPropertiesRequestObject::new("foo");
    let returned = fake_api(&server).upload_file_with_additional_properties(
        &file,
        Some(&object),
        Some(100),
    )?;

    assert_eq!(Some(200), returned.code);
    assert_eq!(Some("success".to_string()), returned.type_);
    assert_eq!(Some("OK".to_string()), returned.message);
    mock.assert();
    Ok(())
}

#[test]
fn test_non_string_form_values_are_sent_as_text() -> anyhow::Result<()> {
    let server = Server::new();
    let object = UploadFileWithAdditionalPropertiesRequestObject::new("foo");
    let request = fake_api(&server).upload_file_with_additional_properties_serialize(
        &FileParam::from(foo_png()),
        Some(&object),
        Some(100),
        &RequestOptions::default(),
    )?;

    assert_eq!(Some("100"), request.body.part("count").and_then(FormPart::text));
    assert_eq!(
        Some(r#"{"name":"foo"}"#),
        request.body.part("object").and_then(FormPart::text)
    );
    assert!(matches!(request.body.part("file"), Some(FormPart::File { .. })));
    Ok(())
}

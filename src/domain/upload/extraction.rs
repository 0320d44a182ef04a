use super::error::NotifyError;
use super::types::UploadResult;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::reader::Reader;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseField {
    Bucket,
    Key,
    ETag,
}

impl ResponseField {
    const ALL: [ResponseField; 3] = [ResponseField::Bucket, ResponseField::Key, ResponseField::ETag];

    fn element_name(self) -> &'static str {
        match self {
            ResponseField::Bucket => "Bucket",
            ResponseField::Key => "Key",
            ResponseField::ETag => "ETag",
        }
    }

    fn from_element(local_name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.element_name().as_bytes() == local_name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

struct Capture {
    field: ResponseField,
    depth: usize,
    text: String,
}

/// Extracts bucket, key and etag from an S3 `PostResponse` document.
///
/// Each value is the text content of the first element with that name,
/// anywhere in the document, with entity references decoded. Values are
/// otherwise kept verbatim (no trimming, quotes around the ETag preserved).
pub fn parse_post_response(document: &str) -> Result<UploadResult, NotifyError> {
    let mut reader = Reader::from_str(document);
    let mut values: [Option<String>; 3] = [None, None, None];
    let mut capture: Option<Capture> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                if capture.is_none() {
                    if let Some(field) = ResponseField::from_element(e.local_name().as_ref()) {
                        if values[field.index()].is_none() {
                            capture = Some(Capture {
                                field,
                                depth,
                                text: String::new(),
                            });
                        }
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if capture.is_none() {
                    if let Some(field) = ResponseField::from_element(e.local_name().as_ref()) {
                        values[field.index()].get_or_insert_with(String::new);
                    }
                }
            }
            Ok(Event::End(_)) => {
                if capture.as_ref().is_some_and(|c| c.depth == depth) {
                    if let Some(done) = capture.take() {
                        values[done.field.index()] = Some(done.text);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(e)) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(c) = capture.as_mut() {
                    push_reference(&mut c.text, &e)?;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(NotifyError::extraction(format!(
                    "malformed response document: {e}"
                )))
            }
            _ => {}
        }
    }

    let [bucket, key, etag] = values;
    Ok(UploadResult {
        bucket: require(bucket, ResponseField::Bucket)?,
        key: require(key, ResponseField::Key)?,
        etag: require(etag, ResponseField::ETag)?,
    })
}

fn require(value: Option<String>, field: ResponseField) -> Result<String, NotifyError> {
    value.ok_or_else(|| {
        NotifyError::extraction(format!(
            "response document has no <{}> element",
            field.element_name()
        ))
    })
}

fn push_reference(text: &mut String, reference: &BytesRef) -> Result<(), NotifyError> {
    let unknown = || {
        NotifyError::extraction(format!(
            "unknown entity reference &{};",
            String::from_utf8_lossy(reference)
        ))
    };

    match reference.resolve_char_ref() {
        Ok(Some(ch)) => text.push(ch),
        Ok(None) => {
            let name = reference.decode().map_err(|_| unknown())?;
            text.push_str(resolve_predefined_entity(&name).ok_or_else(unknown)?);
        }
        Err(_) => return Err(unknown()),
    }
    Ok(())
}

#[derive(Deserialize)]
struct RedirectQuery {
    bucket: Option<String>,
    key: Option<String>,
    etag: Option<String>,
}

/// Extracts the same coordinates from a `success_action_redirect` query string.
///
/// Accepts the query with or without its leading `?`. Unrelated parameters
/// (such as `csrfmiddlewaretoken`) are ignored.
pub fn parse_redirect_query(query: &str) -> Result<UploadResult, NotifyError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let parsed: RedirectQuery = serde_urlencoded::from_str(query)
        .map_err(|e| NotifyError::extraction(format!("malformed redirect query: {e}")))?;

    let missing = |name: &str| NotifyError::extraction(format!("redirect query has no `{name}`"));
    Ok(UploadResult {
        bucket: parsed.bucket.ok_or_else(|| missing("bucket"))?,
        key: parsed.key.ok_or_else(|| missing("key"))?,
        etag: parsed.etag.ok_or_else(|| missing("etag"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_RESPONSE: &str = "<PostResponse><Bucket>my-bucket</Bucket><Key>uploads/a.png</Key><ETag>\"abc123\"</ETag></PostResponse>";

    #[test]
    fn test_parse_minimal_post_response() {
        let result = parse_post_response(POST_RESPONSE).unwrap();
        assert_eq!(result.bucket, "my-bucket");
        assert_eq!(result.key, "uploads/a.png");
        assert_eq!(result.etag, "\"abc123\"");
    }

    #[test]
    fn test_parse_s3_shaped_response_with_entities() {
        let document = r#"<?xml version="1.0" encoding="UTF-8"?>
<PostResponse xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Location>https://my-bucket.s3.amazonaws.com/uploads%2Fa+b.png</Location>
  <Bucket>my-bucket</Bucket>
  <Key>uploads/a b&amp;c.png</Key>
  <ETag>&quot;0cc175b9c0f1b6a831c399e269772661&quot;</ETag>
</PostResponse>"#;

        let result = parse_post_response(document).unwrap();
        assert_eq!(result.bucket, "my-bucket");
        assert_eq!(result.key, "uploads/a b&c.png");
        assert_eq!(result.etag, "\"0cc175b9c0f1b6a831c399e269772661\"");
    }

    #[test]
    fn test_parse_numeric_references() {
        let document =
            "<r><Bucket>b</Bucket><Key>k&#47;x</Key><ETag>&#x22;e&#34;</ETag></r>";
        let result = parse_post_response(document).unwrap();
        assert_eq!(result.key, "k/x");
        assert_eq!(result.etag, "\"e\"");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let document = "<r><Bucket>first</Bucket><Bucket>second</Bucket><Key>k</Key><ETag>e</ETag></r>";
        assert_eq!(parse_post_response(document).unwrap().bucket, "first");
    }

    #[test]
    fn test_prefixed_and_nested_elements() {
        let document = "<s3:r xmlns:s3=\"urn:x\"><wrap><s3:Bucket>b</s3:Bucket></wrap><s3:Key>k</s3:Key><s3:ETag>e</s3:ETag></s3:r>";
        let result = parse_post_response(document).unwrap();
        assert_eq!(result, UploadResult::new("b", "k", "e"));
    }

    #[test]
    fn test_cdata_and_empty_elements() {
        let document = "<r><Bucket><![CDATA[b<1>]]></Bucket><Key/><ETag>e</ETag></r>";
        let result = parse_post_response(document).unwrap();
        assert_eq!(result.bucket, "b<1>");
        assert_eq!(result.key, "");
    }

    #[test]
    fn test_missing_field_is_extraction_error() {
        let document = "<PostResponse><Bucket>b</Bucket><Key>k</Key></PostResponse>";
        let err = parse_post_response(document).unwrap_err();
        assert!(matches!(err, NotifyError::Extraction(ref msg) if msg.contains("<ETag>")));
    }

    #[test]
    fn test_malformed_document_is_extraction_error() {
        let document = "<PostResponse><Bucket>b</Key></PostResponse>";
        assert!(matches!(
            parse_post_response(document),
            Err(NotifyError::Extraction(_))
        ));
    }

    #[test]
    fn test_empty_document_is_extraction_error() {
        assert!(parse_post_response("").is_err());
    }

    #[test]
    fn test_unknown_entity_is_extraction_error() {
        let document = "<r><Bucket>&nbsp;</Bucket><Key>k</Key><ETag>e</ETag></r>";
        assert!(parse_post_response(document).is_err());
    }

    #[test]
    fn test_invalid_char_reference_is_extraction_error() {
        for reference in ["&#0;", "&#xZZ;", "&#;"] {
            let document = format!("<r><Bucket>b{reference}</Bucket><Key>k</Key><ETag>e</ETag></r>");
            let err = parse_post_response(&document).unwrap_err();
            assert!(
                matches!(err, NotifyError::Extraction(ref msg) if msg.contains("entity reference")),
                "{reference}: {err}"
            );
        }
    }

    #[test]
    fn test_all_predefined_entities() {
        let document = "<r><Bucket>&lt;&gt;&amp;&apos;&quot;</Bucket><Key>k</Key><ETag>e</ETag></r>";
        assert_eq!(parse_post_response(document).unwrap().bucket, "<>&'\"");
    }

    #[test]
    fn test_parse_redirect_query() {
        let query = "?bucket=my-bucket&key=uploads%2Fa.png&etag=%22abc123%22&csrfmiddlewaretoken=x";
        let result = parse_redirect_query(query).unwrap();
        assert_eq!(result, UploadResult::new("my-bucket", "uploads/a.png", "\"abc123\""));
    }

    #[test]
    fn test_redirect_query_missing_etag() {
        let err = parse_redirect_query("bucket=b&key=k").unwrap_err();
        assert_eq!(
            err,
            NotifyError::extraction("redirect query has no `etag`")
        );
    }
}

//! Green hosting extraction from a greencheck payload.

use serde_json::{Map, Value};

use super::fields::{is_truthy, present, present_text, scalar_text, truthy, truthy_text};
use crate::config::FieldMapping;
use crate::html::strip_html;
use crate::models::{GreenHostingInfo, GreenStatus, SupportingDocument};

/// Builds the green hosting status from a greencheck payload.
///
/// - `data` present and falsy: the host is unknown to the registry ([`GreenStatus::NotFound`]).
/// - `modified` truthy: the record is populated field by field.
/// - anything else: the status stays indeterminate (all fields empty).
pub fn extract_green_status(payload: &Map<String, Value>, mapping: FieldMapping) -> GreenStatus {
    if present(payload, "data").is_some_and(|data| !is_truthy(data)) {
        return GreenStatus::NotFound;
    }

    let mut info = GreenHostingInfo::default();
    if truthy(payload, "modified").is_none() {
        return GreenStatus::Hosting(info);
    }

    info.source_url = truthy_text(payload, "url");
    info.hosting_provider = truthy_text(payload, "hosted_by");
    info.hosting_provider_url = truthy_text(payload, "hosted_by_website");
    info.is_green = present(payload, "green").map(is_truthy);
    info.last_modified = truthy_text(payload, "modified");
    info.supporting_documents = extract_documents(payload, mapping);

    GreenStatus::Hosting(info)
}

/// One document per element of `supporting_documents` (array or object).
fn extract_documents(payload: &Map<String, Value>, mapping: FieldMapping) -> Vec<SupportingDocument> {
    let entries: Vec<&Value> = match payload.get("supporting_documents") {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(fields)) => fields.values().collect(),
        _ => return Vec::new(),
    };

    entries
        .into_iter()
        .map(|entry| match mapping {
            // Every document repeats the top-level title and link
            FieldMapping::Legacy => SupportingDocument {
                name: text_or_empty(payload.get("title")),
                url: text_or_empty(payload.get("link")),
            },
            FieldMapping::Corrected => match entry.as_object() {
                Some(document) => SupportingDocument {
                    name: present_text(document, "title").unwrap_or_default(),
                    url: present_text(document, "link").unwrap_or_default(),
                },
                None => SupportingDocument::default(),
            },
        })
        .collect()
}

fn text_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(scalar_text)
        .map(|text| strip_html(&text))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test payload must be an object")
    }

    fn hosting(status: GreenStatus) -> GreenHostingInfo {
        match status {
            GreenStatus::Hosting(info) => info,
            GreenStatus::NotFound => panic!("expected hosting details, got NotFound"),
        }
    }

    #[test]
    fn test_data_false_means_not_found() {
        let status = extract_green_status(&payload(json!({"data": false})), FieldMapping::Legacy);
        assert_eq!(status, GreenStatus::NotFound);
    }

    #[test]
    fn test_data_null_is_not_not_found() {
        let status = extract_green_status(
            &payload(json!({"data": null, "modified": "2024-01-01"})),
            FieldMapping::Legacy,
        );
        let info = hosting(status);
        assert_eq!(info.last_modified, Some("2024-01-01".to_string()));
    }

    #[test]
    fn test_data_takes_precedence_over_modified() {
        let status = extract_green_status(
            &payload(json!({"data": 0, "modified": "2024-01-01", "green": true})),
            FieldMapping::Legacy,
        );
        assert_eq!(status, GreenStatus::NotFound);
    }

    #[test]
    fn test_modified_populates_fields() {
        let status = extract_green_status(
            &payload(json!({
                "modified": "2024-01-01",
                "green": true,
                "hosted_by": "<em>Acme</em>",
                "hosted_by_website": "https://acme.example",
                "url": "example.com"
            })),
            FieldMapping::Legacy,
        );
        let info = hosting(status);
        assert_eq!(info.is_green, Some(true));
        assert_eq!(info.hosting_provider, Some("Acme".to_string()));
        assert_eq!(
            info.hosting_provider_url,
            Some("https://acme.example".to_string())
        );
        assert_eq!(info.source_url, Some("example.com".to_string()));
        assert_eq!(info.last_modified, Some("2024-01-01".to_string()));
        assert!(info.supporting_documents.is_empty());
    }

    #[test]
    fn test_is_green_tri_state() {
        let green_false = hosting(extract_green_status(
            &payload(json!({"modified": "2024-01-01", "green": false})),
            FieldMapping::Legacy,
        ));
        assert_eq!(green_false.is_green, Some(false));

        let green_absent = hosting(extract_green_status(
            &payload(json!({"modified": "2024-01-01"})),
            FieldMapping::Legacy,
        ));
        assert_eq!(green_absent.is_green, None);

        let green_null = hosting(extract_green_status(
            &payload(json!({"modified": "2024-01-01", "green": null})),
            FieldMapping::Legacy,
        ));
        assert_eq!(green_null.is_green, None);
    }

    #[test]
    fn test_without_modified_stays_indeterminate() {
        let status = extract_green_status(
            &payload(json!({"green": true, "hosted_by": "Acme"})),
            FieldMapping::Legacy,
        );
        assert_eq!(status, GreenStatus::default());
    }

    #[test]
    fn test_legacy_documents_repeat_top_level_title_and_link() {
        let status = extract_green_status(
            &payload(json!({
                "modified": "2024-01-01",
                "title": "Top <b>Title</b>",
                "link": "https://top.example",
                "supporting_documents": [
                    {"title": "Doc A", "link": "https://a.example"},
                    {"title": "Doc B", "link": "https://b.example"}
                ]
            })),
            FieldMapping::Legacy,
        );
        let docs = hosting(status).supporting_documents;
        assert_eq!(docs.len(), 2);
        for doc in &docs {
            assert_eq!(doc.name, "Top Title");
            assert_eq!(doc.url, "https://top.example");
        }
    }

    #[test]
    fn test_legacy_documents_without_top_level_fields_are_empty() {
        let status = extract_green_status(
            &payload(json!({
                "modified": "2024-01-01",
                "supporting_documents": [{"title": "Doc A", "link": "https://a.example"}]
            })),
            FieldMapping::Legacy,
        );
        let docs = hosting(status).supporting_documents;
        assert_eq!(docs, vec![SupportingDocument::default()]);
    }

    #[test]
    fn test_corrected_documents_use_each_entry() {
        let status = extract_green_status(
            &payload(json!({
                "modified": "2024-01-01",
                "title": "Top Title",
                "supporting_documents": [
                    {"title": "Doc A", "link": "https://a.example"},
                    {"title": "<i>Doc B</i>", "link": "https://b.example"}
                ]
            })),
            FieldMapping::Corrected,
        );
        let docs = hosting(status).supporting_documents;
        assert_eq!(
            docs,
            vec![
                SupportingDocument {
                    name: "Doc A".to_string(),
                    url: "https://a.example".to_string(),
                },
                SupportingDocument {
                    name: "Doc B".to_string(),
                    url: "https://b.example".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_documents_from_object_and_non_collection() {
        let from_object = hosting(extract_green_status(
            &payload(json!({
                "modified": "2024-01-01",
                "supporting_documents": {"1": {"title": "Doc A", "link": "a"}}
            })),
            FieldMapping::Corrected,
        ));
        assert_eq!(from_object.supporting_documents.len(), 1);

        let from_string = hosting(extract_green_status(
            &payload(json!({"modified": "2024-01-01", "supporting_documents": "none"})),
            FieldMapping::Corrected,
        ));
        assert!(from_string.supporting_documents.is_empty());
    }
}

//! XML-aware extractor
//!
//! Walks the parsed document instead of matching text, so a value set is only
//! recognised when `valueSetDefinition` is a direct child of the field's own
//! `valueSet`, and `fields` / `recordTypes` must sit directly under the root element.

use anyhow::Result;
use log::{debug, info, warn};
use roxmltree::{Document, Node};

use super::{
    DependencyRow, Extraction, Extractor, FieldRow, LabelRow, Passes, RecordTypeRow,
};

pub struct StructuredExtractor;

impl Extractor for StructuredExtractor {
    fn extract(&self, content: &str, passes: Passes) -> Result<Extraction> {
        let doc = Document::parse(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse object XML: {}", e))?;

        debug!("Parsed object XML, root element <{}>", doc.root_element().tag_name().name());

        Ok(Extraction {
            fields: fields(&doc),
            dependencies: dependencies(&doc),
            labels: passes.labels.then(|| labels(&doc)),
            record_types: passes.record_types.then(|| record_types(&doc)),
        })
    }
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Text of the first direct child named `name`; empty text counts as missing
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
        .and_then(|n| n.text())
        .filter(|s| !s.is_empty())
}

fn dependencies(doc: &Document) -> Vec<DependencyRow> {
    let mut rows = Vec::new();

    for settings in doc.descendants().filter(|n| n.has_tag_name("valueSettings")) {
        let controlling: Vec<&str> = child_elements(settings, "controllingFieldValue")
            .map(|n| n.text().unwrap_or(""))
            .collect();

        match child_text(settings, "valueName") {
            Some(value_name) if !controlling.is_empty() => {
                for value in controlling {
                    rows.push(DependencyRow {
                        controlling_field_value: value.to_string(),
                        value_name: value_name.to_string(),
                    });
                }
            }
            _ => warn!("Skipping valueSettings element without controllingFieldValue and valueName"),
        }
    }

    info!("Extracted {} dependency rows", rows.len());
    rows
}

fn labels(doc: &Document) -> Vec<LabelRow> {
    let mut rows = Vec::new();

    for field in child_elements(doc.root_element(), "fields") {
        let definitions: Vec<Node> = child_elements(field, "valueSet")
            .flat_map(|set| child_elements(set, "valueSetDefinition"))
            .collect();
        if definitions.is_empty() {
            continue;
        }

        let Some(field_name) = child_text(field, "fullName") else {
            warn!("Skipping value set on field without fullName");
            continue;
        };

        for value in definitions.into_iter().flat_map(|d| child_elements(d, "value")) {
            match (child_text(value, "fullName"), child_text(value, "label")) {
                (Some(full_name), Some(label)) => rows.push(LabelRow {
                    field_full_name: field_name.to_string(),
                    value_full_name: full_name.to_string(),
                    label: label.to_string(),
                }),
                _ => warn!("Skipping value in field '{}' without fullName and label", field_name),
            }
        }
    }

    info!("Extracted {} label rows", rows.len());
    rows
}

fn record_types(doc: &Document) -> Vec<RecordTypeRow> {
    let mut rows = Vec::new();

    for record_type in child_elements(doc.root_element(), "recordTypes") {
        let Some(record_type_name) = child_text(record_type, "fullName") else {
            debug!("Skipping recordTypes element without fullName");
            continue;
        };

        for picklist_values in child_elements(record_type, "picklistValues") {
            let Some(picklist) = child_text(picklist_values, "picklist") else {
                debug!("Skipping picklistValues in '{}' without picklist", record_type_name);
                continue;
            };

            for value in child_elements(picklist_values, "values") {
                if let Some(full_name) = child_text(value, "fullName") {
                    rows.push(RecordTypeRow {
                        record_type: record_type_name.to_string(),
                        field: picklist.to_string(),
                        value: full_name.to_string(),
                    });
                }
            }
        }
    }

    info!("Extracted {} record type rows", rows.len());
    rows
}

fn fields(doc: &Document) -> Vec<FieldRow> {
    let rows: Vec<FieldRow> = child_elements(doc.root_element(), "fields")
        .filter_map(|field| {
            Some(FieldRow {
                full_name: child_text(field, "fullName")?.to_string(),
                label: child_text(field, "label")?.to_string(),
                field_type: child_text(field, "type")?.to_string(),
            })
        })
        .collect();

    info!("Extracted {} field rows", rows.len());
    rows
}

//! Regex block scanner
//!
//! Each pass finds non-overlapping `<tag>...</tag>` blocks (spanning lines) and then
//! pulls single-line `<inner>text</inner>` values out of the block text. Blocks are
//! never parsed as a tree, so a nested region carrying the same tag names can be
//! picked up by the wrong block. [`super::StructuredExtractor`] scopes elements properly.

use anyhow::Result;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    DependencyRow, Extraction, Extractor, FieldRow, LabelRow, Passes, RecordTypeRow,
};

static VALUE_SETTINGS_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern("valueSettings"));
static FIELDS_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern("fields"));
static VALUE_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern("value"));
static RECORD_TYPES_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern("recordTypes"));
static PICKLIST_VALUES_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern("picklistValues"));
static VALUES_BLOCK: Lazy<Regex> = Lazy::new(|| block_pattern("values"));

static CONTROLLING_FIELD_VALUE: Lazy<Regex> = Lazy::new(|| tag_pattern("controllingFieldValue"));
static VALUE_NAME: Lazy<Regex> = Lazy::new(|| tag_pattern("valueName"));
static FULL_NAME: Lazy<Regex> = Lazy::new(|| tag_pattern("fullName"));
static LABEL: Lazy<Regex> = Lazy::new(|| tag_pattern("label"));
static TYPE: Lazy<Regex> = Lazy::new(|| tag_pattern("type"));
static PICKLIST: Lazy<Regex> = Lazy::new(|| tag_pattern("picklist"));

const VALUE_SET_MARKER: &str = "<valueSet>";
const VALUE_SET_DEFINITION_MARKER: &str = "<valueSetDefinition>";

/// Lazily matches a whole `<tag>...</tag>` block, newlines included
fn block_pattern(tag: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{tag}>.*?</{tag}>")).unwrap()
}

/// Captures the text of a `<tag>text</tag>` element on a single line
fn tag_pattern(tag: &str) -> Regex {
    Regex::new(&format!(r"<{tag}>(.*?)</{tag}>")).unwrap()
}

fn blocks<'a>(pattern: &Regex, text: &'a str) -> impl Iterator<Item = &'a str> {
    pattern.find_iter(text).map(|m| m.as_str())
}

/// First occurrence of a tag; empty text counts as missing
fn first_value<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Every occurrence of a tag, empty ones included
fn all_values<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    pattern
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Extract `(controllingFieldValue, valueName)` pairs from every `<valueSettings>` block
pub fn extract_dependencies(content: &str) -> Vec<DependencyRow> {
    let mut rows = Vec::new();

    for block in blocks(&VALUE_SETTINGS_BLOCK, content) {
        let controlling_values = all_values(&CONTROLLING_FIELD_VALUE, block);
        let value_name = first_value(&VALUE_NAME, block);

        match value_name {
            Some(value_name) if !controlling_values.is_empty() => {
                for controlling in controlling_values {
                    debug!("Dependency row: {} -> {}", controlling, value_name);
                    rows.push(DependencyRow {
                        controlling_field_value: controlling.to_string(),
                        value_name: value_name.to_string(),
                    });
                }
            }
            _ => warn!("Skipping <valueSettings> block without controllingFieldValue and valueName"),
        }
    }

    info!("Extracted {} dependency rows", rows.len());
    rows
}

/// Extract value API names and labels from `<fields>` blocks that declare a value set
pub fn extract_labels(content: &str) -> Vec<LabelRow> {
    let mut rows = Vec::new();

    for block in blocks(&FIELDS_BLOCK, content) {
        if !(block.contains(VALUE_SET_MARKER) && block.contains(VALUE_SET_DEFINITION_MARKER)) {
            continue;
        }

        let Some(field_name) = first_value(&FULL_NAME, block) else {
            warn!("Skipping value set in <fields> block without fullName");
            continue;
        };

        for value_block in blocks(&VALUE_BLOCK, block) {
            let full_name = first_value(&FULL_NAME, value_block);
            let label = first_value(&LABEL, value_block);

            match (full_name, label) {
                (Some(full_name), Some(label)) => {
                    debug!("Label row: {}.{} = {}", field_name, full_name, label);
                    rows.push(LabelRow {
                        field_full_name: field_name.to_string(),
                        value_full_name: full_name.to_string(),
                        label: label.to_string(),
                    });
                }
                _ => warn!("Skipping <value> in field '{}' without fullName and label", field_name),
            }
        }
    }

    info!("Extracted {} label rows", rows.len());
    rows
}

/// Flatten `recordTypes > picklistValues > values` into one row per available value
pub fn extract_record_types(content: &str) -> Vec<RecordTypeRow> {
    let mut rows = Vec::new();

    for block in blocks(&RECORD_TYPES_BLOCK, content) {
        let record_type = first_value(&FULL_NAME, block);

        for picklist_block in blocks(&PICKLIST_VALUES_BLOCK, block) {
            let picklist = first_value(&PICKLIST, picklist_block);

            for values_block in blocks(&VALUES_BLOCK, picklist_block) {
                let value = first_value(&FULL_NAME, values_block);

                if let (Some(record_type), Some(picklist), Some(value)) = (record_type, picklist, value) {
                    debug!("Record type row: {} / {} = {}", record_type, picklist, value);
                    rows.push(RecordTypeRow {
                        record_type: record_type.to_string(),
                        field: picklist.to_string(),
                        value: value.to_string(),
                    });
                } else {
                    debug!("Skipping <values> block with missing recordType, picklist or fullName");
                }
            }
        }
    }

    info!("Extracted {} record type rows", rows.len());
    rows
}

/// Extract name, label and type of every `<fields>` block
pub fn extract_fields(content: &str) -> Vec<FieldRow> {
    let mut rows = Vec::new();

    for block in blocks(&FIELDS_BLOCK, content) {
        let full_name = first_value(&FULL_NAME, block);
        let label = first_value(&LABEL, block);
        let field_type = first_value(&TYPE, block);

        if let (Some(full_name), Some(label), Some(field_type)) = (full_name, label, field_type) {
            rows.push(FieldRow {
                full_name: full_name.to_string(),
                label: label.to_string(),
                field_type: field_type.to_string(),
            });
        } else {
            debug!("Skipping <fields> block missing fullName, label or type");
        }
    }

    info!("Extracted {} field rows", rows.len());
    rows
}

/// Regex-based extractor, the default parser mode
pub struct PatternExtractor;

impl Extractor for PatternExtractor {
    fn extract(&self, content: &str, passes: Passes) -> Result<Extraction> {
        Ok(Extraction {
            fields: extract_fields(content),
            dependencies: extract_dependencies(content),
            labels: passes.labels.then(|| extract_labels(content)),
            record_types: passes.record_types.then(|| extract_record_types(content)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_blocks_yields_nothing() {
        let content = "<CustomObject><label>Account</label></CustomObject>";
        assert!(extract_dependencies(content).is_empty());
        assert!(extract_labels(content).is_empty());
        assert!(extract_record_types(content).is_empty());
        assert!(extract_fields(content).is_empty());
    }

    #[test]
    fn test_dependency_block_with_three_controlling_values() {
        let content = r#"
        <valueSettings>
            <controllingFieldValue>North</controllingFieldValue>
            <controllingFieldValue>South</controllingFieldValue>
            <controllingFieldValue>East</controllingFieldValue>
            <valueName>Silver</valueName>
        </valueSettings>
        "#;

        let rows = extract_dependencies(content);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.value_name == "Silver"));
        let controlling: Vec<_> = rows.iter().map(|r| r.controlling_field_value.as_str()).collect();
        assert_eq!(controlling, vec!["North", "South", "East"]);
    }

    #[test]
    fn test_dependency_blocks_keep_document_order() {
        let content = r#"
        <valueSettings>
            <controllingFieldValue>West</controllingFieldValue>
            <valueName>Gold</valueName>
        </valueSettings>
        <valueSettings>
            <controllingFieldValue>East</controllingFieldValue>
            <valueName>Bronze</valueName>
        </valueSettings>
        "#;

        let rows = extract_dependencies(content);
        assert_eq!(rows[0].value_name, "Gold");
        assert_eq!(rows[1].value_name, "Bronze");
    }

    #[test]
    fn test_dependency_block_missing_parts_is_skipped() {
        let content = r#"
        <valueSettings>
            <controllingFieldValue>East</controllingFieldValue>
        </valueSettings>
        <valueSettings>
            <valueName>Gold</valueName>
        </valueSettings>
        <valueSettings>
            <controllingFieldValue>East</controllingFieldValue>
            <valueName></valueName>
        </valueSettings>
        "#;

        assert!(extract_dependencies(content).is_empty());
    }

    #[test]
    fn test_empty_controlling_value_still_yields_row() {
        let content = r#"
        <valueSettings>
            <controllingFieldValue></controllingFieldValue>
            <controllingFieldValue>West</controllingFieldValue>
            <valueName>Gold</valueName>
        </valueSettings>
        "#;

        let rows = extract_dependencies(content);
        let controlling: Vec<_> = rows.iter().map(|r| r.controlling_field_value.as_str()).collect();
        assert_eq!(controlling, vec!["", "West"]);
        assert!(rows.iter().all(|r| r.value_name == "Gold"));
    }

    #[test]
    fn test_labels_from_value_set_definition() {
        let content = r#"
        <fields>
            <fullName>Tier__c</fullName>
            <label>Tier</label>
            <type>Picklist</type>
            <valueSet>
                <valueSetDefinition>
                    <value>
                        <fullName>Gold</fullName>
                        <default>false</default>
                        <label>Gold Tier</label>
                    </value>
                    <value>
                        <fullName>Silver</fullName>
                        <default>false</default>
                        <label>Silver Tier</label>
                    </value>
                </valueSetDefinition>
            </valueSet>
        </fields>
        "#;

        let rows = extract_labels(content);
        assert_eq!(
            rows,
            vec![
                LabelRow {
                    field_full_name: "Tier__c".to_string(),
                    value_full_name: "Gold".to_string(),
                    label: "Gold Tier".to_string(),
                },
                LabelRow {
                    field_full_name: "Tier__c".to_string(),
                    value_full_name: "Silver".to_string(),
                    label: "Silver Tier".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_labels_require_value_set_definition_marker() {
        let content = r#"
        <fields>
            <fullName>Tier__c</fullName>
            <valueSet>
                <valueSetName>GlobalTiers</valueSetName>
                <value>
                    <fullName>Gold</fullName>
                    <label>Gold</label>
                </value>
            </valueSet>
        </fields>
        "#;

        assert!(extract_labels(content).is_empty());
    }

    #[test]
    fn test_label_value_without_label_is_skipped() {
        let content = r#"
        <fields>
            <fullName>Tier__c</fullName>
            <valueSet>
                <valueSetDefinition>
                    <value>
                        <fullName>Gold</fullName>
                    </value>
                    <value>
                        <fullName>Silver</fullName>
                        <label>Silver</label>
                    </value>
                </valueSetDefinition>
            </valueSet>
        </fields>
        "#;

        let rows = extract_labels(content);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value_full_name, "Silver");
    }

    #[test]
    fn test_value_settings_are_not_value_blocks() {
        let content = r#"
        <fields>
            <fullName>Tier__c</fullName>
            <valueSet>
                <controllingField>Region__c</controllingField>
                <valueSetDefinition>
                    <value>
                        <fullName>Gold</fullName>
                        <label>Gold</label>
                    </value>
                </valueSetDefinition>
                <valueSettings>
                    <controllingFieldValue>East</controllingFieldValue>
                    <valueName>Gold</valueName>
                </valueSettings>
            </valueSet>
        </fields>
        "#;

        assert_eq!(extract_labels(content).len(), 1);
        assert_eq!(extract_dependencies(content).len(), 1);
    }

    #[test]
    fn test_record_types_sum_across_picklists() {
        let content = r#"
        <recordTypes>
            <fullName>Retail</fullName>
            <active>true</active>
            <picklistValues>
                <picklist>Tier__c</picklist>
                <values>
                    <fullName>Gold</fullName>
                    <default>false</default>
                </values>
                <values>
                    <fullName>Silver</fullName>
                    <default>false</default>
                </values>
            </picklistValues>
            <picklistValues>
                <picklist>Region__c</picklist>
                <values>
                    <fullName>East</fullName>
                    <default>false</default>
                </values>
                <values>
                    <fullName>West</fullName>
                    <default>false</default>
                </values>
                <values>
                    <fullName>North</fullName>
                    <default>false</default>
                </values>
            </picklistValues>
        </recordTypes>
        "#;

        let rows = extract_record_types(content);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.record_type == "Retail"));
        assert_eq!(rows.iter().filter(|r| r.field == "Tier__c").count(), 2);
        assert_eq!(rows.iter().filter(|r| r.field == "Region__c").count(), 3);
        assert_eq!(rows[2].value, "East");
    }

    #[test]
    fn test_record_type_without_picklist_name_is_skipped() {
        let content = r#"
        <recordTypes>
            <fullName>Retail</fullName>
            <picklistValues>
                <values>
                    <fullName>Gold</fullName>
                </values>
            </picklistValues>
        </recordTypes>
        "#;

        assert!(extract_record_types(content).is_empty());
    }

    #[test]
    fn test_record_type_without_full_name_is_skipped() {
        let content = r#"
        <recordTypes>
            <active>true</active>
            <picklistValues>
                <picklist>Tier__c</picklist>
                <values>
                    <default>false</default>
                </values>
            </picklistValues>
        </recordTypes>
        "#;

        assert!(extract_record_types(content).is_empty());
    }

    #[test]
    fn test_label_value_with_empty_full_name_is_skipped() {
        let content = r#"
        <fields>
            <fullName>Tier__c</fullName>
            <valueSet>
                <valueSetDefinition>
                    <value>
                        <fullName></fullName>
                        <label>Unnamed</label>
                    </value>
                    <value>
                        <fullName>Gold</fullName>
                        <label>Gold</label>
                    </value>
                </valueSetDefinition>
            </valueSet>
        </fields>
        "#;

        let rows = extract_labels(content);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value_full_name, "Gold");
    }

    #[test]
    fn test_fields_need_all_three_attributes() {
        let content = r#"
        <fields>
            <fullName>Name__c</fullName>
            <label>Name</label>
            <type>Text</type>
        </fields>
        <fields>
            <fullName>Formula__c</fullName>
            <type>Number</type>
        </fields>
        "#;

        let rows = extract_fields(content);
        assert_eq!(
            rows,
            vec![FieldRow {
                full_name: "Name__c".to_string(),
                label: "Name".to_string(),
                field_type: "Text".to_string(),
            }]
        );
    }

    #[test]
    fn test_extractor_respects_passes() {
        let content = r#"
        <fields>
            <fullName>Tier__c</fullName>
            <label>Tier</label>
            <type>Picklist</type>
        </fields>
        "#;

        let extraction = PatternExtractor.extract(content, Passes::default()).unwrap();
        assert_eq!(extraction.fields.len(), 1);
        assert!(extraction.labels.is_none());
        assert!(extraction.record_types.is_none());

        let passes = Passes { labels: true, record_types: true };
        let extraction = PatternExtractor.extract(content, passes).unwrap();
        assert_eq!(extraction.labels, Some(Vec::new()));
        assert_eq!(extraction.record_types, Some(Vec::new()));
    }
}

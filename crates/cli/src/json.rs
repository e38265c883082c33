use std::io;

use mpcd_core::ReportGroup;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct JsonCloneSpan {
    pub(crate) start: u32,
    pub(crate) end: u32,
    pub(crate) filepath: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct JsonCloneGroup {
    pub(crate) tokens: usize,
    pub(crate) groups: Vec<JsonCloneSpan>,
}

pub(crate) fn map_report(report: Vec<ReportGroup>) -> Vec<JsonCloneGroup> {
    report
        .into_iter()
        .map(|group| JsonCloneGroup {
            tokens: group.tokens,
            groups: group
                .members
                .into_iter()
                .map(|member| JsonCloneSpan {
                    start: member.start_line,
                    end: member.end_line,
                    filepath: member.path,
                })
                .collect(),
        })
        .collect()
}

pub(crate) fn write_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::other(format!("json encode: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpcd_core::ReportSpan;

    #[test]
    fn empty_report_serializes_to_an_empty_array() {
        let mapped = map_report(Vec::new());
        assert_eq!(serde_json::to_string_pretty(&mapped).unwrap(), "[]");
    }

    #[test]
    fn groups_serialize_with_the_documented_field_names() {
        let mapped = map_report(vec![ReportGroup {
            tokens: 4,
            members: vec![ReportSpan {
                start_line: 1,
                end_line: 3,
                path: "a.c".to_string(),
            }],
        }]);
        let json = serde_json::to_string_pretty(&mapped).unwrap();
        assert_eq!(
            json,
            concat!(
                "[\n",
                "  {\n",
                "    \"tokens\": 4,\n",
                "    \"groups\": [\n",
                "      {\n",
                "        \"start\": 1,\n",
                "        \"end\": 3,\n",
                "        \"filepath\": \"a.c\"\n",
                "      }\n",
                "    ]\n",
                "  }\n",
                "]"
            )
        );
    }

    #[test]
    fn file_names_are_escaped() {
        let mapped = map_report(vec![ReportGroup {
            tokens: 2,
            members: vec![ReportSpan {
                start_line: 1,
                end_line: 1,
                path: "dir\\a \"quoted\".c".to_string(),
            }],
        }]);
        let json = serde_json::to_string_pretty(&mapped).unwrap();
        assert!(json.contains("dir\\\\a \\\"quoted\\\".c"));
    }
}

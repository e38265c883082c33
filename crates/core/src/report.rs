use crate::tokens::TokenStore;
use crate::types::CloneGroup;

/// One clone occurrence as reported: 1-based line numbers and the file
/// name the tokenizer announced. `end_line` is the line of the exclusive
/// end offset, so a region closing exactly at a line boundary reports the
/// following line, and one closing at the file's end reports the line
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSpan {
    pub start_line: u32,
    pub end_line: u32,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    pub tokens: usize,
    pub members: Vec<ReportSpan>,
}

pub fn build_report(store: &TokenStore, groups: &[CloneGroup]) -> Vec<ReportGroup> {
    groups
        .iter()
        .map(|group| ReportGroup {
            tokens: group.leader().size(),
            members: group
                .members
                .iter()
                .map(|member| {
                    let file = store.file(member.file_id());
                    ReportSpan {
                        start_line: file.line_of(member.begin() as usize) as u32 + 1,
                        end_line: file.line_of(member.end() as usize) as u32 + 1,
                        path: file.name().to_string(),
                    }
                })
                .collect(),
        })
        .collect()
}

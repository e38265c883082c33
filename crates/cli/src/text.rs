use std::mem;

use mpcd_core::{CloneGroup, CloneLocation, CloneRegion, DetectStats, ReportGroup};

/// Tab-separated clone report: per group a `<members>\t<tokens>` header and
/// one `<start>\t<end>\t<name>` line per member, groups separated by a blank
/// line. An empty report is a single newline.
pub(crate) fn format_report(groups: &[ReportGroup]) -> String {
    if groups.is_empty() {
        return "\n".to_string();
    }

    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\t{}\n", group.members.len(), group.tokens));
        for member in &group.members {
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                member.start_line, member.end_line, member.path
            ));
        }
    }
    out
}

pub(crate) fn format_detect_stats(stats: &DetectStats) -> String {
    let mut out = String::new();
    out.push_str("== clone detection ==\n");
    out.push_str(&format!(
        "input: files={} lines={} tokens={}\n",
        stats.files, stats.lines, stats.tokens
    ));
    out.push_str(&format!("seeding: sites={}\n", stats.seed_sites));
    out.push_str(&format!(
        "pruning: sites={} candidate clones={}\n",
        stats.candidate_sites, stats.candidate_clones
    ));
    out.push_str(&format!(
        "region building: groups={}\n",
        stats.candidate_groups
    ));
    out.push_str(&format!(
        "shadow removal: shadowed clones={}\n",
        stats.shadowed_clones
    ));
    out.push_str(&format!(
        "result: groups={} clones={} clone tokens={}\n",
        stats.clone_groups, stats.clones, stats.clone_tokens
    ));
    out
}

pub(crate) fn format_entity_sizes() -> String {
    let mut out = String::new();
    for (name, size) in [
        ("CloneLocation", mem::size_of::<CloneLocation>()),
        ("CloneRegion", mem::size_of::<CloneRegion>()),
        ("CloneGroup", mem::size_of::<CloneGroup>()),
        ("DetectStats", mem::size_of::<DetectStats>()),
    ] {
        out.push_str(&format!("{name}\t{size}\n"));
    }
    out
}

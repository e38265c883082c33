mod extend;
mod regions;
mod seen;
mod shadow;


use crate::tokens::TokenStore;
use crate::types::{CloneGroup, DetectOptions, DetectOutcome, DetectStats, RegionKind};

use seen::SeenMap;

pub fn find_clone_groups(store: &TokenStore, options: &DetectOptions) -> Vec<CloneGroup> {
    find_clone_groups_with_stats(store, options).result
}

pub fn find_clone_groups_with_stats(
    store: &TokenStore,
    options: &DetectOptions,
) -> DetectOutcome<Vec<CloneGroup>> {
    let clone_tokens = options.clone_tokens.max(1);
    let mut stats = DetectStats {
        files: store.file_count() as u64,
        lines: store.line_count() as u64,
        tokens: store.token_count() as u64,
        ..DetectStats::default()
    };

    let mut seen = SeenMap::build(store, clone_tokens);
    stats.seed_sites = seen.site_count() as u64;

    seen.prune();
    stats.candidate_sites = seen.site_count() as u64;
    stats.candidate_clones = seen.candidate_count() as u64;

    let mut groups = match options.regions {
        RegionKind::Line => regions::build_line_region_groups(&seen),
        RegionKind::Block => regions::build_block_region_groups(&seen),
    };
    stats.candidate_groups = groups.len() as u64;
    // The seen map dwarfs the surviving groups; release it before the
    // extension pass allocates anything else.
    drop(seen);

    extend::extend_groups(store, &mut groups);
    stats.shadowed_clones = shadow::remove_shadowed_groups(&mut groups);

    stats.clone_groups = groups.len() as u64;
    stats.clones = groups.iter().map(|g| g.members.len() as u64).sum();
    stats.clone_tokens = groups.iter().map(|g| g.leader().size() as u64).sum();

    DetectOutcome {
        result: groups,
        stats,
    }
}

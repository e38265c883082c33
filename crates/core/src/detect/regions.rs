use crate::tokens::{BLOCK_CLOSE, BLOCK_OPEN, TokenStore};
use crate::types::{CloneGroup, CloneLocation, CloneRegion};

use super::seen::SeenMap;

/// Promote every surviving seen entry to a group of line-bounded clones:
/// the seed plus the rest of the line holding its last token, kept only for
/// members whose tail matches the leader's.
pub(crate) fn build_line_region_groups(seen: &SeenMap<'_>) -> Vec<CloneGroup> {
    let mut groups = Vec::new();
    for run in seen.entries() {
        if run.len() < 2 {
            continue;
        }
        if let Some(group) = line_region_group(seen.store, seen.clone_tokens, run) {
            groups.push(group);
        }
    }
    groups
}

fn line_region_group(
    store: &TokenStore,
    clone_tokens: usize,
    run: &[CloneLocation],
) -> Option<CloneGroup> {
    let leader = &run[0];
    let leader_file = store.file(leader.file_id());
    let leader_begin = leader.begin() as usize;
    let leader_end = leader_file.line_end_of(leader_begin + clone_tokens - 1);
    let leader_tail = &leader_file.tokens()[leader_begin + clone_tokens..leader_end];

    let mut members = Vec::with_capacity(run.len());
    for location in run {
        let file = store.file(location.file_id());
        let begin = location.begin() as usize;
        let end = file.line_end_of(begin + clone_tokens - 1);
        if &file.tokens()[begin + clone_tokens..end] != leader_tail {
            continue;
        }
        members.push(CloneRegion::new(
            location.file_id(),
            location.begin(),
            (begin + clone_tokens + leader_tail.len()) as u32,
        ));
    }

    (members.len() >= 2).then_some(CloneGroup { members })
}

/// Promote every surviving seen entry to a group of brace-balanced clones.
/// A block starting one token before the seed is tried first, then one
/// within the seed window.
pub(crate) fn build_block_region_groups(seen: &SeenMap<'_>) -> Vec<CloneGroup> {
    let mut groups = Vec::new();
    for run in seen.entries() {
        if run.len() < 2 {
            continue;
        }
        if let Some(group) = [-1isize, 0]
            .iter()
            .find_map(|&lead| block_region_group(seen.store, seen.clone_tokens, run, lead))
        {
            groups.push(group);
        }
    }
    groups
}

fn block_region_group(
    store: &TokenStore,
    clone_tokens: usize,
    run: &[CloneLocation],
    lead: isize,
) -> Option<CloneGroup> {
    let leader = &run[0];
    let file = store.file(leader.file_id());
    let tokens = file.tokens();
    let begin = leader.begin() as usize;

    let search_start = begin.checked_add_signed(lead)?;
    let open = (search_start..=begin + clone_tokens).find(|&at| file.token(at) == BLOCK_OPEN)?;

    // Walk to the matching close brace; running off the file fails the
    // attempt.
    let mut depth = 0usize;
    let mut block_end = None;
    for at in open..tokens.len() {
        if tokens[at] == BLOCK_OPEN {
            depth += 1;
        } else if tokens[at] == BLOCK_CLOSE {
            depth -= 1;
            if depth == 0 {
                block_end = Some(at + 1);
                break;
            }
        }
    }
    let block_end = block_end?;
    if block_end - open < clone_tokens {
        return None;
    }

    if open >= begin && block_end <= begin + clone_tokens {
        // The balanced region sits inside the seed, so the k-gram match
        // already guarantees every member agrees on it.
        let from = (open - begin) as u32;
        let to = (block_end - begin) as u32;
        let members = run
            .iter()
            .map(|location| {
                CloneRegion::new(
                    location.file_id(),
                    location.begin() + from,
                    location.begin() + to,
                )
            })
            .collect();
        return Some(CloneGroup { members });
    }
    if block_end < begin + clone_tokens {
        // Leading-brace block that closes inside the seed; no member can
        // carry a negative extension.
        return None;
    }

    let extension = &tokens[begin + clone_tokens..block_end];
    let lead_len = lead.unsigned_abs();
    let lead_tokens = &tokens[begin - lead_len..begin];

    let mut members = Vec::with_capacity(run.len());
    for location in run {
        let member_file = store.file(location.file_id());
        let member_tokens = member_file.tokens();
        let member_begin = location.begin() as usize;
        if member_begin < lead_len {
            continue;
        }
        if &member_tokens[member_begin - lead_len..member_begin] != lead_tokens {
            continue;
        }
        let member_end = member_begin + clone_tokens + extension.len();
        if member_end > member_tokens.len() {
            continue;
        }
        if &member_tokens[member_begin + clone_tokens..member_end] != extension {
            continue;
        }
        members.push(CloneRegion::new(
            location.file_id(),
            location.begin(),
            member_end as u32,
        ));
    }

    (members.len() >= 2).then_some(CloneGroup { members })
}

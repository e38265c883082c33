use crate::types::CloneGroup;

/// Mark clones wholly covered by the clone just before them in
/// (file, begin) order, then drop groups whose every member is covered.
/// A single trailing candidate means a clone is only compared with its
/// immediate predecessor; containment by an earlier, larger clone in the
/// same file goes unnoticed.
pub(crate) fn remove_shadowed_groups(groups: &mut Vec<CloneGroup>) -> u64 {
    let mut order: Vec<(usize, usize)> = groups
        .iter()
        .enumerate()
        .flat_map(|(g, group)| (0..group.members.len()).map(move |m| (g, m)))
        .collect();
    order.sort_by(|&(ga, ma), &(gb, mb)| {
        groups[ga].members[ma].sweep_order(&groups[gb].members[mb])
    });

    let mut shadowed = 0u64;
    let mut candidate: Option<(usize, usize)> = None;
    for &(g, m) in &order {
        let current = groups[g].members[m];
        if let Some((cg, cm)) = candidate
            && current.is_shadowed_by(&groups[cg].members[cm])
        {
            groups[g].members[m].set_shadowed();
            shadowed = shadowed.saturating_add(1);
        }
        // The current clone becomes the candidate even when it was just
        // marked; a file change makes the containment test fail on its own.
        candidate = Some((g, m));
    }

    groups.retain(|group| group.members.iter().any(|member| !member.is_shadowed()));
    shadowed
}

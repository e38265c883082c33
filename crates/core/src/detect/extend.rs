use crate::tokens::{END_OF_FILE, TokenStore};
use crate::types::CloneGroup;

/// Grow each group one token at a time while every member's next token
/// agrees with the leader's, then trim each member back to the last line
/// boundary it covers.
pub(crate) fn extend_groups(store: &TokenStore, groups: &mut [CloneGroup]) {
    for group in groups.iter_mut() {
        loop {
            let Some((leader, rest)) = group.members.split_first() else {
                break;
            };
            let next = store.file(leader.file_id()).token(leader.end() as usize);
            if next == END_OF_FILE {
                // Every member would have to sit at its file's end too; the
                // trim below would undo any such advance.
                break;
            }
            if !rest
                .iter()
                .all(|member| store.file(member.file_id()).token(member.end() as usize) == next)
            {
                break;
            }
            for member in &mut group.members {
                member.extend_by_one();
            }
        }

        for member in &mut group.members {
            let file = store.file(member.file_id());
            member.set_end(file.preceding_eol_offset(member.end() as usize) as u32);
        }
    }
}

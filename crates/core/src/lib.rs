mod detect;
mod report;
mod tokens;
mod types;

pub use detect::{find_clone_groups, find_clone_groups_with_stats};

pub use report::{ReportGroup, ReportSpan, build_report};

pub use tokens::{BLOCK_CLOSE, BLOCK_OPEN, END_OF_FILE, FileTokens, Token, TokenStore};

pub use types::{
    CloneGroup, CloneLocation, CloneRegion, DEFAULT_CLONE_TOKENS, DetectOptions, DetectOutcome,
    DetectStats, RegionKind,
};

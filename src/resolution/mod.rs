//! Business rules that derive payroll attributes from a roster record.
//!
//! This module contains the position resolver (which grade and job title an
//! employee is paid under), the remuneration policy selector (which row of
//! the implementation table applies) and rank group extraction (the join key
//! for the tax and meal allowance tables). Every function here is pure.

mod position;
mod rank;
mod remuneration;

pub use position::{
    PositionBranch, ResolvedPosition, STRUCTURAL_CLASSIFICATION, STRUCTURAL_SSO_ROLE,
    resolve_hierarchical, resolve_position, resolve_structural,
};
pub use rank::{RANK_GROUP_SEPARATOR, rank_group_prefix};
pub use remuneration::{
    CANDIDATE_FUNCTIONAL_CLASSIFICATION, CANDIDATE_LECTURER_CLASSIFICATION, CANDIDATE_LEVEL_MARKER,
    CANDIDATE_STATUS_ID, FUNCTIONAL_JOB_TITLE_ID, LECTURER_SSO_ROLE, STATUS_ONLY_STATUS_ID,
    select_remun_filter,
};

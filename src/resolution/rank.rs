//! Rank group extraction.

/// Separator between the rank group and the rank letter in a rank grade.
pub const RANK_GROUP_SEPARATOR: char = '/';

/// Returns the rank group prefix of a rank grade string.
///
/// The prefix is everything before the first `/`. A string without a
/// separator is its own prefix.
///
/// # Examples
///
/// ```
/// use position_snapshot::resolution::rank_group_prefix;
///
/// assert_eq!(rank_group_prefix("III/a"), "III");
/// assert_eq!(rank_group_prefix("IX"), "IX");
/// ```
pub fn rank_group_prefix(rank_grade: &str) -> &str {
    rank_grade
        .split_once(RANK_GROUP_SEPARATOR)
        .map_or(rank_grade, |(prefix, _)| prefix)
}

//! Pairwise merge of day-off ranges.
//!
//! Two ranges that overlap or sit next to each other collapse into one range;
//! days covered by both take the higher-ranked type. Ranges separated by at
//! least one uncovered day are returned as they are, ordered by start.

use tracing::debug;

use crate::day_off::DayOff;
use crate::range::DayOffRange;

/// Merge `a` with `b`.
///
/// Returns one range when the inputs overlap or abut, two otherwise. The merged
/// range keeps the name of the input with more days; on a tie `a` wins.
pub fn merge(a: DayOffRange, b: DayOffRange) -> Vec<DayOffRange> {
    if ends_before_gap(&a, &b) {
        return vec![a, b];
    }
    if ends_before_gap(&b, &a) {
        return vec![b, a];
    }

    debug!(
        a_start = %a.start(),
        a_end = %a.end(),
        b_start = %b.start(),
        b_end = %b.end(),
        "merging ranges"
    );

    let keep_a_name = a.total_days() >= b.total_days();
    let (a_days, a_name) = a.into_parts();
    let (b_days, b_name) = b.into_parts();
    let name = if keep_a_name { a_name } else { b_name };

    let (first, second) = if b_days[0].date() < a_days[0].date() {
        (b_days, a_days)
    } else {
        (a_days, b_days)
    };

    let second_start = second[0].date();
    let split = first
        .iter()
        .position(|d| d.date() >= second_start)
        .unwrap_or(first.len());

    let mut days = Vec::with_capacity(split + second.len().max(first.len() - split));
    days.extend_from_slice(&first[..split]);
    days.extend(pair_by_position(&first[split..], &second));

    vec![DayOffRange::from_days(days, name)]
}

/// True when `earlier` ends at least two days before `later` starts, leaving
/// one or more uncovered days between them.
fn ends_before_gap(earlier: &DayOffRange, later: &DayOffRange) -> bool {
    earlier
        .end()
        .succ_opt()
        .is_some_and(|next| next < later.start())
}

/// Combine the overlapping tail of the earlier range with the later range.
///
/// Days are paired by index, not looked up by date. This only lines up
/// because both inputs are dense one-day-step sequences and `first_tail`
/// starts exactly on `second`'s first date. Unpaired days on either side are
/// kept unchanged.
fn pair_by_position(first_tail: &[DayOff], second: &[DayOff]) -> Vec<DayOff> {
    let len = first_tail.len().max(second.len());
    (0..len)
        .filter_map(|i| match (first_tail.get(i), second.get(i)) {
            (Some(f), Some(s)) => Some(f.upgraded(s.kind())),
            (Some(f), None) => Some(*f),
            (None, Some(s)) => Some(*s),
            (None, None) => None,
        })
        .collect()
}

use crate::models::{ExerciseGroup, ProgramDocument};

/// Seconds spent on each `+`-separated movement per round
pub const SECONDS_PER_MOVEMENT: u64 = 60;
/// Transition buffer added for every round
pub const BUFFER_SECONDS_PER_ROUND: u64 = 20;

/// Estimated duration of one exercise group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEstimate {
    pub level: String,
    pub group: String,
    pub exercises: usize,
    pub seconds: u64,
}

/// Estimate how long an exercise group takes, in seconds.
///
/// Every round of an exercise costs 60s per movement (`A + B` is two
/// movements) plus a 20s buffer. Rest is taken after every exercise but
/// the last. Non-positive rounds count as one round; negative rest as none.
/// The total saturates at `u64::MAX`.
pub fn estimate_group_seconds(group: &ExerciseGroup) -> u64 {
    let count = group.len();
    group
        .exercises()
        .enumerate()
        .map(|(index, exercise)| {
            let rounds = u64::try_from(exercise.rounds).ok().filter(|&r| r > 0).unwrap_or(1);
            let movements = exercise.name.split('+').count() as u64;
            let rest = if index + 1 < count {
                u64::try_from(exercise.rest_seconds).unwrap_or(0)
            } else {
                0
            };
            let work = movements
                .saturating_mul(SECONDS_PER_MOVEMENT)
                .saturating_mul(rounds);
            let buffer = BUFFER_SECONDS_PER_ROUND.saturating_mul(rounds);
            work.saturating_add(buffer).saturating_add(rest)
        })
        .fold(0u64, u64::saturating_add)
}

/// Estimate every exercise group of a program, in document order
pub fn estimate_program(document: &ProgramDocument) -> Vec<GroupEstimate> {
    document
        .iter()
        .flat_map(|(level, groups)| {
            groups.iter().map(move |(group, exercises)| GroupEstimate {
                level: level.to_string(),
                group: group.to_string(),
                exercises: exercises.len(),
                seconds: estimate_group_seconds(exercises),
            })
        })
        .collect()
}

/// Format seconds as `45s`, `2m 5s`, `3m`, `1h 20m` or `2h`
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        let minutes = seconds / 60;
        let remaining = seconds % 60;
        if remaining > 0 {
            format!("{}m {}s", minutes, remaining)
        } else {
            format!("{}m", minutes)
        }
    } else {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        if minutes > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    }
}

use thiserror::Error;

use crate::schedule::clock::MINUTES_PER_DAY;

pub const MIN_DELAY_MINUTES: i32 = 30;
pub const MAX_DELAY_MINUTES: i32 = MINUTES_PER_DAY; // 24 h
const COARSE_STEP_FROM_MINUTES: i32 = 600; // 10 h
const FINE_STEP_MINUTES: i32 = 30;
const COARSE_STEP_MINUTES: i32 = 60;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ScheduleError {
    #[error("the program would have needed to start in the past; pick a later finish time or a shorter program")]
    Infeasible,
    #[error("the required delay exceeds the 24 hour delay-start horizon")]
    DelayOutOfRange,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SchedulePlan {
    pub delay_minutes: i32,
    // Start and finish stay un-wrapped here; next-day values exceed 1439
    // until they go through the clock formatter.
    pub start_minutes: i32,
    pub finish_minutes: i32,
}

pub fn compute_schedule(
    now_minutes: i32,
    duration_minutes: i32,
    finish_minutes: i32,
) -> Result<SchedulePlan, ScheduleError> {
    let mut finish = finish_minutes;
    if finish <= now_minutes {
        // Times of day carry no date; a finish at or before "now" always
        // means tomorrow, never an error.
        finish += MINUTES_PER_DAY;
    }
    let start = finish - duration_minutes;
    let delay = start - now_minutes;

    if delay < 0 {
        return Err(ScheduleError::Infeasible);
    }
    if delay > MAX_DELAY_MINUTES {
        return Err(ScheduleError::DelayOutOfRange);
    }

    Ok(SchedulePlan {
        delay_minutes: delay,
        start_minutes: start,
        finish_minutes: finish,
    })
}

pub fn quantize_delay(delay_minutes: i32) -> i32 {
    let clamped = delay_minutes.clamp(MIN_DELAY_MINUTES, MAX_DELAY_MINUTES);
    let step = if clamped < COARSE_STEP_FROM_MINUTES {
        FINE_STEP_MINUTES
    } else {
        COARSE_STEP_MINUTES
    };
    // Round half up; an exact half-step goes to the larger multiple.
    let rounded = (clamped + step / 2) / step * step;
    rounded.clamp(MIN_DELAY_MINUTES, MAX_DELAY_MINUTES)
}

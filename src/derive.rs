// src/derive.rs
//
// Pure arithmetic over CourseAttendanceRecord lists: totals, the overall
// percentage and the bunk/attend policy. No I/O.

use std::fmt;

use serde::Serialize;

use crate::config::consts::{BUNK_TARGETS, DEFAULT_TARGET, GOOD_FROM, WARNING_FROM};
use crate::error::{HubError, Result};
use crate::model::CourseAttendanceRecord;

/// Minimum attendance percentage to stay at or above, 1..=99.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BunkTarget(u32);

impl BunkTarget {
    pub fn new(percent: u32) -> Result<Self> {
        if (1..=99).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(HubError::InvalidTarget(percent))
        }
    }

    pub fn percent(self) -> u32 { self.0 }

    /// The targets offered by the calculator.
    pub fn presets() -> [BunkTarget; 2] {
        BUNK_TARGETS.map(BunkTarget)
    }
}

impl Default for BunkTarget {
    fn default() -> Self { Self(DEFAULT_TARGET) }
}

impl fmt::Display for BunkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target {}%", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "classes", rename_all = "snake_case")]
pub enum BunkVerdict {
    /// May miss this many more classes and stay at/above target.
    Skip(u32),
    /// Must attend this many more consecutive classes to get back to target.
    Attend(u32),
}

impl BunkVerdict {
    pub fn can_skip(&self) -> bool { matches!(self, BunkVerdict::Skip(_)) }
}

impl fmt::Display for BunkVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BunkVerdict::Skip(n) => write!(f, "Bunk {n}"),
            BunkVerdict::Attend(n) => write!(f, "Attend {n} more"),
        }
    }
}

/// maxTotal = floor(present*100/target); canBunk = maxTotal - total.
/// canBunk > 0 -> Skip(canBunk). Otherwise
/// need = ceil((target*total - 100*present) / (100 - target)), which is
/// ceil((t/100*total - present) / (1 - t/100)) without float rounding.
pub fn bunk_policy(present: u32, total: u32, target: BunkTarget) -> BunkVerdict {
    let t = target.percent() as i64;
    let present = present as i64;
    let total = total as i64;

    let max_total = present * 100 / t;
    let can_bunk = max_total - total;
    if can_bunk > 0 {
        return BunkVerdict::Skip(clamp_u32(can_bunk));
    }

    let need = ceil_div(t * total - 100 * present, 100 - t);
    BunkVerdict::Attend(clamp_u32(need.max(0)))
}

/// Same as `bunk_policy` for a raw percentage; rejects 0 and 100 and up.
pub fn bunk(present: u32, total: u32, target_percent: u32) -> Result<BunkVerdict> {
    Ok(bunk_policy(present, total, BunkTarget::new(target_percent)?))
}

fn ceil_div(num: i64, den: i64) -> i64 {
    let q = num.div_euclid(den);
    if num.rem_euclid(den) == 0 { q } else { q + 1 }
}

fn clamp_u32(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub held: u32,
    pub present: u32,
    /// held - present, floored at zero.
    pub absent: u32,
}

impl Totals {
    pub fn of(records: &[CourseAttendanceRecord]) -> Self {
        let held = records.iter().map(|r| r.classes_held).fold(0u32, u32::saturating_add);
        let present = records.iter().map(|r| r.classes_present).fold(0u32, u32::saturating_add);
        Self { held, present, absent: held.saturating_sub(present) }
    }

    /// round(present / held * 100), half up; 0 when nothing was held.
    pub fn percentage(&self) -> u32 {
        if self.held == 0 {
            return 0;
        }
        let p = self.present as u64;
        let h = self.held as u64;
        ((200 * p + h) / (2 * h)) as u32
    }
}

pub fn overall_percentage(records: &[CourseAttendanceRecord]) -> u32 {
    Totals::of(records).percentage()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Good,
    Warning,
    Critical,
}

impl Standing {
    pub fn of(percent: u32) -> Self {
        if percent >= GOOD_FROM {
            Standing::Good
        } else if percent >= WARNING_FROM {
            Standing::Warning
        } else {
            Standing::Critical
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseView {
    pub course: String,
    pub held: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: String,
    pub standing: Standing,
    pub verdict: BunkVerdict,
}

/// Everything the dashboard shows, at one target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub totals: Totals,
    pub overall: u32,
    pub standing: Standing,
    pub target: BunkTarget,
    pub courses: Vec<CourseView>,
}

impl Dashboard {
    pub fn build(records: &[CourseAttendanceRecord], target: BunkTarget) -> Self {
        let totals = Totals::of(records);
        let overall = totals.percentage();
        let courses = records
            .iter()
            .map(|r| CourseView {
                course: r.course.clone(),
                held: r.classes_held,
                present: r.classes_present,
                absent: r.classes_absent,
                percentage: r.percentage.clone(),
                standing: Standing::of(r.percentage_value()),
                verdict: bunk_policy(r.classes_present, r.classes_held, target),
            })
            .collect();
        Self { totals, overall, standing: Standing::of(overall), target, courses }
    }

    /// Recompute verdicts for another target; the rest is unchanged.
    pub fn retarget(&mut self, target: BunkTarget) {
        self.target = target;
        for c in &mut self.courses {
            c.verdict = bunk_policy(c.present, c.held, target);
        }
    }
}

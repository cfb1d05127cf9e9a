// tests/bunk_policy.rs
use attendance_hub::derive::{
    bunk, bunk_policy, overall_percentage, BunkTarget, BunkVerdict, Dashboard, Standing, Totals,
};
use attendance_hub::model::CourseAttendanceRecord;
use attendance_hub::HubError;

fn rec(course: &str, held: u32, present: u32, pct: &str) -> CourseAttendanceRecord {
    CourseAttendanceRecord {
        course: course.into(),
        classes_held: held,
        classes_present: present,
        classes_absent: held.saturating_sub(present),
        percentage: pct.into(),
    }
}

#[test]
fn documented_cases_at_seventy_five() {
    assert_eq!(bunk(30, 40, 75).unwrap(), BunkVerdict::Attend(0));
    assert_eq!(bunk(38, 40, 75).unwrap(), BunkVerdict::Skip(10));
    assert_eq!(bunk(20, 40, 75).unwrap(), BunkVerdict::Attend(40));
    assert_eq!(bunk(38, 40, 75).unwrap().to_string(), "Bunk 10");
    assert_eq!(bunk(20, 40, 75).unwrap().to_string(), "Attend 40 more");
}

#[test]
fn attending_the_answer_reaches_target() {
    for target in [65, 75] {
        let t = BunkTarget::new(target).unwrap();
        for total in 0..60u32 {
            for present in 0..=total {
                match bunk_policy(present, total, t) {
                    BunkVerdict::Attend(n) => {
                        // n more attended classes get there, n - 1 do not.
                        let (p, h) = ((present + n) as u64, (total + n) as u64);
                        assert!(p * 100 >= target as u64 * h, "{present}/{total} @{target}");
                        if n > 0 {
                            let (p, h) = (p - 1, h - 1);
                            assert!(p * 100 < target as u64 * h, "{present}/{total} @{target}");
                        }
                    }
                    BunkVerdict::Skip(n) => {
                        // n more missed classes keep us at target, one more does not.
                        let (p, h) = (present as u64, (total + n) as u64);
                        assert!(p * 100 >= target as u64 * h, "{present}/{total} @{target}");
                        assert!(p * 100 < target as u64 * (h + 1), "{present}/{total} @{target}");
                    }
                }
            }
        }
    }
}

#[test]
fn present_above_held_does_not_panic() {
    let v = bunk(50, 10, 75).unwrap();
    assert!(v.can_skip());
}

#[test]
fn degenerate_targets_are_rejected() {
    assert!(matches!(bunk(1, 2, 100), Err(HubError::InvalidTarget(100))));
    assert!(matches!(bunk(1, 2, 0), Err(HubError::InvalidTarget(0))));
}

#[test]
fn overall_percentage_cases() {
    assert_eq!(overall_percentage(&[]), 0);
    assert_eq!(overall_percentage(&[rec("A", 20, 18, "90"), rec("B", 20, 10, "50")]), 70);
    // 2/3 = 66.67 rounds up, 1/8 = 12.5 rounds half up
    assert_eq!(overall_percentage(&[rec("A", 3, 2, "67")]), 67);
    assert_eq!(overall_percentage(&[rec("A", 8, 1, "13")]), 13);
}

#[test]
fn totals_floor_absent_at_zero() {
    let t = Totals::of(&[rec("A", 5, 9, "180")]);
    assert_eq!((t.held, t.present, t.absent), (5, 9, 0));
}

#[test]
fn dashboard_tolerates_disagreeing_percentages() {
    let records = vec![
        rec("Math", 20, 18, "12.5"),
        rec("Art", 0, 0, "garbage"),
        rec("Bio", 10, 2, ""),
    ];
    let mut dash = Dashboard::build(&records, BunkTarget::default());
    assert_eq!(dash.overall, 67);
    assert_eq!(dash.standing, Standing::Warning);
    // Course standing follows the portal's figure, not present/held.
    assert_eq!(dash.courses[0].standing, Standing::Critical);
    assert_eq!(dash.courses[1].verdict, BunkVerdict::Attend(0));

    dash.retarget(BunkTarget::new(65).unwrap());
    assert_eq!(dash.courses[0].verdict, BunkVerdict::Skip(7));
    assert_eq!(dash.overall, 67);
}

use rotaday_calendar::CivilDate;
use rotaday_rotation::{
    Anchor, DayClass, HolidayRange, RotationCalendar, RotationConfig, SchedulePatterns,
};

fn date(s: &str) -> CivilDate {
    CivilDate::parse_iso(s).unwrap()
}

fn calendar() -> RotationCalendar {
    let entries = ["ABCD", "EFGH", "BCDA", "FGHE", "ADCB", "EHGF", "BADC", "FEHG"]
        .iter()
        .enumerate()
        .map(|(i, p)| ((i + 1) as u8, p.to_string()));
    let config = RotationConfig::new(8, Anchor::new(date("2025-09-04"), 1))
        // 2025-10-12 is a Sunday: the label must still win over Weekend.
        .with_holiday(date("2025-10-12"), "Columbus Day")
        .with_holiday(date("2025-10-13"), "Fall holiday")
        .with_holiday_range(HolidayRange::new(
            date("2025-12-22"),
            date("2026-01-07"),
            "Winter break",
        ))
        .with_half_day(date("2025-11-26"));
    RotationCalendar::new(config, SchedulePatterns::new(8, entries).unwrap()).unwrap()
}

#[test]
fn holiday_label_beats_weekend() {
    let cal = calendar();
    assert!(cal.is_weekend(date("2025-10-12")));
    assert_eq!(
        cal.classify(date("2025-10-12")).unwrap(),
        DayClass::Holiday {
            label: "Columbus Day".to_string(),
        }
    );
}

#[test]
fn plain_weekend() {
    let cal = calendar();
    assert_eq!(cal.classify(date("2025-09-06")).unwrap(), DayClass::Weekend);
    assert_eq!(cal.classify(date("2025-09-07")).unwrap(), DayClass::Weekend);
}

#[test]
fn range_days_classify_with_the_range_label() {
    let cal = calendar();
    assert_eq!(
        cal.classify(date("2025-12-25")).unwrap(),
        DayClass::Holiday {
            label: "Winter break".to_string(),
        }
    );
}

#[test]
fn school_day_carries_cycle_day_and_pattern() {
    let cal = calendar();
    let class = cal.classify(date("2025-09-08")).unwrap();
    assert_eq!(class.cycle_day(), Some(3));
    assert_eq!(class.pattern().unwrap().as_str(), "BCDA");
    assert!(matches!(class, DayClass::School { .. }));
}

#[test]
fn half_day_is_a_school_day_with_its_own_variant() {
    let cal = calendar();
    // 2025-11-26 is a Wednesday half day.
    let class = cal.classify(date("2025-11-26")).unwrap();
    assert!(matches!(class, DayClass::HalfDay { .. }));
    assert!(class.is_school_day());
    assert!(class.cycle_day().is_some());

    // Half days advance the cycle like any other school day.
    let before = cal.cycle_day_of(date("2025-11-25")).unwrap().unwrap();
    let half = cal.cycle_day_of(date("2025-11-26")).unwrap().unwrap();
    assert_eq!(half, before % 8 + 1);
}

#[test]
fn classification_matches_school_day_predicate() {
    let cal = calendar();
    let mut current = date("2025-09-04");
    while current < date("2026-02-01") {
        let class = cal.classify(current).unwrap();
        assert_eq!(
            class.is_school_day(),
            cal.is_school_day(current),
            "mismatch at {current}"
        );
        assert_eq!(class.cycle_day().is_some(), class.is_school_day());
        current = current.next();
    }
}

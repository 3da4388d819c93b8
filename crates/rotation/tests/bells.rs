use rotaday_calendar::{CivilDate, ClockTime};
use rotaday_rotation::{Anchor, BellSchedule, RotationCalendar, RotationConfig, SchedulePatterns};

fn date(s: &str) -> CivilDate {
    CivilDate::parse_iso(s).unwrap()
}

fn time(s: &str) -> ClockTime {
    ClockTime::parse(s).unwrap()
}

fn calendar() -> RotationCalendar {
    let entries = ["ABCD", "EFGH", "BCDA", "FGHE", "ADCB", "EHGF", "BADC", "FEHG"]
        .iter()
        .enumerate()
        .map(|(i, p)| ((i + 1) as u8, p.to_string()));
    let config = RotationConfig::new(8, Anchor::new(date("2025-09-04"), 1));
    RotationCalendar::new(config, SchedulePatterns::new(8, entries).unwrap()).unwrap()
}

/// Four teaching blocks with transitions and lunch, in bell order.
fn bells() -> BellSchedule {
    BellSchedule::new("Outside scheduled hours")
        .with_block(time("08:45"), time("10:05"), 1)
        .with_label(time("10:05"), time("10:15"), "Transition")
        .with_block(time("10:15"), time("11:35"), 2)
        .with_label(time("11:35"), time("12:20"), "Lunch")
        .with_block(time("12:20"), time("13:40"), 3)
        .with_label(time("13:40"), time("13:50"), "Transition")
        .with_block(time("13:50"), time("15:10"), 4)
        .with_label(time("15:10"), time("16:30"), "Clubs")
}

#[test]
fn schedule_validates_against_patterns() {
    bells().validate(calendar().patterns()).unwrap();
}

#[test]
fn blocks_resolve_to_the_days_pattern() {
    let cal = calendar();
    let bells = bells();
    // 2025-09-05 is cycle day 2, pattern EFGH.
    let day = date("2025-09-05");
    assert_eq!(
        cal.block_label_at(day, time("09:00"), &bells).unwrap(),
        Some("E".to_string())
    );
    assert_eq!(
        cal.block_label_at(day, time("11:00"), &bells).unwrap(),
        Some("F".to_string())
    );
    assert_eq!(
        cal.block_label_at(day, time("14:30"), &bells).unwrap(),
        Some("H".to_string())
    );
}

#[test]
fn named_intervals_resolve_literally() {
    let cal = calendar();
    let bells = bells();
    let day = date("2025-09-04");
    assert_eq!(
        cal.block_label_at(day, time("12:00"), &bells).unwrap(),
        Some("Lunch".to_string())
    );
    assert_eq!(
        cal.block_label_at(day, time("15:45"), &bells).unwrap(),
        Some("Clubs".to_string())
    );
}

#[test]
fn exact_boundary_belongs_to_the_block_not_the_transition() {
    // 10:05:00 is both the end of block 1 and the start of the
    // transition; the block wins.
    let cal = calendar();
    let bells = bells();
    assert_eq!(
        cal.block_label_at(date("2025-09-04"), time("10:05:00"), &bells)
            .unwrap(),
        Some("A".to_string())
    );
    assert_eq!(
        cal.block_label_at(date("2025-09-04"), time("10:05:01"), &bells)
            .unwrap(),
        Some("Transition".to_string())
    );
}

#[test]
fn outside_hours_falls_back() {
    let cal = calendar();
    let bells = bells();
    for t in ["06:00", "08:44:59", "16:30:01", "23:59"] {
        assert_eq!(
            cal.block_label_at(date("2025-09-04"), time(t), &bells)
                .unwrap(),
            Some("Outside scheduled hours".to_string()),
            "time {t} should fall back"
        );
    }
}

#[test]
fn non_school_days_have_no_block_label() {
    let cal = calendar();
    let bells = bells();
    // Saturday.
    assert_eq!(
        cal.block_label_at(date("2025-09-06"), time("09:00"), &bells)
            .unwrap(),
        None
    );
}

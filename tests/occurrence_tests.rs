use chrono::{Duration, NaiveDate};
use chronicle_core::ledger::Frequency;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

const ALL_KNOWN: [Frequency; 9] = [
    Frequency::Once,
    Frequency::Daily,
    Frequency::Weekly,
    Frequency::Biweekly,
    Frequency::Monthly,
    Frequency::Bimonthly,
    Frequency::Quarterly,
    Frequency::Semiannual,
    Frequency::Annual,
];

#[test]
fn nothing_occurs_before_its_anchor() {
    let anchor = date(2024, 6, 15);
    for freq in ALL_KNOWN {
        assert!(
            !freq.occurs_on(anchor, date(2024, 6, 14)),
            "{freq:?} fired the day before its anchor"
        );
        assert!(
            !freq.occurs_on(anchor, date(2023, 6, 15)),
            "{freq:?} fired a year before its anchor"
        );
    }
}

#[test]
fn once_fires_only_on_the_anchor_day() {
    let anchor = date(2024, 6, 15);
    assert!(Frequency::Once.occurs_on(anchor, anchor));
    assert!(!Frequency::Once.occurs_on(anchor, date(2024, 6, 16)));
    assert!(!Frequency::Once.occurs_on(anchor, date(2025, 6, 15)));
}

#[test]
fn daily_fires_every_day_from_the_anchor() {
    let anchor = date(2024, 1, 1);
    for offset in 0..400 {
        let target = anchor + Duration::days(offset);
        assert!(
            Frequency::Daily.occurs_on(anchor, target),
            "daily missed {target}"
        );
    }
}

#[test]
fn weekly_has_a_seven_day_period() {
    let anchor = date(2024, 1, 3);
    assert!(Frequency::Weekly.occurs_on(anchor, anchor));
    assert!(Frequency::Weekly.occurs_on(anchor, date(2024, 1, 10)));
    assert!(!Frequency::Weekly.occurs_on(anchor, date(2024, 1, 9)));

    for offset in 0..90 {
        let target = anchor + Duration::days(offset);
        assert_eq!(
            Frequency::Weekly.occurs_on(anchor, target),
            Frequency::Weekly.occurs_on(anchor, target + Duration::days(7)),
            "weekly lost its period at {target}"
        );
    }
}

#[test]
fn biweekly_skips_the_odd_weeks() {
    let anchor = date(2024, 1, 5);
    assert!(Frequency::Biweekly.occurs_on(anchor, date(2024, 1, 19)));
    assert!(!Frequency::Biweekly.occurs_on(anchor, date(2024, 1, 12)));
    assert!(Frequency::Biweekly.occurs_on(anchor, date(2024, 2, 2)));
}

#[test]
fn monthly_matches_on_day_of_month() {
    let anchor = date(2024, 1, 15);
    assert!(Frequency::Monthly.occurs_on(anchor, date(2024, 2, 15)));
    assert!(Frequency::Monthly.occurs_on(anchor, date(2024, 3, 15)));
    assert!(Frequency::Monthly.occurs_on(anchor, date(2025, 7, 15)));
    assert!(!Frequency::Monthly.occurs_on(anchor, date(2024, 2, 14)));
    assert!(!Frequency::Monthly.occurs_on(anchor, date(2024, 2, 16)));
}

// Anchors on day 29-31 never match months that lack that day: the
// occurrence is skipped, not rolled forward to month end.
#[test]
fn monthly_anchor_on_day_31_skips_short_months() {
    let anchor = date(2024, 1, 31);
    assert!(!Frequency::Monthly.occurs_on(anchor, date(2024, 2, 29)));
    assert!(Frequency::Monthly.occurs_on(anchor, date(2024, 3, 31)));
    assert!(!Frequency::Monthly.occurs_on(anchor, date(2024, 4, 30)));
    assert!(Frequency::Monthly.occurs_on(anchor, date(2024, 5, 31)));
}

#[test]
fn month_stepped_classes_respect_their_stride() {
    let anchor = date(2024, 1, 10);

    assert!(Frequency::Bimonthly.occurs_on(anchor, date(2024, 3, 10)));
    assert!(!Frequency::Bimonthly.occurs_on(anchor, date(2024, 2, 10)));

    assert!(Frequency::Quarterly.occurs_on(anchor, date(2024, 4, 10)));
    assert!(Frequency::Quarterly.occurs_on(anchor, date(2024, 7, 10)));
    assert!(!Frequency::Quarterly.occurs_on(anchor, date(2024, 3, 10)));

    assert!(Frequency::Semiannual.occurs_on(anchor, date(2024, 7, 10)));
    assert!(!Frequency::Semiannual.occurs_on(anchor, date(2024, 4, 10)));

    assert!(Frequency::Annual.occurs_on(anchor, date(2025, 1, 10)));
    assert!(Frequency::Annual.occurs_on(anchor, date(2030, 1, 10)));
    assert!(!Frequency::Annual.occurs_on(anchor, date(2024, 7, 10)));
}

#[test]
fn month_stepped_classes_need_the_day_to_match_too() {
    let anchor = date(2024, 1, 10);
    assert!(!Frequency::Quarterly.occurs_on(anchor, date(2024, 4, 11)));
    assert!(!Frequency::Annual.occurs_on(anchor, date(2025, 1, 9)));
}

#[test]
fn leap_day_annual_anchor_only_fires_on_leap_years() {
    let anchor = date(2024, 2, 29);
    assert!(Frequency::Annual.occurs_on(anchor, date(2028, 2, 29)));
    // 2025 has no Feb 29, so the day-of-month can never match.
    for day in 26..=28 {
        assert!(!Frequency::Annual.occurs_on(anchor, date(2025, 2, day)));
    }
}

#[test]
fn frequency_tokens_round_trip_lowercase() {
    for (freq, token) in [
        (Frequency::Once, "\"once\""),
        (Frequency::Biweekly, "\"biweekly\""),
        (Frequency::Semiannual, "\"semiannual\""),
        (Frequency::Annual, "\"annual\""),
    ] {
        assert_eq!(serde_json::to_string(&freq).unwrap(), token);
        let back: Frequency = serde_json::from_str(token).unwrap();
        assert_eq!(back, freq);
    }
}

#[test]
fn unrecognized_token_decodes_to_unknown_and_never_occurs() {
    let freq: Frequency = serde_json::from_str("\"fortnightly\"").unwrap();
    assert_eq!(freq, Frequency::Unknown);
    let anchor = date(2024, 1, 1);
    assert!(!freq.occurs_on(anchor, anchor));
    assert!(!freq.occurs_on(anchor, date(2024, 1, 2)));
    assert!(!freq.is_recurring());
}

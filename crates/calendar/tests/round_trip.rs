use pascha_calendar::{
    CalendarSystem, Date, GREGORIAN_MAX_YEAR, JULIAN_MAX_YEAR, REVISED_JULIAN_MAX_JDN, convert,
};

/// Years covering large positive, zero, negative, leap and century cases.
const YEARS: &[i64] = &[
    -1_000_000_000_001,
    -100_000,
    -2001,
    -901,
    -400,
    -101,
    -100,
    -5,
    -4,
    -1,
    0,
    1,
    4,
    100,
    400,
    1582,
    1600,
    1900,
    2000,
    2019,
    2020,
    2100,
    2400,
    2800,
    2900,
    10_020,
    1_000_000_000_003,
];

fn last_day(system: CalendarSystem, year: i64, month: u8) -> u8 {
    system.days_in_month(year, month).unwrap()
}

#[test]
fn date_to_jdn_to_date() {
    for system in CalendarSystem::ALL {
        for &year in YEARS {
            for month in 1..=12 {
                for day in [1, last_day(system, year, month)] {
                    let date = Date::new(year, month, day);
                    let jdn = system.to_jdn(date).unwrap();
                    assert_eq!(
                        system.from_jdn(jdn).unwrap(),
                        date,
                        "{system}: {date} -> {jdn} did not round-trip"
                    );
                }
            }
        }
    }
}

#[test]
fn jdn_to_date_to_jdn() {
    let mut jdns: Vec<i64> = (-800_000..3_000_000).step_by(997).collect();
    jdns.extend([
        -1_000_000_000_000_000,
        -146_097,
        -1,
        0,
        1,
        1_721_059,
        1_721_060,
        1_721_119,
        1_721_120,
        2_458_485,
        1_000_000_000_000_000,
    ]);
    for system in CalendarSystem::ALL {
        for &jdn in &jdns {
            let date = system.from_jdn(jdn).unwrap();
            assert_eq!(
                system.to_jdn(date).unwrap(),
                jdn,
                "{system}: {jdn} -> {date} did not round-trip"
            );
        }
    }
}

#[test]
fn leap_day_count_matches_rule() {
    for system in CalendarSystem::ALL {
        for &year in YEARS {
            let feb28 = system.to_jdn(Date::new(year, 2, 28)).unwrap();
            let mar1 = system.to_jdn(Date::new(year, 3, 1)).unwrap();
            let expected = if system.is_leap_year(year) { 2 } else { 1 };
            assert_eq!(mar1 - feb28, expected, "{system} year {year}");
        }
    }
}

#[test]
fn year_lengths_sum_to_cycle() {
    let year_len = |system: CalendarSystem, year: i64| {
        system.to_jdn(Date::new(year + 1, 1, 1)).unwrap() - system.to_jdn(Date::new(year, 1, 1)).unwrap()
    };
    let total = |system, start: i64, n: i64| (start..start + n).map(|y| year_len(system, y)).sum::<i64>();
    assert_eq!(total(CalendarSystem::Julian, -3, 4), 1461);
    assert_eq!(total(CalendarSystem::Gregorian, -399, 400), 146_097);
    assert_eq!(total(CalendarSystem::RevisedJulian, -899, 900), 328_718);
}

#[test]
fn conversion_round_trips_between_all_pairs() {
    for from in CalendarSystem::ALL {
        for to in CalendarSystem::ALL {
            for &year in YEARS {
                let date = Date::new(year, 3, 15);
                let there = convert(date, from, to).unwrap();
                let back = convert(there, to, from).unwrap();
                assert_eq!(back, date, "{from} -> {to} -> {from} for {date}");
            }
        }
    }
}

#[test]
fn extreme_years_round_trip() {
    let cases = [
        (CalendarSystem::Gregorian, GREGORIAN_MAX_YEAR),
        (CalendarSystem::Gregorian, -GREGORIAN_MAX_YEAR),
        (CalendarSystem::Julian, JULIAN_MAX_YEAR),
        (CalendarSystem::Julian, -JULIAN_MAX_YEAR),
    ];
    for (system, year) in cases {
        for date in [Date::new(year, 1, 1), Date::new(year, 12, 31)] {
            let jdn = system.to_jdn(date).unwrap();
            assert_eq!(system.from_jdn(jdn).unwrap(), date, "{system} {date}");
        }
    }
}

#[test]
fn revised_julian_inverse_bound_round_trips() {
    let date = CalendarSystem::RevisedJulian
        .from_jdn(REVISED_JULIAN_MAX_JDN)
        .unwrap();
    assert_eq!(
        CalendarSystem::RevisedJulian.to_jdn(date).unwrap(),
        REVISED_JULIAN_MAX_JDN
    );
}

use pascha_calendar::{CalendarSystem, Date, gregorian_to_jdn, gregorian_to_julian};
use pascha_computus::{CalculationMethod, Computus, Feast};

/// (year, Orthodox Pascha, Western Easter), both on the Gregorian calendar.
const KNOWN: &[(i64, (u8, u8), (u8, u8))] = &[
    (1818, (4, 26), (3, 22)),
    (1961, (4, 9), (4, 2)),
    (2000, (4, 30), (4, 23)),
    (2019, (4, 28), (4, 21)),
    (2020, (4, 19), (4, 12)),
    (2021, (5, 2), (4, 4)),
    (2022, (4, 24), (4, 17)),
    (2023, (4, 16), (4, 9)),
    (2024, (5, 5), (3, 31)),
    (2025, (4, 20), (4, 20)),
    (2038, (4, 25), (4, 25)),
    (2100, (5, 2), (3, 28)),
];

fn is_sunday(date: Date) -> bool {
    // JDN 0 was a Monday.
    gregorian_to_jdn(date).unwrap().rem_euclid(7) == 6
}

// ---------------------------------------------------------------------------
// 1. known_dates
// ---------------------------------------------------------------------------
#[test]
fn known_dates() {
    for &(year, (om, od), (wm, wd)) in KNOWN {
        assert_eq!(
            Computus::Julian.pascha(year).unwrap(),
            Date::new(year, om, od),
            "Julian computus, {year}"
        );
        assert_eq!(
            Computus::Gregorian.pascha(year).unwrap(),
            Date::new(year, wm, wd),
            "Gregorian computus, {year}"
        );
    }
}

// ---------------------------------------------------------------------------
// 2. always_a_sunday
// ---------------------------------------------------------------------------
#[test]
fn always_a_sunday() {
    for year in 1..=3000 {
        for computus in Computus::ALL {
            let date = computus.pascha(year).unwrap();
            assert!(is_sunday(date), "{computus} {year}: {date} is not a Sunday");
        }
    }
}

// ---------------------------------------------------------------------------
// 3. julian_paschalion_window
// ---------------------------------------------------------------------------
#[test]
fn julian_paschalion_window() {
    // On the Julian calendar, Pascha falls between 22 March and 25 April.
    let earliest = (3, 22);
    let latest = (4, 25);
    for year in 1..=3000 {
        let julian = gregorian_to_julian(Computus::Julian.pascha(year).unwrap()).unwrap();
        let md = (julian.month(), julian.day());
        assert!(
            md >= earliest && md <= latest,
            "{year}: Julian-calendar Pascha {julian} outside window"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. gregorian_easter_window
// ---------------------------------------------------------------------------
#[test]
fn gregorian_easter_window() {
    for year in 1583..=4099 {
        let date = Computus::Gregorian.pascha(year).unwrap();
        let md = (date.month(), date.day());
        assert!(
            md >= (3, 22) && md <= (4, 25),
            "{year}: Easter {date} outside window"
        );
    }
}

// ---------------------------------------------------------------------------
// 5. orthodox_never_before_western
// ---------------------------------------------------------------------------
#[test]
fn orthodox_never_before_western() {
    for year in 1583..=2500 {
        let orthodox = Computus::Julian.pascha(year).unwrap();
        let western = Computus::Gregorian.pascha(year).unwrap();
        assert!(orthodox >= western, "{year}: {orthodox} < {western}");
    }
}

// ---------------------------------------------------------------------------
// 6. feasts_2024
// ---------------------------------------------------------------------------
#[test]
fn feasts_2024() {
    let expected: &[(Feast, Date)] = &[
        (Feast::Meatfare, Date::new(2024, 3, 10)),
        (Feast::Cheesefare, Date::new(2024, 3, 17)),
        (Feast::AshWednesday, Date::new(2024, 3, 20)),
        (Feast::Pascha, Date::new(2024, 5, 5)),
        (Feast::MidfeastPentecost, Date::new(2024, 5, 29)),
        (Feast::LeavetakingPascha, Date::new(2024, 6, 12)),
        (Feast::Ascension, Date::new(2024, 6, 13)),
        (Feast::Pentecost, Date::new(2024, 6, 23)),
    ];
    for &(feast, date) in expected {
        let method = CalculationMethod::julian().feast(feast);
        assert_eq!(method.calculate(2024).unwrap(), date, "{feast}");
    }
}

// ---------------------------------------------------------------------------
// 7. revised_julian_output_matches_gregorian_until_2800
// ---------------------------------------------------------------------------
#[test]
fn revised_julian_output_matches_gregorian_until_2800() {
    for year in 1601..2800 {
        for computus in Computus::ALL {
            let method = CalculationMethod::from(computus).in_calendar(CalendarSystem::RevisedJulian);
            assert_eq!(
                method.calculate(year).unwrap(),
                computus.pascha(year).unwrap(),
                "{computus} {year}"
            );
        }
    }
}

//! Integration tests for seasons, feasts, colours and readings.

use lit_calendar::{
    determine_season, Colour, ColourPalette, FeastKind, FeastResolver, Season, SeasonCalculator,
    Settings,
};
use lit_time::Date;
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn days(from: Date, to: Date) -> impl Iterator<Item = Date> {
    (from.linear()..=to.linear()).map(|n| Date::from_linear(n).unwrap())
}

// ─── Totality ─────────────────────────────────────────────────────────────────

#[test]
fn every_date_resolves() {
    let resolver = FeastResolver::default();
    for d in days(date(1900, 1, 1), date(2100, 12, 31)) {
        let r = resolver.compute_liturgical_info(d);
        assert_eq!(r.date, d);
        assert!(!r.week.is_empty(), "{d}");
        assert!(!r.season.is_internal(), "{d}");
        assert_eq!(r.colour_code, resolver.settings().palette.code(r.colour), "{d}");
        assert!(!r.readings.is_empty(), "{d}: {}", r.week);
        if d.weekday().is_sunday() {
            assert!(!r.name.is_empty(), "{d}");
            assert_eq!(r.readings.len(), 4, "{d}: {}", r.week);
        }
    }
}

/// Dates whose weekday readings always come from the fixed-date table.
fn has_fixed_readings(d: Date) -> bool {
    let (_, m, day) = d.ymd();
    matches!((m, day), (12, 29..=31) | (1, 2..=5) | (1, 7..=12))
}

#[test]
fn weeks_are_coherent() {
    let calc = SeasonCalculator::new();
    for sunday in days(date(1900, 1, 7), date(2100, 12, 26)).step_by(7) {
        assert!(sunday.weekday().is_sunday());
        let opening = calc.week_info(sunday);
        for offset in 1..7 {
            let d = sunday.add_days(offset).unwrap();
            let w = calc.week_info(d);
            assert_eq!(w.week_name, opening.week_name, "{d}");
            assert_eq!(w.week_start_sunday, Some(sunday), "{d}");
            if has_fixed_readings(d) {
                assert_eq!(w.weekday_reading_key, None, "{d}");
            } else if !has_fixed_readings(sunday) {
                assert_eq!(w.weekday_reading_key, opening.weekday_reading_key, "{d}");
            }
        }
    }
}

#[test]
fn first_days_of_year_one_resolve() {
    let resolver = FeastResolver::default();
    for day in 1..=6 {
        let r = resolver.compute_liturgical_info(date(1, 1, day));
        assert_eq!(r.week, "Christmas 1", "0001-01-{day:02}");
        assert!(!r.readings.is_empty(), "0001-01-{day:02}");
    }
    let first = resolver.compute_liturgical_info(Date::MIN);
    assert_eq!(first.name, "Naming and Circumcision of Jesus");
    assert_eq!(first.colour, Colour::White);
    let epiphany = resolver.compute_liturgical_info_str("0001-01-06").unwrap();
    assert_eq!(epiphany.name, "The Epiphany");
    assert_eq!(epiphany.season, Season::Epiphany);
}

// ─── Named days ───────────────────────────────────────────────────────────────

#[test]
fn easter_day_is_white() {
    let resolver = FeastResolver::default();
    for year in 1900..=2100 {
        let d = lit_time::easter_sunday(year).unwrap();
        let r = resolver.compute_liturgical_info(d);
        assert_eq!(r.name, "Easter Day", "{year}");
        assert_eq!(r.kind, Some(FeastKind::PrincipalFeast));
        assert_eq!(r.colour, Colour::White, "{year}");
        assert_eq!(r.season, Season::Easter);
    }
}

#[test]
fn rose_sundays() {
    let resolver = FeastResolver::default();
    let advent_3 = resolver.compute_liturgical_info(date(2025, 12, 14));
    assert_eq!(advent_3.name, "Advent 3");
    assert_eq!(advent_3.colour, Colour::Rose);
    assert_eq!(advent_3.colour_code, "#FFB6C1");

    let lent_4 = resolver.compute_liturgical_info(date(2025, 3, 30));
    assert_eq!(lent_4.name, "Lent 4");
    assert_eq!(lent_4.colour, Colour::Rose);

    // Weekdays of those weeks keep the season's colour
    let monday = resolver.compute_liturgical_info(date(2025, 12, 15));
    assert_eq!(monday.colour, Colour::Purple);
}

#[test]
fn holy_week() {
    let resolver = FeastResolver::default();
    let palm = resolver.compute_liturgical_info(date(2025, 4, 13));
    assert_eq!(palm.name, "Palm Sunday");
    assert_eq!(palm.colour, Colour::Red);
    assert_eq!(palm.week, "Holy Week");
    assert_eq!(palm.readings[2], "Luke 22:14-23:56");

    let good_friday = resolver.compute_liturgical_info(date(2025, 4, 18));
    assert_eq!(good_friday.name, "Good Friday");
    assert_eq!(good_friday.colour, Colour::Red);
    assert_eq!(good_friday.readings[2], "John 18:1-19:42");
}

#[test]
fn festivals_on_sundays() {
    let resolver = FeastResolver::default();
    // Holy Cross Day falls on Proper 19 in 2025
    let r = resolver.compute_liturgical_info(date(2025, 9, 14));
    assert_eq!(r.name, "Holy Cross Day");
    assert_eq!(r.colour, Colour::Red);
    assert_eq!(r.week, "Proper 19");
    assert!(r.is_high_precedence());
    // No readings of its own: the Sunday's readings apply
    assert_eq!(r.readings.len(), 4);
}

#[test]
fn martyrs_are_red() {
    let resolver = FeastResolver::default();
    let stephen = resolver.compute_liturgical_info(date(2025, 12, 26));
    assert_eq!(stephen.name, "Stephen, Deacon, First Martyr");
    assert!(stephen.martyr);
    assert_eq!(stephen.colour, Colour::Red);
    assert_eq!(stephen.season, Season::Christmas);
}

// ─── Transfers ────────────────────────────────────────────────────────────────

#[test]
fn barnabas_is_transferred_after_trinity_sunday() {
    let resolver = FeastResolver::default();
    let trinity = resolver.compute_liturgical_info(date(2017, 6, 11));
    assert_eq!(trinity.name, "Trinity Sunday");
    assert_eq!(trinity.colour, Colour::White);

    let r = resolver.compute_liturgical_info(date(2017, 6, 12));
    assert_eq!(r.name, "Barnabas the Apostle (transferred)");
    assert!(r.is_transferred());
    assert_eq!(r.colour, Colour::Red);
    assert_eq!(r.readings[1], "Acts 11:19-30");

    // Only one day later
    let r = resolver.compute_liturgical_info(date(2017, 6, 13));
    assert_eq!(r.name, "");
}

#[test]
fn transfers_can_be_switched_off() {
    let resolver = FeastResolver::with_settings(Settings::new().with_transfer_feasts(false));
    let r = resolver.compute_liturgical_info(date(2017, 6, 12));
    assert_eq!(r.name, "");
    assert_eq!(r.precedence, 1);
    assert_eq!(r.colour, Colour::Green);
}

#[test]
fn transferred_feasts_were_outranked() {
    let resolver = FeastResolver::default();
    let mut seen = 0;
    for d in days(date(2000, 1, 1), date(2030, 12, 31)) {
        let r = resolver.compute_liturgical_info(d);
        if r.is_transferred() {
            seen += 1;
            assert_ne!(r.kind, Some(FeastKind::Sunday), "{d}");
            let yesterday = resolver.compute_liturgical_info(d.add_days(-1).unwrap());
            assert!(yesterday.precedence >= r.precedence, "{d}");
        }
    }
    assert!(seen > 0);
}

// ─── Readings ─────────────────────────────────────────────────────────────────

#[test]
fn fixed_weekday_readings_after_christmas() {
    let resolver = FeastResolver::default();
    let r = resolver.compute_liturgical_info(date(2024, 12, 30));
    assert_eq!(r.name, "");
    assert_eq!(r.week, "Christmas 1");
    assert_eq!(r.weekday_reading, None);
    assert_eq!(r.colour, Colour::White);
    assert_eq!(r.readings, vec!["1 John 2:12-17", "Luke 2:36-40"]);
}

#[test]
fn pre_lent_override() {
    let resolver = FeastResolver::default();
    // Ash Wednesday 2025 is 5 March; the Sunday 17 days earlier opens
    // "3 before Lent".
    let r = resolver.compute_liturgical_info(date(2025, 2, 17));
    assert_eq!(r.week, "Epiphany 6");
    assert_eq!(r.weekday_reading.as_deref(), Some("3 before Lent"));
    assert_eq!(r.season, Season::OrdinaryTime);
    assert_eq!(determine_season(date(2025, 2, 17)), Season::PreLent);

    let r = resolver.compute_liturgical_info(date(2025, 3, 6));
    assert_eq!(r.week, "1 before Lent");
    assert_eq!(r.weekday_reading.as_deref(), Some("1 before Lent"));
    assert_eq!(r.season, Season::Lent);
}

#[test]
fn pre_lent_weekdays_have_readings() {
    let resolver = FeastResolver::default();
    // Monday and Tuesday before Ash Wednesday read from the ordinary weeks
    let monday = resolver.compute_liturgical_info(date(2025, 3, 3));
    assert_eq!(monday.weekday_reading.as_deref(), Some("1 before Lent"));
    assert_eq!(monday.readings, vec!["Tobit 1:3,2:1a-8", "Mark 12:1-12"]);
    let tuesday = resolver.compute_liturgical_info(date(2025, 3, 4));
    assert_eq!(tuesday.readings[1], "Mark 12:13-17");

    for year in [2024, 2025, 2038] {
        let ash = lit_time::easter_sunday(year).unwrap().add_days(-46).unwrap();
        for d in days(ash.add_days(-31).unwrap(), ash.add_days(-1).unwrap()) {
            let r = resolver.compute_liturgical_info(d);
            if d.weekday().is_sunday() || r.precedence >= 5 {
                continue;
            }
            let key = r.weekday_reading.as_deref().unwrap_or_default();
            assert!(key.ends_with("before Lent"), "{d}: {key}");
            assert_eq!(r.readings.len(), 2, "{d}: {key}");
        }
    }
}

#[test]
fn custom_palette() {
    let palette = ColourPalette {
        green: "#279942".into(),
        ..ColourPalette::default()
    };
    let resolver = FeastResolver::with_settings(Settings::new().with_palette(palette));
    let r = resolver.compute_liturgical_info(date(2025, 6, 22));
    assert_eq!(r.name, "Proper 7");
    assert_eq!(r.colour, Colour::Green);
    assert_eq!(r.colour_code, "#279942");
    assert_eq!(r.season_url, "https://en.wikipedia.org/wiki/Ordinary_Time");
}

#[test]
fn text_entry_point() {
    let resolver = FeastResolver::default();
    let r = resolver.compute_liturgical_info_str("2025-04-20").unwrap();
    assert_eq!(r.name, "Easter Day");
    assert!(resolver.compute_liturgical_info_str("2025-02-30").is_err());
}

proptest! {
    #[test]
    fn season_is_presented(n in date(1900, 1, 1).linear()..=date(2100, 12, 31).linear()) {
        let d = Date::from_linear(n).unwrap();
        let r = FeastResolver::default().compute_liturgical_info(d);
        prop_assert_eq!(r.season, determine_season(d).presented());
        prop_assert_eq!(r.season_url, r.season.url());
    }
}

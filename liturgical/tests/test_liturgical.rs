//! End-to-end tests through the façade.

use liturgical::calendar::{Colour, FeastKind, Season};
use liturgical::{compute_liturgical_info, compute_liturgical_info_str, Date, Error};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn a_year_of_named_days() {
    let cases = [
        ((2025, 1, 6), "The Epiphany", Colour::White, Season::Epiphany),
        ((2025, 3, 5), "Ash Wednesday", Colour::Purple, Season::Lent),
        ((2025, 4, 17), "Maundy Thursday", Colour::White, Season::HolyWeek),
        ((2025, 4, 20), "Easter Day", Colour::White, Season::Easter),
        ((2025, 5, 29), "Ascension Day", Colour::White, Season::Easter),
        ((2025, 6, 8), "Pentecost", Colour::Red, Season::Pentecost),
        ((2025, 6, 15), "Trinity Sunday", Colour::White, Season::Trinity),
        ((2025, 11, 1), "All Saints' Day", Colour::White, Season::Trinity),
        ((2025, 11, 23), "1 before Advent", Colour::Green, Season::OrdinaryTime),
        ((2025, 11, 30), "Andrew the Apostle", Colour::Red, Season::Advent),
        ((2025, 12, 7), "Advent 2", Colour::Purple, Season::Advent),
        ((2025, 12, 25), "Christmas Day", Colour::White, Season::Christmas),
    ];
    for ((y, m, d), name, colour, season) in cases {
        let r = compute_liturgical_info(date(y, m, d));
        assert_eq!(r.name, name, "{y}-{m:02}-{d:02}");
        assert_eq!(r.colour, colour, "{y}-{m:02}-{d:02}");
        assert_eq!(r.season, season, "{y}-{m:02}-{d:02}");
    }
}

#[test]
fn ordinary_weekday() {
    let r = compute_liturgical_info_str("2025-06-24").unwrap();
    assert_eq!(r.name, "Birth of John the Baptist");
    assert_eq!(r.kind, Some(FeastKind::Festival));

    let r = compute_liturgical_info_str("2025-07-01").unwrap();
    assert_eq!(r.name, "");
    assert_eq!(r.precedence, 1);
    assert_eq!(r.kind, None);
    assert_eq!(r.colour, Colour::Green);
    assert_eq!(r.colour_code, "#00FF00");
    assert!(!r.is_high_precedence());
    // Trinity weekdays read from the ordinary weeks
    assert_eq!(r.weekday_reading.as_deref(), Some("Trinity 3"));
    assert_eq!(r.readings, vec!["Tobit 2:9-14", "Mark 12:13-17"]);
}

#[test]
fn malformed_input() {
    assert!(matches!(compute_liturgical_info_str("2025/06/22"), Err(Error::Parse(_))));
    assert!(compute_liturgical_info_str("2025-02-29").is_err());
    assert!(compute_liturgical_info_str("").is_err());
}

#[cfg(feature = "serde")]
#[test]
fn result_serialises() {
    let r = compute_liturgical_info(date(2025, 12, 14));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["name"], "Advent 3");
    assert_eq!(json["colour"], "rose");
    assert_eq!(json["colourcode"], "#FFB6C1");
    assert!(json.get("colour_code").is_none());
    assert_eq!(json["date"], "2025-12-14");
    let back: liturgical::LiturgicalResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}

use super::{FeastDef, FeastKind, MovableFeast};
use crate::colour::Colour;

const fn movable(
    easter_offset: i32,
    name: &'static str,
    kind: FeastKind,
    colour: Option<Colour>,
    readings: &'static [&'static str],
) -> MovableFeast {
    MovableFeast {
        easter_offset,
        feast: FeastDef { name, kind, colour, martyr: false, readings },
    }
}

/// Feasts that move with Easter, by offset from Easter Sunday.
pub static MOVABLE_FEASTS: &[MovableFeast] = &[
    movable(
        -46,
        "Ash Wednesday",
        FeastKind::PrincipalHolyDay,
        Some(Colour::Purple),
        &[
            "Joel 2:1-2,12-17",
            "2 Corinthians 5:20b-6:10",
            "Matthew 6:1-6,16-21",
            "Psalm 51:1-18",
        ],
    ),
    movable(-7, "Palm Sunday", FeastKind::Sunday, Some(Colour::Red), &[]),
    movable(
        -3,
        "Maundy Thursday",
        FeastKind::PrincipalHolyDay,
        Some(Colour::White),
        &[
            "Exodus 12:1-4,11-14",
            "1 Corinthians 11:23-26",
            "John 13:1-17,31b-35",
            "Psalm 116:1,10-17",
        ],
    ),
    movable(
        -2,
        "Good Friday",
        FeastKind::PrincipalHolyDay,
        Some(Colour::Red),
        &["Isaiah 52:13-53:12", "Hebrews 10:16-25", "John 18:1-19:42", "Psalm 22"],
    ),
    movable(0, "Easter Day", FeastKind::PrincipalFeast, None, &[]),
    movable(
        39,
        "Ascension Day",
        FeastKind::PrincipalFeast,
        None,
        &["Acts 1:1-11", "Ephesians 1:15-23", "Luke 24:44-53", "Psalm 47"],
    ),
    movable(49, "Pentecost", FeastKind::PrincipalFeast, Some(Colour::Red), &[]),
    movable(56, "Trinity Sunday", FeastKind::PrincipalFeast, None, &[]),
    movable(
        60,
        "Day of Thanksgiving for Holy Communion",
        FeastKind::Festival,
        Some(Colour::White),
        &["Genesis 14:18-20", "1 Corinthians 11:23-26", "John 6:51-58", "Psalm 116:10-17"],
    ),
];
